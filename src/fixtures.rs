//! Stubbed starter products.
//!
//! A fresh install shows these on the dashboard when
//! [`AppConfig::seed_stub_products`](crate::config::AppConfig::seed_stub_products)
//! is set. The ids are fixed so links to them survive restarts.

use crate::model::{MetricPoint, Product};

const STUBS: [(&str, &str); 7] = [
    ("ccc3f8c6-cd6a-43ad-8af1-0aae0ce34622", "Stubbed Product Alpha"),
    ("2099affa-5c33-4ad6-b307-17a9785a5d21", "Stubbed Product Beta"),
    ("3c38b430-d0bb-49bf-892b-167dca396a0d", "Stubbed Product Gamma"),
    ("47706dc4-7ec9-4e81-8ca7-f4de36e1c7f8", "Stubbed Product Sigma"),
    ("94ceadef-9a05-41e9-b821-edc6f5e60fe8", "Stubbed Product Omega"),
    ("38d38d6e-8b8a-43df-955e-dc02fe75a74a", "Stubbed Product Omega"),
    ("f0b48e04-1a94-4c5c-8d9a-9645ef20d14e", "Stubbed Product Zeta"),
];

/// The seven starter products. The k-th (from 1) has one `"Jan 2023"` month
/// with `12 * k` new subscriptions and `k` cancellations.
pub fn stub_products() -> Vec<Product> {
    (1u32..)
        .zip(STUBS)
        .map(|(k, (id, name))| {
            Product::new(id, name, vec![MetricPoint::new("Jan 2023", 12 * k, k)])
        })
        .collect()
}
