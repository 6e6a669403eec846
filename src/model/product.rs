//! Analytics products and their monthly subscription history.
//!
//! # Resource Framework
//! [`Product`] implements the [`Record`](crate::framework::Record) trait,
//! allowing it to be stored in a [`Repository`](crate::repository::Repository)
//! and served by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Field names serialize in camelCase (`productName`, `subscriptionMetrics`, ...)
//! so a transport layer can hand records out unchanged.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use crate::framework::Record;

/// Opaque, immutable identifier assigned to a record when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One month's subscription counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPoint {
    /// Month label, e.g. `"Jan 2024"`.
    pub month_year: String,
    pub new_subs: u32,
    pub cancellations: u32,
}

impl MetricPoint {
    pub fn new(month_year: impl Into<String>, new_subs: u32, cancellations: u32) -> Self {
        Self {
            month_year: month_year.into(),
            new_subs,
            cancellations,
        }
    }
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub product_name: String,
    /// Insertion order is chronological order; nothing here sorts or validates it.
    pub subscription_metrics: Vec<MetricPoint>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the repository)
    /// * `product_name` - Display label
    /// * `subscription_metrics` - Monthly history, oldest first
    pub fn new(
        id: impl Into<RecordId>,
        product_name: impl Into<String>,
        subscription_metrics: Vec<MetricPoint>,
    ) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            subscription_metrics,
        }
    }
}

/// Every field of a [`Product`] except its id.
///
/// Used for both creation and update. Updates are total replaces, so a draft
/// always carries the full field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_name: String,
    #[serde(default)]
    pub subscription_metrics: Vec<MetricPoint>,
}

impl ProductDraft {
    pub fn new(product_name: impl Into<String>, subscription_metrics: Vec<MetricPoint>) -> Self {
        Self {
            product_name: product_name.into(),
            subscription_metrics,
        }
    }
}

impl Record for Product {
    const KIND: &'static str = "Product";
    type Draft = ProductDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: ProductDraft) -> Self {
        Self {
            id,
            product_name: draft.product_name,
            subscription_metrics: draft.subscription_metrics,
        }
    }
}
