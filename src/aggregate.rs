//! Dashboard totals for a metrics series.

use serde::Serialize;

use crate::model::MetricPoint;

/// The three headline numbers shown for a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTotals {
    pub new_subs: u64,
    pub cancellations: u64,
    /// Net sum of `new_subs - cancellations` over every month. Signed because
    /// caller-supplied months may cancel more than they gain.
    pub active: i64,
}

impl SubscriptionTotals {
    /// Sums a whole series. An empty series gives all zeros.
    pub fn from_series(series: &[MetricPoint]) -> Self {
        series.iter().fold(Self::default(), |totals, point| Self {
            new_subs: totals.new_subs + u64::from(point.new_subs),
            cancellations: totals.cancellations + u64::from(point.cancellations),
            active: totals.active + i64::from(point.new_subs) - i64::from(point.cancellations),
        })
    }
}

impl From<&[MetricPoint]> for SubscriptionTotals {
    fn from(series: &[MetricPoint]) -> Self {
        Self::from_series(series)
    }
}
