//! Synthetic monthly metrics for "quick submission".
//!
//! A caller who wants a product without typing in its history asks the
//! [`SeriesGenerator`] for a series, then hands the resulting draft to `create`.
//! The generator never touches the repository itself.
//!
//! The series starts at zero and only grows: each month's new subscriptions and
//! cancellations are drawn from a window starting at the previous month's value,
//! and cancellations are capped at that month's new subscriptions. The result
//! looks like a product gaining users over time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::model::{MetricPoint, ProductDraft};

/// Longest series a policy may ask for: one hundred years of months.
pub const MAX_SERIES_LEN: usize = 1200;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tunable knobs for series generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesPolicy {
    /// Shortest series, in months. Must be at least 1.
    pub min_len: usize,
    /// Longest series, in months. Inclusive, at most [`MAX_SERIES_LEN`].
    pub max_len: usize,
    /// Widest month-over-month rise in new subscriptions.
    pub new_subs_modifier: u32,
    /// Widest month-over-month rise in cancellations.
    pub cancellations_modifier: u32,
    /// Year of the first month; the series always starts in January.
    pub anchor_year: i32,
}

impl Default for SeriesPolicy {
    fn default() -> Self {
        Self {
            min_len: 11,
            max_len: 12,
            new_subs_modifier: 50,
            cancellations_modifier: 25,
            anchor_year: 2023,
        }
    }
}

impl SeriesPolicy {
    /// Checks that the length bounds describe a non-empty range of positive lengths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len == 0 {
            return Err(ConfigError::InvalidSeriesPolicy(
                "min_len must be at least 1".to_string(),
            ));
        }
        if self.min_len > self.max_len {
            return Err(ConfigError::InvalidSeriesPolicy(format!(
                "min_len ({}) exceeds max_len ({})",
                self.min_len, self.max_len
            )));
        }
        if self.max_len > MAX_SERIES_LEN {
            return Err(ConfigError::InvalidSeriesPolicy(format!(
                "max_len ({}) exceeds {MAX_SERIES_LEN}",
                self.max_len
            )));
        }
        Ok(())
    }
}

/// Generates plausible, upward-trending metric series.
///
/// Construction validates the policy, so generation itself cannot fail and always
/// returns at least one point.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    policy: SeriesPolicy,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self {
            policy: SeriesPolicy::default(),
        }
    }
}

impl SeriesGenerator {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeriesPolicy`] if the policy's length bounds
    /// are unusable.
    pub fn new(policy: SeriesPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &SeriesPolicy {
        &self.policy
    }

    /// Generates a series using the supplied RNG.
    ///
    /// For every consecutive pair of points, `new_subs` and `cancellations` never
    /// decrease, and each point has `cancellations <= new_subs`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<MetricPoint> {
        let len = rng.random_range(self.policy.min_len..=self.policy.max_len);
        let mut series = Vec::with_capacity(len);

        let mut prev_new_subs: u32 = 0;
        let mut prev_cancellations: u32 = 0;

        for index in 0..len {
            let drawn = rng.random_range(
                prev_new_subs..=prev_new_subs.saturating_add(self.policy.new_subs_modifier),
            );
            let new_subs = drawn.max(prev_new_subs);

            let drawn = rng.random_range(
                prev_cancellations
                    ..=prev_cancellations.saturating_add(self.policy.cancellations_modifier),
            );
            let cancellations = drawn.max(prev_cancellations).min(new_subs);

            series.push(MetricPoint {
                month_year: month_label(self.policy.anchor_year, index),
                new_subs,
                cancellations,
            });

            prev_new_subs = new_subs;
            prev_cancellations = cancellations;
        }

        series
    }

    /// Generates a reproducible series: the same seed always yields the same points.
    pub fn generate_seeded(&self, seed: u64) -> Vec<MetricPoint> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Builds a quick-submission payload: the given name plus a generated series.
    pub fn quick_draft<R: Rng>(&self, product_name: impl Into<String>, rng: &mut R) -> ProductDraft {
        ProductDraft::new(product_name, self.generate(rng))
    }
}

/// Label for the `index`-th month after January of `anchor_year`, e.g. `"Mar 2023"`.
fn month_label(anchor_year: i32, index: usize) -> String {
    let years_on = i32::try_from(index / 12).unwrap_or(i32::MAX);
    let year = anchor_year.saturating_add(years_on);
    format!("{} {:04}", MONTHS[index % 12], year)
}
