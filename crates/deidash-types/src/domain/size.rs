use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal award size bucket.
///
/// The five buckets partition `[0, ∞)` into half-open ranges; each lower
/// bound belongs to its own bucket, so exactly `10_000.0` is `Small`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    #[serde(rename = "Micro (< $10K)")]
    Micro,
    #[serde(rename = "Small ($10K - $100K)")]
    Small,
    #[serde(rename = "Medium ($100K - $1M)")]
    Medium,
    #[serde(rename = "Large ($1M - $10M)")]
    Large,
    #[serde(rename = "Major (> $10M)")]
    Major,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 5] = [
        SizeCategory::Micro,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::Major,
    ];

    pub fn from_amount(amount: f64) -> Self {
        if amount < 10_000.0 {
            SizeCategory::Micro
        } else if amount < 100_000.0 {
            SizeCategory::Small
        } else if amount < 1_000_000.0 {
            SizeCategory::Medium
        } else if amount < 10_000_000.0 {
            SizeCategory::Large
        } else {
            SizeCategory::Major
        }
    }

    /// Inclusive lower bound of the bucket in dollars
    pub fn lower_bound(&self) -> f64 {
        match self {
            SizeCategory::Micro => 0.0,
            SizeCategory::Small => 10_000.0,
            SizeCategory::Medium => 100_000.0,
            SizeCategory::Large => 1_000_000.0,
            SizeCategory::Major => 10_000_000.0,
        }
    }

    /// Exclusive upper bound, `None` for the open-ended top bucket
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            SizeCategory::Major => None,
            other => {
                let next = SizeCategory::ALL[*other as usize + 1];
                Some(next.lower_bound())
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Micro => "Micro (< $10K)",
            SizeCategory::Small => "Small ($10K - $100K)",
            SizeCategory::Medium => "Medium ($100K - $1M)",
            SizeCategory::Large => "Large ($1M - $10M)",
            SizeCategory::Major => "Major (> $10M)",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SizeCategory::Micro => "micro",
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::Major => "major",
        }
    }

    /// Accepts either the display label or the short key, case-insensitively.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(text) || c.key().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
