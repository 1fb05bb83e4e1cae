// ============================================================================
// Scale Table
// Power-of-1000 magnitude tiers and their label words
// ============================================================================

use crate::numeric::{OutOfRange, WordsResult};
use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest count a single scale group can carry.
pub const MAX_GROUP: u16 = 999;

/// Upper bound on the number of groups any table can produce
/// (TRILLION, BILLION, MILLION, THOUSAND and the trailing units).
pub const MAX_GROUPS: usize = 5;

/// One magnitude tier: values at or above `threshold` are named with `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub threshold: u64,
    pub label: &'static str,
}

/// A non-zero three-digit group produced by decomposing an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleGroup {
    /// Count in [1, 999]
    pub count: u16,
    /// Scale label, or `None` for the trailing units group
    pub label: Option<&'static str>,
}

const BILLION_SCALES: [Scale; 3] = [
    Scale {
        threshold: 1_000_000_000,
        label: "BILLION",
    },
    Scale {
        threshold: 1_000_000,
        label: "MILLION",
    },
    Scale {
        threshold: 1_000,
        label: "THOUSAND",
    },
];

const TRILLION_SCALES: [Scale; 4] = [
    Scale {
        threshold: 1_000_000_000_000,
        label: "TRILLION",
    },
    BILLION_SCALES[0],
    BILLION_SCALES[1],
    BILLION_SCALES[2],
];

/// Ordered scale tiers, descending by threshold.
///
/// Tables are immutable statics; callers only ever borrow them.
#[derive(Debug, PartialEq, Eq)]
pub struct ScaleTable {
    scales: &'static [Scale],
}

static STANDARD_TABLE: ScaleTable = ScaleTable {
    scales: &BILLION_SCALES,
};

static TRILLION_TABLE: ScaleTable = ScaleTable {
    scales: &TRILLION_SCALES,
};

impl ScaleTable {
    /// THOUSAND, MILLION, BILLION. Ceiling 999,999,999,999.
    pub fn standard() -> &'static Self {
        &STANDARD_TABLE
    }

    /// Standard tiers plus TRILLION. Ceiling 999,999,999,999,999.
    pub fn with_trillion() -> &'static Self {
        &TRILLION_TABLE
    }

    /// Tiers in descending threshold order.
    pub fn scales(&self) -> &'static [Scale] {
        self.scales
    }

    /// Largest integer this table can name: 999 of the highest tier plus
    /// a full remainder.
    pub fn max_value(&self) -> u64 {
        match self.scales.first() {
            Some(top) => top.threshold * (u64::from(MAX_GROUP) + 1) - 1,
            None => u64::from(MAX_GROUP),
        }
    }

    /// Split `n` into its non-zero scale groups, highest tier first.
    ///
    /// Zero-valued groups are skipped, so 1,000,001 yields
    /// `[(1, MILLION), (1, units)]`. Zero yields no groups.
    ///
    /// # Errors
    /// Returns `BeyondScale` if `n` exceeds `self.max_value()`.
    pub fn decompose(&self, n: u64) -> WordsResult<ArrayVec<ScaleGroup, MAX_GROUPS>> {
        let max = self.max_value();
        if n > max {
            return Err(OutOfRange::BeyondScale { value: n, max });
        }

        let mut groups = ArrayVec::new();
        let mut rest = n;

        for scale in self.scales {
            if rest >= scale.threshold {
                groups.push(ScaleGroup {
                    count: (rest / scale.threshold) as u16,
                    label: Some(scale.label),
                });
                rest %= scale.threshold;
            }
        }

        if rest > 0 {
            groups.push(ScaleGroup {
                count: rest as u16,
                label: None,
            });
        }

        tracing::trace!(n, groups = groups.len(), "decomposed into scale groups");
        Ok(groups)
    }
}

// ============================================================================
// Scale Tier Selection
// ============================================================================

/// Which scale vocabulary a converter uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleTier {
    /// Up to BILLION; one trillion and above is out of range
    #[default]
    Billion,

    /// Adds a TRILLION tier
    Trillion,
}

impl ScaleTier {
    pub fn table(self) -> &'static ScaleTable {
        match self {
            ScaleTier::Billion => ScaleTable::standard(),
            ScaleTier::Trillion => ScaleTable::with_trillion(),
        }
    }
}
