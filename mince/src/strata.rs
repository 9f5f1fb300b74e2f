/**
 * file: strata.rs
 * desc: Low, medium and high abundance levels derived from a sample's total abundance. These
 *       anchor the abundances assigned to spike-in genomes.
 */
use shared::util;

use crate::table::AbundanceTable;

pub const LOW_FRACTION: f64 = 0.01;
pub const MEDIUM_FRACTION: f64 = 0.05;
pub const HIGH_FRACTION: f64 = 0.25;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stratum {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AbundanceStrata {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
}

impl AbundanceStrata {
    /**
     * Derive strata from a single sample's abundances. Each level is a fixed fraction of the
     * total abundance, truncated toward zero.
     */
    pub fn from_abundances(abundances: &[f64]) -> Self {
        AbundanceStrata {
            low: util::truncated_fraction(abundances, LOW_FRACTION),
            medium: util::truncated_fraction(abundances, MEDIUM_FRACTION),
            high: util::truncated_fraction(abundances, HIGH_FRACTION),
        }
    }

    pub fn value(&self, stratum: Stratum) -> u64 {
        match stratum {
            Stratum::Low => self.low,
            Stratum::Medium => self.medium,
            Stratum::High => self.high,
        }
    }
}

/**
 * Strata for every retained sample, in the table's sample order. Must be called before any
 * spike-in abundances are added.
 */
pub fn sample_strata(table: &AbundanceTable) -> Vec<AbundanceStrata> {
    table
        .samples()
        .iter()
        .map(|s| AbundanceStrata::from_abundances(&s.abundances))
        .collect()
}

#[cfg(test)]
#[path = "tests/strata_tests.rs"]
mod strata_tests;
