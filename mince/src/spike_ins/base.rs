/**
 * file: base.rs
 * desc: Base spike-in scenario trait which all spike-in scenarios implement, and the spike-in
 *       entries they produce.
 */
use rand::seq::index;
use rand::RngCore;

use crate::error::MinceError;
use crate::strata::{AbundanceStrata, Stratum};
use crate::taxonomy::{TaxonLevel, TaxonPool, TaxonRecord};

/**
 * Spike-in scenarios assign fixed abundance patterns across exactly this many samples.
 */
pub const SPIKE_IN_SAMPLES: usize = 3;

/**
 * A stratum per sample, in canonical sample order.
 */
pub type CoveragePattern = [Stratum; SPIKE_IN_SAMPLES];

/**
 * A genome injected into every sample at a prescribed abundance.
 */
#[derive(Debug)]
pub struct SpikeIn {
    // Name of the scenario that selected this genome
    pub scenario: &'static str,
    pub taxon: TaxonRecord,
    // One abundance per sample, in canonical sample order
    pub abundances: Vec<f64>,
}

impl SpikeIn {
    /**
     * Resolve a coverage pattern into per-sample abundances using each sample's strata.
     */
    pub fn new(
        scenario: &'static str,
        taxon: TaxonRecord,
        pattern: &CoveragePattern,
        strata: &[AbundanceStrata],
    ) -> Self {
        SpikeIn {
            scenario,
            taxon,
            abundances: pattern
                .iter()
                .zip(strata.iter())
                .map(|(stratum, s)| s.value(*stratum) as f64)
                .collect(),
        }
    }
}

pub trait SpikeInScenario {
    // Short name used in logs
    fn name(&self) -> &'static str;
    // Select genomes from the pool, assign them abundances and remove them, along with any
    // related genomes, from the pool. Returns the spike-ins and the depleted pool.
    fn plan(
        &self,
        pool: TaxonPool,
        strata: &[AbundanceStrata],
        rng: &mut dyn RngCore,
    ) -> Result<(Vec<SpikeIn>, TaxonPool), MinceError>;
}

impl<T: ?Sized> SpikeInScenario for Box<T>
where
    T: SpikeInScenario,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn plan(
        &self,
        pool: TaxonPool,
        strata: &[AbundanceStrata],
        rng: &mut dyn RngCore,
    ) -> Result<(Vec<SpikeIn>, TaxonPool), MinceError> {
        (**self).plan(pool, strata, rng)
    }
}

/**
 * Pick `count` distinct group names uniformly at random from all groups at the given level
 * having at least `minimum` members.
 */
pub fn choose_groups(
    pool: &TaxonPool,
    level: TaxonLevel,
    minimum: usize,
    count: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<String>, MinceError> {
    let mut groups = pool.groups_with_at_least(level, minimum);

    if groups.len() < count {
        return Err(MinceError::NoQualifyingGroup {
            level: level.as_str(),
            needed: count,
            minimum,
            found: groups.len(),
        });
    }

    let picks = index::sample(rng, groups.len(), count).into_vec();

    Ok(picks
        .into_iter()
        .map(|i| std::mem::take(&mut groups[i]))
        .collect())
}

/**
 * Move `count` distinct taxa, chosen uniformly at random, out of the members of the named group.
 */
pub fn choose_taxa(
    level: TaxonLevel,
    name: &str,
    members: Vec<TaxonRecord>,
    count: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<TaxonRecord>, MinceError> {
    if members.len() < count {
        return Err(MinceError::GroupTooSmall {
            level: level.as_str(),
            name: name.to_string(),
            needed: count,
            found: members.len(),
        });
    }

    let mut slots = members.into_iter().map(Some).collect::<Vec<Option<TaxonRecord>>>();

    Ok(index::sample(rng, slots.len(), count)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect())
}

#[cfg(test)]
#[path = "../tests/spike_in_base_tests.rs"]
mod spike_in_base_tests;
