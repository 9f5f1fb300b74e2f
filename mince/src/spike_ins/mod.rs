/**
 * file: mod.rs
 * desc: Spike-in module which injects genomes with controlled abundance patterns across
 *       samples.
 */
mod base;
mod different_order;
mod same_genus;

use rand::RngCore;
use tracing::info;

pub use self::base::{SpikeIn, SpikeInScenario, SPIKE_IN_SAMPLES};
pub use self::different_order::DifferentOrderSpikeIn;
pub use self::same_genus::SameGenusSpikeIn;

use crate::error::MinceError;
use crate::strata::AbundanceStrata;
use crate::taxonomy::TaxonPool;

/**
 * Run each scenario in turn, each one drawing from the pool left over by the previous one.
 *
 * args
 *  scenarios: enabled scenarios, in execution order
 *  pool:      genomes available for selection
 *  strata:    abundance strata for each sample, in canonical sample order
 *  rng:       shared random source
 *
 * returns
 *  spike-ins in scenario order and the depleted pool
 */
pub fn plan_spike_ins<T: SpikeInScenario + ?Sized>(
    scenarios: &[Box<T>],
    pool: TaxonPool,
    strata: &[AbundanceStrata],
    rng: &mut dyn RngCore,
) -> Result<(Vec<SpikeIn>, TaxonPool), MinceError> {
    if scenarios.is_empty() {
        return Ok((Vec::new(), pool));
    }

    if strata.len() != SPIKE_IN_SAMPLES {
        return Err(MinceError::SpikeInSampleCount(strata.len()));
    }

    scenarios
        .iter()
        .try_fold((Vec::new(), pool), |(mut spike_ins, pool), scenario| {
            let before = pool.len();
            let (mut planned, pool) = scenario.plan(pool, strata, &mut *rng)?;

            info!(
                "Spike-in {}: {}, removed {} genomes from the pool",
                scenario.name(),
                planned
                    .iter()
                    .map(|s| s.taxon.to_string())
                    .collect::<Vec<String>>()
                    .join(", "),
                before - pool.len()
            );

            spike_ins.append(&mut planned);

            Ok((spike_ins, pool))
        })
}

#[cfg(test)]
#[path = "../tests/spike_in_tests.rs"]
mod spike_in_tests;
