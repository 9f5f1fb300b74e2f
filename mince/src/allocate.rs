/**
 * file: allocate.rs
 * desc: Allocate abundances to genomes for every sample: derive strata, plan spike-ins, then
 *       randomly assign the remaining genomes to the table's OTUs.
 */
use rand::RngCore;
use shared::util;
use tracing::{debug, info};

use crate::assign::{self, RandomAssignment};
use crate::error::MinceError;
use crate::spike_ins::{self, SpikeIn, SpikeInScenario};
use crate::strata::{self, AbundanceStrata};
use crate::table::{AbundanceTable, Sample};
use crate::taxonomy::{TaxonPool, TaxonRecord};

/**
 * The complete result of a run. Nothing here is written to disk until every stage succeeded.
 */
#[derive(Debug)]
pub struct Allocation {
    // Retained samples and their empirical abundances, in canonical order
    pub samples: Vec<Sample>,
    pub strata: Vec<AbundanceStrata>,
    pub spike_ins: Vec<SpikeIn>,
    pub random: RandomAssignment,
}

impl Allocation {
    /**
     * All (abundance, genome) rows for the sample at the given index: spike-ins first, in the
     * order the scenarios ran, then one row per OTU in table order.
     */
    pub fn sample_rows(&self, index: usize) -> Vec<(f64, &TaxonRecord)> {
        let sample = &self.samples[index];

        self.spike_ins
            .iter()
            .map(|s| (s.abundances[index], &s.taxon))
            .chain(self.random.pairs(&sample.abundances))
            .collect()
    }
}

/**
 * Run the whole allocation.
 *
 * args
 *  table:     abundance table, already restricted to the selected samples and trimmed
 *  pool:      candidate genomes
 *  scenarios: enabled spike-in scenarios, in execution order
 *  rng:       the single random source for the run
 *
 * returns
 *  the allocation or the first error that made it impossible
 */
pub fn allocate<T: SpikeInScenario + ?Sized>(
    table: &AbundanceTable,
    pool: TaxonPool,
    scenarios: &[Box<T>],
    rng: &mut dyn RngCore,
) -> Result<Allocation, MinceError> {
    // Strata come from the empirical abundances only, before anything is spiked in
    let strata = strata::sample_strata(table);

    for (sample, s) in table.samples().iter().zip(strata.iter()) {
        info!(
            "Sample {}: total abundance {}, strata low = {}, medium = {}, high = {}",
            sample.name,
            util::total(&sample.abundances),
            s.low,
            s.medium,
            s.high
        );
        debug!(
            "Sample {}: mean OTU abundance {:.2}, std. dev. {:.2}",
            sample.name,
            util::mean(&sample.abundances),
            util::std_deviation(&sample.abundances)
        );
    }

    let (spike_ins, pool) = spike_ins::plan_spike_ins(scenarios, pool, &strata, rng)?;

    info!(
        "{} genomes available for {} OTUs after spike-ins",
        pool.len(),
        table.num_otus()
    );

    let random = assign::assign_genomes(table, pool, rng)?;

    Ok(Allocation {
        samples: table.samples().to_vec(),
        strata,
        spike_ins,
        random,
    })
}

#[cfg(test)]
#[path = "tests/allocate_tests.rs"]
mod allocate_tests;
