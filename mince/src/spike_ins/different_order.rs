/**
 * file: different_order.rs
 * desc: Spike in two distantly related genomes, one from each of two different orders, at the
 *       same coverage in every sample.
 */
use rand::RngCore;
use tracing::debug;

use super::base::{self, CoveragePattern, SpikeIn, SpikeInScenario};
use crate::error::MinceError;
use crate::strata::{AbundanceStrata, Stratum};
use crate::taxonomy::{TaxonLevel, TaxonPool};

pub struct DifferentOrderSpikeIn {
    pub name: &'static str,
    pub pattern: CoveragePattern,
}

impl Default for DifferentOrderSpikeIn {
    fn default() -> Self {
        DifferentOrderSpikeIn {
            name: "different-order-same-coverage",
            pattern: [Stratum::Medium, Stratum::Medium, Stratum::Medium],
        }
    }
}

impl SpikeInScenario for DifferentOrderSpikeIn {
    fn name(&self) -> &'static str {
        self.name
    }

    fn plan(
        &self,
        pool: TaxonPool,
        strata: &[AbundanceStrata],
        rng: &mut dyn RngCore,
    ) -> Result<(Vec<SpikeIn>, TaxonPool), MinceError> {
        let orders = base::choose_groups(&pool, TaxonLevel::Order, 2, 2, rng)?;
        let mut spike_ins = Vec::with_capacity(orders.len());
        let mut pool = pool;

        // Each order contributes one fresh genome and is then removed entirely
        for order in orders.iter() {
            let (members, remaining) = pool.remove_group(TaxonLevel::Order, order);
            pool = remaining;

            debug!(
                "{}: picked order {} with {} genomes",
                self.name,
                order,
                members.len()
            );

            let taxon = base::choose_taxa(TaxonLevel::Order, order, members, 1, rng)?.remove(0);

            spike_ins.push(SpikeIn::new(self.name, taxon, &self.pattern, strata));
        }

        Ok((spike_ins, pool))
    }
}
