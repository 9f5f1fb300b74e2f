/**
 * file: same_genus.rs
 * desc: Spike in two genomes from the same genus. Depending on the coverage patterns the pair
 *       either diverges across samples or converges to similar coverage.
 */
use rand::RngCore;
use tracing::debug;

use super::base::{self, CoveragePattern, SpikeIn, SpikeInScenario};
use crate::error::MinceError;
use crate::strata::{AbundanceStrata, Stratum};
use crate::taxonomy::{TaxonLevel, TaxonPool};

pub struct SameGenusSpikeIn {
    pub name: &'static str,
    // Patterns for the first and second genome of the pair
    pub first: CoveragePattern,
    pub second: CoveragePattern,
}

impl SameGenusSpikeIn {
    /**
     * One genome is highly abundant in the outer samples and the other is rare, they only
     * agree in the middle sample.
     */
    pub fn divergent() -> Self {
        SameGenusSpikeIn {
            name: "same-genus-divergent-coverage",
            first: [Stratum::High, Stratum::Medium, Stratum::High],
            second: [Stratum::Low, Stratum::Medium, Stratum::Low],
        }
    }

    /**
     * Both genomes agree in the first two samples and split apart in the last.
     */
    pub fn convergent() -> Self {
        SameGenusSpikeIn {
            name: "same-genus-convergent-coverage",
            first: [Stratum::Medium, Stratum::Medium, Stratum::High],
            second: [Stratum::Medium, Stratum::Medium, Stratum::Low],
        }
    }
}

impl SpikeInScenario for SameGenusSpikeIn {
    fn name(&self) -> &'static str {
        self.name
    }

    fn plan(
        &self,
        pool: TaxonPool,
        strata: &[AbundanceStrata],
        rng: &mut dyn RngCore,
    ) -> Result<(Vec<SpikeIn>, TaxonPool), MinceError> {
        let genus = base::choose_groups(&pool, TaxonLevel::Genus, 2, 1, rng)?.remove(0);

        // The whole genus goes so it can't turn up again later
        let (members, pool) = pool.remove_group(TaxonLevel::Genus, &genus);

        debug!(
            "{}: picked genus {} with {} genomes",
            self.name,
            genus,
            members.len()
        );

        let mut pair = base::choose_taxa(TaxonLevel::Genus, &genus, members, 2, rng)?;
        let second = SpikeIn::new(self.name, pair.remove(1), &self.second, strata);
        let first = SpikeIn::new(self.name, pair.remove(0), &self.first, strata);

        Ok((vec![first, second], pool))
    }
}
