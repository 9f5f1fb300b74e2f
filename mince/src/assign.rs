/**
 * file: assign.rs
 * desc: Randomly assign genomes to the OTUs of an abundance table.
 */
use rand::Rng;
use tracing::info;

use crate::error::MinceError;
use crate::table::AbundanceTable;
use crate::taxonomy::{TaxonPool, TaxonRecord};

/**
 * One genome per OTU row. Row i of the table maps to genomes[i] in every sample, only the
 * abundance differs between samples.
 */
#[derive(Debug)]
pub struct RandomAssignment {
    pub genomes: Vec<TaxonRecord>,
    // Genomes left unused in the pool
    pub leftover: usize,
}

impl RandomAssignment {
    /**
     * Pair each of the sample's abundances with the genome assigned to its OTU row.
     */
    pub fn pairs<'a>(
        &'a self,
        abundances: &'a [f64],
    ) -> impl Iterator<Item = (f64, &'a TaxonRecord)> {
        abundances.iter().copied().zip(self.genomes.iter())
    }
}

/**
 * Shuffle the pool and hand out one genome per OTU row.
 *
 * args
 *  table: trimmed abundance table
 *  pool:  genomes not already used as spike-ins
 *  rng:   shared random source
 *
 * returns
 *  the assignment, or a capacity error if there are more OTUs than genomes
 */
pub fn assign_genomes<R: Rng + ?Sized>(
    table: &AbundanceTable,
    mut pool: TaxonPool,
    rng: &mut R,
) -> Result<RandomAssignment, MinceError> {
    let otus = table.num_otus();

    pool.shuffle(rng);

    let (genomes, rest) = pool.take(otus).map_err(|pool| MinceError::InsufficientGenomes {
        otus,
        genomes: pool.len(),
    })?;

    info!(
        "Assigned {} genomes to OTUs, {} genomes left unused",
        genomes.len(),
        rest.len()
    );

    Ok(RandomAssignment {
        genomes,
        leftover: rest.len(),
    })
}

#[cfg(test)]
#[path = "tests/assign_tests.rs"]
mod assign_tests;
