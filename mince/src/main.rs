/**
 * file: main.rs
 * desc: it's the main
 */
mod allocate;
mod assign;
mod cli;
mod error;
mod files;
mod log;
mod spike_ins;
mod strata;
mod table;
mod taxonomy;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::MinceError;
use crate::taxonomy::TaxonPool;

/**
 * Load the inputs, allocate abundances to genomes and write one abundance file per sample.
 * Output, including the optional taxonomy file, is only written once the whole allocation has
 * succeeded.
 */
fn run(args: &cli::CliArgs) -> Result<Vec<PathBuf>, MinceError> {
    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let scenarios = cli::determine_spike_ins(args);

    info!("Reading OTU table {}", args.otu_table);

    let mut table = files::parse_otu_table(Path::new(&args.otu_table))?;

    info!(
        "Using abundances from sample columns {}",
        args.otu_table_columns.iter().join(",")
    );

    table.select_columns(&args.otu_table_columns)?;

    let removed = table.remove_empty_rows();

    debug!(
        "After trimming the OTU table down ({} empty OTUs removed), the OTU table has these samples: {}, and {} OTUs",
        removed,
        table.sample_names().join(", "),
        table.num_otus()
    );

    // Catch a bad sample selection before doing any other work
    if !scenarios.is_empty() && table.num_samples() != spike_ins::SPIKE_IN_SAMPLES {
        return Err(MinceError::SpikeInSampleCount(table.num_samples()));
    }

    info!("Loading genomes from {}", args.possible_taxonomies);

    let mut pool = TaxonPool::new(files::parse_taxonomy_file(Path::new(
        &args.possible_taxonomies,
    ))?);

    info!("Read in {} genomes to work with", pool.len());

    if args.one_strain_per_species {
        // Shuffle first so the strain that's kept isn't determined by file order
        pool.shuffle(&mut rng);

        let (unique, removed) = pool.dedupe_species();
        pool = unique;

        info!(
            "After removing {} strains of already seen species, {} different species were left",
            removed,
            pool.len()
        );
    }

    // Held back until the allocation succeeds
    let taxonomy_output = args
        .write_taxonomy
        .as_ref()
        .map(|output| (Path::new(output), pool.clone()));

    let allocation = allocate::allocate(&table, pool, &scenarios, &mut rng)?;

    if let Some((output, pool)) = &taxonomy_output {
        info!("Writing genome pool to {}", output.display());

        files::write_taxonomy_file(pool, output)?;
    }

    files::write_allocation(&allocation, Path::new(&args.output_directory))
}

fn run_main() {
    let args = cli::parse_cli_args();

    // Set up logging
    log::setup_logging(cli::determine_log_level(&args));

    match run(&args) {
        Ok(written) => info!("Wrote {} abundance files", written.len()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    run_main();
}

#[cfg(test)]
#[path = "tests/run_tests.rs"]
mod run_tests;
