/**
 * file: cli.rs
 * desc: CLI parsing.
 */
use clap::{ArgGroup, Parser};
use tracing::Level;

use crate::spike_ins;

/**
 * HELP DESCRIPTIONS
 */

static OTU_TABLE_HELP: &'static str = "
OTU table to be simulated. Tab delimited, one OTU per row and one sample per column.
QIIME style tables with a '#OTU ID' header and a trailing taxonomy column are supported.
";

static TAXONOMY_HELP: &'static str = "
IMG taxonomy metadata file listing the genomes available to be picked. Must have a
header containing at least the following columns:

    taxon_oid  Order  Genus  Species
";

static COLUMNS_HELP: &'static str = "
Comma separated, zero-based indices of the OTU table samples to use. Spike-ins need
exactly three samples.
";

static SPIKE_IN_HELP: &'static str = "
Spike-ins add pairs of genomes with fixed abundance patterns to every sample. Patterns
are built from each sample's low (1%), medium (5%) and high (25%) abundance levels and
are listed as sample 1, sample 2, sample 3.
";

/**
 * STRUCTS
 */

#[derive(Debug, Parser)]
#[clap(version, about, long_about = None, after_help = SPIKE_IN_HELP)]
#[clap(group(
    ArgGroup::new("verbosity")
    .args(&["quiet", "verbose"])
))]
pub struct CliArgs {
    #[clap(short, long, value_parser, help = OTU_TABLE_HELP)]
    pub otu_table: String,

    #[clap(short = 't', long, value_parser, help = TAXONOMY_HELP)]
    pub possible_taxonomies: String,

    #[clap(
        short = 'c',
        long,
        value_parser,
        value_delimiter = ',',
        default_value = "0",
        help = COLUMNS_HELP
    )]
    pub otu_table_columns: Vec<usize>,

    #[clap(
        long,
        value_parser,
        help = "Spike in two genomes of one genus at high/medium/high and low/medium/low abundance"
    )]
    pub same_genus_divergent_coverage: bool,

    #[clap(
        long,
        value_parser,
        help = "Spike in two genomes of one genus at medium/medium/high and medium/medium/low abundance"
    )]
    pub same_genus_convergent_coverage: bool,

    #[clap(
        long,
        value_parser,
        help = "Spike in one genome from each of two orders, both at medium/medium/medium abundance"
    )]
    pub different_order_same_coverage: bool,

    #[clap(
        long,
        value_parser,
        help = "Keep a single, randomly chosen strain of each species in the genome pool"
    )]
    pub one_strain_per_species: bool,

    #[clap(
        long,
        value_parser,
        help = "Write the genome pool, after strain removal, to this taxonomy file"
    )]
    pub write_taxonomy: Option<String>,

    #[clap(
        long,
        value_parser,
        default_value = ".",
        help = "Directory to write abundances.<sample>.csv files to"
    )]
    pub output_directory: String,

    #[clap(long, value_parser, help = "Random seed")]
    pub seed: Option<u64>,

    #[clap(
        short,
        long,
        value_parser,
        help = "Run quietly, only log errors"
    )]
    pub quiet: bool,

    #[clap(short, long, value_parser, help = "Log debugging information")]
    pub verbose: bool,
}

/**
 * FUNCTIONS
 */

/**
 * Build the enabled spike-in scenarios, in the order they have to run.
 */
pub fn determine_spike_ins(args: &CliArgs) -> Vec<Box<dyn spike_ins::SpikeInScenario>> {
    let mut scenarios: Vec<Box<dyn spike_ins::SpikeInScenario>> = Vec::new();

    if args.same_genus_divergent_coverage {
        scenarios.push(Box::new(spike_ins::SameGenusSpikeIn::divergent()));
    }

    if args.same_genus_convergent_coverage {
        scenarios.push(Box::new(spike_ins::SameGenusSpikeIn::convergent()));
    }

    if args.different_order_same_coverage {
        scenarios.push(Box::new(spike_ins::DifferentOrderSpikeIn::default()));
    }

    scenarios
}

pub fn determine_log_level(args: &CliArgs) -> Level {
    if args.quiet {
        Level::ERROR
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

pub fn parse_cli_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod cli_tests;
