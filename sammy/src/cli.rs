/**
 * file: cli.rs
 * desc: CLI parsing.
 */
use clap::{Args, Parser, Subcommand};

/**
 * STRUCTS
 */

#[derive(Debug, Args)]
pub struct JobArgs {
    #[clap(
        short,
        long,
        value_parser,
        help = "Abundance file for a single sample, as written by mince"
    )]
    pub abundances: String,

    #[clap(
        short = 'n',
        long,
        value_parser,
        help = "Number of reads to simulate in total"
    )]
    pub total_reads: usize,

    #[clap(
        long,
        value_parser,
        default_value = "/srv/whitlam/bio/db/img/3.5/genomes/finished/",
        help = "Base directory of the IMG genome FASTA files"
    )]
    pub genome_basedir: String,
}

#[derive(Debug, Parser)]
pub struct PlanCommand {
    #[clap(flatten)]
    pub jobs: JobArgs,
}

#[derive(Debug, Parser)]
pub struct RunCommand {
    #[clap(flatten)]
    pub jobs: JobArgs,

    #[clap(
        long,
        value_parser,
        default_value = "sammy.pl",
        help = "Read simulator, called as <simulator> -r <genome fasta> -n <reads>"
    )]
    pub simulator: String,

    #[clap(
        long,
        value_parser,
        default_value = ".",
        help = "Directory to write simulated reads (otu<N>.fa) to"
    )]
    pub output_directory: String,

    #[clap(
        short,
        long,
        value_parser,
        default_value_t = 1,
        help = "Number of threads to use, a value of 0 uses all available threads"
    )]
    pub threads: usize,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the number of reads to simulate from each genome
    Plan(PlanCommand),
    /// Simulate reads from each genome
    Run(RunCommand),
}

#[derive(Debug, Parser)]
#[clap(version, about, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    #[clap(short, long, value_parser, global = true, help = "Run quietly, only log errors")]
    pub quiet: bool,
}

/**
 * FUNCTIONS
 */

pub fn parse_cli_args() -> CliArgs {
    CliArgs::parse()
}
