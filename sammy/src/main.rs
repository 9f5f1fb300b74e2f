/**
 * file: main.rs
 * desc: Simulate reads for every genome in a mince abundance file.
 */
mod cli;
mod log;
mod runner;

use shared::abundances;
use std::path::Path;
use tracing::{error, info};

fn load_jobs(args: &cli::JobArgs) -> Result<Vec<runner::SimulationJob>, String> {
    if args.total_reads == 0 {
        return Err("The total number of reads to simulate must be greater than zero".to_string());
    }

    info!("Reading abundances from {}", args.abundances);

    let records = abundances::read_abundance_file(Path::new(&args.abundances))?;

    Ok(runner::plan_jobs(
        &records,
        args.total_reads,
        Path::new(&args.genome_basedir),
    ))
}

fn plan(cmd: &cli::PlanCommand) -> Result<(), String> {
    let jobs = load_jobs(&cmd.jobs)?;

    runner::write_plan(&jobs, std::io::stdout().lock()).map_err(|e| format!("{}", e))
}

fn run(cmd: &cli::RunCommand) -> Result<(), String> {
    let jobs = load_jobs(&cmd.jobs)?;

    // Ensure the genome filepaths actually exist before starting anything
    let missing = runner::missing_genomes(&jobs);

    if !missing.is_empty() {
        missing
            .iter()
            .for_each(|j| error!("Genome ({}) does not exist", j.fasta.display()));

        return Err(format!("{} genome FASTA files are missing", missing.len()));
    }

    // Setup threads
    rayon::ThreadPoolBuilder::new()
        .num_threads(cmd.threads)
        .build_global()
        .map_err(|e| format!("Failed to set up the thread pool: {}", e))?;

    std::fs::create_dir_all(&cmd.output_directory).map_err(|e| format!("{}", e))?;

    info!(
        "Simulating reads from {} genomes with {}",
        jobs.len(),
        cmd.simulator
    );

    let failures = runner::run_jobs(&cmd.simulator, &jobs, Path::new(&cmd.output_directory));

    if !failures.is_empty() {
        failures
            .iter()
            .for_each(|(oid, e)| error!("Simulation failed for {}: {}", oid, e));

        return Err(format!("{} of {} simulations failed", failures.len(), jobs.len()));
    }

    Ok(())
}

fn main() {
    let args = cli::parse_cli_args();

    // Setup stderr logging
    log::setup_logging(args.quiet);

    let result = match &args.command {
        cli::Command::Plan(cmd) => plan(cmd),
        cli::Command::Run(cmd) => run(cmd),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
