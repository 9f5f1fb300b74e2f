/**
 * file: runner.rs
 * desc: Work out how many reads to simulate from each genome in an abundance file and run the
 *       external read simulator once per genome.
 */
use rayon::prelude::*;
use shared::abundances::AbundanceRecord;
use shared::util;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/**
 * STRUCTS
 */

/**
 * A single run of the read simulator for one genome.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationJob {
    // Position among the genomes with non-zero abundance, used to name the output
    pub index: usize,
    pub taxon_oid: String,
    pub abundance: f64,
    pub reads: usize,
    pub fasta: PathBuf,
}

impl SimulationJob {
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("otu{}.fa", self.index))
    }
}

/**
 * FUNCTIONS
 */

/**
 * Genome FASTA for a taxon_oid, IMG lays genomes out as <basedir>/<oid>/<oid>.fna
 */
pub fn genome_fasta_path(genome_basedir: &Path, taxon_oid: &str) -> PathBuf {
    genome_basedir
        .join(taxon_oid)
        .join(format!("{}.fna", taxon_oid))
}

/**
 * Build one simulation job per genome with a non-zero abundance. Reads are split in proportion
 * to each genome's share of the total abundance.
 *
 * args
 *  records:        parsed abundance file
 *  total_reads:    number of reads to simulate across all genomes
 *  genome_basedir: base directory of the genome FASTAs
 *
 * returns
 *  simulation jobs, in abundance file order
 */
pub fn plan_jobs(
    records: &[AbundanceRecord],
    total_reads: usize,
    genome_basedir: &Path,
) -> Vec<SimulationJob> {
    let abundances = records.iter().map(|r| r.abundance).collect::<Vec<f64>>();
    let total_abundance = util::total(&abundances);

    info!(
        "Total genome count was {}, total with non-zero abundance count {}",
        records.len(),
        abundances.iter().filter(|a| **a > 0.0).count()
    );
    info!("Total abundance was {}", total_abundance);

    records
        .iter()
        .filter(|r| r.abundance > 0.0)
        .enumerate()
        .map(|(index, r)| {
            let reads = util::scale_reads(total_reads, r.abundance, total_abundance);

            debug!(
                "From abundance {}, the total number of reads is {}",
                r.abundance, reads
            );

            SimulationJob {
                index,
                taxon_oid: r.taxon_oid().to_string(),
                abundance: r.abundance,
                reads,
                fasta: genome_fasta_path(genome_basedir, r.taxon_oid()),
            }
        })
        .collect()
}

/**
 * Write the planned jobs as a TSV table.
 */
pub fn write_plan<W: Write>(jobs: &[SimulationJob], mut out: W) -> std::io::Result<()> {
    writeln!(out, "index\ttaxon_oid\treads\tfasta")?;

    for job in jobs.iter() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            job.index,
            job.taxon_oid,
            job.reads,
            job.fasta.display()
        )?;
    }

    Ok(())
}

/**
 * Jobs whose genome FASTA doesn't exist.
 */
pub fn missing_genomes(jobs: &[SimulationJob]) -> Vec<&SimulationJob> {
    jobs.iter().filter(|j| !j.fasta.exists()).collect()
}

/**
 * Run the simulator for a single job, its stdout becomes the job's output file. The output file
 * is removed again if the simulator can't be run or fails.
 */
pub fn run_job(simulator: &str, job: &SimulationJob, output_dir: &Path) -> Result<(), String> {
    let output = job.output_path(output_dir);
    let file = File::create(&output).map_err(|e| format!("{}: {}", output.display(), e))?;

    let result = Command::new(simulator)
        .arg("-r")
        .arg(&job.fasta)
        .arg("-n")
        .arg(job.reads.to_string())
        .stdout(Stdio::from(file))
        .status()
        .map_err(|e| format!("Failed to run {}: {}", simulator, e))
        .and_then(|status| {
            if status.success() {
                Ok(())
            } else {
                Err(format!(
                    "{} exited with {} for genome {}",
                    simulator, status, job.taxon_oid
                ))
            }
        });

    if result.is_err() {
        if let Err(e) = std::fs::remove_file(&output) {
            debug!("Couldn't remove {}: {}", output.display(), e);
        }
    }

    result
}

/**
 * Run every job on the current rayon thread pool. Jobs are independent so they run in no
 * particular order; all jobs are attempted even if some fail.
 *
 * returns
 *  a (taxon_oid, error) pair for every failed job
 */
pub fn run_jobs(
    simulator: &str,
    jobs: &[SimulationJob],
    output_dir: &Path,
) -> Vec<(String, String)> {
    let finished = AtomicUsize::new(0);
    // Log progress roughly every 10% of jobs
    let step = std::cmp::max(1, jobs.len() / 10);

    jobs.par_iter()
        .filter_map(|job| {
            let result = run_job(simulator, job, output_dir);
            let done = finished.fetch_add(1, Ordering::SeqCst) + 1;

            if done % step == 0 || done == jobs.len() {
                info!("Simulated reads for {}/{} genomes", done, jobs.len());
            }

            result.err().map(|e| (job.taxon_oid.clone(), e))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod runner_tests;
