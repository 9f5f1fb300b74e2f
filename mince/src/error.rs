/**
 * file: error.rs
 * desc: Errors that abort an abundance assignment run.
 */
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("failed to write output: {0}")]
    Output(String),

    // Configuration errors
    #[error("Sample column {index} is out of range, the OTU table only has {available} samples")]
    ColumnOutOfRange { index: usize, available: usize },
    #[error("Sample {0} is not present in the OTU table")]
    UnknownSample(String),
    #[error("Spike-ins need exactly 3 samples but {0} were selected")]
    SpikeInSampleCount(usize),

    // Capacity errors
    #[error(
        "There are more OTUs in the OTU table ({otus}) than genomes available for modelling ({genomes}), so quitting. Get more!"
    )]
    InsufficientGenomes { otus: usize, genomes: usize },

    // Selection errors
    #[error("Need {needed} {level}(s) with at least {minimum} taxa in the genome pool, found {found}")]
    NoQualifyingGroup {
        level: &'static str,
        needed: usize,
        minimum: usize,
        found: usize,
    },
    #[error("The {level} {name} has {found} taxa in the genome pool but {needed} are needed")]
    GroupTooSmall {
        level: &'static str,
        name: String,
        needed: usize,
        found: usize,
    },
}
