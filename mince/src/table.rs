/**
 * file: table.rs
 * desc: Model an OTU table, a set of OTUs and their abundances across samples.
 */
use crate::error::MinceError;

#[derive(Debug, Clone)]
pub struct Sample {
    pub name: String,
    // One abundance per OTU, aligned to AbundanceTable::otu_identifiers
    pub abundances: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct AbundanceTable {
    // OTU identifiers, one per row
    otu_identifiers: Vec<String>,
    // Retained samples, always in their original column order
    samples: Vec<Sample>,
}

impl AbundanceTable {
    /**
     * Construct a table from row identifiers and per-sample abundance columns. Every column must
     * have one abundance per row and sample names must be unique, non-empty and free of path
     * separators.
     */
    pub fn new(otu_identifiers: Vec<String>, samples: Vec<Sample>) -> Result<Self, MinceError> {
        for (i, sample) in samples.iter().enumerate() {
            if sample.abundances.len() != otu_identifiers.len() {
                return Err(MinceError::InvalidFormat(format!(
                    "Sample {} has {} abundances but the table has {} OTUs",
                    sample.name,
                    sample.abundances.len(),
                    otu_identifiers.len()
                )));
            }

            // Sample names become part of the abundance file names
            if sample.name.is_empty() || sample.name.contains(&['/', '\\'][..]) {
                return Err(MinceError::InvalidFormat(format!(
                    "Sample name '{}' can't be used in an output file name",
                    sample.name
                )));
            }

            if samples[..i].iter().any(|s| s.name == sample.name) {
                return Err(MinceError::InvalidFormat(format!(
                    "Sample {} appears more than once in the OTU table",
                    sample.name
                )));
            }
        }

        Ok(AbundanceTable {
            otu_identifiers,
            samples,
        })
    }

    pub fn otu_identifiers(&self) -> &[String] {
        &self.otu_identifiers
    }

    pub fn num_otus(&self) -> usize {
        self.otu_identifiers.len()
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /**
     * Names of the retained samples in original column order, regardless of the order they were
     * selected in.
     */
    pub fn sample_names(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.name.as_str()).collect()
    }

    /**
     * Abundances for the given sample, aligned to the current OTU order.
     */
    pub fn abundances_for(&self, sample: &str) -> Option<&[f64]> {
        self.samples
            .iter()
            .find(|s| s.name == sample)
            .map(|s| s.abundances.as_slice())
    }

    /**
     * Restrict the table to the named samples. Fails without modifying the table if any name
     * isn't one of the currently retained samples.
     */
    pub fn select_samples<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), MinceError> {
        if let Some(missing) = names
            .iter()
            .find(|n| !self.samples.iter().any(|s| s.name == n.as_ref()))
        {
            return Err(MinceError::UnknownSample(missing.as_ref().to_string()));
        }

        self.samples
            .retain(|s| names.iter().any(|n| n.as_ref() == s.name));

        Ok(())
    }

    /**
     * Restrict the table to samples at the given zero-based column indices.
     *
     * args
     *  indices: sample column indices, not counting the OTU identifier column
     *
     * returns
     *  the names of the selected samples, in the order given
     */
    pub fn select_columns(&mut self, indices: &[usize]) -> Result<Vec<String>, MinceError> {
        let names = indices
            .iter()
            .map(|&index| {
                self.samples
                    .get(index)
                    .map(|s| s.name.clone())
                    .ok_or(MinceError::ColumnOutOfRange {
                        index,
                        available: self.samples.len(),
                    })
            })
            .collect::<Result<Vec<String>, MinceError>>()?;

        self.select_samples(&names)?;

        Ok(names)
    }

    /**
     * Drop OTUs with zero abundance in every retained sample.
     *
     * returns
     *  the number of OTUs removed
     */
    pub fn remove_empty_rows(&mut self) -> usize {
        let keep = (0..self.otu_identifiers.len())
            .map(|i| self.samples.iter().any(|s| s.abundances[i] != 0.0))
            .collect::<Vec<bool>>();
        let before = self.otu_identifiers.len();

        let mut flags = keep.iter();
        self.otu_identifiers.retain(|_| *flags.next().unwrap_or(&false));

        for sample in self.samples.iter_mut() {
            let mut flags = keep.iter();
            sample.abundances.retain(|_| *flags.next().unwrap_or(&false));
        }

        before - self.otu_identifiers.len()
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod table_tests;
