/**
 * file: files.rs
 * desc: Functions related to file reading, writing, and parsing.
 */
use csv;
use serde::Deserialize;
use shared::abundances;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::allocate::Allocation;
use crate::error::MinceError;
use crate::table::{AbundanceTable, Sample};
use crate::taxonomy::{TaxonPool, TaxonRecord, DEFINITION_COLUMNS};

/**
 * A row of an IMG taxonomy metadata file. Only the columns used to group genomes are required,
 * extra columns are ignored.
 */
#[derive(Debug, Deserialize)]
pub struct TaxonomyRow {
    pub taxon_oid: String,
    #[serde(rename = "Domain", default)]
    pub domain: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Genome Name", default)]
    pub genome_name: String,
    #[serde(rename = "Phylum", default)]
    pub phylum: String,
    #[serde(rename = "Class", default)]
    pub class: String,
    #[serde(rename = "Order")]
    pub order: String,
    #[serde(rename = "Family", default)]
    pub family: String,
    #[serde(rename = "Genus")]
    pub genus: String,
    #[serde(rename = "Species")]
    pub species: String,
    #[serde(rename = "Strain", default)]
    pub strain: String,
    #[serde(rename = "Release Date", default)]
    pub release_date: String,
    #[serde(rename = "IMG Release", default)]
    pub img_release: String,
}

impl From<TaxonomyRow> for TaxonRecord {
    fn from(row: TaxonomyRow) -> Self {
        TaxonRecord::from_fields(&[
            row.taxon_oid,
            row.domain,
            row.status,
            row.genome_name,
            row.phylum,
            row.class,
            row.order,
            row.family,
            row.genus,
            row.species,
            row.strain,
            row.release_date,
            row.img_release,
        ])
    }
}

/**
 * Trailing OTU table columns holding taxonomy strings rather than abundances.
 */
fn is_metadata_column(name: &str) -> bool {
    let name = name.trim().to_lowercase();

    name == "taxonomy" || name == "consensus lineage"
}

/**
 * Parse a tab delimited OTU table. Lines starting with '#' are comments except for the
 * '#OTU ID' header; without one, the first non-comment line is the header. A trailing taxonomy
 * column is dropped.
 */
pub fn parse_otu_table(filepath: &Path) -> Result<AbundanceTable, MinceError> {
    if !filepath.exists() {
        return Err(MinceError::InvalidFormat(format!(
            "OTU table {} does not exist",
            filepath.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(filepath)?;

    // Sample names from the header, once it's been seen
    let mut header: Option<Vec<String>> = None;
    let mut has_metadata = false;
    let mut otus = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for rec_result in reader.records() {
        let rec = rec_result?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let first = rec.get(0).unwrap_or("").trim();

        // Skip blank lines wherever they are
        if rec.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        match header {
            None => {
                if first.starts_with('#') && !first.starts_with("#OTU ID") {
                    continue;
                }

                let mut names = rec
                    .iter()
                    .skip(1)
                    .map(|f| f.trim().to_string())
                    .collect::<Vec<String>>();

                if names.last().map(|n| is_metadata_column(n)).unwrap_or(false) {
                    names.pop();
                    has_metadata = true;
                }

                columns = vec![Vec::new(); names.len()];
                header = Some(names);
            }
            Some(ref names) => {
                if first.starts_with('#') {
                    continue;
                }

                let fields = rec.len() - 1;

                if fields != names.len() && !(has_metadata && fields == names.len() + 1) {
                    return Err(MinceError::InvalidFormat(format!(
                        "Line {} of {} has {} abundance(s) but there are {} samples",
                        line,
                        filepath.display(),
                        fields,
                        names.len()
                    )));
                }

                for (j, field) in rec.iter().skip(1).take(names.len()).enumerate() {
                    // Abundances must be finite and non-negative counts or proportions
                    let abundance = field
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|a| a.is_finite() && *a >= 0.0)
                        .ok_or_else(|| {
                            MinceError::InvalidFormat(format!(
                                "Line {} of {} has an invalid abundance for sample {}: {}",
                                line,
                                filepath.display(),
                                names[j],
                                field
                            ))
                        })?;

                    columns[j].push(abundance);
                }

                otus.push(first.to_string());
            }
        }
    }

    let names = header.ok_or_else(|| {
        MinceError::InvalidFormat(format!("OTU table {} has no header", filepath.display()))
    })?;

    debug!(
        "Read {} OTUs spread across {} samples in the OTU table",
        otus.len(),
        names.len()
    );

    AbundanceTable::new(
        otus,
        names
            .into_iter()
            .zip(columns)
            .map(|(name, abundances)| Sample { name, abundances })
            .collect(),
    )
}

/**
 * Parse an IMG taxonomy metadata file into taxon records, in file order.
 */
pub fn parse_taxonomy_file(filepath: &Path) -> Result<Vec<TaxonRecord>, MinceError> {
    if !filepath.exists() {
        return Err(MinceError::InvalidFormat(format!(
            "Taxonomy file {} does not exist",
            filepath.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .from_path(filepath)?;
    let mut recs = Vec::new();

    for rec_result in reader.deserialize() {
        let row: TaxonomyRow = rec_result?;

        recs.push(TaxonRecord::from(row));
    }

    Ok(recs)
}

/**
 * Write the genome pool back out as an IMG taxonomy file.
 */
pub fn write_taxonomy_file(pool: &TaxonPool, output: &Path) -> Result<(), MinceError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_path(output)?;

    writer.write_record(DEFINITION_COLUMNS.iter())?;

    for taxon in pool.iter() {
        writer.write_record(taxon.definition_line().split('\t'))?;
    }

    writer.flush()?;

    Ok(())
}

/**
 * Write one abundance file per sample into the output directory.
 *
 * returns
 *  the filepaths written, in sample order
 */
pub fn write_allocation(
    allocation: &Allocation,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, MinceError> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(allocation.samples.len());

    for (i, sample) in allocation.samples.iter().enumerate() {
        let path = output_dir.join(abundances::abundance_filename(&sample.name));

        info!(
            "Now writing abundances from sample {} to {}",
            sample.name,
            path.display()
        );

        let rows = allocation.sample_rows(i);

        abundances::write_abundance_file(
            &path,
            rows.iter().map(|(a, t)| (*a, t.definition_line())),
        )
        .map_err(MinceError::Output)?;

        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
#[path = "tests/files_tests.rs"]
mod files_tests;
