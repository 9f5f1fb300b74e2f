/**
 * file: abundances.rs
 * desc: Reading and writing per-sample abundance files. Each line of an abundance file is an
 *       abundance followed by the tab delimited definition line of the genome it was assigned
 *       to. The first definition field is always the genome's taxon_oid.
 */
use csv;
use std::path::Path;

/**
 * A single genome and the abundance it was assigned in a sample.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct AbundanceRecord {
    pub abundance: f64,
    // Tab joined genome metadata, starting with the taxon_oid
    pub definition: String,
}

impl AbundanceRecord {
    pub fn taxon_oid(&self) -> &str {
        self.definition.split('\t').next().unwrap_or("")
    }
}

/**
 * Abundance file name for the given sample.
 */
pub fn abundance_filename(sample: &str) -> String {
    format!("abundances.{}.csv", sample)
}

/**
 * Write (abundance, definition line) pairs to an abundance file, overwriting it if it exists.
 * Nothing is quoted so definition lines come out exactly as they went in.
 *
 * args
 *  output:  filepath to write to
 *  records: abundances and definition lines, in output order
 *
 * returns
 *  the number of lines written or an error string
 */
pub fn write_abundance_file<'a, I>(output: &Path, records: I) -> Result<usize, String>
where
    I: IntoIterator<Item = (f64, &'a str)>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(output)
        .map_err(|e| format!("{}: {}", output.display(), e))?;
    let mut written = 0;

    for (abundance, definition) in records {
        let fields = std::iter::once(abundance.to_string())
            .chain(definition.split('\t').map(|f| f.to_string()))
            .collect::<Vec<String>>();

        writer
            .write_record(&fields)
            .map_err(|e| format!("{}: {}", output.display(), e))?;
        written += 1;
    }

    writer
        .flush()
        .map_err(|e| format!("{}: {}", output.display(), e))?;

    Ok(written)
}

/**
 * Parse an abundance file written by write_abundance_file.
 */
pub fn read_abundance_file(filepath: &Path) -> Result<Vec<AbundanceRecord>, String> {
    if !filepath.exists() {
        return Err(format!("Abundance file {} does not exist", filepath.display()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(filepath)
        .map_err(|e| format!("{}", e))?;
    let mut recs = Vec::new();

    for (i, rec_result) in reader.records().enumerate() {
        let rec = rec_result.map_err(|e| format!("{}", e))?;

        if rec.len() < 2 {
            return Err(format!(
                "Line {} of {} needs an abundance and a genome, found {} field(s)",
                i + 1,
                filepath.display(),
                rec.len()
            ));
        }

        let abundance = rec[0].trim().parse::<f64>().map_err(|_| {
            format!(
                "Line {} of {} has an invalid abundance: {}",
                i + 1,
                filepath.display(),
                &rec[0]
            )
        })?;

        recs.push(AbundanceRecord {
            abundance,
            definition: rec.iter().skip(1).collect::<Vec<&str>>().join("\t"),
        });
    }

    Ok(recs)
}
