/**
 * file: taxonomy.rs
 * desc: Model candidate reference genomes, their taxonomy, and the pool they're drawn from.
 */
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/**
 * Columns making up a genome definition line, in output order.
 */
pub static DEFINITION_COLUMNS: [&str; 13] = [
    "taxon_oid",
    "Domain",
    "Status",
    "Genome Name",
    "Phylum",
    "Class",
    "Order",
    "Family",
    "Genus",
    "Species",
    "Strain",
    "Release Date",
    "IMG Release",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonRecord {
    taxon_oid: String,
    genus: String,
    species: String,
    order: String,
    // Tab joined DEFINITION_COLUMNS
    definition_line: String,
}

/**
 * Taxonomic levels genomes can be grouped by.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaxonLevel {
    Genus,
    Order,
}

impl std::fmt::Display for TaxonLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TaxonLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonLevel::Genus => "genus",
            TaxonLevel::Order => "order",
        }
    }

    /**
     * The name of the group the taxon belongs to at this level.
     */
    pub fn of<'a>(&self, taxon: &'a TaxonRecord) -> &'a str {
        match self {
            TaxonLevel::Genus => &taxon.genus,
            TaxonLevel::Order => &taxon.order,
        }
    }
}

impl std::fmt::Display for TaxonRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Taxon ({}) {} {}>",
            self.taxon_oid, self.genus, self.species
        )
    }
}

impl TaxonRecord {
    /**
     * Build a taxon from the values of each DEFINITION_COLUMNS field, in the same order.
     */
    pub fn from_fields<S: AsRef<str>>(fields: &[S; 13]) -> TaxonRecord {
        TaxonRecord {
            taxon_oid: fields[0].as_ref().to_string(),
            order: fields[6].as_ref().to_string(),
            genus: fields[8].as_ref().to_string(),
            species: fields[9].as_ref().to_string(),
            definition_line: fields.iter().map(|f| f.as_ref()).join("\t"),
        }
    }

    pub fn taxon_oid(&self) -> &str {
        &self.taxon_oid
    }

    pub fn genus(&self) -> &str {
        &self.genus
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn order(&self) -> &str {
        &self.order
    }

    pub fn definition_line(&self) -> &str {
        &self.definition_line
    }

    /**
     * Genus and species composite key, strains of the same species share it.
     */
    pub fn genus_species(&self) -> String {
        format!("{}_{}", self.genus, self.species)
    }
}

/**
 * Genomes still available for assignment. Pool operations that remove taxa take the pool by
 * value and hand back whatever is left.
 */
#[derive(Debug, Clone, Default)]
pub struct TaxonPool {
    taxa: Vec<TaxonRecord>,
}

impl TaxonPool {
    pub fn new(taxa: Vec<TaxonRecord>) -> Self {
        TaxonPool { taxa }
    }

    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxonRecord> {
        self.taxa.iter()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.taxa.shuffle(rng);
    }

    /**
     * Keep only the first taxon seen for every genus_species key. Shuffle beforehand so the
     * surviving strain isn't biased by file order.
     *
     * returns
     *  the pool of unique species and the number of strains removed
     */
    pub fn dedupe_species(self) -> (TaxonPool, usize) {
        let before = self.taxa.len();
        let taxa = self
            .taxa
            .into_iter()
            .unique_by(|t| t.genus_species())
            .collect::<Vec<TaxonRecord>>();
        let removed = before - taxa.len();

        (TaxonPool { taxa }, removed)
    }

    /**
     * Names of all groups at the given level that have at least `minimum` members, sorted by
     * name so selection from the list is reproducible under a fixed seed.
     */
    pub fn groups_with_at_least(&self, level: TaxonLevel, minimum: usize) -> Vec<String> {
        let counts = self
            .taxa
            .iter()
            .fold(BTreeMap::<&str, usize>::new(), |mut counts, t| {
                *counts.entry(level.of(t)).or_default() += 1;
                counts
            });

        counts
            .into_iter()
            .filter(|(_, count)| *count >= minimum)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /**
     * Remove every taxon in the given group.
     *
     * returns
     *  the removed taxa (in pool order) and the remaining pool
     */
    pub fn remove_group(self, level: TaxonLevel, name: &str) -> (Vec<TaxonRecord>, TaxonPool) {
        let (removed, taxa): (Vec<TaxonRecord>, Vec<TaxonRecord>) =
            self.taxa.into_iter().partition(|t| level.of(t) == name);

        (removed, TaxonPool { taxa })
    }

    /**
     * Split off the first n taxa.
     *
     * returns
     *  the first n taxa and the remaining pool, or the unchanged pool if it has fewer than n
     */
    pub fn take(mut self, n: usize) -> Result<(Vec<TaxonRecord>, TaxonPool), TaxonPool> {
        if n > self.taxa.len() {
            return Err(self);
        }

        let rest = self.taxa.split_off(n);

        Ok((self.taxa, TaxonPool { taxa: rest }))
    }
}

#[cfg(test)]
#[path = "tests/taxonomy_tests.rs"]
mod taxonomy_tests;
