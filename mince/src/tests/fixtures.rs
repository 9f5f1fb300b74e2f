/**
 * file: fixtures.rs
 * desc: Builders for tables and genome pools used across tests.
 */
use crate::table::{AbundanceTable, Sample};
use crate::taxonomy::{TaxonPool, TaxonRecord};

pub fn taxon(oid: &str, order: &str, genus: &str, species: &str) -> TaxonRecord {
    let name = format!("{} {}", genus, species);

    TaxonRecord::from_fields(&[
        oid,
        "Bacteria",
        "Finished",
        name.as_str(),
        "Firmicutes",
        "Bacilli",
        order,
        "Family",
        genus,
        species,
        "",
        "2012-01-01",
        "IMG/W 3.5",
    ])
}

/**
 * A pool where every taxon has its own genus and order, so nothing qualifies for spike-ins.
 */
pub fn singleton_pool(n: usize) -> TaxonPool {
    TaxonPool::new(
        (0..n)
            .map(|i| {
                taxon(
                    &format!("{}", 1000 + i),
                    &format!("Order{}", i),
                    &format!("Genus{}", i),
                    "sp",
                )
            })
            .collect(),
    )
}

/**
 * A pool with enough related taxa for every spike-in scenario plus `extra` unrelated genomes.
 *
 *  Foo (order Foales): a, b
 *  Qux (order Quxales): e, f
 *  order Bar: c (genus Cee), d (genus Dee)
 *  order Baz: g (genus Gee), h (genus Hee)
 */
pub fn spike_in_pool(extra: usize) -> TaxonPool {
    let mut taxa = vec![
        taxon("1", "Foales", "Foo", "a"),
        taxon("2", "Foales", "Foo", "b"),
        taxon("3", "Bar", "Cee", "c"),
        taxon("4", "Bar", "Dee", "d"),
        taxon("5", "Quxales", "Qux", "e"),
        taxon("6", "Quxales", "Qux", "f"),
        taxon("7", "Baz", "Gee", "g"),
        taxon("8", "Baz", "Hee", "h"),
    ];

    taxa.extend(singleton_pool(extra).iter().map(|t| {
        taxon(t.taxon_oid(), t.order(), t.genus(), t.species())
    }));

    TaxonPool::new(taxa)
}

/**
 * A table with `otus` rows and the given sample names, abundances are (row + 1) * (column + 1).
 */
pub fn table(otus: usize, samples: &[&str]) -> AbundanceTable {
    AbundanceTable::new(
        (0..otus).map(|i| format!("otu{}", i)).collect(),
        samples
            .iter()
            .enumerate()
            .map(|(j, name)| Sample {
                name: name.to_string(),
                abundances: (0..otus).map(|i| ((i + 1) * (j + 1)) as f64).collect(),
            })
            .collect(),
    )
    .unwrap()
}
