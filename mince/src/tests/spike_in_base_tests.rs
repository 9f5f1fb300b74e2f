/**
 * file: spike_in_base_tests.rs
 * desc: Group and taxon selection tests.
 */
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{choose_groups, choose_taxa};
use crate::error::MinceError;
use crate::fixtures;
use crate::taxonomy::TaxonLevel;

#[test]
fn test_choose_taxa() {
    let mut rng = StdRng::seed_from_u64(11);
    let members = vec![
        fixtures::taxon("1", "Foales", "Foo", "a"),
        fixtures::taxon("2", "Foales", "Foo", "b"),
        fixtures::taxon("3", "Foales", "Foo", "c"),
    ];

    let mut picked = choose_taxa(TaxonLevel::Genus, "Foo", members, 2, &mut rng)
        .unwrap()
        .iter()
        .map(|t| t.taxon_oid().to_string())
        .collect::<Vec<String>>();
    picked.sort();
    picked.dedup();

    assert!(picked.len() == 2);
}

#[test]
fn test_choose_taxa_from_small_group() {
    let mut rng = StdRng::seed_from_u64(12);
    let members = vec![fixtures::taxon("1", "Foales", "Foo", "a")];

    match choose_taxa(TaxonLevel::Genus, "Foo", members, 2, &mut rng) {
        Err(MinceError::GroupTooSmall {
            level,
            name,
            needed,
            found,
        }) => {
            assert!(level == "genus");
            assert!(name == "Foo");
            assert!(needed == 2);
            assert!(found == 1);
        }
        other => panic!("unexpected result: {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_choose_groups_counts_qualifying_groups() {
    let mut rng = StdRng::seed_from_u64(13);
    let pool = fixtures::spike_in_pool(3);

    // Foo and Qux are the only genera with two members
    let mut genera = choose_groups(&pool, TaxonLevel::Genus, 2, 2, &mut rng).unwrap();
    genera.sort();

    assert!(genera == vec!["Foo", "Qux"]);

    match choose_groups(&pool, TaxonLevel::Genus, 2, 3, &mut rng) {
        Err(MinceError::NoQualifyingGroup { needed, found, .. }) => {
            assert!(needed == 3);
            assert!(found == 2);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
