/**
 * file: allocate_tests.rs
 * desc: End to end allocation tests.
 */
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::allocate;
use crate::error::MinceError;
use crate::fixtures;
use crate::spike_ins::{DifferentOrderSpikeIn, SameGenusSpikeIn, SpikeInScenario};

fn all_scenarios() -> Vec<Box<dyn SpikeInScenario>> {
    vec![
        Box::new(SameGenusSpikeIn::divergent()),
        Box::new(SameGenusSpikeIn::convergent()),
        Box::new(DifferentOrderSpikeIn::default()),
    ]
}

#[test]
fn test_allocate_without_spike_ins_on_two_samples() {
    let table = fixtures::table(4, &["S1", "S2"]);
    let scenarios: Vec<Box<dyn SpikeInScenario>> = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);
    let allocation =
        allocate::allocate(&table, fixtures::singleton_pool(6), &scenarios, &mut rng).unwrap();

    assert!(allocation.spike_ins.is_empty());
    assert!(allocation.samples.len() == 2);
    assert!(allocation.sample_rows(0).len() == 4);
    assert!(allocation.sample_rows(1).len() == 4);
    assert!(allocation.random.leftover == 2);
}

#[test]
fn test_allocate_with_all_spike_ins() {
    let table = fixtures::table(5, &["S1", "S2", "S3"]);
    let mut rng = StdRng::seed_from_u64(42);
    let allocation =
        allocate::allocate(&table, fixtures::spike_in_pool(6), &all_scenarios(), &mut rng)
            .unwrap();

    assert!(allocation.spike_ins.len() == 6);
    assert!(allocation.random.genomes.len() == 5);
    assert!(allocation.random.leftover == 1);

    // Spike-in and randomly assigned genomes never overlap
    let spiked = allocation
        .spike_ins
        .iter()
        .map(|s| s.taxon.taxon_oid())
        .collect::<HashSet<&str>>();

    assert!(allocation
        .random
        .genomes
        .iter()
        .all(|g| !spiked.contains(g.taxon_oid())));

    for i in 0..3 {
        let rows = allocation.sample_rows(i);

        assert!(rows.len() == 11);

        // Spike-ins come first, in scenario order
        for (row, spike_in) in rows.iter().zip(allocation.spike_ins.iter()) {
            assert!(row.1.taxon_oid() == spike_in.taxon.taxon_oid());
            assert!(row.0 == spike_in.abundances[i]);
        }

        // Then the OTUs in table order
        for (j, row) in rows[6..].iter().enumerate() {
            assert!(row.0 == table.samples()[i].abundances[j]);
            assert!(row.1.taxon_oid() == allocation.random.genomes[j].taxon_oid());
        }
    }
}

#[test]
fn test_spike_in_strata_come_from_the_table() {
    // Totals are 15, 30 and 45 with 5 OTUs
    let table = fixtures::table(5, &["S1", "S2", "S3"]);
    let mut rng = StdRng::seed_from_u64(1);
    let allocation =
        allocate::allocate(&table, fixtures::spike_in_pool(6), &all_scenarios(), &mut rng)
            .unwrap();

    assert!(allocation.strata[0].high == 3);
    assert!(allocation.strata[1].high == 7);
    assert!(allocation.strata[2].high == 11);

    // Divergent pair: high, medium, high
    assert!(allocation.spike_ins[0].abundances == vec![3.0, 1.0, 11.0]);
}

#[test]
fn test_allocate_capacity_after_spike_ins() {
    // 8 related genomes are all used up by the spike-ins, leaving 4 for 5 OTUs
    let table = fixtures::table(5, &["S1", "S2", "S3"]);
    let mut rng = StdRng::seed_from_u64(42);

    match allocate::allocate(&table, fixtures::spike_in_pool(4), &all_scenarios(), &mut rng) {
        Err(MinceError::InsufficientGenomes { otus, genomes }) => {
            assert!(otus == 5);
            assert!(genomes == 4);
        }
        other => panic!("unexpected result: {:?}", other.map(|a| a.spike_ins.len())),
    }
}

#[test]
fn test_allocate_spike_ins_need_three_samples() {
    let table = fixtures::table(2, &["S1", "S2"]);
    let mut rng = StdRng::seed_from_u64(42);

    match allocate::allocate(&table, fixtures::spike_in_pool(6), &all_scenarios(), &mut rng) {
        Err(MinceError::SpikeInSampleCount(n)) => assert!(n == 2),
        other => panic!("unexpected result: {:?}", other.map(|a| a.spike_ins.len())),
    }
}
