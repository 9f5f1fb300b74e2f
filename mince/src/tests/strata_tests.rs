/**
 * file: strata_tests.rs
 * desc: Abundance strata tests.
 */
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::fixtures;
use crate::strata::{sample_strata, AbundanceStrata, Stratum};

#[test]
fn test_strata_from_abundances() {
    let strata = AbundanceStrata::from_abundances(&[600.0, 300.0, 100.0]);

    assert!(strata.low == 10);
    assert!(strata.medium == 50);
    assert!(strata.high == 250);

    assert!(strata.value(Stratum::Low) == 10);
    assert!(strata.value(Stratum::Medium) == 50);
    assert!(strata.value(Stratum::High) == 250);
}

#[test]
fn test_strata_truncate() {
    // Total is 99, so 0.99 / 4.95 / 24.75
    let strata = AbundanceStrata::from_abundances(&[90.0, 9.0]);

    assert!(strata.low == 0);
    assert!(strata.medium == 4);
    assert!(strata.high == 24);
}

#[test]
fn test_strata_are_monotonic() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let n = rng.gen_range(0..50);
        let abundances = (0..n)
            .map(|_| rng.gen_range(0.0..10_000.0))
            .collect::<Vec<f64>>();
        let strata = AbundanceStrata::from_abundances(&abundances);

        assert!(strata.low <= strata.medium);
        assert!(strata.medium <= strata.high);
    }
}

#[test]
fn test_sample_strata_follow_sample_order() {
    // Column j abundances are (i + 1) * (j + 1), so totals are 10, 20 and 30 with 4 OTUs
    let table = fixtures::table(4, &["S1", "S2", "S3"]);
    let strata = sample_strata(&table);

    assert!(strata.len() == 3);
    assert!(strata[0].high == 2);
    assert!(strata[1].high == 5);
    assert!(strata[2].high == 7);
    assert!(strata[2].medium == 1);
}
