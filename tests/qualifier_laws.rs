mod common;

use common::{
    init_logger,
    QualifierGenerator,
};
use itertools::Itertools;
use rstest::rstest;
use seqfeatures::prelude::*;

#[rstest]
#[case::short(1, 5)]
#[case::medium(2, 50)]
#[case::long(3, 500)]
fn by_name_is_insertion_ordered_subsequence(
    #[case] seed: u64,
    #[case] n: usize,
) {
    init_logger();
    let mut generator = QualifierGenerator::new(seed);
    let added = generator.take(n);
    let index: QualifierIndex = added.iter().cloned().collect();

    for name in added.iter().map(Qualifier::name).unique() {
        let expected = added
            .iter()
            .filter(|q| q.name() == name)
            .collect_vec();
        assert_eq!(index.by_name(name), expected);
    }
    assert_eq!(index.all(), added.as_slice());
}

#[rstest]
#[case(11)]
#[case(12)]
#[case(13)]
fn set_leaves_exactly_one(#[case] seed: u64) {
    let mut generator = QualifierGenerator::new(seed);
    let mut index: QualifierIndex = generator.take(100).into_iter().collect();

    for _ in 0..20 {
        let q = generator.next_qualifier();
        let others_before = index
            .iter()
            .filter(|e| e.name() != q.name())
            .cloned()
            .collect_vec();

        index.set(q.clone());

        assert_eq!(index.by_name(q.name()), vec![&q]);
        let others_after = index
            .iter()
            .filter(|e| e.name() != q.name())
            .cloned()
            .collect_vec();
        assert_eq!(others_before, others_after);
    }
}

#[rstest]
#[case(21)]
#[case(22)]
fn add_only_appends(#[case] seed: u64) {
    let mut generator = QualifierGenerator::new(seed);
    let mut index: QualifierIndex = generator.take(50).into_iter().collect();

    for _ in 0..50 {
        let q = generator.next_qualifier();
        let probe = generator.name();
        let before = index
            .by_name(probe)
            .into_iter()
            .cloned()
            .collect_vec();

        index.add(q.clone());

        let after = index
            .by_name(probe)
            .into_iter()
            .cloned()
            .collect_vec();
        if probe == q.name() {
            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(&after[..before.len()], before.as_slice());
            assert_eq!(after.last(), Some(&q));
        }
        else {
            assert_eq!(before, after);
        }
    }
}

#[rstest]
#[case(31)]
#[case(32)]
fn by_value_matches_linear_scan(#[case] seed: u64) {
    let mut generator = QualifierGenerator::new(seed);
    let mut index: QualifierIndex = generator.take(200).into_iter().collect();
    // Interleave removals so the lookup tables get rebuilt
    index.set(Qualifier::new("gene", "TP53").unwrap());
    index.remove_by_name("note");

    for value in ["TP53", "GO:0005515", "PDB:1TUP", "kinase", "absent"] {
        let expected = index
            .iter()
            .filter(|q| q.value() == value)
            .collect_vec();
        assert_eq!(index.by_value(value), expected);
        assert_eq!(index.first_by_value(value), expected.first().copied());
    }
}

#[test]
fn database_reference_round_trip() {
    let dbref = DatabaseReference::new()
        .with("GO", "0005515")
        .and_then(|d| d.with("PDB", "1TUP"))
        .and_then(|d| d.with("GO", "0006412"))
        .and_then(|d| d.with("UniProtKB", "P04637"))
        .unwrap();

    let mut generator = QualifierGenerator::new(41);
    let mut index: QualifierIndex = generator.take(30).into_iter().collect();
    index.set_database_reference(dbref.clone());

    assert_eq!(index.database_reference(), Some(dbref.clone()));

    // Setting again replaces instead of accumulating
    index.set_database_reference(dbref.clone());
    assert_eq!(index.database_reference(), Some(dbref));
}

#[test]
fn first_by_value_absent() {
    let index: QualifierIndex = QualifierGenerator::new(51).take(20).into_iter().collect();
    assert!(index.first_by_value("unknown").is_none());
    assert!(index.by_name("unknown").is_empty());
}
