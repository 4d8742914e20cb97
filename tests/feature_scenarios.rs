mod common;

use std::sync::Arc;

use bio_types::annot::contig::Contig as BioContig;
use bio_types::strand::ReqStrand;
use common::init_logger;
use rstest::{
    fixture,
    rstest,
};
use seqfeatures::prelude::*;

type ProteinLocation = Contig<FeatSmallStr, u32>;

fn loc(
    start: u32,
    end: u32,
) -> ProteinLocation {
    Contig::new("P04637".into(), start, end, Strand::None)
}

#[fixture]
fn uniprot() -> Feature<ProteinLocation> {
    init_logger();
    let mut feature = Feature::new("misc_feature", "UniProt");
    feature.add_qualifier(Qualifier::new("db_xref", "GO:0005515").unwrap());
    feature.add_qualifier(Qualifier::new("db_xref", "GO:0006412").unwrap());
    feature
}

#[rstest]
fn misc_feature_db_xrefs(uniprot: Feature<ProteinLocation>) {
    assert_eq!(uniprot.feature_type(), "misc_feature");
    assert_eq!(uniprot.source(), "UniProt");

    let xrefs = uniprot.qualifiers_by_name("db_xref");
    assert_eq!(xrefs.len(), 2);
    assert_eq!(xrefs[0].value(), "GO:0005515");
    assert_eq!(xrefs[1].value(), "GO:0006412");

    let dbref = uniprot.database_reference().unwrap();
    let pairs: Vec<_> = dbref
        .iter()
        .map(|x| (x.database(), x.reference()))
        .collect();
    assert_eq!(pairs, vec![("GO", "0005515"), ("GO", "0006412")]);
    assert!(uniprot.first_qualifier_by_value("unknown").is_none());
}

#[rstest]
fn genbank_style_editing(mut uniprot: Feature<ProteinLocation>) {
    // Evidence accumulates, singleton fields are overwritten
    uniprot.add_qualifier(Qualifier::new("db_xref", "InterPro:IPR002117").unwrap());
    uniprot.set_qualifier(Qualifier::new("gene", "TP53").unwrap());
    uniprot.set_qualifier(Qualifier::new("gene", "p53").unwrap());

    assert_eq!(uniprot.all_databases(), vec!["GO", "InterPro"]);
    assert_eq!(
        uniprot
            .qualifier_by_name("gene")
            .map(|q| q.value().into_owned()),
        Some("p53".to_string())
    );
    assert_eq!(uniprot.qualifiers().len(), 4);
}

#[test]
fn feature_tree_with_layout_order() {
    init_logger();
    let mut store = FeatureStore::with_config(&FeatureConfig::default());
    let chain = store.insert(Feature::new("chain", "UniProt").with_location(loc(1, 393)));
    let dna_binding = store
        .insert_child(chain, Feature::new("DNA-binding", "UniProt").with_location(loc(102, 292)))
        .unwrap();
    let region = store
        .insert_child(chain, Feature::new("region", "UniProt").with_location(loc(1, 83)))
        .unwrap();
    let short = store
        .insert_child(chain, Feature::new("motif", "UniProt").with_location(loc(1, 10)))
        .unwrap();

    let ordered = store.sorted_ids(store.children(chain), FeatureOrdering::LocationLength);
    assert_eq!(ordered, vec![region, short, dna_binding]);

    let by_length = store.sorted_ids(store.children(chain), FeatureOrdering::Length);
    assert_eq!(by_length, vec![short, region, dna_binding]);

    store
        .sort_children(chain, FeatureOrdering::Type)
        .unwrap();
    assert_eq!(store.children(chain), &[dna_binding, short, region]);
}

#[test]
fn location_is_shared_not_copied() {
    let location = Arc::new(loc(100, 200));
    let mut store = FeatureStore::with_config(&FeatureConfig::default());
    let a = store.insert(Feature::new("site", "x").with_shared_location(location.clone()));
    let copy = store.copy_subtree(a).unwrap();

    let original = store.get(a).unwrap().location_handle().unwrap();
    let copied = store.get(copy).unwrap().location_handle().unwrap();
    assert!(Arc::ptr_eq(original, copied));
    assert!(Arc::ptr_eq(original, &location));
}

#[test]
fn bio_types_locations() {
    let mut features = vec![
        Feature::new("b", "x").with_location(BioContig::new("chr1", 50, 10, ReqStrand::Forward)),
        Feature::new("a", "x").with_location(BioContig::new("chr1", 50, 40, ReqStrand::Reverse)),
        Feature::new("c", "x").with_location(BioContig::new("chr1", 5, 5, ReqStrand::Forward)),
    ];
    try_sort(&mut features, FeatureOrdering::LocationLength).unwrap();
    let types: Vec<_> = features.iter().map(|f| f.feature_type()).collect();
    assert_eq!(types, vec!["c", "a", "b"]);
    assert_eq!(features[1].end(), Some(90));
}

#[rstest]
#[case::spans(vec![(0, 5), (10, 11), (100, 110)], vec![1, 5, 10])]
#[case::ties(vec![(0, 3), (7, 10), (1, 2)], vec![1, 3, 3])]
fn length_ordering(
    #[case] ranges: Vec<(u32, u32)>,
    #[case] expected: Vec<u32>,
) {
    let mut features: Vec<Feature<ProteinLocation>> = ranges
        .into_iter()
        .map(|(s, e)| Feature::new("x", "y").with_location(loc(s, e)))
        .collect();
    features.sort_by(by_length);
    let spans: Vec<_> = features.iter().map(|f| f.span().unwrap()).collect();
    assert_eq!(spans, expected);
}

#[test]
fn type_ordering_is_stable() {
    let mut features: Vec<Feature<ProteinLocation>> = ["helix", "domain", "helix"]
        .into_iter()
        .enumerate()
        .map(|(i, t)| Feature::new(t, "x").with_description(i.to_string()))
        .collect();
    features.sort_by(by_type);
    let got: Vec<_> = features
        .iter()
        .map(|f| (f.feature_type(), f.description()))
        .collect();
    assert_eq!(got, vec![("domain", "1"), ("helix", "0"), ("helix", "2")]);
}

#[test]
fn location_ordering_law() {
    let a = Feature::new("A", "x").with_location(loc(10, 50));
    let b = Feature::new("B", "x").with_location(loc(10, 30));
    let c = Feature::new("C", "x").with_location(loc(20, 25));
    let mut features = vec![c.clone(), b.clone(), a.clone()];
    features.sort_by(by_location_length);
    let types: Vec<_> = features.iter().map(|f| f.feature_type()).collect();
    assert_eq!(types, vec!["A", "B", "C"]);

    assert_eq!(by_location_length(&a, &a), std::cmp::Ordering::Equal);
    assert_eq!(by_location_length(&b, &a), std::cmp::Ordering::Greater);
}
