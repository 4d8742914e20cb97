//! # seqfeatures
//!
//! `seqfeatures` models annotations attached to positions of a biological
//! sequence: mutation sites, domains, secondary-structure elements and the
//! like. Each [`Feature`] has a type, a source, an optional location, and an
//! open-ended set of GenBank-style qualifiers, some of which are
//! cross-references to external databases.
//!
//! ## Key Features
//!
//! * **Qualifier index**: [`QualifierIndex`] keeps qualifiers in insertion
//!   order, allows several qualifiers with the same name, and distinguishes
//!   appending ([`QualifierIndex::add`]) from overwriting every qualifier of
//!   a name ([`QualifierIndex::set`]).
//! * **Database references**: `db_xref` qualifiers are typed
//!   ([`DbXref`]) and can be read and written as a whole through
//!   [`DatabaseReference`], with per-database and positional accessors.
//! * **Feature trees**: [`FeatureStore`] is an arena of features with
//!   parent/child links that are always kept consistent in both directions.
//! * **Orderings**: [`FeatureOrdering`] comparators (location with longest
//!   first, length, type) for layout code, chainable through [`FeatureSort`].
//!
//! Locations are external to the crate. Any type implementing
//! [`SeqLocation`] can be used, including the bundled [`Contig`],
//! `std::ops::Range` and `bio_types` contigs.
//!
//! Qualifier classification and tree editing behaviour can be tuned with
//! [`FeatureConfig`]; set `SEQFEATURES_CONFIG` to the path of a JSON file to
//! change the process-wide defaults.
//!
//! ## Usage
//!
//! ```
//! use seqfeatures::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut store = FeatureStore::new();
//!
//!     let domain = Feature::new("domain", "Pfam")
//!         .with_location(Contig::new(FeatSmallStr::from("P12345"), 10u32, 120, Strand::None))
//!         .with_qualifier(Qualifier::new("db_xref", "Pfam:PF00069")?);
//!     let domain = store.insert(domain);
//!
//!     let mut helix = Feature::new("helix", "PDB");
//!     helix.set_location(Contig::new(FeatSmallStr::from("P12345"), 20u32, 35, Strand::None));
//!     helix.add_qualifier(Qualifier::new("note", "amphipathic")?);
//!     let helix = store.insert_child(domain, helix)?;
//!
//!     assert_eq!(store.parent(helix), Some(domain));
//!     assert_eq!(store.children(domain), &[helix]);
//!
//!     let domain = store.get(domain).unwrap();
//!     assert_eq!(domain.first_database(), Some("Pfam"));
//!     assert_eq!(domain.first_reference_in("Pfam"), Some("PF00069"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_structs;
pub mod prelude;
pub mod utils;

pub use config::{
    FeatureConfig,
    ReparentPolicy,
};
pub use data_structs::annotation::{
    DatabaseReference,
    DbXref,
    Feature,
    FeatureId,
    FeatureOrdering,
    FeatureSort,
    FeatureStore,
    Qualifier,
    QualifierIndex,
};
pub use data_structs::coords::{
    Contig,
    SeqLocation,
};
