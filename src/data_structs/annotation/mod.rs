//! Sequence features and their annotations.
//!
//! - [`Qualifier`] is a single annotation: a free-form name/value pair or a
//!   database cross-reference ([`DbXref`]).
//! - [`QualifierIndex`] stores qualifiers in insertion order and looks them
//!   up by name, by value, or both. Cross-references are also available in
//!   aggregate as a [`DatabaseReference`].
//! - [`Feature`] carries a type, a source, descriptions, a shared location
//!   and a qualifier index.
//! - [`FeatureStore`] links features into a containment hierarchy.
//! - [`ordering`] provides comparators for laying out feature collections.

mod dbref;
mod feature;
pub mod ordering;
mod qualifier;
mod qualifier_index;
mod store;

pub use dbref::DatabaseReference;
pub use feature::{
    Feature,
    UserPayload,
};
pub use ordering::{
    FeatureOrdering,
    FeatureSort,
};
pub use qualifier::{
    DbXref,
    Qualifier,
    DBXREF_QUALIFIER_NAME,
};
pub use qualifier_index::QualifierIndex;
pub use store::{
    FeatureId,
    FeatureStore,
};
