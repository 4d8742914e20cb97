//! Orderings over features for layout and export code.
//!
//! The comparators are plain functions with no state. [`FeatureOrdering`]
//! names them, and [`FeatureSort`] chains several into a multi-key sort:
//!
//! ```
//! use seqfeatures::prelude::*;
//!
//! let mut features: Vec<Feature<std::ops::Range<u32>>> = vec![
//!     Feature::new("helix", "PDB").with_location(10..30),
//!     Feature::new("domain", "Pfam").with_location(10..30),
//!     Feature::new("helix", "PDB").with_location(5..8),
//! ];
//! let sort = FeatureOrdering::Length.then(FeatureOrdering::Type);
//! features.sort_by(|a, b| sort.compare(a, b));
//!
//! let types: Vec<_> = features.iter().map(|f| f.feature_type()).collect();
//! assert_eq!(types, ["helix", "domain", "helix"]);
//! ```

use std::cmp::Ordering;

use anyhow::bail;
use serde::{
    Deserialize,
    Serialize,
};

use super::feature::Feature;
use crate::data_structs::coords::SeqLocation;

/// Start ascending, then end descending, so that among features starting at
/// the same position the longest comes first.
///
/// # Panics
///
/// Panics if either feature has no location.
pub fn by_location_length<L: SeqLocation>(
    a: &Feature<L>,
    b: &Feature<L>,
) -> Ordering {
    let (a, b) = (a.expect_location(), b.expect_location());
    a.start()
        .cmp(&b.start())
        .then_with(|| b.end().cmp(&a.end()))
}

/// `|end - start|` ascending. Strand is not taken into account.
///
/// # Panics
///
/// Panics if either feature has no location.
pub fn by_length<L: SeqLocation>(
    a: &Feature<L>,
    b: &Feature<L>,
) -> Ordering {
    a.expect_location()
        .span()
        .cmp(&b.expect_location().span())
}

/// Lexicographic order of the feature type.
pub fn by_type<L>(
    a: &Feature<L>,
    b: &Feature<L>,
) -> Ordering {
    a.feature_type().cmp(b.feature_type())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureOrdering {
    /// See [`by_location_length`].
    LocationLength,
    /// See [`by_length`].
    Length,
    /// See [`by_type`].
    Type,
}

impl FeatureOrdering {
    pub fn compare<L: SeqLocation>(
        self,
        a: &Feature<L>,
        b: &Feature<L>,
    ) -> Ordering {
        match self {
            FeatureOrdering::LocationLength => by_location_length(a, b),
            FeatureOrdering::Length => by_length(a, b),
            FeatureOrdering::Type => by_type(a, b),
        }
    }

    pub fn needs_location(self) -> bool {
        matches!(
            self,
            FeatureOrdering::LocationLength | FeatureOrdering::Length
        )
    }

    /// Sorts by `self`, breaking ties with `next`.
    pub fn then(
        self,
        next: FeatureOrdering,
    ) -> FeatureSort {
        FeatureSort::from(self).then(next)
    }

    /// The same key in descending order.
    pub fn reversed(self) -> FeatureSort {
        FeatureSort::default().then_reversed(self)
    }
}

/// A list of ordering keys applied one after another.
///
/// An empty `FeatureSort` considers all features equal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSort {
    keys: Vec<SortKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SortKey {
    ordering:   FeatureOrdering,
    descending: bool,
}

impl FeatureSort {
    pub fn then(
        mut self,
        ordering: FeatureOrdering,
    ) -> Self {
        self.keys.push(SortKey {
            ordering,
            descending: false,
        });
        self
    }

    pub fn then_reversed(
        mut self,
        ordering: FeatureOrdering,
    ) -> Self {
        self.keys.push(SortKey {
            ordering,
            descending: true,
        });
        self
    }

    pub fn needs_location(&self) -> bool {
        self.keys
            .iter()
            .any(|key| key.ordering.needs_location())
    }

    pub fn compare<L: SeqLocation>(
        &self,
        a: &Feature<L>,
        b: &Feature<L>,
    ) -> Ordering {
        self.keys
            .iter()
            .fold(Ordering::Equal, |acc, key| {
                acc.then_with(|| {
                    let ord = key.ordering.compare(a, b);
                    if key.descending {
                        ord.reverse()
                    }
                    else {
                        ord
                    }
                })
            })
    }

    /// Fails if a location-based key would meet a feature without a location.
    pub fn check<'a, L, I>(
        &self,
        features: I,
    ) -> anyhow::Result<()>
    where
        L: SeqLocation + 'a,
        I: IntoIterator<Item = &'a Feature<L>>, {
        if !self.needs_location() {
            return Ok(());
        }
        for (i, feature) in features.into_iter().enumerate() {
            if feature.location().is_none() {
                bail!(
                    "Feature #{} ('{}') has no location and cannot be sorted \
                     by {:?}",
                    i,
                    feature.feature_type(),
                    self.keys
                        .iter()
                        .map(|k| k.ordering)
                        .collect::<Vec<_>>()
                );
            }
        }
        Ok(())
    }
}

impl From<FeatureOrdering> for FeatureSort {
    fn from(value: FeatureOrdering) -> Self { FeatureSort::default().then(value) }
}

/// Stable sort that refuses to start when a location-based key would meet
/// a feature without a location. On error `features` is left untouched.
pub fn try_sort<L, S>(
    features: &mut [Feature<L>],
    sort: S,
) -> anyhow::Result<()>
where
    L: SeqLocation,
    S: Into<FeatureSort>, {
    let sort = sort.into();
    sort.check(features.iter())?;
    features.sort_by(|a, b| sort.compare(a, b));
    Ok(())
}
