use std::any::Any;
use std::fmt;
use std::sync::Arc;

use arcstr::ArcStr;

use super::dbref::DatabaseReference;
use super::qualifier::Qualifier;
use super::qualifier_index::QualifierIndex;
use crate::data_structs::coords::SeqLocation;
use crate::{
    getter_fn,
    with_field_fn,
};

/// Caller-attached data. The crate only stores and hands it back; cloning a
/// feature shares the payload instead of copying it.
pub type UserPayload = Arc<dyn Any + Send + Sync>;

/// An annotation on a sequence: a type, a source, an optional shared
/// location and a [`QualifierIndex`].
///
/// Parent/child relations are kept by
/// [`FeatureStore`](super::FeatureStore), not by the feature itself.
pub struct Feature<L> {
    feature_type:      ArcStr,
    source:            ArcStr,
    description:       String,
    short_description: String,
    location:          Option<Arc<L>>,
    user_payload:      Option<UserPayload>,
    qualifiers:        QualifierIndex,
}

impl<L> Feature<L> {
    /// A feature could be a single sequence position like a mutation, or a
    /// region like a domain or a helix. Both strings are stored as given.
    pub fn new<T, S>(
        feature_type: T,
        source: S,
    ) -> Self
    where
        T: Into<ArcStr>,
        S: Into<ArcStr>, {
        Self {
            feature_type:      feature_type.into(),
            source:            source.into(),
            description:       String::new(),
            short_description: String::new(),
            location:          None,
            user_payload:      None,
            qualifiers:        QualifierIndex::new(),
        }
    }

    with_field_fn!(description, String);

    with_field_fn!(short_description, String);

    getter_fn!(qualifiers, mut QualifierIndex);

    pub fn with_location(
        mut self,
        location: L,
    ) -> Self {
        self.location = Some(Arc::new(location));
        self
    }

    pub fn with_shared_location(
        mut self,
        location: Arc<L>,
    ) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_qualifier(
        mut self,
        qualifier: Qualifier,
    ) -> Self {
        self.qualifiers.add(qualifier);
        self
    }

    pub fn feature_type(&self) -> &str { self.feature_type.as_str() }

    pub fn set_feature_type<T: Into<ArcStr>>(
        &mut self,
        feature_type: T,
    ) {
        self.feature_type = feature_type.into();
    }

    pub fn source(&self) -> &str { self.source.as_str() }

    pub fn set_source<S: Into<ArcStr>>(
        &mut self,
        source: S,
    ) {
        self.source = source.into();
    }

    pub fn description(&self) -> &str { self.description.as_str() }

    pub fn set_description<S: Into<String>>(
        &mut self,
        description: S,
    ) {
        self.description = description.into();
    }

    pub fn short_description(&self) -> &str { self.short_description.as_str() }

    pub fn set_short_description<S: Into<String>>(
        &mut self,
        short_description: S,
    ) {
        self.short_description = short_description.into();
    }

    pub fn location(&self) -> Option<&L> { self.location.as_deref() }

    /// The shared handle, for callers that want to hand the same location to
    /// other features.
    pub fn location_handle(&self) -> Option<&Arc<L>> { self.location.as_ref() }

    pub fn set_location(
        &mut self,
        location: L,
    ) {
        self.location = Some(Arc::new(location));
    }

    /// Assigns a location that is shared with other features or owners.
    pub fn set_shared_location(
        &mut self,
        location: Arc<L>,
    ) {
        self.location = Some(location);
    }

    pub fn clear_location(&mut self) -> Option<Arc<L>> { self.location.take() }

    pub fn user_payload(&self) -> Option<&UserPayload> { self.user_payload.as_ref() }

    pub fn set_user_payload<T: Any + Send + Sync>(
        &mut self,
        payload: T,
    ) {
        self.user_payload = Some(Arc::new(payload));
    }

    pub fn set_user_payload_shared(
        &mut self,
        payload: UserPayload,
    ) {
        self.user_payload = Some(payload);
    }

    pub fn take_user_payload(&mut self) -> Option<UserPayload> { self.user_payload.take() }

    pub fn qualifier_index(&self) -> &QualifierIndex { &self.qualifiers }

    pub fn set_qualifier_index(
        &mut self,
        qualifiers: QualifierIndex,
    ) {
        self.qualifiers = qualifiers;
    }

    /// Replaces every qualifier of this feature.
    pub fn set_qualifiers<I: IntoIterator<Item = Qualifier>>(
        &mut self,
        qualifiers: I,
    ) {
        self.qualifiers.set_all(qualifiers);
    }

    pub fn qualifiers(&self) -> &[Qualifier] { self.qualifiers.all() }

    pub fn add_qualifier(
        &mut self,
        qualifier: Qualifier,
    ) {
        self.qualifiers.add(qualifier)
    }

    pub fn add_qualifiers<I: IntoIterator<Item = Qualifier>>(
        &mut self,
        qualifiers: I,
    ) {
        self.qualifiers.add_all(qualifiers)
    }

    /// Overwrites every qualifier sharing the name of `qualifier`.
    pub fn set_qualifier(
        &mut self,
        qualifier: Qualifier,
    ) {
        self.qualifiers.set(qualifier)
    }

    pub fn qualifiers_by_name(
        &self,
        name: &str,
    ) -> Vec<&Qualifier> {
        self.qualifiers.by_name(name)
    }

    pub fn qualifier_by_name(
        &self,
        name: &str,
    ) -> Option<&Qualifier> {
        self.qualifiers.first_by_name(name)
    }

    pub fn qualifiers_by_value(
        &self,
        value: &str,
    ) -> Vec<&Qualifier> {
        self.qualifiers.by_value(value)
    }

    pub fn first_qualifier_by_value(
        &self,
        value: &str,
    ) -> Option<&Qualifier> {
        self.qualifiers.first_by_value(value)
    }

    pub fn qualifiers_by_name_value(
        &self,
        name: &str,
        value: &str,
    ) -> Vec<&Qualifier> {
        self.qualifiers
            .by_name_value(name, value)
    }

    pub fn database_reference(&self) -> Option<DatabaseReference> {
        self.qualifiers.database_reference()
    }

    pub fn set_database_reference(
        &mut self,
        dbref: DatabaseReference,
    ) {
        self.qualifiers
            .set_database_reference(dbref)
    }

    pub fn add_database_reference(
        &mut self,
        dbref: DatabaseReference,
    ) {
        self.qualifiers
            .add_database_reference(dbref)
    }

    pub fn all_databases(&self) -> Vec<&str> { self.qualifiers.all_databases() }

    pub fn all_database_references(&self) -> Vec<&str> {
        self.qualifiers.all_database_references()
    }

    pub fn database_reference_at(
        &self,
        i: usize,
    ) -> Option<DatabaseReference> {
        self.qualifiers.database_reference_at(i)
    }

    pub fn database(
        &self,
        i: usize,
    ) -> Option<&str> {
        self.qualifiers.database(i)
    }

    pub fn reference(
        &self,
        i: usize,
    ) -> Option<&str> {
        self.qualifiers.reference(i)
    }

    pub fn reference_in(
        &self,
        database: &str,
        i: usize,
    ) -> Option<&str> {
        self.qualifiers.reference_in(database, i)
    }

    pub fn references_in(
        &self,
        database: &str,
    ) -> Vec<&str> {
        self.qualifiers.references_in(database)
    }

    pub fn first_database_reference(&self) -> Option<DatabaseReference> {
        self.qualifiers.first_database_reference()
    }

    pub fn first_database(&self) -> Option<&str> { self.qualifiers.first_database() }

    pub fn first_reference(&self) -> Option<&str> { self.qualifiers.first_reference() }

    pub fn first_reference_in(
        &self,
        database: &str,
    ) -> Option<&str> {
        self.qualifiers.first_reference_in(database)
    }
}

impl<L: SeqLocation> Feature<L> {
    pub fn start(&self) -> Option<L::Pos> { self.location().map(SeqLocation::start) }

    pub fn end(&self) -> Option<L::Pos> { self.location().map(SeqLocation::end) }

    /// `|end - start|`, or `None` without a location.
    pub fn span(&self) -> Option<L::Pos> { self.location().map(SeqLocation::span) }

    /// # Panics
    ///
    /// Panics if no location has been assigned.
    pub(crate) fn expect_location(&self) -> &L {
        match self.location() {
            Some(location) => location,
            None => {
                panic!(
                    "Feature '{}' from '{}' has no location; location-based \
                     orderings require one",
                    self.feature_type, self.source
                )
            },
        }
    }
}

impl<L> Clone for Feature<L> {
    /// Deep-copies descriptions and qualifiers. The location and the user
    /// payload are shared with the original.
    fn clone(&self) -> Self {
        Self {
            feature_type:      self.feature_type.clone(),
            source:            self.source.clone(),
            description:       self.description.clone(),
            short_description: self.short_description.clone(),
            location:          self.location.clone(),
            user_payload:      self.user_payload.clone(),
            qualifiers:        self.qualifiers.clone(),
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for Feature<L> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Feature")
            .field("feature_type", &self.feature_type)
            .field("source", &self.source)
            .field("description", &self.description)
            .field("short_description", &self.short_description)
            .field("location", &self.location)
            .field("user_payload", &self.user_payload.as_ref().map(|_| ".."))
            .field("qualifiers", &self.qualifiers)
            .finish()
    }
}
