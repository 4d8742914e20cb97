use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use super::qualifier::DbXref;

/// Ordered group of database cross-references belonging to one feature.
///
/// Pairs keep insertion order. The same database may appear several times,
/// once per accession.
///
/// Every positional accessor returns `None` when the index is out of range,
/// including [`DatabaseReference::get`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseReference {
    xrefs: Vec<DbXref>,
}

impl DatabaseReference {
    pub fn new() -> Self { Self::default() }

    /// Appends a pair built from a database name and an accession.
    pub fn try_push<D, R>(
        &mut self,
        database: D,
        reference: R,
    ) -> anyhow::Result<()>
    where
        D: AsRef<str>,
        R: Into<String>, {
        self.xrefs
            .push(DbXref::new(database, reference)?);
        Ok(())
    }

    pub fn push(
        &mut self,
        xref: DbXref,
    ) {
        self.xrefs.push(xref);
    }

    /// Builder form of [`DatabaseReference::try_push`].
    pub fn with<D, R>(
        mut self,
        database: D,
        reference: R,
    ) -> anyhow::Result<Self>
    where
        D: AsRef<str>,
        R: Into<String>, {
        self.try_push(database, reference)?;
        Ok(self)
    }

    pub fn len(&self) -> usize { self.xrefs.len() }

    pub fn is_empty(&self) -> bool { self.xrefs.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, DbXref> { self.xrefs.iter() }

    pub fn as_slice(&self) -> &[DbXref] { &self.xrefs }

    pub fn get(
        &self,
        i: usize,
    ) -> Option<&DbXref> {
        self.xrefs.get(i)
    }

    /// Database name of pair `i`.
    pub fn database(
        &self,
        i: usize,
    ) -> Option<&str> {
        self.get(i).map(DbXref::database)
    }

    /// Accession of pair `i`.
    pub fn reference(
        &self,
        i: usize,
    ) -> Option<&str> {
        self.get(i).map(DbXref::reference)
    }

    pub fn first(&self) -> Option<&DbXref> { self.get(0) }

    pub fn first_database(&self) -> Option<&str> { self.database(0) }

    pub fn first_reference(&self) -> Option<&str> { self.reference(0) }

    /// Distinct database names in order of first appearance.
    pub fn databases(&self) -> Vec<&str> {
        self.xrefs
            .iter()
            .map(DbXref::database)
            .unique()
            .collect()
    }

    /// Every accession, in pair order.
    pub fn references(&self) -> Vec<&str> {
        self.xrefs
            .iter()
            .map(DbXref::reference)
            .collect()
    }

    /// Accessions recorded for `database`, in pair order.
    pub fn references_in(
        &self,
        database: &str,
    ) -> Vec<&str> {
        self.xrefs
            .iter()
            .filter(|xref| xref.database() == database)
            .map(DbXref::reference)
            .collect()
    }

    /// The `i`-th accession recorded for `database`.
    pub fn reference_in(
        &self,
        database: &str,
        i: usize,
    ) -> Option<&str> {
        self.xrefs
            .iter()
            .filter(|xref| xref.database() == database)
            .nth(i)
            .map(DbXref::reference)
    }

    pub fn first_reference_in(
        &self,
        database: &str,
    ) -> Option<&str> {
        self.reference_in(database, 0)
    }

    pub fn contains_database(
        &self,
        database: &str,
    ) -> bool {
        self.xrefs
            .iter()
            .any(|xref| xref.database() == database)
    }
}

impl From<DbXref> for DatabaseReference {
    fn from(value: DbXref) -> Self {
        Self {
            xrefs: vec![value],
        }
    }
}

impl FromIterator<DbXref> for DatabaseReference {
    fn from_iter<T: IntoIterator<Item = DbXref>>(iter: T) -> Self {
        Self {
            xrefs: iter.into_iter().collect(),
        }
    }
}

impl Extend<DbXref> for DatabaseReference {
    fn extend<T: IntoIterator<Item = DbXref>>(
        &mut self,
        iter: T,
    ) {
        self.xrefs.extend(iter)
    }
}

impl IntoIterator for DatabaseReference {
    type IntoIter = std::vec::IntoIter<DbXref>;
    type Item = DbXref;

    fn into_iter(self) -> Self::IntoIter { self.xrefs.into_iter() }
}

impl<'a> IntoIterator for &'a DatabaseReference {
    type IntoIter = std::slice::Iter<'a, DbXref>;
    type Item = &'a DbXref;

    fn into_iter(self) -> Self::IntoIter { self.xrefs.iter() }
}
