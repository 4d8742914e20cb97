use hashbrown::HashMap;
use itertools::Itertools;
use log::trace;
use serde::{
    Deserialize,
    Serialize,
};

use super::dbref::DatabaseReference;
use super::qualifier::{
    DbXref,
    Qualifier,
    DBXREF_QUALIFIER_NAME,
};

/// Insertion-ordered, multi-valued store of [`Qualifier`]s.
///
/// Several qualifiers may share a name. Every listing returns entries in the
/// order they were added. Name and value lookups go through hash indexes
/// that are extended on [`add`](QualifierIndex::add) and rebuilt whenever
/// entries are removed.
///
/// [`add`](QualifierIndex::add) never removes anything, while
/// [`set`](QualifierIndex::set) first drops every entry with the same name.
///
/// Database cross-references are stored as ordinary entries and exposed in
/// aggregate through [`database_reference`](QualifierIndex::database_reference).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Qualifier>", into = "Vec<Qualifier>")]
pub struct QualifierIndex {
    entries:  Vec<Qualifier>,
    by_name:  HashMap<String, Vec<usize>>,
    by_value: HashMap<String, Vec<usize>>,
}

impl QualifierIndex {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// All qualifiers in insertion order.
    pub fn all(&self) -> &[Qualifier] { &self.entries }

    pub fn iter(&self) -> std::slice::Iter<'_, Qualifier> { self.entries.iter() }

    /// Appends `qualifier`, keeping every existing entry.
    pub fn add(
        &mut self,
        qualifier: Qualifier,
    ) {
        let pos = self.entries.len();
        self.index_entry(pos, &qualifier);
        self.entries.push(qualifier);
    }

    pub fn add_all<I: IntoIterator<Item = Qualifier>>(
        &mut self,
        qualifiers: I,
    ) {
        for qualifier in qualifiers {
            self.add(qualifier)
        }
    }

    /// Removes every entry named like `qualifier`, then appends it.
    pub fn set(
        &mut self,
        qualifier: Qualifier,
    ) {
        let removed = self.remove_by_name(qualifier.name());
        if !removed.is_empty() {
            trace!(
                "Replaced {} qualifier(s) named '{}'",
                removed.len(),
                qualifier.name()
            );
        }
        self.add(qualifier);
    }

    /// Replaces the whole content with `qualifiers`.
    pub fn set_all<I: IntoIterator<Item = Qualifier>>(
        &mut self,
        qualifiers: I,
    ) {
        self.clear();
        self.add_all(qualifiers);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_name.clear();
        self.by_value.clear();
    }

    /// Removes and returns every entry named `name`, in insertion order.
    pub fn remove_by_name(
        &mut self,
        name: &str,
    ) -> Vec<Qualifier> {
        if !self.by_name.contains_key(name) {
            return Vec::new();
        }
        self.extract(|q| q.name() == name)
    }

    /// Every entry named `name`, in insertion order.
    ///
    /// Cross-references are stored under [`DBXREF_QUALIFIER_NAME`] whatever
    /// alias they were built from, so `by_name("Dbxref")` finds nothing while
    /// `by_name("db_xref")` returns them.
    pub fn by_name(
        &self,
        name: &str,
    ) -> Vec<&Qualifier> {
        self.lookup(&self.by_name, name)
            .collect()
    }

    pub fn first_by_name(
        &self,
        name: &str,
    ) -> Option<&Qualifier> {
        self.lookup(&self.by_name, name)
            .next()
    }

    pub fn by_value(
        &self,
        value: &str,
    ) -> Vec<&Qualifier> {
        self.lookup(&self.by_value, value)
            .collect()
    }

    pub fn first_by_value(
        &self,
        value: &str,
    ) -> Option<&Qualifier> {
        self.lookup(&self.by_value, value)
            .next()
    }

    pub fn by_name_value(
        &self,
        name: &str,
        value: &str,
    ) -> Vec<&Qualifier> {
        self.lookup(&self.by_name, name)
            .filter(|q| q.value() == value)
            .collect()
    }

    pub fn contains_name(
        &self,
        name: &str,
    ) -> bool {
        self.by_name.contains_key(name)
    }

    /// Distinct qualifier names in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(Qualifier::name)
            .unique()
            .collect()
    }

    /// Collects every cross-reference entry, or `None` if there is none.
    pub fn database_reference(&self) -> Option<DatabaseReference> {
        let dbref: DatabaseReference = self.xrefs().cloned().collect();
        if dbref.is_empty() {
            None
        }
        else {
            Some(dbref)
        }
    }

    /// Replaces every entry named [`DBXREF_QUALIFIER_NAME`] with the pairs of
    /// `dbref`.
    pub fn set_database_reference(
        &mut self,
        dbref: DatabaseReference,
    ) {
        let removed = self.remove_by_name(DBXREF_QUALIFIER_NAME);
        trace!(
            "Replaced {} cross-reference(s) with {}",
            removed.len(),
            dbref.len()
        );
        self.add_database_reference(dbref);
    }

    /// Appends the pairs of `dbref` after the existing entries.
    pub fn add_database_reference(
        &mut self,
        dbref: DatabaseReference,
    ) {
        self.add_all(dbref.into_iter().map(Qualifier::from));
    }

    /// Distinct database names, in order of first appearance.
    pub fn all_databases(&self) -> Vec<&str> {
        self.xrefs()
            .map(DbXref::database)
            .unique()
            .collect()
    }

    /// Every accession across all databases.
    pub fn all_database_references(&self) -> Vec<&str> {
        self.xrefs()
            .map(DbXref::reference)
            .collect()
    }

    /// Pair `i` as a single-entry [`DatabaseReference`].
    pub fn database_reference_at(
        &self,
        i: usize,
    ) -> Option<DatabaseReference> {
        self.xrefs()
            .nth(i)
            .cloned()
            .map(DatabaseReference::from)
    }

    pub fn database(
        &self,
        i: usize,
    ) -> Option<&str> {
        self.xrefs()
            .nth(i)
            .map(DbXref::database)
    }

    pub fn reference(
        &self,
        i: usize,
    ) -> Option<&str> {
        self.xrefs()
            .nth(i)
            .map(DbXref::reference)
    }

    /// The `i`-th accession recorded for `database`.
    pub fn reference_in(
        &self,
        database: &str,
        i: usize,
    ) -> Option<&str> {
        self.xrefs()
            .filter(|xref| xref.database() == database)
            .nth(i)
            .map(DbXref::reference)
    }

    pub fn references_in(
        &self,
        database: &str,
    ) -> Vec<&str> {
        self.xrefs()
            .filter(|xref| xref.database() == database)
            .map(DbXref::reference)
            .collect()
    }

    pub fn first_database_reference(&self) -> Option<DatabaseReference> {
        self.database_reference_at(0)
    }

    pub fn first_database(&self) -> Option<&str> { self.database(0) }

    pub fn first_reference(&self) -> Option<&str> { self.reference(0) }

    pub fn first_reference_in(
        &self,
        database: &str,
    ) -> Option<&str> {
        self.reference_in(database, 0)
    }

    fn xrefs(&self) -> impl Iterator<Item = &DbXref> {
        self.entries
            .iter()
            .filter_map(Qualifier::as_db_xref)
    }

    fn lookup<'a>(
        &'a self,
        index: &'a HashMap<String, Vec<usize>>,
        key: &str,
    ) -> impl Iterator<Item = &'a Qualifier> + 'a {
        index
            .get(key)
            .into_iter()
            .flatten()
            .map(|&pos| &self.entries[pos])
    }

    fn index_entry(
        &mut self,
        pos: usize,
        qualifier: &Qualifier,
    ) {
        self.by_name
            .entry_ref(qualifier.name())
            .or_default()
            .push(pos);
        let value = qualifier.value();
        self.by_value
            .entry_ref(&*value)
            .or_default()
            .push(pos);
    }

    /// Removes the entries matching `predicate` and rebuilds both indexes.
    fn extract<F: Fn(&Qualifier) -> bool>(
        &mut self,
        predicate: F,
    ) -> Vec<Qualifier> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|q| predicate(q));
        self.set_all(kept);
        removed
    }
}

impl PartialEq for QualifierIndex {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries == other.entries
    }
}

impl Eq for QualifierIndex {}

impl From<Vec<Qualifier>> for QualifierIndex {
    fn from(value: Vec<Qualifier>) -> Self {
        let mut index = Self::new();
        index.add_all(value);
        index
    }
}

impl From<QualifierIndex> for Vec<Qualifier> {
    fn from(value: QualifierIndex) -> Self { value.entries }
}

impl FromIterator<Qualifier> for QualifierIndex {
    fn from_iter<T: IntoIterator<Item = Qualifier>>(iter: T) -> Self {
        let mut index = Self::new();
        index.add_all(iter);
        index
    }
}

impl Extend<Qualifier> for QualifierIndex {
    fn extend<T: IntoIterator<Item = Qualifier>>(
        &mut self,
        iter: T,
    ) {
        self.add_all(iter)
    }
}

impl<'a> IntoIterator for &'a QualifierIndex {
    type IntoIter = std::slice::Iter<'a, Qualifier>;
    type Item = &'a Qualifier;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(
        name: &str,
        value: &str,
    ) -> Qualifier {
        Qualifier::new(name, value).unwrap()
    }

    #[test]
    fn test_indexes_survive_removal() {
        let mut index = QualifierIndex::new();
        index.add(q("gene", "lacZ"));
        index.add(q("note", "first"));
        index.add(q("gene", "lacY"));
        index.add(q("note", "second"));

        let removed = index.remove_by_name("gene");
        assert_eq!(removed.len(), 2);
        assert_eq!(index.len(), 2);
        assert!(!index.contains_name("gene"));
        assert!(index.by_value("lacZ").is_empty());
        assert_eq!(index.first_by_value("second"), Some(&q("note", "second")));
        assert_eq!(index.by_name("note")[1].value(), "second");
    }

    #[test]
    fn test_remove_missing_name() {
        let mut index: QualifierIndex = vec![q("gene", "lacZ")].into();
        assert!(index.remove_by_name("product").is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_equality_ignores_index_layout() {
        let mut a = QualifierIndex::new();
        a.add(q("gene", "lacZ"));
        a.add(q("gene", "old"));
        a.set(q("gene", "lacZ"));

        let b: QualifierIndex = vec![q("gene", "lacZ")].into();
        assert_eq!(a, b);
    }
}
