use std::borrow::Cow;
use std::fmt;

use anyhow::ensure;
use serde::{
    Deserialize,
    Serialize,
};

use crate::config::{
    FeatureConfig,
    DEFAULT_DBXREF_SEPARATOR,
};
use crate::data_structs::typedef::FeatSmallStr;
use crate::with_field_fn;

/// Name under which every database cross-reference qualifier is reported,
/// whatever alias it was parsed from.
pub const DBXREF_QUALIFIER_NAME: &str = "db_xref";

fn default_separator() -> char { DEFAULT_DBXREF_SEPARATOR }

/// A single `(database, reference)` pair, e.g. `GO` / `0005515`.
///
/// The separator the pair was written with is kept, so the displayed value
/// is the text the pair was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DbXref {
    database:  FeatSmallStr,
    reference: String,
    #[serde(default = "default_separator")]
    separator: char,
}

impl DbXref {
    /// Creates a cross-reference. The database name must not be empty; the
    /// reference may be.
    pub fn new<D, R>(
        database: D,
        reference: R,
    ) -> anyhow::Result<Self>
    where
        D: AsRef<str>,
        R: Into<String>, {
        let database = database.as_ref();
        ensure!(!database.is_empty(), "Database name must not be empty");
        Ok(Self {
            database:  FeatSmallStr::from(database),
            reference: reference.into(),
            separator: DEFAULT_DBXREF_SEPARATOR,
        })
    }

    with_field_fn!(separator, char);

    pub fn database(&self) -> &str { self.database.as_str() }

    pub fn reference(&self) -> &str { self.reference.as_str() }

    pub fn separator(&self) -> char { self.separator }
}

impl fmt::Display for DbXref {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.database, self.separator, self.reference
        )
    }
}

/// A feature annotation: either a free-form name/value pair or a database
/// cross-reference.
///
/// Cross-references always report the name [`DBXREF_QUALIFIER_NAME`] and the
/// value `database:reference`, so they take part in name and value lookups
/// like any other qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Qualifier {
    Plain { name: FeatSmallStr, value: String },
    DbXref(DbXref),
}

impl Qualifier {
    /// Builds a qualifier from a name/value pair, classifying cross-reference
    /// names with [`FeatureConfig::global`].
    pub fn new<N, V>(
        name: N,
        value: V,
    ) -> anyhow::Result<Self>
    where
        N: AsRef<str>,
        V: Into<String>, {
        Self::parse_with(FeatureConfig::global(), name, value)
    }

    /// Builds a qualifier from a name/value pair.
    ///
    /// If `name` is one of the configured cross-reference aliases and the
    /// value holds the separator with a non-empty database part, the result
    /// is a [`Qualifier::DbXref`]. Anything else, including a malformed
    /// cross-reference value, stays [`Qualifier::Plain`].
    pub fn parse_with<N, V>(
        config: &FeatureConfig,
        name: N,
        value: V,
    ) -> anyhow::Result<Self>
    where
        N: AsRef<str>,
        V: Into<String>, {
        let name = name.as_ref();
        let value = value.into();
        ensure!(!name.is_empty(), "Qualifier name must not be empty");

        if config.is_dbxref_name(name) {
            if let Some((database, reference)) =
                value.split_once(config.dbxref_separator)
            {
                if !database.is_empty() {
                    let xref = DbXref::new(database, reference)?
                        .with_separator(config.dbxref_separator);
                    return Ok(Qualifier::DbXref(xref));
                }
            }
        }
        Self::plain(name, value)
    }

    /// Builds a [`Qualifier::Plain`] without cross-reference classification.
    pub fn plain<N, V>(
        name: N,
        value: V,
    ) -> anyhow::Result<Self>
    where
        N: AsRef<str>,
        V: Into<String>, {
        let name = name.as_ref();
        ensure!(!name.is_empty(), "Qualifier name must not be empty");
        Ok(Qualifier::Plain {
            name:  FeatSmallStr::from(name),
            value: value.into(),
        })
    }

    pub fn db_xref<D, R>(
        database: D,
        reference: R,
    ) -> anyhow::Result<Self>
    where
        D: AsRef<str>,
        R: Into<String>, {
        DbXref::new(database, reference).map(Qualifier::DbXref)
    }

    pub fn name(&self) -> &str {
        match self {
            Qualifier::Plain { name, .. } => name.as_str(),
            Qualifier::DbXref(_) => DBXREF_QUALIFIER_NAME,
        }
    }

    pub fn value(&self) -> Cow<'_, str> {
        match self {
            Qualifier::Plain { value, .. } => Cow::Borrowed(value.as_str()),
            Qualifier::DbXref(xref) => Cow::Owned(xref.to_string()),
        }
    }

    pub fn as_db_xref(&self) -> Option<&DbXref> {
        match self {
            Qualifier::DbXref(xref) => Some(xref),
            Qualifier::Plain { .. } => None,
        }
    }

    pub fn is_db_xref(&self) -> bool { matches!(self, Qualifier::DbXref(_)) }
}

impl From<DbXref> for Qualifier {
    fn from(value: DbXref) -> Self { Qualifier::DbXref(value) }
}

impl fmt::Display for Qualifier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value())
    }
}
