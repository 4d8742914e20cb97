//! Core data structures of the crate.
//!
//! - [`annotation`]: features, qualifiers, database cross-references, the
//!   feature hierarchy and feature orderings.
//! - [`coords`]: the [`SeqLocation`](coords::SeqLocation) capability used to
//!   read feature positions, and the [`Contig`](coords::Contig) location type.
//! - [`typedef`]: type aliases and numeric bounds shared by the above.

pub mod annotation;
pub mod coords;
mod enums;
pub mod typedef;

pub use enums::Strand;
