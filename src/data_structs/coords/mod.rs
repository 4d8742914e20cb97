//! Location types consumed by features.
//!
//! Features never interpret locations beyond their start and end positions,
//! which they read through the [`SeqLocation`] capability trait. The crate
//! provides [`Contig`] as a ready-made location, and the trait is also
//! implemented for [`std::ops::Range`] and for
//! [`bio_types::annot::contig::Contig`].

mod contig;

use std::ops::Range;

use bio_types::annot::loc::Loc;
use bio_types::strand::ReqStrand;
pub use contig::Contig;

use crate::data_structs::typedef::SeqPosNum;

/// Anything exposing ordered start and end positions on a sequence.
pub trait SeqLocation {
    type Pos: SeqPosNum;

    fn start(&self) -> Self::Pos;

    fn end(&self) -> Self::Pos;

    /// Absolute distance between start and end, regardless of which one is
    /// larger.
    fn span(&self) -> Self::Pos {
        let (start, end) = (self.start(), self.end());
        if end >= start {
            end - start
        }
        else {
            start - end
        }
    }
}

impl<P: SeqPosNum> SeqLocation for Range<P> {
    type Pos = P;

    fn start(&self) -> P { self.start }

    fn end(&self) -> P { self.end }
}

impl<R, S> SeqLocation for bio_types::annot::contig::Contig<R, S>
where
    S: Into<Option<ReqStrand>> + Copy,
{
    type Pos = isize;

    fn start(&self) -> isize { Loc::start(self) }

    fn end(&self) -> isize { Loc::start(self) + Loc::length(self) as isize }
}
