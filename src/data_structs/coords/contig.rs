use std::fmt::Display;

use anyhow::ensure;
use bio_types::annot::loc::Loc;
use bio_types::strand::ReqStrand;
use num::{
    NumCast,
    ToPrimitive,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::SeqLocation;
use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{
    SeqNameStr,
    SeqPosNum,
};

/// Represents a contig with a sequence name, start position, end position, and
/// strand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contig<R, P>
where
    R: SeqNameStr,
    P: SeqPosNum, {
    seqname: R,
    start:   P,
    end:     P,
    strand:  Strand,
}

impl<R, P> Contig<R, P>
where
    R: SeqNameStr,
    P: SeqPosNum,
{
    /// Creates a new `Contig`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`Contig::try_new`] for a checked
    /// constructor.
    pub fn new(
        seqname: R,
        start: P,
        end: P,
        strand: Strand,
    ) -> Self {
        assert!(
            start <= end,
            "Start position must be less than or equal to end position"
        );
        Self {
            seqname,
            start,
            end,
            strand,
        }
    }

    pub fn try_new(
        seqname: R,
        start: P,
        end: P,
        strand: Strand,
    ) -> anyhow::Result<Self> {
        ensure!(
            start <= end,
            "Start position {:?} is greater than end position {:?}",
            start,
            end
        );
        Ok(Self {
            seqname,
            start,
            end,
            strand,
        })
    }

    /// Returns the start position.
    pub fn start(&self) -> P { self.start }

    /// Returns the end position.
    pub fn end(&self) -> P { self.end }

    /// Returns the strand of the contig.
    pub fn strand(&self) -> Strand { self.strand }

    /// Returns the sequence name of the contig.
    pub fn seqname(&self) -> &R { &self.seqname }

    /// Returns the length of the contig.
    pub fn length(&self) -> P { self.end - self.start }
}

impl<R, P> SeqLocation for Contig<R, P>
where
    R: SeqNameStr,
    P: SeqPosNum,
{
    type Pos = P;

    fn start(&self) -> P { self.start }

    fn end(&self) -> P { self.end }
}

impl<R, P, S> TryFrom<bio_types::annot::contig::Contig<R, S>> for Contig<R, P>
where
    R: SeqNameStr,
    P: SeqPosNum + NumCast,
    S: Into<Option<ReqStrand>> + Copy,
{
    type Error = anyhow::Error;

    /// Converts from a `bio_types::annot::contig::Contig`.
    fn try_from(
        value: bio_types::annot::contig::Contig<R, S>
    ) -> Result<Self, Self::Error> {
        let strand: Option<ReqStrand> = Loc::strand(&value).into();
        let (start, length) = (Loc::start(&value), Loc::length(&value));
        let start_pos = <P as NumCast>::from(start).ok_or_else(|| {
            anyhow::anyhow!("Start {} does not fit the position type", start)
        })?;
        let end_pos = <P as NumCast>::from(start + length as isize)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "End {} does not fit the position type",
                    start + length as isize
                )
            })?;
        Self::try_new(
            Loc::refid(&value).to_owned(),
            start_pos,
            end_pos,
            strand.into(),
        )
    }
}

impl<R, P> TryFrom<Contig<R, P>>
    for bio_types::annot::contig::Contig<R, Option<ReqStrand>>
where
    R: SeqNameStr,
    P: SeqPosNum + ToPrimitive,
{
    type Error = anyhow::Error;

    /// Converts into a `bio_types::annot::contig::Contig`.
    fn try_from(value: Contig<R, P>) -> Result<Self, Self::Error> {
        let start = value
            .start
            .to_isize()
            .ok_or_else(|| anyhow::anyhow!("Start does not fit isize"))?;
        let length = value
            .length()
            .to_usize()
            .ok_or_else(|| anyhow::anyhow!("Length does not fit usize"))?;
        Ok(bio_types::annot::contig::Contig::new(
            value.seqname,
            start,
            length,
            value.strand.into(),
        ))
    }
}

impl<R, P> Eq for Contig<R, P>
where
    R: SeqNameStr,
    P: SeqPosNum,
{
}

impl<R, P> PartialEq for Contig<R, P>
where
    R: SeqNameStr,
    P: SeqPosNum,
{
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.seqname.as_ref() == other.seqname.as_ref()
            && self.start == other.start
            && self.end == other.end
            && self.strand == other.strand
    }
}

impl<R, P> Display for Contig<R, P>
where
    R: SeqNameStr,
    P: SeqPosNum + Display,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.seqname.as_ref(),
            self.start,
            self.end,
            self.strand
        )
    }
}
