use std::fmt::Debug;
use std::hash::Hash;

use num::Num;
use smallstr::SmallString;

pub const SMALLSTR_SIZE: usize = 20;
/// Inline string used for qualifier names and sequence names. Names longer
/// than [`SMALLSTR_SIZE`] bytes spill to the heap.
pub type FeatSmallStr = SmallString<[u8; SMALLSTR_SIZE]>;

pub trait SeqNameStr:
    for<'a> From<&'a str> + AsRef<str> + Clone + Eq + PartialEq + Hash {
}

/// Numeric position on a sequence. Only comparison and subtraction are ever
/// performed on it, so signed, unsigned and wide integer types all qualify.
pub trait SeqPosNum: Num + Ord + Copy + Debug {}

impl<T> SeqPosNum for T where T: Num + Ord + Copy + Debug {}

impl<T> SeqNameStr for T where
    T: AsRef<str> + Clone + Eq + PartialEq + Hash + for<'a> From<&'a str>
{
}
