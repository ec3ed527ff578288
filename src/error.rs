use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate. Layout itself never fails; these are raised
/// when boxes or parameters are handed over in a shape the layout can't accept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WrapError {
    #[error("parallel sequences differ in length: {widths} widths, {heights} heights, {min_spaces} minimum spaces")]
    /// The width, height, and minimum space sequences used to seed a collection
    /// are not the same length
    MismatchedLengths {
        widths: usize,
        heights: usize,
        min_spaces: usize,
    },

    #[error("box {index} has an invalid size ({width} x {height})")]
    /// A box had a negative or non-finite width or height
    InvalidBox { index: usize, width: Pt, height: Pt },

    #[error("box {index} has a non-finite minimum space ({min_space})")]
    /// A box had a NaN or infinite minimum space
    InvalidSpace { index: usize, min_space: Pt },

    #[error("unknown alignment `{0}`")]
    /// An alignment name or code didn't match any [crate::layout::Alignment]
    UnknownAlignment(String),
}
