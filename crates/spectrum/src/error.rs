//! Result and Error types for the spectrum module

use crate::spectrum::Group;

/// Type alias for `Result<T, spectrum::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nphys-spectrum`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise spectrum parameters
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Numerical helper failure
    #[error("numerical operation failed: {0}")]
    Numerics(#[from] nphys_utils::Error),

    /// Energy grid and cross section values are not index aligned
    #[error("energy grid has {energy} points but {xs} cross section values were given")]
    LengthMismatch { energy: usize, xs: usize },

    /// Energy grid must be strictly increasing
    #[error("energy grid is not strictly increasing at index {index}")]
    NotStrictlyIncreasing { index: usize },

    /// Energies must be positive
    #[error("energy grid must be positive, found {value} eV")]
    NonPositiveEnergy { value: f64 },

    /// Too few points for trapezoidal integration
    #[error("at least {minimum_required} grid points are required, found {length}")]
    TooFewPoints {
        length: usize,
        minimum_required: usize,
    },

    /// A flux shape integrates to zero or a non-finite value over the grid
    #[error("{group} flux shape can not be normalised over this energy grid")]
    DegenerateShape { group: Group },

    /// A line of a two-column data file could not be read
    #[error("unable to parse line {line}: \"{content}\"")]
    ParseError { line: usize, content: String },
}
