//! Result and Error types for plane construction

/// Type alias for `Result<T, plane::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nphys-plane`
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// The three points do not define a unique plane
    #[error("points are collinear or coincident, no unique plane")]
    DegeneratePlane,
}
