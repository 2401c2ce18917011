//! Result and Error types for salt compositions

/// Type alias for `Result<T, salt::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nphys-salt`
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// A percentage was not a finite value in [0, 100]
    #[error("{name} must be a percentage in [0, 100], found {value}")]
    OutOfRange {
        /// Which input was rejected
        name: &'static str,
        /// The rejected percentage
        value: f64,
    },
}
