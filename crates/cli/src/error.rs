//! Errors from any of the commands

/// Type alias for `Result<T, CliError>`
pub type Result<T> = core::result::Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Spectrum(#[from] nphys_spectrum::Error),

    #[error(transparent)]
    Xsdata(#[from] nphys_xsdata::Error),

    #[error(transparent)]
    Bolsig(#[from] nphys_bolsig::Error),

    #[error(transparent)]
    Salt(#[from] nphys_salt::Error),

    #[error(transparent)]
    Plane(#[from] nphys_plane::Error),

    #[error("failed to serialise output")]
    Json(#[from] serde_json::Error),

    #[error("failed to set up logging")]
    Logging(#[from] log::SetLoggerError),

    #[error("expected 3 coordinates, found {0}")]
    InvalidPoint(usize),

    #[error("invalid delay of {0} seconds")]
    InvalidDelay(f64),
}
