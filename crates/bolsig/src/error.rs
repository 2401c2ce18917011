//! Result and Error types for the solver driver

/// Type alias for `Result<T, bolsig::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nphys-bolsig`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to write tabulated output
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// The solver exited unsuccessfully
    #[error("solver exited with status {status:?}: {stderr}")]
    SolverFailed { status: Option<i32>, stderr: String },

    /// The solver finished without writing its output file
    #[error("solver wrote no output to {}", path.display())]
    NoSolverOutput { path: std::path::PathBuf },

    /// No `Mobility` block in the solver output
    #[error("no mobility value found in solver output")]
    MobilityNotFound,

    /// A value line of the solver output could not be read
    #[error("unable to parse line {line}: \"{content}\"")]
    ParseError { line: usize, content: String },
}
