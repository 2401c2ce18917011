//! Result and Error types for the cross section data module

/// Type alias for `Result<T, xsdata::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nphys-xsdata`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure during GET request to the data service
    #[error("request to cross section service failed")]
    FailedRequest(#[from] minreq::Error),

    /// Service answered with something other than 200 OK
    #[error("unexpected status {code} from {url}")]
    UnexpectedStatus { code: i32, url: String },

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to write tabulated output
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// Invalid cross section data or spectrum folding failure
    #[error("spectrum calculation failed")]
    Spectrum(#[from] nphys_spectrum::Error),

    /// No `Energy(eV)` table found in the response
    #[error("no cross section table found in response")]
    NoTableFound,

    /// A data row of the response could not be read
    #[error("unable to parse line {line}: \"{content}\"")]
    ParseError { line: usize, content: String },

    /// Isotope is not part of the known set
    #[error("unknown isotope \"{name}\"")]
    UnknownIsotope { name: String },

    /// Evaluated data library is not recognised
    #[error("unknown data library \"{name}\"")]
    UnknownLibrary { name: String },
}
