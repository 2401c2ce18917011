//! Evaluated cross sections folded with a reactor spectrum
//!
//! This crate fetches tabulated fission cross sections from the KAERI nuclide
//! chart service, folds them with the analytic spectrum of
//! [nphys_spectrum], and collects the fast group averages and fast-to-thermal
//! ratios for a set of isotopes.
//!
//! Cross section tables are made available by either:
//! - Fetching directly from the service if an internet connection is available
//! - Reading tables saved to a directory
//!
//! Both implement the [DataProvider] trait, so a [survey()] does not care where
//! the data comes from.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use nphys_xsdata::{reference_isotopes, survey, write_tsv, NuchartClient, SurveyConfig};
//! // Fetch and fold every isotope of the reference comparison
//! let records = survey(
//!     &NuchartClient::default(),
//!     &reference_isotopes(),
//!     &SurveyConfig::default(),
//! )
//! .unwrap();
//!
//! // Scatter data of fast average against the fast/thermal ratio
//! write_tsv(&records, "FCxsscatter.tsv").unwrap();
//! ```
//!
//! Requests to the remote service are spaced out by [SurveyConfig::delay], 10
//! seconds by default, so as not to overwhelm the server.

// Modules
mod error;
mod isotope;
mod parsers;
mod provider;
mod survey;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use isotope::{is_highlighted, reference_isotopes, Isotope, Library};

#[doc(inline)]
pub use provider::{
    DataProvider, DirectoryProvider, MirroredProvider, NuchartClient, MT_FISSION, NUCHART_URL,
};

#[doc(inline)]
pub use survey::{survey, write_json, write_tsv, SurveyConfig, SurveyRecord};

/// Parse a raw data service response into a cross section table
///
/// Exposed for responses saved by other means, see [NuchartClient::fetch_raw].
///
/// ```rust
/// # use nphys_xsdata::parse_response;
/// let html = "Energy(eV) XS(b)<br>\n1.0E-05 3.0<br>\n2.0E+07 1.0<br>\n</span>";
/// let table = parse_response(html).unwrap();
/// assert_eq!(table.len(), 2);
/// ```
pub fn parse_response(html: &str) -> Result<nphys_spectrum::CrossSectionTable> {
    parsers::nuchart_table(html)
}
