//! Sources of tabulated cross section data

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::isotope::{Isotope, Library};
use crate::parsers::nuchart_table;

// nphys modules
use nphys_spectrum::CrossSectionTable;

// external crates
use log::{debug, info};

/// Base of the URL used to query the KAERI nuclide chart
pub const NUCHART_URL: &str = "http://atom.kaeri.re.kr/nuchart/getData.jsp";

/// ENDF reaction number for total fission
pub const MT_FISSION: u16 = 18;

/// Anything that can provide a cross section table for an isotope
///
/// This keeps the calculations independent of where the data comes from. The
/// [NuchartClient] queries the remote service, while a [DirectoryProvider]
/// reads tables saved to disk.
pub trait DataProvider {
    /// Cross section table for the `isotope` from the evaluated `library`
    fn cross_section(&self, isotope: &Isotope, library: Library) -> Result<CrossSectionTable>;

    /// Whether each request goes out to a remote service
    ///
    /// Remote providers are rate limited by the survey.
    fn is_remote(&self) -> bool {
        false
    }
}

/// Client for the KAERI nuclide chart data service
///
/// ```rust, no_run
/// # use nphys_xsdata::{DataProvider, Isotope, Library, NuchartClient};
/// # use std::str::FromStr;
/// let client = NuchartClient::default();
/// let u235 = Isotope::from_str("U235").unwrap();
///
/// // MF=3 MT=18 fission cross section from JEFF-3.2
/// let table = client.cross_section(&u235, Library::Jeff32).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NuchartClient {
    /// Service endpoint
    pub base_url: String,
    /// ENDF reaction number (MT)
    pub mt: u16,
    /// Request timeout (s)
    pub timeout: u64,
}

impl Default for NuchartClient {
    fn default() -> Self {
        Self {
            base_url: NUCHART_URL.to_string(),
            mt: MT_FISSION,
            timeout: 60,
        }
    }
}

impl NuchartClient {
    /// Full query URL for an isotope
    ///
    /// ```rust
    /// # use nphys_xsdata::{Isotope, Library, NuchartClient};
    /// let client = NuchartClient::default();
    /// let th232 = Isotope::new("Th", 90, 232, 9040);
    ///
    /// assert_eq!(
    ///     client.query_url(&th232, Library::Jendl40),
    ///     "http://atom.kaeri.re.kr/nuchart/getData.jsp?target=jendl4.0,90,232,9040,3,18"
    /// );
    /// ```
    pub fn query_url(&self, isotope: &Isotope, library: Library) -> String {
        format!(
            "{}?target={},{},{},{},3,{}",
            self.base_url,
            library.query_name(),
            isotope.z,
            isotope.a,
            isotope.mat,
            self.mt
        )
    }

    /// Raw response body for an isotope
    pub fn fetch_raw(&self, isotope: &Isotope, library: Library) -> Result<String> {
        let url = self.query_url(isotope, library);
        info!("Retrieving {url}");

        let response = minreq::get(&url).with_timeout(self.timeout).send()?;
        if response.status_code != 200 {
            return Err(Error::UnexpectedStatus {
                code: response.status_code,
                url,
            });
        }

        Ok(response.as_str()?.to_string())
    }
}

impl DataProvider for NuchartClient {
    fn cross_section(&self, isotope: &Isotope, library: Library) -> Result<CrossSectionTable> {
        let html = self.fetch_raw(isotope, library)?;
        nuchart_table(&html)
    }

    fn is_remote(&self) -> bool {
        true
    }
}

/// Tables saved as `<name>.txt` two-column files in a directory
///
/// Useful for offline work, and for keeping a copy of everything fetched.
///
/// ```rust, no_run
/// # use nphys_xsdata::{DataProvider, DirectoryProvider, Isotope, Library};
/// let provider = DirectoryProvider::new("./data/jeff");
/// let u238 = Isotope::new("U", 92, 238, 9237);
///
/// // Reads ./data/jeff/U238.txt
/// let table = provider.cross_section(&u238, Library::Jeff32).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    /// Provider reading from the `root` directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the file holding data for an isotope
    pub fn path(&self, isotope: &Isotope) -> PathBuf {
        self.root.join(format!("{}.txt", isotope.name()))
    }

    /// Save a table so that it can be read back by this provider
    pub fn store(&self, isotope: &Isotope, table: &CrossSectionTable) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path(isotope);
        debug!("Saving {isotope} to {}", path.display());
        Ok(table.write(path)?)
    }
}

impl DataProvider for DirectoryProvider {
    fn cross_section(&self, isotope: &Isotope, library: Library) -> Result<CrossSectionTable> {
        let path = self.path(isotope);
        debug!("Reading {isotope} ({library}) from {}", path.display());
        Ok(CrossSectionTable::from_file(path)?)
    }
}

/// Wraps another provider and keeps a copy of every table it returns
///
/// The copies are written so that a [DirectoryProvider] on the same directory
/// can read them back later.
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredProvider<P> {
    source: P,
    mirror: DirectoryProvider,
}

impl<P: DataProvider> MirroredProvider<P> {
    /// Mirror every table from `source` into the `root` directory
    pub fn new<R: AsRef<Path>>(source: P, root: R) -> Self {
        Self {
            source,
            mirror: DirectoryProvider::new(root),
        }
    }
}

impl<P: DataProvider> DataProvider for MirroredProvider<P> {
    fn cross_section(&self, isotope: &Isotope, library: Library) -> Result<CrossSectionTable> {
        let table = self.source.cross_section(isotope, library)?;
        self.mirror.store(isotope, &table)?;
        Ok(table)
    }

    fn is_remote(&self) -> bool {
        self.source.is_remote()
    }
}
