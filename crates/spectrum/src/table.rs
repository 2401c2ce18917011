//! Tabulated cross sections and simple two-column file handling

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parameters::SpectrumParameters;
use crate::spectrum::{check_grid, spectrum_average_with, SpectrumAverage};

// nphys modules
use nphys_utils::ValueExt;

// external crates
use log::{debug, trace};
use nom::character::complete::space1;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::separated_pair;
use nom::IResult;

/// Cross section values on an energy grid
///
/// Construction through [CrossSectionTable::new] guarantees the energy grid is
/// positive, strictly increasing, has at least two points, and that every
/// energy has a matching cross section value. There is no empty table.
///
/// ```rust, compile_fail
/// # use nphys_spectrum::CrossSectionTable;
/// let table = CrossSectionTable::default();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionTable {
    /// Energy grid (eV)
    pub energy: Vec<f64>,
    /// Cross section values (b)
    pub xs: Vec<f64>,
}

impl CrossSectionTable {
    /// Validate and pair up an energy grid with its cross section values
    ///
    /// ```rust
    /// # use nphys_spectrum::CrossSectionTable;
    /// let table = CrossSectionTable::new(vec![1e-5, 1.0], vec![3.0, 2.0]).unwrap();
    /// assert_eq!(table.len(), 2);
    ///
    /// // Misaligned inputs are rejected
    /// assert!(CrossSectionTable::new(vec![1e-5, 1.0], vec![3.0]).is_err());
    /// ```
    pub fn new(energy: Vec<f64>, xs: Vec<f64>) -> Result<Self> {
        if energy.len() != xs.len() {
            return Err(Error::LengthMismatch {
                energy: energy.len(),
                xs: xs.len(),
            });
        }

        check_grid(&energy)?;
        Ok(Self { energy, xs })
    }

    /// Number of tabulated points
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// True if there are no tabulated points
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Fold the table with the analytic spectrum
    pub fn average(&self, params: &SpectrumParameters) -> Result<SpectrumAverage> {
        spectrum_average_with(&self.energy, &self.xs, params)
    }

    /// Parse whitespace separated `energy xs` rows
    ///
    /// Blank lines and lines starting with `#` are ignored. Anything else must
    /// be exactly two numbers.
    ///
    /// ```rust
    /// # use nphys_spectrum::CrossSectionTable;
    /// let text = "# Energy(eV) XS(b)\n1.0e-5 3.07139\n1.0 2.5\n";
    /// let table = CrossSectionTable::parse(text).unwrap();
    /// assert_eq!(table.energy, vec![1.0e-5, 1.0]);
    /// assert_eq!(table.xs, vec![3.07139, 2.5]);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut energy = Vec::new();
        let mut xs = Vec::new();

        for (n, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (_, (e, sigma)) = all_consuming(row)(trimmed).map_err(|_| Error::ParseError {
                line: n + 1,
                content: line.to_string(),
            })?;

            trace!("{} {}", e.sci(5, 2), sigma.sci(5, 2));
            energy.push(e);
            xs.push(sigma);
        }

        debug!("Parsed {} rows", energy.len());
        Self::new(energy, xs)
    }

    /// Read a two-column text file
    ///
    /// See [CrossSectionTable::parse] for the accepted format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Write the table as a two-column text file readable by [CrossSectionTable::from_file]
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "# Energy(eV) XS(b)")?;
        for (e, sigma) in self.energy.iter().zip(&self.xs) {
            writeln!(writer, "{} {}", e.sci(6, 2), sigma.sci(6, 2))?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// A single `energy xs` row
fn row(i: &str) -> IResult<&str, (f64, f64)> {
    separated_pair(double, space1, double)(i)
}
