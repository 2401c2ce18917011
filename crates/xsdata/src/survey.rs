//! Spectrum-averaged cross sections across a list of isotopes

// standard library
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

// crate modules
use crate::error::Result;
use crate::isotope::{is_highlighted, Isotope, Library};
use crate::provider::DataProvider;

// nphys modules
use nphys_spectrum::SpectrumParameters;

// external crates
use kdam::tqdm;
use log::{debug, info};
use serde::Serialize;

/// Settings for a survey run
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyConfig {
    /// Pause between requests to a remote provider
    pub delay: Duration,
    /// Spectrum used to fold every cross section
    pub params: SpectrumParameters,
    /// Show a progress bar on stderr
    pub progress: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(10),
            params: SpectrumParameters::default(),
            progress: false,
        }
    }
}

/// Spectrum-averaged result for a single isotope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyRecord {
    /// Isotope name, e.g. `U235`
    pub isotope: String,
    /// Library the data came from
    pub library: Library,
    /// Fast group average cross section (b)
    pub fast: f64,
    /// Thermal group average cross section (b)
    pub thermal: f64,
    /// Ratio of fast to thermal averages
    pub ratio: f64,
    /// Marked out on the comparison plot
    pub highlight: bool,
}

/// Fold the cross section of every isotope with the spectrum
///
/// The spectrum is rebuilt for each isotope since the energy grids of
/// different evaluations are not the same. Any failure stops the survey and
/// is returned as-is.
///
/// ```rust, no_run
/// # use nphys_xsdata::{reference_isotopes, survey, NuchartClient, SurveyConfig};
/// let records = survey(
///     &NuchartClient::default(),
///     &reference_isotopes(),
///     &SurveyConfig::default(),
/// )
/// .unwrap();
/// ```
pub fn survey<P: DataProvider + ?Sized>(
    provider: &P,
    isotopes: &[(Isotope, Library)],
    config: &SurveyConfig,
) -> Result<Vec<SurveyRecord>> {
    let mut records = Vec::with_capacity(isotopes.len());

    let iter: Box<dyn Iterator<Item = (usize, &(Isotope, Library))> + '_> = if config.progress {
        Box::new(tqdm!(isotopes.iter().enumerate(), total = isotopes.len()))
    } else {
        Box::new(isotopes.iter().enumerate())
    };

    for (i, (isotope, library)) in iter {
        // be polite to the server
        if i > 0 && provider.is_remote() && !config.delay.is_zero() {
            debug!("Waiting {:?}", config.delay);
            std::thread::sleep(config.delay);
        }

        let table = provider.cross_section(isotope, *library)?;
        let average = table.average(&config.params)?;
        info!(
            "{:<6} fast {:.4e} b, ratio {:.4e}",
            isotope.name(),
            average.fast,
            average.ratio
        );

        records.push(SurveyRecord {
            isotope: isotope.name(),
            library: *library,
            fast: average.fast,
            thermal: average.thermal,
            ratio: average.ratio,
            highlight: is_highlighted(isotope),
        });
    }

    if config.progress {
        eprintln!();
    }

    Ok(records)
}

/// Write survey results as a tab separated file with a header row
pub fn write_tsv<P: AsRef<Path>>(records: &[SurveyRecord], path: P) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write survey results to a JSON file
pub fn write_json<P: AsRef<Path>>(records: &[SurveyRecord], path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
