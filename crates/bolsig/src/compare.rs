//! Computed drift velocities against measurements

// standard library
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::input::Conditions;
use crate::reference::ReferenceSeries;
use crate::solver::MobilitySolver;

// external crates
use log::info;
use serde::Serialize;

/// Electron drift velocity (m/s) from reduced mobility and field
///
/// `v = μN × E/N`, with E/N converted from Td (1 Td = 1e-21 V m2).
///
/// ```rust
/// # use nphys_bolsig::drift_velocity;
/// assert_eq!(drift_velocity(2.0e24, 1.0), 2.0e3);
/// ```
pub fn drift_velocity(mobility: f64, reduced_field: f64) -> f64 {
    mobility * reduced_field * 1e-21
}

/// A single computed/measured pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriftPoint {
    /// Reduced electric field E/N (Td)
    pub reduced_field: f64,
    /// Drift velocity from the solver (m/s)
    pub computed: f64,
    /// Measured drift velocity (m/s)
    pub reference: f64,
}

impl DriftPoint {
    /// Relative difference of the computed value from the measurement
    pub fn relative_difference(&self) -> f64 {
        (self.computed - self.reference) / self.reference
    }
}

/// Solve for every field strength of a reference series
///
/// Measured velocities are converted from km/s to m/s so both columns share
/// units. The first solver failure stops the comparison.
pub fn compare<S: MobilitySolver + ?Sized>(
    solver: &S,
    series: &ReferenceSeries,
    gas_temperature: f64,
) -> Result<Vec<DriftPoint>> {
    info!("Comparing {} at {gas_temperature} K", series.mixture);

    series
        .reduced_field
        .iter()
        .zip(&series.drift_velocity)
        .map(|(field, measured)| {
            let conditions = Conditions {
                gas_temperature,
                reduced_field: *field,
                mixture: series.mixture,
            };

            let computed = drift_velocity(solver.mobility(&conditions)?, *field);
            info!("  E/N {field:>6} Td: {computed:.4e} m/s (measured {:.4e})", measured * 1e3);

            Ok(DriftPoint {
                reduced_field: *field,
                computed,
                reference: measured * 1e3,
            })
        })
        .collect()
}

/// Write a comparison as `E/N  computed  measured` tab separated columns
pub fn write_comparison<P: AsRef<Path>>(points: &[DriftPoint], path: P) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)?;

    for point in points {
        writer.serialize(point)?;
    }

    writer.flush()?;
    Ok(())
}

/// Compare every series and write each to its own file in `outdir`
pub fn compare_all<S: MobilitySolver + ?Sized, P: AsRef<Path>>(
    solver: &S,
    series: &[ReferenceSeries],
    gas_temperature: f64,
    outdir: P,
) -> Result<Vec<Vec<DriftPoint>>> {
    let mut results = Vec::with_capacity(series.len());

    for s in series {
        let points = compare(solver, s, gas_temperature)?;
        let path = outdir.as_ref().join(&s.output_name);
        info!("Writing {}", path.display());
        write_comparison(&points, path)?;
        results.push(points);
    }

    Ok(results)
}
