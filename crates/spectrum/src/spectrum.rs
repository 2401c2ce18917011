//! Three-group flux spectrum over an energy grid

// crate modules
use crate::error::{Error, Result};
use crate::parameters::SpectrumParameters;

// nphys modules
use nphys_utils::{SliceExt, ValueExt};

// external crates
use itertools::izip;
use log::{debug, warn};
use serde::Serialize;

/// Energy group of the analytic spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Group {
    /// Moderated Maxwellian neutrons
    Thermal,
    /// Slowing down neutrons
    Epithermal,
    /// Fission source neutrons
    Fast,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Group::Thermal => "thermal",
            Group::Epithermal => "epithermal",
            Group::Fast => "fast",
        };
        write!(f, "{name}")
    }
}

/// Flux densities for every group, aligned with an energy grid
///
/// Each `shape` is normalised so that its trapezoidal integral over `energy`
/// is exactly one. The corresponding `flux` is that shape scaled by the group
/// magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Energy grid (eV)
    pub energy: Vec<f64>,
    /// Normalised thermal shape
    pub thermal: Vec<f64>,
    /// Normalised epithermal shape
    pub epithermal: Vec<f64>,
    /// Normalised fast shape
    pub fast: Vec<f64>,
    params: SpectrumParameters,
}

impl Spectrum {
    /// Build the normalised group shapes on an energy grid
    ///
    /// The grid must be positive and strictly increasing with at least two
    /// points.
    ///
    /// ```rust
    /// # use nphys_spectrum::{Spectrum, SpectrumParameters};
    /// let energy = [1e-5, 1.0, 1e3, 1e5, 1e6, 2e6];
    /// let spectrum = Spectrum::new(&energy, &SpectrumParameters::default()).unwrap();
    /// assert_eq!(spectrum.fast.len(), energy.len());
    /// ```
    pub fn new(energy: &[f64], params: &SpectrumParameters) -> Result<Self> {
        check_grid(energy)?;

        let thermal = energy.iter().map(|e| params.thermal.shape(*e)).collect();
        let epithermal = energy.iter().map(|e| params.epithermal.shape(*e)).collect();
        let fast = energy.iter().map(|e| params.fast.shape(*e)).collect();

        Ok(Self {
            energy: energy.to_vec(),
            thermal: normalise(thermal, energy, Group::Thermal)?,
            epithermal: normalise_or_zero(epithermal, energy, Group::Epithermal)?,
            fast: normalise(fast, energy, Group::Fast)?,
            params: *params,
        })
    }

    /// Normalised shape of a single group
    pub fn shape(&self, group: Group) -> &[f64] {
        match group {
            Group::Thermal => &self.thermal,
            Group::Epithermal => &self.epithermal,
            Group::Fast => &self.fast,
        }
    }

    /// Group magnitude used to scale the normalised shape
    pub fn magnitude(&self, group: Group) -> f64 {
        match group {
            Group::Thermal => self.params.thermal.magnitude,
            Group::Epithermal => self.params.epithermal.magnitude,
            Group::Fast => self.params.fast.magnitude,
        }
    }

    /// Absolute flux density of a single group
    pub fn flux(&self, group: Group) -> Vec<f64> {
        let magnitude = self.magnitude(group);
        self.shape(group).iter().map(|s| magnitude * s).collect()
    }

    /// Total flux density summed over every group
    pub fn total(&self) -> Vec<f64> {
        let (th, epi, fast) = (
            self.magnitude(Group::Thermal),
            self.magnitude(Group::Epithermal),
            self.magnitude(Group::Fast),
        );

        izip!(&self.thermal, &self.epithermal, &self.fast)
            .map(|(t, e, f)| th * t + epi * e + fast * f)
            .collect()
    }

    /// Flux-weighted average cross section in one group
    ///
    /// Computes `∫ σφ dE / ∫ φ dE` with the trapezoidal rule. A zero group
    /// integral is not guarded, and will give a non-finite result.
    pub fn group_average(&self, xs: &[f64], group: Group) -> Result<f64> {
        if xs.len() != self.energy.len() {
            return Err(Error::LengthMismatch {
                energy: self.energy.len(),
                xs: xs.len(),
            });
        }

        let flux = self.flux(group);
        let reaction = xs
            .iter()
            .zip(&flux)
            .map(|(sigma, phi)| sigma * phi)
            .collect::<Vec<f64>>();

        Ok(reaction.trapz(&self.energy)? / flux.trapz(&self.energy)?)
    }
}

/// Result of folding a cross section with the spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumAverage {
    /// Fast group average cross section (b)
    pub fast: f64,
    /// Thermal group average cross section (b)
    pub thermal: f64,
    /// Ratio of the fast to thermal averages
    pub ratio: f64,
}

impl std::fmt::Display for SpectrumAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Fast average    {} b", self.fast.sci(5, 2))?;
        writeln!(f, "Thermal average {} b", self.thermal.sci(5, 2))?;
        write!(f, "Fast/thermal    {}", self.ratio.sci(5, 2))
    }
}

/// Spectrum-averaged cross sections using the reference spectrum
///
/// Folds the cross section `xs`, tabulated on the `energy` grid (eV), with the
/// default analytic spectrum. Returns the fast group average and its ratio to
/// the thermal group average.
///
/// ```rust
/// # use nphys_spectrum::spectrum_average;
/// let energy = [1e-5, 1.0, 1e3, 1e5, 1e6, 2e6];
/// let xs = [3.0, 2.0, 1.5, 1.0, 0.8, 0.5];
///
/// let average = spectrum_average(&energy, &xs).unwrap();
/// assert!(average.fast >= 0.5 && average.fast <= 3.0);
/// assert!(average.ratio.is_finite());
/// ```
///
/// See [spectrum_average_with()] to change the spectrum constants.
pub fn spectrum_average(energy: &[f64], xs: &[f64]) -> Result<SpectrumAverage> {
    spectrum_average_with(energy, xs, &SpectrumParameters::default())
}

/// Spectrum-averaged cross sections using custom spectrum constants
///
/// The epithermal group is built and normalised along with the others but
/// only the fast and thermal groups enter the result.
pub fn spectrum_average_with(
    energy: &[f64],
    xs: &[f64],
    params: &SpectrumParameters,
) -> Result<SpectrumAverage> {
    if energy.len() != xs.len() {
        return Err(Error::LengthMismatch {
            energy: energy.len(),
            xs: xs.len(),
        });
    }

    if xs.iter().any(|sigma| *sigma < 0.0) {
        warn!("Negative cross section values found");
    }

    let spectrum = Spectrum::new(energy, params)?;
    let fast = spectrum.group_average(xs, Group::Fast)?;
    let thermal = spectrum.group_average(xs, Group::Thermal)?;

    debug!("sigma fast    = {}", fast.sci(5, 2));
    debug!("sigma thermal = {}", thermal.sci(5, 2));

    Ok(SpectrumAverage {
        fast,
        thermal,
        ratio: fast / thermal,
    })
}

/// Grid must be long enough to integrate, strictly increasing, and positive
pub(crate) fn check_grid(energy: &[f64]) -> Result<()> {
    if energy.len() < 2 {
        return Err(Error::TooFewPoints {
            length: energy.len(),
            minimum_required: 2,
        });
    }

    if let Some(index) = energy.first_non_increasing() {
        return Err(Error::NotStrictlyIncreasing { index });
    }

    // increasing, so the first energy is the smallest
    if energy[0] <= 0.0 {
        return Err(Error::NonPositiveEnergy { value: energy[0] });
    }

    Ok(())
}

/// Scale a shape to unit integral over the grid
fn normalise(shape: Vec<f64>, energy: &[f64], group: Group) -> Result<Vec<f64>> {
    let integral = shape.trapz(energy)?;
    debug!("{group:<10} shape integral = {}", integral.sci(5, 2));

    if !integral.is_finite() || integral <= 0.0 {
        return Err(Error::DegenerateShape { group });
    }

    Ok(shape.into_iter().map(|s| s / integral).collect())
}

/// Unused groups only need a warning when they vanish on the grid
fn normalise_or_zero(shape: Vec<f64>, energy: &[f64], group: Group) -> Result<Vec<f64>> {
    match normalise(shape, energy, group) {
        Err(Error::DegenerateShape { group }) => {
            warn!("{group} flux shape can not be normalised on this energy grid, set to zero");
            Ok(vec![0.0; energy.len()])
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<f64> {
        // log spaced 1e-5 eV to 20 MeV
        (0..=240).map(|i| 10f64.powf(-5.0 + i as f64 * 0.05)).collect()
    }

    #[test]
    fn shapes_integrate_to_one() {
        let energy = grid();
        let spectrum = Spectrum::new(&energy, &SpectrumParameters::default()).unwrap();

        for group in [Group::Thermal, Group::Epithermal, Group::Fast] {
            let integral = spectrum.shape(group).trapz(&energy).unwrap();
            assert!(integral.is_close(1.0, 1e-9), "{group} integral {integral}");
        }
    }

    #[test]
    fn flux_integrates_to_magnitude() {
        let energy = grid();
        let spectrum = Spectrum::new(&energy, &SpectrumParameters::default()).unwrap();
        let fast = spectrum.flux(Group::Fast).trapz(&energy).unwrap();
        assert!(fast.is_close(0.98e14, 1e-9));

        let total = spectrum.total().trapz(&energy).unwrap();
        assert!(total.is_close(3.2e14 + 1.98e14 + 0.98e14, 1e-9));
    }

    #[test]
    fn thermal_vanishes_at_high_energy() {
        let energy = [2e6, 3e6, 4e6];
        let spectrum = Spectrum::new(&energy, &SpectrumParameters::default());

        assert!(matches!(
            spectrum,
            Err(Error::DegenerateShape {
                group: Group::Thermal
            })
        ));
    }

    #[test]
    fn epithermal_only_warns() {
        // no grid point falls inside the epithermal bands
        let params = SpectrumParameters {
            epithermal: crate::EpithermalShape {
                bounds: [10.0, 20.0, 30.0, 40.0],
                ..Default::default()
            },
            ..Default::default()
        };
        let energy = [1e-3, 1e-2, 1.0, 1e5, 1e6];
        let spectrum = Spectrum::new(&energy, &params).unwrap();
        assert!(spectrum.epithermal.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn grid_checks() {
        assert!(check_grid(&[1e-5, 1.0]).is_ok());
        assert!(matches!(
            check_grid(&[0.0, 1.0]),
            Err(Error::NonPositiveEnergy { value }) if value == 0.0
        ));
        assert!(matches!(
            check_grid(&[-2.0, -1.0, 1.0]),
            Err(Error::NonPositiveEnergy { value }) if value == -2.0
        ));
        // ordering is reported before sign
        assert!(matches!(
            check_grid(&[-1.0, -2.0]),
            Err(Error::NotStrictlyIncreasing { index: 1 })
        ));
    }

    #[test]
    fn group_average_checks_alignment() {
        let energy = grid();
        let spectrum = Spectrum::new(&energy, &SpectrumParameters::default()).unwrap();
        assert!(matches!(
            spectrum.group_average(&[1.0, 2.0], Group::Fast),
            Err(Error::LengthMismatch { xs: 2, .. })
        ));
    }
}
