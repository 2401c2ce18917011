//! Constants describing the analytic reactor spectrum

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// crate modules
use crate::error::Result;

// external crates
use serde::{Deserialize, Serialize};

/// Boltzmann constant (eV/K)
pub const BOLTZMANN: f64 = 8.6173324e-5;

/// Full set of shape constants and group magnitudes
///
/// The defaults reproduce the reference thermal reactor spectrum, and every
/// field may be overridden from a JSON file with [SpectrumParameters::from_json].
/// Missing fields fall back to their defaults, so a file only needs to list
/// what changes.
///
/// ```json
/// {
///     "fast": { "a": 9.65e5, "b": 2.29e-6 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumParameters {
    /// Maxwellian thermal group
    pub thermal: ThermalShape,
    /// Slowing down 1/E group
    pub epithermal: EpithermalShape,
    /// Watt fission group
    pub fast: FastShape,
}

impl SpectrumParameters {
    /// Read parameters from a JSON file
    ///
    /// The `path` takes anything that can be turned into a `Path` reference.
    ///
    /// ```rust, no_run
    /// # use nphys_spectrum::SpectrumParameters;
    /// let params = SpectrumParameters::from_json("path/to/params.json").unwrap();
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Maxwellian shape `E exp(-E/kT)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalShape {
    /// Moderator temperature (K)
    pub temperature: f64,
    /// Group magnitude (n/cm2/s)
    pub magnitude: f64,
}

impl Default for ThermalShape {
    fn default() -> Self {
        Self {
            temperature: 325.0,
            magnitude: 3.2e14,
        }
    }
}

impl ThermalShape {
    /// Unnormalised shape at energy `e` (eV)
    pub fn shape(&self, e: f64) -> f64 {
        e * (-e / (BOLTZMANN * self.temperature)).exp()
    }
}

/// Piecewise slowing down shape
///
/// Rises from `bounds[0]` to `bounds[1]`, follows `1/E` up to `bounds[2]`, and
/// falls off to zero at `bounds[3]`. Zero everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpithermalShape {
    /// Band boundaries E0 to E3 (eV)
    pub bounds: [f64; 4],
    /// Group magnitude (n/cm2/s)
    pub magnitude: f64,
}

impl Default for EpithermalShape {
    fn default() -> Self {
        Self {
            bounds: [0.0, 0.2, 0.25e6, 1e6],
            magnitude: 1.98e14,
        }
    }
}

impl EpithermalShape {
    /// Unnormalised shape at energy `e` (eV)
    pub fn shape(&self, e: f64) -> f64 {
        let [e0, e1, e2, e3] = self.bounds;

        if e0 <= e && e < e1 {
            (e.powi(2) - e0.powi(2)) / (e * (e1.powi(2) - e0.powi(2)))
        } else if e1 <= e && e < e2 {
            1.0 / e
        } else if e2 <= e && e < e3 {
            (e.powi(2) - e3.powi(2)) / (e * (e2.powi(2) - e3.powi(2)))
        } else {
            0.0
        }
    }
}

/// Watt fission shape `exp(-E/a) sinh(sqrt(bE))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastShape {
    /// Watt `a` constant (eV)
    pub a: f64,
    /// Watt `b` constant (1/eV)
    pub b: f64,
    /// Group magnitude (n/cm2/s)
    pub magnitude: f64,
}

impl Default for FastShape {
    fn default() -> Self {
        Self {
            a: 8.09e5,
            b: 9.32e-7,
            magnitude: 0.98e14,
        }
    }
}

impl FastShape {
    /// Watt constants for thermal fission of U-235
    ///
    /// ```rust
    /// # use nphys_spectrum::FastShape;
    /// let shape = FastShape::u235();
    /// assert_eq!(shape.a, 9.65e5);
    /// assert_eq!(shape.b, 2.29e-6);
    /// ```
    pub fn u235() -> Self {
        Self {
            a: 9.65e5,
            b: 2.29e-6,
            ..Default::default()
        }
    }

    /// Unnormalised shape at energy `e` (eV)
    pub fn shape(&self, e: f64) -> f64 {
        (-e / self.a).exp() * (self.b * e).sqrt().sinh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epithermal_bands() {
        let epi = EpithermalShape::default();
        // rising edge
        assert!((epi.shape(0.1) - 0.01 / (0.1 * 0.04)).abs() < 1e-12);
        // 1/E region, including the lower boundary
        assert_eq!(epi.shape(0.2), 5.0);
        assert_eq!(epi.shape(100.0), 0.01);
        // falling edge reaches zero at E3
        assert!(epi.shape(0.5e6) > 0.0);
        assert_eq!(epi.shape(1e6), 0.0);
        assert_eq!(epi.shape(2e6), 0.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: SpectrumParameters =
            serde_json::from_str(r#"{ "fast": { "a": 9.65e5, "b": 2.29e-6 } }"#).unwrap();

        assert_eq!(params.fast.a, 9.65e5);
        assert_eq!(params.fast.magnitude, 0.98e14);
        assert_eq!(params.thermal, ThermalShape::default());
        assert_eq!(params.epithermal, EpithermalShape::default());
    }
}
