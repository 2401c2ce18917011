//! Atom fractions of a NaCl-UCl3 salt

// crate modules
use crate::error::{Error, Result};

// external crates
use log::debug;
use serde::Serialize;

/// Atom fractions of each constituent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SaltComposition {
    /// Sodium
    pub na: f64,
    /// Chlorine
    pub cl: f64,
    /// Uranium-235
    pub u235: f64,
    /// Uranium-238
    pub u238: f64,
}

impl SaltComposition {
    /// Sum of all fractions, unity up to rounding
    pub fn total(&self) -> f64 {
        self.na + self.cl + self.u235 + self.u238
    }
}

impl std::fmt::Display for SaltComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Na   {:.6}", self.na)?;
        writeln!(f, "Cl   {:.6}", self.cl)?;
        writeln!(f, "U235 {:.6}", self.u235)?;
        write!(f, "U238 {:.6}", self.u238)
    }
}

/// Rough atom fractions for a NaCl-UCl3 mixture
///
/// `nacl` is the NaCl percentage of the mixture and `enrichment` the U235
/// weight percent. Each NaCl unit contributes half an atom of Na and Cl, and
/// each UCl3 unit a quarter atom of U with three quarters Cl.
///
/// ```rust
/// # use nphys_salt::salt_composition;
/// let salt = salt_composition(50.0, 20.0).unwrap();
///
/// assert_eq!(salt.na, 0.25);
/// assert_eq!(salt.cl, 0.625);
/// assert!((salt.u235 - 0.025).abs() < 1e-15);
/// assert!((salt.u238 - 0.1).abs() < 1e-15);
/// ```
pub fn salt_composition(nacl: f64, enrichment: f64) -> Result<SaltComposition> {
    let nacl = fraction("NaCl", nacl)?;
    let enrichment = fraction("enrichment", enrichment)?;

    let uranium = (1.0 - nacl) / 4.0;
    let composition = SaltComposition {
        na: nacl / 2.0,
        cl: nacl / 2.0 + 3.0 * uranium,
        u235: uranium * enrichment,
        u238: uranium * (1.0 - enrichment),
    };

    debug!("Salt composition total {}", composition.total());
    Ok(composition)
}

/// Percentage to a fraction, rejecting anything outside [0, 100]
fn fraction(name: &'static str, value: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&value) {
        return Err(Error::OutOfRange { name, value });
    }
    Ok(value / 100.0)
}
