//! Measured drift velocities for N2-Ar mixtures
//!
//! G. N. Haddad, "Drift velocity of electrons in nitrogen-argon mixtures",
//! Aust. J. Phys. 36 (1983) 297.

// crate modules
use crate::input::Mixture;

/// Measured drift velocities for one gas mixture
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSeries {
    /// Gas composition
    pub mixture: Mixture,
    /// Reduced electric field E/N (Td)
    pub reduced_field: Vec<f64>,
    /// Measured drift velocity (km/s)
    pub drift_velocity: Vec<f64>,
    /// File the comparison for this mixture is written to
    pub output_name: String,
}

/// The three Haddad data sets, from 0.1% to 5% nitrogen
pub fn haddad_reference() -> Vec<ReferenceSeries> {
    #[rustfmt::skip]
    let ar999 = ReferenceSeries {
        mixture: Mixture { argon: 0.999, nitrogen: 0.001 },
        reduced_field: vec![
            0.1, 0.12, 0.14, 0.17, 0.2, 0.25, 0.3, 0.35, 0.4, 0.5, 0.6, 0.7, 0.8,
            1.0, 1.2, 1.4, 1.7, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0,
        ],
        drift_velocity: vec![
            1.75, 1.88, 2.01, 2.22, 2.44, 2.82, 3.22, 3.63, 4.03, 4.81, 5.55, 6.22,
            6.82, 7.77, 8.30, 8.48, 8.28, 7.84, 7.11, 6.63, 6.38, 6.28, 6.46,
        ],
        output_name: "vdriftBia2Ar999N001.out".to_string(),
    };

    #[rustfmt::skip]
    let ar990 = ReferenceSeries {
        mixture: Mixture { argon: 0.990, nitrogen: 0.010 },
        reduced_field: vec![
            0.06, 0.07, 0.08, 0.1, 0.12, 0.14, 0.17, 0.2, 0.25, 0.3, 0.35, 0.4, 0.5,
            0.6, 0.7, 0.8, 1.0, 1.2, 1.4, 1.7, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 6.0,
            7.0, 8.0, 10.0,
        ],
        drift_velocity: vec![
            2.08, 2.12, 2.15, 2.24, 2.35, 2.48, 2.69, 2.90, 3.28, 3.68, 4.08, 4.49,
            5.31, 6.14, 6.98, 7.81, 9.48, 11.1, 12.7, 14.9, 17.0, 19.8, 21.6, 22.4,
            22.5, 21.3, 20.0, 19.1, 18.6, 18.3,
        ],
        output_name: "vdriftBia2Ar990N010.out".to_string(),
    };

    #[rustfmt::skip]
    let ar950 = ReferenceSeries {
        mixture: Mixture { argon: 0.950, nitrogen: 0.050 },
        reduced_field: vec![
            0.1, 0.12, 0.14, 0.17, 0.2, 0.25, 0.3, 0.35, 0.4, 0.5, 0.6, 0.7, 0.8,
            1.0, 1.2, 1.4, 1.7, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0,
        ],
        drift_velocity: vec![
            3.3, 3.34, 3.39, 3.5, 3.63, 3.9, 4.2, 4.53, 4.87, 5.55, 6.25, 6.95, 7.65,
            9.04, 10.5, 11.8, 13.9, 15.9, 19.2, 22.4, 25.4, 28.3, 33.7, 38.0, 41.2,
            43.1, 44.2,
        ],
        output_name: "vdriftBia2Ar950N050.out".to_string(),
    };

    vec![ar999, ar990, ar950]
}
