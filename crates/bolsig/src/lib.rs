//! Drive a Boltzmann equation solver and compare drift velocities
//!
//! The BOLSIG- solver is run once per reduced electric field from a reference
//! input template. The reduced electron mobility is read back from its output
//! and converted into a drift velocity, which is then compared against the
//! Haddad measurements in nitrogen-argon mixtures.
//!
//! ```rust, no_run
//! # use nphys_bolsig::{compare_all, haddad_reference, BolsigConfig, BolsigRunner};
//! let runner = BolsigRunner::new(BolsigConfig::default()).unwrap();
//!
//! // Writes vdriftBia2Ar999N001.out etc. to the current directory
//! let results = compare_all(&runner, &haddad_reference(), 293.0, ".").unwrap();
//! ```
//!
//! The solver itself sits behind the [MobilitySolver] trait.

mod compare;
mod error;
mod input;
mod parsers;
mod reference;
mod solver;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use input::{render_input, Conditions, Mixture};

#[doc(inline)]
pub use parsers::parse_mobility;

#[doc(inline)]
pub use solver::{BolsigConfig, BolsigRunner, MobilitySolver};

#[doc(inline)]
pub use reference::{haddad_reference, ReferenceSeries};

#[doc(inline)]
pub use compare::{compare, compare_all, drift_velocity, write_comparison, DriftPoint};

/// Default gas temperature (K)
pub const GAS_TEMPERATURE: f64 = 293.0;
