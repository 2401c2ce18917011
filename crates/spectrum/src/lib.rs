//! Spectrum-weighted cross sections
//!
//! Folds a tabulated cross section with an analytic reactor neutron spectrum
//! to get flux-weighted group averages.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use nphys_spectrum::spectrum_average;
//! let energy = [1e-5, 1.0, 1e3, 1e5, 1e6, 2e6];
//! let xs = [3.0, 2.0, 1.5, 1.0, 0.8, 0.5];
//!
//! // Fast group average and its ratio to the thermal group average
//! let average = spectrum_average(&energy, &xs).unwrap();
//! println!("{} b, ratio {}", average.fast, average.ratio);
//! ```
//!
//! ## Core concepts
//!
//! The [Spectrum] is made of three groups, each defined by an unnormalised
//! shape over energy `E` (eV):
//!
//! | Group      | Shape                                  | Magnitude |
//! | ---------- | -------------------------------------- | --------- |
//! | thermal    | `E exp(-E/kT)`, `T = 325 K`            | `3.2e14`  |
//! | epithermal | piecewise `1/E` between 0.2 eV - 1 MeV | `1.98e14` |
//! | fast       | `exp(-E/a) sinh(sqrt(bE))`             | `0.98e14` |
//!
//! Every shape is normalised with the trapezoidal rule on the grid of the
//! cross section it is folded with, then scaled by the group magnitude. The
//! flux-weighted average in a group is
//!
//! ```text
//!     sigma_g = ∫ σ(E) φ_g(E) dE / ∫ φ_g(E) dE
//! ```
//!
//! Only the fast and thermal groups enter a [SpectrumAverage]. The epithermal
//! group is available on the [Spectrum] and in the total flux.
//!
//! All constants live in [SpectrumParameters] and can be loaded from JSON.

mod error;
mod parameters;
mod spectrum;
mod table;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use parameters::{EpithermalShape, FastShape, SpectrumParameters, ThermalShape, BOLTZMANN};

#[doc(inline)]
pub use spectrum::{spectrum_average, spectrum_average_with, Group, Spectrum, SpectrumAverage};

#[doc(inline)]
pub use table::CrossSectionTable;
