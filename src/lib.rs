//! `nphys` is a small set of libraries for nuclear and plasma physics
//! analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of library crates.
#[doc(inline)]
pub use nphys_spectrum as spectrum;

#[doc(inline)]
pub use nphys_utils as utils;

#[cfg(feature = "bolsig")]
#[cfg_attr(docsrs, doc(cfg(feature = "bolsig")))]
#[doc(inline)]
pub use nphys_bolsig as bolsig;

#[cfg(feature = "plane")]
#[cfg_attr(docsrs, doc(cfg(feature = "plane")))]
#[doc(inline)]
pub use nphys_plane as plane;

#[cfg(feature = "salt")]
#[cfg_attr(docsrs, doc(cfg(feature = "salt")))]
#[doc(inline)]
pub use nphys_salt as salt;

#[cfg(feature = "xsdata")]
#[cfg_attr(docsrs, doc(cfg(feature = "xsdata")))]
#[doc(inline)]
pub use nphys_xsdata as xsdata;
