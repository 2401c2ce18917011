//! Approximate atom fractions for NaCl-UCl3 fuel salts
//!
//! A quick estimate of the constituents of a chloride molten salt fuel, good
//! enough for first-pass material definitions.
//!
//! ```rust
//! # use nphys_salt::salt_composition;
//! let salt = salt_composition(60.0, 19.75).unwrap();
//! assert!(salt.u235 < salt.u238);
//! ```

#![deny(missing_docs)]

mod composition;
mod error;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use composition::{salt_composition, SaltComposition};
