//! Plane surfaces through three points
//!
//! Originally for writing MCNP input decks, where a general plane is often
//! easiest to define from three known points and the sign used in a cell
//! definition depends on which side the cell lies.
//!
//! ```rust
//! # use nphys_plane::{Plane, Sense};
//! let plane = Plane::through(
//!     [-4.1, 60.0, -0.25],
//!     [-11.7, 50.0, -0.25],
//!     [-4.1, 60.0, 0.25],
//! )
//! .unwrap();
//!
//! // point on the preferred side of the surface
//! assert_eq!(plane.sense([0.0, 50.0, 0.0]), Sense::Positive);
//! ```

#![deny(missing_docs)]

mod error;
mod plane;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use plane::{Plane, Sense};
