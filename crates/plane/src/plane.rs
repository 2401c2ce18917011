//! General plane through three points

// crate modules
use crate::error::{Error, Result};

// nphys modules
use nphys_utils::ValueExt;

// external crates
use log::debug;
use nalgebra::Vector3;

/// Side of a plane a point lies on
///
/// In an MCNP cell definition this is the sign given to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `ax + by + cz - d > 0`
    Positive,
    /// `ax + by + cz - d < 0`
    Negative,
    /// Exactly on the surface
    OnSurface,
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Sense::Positive => "+",
            Sense::Negative => "-",
            Sense::OnSurface => "on surface",
        };
        write!(f, "{s}")
    }
}

/// Plane `ax + by + cz = d`
///
/// The normal `(a, b, c)` is not normalised, so the coefficients keep the
/// scale of the input coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal vector `(a, b, c)`
    pub normal: Vector3<f64>,
    /// Constant `d`
    pub d: f64,
}

impl Plane {
    /// Plane through three points
    ///
    /// The normal is `(p1 - p2) × (p3 - p2)`, so swapping points flips the
    /// sense of the plane.
    ///
    /// ```rust
    /// # use nphys_plane::{Error, Plane};
    /// let plane = Plane::through([0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]);
    /// assert_eq!(plane, Err(Error::DegeneratePlane));
    ///
    /// // z = 1
    /// let plane = Plane::through([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!((plane.a(), plane.b(), plane.c(), plane.d), (0.0, 0.0, -1.0, -1.0));
    /// ```
    pub fn through<P>(p1: P, p2: P, p3: P) -> Result<Self>
    where
        P: Into<Vector3<f64>>,
    {
        let (p1, p2, p3) = (p1.into(), p2.into(), p3.into());

        let normal = (p1 - p2).cross(&(p3 - p2));
        if normal == Vector3::zeros() {
            return Err(Error::DegeneratePlane);
        }

        let plane = Self {
            normal,
            d: normal.dot(&p1),
        };
        debug!("Plane through three points: {plane}");
        Ok(plane)
    }

    /// Coefficient `a`, the x component of the normal
    pub fn a(&self) -> f64 {
        self.normal.x
    }

    /// Coefficient `b`, the y component of the normal
    pub fn b(&self) -> f64 {
        self.normal.y
    }

    /// Coefficient `c`, the z component of the normal
    pub fn c(&self) -> f64 {
        self.normal.z
    }

    /// Value of `ax + by + cz - d` at a point
    pub fn evaluate<P: Into<Vector3<f64>>>(&self, point: P) -> f64 {
        self.normal.dot(&point.into()) - self.d
    }

    /// Side of the plane a point is on
    ///
    /// ```rust
    /// # use nphys_plane::{Plane, Sense};
    /// let plane = Plane::through([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(plane.sense([5.0, 5.0, 0.0]), Sense::Positive);
    /// assert_eq!(plane.sense([5.0, 5.0, 2.0]), Sense::Negative);
    /// assert_eq!(plane.sense([5.0, 5.0, 1.0]), Sense::OnSurface);
    /// ```
    pub fn sense<P: Into<Vector3<f64>>>(&self, point: P) -> Sense {
        let value = self.evaluate(point);
        if value > 0.0 {
            Sense::Positive
        } else if value < 0.0 {
            Sense::Negative
        } else {
            Sense::OnSurface
        }
    }

    /// MCNP general plane surface card, `j P A B C D`
    ///
    /// ```rust
    /// # use nphys_plane::Plane;
    /// let plane = Plane::through([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(
    ///     plane.mcnp_card(10),
    ///     "10 P 0.00000e+00 0.00000e+00 -1.00000e+00 -1.00000e+00"
    /// );
    /// ```
    pub fn mcnp_card(&self, id: u32) -> String {
        format!(
            "{id} P {} {} {} {}",
            self.a().sci(5, 2),
            self.b().sci(5, 2),
            self.c().sci(5, 2),
            self.d.sci(5, 2)
        )
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "A: {:.6}, B: {:.6}, C: {:.6}, D: {:.6}",
            self.a(),
            self.b(),
            self.c(),
            self.d
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sense_symbols() {
        assert_eq!(Sense::Positive.to_string(), "+");
        assert_eq!(Sense::Negative.to_string(), "-");
        assert_eq!(Sense::OnSurface.to_string(), "on surface");
    }

    #[test]
    fn points_lie_on_plane() {
        let (p1, p2, p3) = ([1.0, 2.0, 3.0], [-2.0, 0.5, 4.0], [0.0, -3.0, 1.0]);
        let plane = Plane::through(p1, p2, p3).unwrap();

        for p in [p1, p2, p3] {
            assert!(plane.evaluate(p).abs() < 1e-12);
        }
    }

    #[test]
    fn swapped_points_flip_sense() {
        let (p1, p2, p3) = ([1.0, 2.0, 3.0], [-2.0, 0.5, 4.0], [0.0, -3.0, 1.0]);
        let forward = Plane::through(p1, p2, p3).unwrap();
        let reverse = Plane::through(p3, p2, p1).unwrap();

        let point = [10.0, 10.0, 10.0];
        assert!((forward.evaluate(point) + reverse.evaluate(point)).abs() < 1e-9);
    }

    #[test]
    fn collinear_points() {
        let result = Plane::through([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
        assert_eq!(result, Err(Error::DegeneratePlane));
    }
}
