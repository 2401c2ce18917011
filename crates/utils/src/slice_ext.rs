use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Index of the first value that does not strictly increase
    ///
    /// Returns `None` for a strictly increasing slice, otherwise the index `i`
    /// where `self[i] <= self[i-1]`. Any `NaN` breaks the ordering.
    ///
    /// ```rust
    /// # use nphys_utils::SliceExt;
    /// assert_eq!([1e-5, 1.0, 1e3].first_non_increasing(), None);
    /// assert_eq!([1e-5, 1.0, 1.0].first_non_increasing(), Some(2));
    /// assert_eq!([2.0, 1.0, 3.0].first_non_increasing(), Some(1));
    /// ```
    fn first_non_increasing(&self) -> Option<usize>;

    /// Trapezoidal integral of the values over an aligned grid
    ///
    /// The grid may be non-uniform. Both slices must have the same length and
    /// at least two points.
    ///
    /// ```text
    ///     sum of 0.5 * (y[i] + y[i+1]) * (x[i+1] - x[i])
    /// ```
    ///
    /// ```rust
    /// # use nphys_utils::SliceExt;
    /// let x = [0.0, 1.0, 3.0];
    ///
    /// // y = x integrates exactly with trapezoids
    /// assert_eq!([0.0, 1.0, 3.0].trapz(&x), Ok(4.5));
    ///
    /// // Error cases
    /// assert!([1.0, 2.0].trapz(&x).is_err());
    /// assert!([1.0].trapz(&[0.0]).is_err());
    /// ```
    fn trapz(&self, grid: &[T]) -> Result<T>;
}

impl SliceExt<f64> for [f64] {
    fn first_non_increasing(&self) -> Option<usize> {
        // written as !(a < b) so that NaN comparisons are caught
        self.windows(2)
            .position(|pair| !(pair[0] < pair[1]))
            .map(|idx| idx + 1)
    }

    fn trapz(&self, grid: &[f64]) -> Result<f64> {
        if self.len() != grid.len() {
            return Err(Error::MismatchedSliceLengths {
                values: self.len(),
                grid: grid.len(),
            });
        }

        if grid.len() < 2 {
            return Err(Error::BelowMinimumSliceLength {
                length: grid.len(),
                minimum_required: 2,
            });
        }

        Ok(self
            .windows(2)
            .zip(grid.windows(2))
            .map(|(y, x)| 0.5 * (y[0] + y[1]) * (x[1] - x[0]))
            .sum())
    }
}
