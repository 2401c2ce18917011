use crate::f;

/// Extends float primitives with formatting and comparison helpers
pub trait ValueExt {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// The default `{:e}` output drops the exponent sign and padding, which
    /// makes columns of tabulated data hard to read.
    ///
    /// ```rust
    /// # use nphys_utils::ValueExt;
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((3.2e14).sci(3, 2), "3.200e+14".to_string());
    /// assert_eq!((8.6173324e-5).sci(2, 3), "8.62e-005".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// Relative closeness of two values
    ///
    /// True if the difference is within `rel_tol` of the larger magnitude.
    /// Two exact zeros are always close.
    ///
    /// ```rust
    /// # use nphys_utils::ValueExt;
    /// assert!(1.0.is_close(1.0 + 1e-12, 1e-9));
    /// assert!(!1.0.is_close(1.1, 1e-9));
    /// assert!(0.0.is_close(0.0, 1e-9));
    /// ```
    fn is_close(&self, other: f64, rel_tol: f64) -> bool;
}

impl ValueExt for f64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        if !self.is_finite() {
            return f!("{self}");
        }
        let formatted = f!("{:.precision$e}", self, precision = precision);
        // `{:e}` always contains the exponent marker
        let (mantissa, exponent) = formatted.split_at(formatted.find('e').unwrap_or(0));
        let exponent = exponent.trim_start_matches('e');
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }

    fn is_close(&self, other: f64, rel_tol: f64) -> bool {
        if self == &other {
            return true;
        }
        let scale = self.abs().max(other.abs());
        (self - other).abs() <= rel_tol * scale
    }
}
