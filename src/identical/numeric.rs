//! Element rules for doubles and complex numbers.

use crate::values::core_values::complex::Complex64;
use crate::values::core_values::double::is_na_real;

/// Compares two doubles.
///
/// With `single_na`, every NA is equal to every other NA and every NaN to
/// every other NaN, but an NA never equals a plain NaN. Without it, NaNs are
/// compared by bit pattern. `num_eq` selects `==` for ordinary numbers, so
/// `0.0` and `-0.0` are equal; without it all numbers are compared by bits.
pub fn identical_double(x: f64, y: f64, num_eq: bool, single_na: bool) -> bool {
    if single_na {
        if is_na_real(x) {
            return is_na_real(y);
        }
        if is_na_real(y) {
            return false;
        }
        if x.is_nan() {
            return y.is_nan();
        }
        if y.is_nan() {
            return false;
        }
    }
    if num_eq && !single_na && (x.is_nan() || y.is_nan()) {
        return x.to_bits() == y.to_bits();
    }
    if num_eq {
        x == y
    } else {
        x.to_bits() == y.to_bits()
    }
}

pub fn identical_complex(
    x: Complex64,
    y: Complex64,
    num_eq: bool,
    single_na: bool,
) -> bool {
    identical_double(x.re, y.re, num_eq, single_na)
        && identical_double(x.im, y.im, num_eq, single_na)
}
