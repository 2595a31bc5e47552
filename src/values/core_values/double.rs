//! NA and NaN classification for doubles.
//!
//! NA is an ordinary quiet NaN whose low word is `1954`. Every other NaN
//! payload is a plain NaN.

/// Low word of the NA payload.
const NA_LOW_WORD: u64 = 1954;

pub const NA_REAL_BITS: u64 = 0x7FF0_0000_0000_07A2;
pub const NA_REAL: f64 = f64::from_bits(NA_REAL_BITS);

/// True for any NaN carrying the NA payload, regardless of sign or quiet bit.
pub fn is_na_real(value: f64) -> bool {
    value.is_nan() && (value.to_bits() & 0xFFFF_FFFF) == NA_LOW_WORD
}

/// True for NaNs that are not NA.
pub fn is_nan_not_na(value: f64) -> bool {
    value.is_nan() && !is_na_real(value)
}
