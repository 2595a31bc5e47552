pub use num::complex::Complex64;

use crate::values::core_values::double::NA_REAL;

pub const NA_COMPLEX: Complex64 = Complex64::new(NA_REAL, NA_REAL);
