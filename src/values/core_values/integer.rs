/// The integer NA marker. It is the one value excluded from the integer range.
pub const NA_INTEGER: i32 = i32::MIN;

pub fn is_na_integer(value: i32) -> bool {
    value == NA_INTEGER
}
