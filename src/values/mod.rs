pub mod attributes;
pub mod core_values;
pub mod value;
