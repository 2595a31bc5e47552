use itertools::Itertools;

use crate::error::IdenticalError;
use crate::identical::engine::IdenticalEngine;
use crate::values::attributes::{Attributes, ROW_NAMES, compact_row_names};
use crate::values::value::{IntegerVector, Value};

/// Compares attribute maps, either as sets or in insertion order depending
/// on `attrib_as_set`.
pub struct AttributeComparator<'e, 'a> {
    engine: &'e IdenticalEngine<'a>,
}

impl<'e, 'a> AttributeComparator<'e, 'a> {
    pub fn new(engine: &'e IdenticalEngine<'a>) -> Self {
        AttributeComparator { engine }
    }

    pub fn compare(
        &self,
        x: &Attributes,
        y: &Attributes,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        if x.is_empty() && y.is_empty() {
            return Ok(true);
        }
        if x.len() != y.len() {
            return Ok(false);
        }
        if self.engine.policy().attrib_as_set {
            self.compare_as_set(x, y, depth)
        } else {
            self.compare_ordered(x, y, depth)
        }
    }

    fn compare_as_set(
        &self,
        x: &Attributes,
        y: &Attributes,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        for (name, x_value) in x {
            let Some(y_value) = y.get(name) else {
                return Ok(false);
            };
            if !self.compare_values(name, x_value, y_value, depth)? {
                return Ok(false);
            }
        }
        // values already matched, only the key sets are left to check
        Ok(y.names().all(|name| x.contains(name)))
    }

    fn compare_ordered(
        &self,
        x: &Attributes,
        y: &Attributes,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        for ((x_name, x_value), (y_name, y_value)) in x.iter().zip_eq(y.iter())
        {
            if x_name != y_name
                || !self.compare_values(x_name, x_value, y_value, depth)?
            {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn compare_values(
        &self,
        name: &str,
        x_value: &Value,
        y_value: &Value,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        if name == ROW_NAMES {
            if let Some(equal) =
                self.compare_row_names(x_value, y_value, depth)?
            {
                return Ok(equal);
            }
        }
        self.engine.compare(x_value, y_value, depth + 1)
    }

    /// Compares row names when at least one side uses the compact encoding,
    /// without expanding the sequence. `None` if neither side is compact.
    fn compare_row_names(
        &self,
        x_value: &Value,
        y_value: &Value,
        depth: u32,
    ) -> Result<Option<bool>, IdenticalError> {
        let (x, y) =
            match (compact_row_names(x_value), compact_row_names(y_value)) {
                (None, None) => return Ok(None),
                (Some((n, x)), Some((m, y))) if n == m => (x, y),
                (Some((n, x)), None) => match y_value {
                    Value::Integer(y) if is_sequence(y, n) => (x, y),
                    _ => return Ok(Some(false)),
                },
                (None, Some((m, y))) => match x_value {
                    Value::Integer(x) if is_sequence(x, m) => (x, y),
                    _ => return Ok(Some(false)),
                },
                _ => return Ok(Some(false)),
            };
        self.compare(x.attributes(), y.attributes(), depth + 1)
            .map(Some)
    }
}

/// True if `row_names` holds exactly `1..=len`.
fn is_sequence(row_names: &IntegerVector, len: usize) -> bool {
    row_names.len() == len
        && row_names.iter().zip(1..).all(|(&name, index)| name == index)
}
