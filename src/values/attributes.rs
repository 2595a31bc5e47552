use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::values::core_values::integer::NA_INTEGER;
use crate::values::value::{IntegerVector, Value};

pub const CLASS: &str = "class";
pub const ROW_NAMES: &str = "row.names";

/// Insertion-ordered attribute map with unique names.
#[derive(Debug, Clone, Default)]
pub struct Attributes(IndexMap<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Attributes::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets `name`. Replacing an existing attribute keeps its position.
    pub fn set<V: Into<Value>>(&mut self, name: &str, value: V) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Removes `name`, keeping the order of the remaining attributes.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    pub fn iter(&'_ self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Recognizes the compact row names encoding `c(NA, n)`, which stands for
/// the sequence `1..=|n|`. Returns the sequence length together with the
/// encoded vector, or `None` for any other value.
pub fn compact_row_names(value: &Value) -> Option<(usize, &IntegerVector)> {
    match value {
        Value::Integer(row_names)
            if row_names.len() == 2
                && row_names[0] == NA_INTEGER
                && row_names[1] != NA_INTEGER =>
        {
            Some((row_names[1].unsigned_abs() as usize, row_names))
        }
        _ => None,
    }
}

/// Builds an `Attributes` map from `name => value` pairs in order.
#[macro_export]
macro_rules! attributes {
    ( $( $name:expr => $value:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut attributes = $crate::values::attributes::Attributes::new();
            $( attributes.set($name, $value); )*
            attributes
        }
    };
}
