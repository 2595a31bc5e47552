use core::ops::Index;
use core::slice::Iter;

use crate::values::attributes::Attributes;
use crate::values::value::Value;

/// Homogeneous element storage shared by every vector kind.
#[derive(Debug, Clone, Default)]
pub struct Vector<T> {
    elements: Vec<T>,
    attributes: Attributes,
}

impl<T> Vector<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Vector {
            elements,
            attributes: Attributes::default(),
        }
    }

    pub fn with_attributes(elements: Vec<T>, attributes: Attributes) -> Self {
        Vector {
            elements,
            attributes,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// A scalar is a single element without attributes.
    pub fn is_scalar(&self) -> bool {
        self.elements.len() == 1 && self.attributes.is_empty()
    }

    pub fn set_attribute<V: Into<Value>>(&mut self, name: &str, value: V) {
        self.attributes.set(name, value);
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Vector::new(elements)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
