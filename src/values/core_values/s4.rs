use alloc::rc::Rc;

use crate::traits::identity::Identity;
use crate::values::attributes::{Attributes, CLASS};
use crate::values::value::Value;

#[derive(Debug, Clone)]
pub struct S4Data {
    pub is_s4: bool,
    /// Slots are stored as attributes.
    pub attributes: Attributes,
}

#[derive(Debug, Clone)]
pub struct S4Object(Rc<S4Data>);

impl S4Object {
    pub fn new(is_s4: bool, attributes: Attributes) -> Self {
        S4Object(Rc::new(S4Data { is_s4, attributes }))
    }

    /// Creates an S4 instance of `class` with the given slots.
    pub fn instance(class: &str, slots: Vec<(&str, Value)>) -> Self {
        let mut attributes = Attributes::default();
        for (name, value) in slots {
            attributes.set(name, value);
        }
        attributes.set(CLASS, Value::string(class));
        S4Object::new(true, attributes)
    }

    pub fn is_s4(&self) -> bool {
        self.0.is_s4
    }

    pub fn slot(&self, name: &str) -> Option<&Value> {
        self.0.attributes.get(name)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.0.attributes
    }

    pub fn with_attribute<V: Into<Value>>(&self, name: &str, value: V) -> Self {
        let mut data = (*self.0).clone();
        data.attributes.set(name, value);
        S4Object(Rc::new(data))
    }
}

impl Identity for S4Object {
    fn same_ref(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
