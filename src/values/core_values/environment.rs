use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt::{Debug, Formatter};

use indexmap::IndexMap;

use crate::traits::identity::Identity;
use crate::values::core_values::symbol::Symbol;
use crate::values::value::Value;

#[derive(Default)]
pub struct Frame {
    pub name: Option<String>,
    pub bindings: IndexMap<Symbol, Value>,
    pub parent: Option<Environment>,
}

/// A mutable binding frame. Environments are only ever equal to themselves.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn named(name: &str) -> Self {
        Environment(Rc::new(RefCell::new(Frame {
            name: Some(name.to_string()),
            ..Frame::default()
        })))
    }

    pub fn new_child(&self) -> Self {
        Environment(Rc::new(RefCell::new(Frame {
            parent: Some(self.clone()),
            ..Frame::default()
        })))
    }

    pub fn name(&self) -> Option<String> {
        self.0.borrow().name.clone()
    }

    pub fn define<V: Into<Value>>(&self, symbol: Symbol, value: V) {
        self.0.borrow_mut().bindings.insert(symbol, value.into());
    }

    /// Looks up `symbol` in this frame and then in its parents.
    pub fn get(&self, symbol: &Symbol) -> Option<Value> {
        let frame = self.0.borrow();
        match frame.bindings.get(symbol) {
            Some(value) => Some(value.clone()),
            None => frame.parent.as_ref().and_then(|parent| parent.get(symbol)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Two environments are identical if they share the same frame
impl Identity for Environment {
    fn same_ref(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// frames can reach themselves through bindings, so only the header is printed
impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "<environment: {name}>"),
            None => write!(f, "<environment: {:p}>", Rc::as_ptr(&self.0)),
        }
    }
}
