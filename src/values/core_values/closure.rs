use alloc::rc::Rc;
use core::fmt::Display;

use crate::syntax::{Formal, Syntax};
use crate::traits::identity::Identity;
use crate::values::attributes::Attributes;
use crate::values::core_values::environment::Environment;
use crate::values::value::Value;

/// Identifies a fixed native implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinId(pub &'static str);

impl Display for BuiltinId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, ".Primitive(\"{}\")", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UserFunction {
    pub formals: Vec<Formal>,
    pub body: Syntax,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub enum ClosureKind {
    Builtin(BuiltinId),
    User(UserFunction),
}

#[derive(Debug, Clone)]
pub struct ClosureData {
    pub kind: ClosureKind,
    pub attributes: Attributes,
}

#[derive(Debug, Clone)]
pub struct Closure(Rc<ClosureData>);

impl Closure {
    pub fn builtin(id: BuiltinId) -> Self {
        Closure(Rc::new(ClosureData {
            kind: ClosureKind::Builtin(id),
            attributes: Attributes::default(),
        }))
    }

    pub fn user(
        formals: Vec<Formal>,
        body: Syntax,
        environment: Environment,
    ) -> Self {
        Closure(Rc::new(ClosureData {
            kind: ClosureKind::User(UserFunction {
                formals,
                body,
                environment,
            }),
            attributes: Attributes::default(),
        }))
    }

    pub fn kind(&self) -> &ClosureKind {
        &self.0.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.0.attributes
    }

    /// Returns a copy of this closure with `name` set. The copy is a new
    /// reference and is no longer identical to `self` by pointer.
    pub fn with_attribute<V: Into<Value>>(&self, name: &str, value: V) -> Self {
        let mut data = (*self.0).clone();
        data.attributes.set(name, value);
        Closure(Rc::new(data))
    }
}

impl Identity for Closure {
    fn same_ref(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
