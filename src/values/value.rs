use strum::Display;

use crate::values::attributes::Attributes;
use crate::values::core_values::closure::Closure;
use crate::values::core_values::complex::Complex64;
use crate::values::core_values::environment::Environment;
use crate::values::core_values::external::{ExternalHandle, ForeignRef};
use crate::values::core_values::logical::Logical;
use crate::values::core_values::pairlist::{
    PairList, PairListKind, PairListNode,
};
use crate::values::core_values::s4::S4Object;
use crate::values::core_values::symbol::Symbol;
use crate::values::core_values::vector::Vector;

pub type LogicalVector = Vector<Logical>;
pub type IntegerVector = Vector<i32>;
pub type DoubleVector = Vector<f64>;
pub type ComplexVector = Vector<Complex64>;
/// `None` elements are NA.
pub type CharacterVector = Vector<Option<String>>;
pub type RawVector = Vector<u8>;
pub type ListVector = Vector<Value>;

/// A runtime value.
///
/// Vector kinds, closures, pairlists and S4 objects carry attributes.
/// Closures, pairlists, S4 objects, environments and foreign references
/// are shared by reference; cloning them keeps their identity.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    /// The "argument omitted" marker.
    Missing,
    Logical(LogicalVector),
    Integer(IntegerVector),
    Double(DoubleVector),
    Complex(ComplexVector),
    Character(CharacterVector),
    Raw(RawVector),
    List(ListVector),
    Expression(ListVector),
    Symbol(Symbol),
    Environment(Environment),
    Closure(Closure),
    PairList(PairList),
    S4Object(S4Object),
    ExternalHandle(ExternalHandle),
    ForeignRef(ForeignRef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ValueKind {
    Null,
    Missing,
    Logical,
    Integer,
    Double,
    Complex,
    Character,
    Raw,
    List,
    Expression,
    Symbol,
    Environment,
    Closure,
    PairList,
    Language,
    S4Object,
    ExternalHandle,
    ForeignRef,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Missing => ValueKind::Missing,
            Value::Logical(_) => ValueKind::Logical,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::Complex(_) => ValueKind::Complex,
            Value::Character(_) => ValueKind::Character,
            Value::Raw(_) => ValueKind::Raw,
            Value::List(_) => ValueKind::List,
            Value::Expression(_) => ValueKind::Expression,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Environment(_) => ValueKind::Environment,
            Value::Closure(_) => ValueKind::Closure,
            Value::PairList(list) => match list.kind() {
                PairListKind::List => ValueKind::PairList,
                PairListKind::Language => ValueKind::Language,
            },
            Value::S4Object(_) => ValueKind::S4Object,
            Value::ExternalHandle(_) => ValueKind::ExternalHandle,
            Value::ForeignRef(_) => ValueKind::ForeignRef,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Value::Logical(v) => Some(v.attributes()),
            Value::Integer(v) => Some(v.attributes()),
            Value::Double(v) => Some(v.attributes()),
            Value::Complex(v) => Some(v.attributes()),
            Value::Character(v) => Some(v.attributes()),
            Value::Raw(v) => Some(v.attributes()),
            Value::List(v) | Value::Expression(v) => Some(v.attributes()),
            Value::Closure(closure) => Some(closure.attributes()),
            Value::PairList(list) => Some(list.attributes()),
            Value::S4Object(object) => Some(object.attributes()),
            Value::Null
            | Value::Missing
            | Value::Symbol(_)
            | Value::Environment(_)
            | Value::ExternalHandle(_)
            | Value::ForeignRef(_) => None,
        }
    }

    /// Sets an attribute on attributable values. Values without an
    /// attribute map are returned unchanged.
    pub fn with_attribute<V: Into<Value>>(self, name: &str, value: V) -> Value {
        match self {
            Value::Logical(mut v) => {
                v.set_attribute(name, value);
                Value::Logical(v)
            }
            Value::Integer(mut v) => {
                v.set_attribute(name, value);
                Value::Integer(v)
            }
            Value::Double(mut v) => {
                v.set_attribute(name, value);
                Value::Double(v)
            }
            Value::Complex(mut v) => {
                v.set_attribute(name, value);
                Value::Complex(v)
            }
            Value::Character(mut v) => {
                v.set_attribute(name, value);
                Value::Character(v)
            }
            Value::Raw(mut v) => {
                v.set_attribute(name, value);
                Value::Raw(v)
            }
            Value::List(mut v) => {
                v.set_attribute(name, value);
                Value::List(v)
            }
            Value::Expression(mut v) => {
                v.set_attribute(name, value);
                Value::Expression(v)
            }
            Value::Closure(closure) => {
                Value::Closure(closure.with_attribute(name, value))
            }
            Value::PairList(list) => {
                Value::PairList(list.with_attribute(name, value))
            }
            Value::S4Object(object) => {
                Value::S4Object(object.with_attribute(name, value))
            }
            other => other,
        }
    }

    /// Number of elements for vectors and pairlists, 1 for other values
    /// and 0 for `NULL`.
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Logical(v) => v.len(),
            Value::Integer(v) => v.len(),
            Value::Double(v) => v.len(),
            Value::Complex(v) => v.len(),
            Value::Character(v) => v.len(),
            Value::Raw(v) => v.len(),
            Value::List(v) | Value::Expression(v) => v.len(),
            Value::PairList(list) => list.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

// constructors
impl Value {
    pub fn logical(value: Logical) -> Value {
        Value::Logical(Vector::new(vec![value]))
    }
    pub fn logicals(values: Vec<Logical>) -> Value {
        Value::Logical(Vector::new(values))
    }
    pub fn integer(value: i32) -> Value {
        Value::Integer(Vector::new(vec![value]))
    }
    pub fn integers(values: Vec<i32>) -> Value {
        Value::Integer(Vector::new(values))
    }
    pub fn double(value: f64) -> Value {
        Value::Double(Vector::new(vec![value]))
    }
    pub fn doubles(values: Vec<f64>) -> Value {
        Value::Double(Vector::new(values))
    }
    pub fn complex(re: f64, im: f64) -> Value {
        Value::Complex(Vector::new(vec![Complex64::new(re, im)]))
    }
    pub fn complexes(values: Vec<Complex64>) -> Value {
        Value::Complex(Vector::new(values))
    }
    pub fn string(value: &str) -> Value {
        Value::Character(Vector::new(vec![Some(value.to_string())]))
    }
    pub fn strings(values: Vec<Option<&str>>) -> Value {
        Value::Character(
            values.into_iter().map(|s| s.map(str::to_string)).collect(),
        )
    }
    pub fn raw(values: Vec<u8>) -> Value {
        Value::Raw(Vector::new(values))
    }
    pub fn list(values: Vec<Value>) -> Value {
        Value::List(Vector::new(values))
    }
    pub fn expression(values: Vec<Value>) -> Value {
        Value::Expression(Vector::new(values))
    }
    pub fn symbol(name: &str) -> Value {
        Value::Symbol(Symbol::new(name))
    }
    /// An empty node list is the `NULL` pairlist.
    pub fn pairlist(kind: PairListKind, nodes: Vec<PairListNode>) -> Value {
        PairList::from_nodes(kind, nodes).map_or(Value::Null, Value::PairList)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::logical(value.into())
    }
}
impl From<Logical> for Value {
    fn from(value: Logical) -> Self {
        Value::logical(value)
    }
}
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::integer(value)
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::double(value)
    }
}
impl From<Complex64> for Value {
    fn from(value: Complex64) -> Self {
        Value::Complex(Vector::new(vec![value]))
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Character(Vector::new(vec![Some(value)]))
    }
}
impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::list(values)
    }
}
impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}
impl From<Environment> for Value {
    fn from(value: Environment) -> Self {
        Value::Environment(value)
    }
}
impl From<Closure> for Value {
    fn from(value: Closure) -> Self {
        Value::Closure(value)
    }
}
impl From<PairList> for Value {
    fn from(value: PairList) -> Self {
        Value::PairList(value)
    }
}
impl From<S4Object> for Value {
    fn from(value: S4Object) -> Self {
        Value::S4Object(value)
    }
}
impl From<ExternalHandle> for Value {
    fn from(value: ExternalHandle) -> Self {
        Value::ExternalHandle(value)
    }
}
impl From<ForeignRef> for Value {
    fn from(value: ForeignRef) -> Self {
        Value::ForeignRef(value)
    }
}

/// Builds a `Value::List` from the given elements.
#[macro_export]
macro_rules! list_value {
    ( $( $x:expr ),* $(,)? ) => {
        $crate::values::value::Value::list(vec![
            $( $crate::values::value::Value::from($x) ),*
        ])
    };
}
