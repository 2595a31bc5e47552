use core::ops::Range;

use crate::values::core_values::symbol::Symbol;
use crate::values::value::Value;

pub mod visitor;

/// A function body node. `span` points back into the source text and is
/// never part of structural equality.
#[derive(Debug, Clone)]
pub struct Syntax {
    pub data: SyntaxData,
    pub span: Option<Range<usize>>,
}

#[derive(Debug, Clone)]
pub enum SyntaxData {
    Constant(Value),
    Lookup(Symbol),
    Call(Call),
    Function(FunctionDefinition),
}

#[derive(Debug, Clone)]
pub struct Call {
    pub function: Box<Syntax>,
    pub arguments: Vec<Argument>,
}

/// A call argument. `value` is `None` for an empty argument as in `x[, 1]`.
#[derive(Debug, Clone)]
pub struct Argument {
    pub name: Option<Symbol>,
    pub value: Option<Syntax>,
}

#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    pub formals: Vec<Formal>,
    pub body: Box<Syntax>,
}

/// A formal parameter with its optional default expression.
#[derive(Debug, Clone)]
pub struct Formal {
    pub name: Symbol,
    pub default: Option<Syntax>,
}

impl Syntax {
    pub fn new(data: SyntaxData) -> Self {
        Syntax { data, span: None }
    }

    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    pub fn constant<V: Into<Value>>(value: V) -> Self {
        Syntax::new(SyntaxData::Constant(value.into()))
    }

    pub fn lookup(name: &str) -> Self {
        Syntax::new(SyntaxData::Lookup(Symbol::new(name)))
    }

    /// Builds `name(arguments...)` with positional arguments.
    pub fn call(name: &str, arguments: Vec<Syntax>) -> Self {
        Syntax::new(SyntaxData::Call(Call {
            function: Box::new(Syntax::lookup(name)),
            arguments: arguments
                .into_iter()
                .map(|value| Argument {
                    name: None,
                    value: Some(value),
                })
                .collect(),
        }))
    }

    pub fn function(formals: Vec<Formal>, body: Syntax) -> Self {
        Syntax::new(SyntaxData::Function(FunctionDefinition {
            formals,
            body: Box::new(body),
        }))
    }
}

impl Formal {
    pub fn new(name: &str) -> Self {
        Formal {
            name: Symbol::new(name),
            default: None,
        }
    }

    pub fn with_default(name: &str, default: Syntax) -> Self {
        Formal {
            name: Symbol::new(name),
            default: Some(default),
        }
    }
}
