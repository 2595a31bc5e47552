use itertools::Itertools;
use log::debug;

use crate::identical::identical_with_visitor;
use crate::policy::IdenticalPolicy;
use crate::syntax::{
    Argument, Call, Formal, FunctionDefinition, Syntax, SyntaxData,
};
use crate::traits::identity::Identity;
use crate::values::value::Value;

/// Decides whether two closure bodies, together with their formals, have the
/// same shape and literals.
pub trait SyntaxEqualityVisitor {
    fn structurally_equal(
        &self,
        body_a: &Syntax,
        formals_a: &[Formal],
        body_b: &Syntax,
        formals_b: &[Formal],
    ) -> bool;
}

/// Walks both trees in lock-step. Source spans are ignored and constants are
/// compared with `identical` under the visitor's policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralSyntaxVisitor {
    policy: IdenticalPolicy,
}

impl StructuralSyntaxVisitor {
    pub fn new(policy: IdenticalPolicy) -> Self {
        StructuralSyntaxVisitor { policy }
    }

    pub fn visit_syntax(&self, a: &Syntax, b: &Syntax) -> bool {
        match (&a.data, &b.data) {
            (SyntaxData::Constant(x), SyntaxData::Constant(y)) => {
                self.visit_constant(x, y)
            }
            (SyntaxData::Lookup(x), SyntaxData::Lookup(y)) => x.same_ref(y),
            (SyntaxData::Call(x), SyntaxData::Call(y)) => self.visit_call(x, y),
            (SyntaxData::Function(x), SyntaxData::Function(y)) => {
                self.visit_function(x, y)
            }
            _ => false,
        }
    }

    fn visit_constant(&self, a: &Value, b: &Value) -> bool {
        identical_with_visitor(a, b, &self.policy, self)
            .unwrap_or_else(|err| {
                debug!("constant comparison failed: {err}");
                false
            })
    }

    fn visit_call(&self, a: &Call, b: &Call) -> bool {
        self.visit_syntax(&a.function, &b.function)
            && self.visit_arguments(&a.arguments, &b.arguments)
    }

    fn visit_arguments(&self, a: &[Argument], b: &[Argument]) -> bool {
        a.len() == b.len()
            && a.iter().zip_eq(b).all(|(x, y)| {
                x.name == y.name
                    && self.visit_optional(x.value.as_ref(), y.value.as_ref())
            })
    }

    fn visit_function(
        &self,
        a: &FunctionDefinition,
        b: &FunctionDefinition,
    ) -> bool {
        self.visit_formals(&a.formals, &b.formals)
            && self.visit_syntax(&a.body, &b.body)
    }

    pub fn visit_formals(&self, a: &[Formal], b: &[Formal]) -> bool {
        a.len() == b.len()
            && a.iter().zip_eq(b).all(|(x, y)| {
                x.name.same_ref(&y.name)
                    && self.visit_optional(
                        x.default.as_ref(),
                        y.default.as_ref(),
                    )
            })
    }

    fn visit_optional(&self, a: Option<&Syntax>, b: Option<&Syntax>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(x), Some(y)) => self.visit_syntax(x, y),
            _ => false,
        }
    }
}

impl SyntaxEqualityVisitor for StructuralSyntaxVisitor {
    fn structurally_equal(
        &self,
        body_a: &Syntax,
        formals_a: &[Formal],
        body_b: &Syntax,
        formals_b: &[Formal],
    ) -> bool {
        self.visit_formals(formals_a, formals_b)
            && self.visit_syntax(body_a, body_b)
    }
}
