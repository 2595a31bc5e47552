use itertools::Itertools;
use log::trace;

use crate::error::IdenticalError;
use crate::identical::attributes::AttributeComparator;
use crate::identical::numeric::{identical_complex, identical_double};
use crate::policy::IdenticalPolicy;
use crate::syntax::visitor::SyntaxEqualityVisitor;
use crate::traits::identity::Identity;
use crate::values::attributes::Attributes;
use crate::values::core_values::closure::{Closure, ClosureKind};
use crate::values::core_values::s4::S4Object;
use crate::values::core_values::vector::Vector;
use crate::values::value::Value;

/// Recursive comparison for one `identical` call.
///
/// The engine is immutable. `depth` is threaded through every recursive call
/// for tracing only and has no influence on the result.
pub struct IdenticalEngine<'a> {
    policy: IdenticalPolicy,
    syntax_visitor: &'a dyn SyntaxEqualityVisitor,
}

impl<'a> IdenticalEngine<'a> {
    pub fn new(
        policy: IdenticalPolicy,
        syntax_visitor: &'a dyn SyntaxEqualityVisitor,
    ) -> Self {
        IdenticalEngine {
            policy,
            syntax_visitor,
        }
    }

    pub fn policy(&self) -> &IdenticalPolicy {
        &self.policy
    }

    pub fn compare(
        &self,
        a: &Value,
        b: &Value,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        trace!("identical: {} vs {} at depth {depth}", a.kind(), b.kind());
        let IdenticalPolicy {
            num_eq, single_na, ..
        } = self.policy;
        match (a, b) {
            (Value::Null | Value::Missing, _)
            | (_, Value::Null | Value::Missing) => Ok(a.kind() == b.kind()),
            (Value::Logical(x), Value::Logical(y)) => {
                self.compare_vectors(x, y, depth, |p, q| Ok(p == q))
            }
            (Value::Integer(x), Value::Integer(y)) => {
                self.compare_vectors(x, y, depth, |p, q| Ok(p == q))
            }
            (Value::Double(x), Value::Double(y)) => {
                self.compare_vectors(x, y, depth, |p, q| {
                    Ok(identical_double(*p, *q, num_eq, single_na))
                })
            }
            (Value::Complex(x), Value::Complex(y)) => {
                self.compare_vectors(x, y, depth, |p, q| {
                    Ok(identical_complex(*p, *q, num_eq, single_na))
                })
            }
            // NA is `None`, so both-NA and byte equality fall out of `==`
            (Value::Character(x), Value::Character(y)) => {
                self.compare_vectors(x, y, depth, |p, q| Ok(p == q))
            }
            (Value::Raw(x), Value::Raw(y)) => {
                self.compare_vectors(x, y, depth, |p, q| Ok(p == q))
            }
            (Value::List(x), Value::List(y))
            | (Value::Expression(x), Value::Expression(y)) => {
                self.compare_vectors(x, y, depth, |p, q| {
                    self.compare(p, q, depth + 1)
                })
            }
            (Value::Symbol(x), Value::Symbol(y)) => Ok(x.same_ref(y)),
            (Value::Environment(x), Value::Environment(y)) => Ok(x.same_ref(y)),
            (Value::ExternalHandle(x), Value::ExternalHandle(y)) => {
                Ok(x.same_ref(y))
            }
            (Value::ForeignRef(x), Value::ForeignRef(y)) => Ok(x.same_ref(y)),
            (Value::Closure(x), Value::Closure(y)) => {
                self.compare_closures(x, y, depth)
            }
            (Value::S4Object(x), Value::S4Object(y)) => {
                self.compare_s4_objects(x, y, depth)
            }
            (Value::PairList(x), Value::PairList(y)) => {
                self.compare_pairlists(x, y, depth)
            }
            _ => Ok(false),
        }
    }

    /// Length first, then elements, then attributes.
    fn compare_vectors<T>(
        &self,
        x: &Vector<T>,
        y: &Vector<T>,
        depth: u32,
        mut element_eq: impl FnMut(&T, &T) -> Result<bool, IdenticalError>,
    ) -> Result<bool, IdenticalError> {
        if x.len() != y.len() {
            return Ok(false);
        }
        for (p, q) in x.iter().zip_eq(y.iter()) {
            if !element_eq(p, q)? {
                return Ok(false);
            }
        }
        self.compare_attributes(x.attributes(), y.attributes(), depth)
    }

    fn compare_closures(
        &self,
        x: &Closure,
        y: &Closure,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        if x.same_ref(y) {
            return Ok(true);
        }
        match (x.kind(), y.kind()) {
            (ClosureKind::Builtin(a), ClosureKind::Builtin(b)) => Ok(a == b),
            (ClosureKind::User(f), ClosureKind::User(g)) => {
                if !self.syntax_visitor.structurally_equal(
                    &f.body,
                    &f.formals,
                    &g.body,
                    &g.formals,
                ) {
                    return Ok(false);
                }
                if !self.policy.ignore_environment
                    && !f.environment.same_ref(&g.environment)
                {
                    return Ok(false);
                }
                self.compare_attributes(
                    x.attributes(),
                    y.attributes(),
                    depth + 1,
                )
            }
            _ => Ok(false),
        }
    }

    fn compare_s4_objects(
        &self,
        x: &S4Object,
        y: &S4Object,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        if x.same_ref(y) {
            return Ok(true);
        }
        if x.is_s4() != y.is_s4() {
            return Ok(false);
        }
        self.compare_attributes(x.attributes(), y.attributes(), depth)
    }

    pub(crate) fn compare_attributes(
        &self,
        x: &Attributes,
        y: &Attributes,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        AttributeComparator::new(self).compare(x, y, depth)
    }
}
