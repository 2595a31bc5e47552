//! Deep structural equality of runtime values.
//!
//! [`identical`] is the entry point used by the builtin layer. It builds an
//! [`IdenticalEngine`] for one call and compares the two values recursively.

mod attributes;
mod engine;
pub mod numeric;
mod pairlist;

pub use attributes::AttributeComparator;
pub use engine::IdenticalEngine;

use crate::error::IdenticalError;
use crate::policy::IdenticalPolicy;
use crate::syntax::visitor::{StructuralSyntaxVisitor, SyntaxEqualityVisitor};
use crate::values::value::Value;

/// Compares `a` and `b` under `policy`, using the structural syntax
/// visitor for closure bodies. Literals in those bodies follow the same
/// policy.
pub fn identical(
    a: &Value,
    b: &Value,
    policy: &IdenticalPolicy,
) -> Result<bool, IdenticalError> {
    identical_with_visitor(a, b, policy, &StructuralSyntaxVisitor::new(*policy))
}

pub fn identical_with_visitor(
    a: &Value,
    b: &Value,
    policy: &IdenticalPolicy,
    syntax_visitor: &dyn SyntaxEqualityVisitor,
) -> Result<bool, IdenticalError> {
    IdenticalEngine::new(*policy, syntax_visitor).compare(a, b, 0)
}
