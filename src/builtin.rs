//! The `identical` builtin as seen from the dispatch layer.
//!
//! Arguments arrive positionally:
//! `x, y, num.eq, single.NA, attrib.as.set, ignore.bytecode,
//! ignore.environment, ignore.srcref`.
//! Trailing flags may be left out or passed as `Missing`.

use log::debug;

use crate::error::IdenticalError;
use crate::identical::identical;
use crate::policy::IdenticalPolicy;
use crate::values::core_values::complex::Complex64;
use crate::values::core_values::integer::is_na_integer;
use crate::values::core_values::logical::Logical;
use crate::values::value::Value;

const FLAG_NAMES: [&str; 6] = [
    "num.eq",
    "single.NA",
    "attrib.as.set",
    "ignore.bytecode",
    "ignore.environment",
    "ignore.srcref",
];

const MAX_ARGUMENTS: usize = 2 + FLAG_NAMES.len();

/// Evaluates `identical(x, y, ...)` and returns a logical scalar.
pub fn do_identical(args: &[Value]) -> Result<Value, IdenticalError> {
    if args.len() < 2 || args.len() > MAX_ARGUMENTS {
        return Err(IdenticalError::ArgumentCount(args.len()));
    }
    let policy = policy_from_args(&args[2..])?;
    debug!("identical called with {policy:?}");
    let result = identical(&args[0], &args[1], &policy)?;
    Ok(Value::logical(result.into()))
}

/// Builds the policy from the flag arguments following `x` and `y`.
pub fn policy_from_args(
    flags: &[Value],
) -> Result<IdenticalPolicy, IdenticalError> {
    let mut policy = IdenticalPolicy::default();
    let targets = [
        &mut policy.num_eq,
        &mut policy.single_na,
        &mut policy.attrib_as_set,
        &mut policy.ignore_bytecode,
        &mut policy.ignore_environment,
        &mut policy.ignore_srcref,
    ];
    for ((name, target), flag) in
        FLAG_NAMES.into_iter().zip(targets).zip(flags)
    {
        if let Value::Missing = flag {
            continue;
        }
        *target = as_logical(flag)
            .as_bool()
            .ok_or(IdenticalError::InvalidArgument { name })?;
    }
    Ok(policy)
}

/// Coerces the first element of an atomic vector to a logical.
/// Anything else, including empty vectors, is NA.
fn as_logical(value: &Value) -> Logical {
    match value {
        Value::Logical(v) => v.get(0).copied().unwrap_or(Logical::NA),
        Value::Integer(v) => match v.get(0) {
            Some(&i) if !is_na_integer(i) => (i != 0).into(),
            _ => Logical::NA,
        },
        Value::Double(v) => match v.get(0) {
            Some(&d) if !d.is_nan() => (d != 0.0).into(),
            _ => Logical::NA,
        },
        Value::Complex(v) => match v.get(0) {
            Some(&z) if !z.re.is_nan() && !z.im.is_nan() => {
                (z != Complex64::new(0.0, 0.0)).into()
            }
            _ => Logical::NA,
        },
        Value::Character(v) => match v.get(0) {
            Some(Some(text)) => string_to_logical(text),
            _ => Logical::NA,
        },
        _ => Logical::NA,
    }
}

fn string_to_logical(text: &str) -> Logical {
    match text {
        "TRUE" | "true" | "True" | "T" => Logical::True,
        "FALSE" | "false" | "False" | "F" => Logical::False,
        _ => Logical::NA,
    }
}
