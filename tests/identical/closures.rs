use identical_core::syntax::{Formal, Syntax};
use identical_core::values::core_values::closure::{BuiltinId, Closure};
use identical_core::values::core_values::environment::Environment;
use identical_core::values::value::Value;
use identical_core::{IdenticalPolicy, assert_identical, assert_not_identical};

use super::init;

/// `function(x, y = 1) if (x) 42 else y`
fn body() -> Syntax {
    Syntax::call(
        "if",
        vec![Syntax::lookup("x"), Syntax::constant(42.0), Syntax::lookup("y")],
    )
}

fn formals() -> Vec<Formal> {
    vec![Formal::new("x"), Formal::with_default("y", Syntax::constant(1.0))]
}

fn function(environment: &Environment) -> Value {
    Value::from(Closure::user(formals(), body(), environment.clone()))
}

#[test]
fn builtins_compare_by_id() {
    init();
    assert_identical!(
        Value::from(Closure::builtin(BuiltinId("sum"))),
        Value::from(Closure::builtin(BuiltinId("sum")))
    );
    assert_not_identical!(
        Value::from(Closure::builtin(BuiltinId("sum"))),
        Value::from(Closure::builtin(BuiltinId("max")))
    );
}

#[test]
fn builtin_is_not_user_function() {
    init();
    let global = Environment::named("R_GlobalEnv");
    let sum = Value::from(Closure::builtin(BuiltinId("sum")));
    assert_not_identical!(sum, function(&global));
}

#[test]
fn same_body_same_environment() {
    init();
    let global = Environment::named("R_GlobalEnv");
    assert_identical!(function(&global), function(&global));
}

#[test]
fn environment_check() {
    init();
    let a = Environment::new();
    let b = Environment::new();
    assert_not_identical!(function(&a), function(&b));
    let ignoring = IdenticalPolicy::default().with_ignore_environment(true);
    assert_identical!(function(&a), function(&b), ignoring);
}

#[test]
fn body_differences() {
    init();
    let global = Environment::new();
    let other_literal = Value::from(Closure::user(
        formals(),
        Syntax::call(
            "if",
            vec![
                Syntax::lookup("x"),
                Syntax::constant(7.0),
                Syntax::lookup("y"),
            ],
        ),
        global.clone(),
    ));
    let other_default = Value::from(Closure::user(
        vec![
            Formal::new("x"),
            Formal::with_default("y", Syntax::constant(2.0)),
        ],
        body(),
        global.clone(),
    ));
    let ignoring = IdenticalPolicy::default().with_ignore_environment(true);
    assert_not_identical!(function(&global), other_literal, ignoring);
    assert_not_identical!(function(&global), other_default, ignoring);
}

#[test]
fn source_spans_are_ignored() {
    init();
    let global = Environment::new();
    let spanned = Value::from(Closure::user(
        formals(),
        body().with_span(10..40),
        global.clone(),
    ));
    assert_identical!(function(&global), spanned);
}

#[test]
fn closure_attributes() {
    init();
    let global = Environment::new();
    let tagged = |value: &str| match function(&global) {
        Value::Closure(closure) => {
            Value::from(closure.with_attribute("srcname", value))
        }
        _ => unreachable!(),
    };
    assert_identical!(tagged("f"), tagged("f"));
    assert_not_identical!(tagged("f"), tagged("g"));
    assert_not_identical!(tagged("f"), function(&global));
}

#[test]
fn closure_constants_are_compared_exactly() {
    init();
    let global = Environment::new();
    let returning = |value: Value| {
        Value::from(Closure::user(
            vec![],
            Syntax::constant(value),
            global.clone(),
        ))
    };
    assert_not_identical!(returning(1.into()), returning(1.0.into()));
    assert_identical!(returning(f64::NAN.into()), returning(f64::NAN.into()));
}

#[test]
fn closure_constants_follow_the_policy() {
    init();
    let global = Environment::new();
    let returning = |value: f64| {
        Value::from(Closure::user(
            vec![],
            Syntax::constant(value),
            global.clone(),
        ))
    };
    assert_identical!(returning(0.0), returning(-0.0));
    let bitwise = IdenticalPolicy::default().with_num_eq(false);
    assert_not_identical!(returning(0.0), returning(-0.0), bitwise);
}
