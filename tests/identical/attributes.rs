use identical_core::attributes;
use identical_core::values::attributes::Attributes;
use identical_core::values::core_values::integer::NA_INTEGER;
use identical_core::values::core_values::vector::Vector;
use identical_core::values::value::Value;
use identical_core::{
    IdenticalPolicy, assert_identical, assert_not_identical, identical,
    list_value,
};

use super::{all_policies, init};

fn doubles_with(attributes: Attributes) -> Value {
    Value::Double(Vector::with_attributes(vec![1.0, 2.0], attributes))
}

#[test]
fn attribute_order_toggle() {
    init();
    let x = doubles_with(attributes! { "foo" => "foo", "bar" => "bar" });
    let y = doubles_with(attributes! { "bar" => "bar", "foo" => "foo" });
    assert_identical!(x, y);
    let ordered = IdenticalPolicy::default().with_attrib_as_set(false);
    assert_not_identical!(x, y, ordered);
}

#[test]
fn attributes_on_scalars() {
    init();
    let x = Value::from(42.0).with_attribute("foo", "foo");
    assert_identical!(x, Value::from(42.0).with_attribute("foo", "foo"));
    assert_not_identical!(x, Value::from(42.0));
    assert_not_identical!(Value::from(42.0), x);
    assert_not_identical!(x, Value::from(42.0).with_attribute("foo", "bar"));
    assert_not_identical!(x, Value::from(42.0).with_attribute("bar", "foo"));
}

#[test]
fn attribute_maps_are_idempotent() {
    init();
    let x = doubles_with(attributes! {
        "names" => Value::strings(vec![Some("a"), Some("b")]),
        "class" => "point",
        "meta" => list_value![f64::NAN, Value::Null, "x"],
    });
    for policy in all_policies() {
        assert_eq!(identical(&x, &x, &policy), Ok(true));
        assert_eq!(identical(&x, &x.clone(), &policy), Ok(true));
    }
}

#[test]
fn nested_attribute_values() {
    init();
    let inner = |n: i32| Value::from(1).with_attribute("n", n);
    let x = Value::from(1.0).with_attribute("inner", inner(1));
    assert_identical!(x, Value::from(1.0).with_attribute("inner", inner(1)));
    let other = Value::from(1.0).with_attribute("inner", inner(2));
    assert_not_identical!(x, other);
}

fn data_frame(row_names: Value) -> Value {
    let columns = list_value![
        Value::integers(vec![1, 2, 3]),
        Value::strings(vec![Some("a"), Some("b"), Some("c")]),
    ];
    columns
        .with_attribute("names", Value::strings(vec![Some("id"), Some("name")]))
        .with_attribute("class", "data.frame")
        .with_attribute("row.names", row_names)
}

#[test]
fn data_frame_row_names() {
    init();
    let compact = data_frame(Value::integers(vec![NA_INTEGER, -3]));
    let positive = data_frame(Value::integers(vec![NA_INTEGER, 3]));
    let explicit = data_frame(Value::integers(vec![1, 2, 3]));
    assert_identical!(compact, explicit);
    assert_identical!(explicit, compact);
    assert_identical!(compact, positive);
    assert_not_identical!(compact, data_frame(Value::integers(vec![1, 2, 4])));
    let shorter = data_frame(Value::integers(vec![NA_INTEGER, -2]));
    assert_not_identical!(compact, shorter);
    assert_not_identical!(
        compact,
        data_frame(Value::strings(vec![Some("1"), Some("2"), Some("3")]))
    );
}

#[test]
fn compact_encoding_only_applies_to_row_names() {
    init();
    let with_other =
        |other: Value| Value::from(1.0).with_attribute("other", other);
    let x = with_other(Value::integers(vec![NA_INTEGER, -2]));
    let y = with_other(Value::integers(vec![1, 2]));
    assert_not_identical!(x, y);
}
