use identical_core::attributes;
use identical_core::error::{IdenticalError, UnimplementedFeature};
use identical_core::values::core_values::pairlist::{
    PairList, PairListKind, PairListNode,
};
use identical_core::values::value::{Value, ValueKind};
use identical_core::{
    IdenticalPolicy, assert_identical, assert_not_identical, identical,
};

use ntest_timeout::timeout;

use super::init;

fn pairlist(nodes: Vec<PairListNode>) -> Value {
    Value::pairlist(PairListKind::List, nodes)
}

fn tagged(tags: &[Option<&str>]) -> Value {
    pairlist(
        tags.iter()
            .enumerate()
            .map(|(i, tag)| match tag {
                Some(name) => PairListNode::tagged(name, i as i32),
                None => PairListNode::new(i as i32),
            })
            .collect(),
    )
}

#[test]
fn tag_symmetry() {
    init();
    let tags = [Some("a"), None, Some("c")];
    assert_identical!(tagged(&tags), tagged(&tags));
    for position in 0..tags.len() {
        let mut renamed = tags;
        renamed[position] = Some("z");
        assert_not_identical!(tagged(&tags), tagged(&renamed));

        let mut toggled = tags;
        toggled[position] = match tags[position] {
            Some(_) => None,
            None => Some("b"),
        };
        assert_not_identical!(tagged(&tags), tagged(&toggled));
        assert_not_identical!(tagged(&toggled), tagged(&tags));
    }
}

#[test]
fn heads_are_compared_recursively() {
    init();
    let x = pairlist(vec![
        PairListNode::new(Value::doubles(vec![1.0, f64::NAN])),
        PairListNode::tagged("b", pairlist(vec![PairListNode::new("inner")])),
    ]);
    let y = pairlist(vec![
        PairListNode::new(Value::doubles(vec![1.0, f64::NAN])),
        PairListNode::tagged("b", pairlist(vec![PairListNode::new("inner")])),
    ]);
    let z = pairlist(vec![
        PairListNode::new(Value::doubles(vec![1.0, f64::NAN])),
        PairListNode::tagged("b", pairlist(vec![PairListNode::new("other")])),
    ]);
    assert_identical!(x, y);
    assert_not_identical!(x, z);
}

#[test]
fn length_mismatch() {
    init();
    assert_not_identical!(tagged(&[None, None]), tagged(&[None, None, None]));
    assert_not_identical!(tagged(&[None, None, None]), tagged(&[None, None]));
}

#[test]
fn language_objects() {
    init();
    let call = |argument: f64| {
        Value::from(PairList::call(
            Value::symbol("f"),
            vec![
                (None, Value::from(argument)),
                (Some("na.rm"), Value::from(true)),
            ],
        ))
    };
    assert_eq!(call(1.0).kind(), ValueKind::Language);
    assert_identical!(call(1.0), call(1.0));
    assert_not_identical!(call(1.0), call(2.0));

    let as_list = pairlist(vec![
        PairListNode::new(Value::symbol("f")),
        PairListNode::new(1.0),
        PairListNode::tagged("na.rm", true),
    ]);
    assert_not_identical!(call(1.0), as_list);
}

#[test]
fn outer_attributes() {
    init();
    let x = tagged(&[Some("a")]).with_attribute("foo", "foo");
    assert_identical!(x, tagged(&[Some("a")]).with_attribute("foo", "foo"));
    assert_not_identical!(x, tagged(&[Some("a")]));
    assert_not_identical!(x, tagged(&[Some("a")]).with_attribute("foo", "bar"));
}

#[test]
fn empty_pairlist_is_null() {
    init();
    assert_identical!(pairlist(vec![]), Value::Null);
}

#[test]
fn interior_attributes_are_reported() {
    init();
    let x = pairlist(vec![
        PairListNode::new(1),
        PairListNode::new(2).with_attributes(attributes! { "foo" => 1 }),
    ]);
    let y = tagged(&[None, None]);
    assert_eq!(
        identical(&x, &y, &IdenticalPolicy::default()),
        Err(IdenticalError::Unimplemented(
            UnimplementedFeature::InteriorPairListAttributes
        ))
    );
}

#[test]
fn unsupported_tags_are_reported() {
    init();
    let x = pairlist(vec![PairListNode::new(1).with_tag(Value::from(1))]);
    let y = pairlist(vec![PairListNode::new(1)]);
    assert_eq!(
        identical(&x, &y, &IdenticalPolicy::default()),
        Err(IdenticalError::Unimplemented(
            UnimplementedFeature::UnsupportedPairListTag(ValueKind::Integer)
        ))
    );
}

#[test]
fn errors_surface_through_lists() {
    init();
    let bad = || pairlist(vec![PairListNode::new(1).with_tag(Value::from(1))]);
    let x = Value::list(vec![bad()]);
    let y = Value::list(vec![bad()]);
    assert!(identical(&x, &y, &IdenticalPolicy::default()).is_err());
}

fn long_pairlist(len: i32) -> Value {
    pairlist((0..len).map(PairListNode::new).collect())
}

#[test]
#[timeout(20000)]
fn long_pairlists_compare_and_drop() {
    init();
    let x = long_pairlist(200_000);
    let y = long_pairlist(200_000);
    assert_eq!(identical(&x, &y, &IdenticalPolicy::default()), Ok(true));
    assert_not_identical!(x, long_pairlist(199_999));
    drop(x);
    drop(y);
}
