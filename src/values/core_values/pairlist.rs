use alloc::rc::Rc;

use crate::traits::identity::Identity;
use crate::values::attributes::Attributes;
use crate::values::core_values::symbol::Symbol;
use crate::values::value::Value;

/// Whether a pairlist is a plain argument list or an unevaluated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PairListKind {
    List,
    Language,
}

/// A cons cell. `tail` is `None` at the terminator.
#[derive(Debug, Clone)]
pub struct PairListNode {
    pub head: Value,
    pub tag: Option<Value>,
    pub tail: Option<Rc<PairListNode>>,
    pub attributes: Attributes,
}

impl PairListNode {
    pub fn new<V: Into<Value>>(head: V) -> Self {
        PairListNode {
            head: head.into(),
            tag: None,
            tail: None,
            attributes: Attributes::default(),
        }
    }

    /// Tags the node with a symbol of the given name.
    pub fn tagged<V: Into<Value>>(name: &str, head: V) -> Self {
        PairListNode::new(head).with_tag(Value::Symbol(Symbol::new(name)))
    }

    pub fn with_tag(mut self, tag: Value) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Unlinks the tail iteratively so long lists do not recurse once per node.
/// The walk stops at the first node that is still shared.
impl Drop for PairListNode {
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(node) = next.take() {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.tail.take(),
                Err(_) => break,
            }
        }
    }
}

/// A non-empty cons list. The empty pairlist is `Value::Null`.
///
/// Nodes are immutable and shared through `Rc`, so a list can never be
/// linked back into itself.
#[derive(Debug, Clone)]
pub struct PairList {
    kind: PairListKind,
    first: Rc<PairListNode>,
}

impl PairList {
    /// Links `nodes` in order. Any `tail` already set on the nodes is replaced.
    pub fn from_nodes(
        kind: PairListKind,
        nodes: Vec<PairListNode>,
    ) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        Some(PairList {
            kind,
            first: Self::link(nodes),
        })
    }

    /// Builds a call `function(arguments...)`; argument names become tags.
    pub fn call(
        function: Value,
        arguments: Vec<(Option<&str>, Value)>,
    ) -> Self {
        let mut nodes = vec![PairListNode::new(function)];
        nodes.extend(arguments.into_iter().map(|(name, value)| match name {
            Some(name) => PairListNode::tagged(name, value),
            None => PairListNode::new(value),
        }));
        PairList {
            kind: PairListKind::Language,
            first: Self::link(nodes),
        }
    }

    fn link(nodes: Vec<PairListNode>) -> Rc<PairListNode> {
        let mut iter = nodes.into_iter().rev();
        // callers always pass at least one node
        let mut last =
            iter.next().unwrap_or_else(|| PairListNode::new(Value::Null));
        last.tail = None;
        let mut tail = Rc::new(last);
        for mut node in iter {
            node.tail = Some(tail);
            tail = Rc::new(node);
        }
        tail
    }

    pub fn kind(&self) -> PairListKind {
        self.kind
    }

    pub fn first(&self) -> &PairListNode {
        &self.first
    }

    pub fn attributes(&self) -> &Attributes {
        &self.first.attributes
    }

    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            next: Some(&self.first),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns a copy whose outermost node carries `name`. Interior nodes
    /// stay shared.
    pub fn with_attribute<V: Into<Value>>(&self, name: &str, value: V) -> Self {
        let mut first = (*self.first).clone();
        first.attributes.set(name, value);
        PairList {
            kind: self.kind,
            first: Rc::new(first),
        }
    }
}

impl Identity for PairList {
    fn same_ref(&self, other: &Self) -> bool {
        self.kind == other.kind && Rc::ptr_eq(&self.first, &other.first)
    }
}

pub struct Nodes<'a> {
    next: Option<&'a PairListNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a PairListNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.tail.as_deref();
        Some(node)
    }
}
