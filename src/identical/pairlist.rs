use log::debug;

use crate::error::{IdenticalError, UnimplementedFeature};
use crate::identical::engine::IdenticalEngine;
use crate::traits::identity::Identity;
use crate::values::core_values::pairlist::{PairList, PairListNode};
use crate::values::value::Value;

impl IdenticalEngine<'_> {
    /// Walks both cons lists in lock-step, comparing tags and heads node by
    /// node. Only the outermost node may carry attributes.
    pub(crate) fn compare_pairlists(
        &self,
        x: &PairList,
        y: &PairList,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        if x.same_ref(y) {
            return Ok(true);
        }
        if x.kind() != y.kind() {
            return Ok(false);
        }
        if !self.compare_nodes(x.first(), y.first(), depth)? {
            return Ok(false);
        }

        let mut x_tail = x.first().tail.as_deref();
        let mut y_tail = y.first().tail.as_deref();
        loop {
            match (x_tail, y_tail) {
                (None, None) => break,
                (Some(x_node), Some(y_node)) => {
                    if !x_node.attributes.is_empty()
                        || !y_node.attributes.is_empty()
                    {
                        let feature =
                            UnimplementedFeature::InteriorPairListAttributes;
                        debug!("identical: {feature}");
                        return Err(feature.into());
                    }
                    if !self.compare_nodes(x_node, y_node, depth)? {
                        return Ok(false);
                    }
                    x_tail = x_node.tail.as_deref();
                    y_tail = y_node.tail.as_deref();
                }
                _ => return Ok(false),
            }
        }

        self.compare_attributes(x.attributes(), y.attributes(), depth)
    }

    fn compare_nodes(
        &self,
        x: &PairListNode,
        y: &PairListNode,
        depth: u32,
    ) -> Result<bool, IdenticalError> {
        let x_tag = tag_name(x.tag.as_ref())?;
        let y_tag = tag_name(y.tag.as_ref())?;
        let tags_equal = match (x_tag, y_tag) {
            (None, None) => true,
            (Some(x_tag), Some(y_tag)) => x_tag == y_tag,
            _ => false,
        };
        Ok(tags_equal && self.compare(&x.head, &y.head, depth + 1)?)
    }
}

/// Normalizes a node tag to its text. Missing, `NULL`, empty and NA tags are
/// all absent.
fn tag_name(tag: Option<&Value>) -> Result<Option<&str>, IdenticalError> {
    match tag {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Symbol(symbol)) => {
            Ok(Some(symbol.name()).filter(|name| !name.is_empty()))
        }
        Some(Value::Character(text)) if text.len() == 1 => {
            Ok(text[0].as_deref().filter(|name| !name.is_empty()))
        }
        Some(other) => {
            let feature =
                UnimplementedFeature::UnsupportedPairListTag(other.kind());
            debug!("identical: {feature}");
            Err(feature.into())
        }
    }
}
