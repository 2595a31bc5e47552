use thiserror::Error;

use crate::values::value::ValueKind;

/// Value configurations the comparison deliberately refuses to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnimplementedFeature {
    #[error("attributes of internal pairlists are not currently supported")]
    InteriorPairListAttributes,
    #[error("pairlist tags of kind '{0}' are not currently supported")]
    UnsupportedPairListTag(ValueKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdenticalError {
    #[error("unimplemented: {0}")]
    Unimplemented(#[from] UnimplementedFeature),
    #[error("invalid '{name}' value")]
    InvalidArgument { name: &'static str },
    #[error("{0} arguments passed to 'identical' which requires at least 2")]
    ArgumentCount(usize),
}
