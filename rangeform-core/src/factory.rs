//! Parameter factory: builds the right parameter kind for a node.

use crate::error::ParameterError;
use crate::node::{ParameterNode, KIND_FLOAT};
use crate::parameter::{FloatParameter, Parameter};

/// How numeric attributes are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed numbers read as `0.0`; ranges are not checked.
    #[default]
    Lenient,
    /// Malformed numbers and degenerate ranges are errors.
    Strict,
}

/// Build a parameter from a node according to its `kind`.
pub fn build_parameter(
    node: &ParameterNode,
    mode: ParseMode,
) -> Result<Box<dyn Parameter>, ParameterError> {
    match node.kind.as_str() {
        KIND_FLOAT => {
            let parameter = match mode {
                ParseMode::Lenient => FloatParameter::from_node(node),
                ParseMode::Strict => FloatParameter::try_from_node(node)?,
            };
            Ok(Box::new(parameter))
        }
        other => Err(ParameterError::UnknownKind {
            kind: other.to_string(),
        }),
    }
}
