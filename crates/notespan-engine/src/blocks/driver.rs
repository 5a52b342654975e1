use serde_json::{Map, Value};

use super::block::Block;
use crate::text::TextError;

/// Named parameters for a generic block operation, as decoded from a
/// request: a JSON object keyed by parameter name.
pub type OpParams = Map<String, Value>;

/// Errors from the driver layer.
///
/// Every failure names enough context (which kind, which operation, which
/// field) for the caller to log meaningfully; nothing here is retried or
/// swallowed internally.
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    #[error("block type not registered: {0}")]
    TypeNotRegistered(String),
    #[error("operation `{op}` not supported by `{kind}` blocks")]
    OpNotSupported { kind: String, op: String },
    #[error("cannot convert `{from}` block to `{to}`")]
    ConversionNotSupported { from: String, to: String },
    #[error("malformed `{kind}` payload: {reason}")]
    MalformedPayload { kind: String, reason: String },
    #[error("operation `{op}` missing parameter `{param}`")]
    MissingParam { op: String, param: String },
    #[error(transparent)]
    Text(#[from] TextError),
}

/// The capability set every block kind implements.
///
/// Drivers are stateless: each method reads the block's current payload and
/// returns a complete replacement (or a preview string). The orchestration
/// layer persists returned payloads wholesale, so a driver must never rely
/// on partial in-place mutation being visible anywhere.
pub trait BlockDriver: Send + Sync {
    /// Apply the named, type-specific mutation and return the new payload.
    ///
    /// Unrecognized `op_name`s fail with [`BlockError::OpNotSupported`].
    fn apply_op(
        &self,
        block: &Block,
        op_name: &str,
        params: &OpParams,
    ) -> Result<Value, BlockError>;

    /// A plain-text preview of the block, used when it renders as the first
    /// block of a note (list views, search results).
    fn get_as_first(&self, block: &Block) -> Result<String, BlockError>;

    /// Convert the block's payload into the representation `new_kind`
    /// expects, or fail with [`BlockError::ConversionNotSupported`].
    fn change_type(&self, block: &Block, new_kind: &str) -> Result<Value, BlockError>;
}

/// Fetch a required i64 parameter.
pub(crate) fn require_i64(params: &OpParams, op: &str, name: &str) -> Result<i64, BlockError> {
    params
        .get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| BlockError::MissingParam {
            op: op.to_string(),
            param: name.to_string(),
        })
}

/// Fetch a required string parameter.
pub(crate) fn require_str<'p>(
    params: &'p OpParams,
    op: &str,
    name: &str,
) -> Result<&'p str, BlockError> {
    params
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| BlockError::MissingParam {
            op: op.to_string(),
            param: name.to_string(),
        })
}
