//! The heading block driver.
//!
//! Headings carry a level and unstyled text. The kind exists in the engine
//! both as a real block type and as proof that the driver contract is open:
//! nothing in the registry or the orchestration path is text-specific.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{HEADING, TEXT};
use crate::blocks::block::Block;
use crate::blocks::driver::{BlockDriver, BlockError, OpParams, require_i64};
use crate::text::{DEFAULT_STYLE, Run};

/// Heading levels run 1 (largest) through 6, matching markdown.
pub const MAX_LEVEL: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingPayload {
    pub level: u8,
    pub text: String,
}

pub struct HeadingDriver;

impl HeadingDriver {
    fn decode(block: &Block) -> Result<HeadingPayload, BlockError> {
        let payload: HeadingPayload =
            serde_json::from_value(block.data.clone()).map_err(|e| {
                BlockError::MalformedPayload {
                    kind: HEADING.to_string(),
                    reason: e.to_string(),
                }
            })?;
        if payload.level == 0 || payload.level > MAX_LEVEL {
            return Err(BlockError::MalformedPayload {
                kind: HEADING.to_string(),
                reason: format!("level {} out of range 1..={MAX_LEVEL}", payload.level),
            });
        }
        Ok(payload)
    }
}

impl BlockDriver for HeadingDriver {
    fn apply_op(
        &self,
        block: &Block,
        op_name: &str,
        params: &OpParams,
    ) -> Result<Value, BlockError> {
        let mut payload = Self::decode(block)?;
        match op_name {
            "set_level" => {
                let level = require_i64(params, op_name, "level")?;
                if !(1..=i64::from(MAX_LEVEL)).contains(&level) {
                    return Err(BlockError::MalformedPayload {
                        kind: HEADING.to_string(),
                        reason: format!("level {level} out of range 1..={MAX_LEVEL}"),
                    });
                }
                payload.level = level as u8;
            }
            _ => {
                return Err(BlockError::OpNotSupported {
                    kind: HEADING.to_string(),
                    op: op_name.to_string(),
                });
            }
        }
        Ok(serde_json::to_value(payload).expect("heading payload serializes to JSON"))
    }

    fn get_as_first(&self, block: &Block) -> Result<String, BlockError> {
        Ok(Self::decode(block)?.text)
    }

    fn change_type(&self, block: &Block, new_kind: &str) -> Result<Value, BlockError> {
        match new_kind {
            HEADING => Ok(block.data.clone()),
            TEXT => {
                let payload = Self::decode(block)?;
                let runs = if payload.text.is_empty() {
                    Vec::new()
                } else {
                    vec![Run::new(DEFAULT_STYLE, payload.text)]
                };
                Ok(serde_json::to_value(runs).expect("run list serializes to JSON"))
            }
            _ => Err(BlockError::ConversionNotSupported {
                from: HEADING.to_string(),
                to: new_kind.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn set_level_replaces_payload() {
        let block = Block::new_heading(Uuid::new_v4(), 1, "Title");
        let mut params = OpParams::new();
        params.insert("level".to_string(), Value::from(3));
        let payload = HeadingDriver.apply_op(&block, "set_level", &params).unwrap();
        assert_eq!(payload, json!({"level": 3, "text": "Title"}));
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let block = Block::new_heading(Uuid::new_v4(), 1, "Title");
        let mut params = OpParams::new();
        params.insert("level".to_string(), Value::from(9));
        assert!(HeadingDriver.apply_op(&block, "set_level", &params).is_err());
    }

    #[test]
    fn preview_is_heading_text() {
        let block = Block::new_heading(Uuid::new_v4(), 2, "Quarterly notes");
        assert_eq!(
            HeadingDriver.get_as_first(&block).unwrap(),
            "Quarterly notes"
        );
    }

    #[test]
    fn converts_to_text_runs() {
        let block = Block::new_heading(Uuid::new_v4(), 2, "Title");
        let payload = HeadingDriver.change_type(&block, TEXT).unwrap();
        assert_eq!(payload, json!([{"style": "default", "text": "Title"}]));
    }

    #[test]
    fn empty_heading_converts_to_empty_run_list() {
        let block = Block::new_heading(Uuid::new_v4(), 1, "");
        let payload = HeadingDriver.change_type(&block, TEXT).unwrap();
        assert_eq!(payload, json!([]));
    }

    #[test]
    fn malformed_level_is_a_decode_error() {
        let mut block = Block::new_heading(Uuid::new_v4(), 1, "x");
        block.data = json!({"level": 0, "text": "x"});
        let err = HeadingDriver.get_as_first(&block).unwrap_err();
        assert!(matches!(err, BlockError::MalformedPayload { .. }));
    }
}
