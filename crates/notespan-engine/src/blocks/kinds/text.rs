//! The rich-text block driver.
//!
//! Payload shape: an ordered array of `{style, text}` objects: the
//! serialized run list. Operations delegate to the segment engine in
//! [`crate::text`] and return the full replacement run list.

use serde_json::Value;

use super::{HEADING, TEXT, heading::HeadingPayload};
use crate::blocks::block::Block;
use crate::blocks::driver::{BlockDriver, BlockError, OpParams, require_i64, require_str};
use crate::text::{self, Run};

pub struct TextDriver;

impl TextDriver {
    /// Decode a block's payload into a run list.
    ///
    /// Fails with [`BlockError::MalformedPayload`] naming the offending
    /// shape; a missing or non-array `data` is never silently treated as
    /// empty content.
    fn decode(block: &Block) -> Result<Vec<Run>, BlockError> {
        serde_json::from_value(block.data.clone()).map_err(|e| BlockError::MalformedPayload {
            kind: TEXT.to_string(),
            reason: e.to_string(),
        })
    }

    fn encode(runs: &[Run]) -> Value {
        serde_json::to_value(runs).expect("run list serializes to JSON")
    }
}

impl BlockDriver for TextDriver {
    fn apply_op(
        &self,
        block: &Block,
        op_name: &str,
        params: &OpParams,
    ) -> Result<Value, BlockError> {
        let runs = Self::decode(block)?;
        let updated = match op_name {
            "apply_style" => {
                let start = require_i64(params, op_name, "start")?;
                let end = require_i64(params, op_name, "end")?;
                let style = require_str(params, op_name, "style")?;
                text::apply_style(&runs, start, end, style)?
            }
            "insert_text" => {
                let pos = require_i64(params, op_name, "pos")?;
                let inserted = require_str(params, op_name, "text")?;
                text::insert_text(&runs, pos, inserted)
            }
            "delete_range" => {
                let start = require_i64(params, op_name, "start")?;
                let end = require_i64(params, op_name, "end")?;
                text::delete_range(&runs, start, end)
            }
            _ => {
                return Err(BlockError::OpNotSupported {
                    kind: TEXT.to_string(),
                    op: op_name.to_string(),
                });
            }
        };
        Ok(Self::encode(&updated))
    }

    fn get_as_first(&self, block: &Block) -> Result<String, BlockError> {
        let runs = Self::decode(block)?;
        Ok(text::plain_text(&runs))
    }

    fn change_type(&self, block: &Block, new_kind: &str) -> Result<Value, BlockError> {
        match new_kind {
            TEXT => Ok(block.data.clone()),
            HEADING => {
                let runs = Self::decode(block)?;
                let payload = HeadingPayload {
                    level: 1,
                    text: text::plain_text(&runs),
                };
                Ok(serde_json::to_value(payload).expect("heading payload serializes to JSON"))
            }
            _ => Err(BlockError::ConversionNotSupported {
                from: TEXT.to_string(),
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

    fn text_block(runs: &[Run]) -> Block {
        Block::new_text(Uuid::new_v4(), runs)
    }

    fn params(value: Value) -> OpParams {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn apply_style_op_returns_new_payload() {
        let block = text_block(&[Run::new("default", "hello world")]);
        let payload = TextDriver
            .apply_op(
                &block,
                "apply_style",
                &params(json!({"start": 6, "end": 11, "style": "bold"})),
            )
            .unwrap();
        assert_eq!(
            payload,
            json!([
                {"style": "default", "text": "hello "},
                {"style": "bold", "text": "world"},
            ])
        );
        // The stored block is untouched; the caller persists the new payload
        assert_eq!(block.data[0]["text"], "hello world");
    }

    #[test]
    fn insert_and_delete_ops() {
        let block = text_block(&[Run::new("default", "hello")]);
        let inserted = TextDriver
            .apply_op(
                &block,
                "insert_text",
                &params(json!({"pos": 5, "text": " world"})),
            )
            .unwrap();
        assert_eq!(inserted, json!([{"style": "default", "text": "hello world"}]));

        let deleted = TextDriver
            .apply_op(&block, "delete_range", &params(json!({"start": 0, "end": 4})))
            .unwrap();
        assert_eq!(deleted, json!([{"style": "default", "text": "o"}]));
    }

    #[test]
    fn unknown_op_is_rejected() {
        let block = text_block(&[]);
        let err = TextDriver
            .apply_op(&block, "rotate", &OpParams::new())
            .unwrap_err();
        assert!(matches!(err, BlockError::OpNotSupported { .. }));
        assert_eq!(
            err.to_string(),
            "operation `rotate` not supported by `text` blocks"
        );
    }

    #[test]
    fn invalid_range_propagates_from_engine() {
        let block = text_block(&[Run::new("default", "abc")]);
        let err = TextDriver
            .apply_op(
                &block,
                "apply_style",
                &params(json!({"start": 3, "end": 3, "style": "bold"})),
            )
            .unwrap_err();
        assert!(matches!(err, BlockError::Text(_)));
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let mut block = text_block(&[]);
        block.data = json!({"not": "a run list"});
        let err = TextDriver.get_as_first(&block).unwrap_err();
        assert!(matches!(err, BlockError::MalformedPayload { .. }));

        block.data = json!([{"style": "default"}]); // text field absent
        let err = TextDriver.get_as_first(&block).unwrap_err();
        assert!(matches!(err, BlockError::MalformedPayload { .. }));
    }

    #[test]
    fn preview_is_concatenated_plain_text() {
        let block = text_block(&[Run::new("bold", "Hello"), Run::new("default", " world")]);
        assert_eq!(TextDriver.get_as_first(&block).unwrap(), "Hello world");
    }

    #[test]
    fn converts_to_heading() {
        let block = text_block(&[Run::new("bold", "Chapter"), Run::new("default", " one")]);
        let payload = TextDriver.change_type(&block, HEADING).unwrap();
        assert_eq!(payload, json!({"level": 1, "text": "Chapter one"}));
    }

    #[test]
    fn conversion_to_unknown_kind_fails() {
        let block = text_block(&[]);
        let err = TextDriver.change_type(&block, "kanban").unwrap_err();
        assert!(matches!(err, BlockError::ConversionNotSupported { .. }));
    }

    #[test]
    fn missing_param_names_the_field() {
        let block = text_block(&[Run::new("default", "x")]);
        let err = TextDriver
            .apply_op(&block, "apply_style", &params(json!({"start": 0, "end": 1})))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "operation `apply_style` missing parameter `style`"
        );
    }
}
