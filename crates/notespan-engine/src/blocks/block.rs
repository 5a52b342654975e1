use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::kinds;
use crate::text::Run;

/// A stored block: one typed unit of note content.
///
/// `data` is an opaque structured payload whose shape is owned by the driver
/// for `kind`: for text blocks, the serialized run list. The block record
/// itself is storage-facing; the engine only ever reads it and returns
/// replacement payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: Uuid,
    /// Block type identifier, `"type"` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub note_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_used: bool,
    pub data: Value,
}

impl Block {
    pub fn new(kind: impl Into<String>, note_id: Uuid, data: Value) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            note_id,
            created_at: now,
            updated_at: now,
            is_used: true,
            data,
        }
    }

    /// A text block over the given runs.
    pub fn new_text(note_id: Uuid, runs: &[Run]) -> Self {
        let data = serde_json::to_value(runs).expect("run list serializes to JSON");
        Self::new(kinds::TEXT, note_id, data)
    }

    /// A heading block at the given level.
    pub fn new_heading(note_id: Uuid, level: u8, text: impl Into<String>) -> Self {
        let payload = kinds::heading::HeadingPayload {
            level,
            text: text.into(),
        };
        let data = serde_json::to_value(payload).expect("heading payload serializes to JSON");
        Self::new(kinds::HEADING, note_id, data)
    }

    /// Install a replacement payload returned by a driver, stamping
    /// `updated_at`. This is the only mutation the orchestration layer
    /// performs on a block between load and store.
    pub fn replace_data(&mut self, data: Value) {
        self.data = data;
        self.updated_at = Utc::now();
    }
}
