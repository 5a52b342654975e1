use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::block::Block;
use super::driver::{BlockDriver, BlockError, OpParams};
use super::kinds::{self, HeadingDriver, TextDriver};

/// Runtime mapping from block-type identifier to its driver.
///
/// Populated by explicit [`register`](Self::register) calls before any block
/// operation runs, and treated as read-only for the rest of the process
/// lifetime: concurrent lookups across in-flight operations need no
/// locking. Construct one per test when isolation matters; the registry is
/// an injected dependency, never a hidden global.
#[derive(Default)]
pub struct DriverRegistry {
    drivers: HashMap<String, Arc<dyn BlockDriver>>,
}

impl DriverRegistry {
    /// An empty registry. Callers wire up drivers themselves.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the shipped drivers (`text`, `heading`) installed.
    pub fn with_builtin_drivers() -> Self {
        let mut registry = Self::new();
        registry.register(kinds::TEXT, Arc::new(TextDriver));
        registry.register(kinds::HEADING, Arc::new(HeadingDriver));
        registry
    }

    /// Bind `kind` to `driver`. Last write wins; re-registering an existing
    /// kind is logged as a warning since an unintentional overwrite is a
    /// configuration error, not a supported feature.
    pub fn register(&mut self, kind: impl Into<String>, driver: Arc<dyn BlockDriver>) {
        let kind = kind.into();
        if self.drivers.insert(kind.clone(), driver).is_some() {
            warn!(kind = %kind, "block driver re-registered, previous binding replaced");
        }
    }

    /// Resolve the driver for a type identifier.
    pub fn driver(&self, kind: &str) -> Result<&Arc<dyn BlockDriver>, BlockError> {
        self.drivers
            .get(kind)
            .ok_or_else(|| BlockError::TypeNotRegistered(kind.to_string()))
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.drivers.contains_key(kind)
    }

    // The generic orchestration path: resolve by the block's own type, then
    // dispatch. Callers never see driver-specific code.

    pub fn apply_op(
        &self,
        block: &Block,
        op_name: &str,
        params: &OpParams,
    ) -> Result<Value, BlockError> {
        debug!(kind = %block.kind, op = op_name, block_id = %block.id, "dispatching block op");
        self.driver(&block.kind)?.apply_op(block, op_name, params)
    }

    pub fn get_as_first(&self, block: &Block) -> Result<String, BlockError> {
        self.driver(&block.kind)?.get_as_first(block)
    }

    pub fn change_type(&self, block: &Block, new_kind: &str) -> Result<Value, BlockError> {
        debug!(kind = %block.kind, new_kind, block_id = %block.id, "dispatching type change");
        // Conversion targets must be serveable by this registry too
        if !self.is_registered(new_kind) {
            return Err(BlockError::TypeNotRegistered(new_kind.to_string()));
        }
        self.driver(&block.kind)?.change_type(block, new_kind)
    }
}
