pub mod blocks;
pub mod text;

// Re-export key types for easier usage
pub use blocks::{Block, BlockDriver, BlockError, DriverRegistry};
pub use text::{Run, TextError};
