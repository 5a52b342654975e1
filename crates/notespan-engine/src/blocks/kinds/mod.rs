//! Shipped block kinds.
//!
//! `text` is the rich-text kind backed by the run-list engine; `heading` is
//! a minimal second kind that keeps the registry honest about supporting
//! more than one driver. Adding a kind means implementing
//! [`BlockDriver`](super::BlockDriver) and registering it at startup.

pub mod heading;
pub mod text;

pub use heading::HeadingDriver;
pub use text::TextDriver;

/// Type identifier for rich-text blocks.
pub const TEXT: &str = "text";
/// Type identifier for heading blocks.
pub const HEADING: &str = "heading";
