/*!
 * # Styled text segment engine
 *
 * A text block's content is an ordered list of [`Run`]s: contiguous spans of
 * text that share one style tag. This module owns that representation and the
 * three range operations over it:
 *
 * - [`apply_style`]: relabel a code-point range with a new style
 * - [`insert_text`]: splice new text in at a position
 * - [`delete_range`]: remove a code-point range
 *
 * Each operation is a pure function from the current run list (plus
 * parameters) to a new run list; nothing here holds state between calls, and
 * concurrent calls on different blocks never interact.
 *
 * ## Invariants
 *
 * After every operation the returned list satisfies:
 *
 * 1. no run has empty text,
 * 2. no two adjacent runs share the same style,
 * 3. concatenating all run texts yields the block's full plain text.
 *
 * Operations are free to produce violating intermediates; [`merge_adjacent`]
 * (or its work-partitioned twin [`merge_adjacent_parallel`]) restores the
 * invariants as the final step of each transform.
 *
 * ## Positions are code points
 *
 * All positions and ranges count Unicode code points, never bytes, so
 * multi-byte scripts index the way an editor caret moves. Range parameters
 * are `i64` and are clamped into the content: a caller may say "style from 5
 * to the end" with an oversized `end` without knowing the text length.
 */

mod index;
mod normalize;
mod run;
mod transform;

pub use normalize::{PARALLEL_MERGE_THRESHOLD, merge_adjacent, merge_adjacent_parallel};
pub use run::{DEFAULT_STYLE, Run, plain_text, total_len};
pub use transform::{apply_style, delete_range, insert_text};

pub(crate) use index::{locate, prefix_lengths};

/// Errors from the range transforms.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    #[error("invalid range: start {start} must be less than end {end}")]
    InvalidRange { start: i64, end: i64 },
}
