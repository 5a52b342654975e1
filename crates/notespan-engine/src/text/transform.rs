//! The three range operations over a run list.
//!
//! Each transform translates its global positions through
//! [`locate`](super::locate), splits the affected runs at the range
//! boundaries, and normalizes the result. Inputs are never mutated; the
//! caller gets a fresh list satisfying the run-list invariants.
//!
//! Range parameters are `i64` on purpose: callers pass raw editor positions,
//! and clamping out-of-range values into the content is part of the contract
//! (`end = i64::MAX` means "to the end of the text").

use super::TextError;
use super::normalize::merge_adjacent;
use super::run::{DEFAULT_STYLE, Run, slice_chars, total_len};
use super::{locate, prefix_lengths};

/// Relabel the code-point range `[start, end)` with `style`.
///
/// Fails with [`TextError::InvalidRange`] only when the *raw* `start >= end`.
/// After clamping (`start` to `>= 0`, `end` to `<= total`), a range that has
/// collapsed to nothing: or any range over empty content: is a no-op.
///
/// Runs overlapping the range are split into up to three pieces: before the
/// overlap (original style), the overlap (restyled), after the overlap
/// (original style). Normalization then collapses newly-adjacent equal-style
/// pieces, which is what makes re-applying the same style idempotent.
pub fn apply_style(
    runs: &[Run],
    start: i64,
    end: i64,
    style: &str,
) -> Result<Vec<Run>, TextError> {
    if start >= end {
        return Err(TextError::InvalidRange { start, end });
    }

    let total = total_len(runs);
    if total == 0 {
        return Ok(runs.to_vec());
    }

    let start = start.max(0) as usize;
    let end = end.clamp(0, total as i64) as usize;
    if start >= end {
        // The clamp absorbed the whole range (start at or beyond the text)
        return Ok(runs.to_vec());
    }

    let prefix = prefix_lengths(runs);
    let (first, _) = locate(&prefix, start);

    let mut out: Vec<Run> = runs[..first].to_vec();
    for (i, run) in runs.iter().enumerate().skip(first) {
        let run_end = prefix[i];
        let run_start = run_end - run.len();
        if run_start >= end {
            // Coverage of the range is complete; the rest copies through
            out.extend_from_slice(&runs[i..]);
            break;
        }

        let lo = start.saturating_sub(run_start);
        let hi = (end - run_start).min(run.len());
        if lo > 0 {
            out.push(Run::new(&run.style, slice_chars(&run.text, 0, lo)));
        }
        out.push(Run::new(style, slice_chars(&run.text, lo, hi)));
        if hi < run.len() {
            out.push(Run::new(&run.style, slice_chars(&run.text, hi, run.len())));
        }
    }

    Ok(merge_adjacent(out))
}

/// Splice `text` in at code-point position `pos`, styled [`DEFAULT_STYLE`].
///
/// `pos` clamps into `[0, total]`; inserting into an empty list yields a
/// single default run; a mid-run position splits that run around the
/// insertion, omitting empty side pieces.
pub fn insert_text(runs: &[Run], pos: i64, text: &str) -> Vec<Run> {
    if text.is_empty() {
        return runs.to_vec();
    }

    let total = total_len(runs);
    let pos = pos.clamp(0, total as i64) as usize;

    if runs.is_empty() {
        return vec![Run::new(DEFAULT_STYLE, text)];
    }

    let prefix = prefix_lengths(runs);
    let (idx, offset) = locate(&prefix, pos);

    let mut out: Vec<Run> = Vec::with_capacity(runs.len() + 2);
    out.extend_from_slice(&runs[..idx]);
    if idx == runs.len() {
        // Exactly at the end of the run list
        out.push(Run::new(DEFAULT_STYLE, text));
    } else {
        let run = &runs[idx];
        let left = slice_chars(&run.text, 0, offset);
        let right = slice_chars(&run.text, offset, run.len());
        if !left.is_empty() {
            out.push(Run::new(&run.style, left));
        }
        out.push(Run::new(DEFAULT_STYLE, text));
        if !right.is_empty() {
            out.push(Run::new(&run.style, right));
        }
        out.extend_from_slice(&runs[idx + 1..]);
    }

    merge_adjacent(out)
}

/// Remove the code-point range `[start, end)`.
///
/// An empty or inverted range, or empty content, is a no-op (not an error -
/// deletion of nothing is a valid outcome, unlike styling nothing). Keeps the
/// pre-piece of the start run and the post-piece of the end run; everything
/// between is dropped. Normalization reconnects pieces left style-adjacent by
/// the removal.
pub fn delete_range(runs: &[Run], start: i64, end: i64) -> Vec<Run> {
    let total = total_len(runs);
    if start >= end || total == 0 {
        return runs.to_vec();
    }

    let start = start.max(0) as usize;
    let end = end.clamp(0, total as i64) as usize;
    if start >= end {
        return runs.to_vec();
    }

    let prefix = prefix_lengths(runs);
    let (start_idx, start_off) = locate(&prefix, start);
    let (end_idx, end_off) = locate(&prefix, end);

    let mut out: Vec<Run> = runs[..start_idx].to_vec();
    if start_off > 0 {
        let run = &runs[start_idx];
        out.push(Run::new(&run.style, slice_chars(&run.text, 0, start_off)));
    }
    if end_idx < runs.len() {
        let run = &runs[end_idx];
        let kept = slice_chars(&run.text, end_off, run.len());
        if !kept.is_empty() {
            out.push(Run::new(&run.style, kept));
        }
        out.extend_from_slice(&runs[end_idx + 1..]);
    }

    merge_adjacent(out)
}
