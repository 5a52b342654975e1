//! Position lookup over a run list.
//!
//! Every range operation starts the same way: translate a global code-point
//! position into "which run, how far in". The prefix-length table is derived
//! per call and discarded; it is never part of the persisted model.

use super::run::Run;

/// Cumulative code-point lengths: entry `i` is the total length of runs
/// `[0..=i]`, so the last entry is the block's total length.
pub(crate) fn prefix_lengths(runs: &[Run]) -> Vec<usize> {
    let mut total = 0;
    runs.iter()
        .map(|r| {
            total += r.len();
            total
        })
        .collect()
}

/// Map a global position to `(run_index, offset_within_run)`.
///
/// Positions at or below zero land at `(0, 0)`; positions at or beyond the
/// total length land at `(runs.len(), 0)`, i.e. "after the last run".
/// Otherwise the first run whose cumulative end exceeds `pos` contains it.
pub(crate) fn locate(prefix: &[usize], pos: usize) -> (usize, usize) {
    let total = prefix.last().copied().unwrap_or(0);
    if pos == 0 {
        return (0, 0);
    }
    if pos >= total {
        return (prefix.len(), 0);
    }
    let idx = prefix.partition_point(|&end| end <= pos);
    let run_start = if idx == 0 { 0 } else { prefix[idx - 1] };
    (idx, pos - run_start)
}
