//! Run-list normalization.
//!
//! The transforms are allowed to emit sloppy intermediates (empty pieces,
//! equal-style neighbours); normalization restores the run-list invariants:
//! no empty runs, no two adjacent runs with the same style.

use super::run::Run;

/// Run count below which [`merge_adjacent_parallel`] degrades to the
/// sequential pass. A tuning constant, not a correctness boundary.
pub const PARALLEL_MERGE_THRESHOLD: usize = 1000;

/// Merge adjacent equal-style runs and drop empty runs.
///
/// Single left-to-right pass: an accumulator run grows by concatenation while
/// the next run shares its style, and is emitted when the style changes.
pub fn merge_adjacent(runs: Vec<Run>) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());
    let mut acc: Option<Run> = None;

    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        match &mut acc {
            Some(current) if current.style == run.style => current.text.push_str(&run.text),
            _ => {
                if let Some(done) = acc.take() {
                    out.push(done);
                }
                acc = Some(run);
            }
        }
    }
    if let Some(done) = acc {
        out.push(done);
    }
    out
}

/// Work-partitioned [`merge_adjacent`] for large run counts.
///
/// Splits the input into `workers` contiguous batches, merges each on its own
/// scoped thread, then runs one more sequential pass over the concatenated
/// batch outputs to collapse equal styles across batch boundaries. The output
/// is identical to the sequential merge for every input; only the latency
/// profile differs.
pub fn merge_adjacent_parallel(runs: Vec<Run>, workers: usize) -> Vec<Run> {
    if runs.len() < PARALLEL_MERGE_THRESHOLD || workers <= 1 {
        return merge_adjacent(runs);
    }

    let batch_size = runs.len().div_ceil(workers);
    let merged: Vec<Run> = std::thread::scope(|scope| {
        let handles: Vec<_> = runs
            .chunks(batch_size)
            .map(|batch| scope.spawn(move || merge_adjacent(batch.to_vec())))
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("merge worker panicked"))
            .collect()
    });

    // Batch boundaries can leave equal-style neighbours; one final pass
    // restores the invariants.
    merge_adjacent(merged)
}
