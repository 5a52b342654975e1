// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
use notespan_engine::text::Run;

#[allow(dead_code)]
pub fn generate_runs(count: usize) -> Vec<Run> {
    let styles = ["default", "default", "bold", "italic", "link"];
    (0..count)
        .map(|i| Run::new(styles[i % styles.len()], format!("word{i} ")))
        .collect()
}

#[allow(dead_code)]
pub fn generate_normalized_runs(count: usize) -> Vec<Run> {
    let styles = ["default", "bold", "italic"];
    (0..count)
        .map(|i| Run::new(styles[i % styles.len()], format!("word{i} ")))
        .collect()
}
