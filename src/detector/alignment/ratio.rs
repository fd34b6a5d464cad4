//! Run-length arithmetic shared by the row scanner and the cross-check

/// Light / dark / light run lengths seen along one scan line
pub type RunCounts = [usize; 3];

/// Whether the three runs are each within half a module of `module_size`.
///
/// Alignment patterns have one module per run, so every run is checked
/// independently against the same expected length.
pub fn is_valid_ratio(counts: &RunCounts, module_size: f32) -> bool {
    let max_variance = module_size / 2.0;
    counts
        .iter()
        .all(|&count| (module_size - count as f32).abs() < max_variance)
}

/// Sub-pixel centre of the middle run, given the index just past the last run
pub fn center_from_end(counts: &RunCounts, end: usize) -> f32 {
    end as f32 - counts[2] as f32 - counts[1] as f32 / 2.0
}

/// Sum of the three runs
pub fn total(counts: &RunCounts) -> usize {
    counts.iter().sum()
}
