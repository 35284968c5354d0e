use std::path::Path;

/// Default experiment name: the last component of the data directory.
pub fn experiment_name(data_dir: &Path) -> String {
    data_dir
        .file_name()
        .map(|n| n.to_string_lossy().trim().to_string())
        .unwrap_or_else(|| data_dir.to_string_lossy().trim().to_string())
}

/// Output file name as written by the original tool; existing consumers
/// match on it, so the format is frozen.
pub fn output_file_name(window_size: u32, overlap_windows: bool) -> String {
    format!(
        "code_author_inter-(window_size-{window_size})-{}.json",
        if overlap_windows { "overlap" } else { "no_overlap" }
    )
}
