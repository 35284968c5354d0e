use crate::cli::CommonArgs;
use crate::error::Result;
use crate::graph::build_interaction_graph;
use crate::input;
use crate::model::{Author, GraphRecord, RawCommit};
use crate::util::{experiment_name, output_file_name};
use crate::window::{self, WindowConfig};
use anyhow::Context;
use indicatif::ProgressBar;
use std::fs;
use std::path::PathBuf;

pub fn exec(common: CommonArgs, save: PathBuf, name: Option<String>) -> anyhow::Result<()> {
    let data = input::read_data(&common.data).context("Failed to read input data")?;

    let config = WindowConfig::new(common.window_size, common.stride, common.overlap_windows)
        .context("Invalid window configuration")?;

    let records = compute_graph_records(&data.authors, data.commits, &config, true)
        .context("Failed to compute interaction graphs")?;

    let out_dir = save.join(name.unwrap_or_else(|| experiment_name(&common.data)));
    fs::create_dir_all(&out_dir).context("Failed to create output directory")?;

    let out_path = out_dir.join(output_file_name(common.window_size, common.overlap_windows));
    fs::write(&out_path, serde_json::to_string(&records)?)
        .context("Failed to write output file")?;

    println!("Wrote {} windows to {}", records.len(), out_path.display());
    Ok(())
}

/// Full pipeline: normalize, bucket by day, slice into windows, and build
/// one interaction graph per window. Pure in its inputs; reruns on the same
/// data and configuration produce identical records.
pub fn compute_graph_records(
    authors: &[Author],
    raw_commits: Vec<RawCommit>,
    config: &WindowConfig,
    show_progress: bool,
) -> Result<Vec<GraphRecord>> {
    let commits = window::sort_commits(raw_commits)?;
    let buckets = window::bucket_by_day(&commits)?;
    let chunks = window::slice_windows(&buckets, config)?;

    let progress = if show_progress {
        ProgressBar::new(chunks.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let graph = build_interaction_graph(authors, &chunk.commits)?;
        records.push(GraphRecord {
            first_day: chunk.first_day,
            last_day: chunk.last_day,
            code_author_interaction: graph,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(records)
}
