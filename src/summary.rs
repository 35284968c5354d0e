use crate::build::compute_graph_records;
use crate::cli::CommonArgs;
use crate::input;
use crate::model::GraphRecord;
use crate::window::WindowConfig;
use anyhow::Context;
use console::style;

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    let data = input::read_data(&common.data).context("Failed to read input data")?;

    let config = WindowConfig::new(common.window_size, common.stride, common.overlap_windows)
        .context("Invalid window configuration")?;

    let records = compute_graph_records(&data.authors, data.commits, &config, false)
        .context("Failed to compute interaction graphs")?;

    output_summary(&records, common.window_size)?;
    Ok(())
}

fn interacting_pairs(record: &GraphRecord) -> usize {
    // Symmetric adjacency: each undirected edge is stored twice.
    record
        .code_author_interaction
        .values()
        .map(|neighbors| neighbors.len())
        .sum::<usize>()
        / 2
}

fn output_summary(records: &[GraphRecord], window_size: u32) -> anyhow::Result<()> {
    println!("{}", style("Author Interaction Summary").bold());
    println!("{}", "─".repeat(50));

    if records.is_empty() {
        println!("No windows emitted for this dataset.");
        return Ok(());
    }

    let first = &records[0];
    let last = &records[records.len() - 1];
    println!("Windows: {}", style(records.len()).cyan());
    println!("Window size: {} days", style(window_size).cyan());
    println!(
        "Date range: {} to {}",
        style(first.first_day).dim(),
        style(last.last_day).dim()
    );

    let max_pairs = records.iter().map(interacting_pairs).max().unwrap_or(1).max(1);

    println!("\n{}", style("Interacting pairs per window").bold());
    for record in records {
        let pairs = interacting_pairs(record);
        let intensity = ((pairs as f64 / max_pairs as f64) * 5.0) as u32;
        let bar = match intensity {
            0 => " ",
            1 => "▁",
            2 => "▃",
            3 => "▅",
            4 => "▇",
            _ => "█",
        };
        println!(
            "{} {} {} pairs: {:>3}",
            record.first_day,
            record.last_day,
            style(bar).green(),
            pairs
        );
    }

    println!("\nUse the build command to write the graphs to disk.");
    Ok(())
}
