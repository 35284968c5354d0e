use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cograph")]
#[command(about = "Derive time-windowed author interaction graphs from commit history")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Directory containing authors.json, files.json, and commits.json")]
    pub data: PathBuf,

    #[arg(long, help = "Number of days per interaction window", default_value_t = 7)]
    pub window_size: u32,

    #[arg(long, help = "Let successive windows overlap", default_value_t = false)]
    pub overlap_windows: bool,

    #[arg(long, help = "Base stride between windows in days", default_value_t = 1)]
    pub stride: u32,
}

#[derive(Subcommand)]
pub enum Commands {
    Build {
        #[arg(
            long,
            help = "Directory for saving results",
            default_value = "code_author_interaction_graphs"
        )]
        save: PathBuf,

        #[arg(long, help = "Name of this experiment")]
        name: Option<String>,
    },
    Summary,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Build { save, name } => crate::build::exec(self.common, save, name),
            Commands::Summary => crate::summary::exec(self.common),
        }
    }
}
