use crate::error::{CographError, Result};
use crate::model::{Author, RawCommit};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The three inputs of a data directory. The file list exists in the
/// directory layout but nothing downstream consumes it.
#[derive(Debug)]
pub struct DataSet {
    pub authors: Vec<Author>,
    pub files: Vec<serde_json::Value>,
    pub commits: Vec<RawCommit>,
}

pub fn read_data(data_dir: &Path) -> Result<DataSet> {
    Ok(DataSet {
        authors: load_json(&data_dir.join("authors.json"))?,
        files: load_json(&data_dir.join("files.json"))?,
        commits: load_json(&data_dir.join("commits.json"))?,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| CographError::InvalidInput(format!("{}: {e}", path.display())))
}
