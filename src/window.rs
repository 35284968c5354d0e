use crate::error::{CographError, Result};
use crate::model::{Commit, RawCommit};
use chrono::{Days, Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// A contiguous span of calendar days and the commits that fall inside it.
/// Always spans exactly `window_size` days, both ends inclusive.
#[derive(Debug)]
pub struct WindowChunk<'a> {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub commits: Vec<&'a Commit>,
}

/// Windowing parameters with the overlap policy already folded in.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    pub window_size: u32,
    /// Effective stride handed to the slicer. The cursor advances by
    /// `stride - 1` days per window, so a stride of 1 never advances it;
    /// [`WindowConfig::new`] rejects the only combination that produces one.
    pub stride: u32,
}

impl WindowConfig {
    pub fn new(window_size: u32, stride: u32, overlap_windows: bool) -> Result<Self> {
        if window_size < 1 {
            return Err(CographError::InvalidConfig(
                "window size must be at least 1 day".to_string(),
            ));
        }
        if stride < 1 {
            return Err(CographError::InvalidConfig(
                "stride must be at least 1 day".to_string(),
            ));
        }
        if overlap_windows && stride == 1 {
            return Err(CographError::InvalidConfig(
                "a stride of 1 with overlapping windows never advances the window".to_string(),
            ));
        }
        let stride = if overlap_windows { stride } else { stride + window_size };
        Ok(Self { window_size, stride })
    }
}

/// Validates raw commit records and returns them ordered by ascending
/// timestamp. The sort is stable, so equal timestamps keep input order.
pub fn sort_commits(raw: Vec<RawCommit>) -> Result<Vec<Commit>> {
    let mut commits = Vec::with_capacity(raw.len());
    for (index, record) in raw.into_iter().enumerate() {
        let timestamp = record.timestamp.ok_or_else(|| {
            CographError::InvalidInput(format!("commit #{index} has no timestamp"))
        })?;
        let author_id = record.author_id.ok_or_else(|| {
            CographError::InvalidInput(format!("commit #{index} has no author_id"))
        })?;
        let files = record.files.ok_or_else(|| {
            CographError::InvalidInput(format!("commit #{index} has no file list"))
        })?;
        commits.push(Commit {
            id: record.id,
            timestamp,
            author_id,
            files,
        });
    }
    commits.sort_by_key(|c| c.timestamp);
    Ok(commits)
}

/// Converts an epoch-seconds timestamp to a local calendar day.
/// Grouping is by calendar day in the local zone, not a rolling 24 hours:
/// commits one second apart across local midnight land on different days.
pub fn commit_day(timestamp: i64) -> Result<NaiveDate> {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|t| t.date_naive())
        .ok_or_else(|| {
            CographError::InvalidInput(format!("commit timestamp {timestamp} is out of range"))
        })
}

/// Groups sorted commits into per-day buckets. Consuming an already sorted
/// sequence keeps the chronological sub-order inside each bucket.
pub fn bucket_by_day(commits: &[Commit]) -> Result<BTreeMap<NaiveDate, Vec<&Commit>>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Commit>> = BTreeMap::new();
    for commit in commits {
        buckets
            .entry(commit_day(commit.timestamp)?)
            .or_default()
            .push(commit);
    }
    Ok(buckets)
}

/// Slides a `window_size`-day window across the bucketed day range,
/// advancing the start by `stride - 1` days per window.
///
/// The loop runs while the cursor is strictly before the last bucketed day,
/// so the final day may be left out of every window depending on stride
/// alignment, and a dataset spanning a single day emits no windows at all.
/// Downstream consumers depend on that exact windowing; do not widen it.
pub fn slice_windows<'a>(
    buckets: &BTreeMap<NaiveDate, Vec<&'a Commit>>,
    config: &WindowConfig,
) -> Result<Vec<WindowChunk<'a>>> {
    let (first_day, last_day) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            return Err(CographError::EmptyDataset(
                "no commits to window".to_string(),
            ))
        }
    };

    let mut chunks = Vec::new();
    let mut cursor = first_day;
    while cursor < last_day {
        let window_end = cursor + Days::new(u64::from(config.window_size - 1));
        let commits = buckets
            .range(cursor..=window_end)
            .flat_map(|(_, day_commits)| day_commits.iter().copied())
            .collect();
        chunks.push(WindowChunk {
            first_day: cursor,
            last_day: window_end,
            commits,
        });
        cursor = cursor + Days::new(u64::from(config.stride - 1));
    }
    Ok(chunks)
}
