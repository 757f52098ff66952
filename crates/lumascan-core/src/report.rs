use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{LumascanError, Result};
use crate::frame::AnalysisResult;

/// Render the result as CSV rows: one header plus one row per frame.
///
/// The first frame has no difference value, so its SAD column is "NA".
/// There are N brightness values but only N-1 differences; this layout
/// keeps the two series aligned by frame number.
pub fn format_rows(result: &AnalysisResult) -> Vec<String> {
    let mut rows = Vec::with_capacity(result.records.len() + 1);
    rows.push(format!(
        "Frame Number,SAD,Brightness,Number of scene changes: {}",
        result.scene_change_count
    ));

    for record in &result.records {
        let row = match record.difference {
            Some(d) => format!("{},{},{}", record.frame_index, d, record.avg_brightness),
            None => format!("{},NA,{}", record.frame_index, record.avg_brightness),
        };
        rows.push(row);
    }

    rows
}

/// Write the report to `path` as a CSV file.
///
/// Refuses to overwrite: an existing destination is surfaced as
/// [`LumascanError::SinkWrite`]. The result is borrowed, so the caller can
/// retry against a different destination.
pub fn write_csv(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| LumascanError::SinkWrite {
            path: path.to_path_buf(),
            source,
        })?;

    for row in format_rows(result) {
        writeln!(file, "{row}").map_err(|source| LumascanError::SinkWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    info!(output = %path.display(), rows = result.records.len() + 1, "Report written");
    Ok(())
}
