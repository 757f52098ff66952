use std::sync::Arc;

use tracing::{debug, info};

use crate::downsample::downsample;
use crate::error::{LumascanError, Result};
use crate::frame::{AnalysisResult, FrameRecord};
use crate::io::FrameSource;
use crate::luminance::average_brightness;
use crate::scene::SceneChangeDetector;

use super::config::AnalyzerConfig;
use super::types::{CancelToken, NoOpReporter, PipelineStage, ProgressReporter};

/// Analyze every frame of `source` with a thread-safe progress reporter.
///
/// Frames are processed strictly sequentially, one at a time, in source
/// order. The cancellation token is polled once per frame; a set token
/// aborts with [`LumascanError::Cancelled`] before the next frame is pulled.
/// Source errors propagate immediately and no partial result is returned.
pub fn run_pipeline_reported(
    config: &AnalyzerConfig,
    source: &mut dyn FrameSource,
    reporter: Arc<dyn ProgressReporter>,
    cancel: &CancelToken,
) -> Result<AnalysisResult> {
    let source_info = source.source_info();
    info!(
        input = %source_info.path.display(),
        total_frames = ?source_info.total_frames,
        grid = %config.grid,
        "Analyzing frames"
    );

    reporter.begin_stage(PipelineStage::Analyzing, source_info.total_frames);

    let mut detector = SceneChangeDetector::new();
    let mut records = Vec::with_capacity(source_info.total_frames.unwrap_or(0));
    let mut frame_index = 0usize;

    loop {
        if cancel.is_cancelled() {
            return Err(LumascanError::Cancelled);
        }
        let Some(frame) = source.next_frame()? else {
            break;
        };
        frame_index += 1;

        let grid = downsample(&frame, config.grid)?;
        let avg_brightness = average_brightness(&grid, &config.luma_weights);
        let difference = detector.observe(&grid);
        debug!(frame_index, avg_brightness, ?difference, "Processed frame");

        records.push(FrameRecord {
            frame_index,
            avg_brightness,
            difference,
        });
        reporter.advance(frame_index);
    }
    reporter.finish_stage();

    let scene_change_count = records
        .iter()
        .filter(|r| r.is_scene_change(config.scene_change_threshold))
        .count();
    info!(
        frames = records.len(),
        scene_changes = scene_change_count,
        "Analysis complete"
    );

    Ok(AnalysisResult {
        records,
        scene_change_count,
    })
}

/// Analyze every frame of `source` with no progress reporting.
pub fn run_pipeline(
    config: &AnalyzerConfig,
    source: &mut dyn FrameSource,
) -> Result<AnalysisResult> {
    run_pipeline_reported(config, source, Arc::new(NoOpReporter), &CancelToken::new())
}
