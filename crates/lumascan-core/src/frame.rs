use std::path::PathBuf;

use crate::consts::CHANNEL_COUNT;

/// A single decoded video frame.
/// Pixel data is 8-bit RGB, row-major, one triple per pixel.
#[derive(Clone, Debug)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    /// RGB bytes, length = width * height * 3.
    pub data: Vec<u8>,
}

impl RawFrame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer length a frame of these dimensions must have.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * CHANNEL_COUNT
    }
}

/// A frame resampled to the fixed analysis grid.
///
/// Invariant: the buffer always holds exactly `width * height` RGB
/// triples, regardless of the source resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height * CHANNEL_COUNT);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Iterate over the RGB triples in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(CHANNEL_COUNT)
    }
}

/// Per-frame analysis output. Created once per frame, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRecord {
    /// 1-based position in the source.
    pub frame_index: usize,
    /// Integer average luma over the analysis grid.
    pub avg_brightness: u32,
    /// Normalized difference against the previous frame.
    /// `None` for the first frame, which has nothing to compare to.
    pub difference: Option<u32>,
}

impl FrameRecord {
    /// Whether this transition counts as a scene change at `threshold`.
    pub fn is_scene_change(&self, threshold: u32) -> bool {
        self.difference.is_some_and(|d| d >= threshold)
    }
}

/// Ordered per-frame records plus the derived scene-change count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub records: Vec<FrameRecord>,
    pub scene_change_count: usize,
}

impl AnalysisResult {
    pub fn frame_count(&self) -> usize {
        self.records.len()
    }
}

/// Pixel layout of the source data.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorMode {
    Mono,
    Rgb,
    Bgr,
}

/// Metadata about an opened frame source.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    pub path: PathBuf,
    /// Known up front for seekable containers, `None` for open-ended ones.
    pub total_frames: Option<usize>,
    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
}
