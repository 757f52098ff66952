use std::path::{Path, PathBuf};

use crate::error::{LumascanError, Result};
use crate::frame::{ColorMode, RawFrame, SourceInfo};
use crate::io::FrameSource;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Frame source over a directory of still images, in lexicographic order.
///
/// Each image is decoded to 8-bit RGB on demand. Frames may differ in
/// resolution; the downsampler normalizes them to the analysis grid anyway.
pub struct ImageSequenceSource {
    path: PathBuf,
    files: Vec<PathBuf>,
    cursor: usize,
    width: u32,
    height: u32,
}

impl ImageSequenceSource {
    /// Scan a directory for decodable images.
    pub fn open(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            LumascanError::SourceUnavailable(format!("{}: {e}", dir.display()))
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| {
                        SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                    })
            })
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(LumascanError::SourceUnavailable(format!(
                "{}: no decodable image frames found",
                dir.display()
            )));
        }

        // Dimensions of the first frame, for metadata only.
        let (width, height) = image::image_dimensions(&files[0])?;

        Ok(Self {
            path: dir.to_path_buf(),
            files,
            cursor: 0,
            width,
            height,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.files.len()
    }
}

impl FrameSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        let Some(path) = self.files.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;

        let rgb = image::open(path)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Some(RawFrame::new(width, height, rgb.into_raw())))
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo {
            path: self.path.clone(),
            total_frames: Some(self.files.len()),
            width: self.width,
            height: self.height,
            color_mode: ColorMode::Rgb,
        }
    }
}
