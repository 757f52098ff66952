pub mod image_sequence;
pub mod ser;

use std::path::Path;

use crate::error::Result;
use crate::frame::{RawFrame, SourceInfo};

use image_sequence::ImageSequenceSource;
use ser::SerFrameSource;

/// Ordered supplier of decoded frames.
///
/// Implementations must deliver frames in presentation order; the
/// frame-to-frame difference is only meaningful between chronologically
/// adjacent frames. No seeking is required.
pub trait FrameSource {
    /// Pull the next frame, or `None` at end of stream.
    fn next_frame(&mut self) -> Result<Option<RawFrame>>;

    /// Metadata about the opened source.
    fn source_info(&self) -> SourceInfo;
}

/// Open a frame source from a path: a directory is treated as an image
/// sequence, anything else as a SER video file.
pub fn open_source(path: &Path) -> Result<Box<dyn FrameSource>> {
    if path.is_dir() {
        Ok(Box::new(ImageSequenceSource::open(path)?))
    } else {
        Ok(Box::new(SerFrameSource::open(path)?))
    }
}
