#![allow(dead_code)]

use lumascan_core::error::Result;
use lumascan_core::frame::{ColorMode, RawFrame, SourceInfo};
use lumascan_core::io::ser::SER_HEADER_SIZE;
use lumascan_core::io::FrameSource;

/// A frame filled with a single RGB color.
pub fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> RawFrame {
    let pixels = width as usize * height as usize;
    let mut data = Vec::with_capacity(pixels * 3);
    for _ in 0..pixels {
        data.extend_from_slice(&rgb);
    }
    RawFrame::new(width, height, data)
}

/// In-memory frame source for pipeline tests.
pub struct VecSource {
    frames: std::vec::IntoIter<RawFrame>,
    info: SourceInfo,
}

impl VecSource {
    pub fn new(frames: Vec<RawFrame>) -> Self {
        let info = SourceInfo {
            path: "memory".into(),
            total_frames: Some(frames.len()),
            width: frames.first().map(|f| f.width).unwrap_or(0),
            height: frames.first().map(|f| f.height).unwrap_or(0),
            color_mode: ColorMode::Rgb,
        };
        Self {
            frames: frames.into_iter(),
            info,
        }
    }
}

impl FrameSource for VecSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        Ok(self.frames.next())
    }

    fn source_info(&self) -> SourceInfo {
        self.info.clone()
    }
}

/// Build a SER file header.
///
/// `color_id`: 0=MONO, 100=RGB, 101=BGR.
pub fn build_ser_header(
    width: u32,
    height: u32,
    bit_depth: u32,
    num_frames: usize,
    color_id: i32,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SER_HEADER_SIZE);

    // Magic (14 bytes)
    buf.extend_from_slice(b"LUCAM-RECORDER");
    // LuID (4 bytes)
    buf.extend_from_slice(&0i32.to_le_bytes());
    // ColorID (4 bytes)
    buf.extend_from_slice(&color_id.to_le_bytes());
    // LittleEndian flag = 0, which readers treat as little-endian
    buf.extend_from_slice(&0i32.to_le_bytes());
    // Width
    buf.extend_from_slice(&(width as i32).to_le_bytes());
    // Height
    buf.extend_from_slice(&(height as i32).to_le_bytes());
    // PixelDepth
    buf.extend_from_slice(&(bit_depth as i32).to_le_bytes());
    // FrameCount
    buf.extend_from_slice(&(num_frames as i32).to_le_bytes());
    // Observer (40 bytes)
    buf.extend_from_slice(&[0u8; 40]);
    // Instrument (40 bytes)
    buf.extend_from_slice(&[0u8; 40]);
    // Telescope (40 bytes)
    buf.extend_from_slice(&[0u8; 40]);
    // DateTime (8 bytes)
    buf.extend_from_slice(&0u64.to_le_bytes());
    // DateTimeUTC (8 bytes)
    buf.extend_from_slice(&0u64.to_le_bytes());

    assert_eq!(buf.len(), SER_HEADER_SIZE);
    buf
}

/// Build a complete synthetic 8-bit SER file with the given frame data.
pub fn build_ser_with_frames(
    width: u32,
    height: u32,
    color_id: i32,
    frames: &[Vec<u8>],
) -> Vec<u8> {
    let mut buf = build_ser_header(width, height, 8, frames.len(), color_id);
    for frame in frames {
        buf.extend_from_slice(frame);
    }
    buf
}

/// Write a SER buffer to a temporary file and return the temp file handle.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_test_ser(data: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write SER data");
    f.flush().expect("flush");
    f
}
