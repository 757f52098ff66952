use std::fs::File;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;

use crate::consts::CHANNEL_COUNT;
use crate::error::{LumascanError, Result};
use crate::frame::{ColorMode, RawFrame, SourceInfo};
use crate::io::FrameSource;

pub const SER_HEADER_SIZE: usize = 178;
const SER_MAGIC: &[u8; 14] = b"LUCAM-RECORDER";

/// SER file header (178 bytes).
#[derive(Clone, Debug)]
pub struct SerHeader {
    pub color_id: i32,
    pub little_endian: bool,
    pub width: u32,
    pub height: u32,
    pub pixel_depth: u32,
    pub frame_count: u32,
}

impl SerHeader {
    /// Bytes per sample (1 for 8-bit, 2 for 9-16 bit).
    pub fn bytes_per_sample(&self) -> usize {
        if self.pixel_depth <= 8 {
            1
        } else {
            2
        }
    }

    /// Number of samples per pixel (1 for mono, 3 for RGB/BGR).
    pub fn samples_per_pixel(&self) -> usize {
        match self.color_id {
            100 | 101 => 3,
            _ => 1,
        }
    }

    /// Total bytes per frame.
    pub fn frame_byte_size(&self) -> usize {
        let pixels = (self.width as usize)
            .checked_mul(self.height as usize)
            .expect("Image dimensions too large");
        pixels
            .checked_mul(self.bytes_per_sample() * self.samples_per_pixel())
            .expect("Frame size calculation overflow")
    }

    pub fn color_mode(&self) -> Result<ColorMode> {
        match self.color_id {
            0 => Ok(ColorMode::Mono),
            100 => Ok(ColorMode::Rgb),
            101 => Ok(ColorMode::Bgr),
            other => Err(LumascanError::SourceUnavailable(format!(
                "Unsupported SER color id {other} (only MONO, RGB and BGR)"
            ))),
        }
    }
}

/// Memory-mapped SER video frame source.
///
/// Frames are decoded lazily, one per `next_frame` call, in file order.
#[derive(Debug)]
pub struct SerFrameSource {
    mmap: Mmap,
    header: SerHeader,
    color_mode: ColorMode,
    path: PathBuf,
    cursor: usize,
}

impl SerFrameSource {
    /// Open a SER file and parse its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            LumascanError::SourceUnavailable(format!("{}: {e}", path.display()))
        })?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < SER_HEADER_SIZE {
            return Err(LumascanError::SourceUnavailable(format!(
                "{}: file too small for SER header",
                path.display()
            )));
        }

        if &mmap[0..14] != SER_MAGIC {
            return Err(LumascanError::SourceUnavailable(format!(
                "{}: missing LUCAM-RECORDER magic",
                path.display()
            )));
        }

        let header = parse_header(&mmap[..SER_HEADER_SIZE])?;
        let color_mode = header.color_mode()?;

        let expected_data_size =
            SER_HEADER_SIZE + header.frame_byte_size() * header.frame_count as usize;
        if mmap.len() < expected_data_size {
            return Err(LumascanError::SourceUnavailable(format!(
                "{}: truncated, expected at least {} bytes, got {}",
                path.display(),
                expected_data_size,
                mmap.len()
            )));
        }

        Ok(Self {
            mmap,
            header,
            color_mode,
            path: path.to_path_buf(),
            cursor: 0,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.header.frame_count as usize
    }

    /// Raw bytes for a single frame (zero-copy from the mmap).
    fn frame_raw(&self, index: usize) -> &[u8] {
        let offset = SER_HEADER_SIZE + index * self.header.frame_byte_size();
        &self.mmap[offset..offset + self.header.frame_byte_size()]
    }

    /// Decode one frame into 8-bit RGB.
    fn decode_frame(&self, index: usize) -> RawFrame {
        let raw = self.frame_raw(index);
        let w = self.header.width as usize;
        let h = self.header.height as usize;
        let bps = self.header.bytes_per_sample();
        let depth = self.header.pixel_depth;
        let le = self.header.little_endian;

        let mut data = Vec::with_capacity(w * h * CHANNEL_COUNT);
        match self.color_mode {
            ColorMode::Mono => {
                for pixel in 0..w * h {
                    let v = read_sample(raw, pixel * bps, bps, depth, le);
                    data.extend_from_slice(&[v, v, v]);
                }
            }
            ColorMode::Rgb | ColorMode::Bgr => {
                // BGR is reordered to RGB while decoding.
                let order: [usize; 3] = if self.color_mode == ColorMode::Rgb {
                    [0, 1, 2]
                } else {
                    [2, 1, 0]
                };
                for pixel in 0..w * h {
                    let base = pixel * 3 * bps;
                    for ch in order {
                        data.push(read_sample(raw, base + ch * bps, bps, depth, le));
                    }
                }
            }
        }

        RawFrame::new(self.header.width, self.header.height, data)
    }
}

impl FrameSource for SerFrameSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        if self.cursor >= self.frame_count() {
            return Ok(None);
        }
        let frame = self.decode_frame(self.cursor);
        self.cursor += 1;
        Ok(Some(frame))
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo {
            path: self.path.clone(),
            total_frames: Some(self.frame_count()),
            width: self.header.width,
            height: self.header.height,
            color_mode: self.color_mode.clone(),
        }
    }
}

/// Read one sample as an 8-bit value, dropping extra depth.
fn read_sample(raw: &[u8], idx: usize, bytes_per_sample: usize, depth: u32, le: bool) -> u8 {
    if bytes_per_sample == 1 {
        raw[idx]
    } else {
        let pair = [raw[idx], raw[idx + 1]];
        let v = if le {
            u16::from_le_bytes(pair)
        } else {
            u16::from_be_bytes(pair)
        };
        (v >> (depth - 8)) as u8
    }
}

fn parse_header(buf: &[u8]) -> Result<SerHeader> {
    let mut cursor = std::io::Cursor::new(&buf[14..]); // skip magic

    let _lu_id = cursor.read_i32::<LittleEndian>()?;
    let color_id = cursor.read_i32::<LittleEndian>()?;
    let le_flag = cursor.read_i32::<LittleEndian>()?;
    let width = cursor.read_i32::<LittleEndian>()? as u32;
    let height = cursor.read_i32::<LittleEndian>()? as u32;
    let pixel_depth = cursor.read_i32::<LittleEndian>()? as u32;
    let frame_count = cursor.read_i32::<LittleEndian>()? as u32;

    if width == 0 || height == 0 {
        return Err(LumascanError::SourceUnavailable(format!(
            "Invalid SER dimensions {width}x{height}"
        )));
    }
    if !(1..=16).contains(&pixel_depth) {
        return Err(LumascanError::SourceUnavailable(format!(
            "Invalid SER pixel depth {pixel_depth}"
        )));
    }

    // The LittleEndian header field is unreliable in the wild: the format
    // defines 0 as big-endian, yet most capture software writes 0 while
    // emitting little-endian data. Treat anything but 1 as little-endian,
    // matching what Siril and other readers do.
    let little_endian = le_flag != 1;

    Ok(SerHeader {
        color_id,
        little_endian,
        width,
        height,
        pixel_depth,
        frame_count,
    })
}
