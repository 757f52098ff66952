use crate::consts::CHANNEL_COUNT;
use crate::error::{LumascanError, Result};
use crate::frame::{PixelGrid, RawFrame};
use crate::pipeline::config::GridSize;

/// Resample a frame to the fixed analysis grid using bilinear interpolation.
///
/// The source is stretched to fit the grid; aspect ratio is intentionally
/// not preserved. Deterministic: the same frame always yields the same grid.
pub fn downsample(frame: &RawFrame, grid: GridSize) -> Result<PixelGrid> {
    let expected = frame.expected_len();
    if frame.width == 0 || frame.height == 0 || frame.data.len() != expected {
        return Err(LumascanError::InvalidFrame {
            width: frame.width,
            height: frame.height,
            expected,
            actual: frame.data.len(),
        });
    }

    let src_w = frame.width as usize;
    let src_h = frame.height as usize;
    let x_scale = src_w as f64 / grid.width as f64;
    let y_scale = src_h as f64 / grid.height as f64;

    let mut data = Vec::with_capacity(grid.width * grid.height * CHANNEL_COUNT);

    for row in 0..grid.height {
        // Sample at destination pixel centers, mapped into source space.
        let sy = ((row as f64 + 0.5) * y_scale - 0.5).max(0.0);
        let y0 = (sy.floor() as usize).min(src_h - 1);
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = sy - y0 as f64;

        for col in 0..grid.width {
            let sx = ((col as f64 + 0.5) * x_scale - 0.5).max(0.0);
            let x0 = (sx.floor() as usize).min(src_w - 1);
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f64;

            for ch in 0..CHANNEL_COUNT {
                let tl = frame.data[(y0 * src_w + x0) * CHANNEL_COUNT + ch] as f64;
                let tr = frame.data[(y0 * src_w + x1) * CHANNEL_COUNT + ch] as f64;
                let bl = frame.data[(y1 * src_w + x0) * CHANNEL_COUNT + ch] as f64;
                let br = frame.data[(y1 * src_w + x1) * CHANNEL_COUNT + ch] as f64;

                let top = tl + (tr - tl) * fx;
                let bottom = bl + (br - bl) * fx;
                let value = top + (bottom - top) * fy;
                data.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    Ok(PixelGrid::new(grid.width, grid.height, data))
}
