use crate::frame::PixelGrid;
use crate::pipeline::config::LumaWeights;

/// Average perceptual brightness of a grid, as an integer.
///
/// Per-cell luma is floored before summing, and the sum is floor-divided
/// by the cell count, so the result is exact and reproducible.
pub fn average_brightness(grid: &PixelGrid, weights: &LumaWeights) -> u32 {
    let mut total: u64 = 0;
    for cell in grid.cells() {
        let luma = cell[0] as f64 * weights.red
            + cell[1] as f64 * weights.green
            + cell[2] as f64 * weights.blue;
        total += luma as u64;
    }
    (total / grid.cell_count() as u64) as u32
}
