use crate::frame::PixelGrid;

/// Detects abrupt scene changes by comparing each frame against the one
/// before it.
///
/// Holds the previous frame's per-cell mean intensities between calls.
/// `observe` must be called exactly once per frame, in source order; the
/// normalized difference is only meaningful between adjacent frames.
///
/// Note the intensity here is the plain channel mean, not luma: brightness
/// uses the perceptual formula while motion uses the raw mean. The two are
/// deliberately kept distinct.
#[derive(Debug, Default)]
pub struct SceneChangeDetector {
    previous: Option<Vec<u8>>,
}

impl SceneChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `grid` against the previously observed one.
    ///
    /// Returns `floor(SAD / cellCount)`, or `None` on the first call.
    /// The stored buffer is replaced wholesale, never mutated in place.
    pub fn observe(&mut self, grid: &PixelGrid) -> Option<u32> {
        let current: Vec<u8> = grid
            .cells()
            .map(|c| ((c[0] as u16 + c[1] as u16 + c[2] as u16) / 3) as u8)
            .collect();

        let normalized = self.previous.as_ref().map(|previous| {
            let sad: u64 = previous
                .iter()
                .zip(&current)
                .map(|(p, c)| p.abs_diff(*c) as u64)
                .sum();
            (sad / current.len() as u64) as u32
        });

        self.previous = Some(current);
        normalized
    }
}
