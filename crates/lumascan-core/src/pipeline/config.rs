use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    GRID_HEIGHT, GRID_WIDTH, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, SCENE_CHANGE_THRESHOLD,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub grid: GridSize,
    /// Normalized difference at or above which a frame counts as a
    /// scene change.
    #[serde(default = "default_threshold")]
    pub scene_change_threshold: u32,
    #[serde(default)]
    pub luma_weights: LumaWeights,
}

fn default_threshold() -> u32 {
    SCENE_CHANGE_THRESHOLD
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            scene_change_threshold: SCENE_CHANGE_THRESHOLD,
            luma_weights: LumaWeights::default(),
        }
    }
}

/// Dimensions of the analysis grid every frame is resampled to.
/// Both dimensions are checked to be positive on every construction
/// path, so a grid can never have zero cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGridSize")]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn checked(width: usize, height: usize) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "grid dimensions must be positive, got {width}x{height}"
            ));
        }
        Ok(Self { width, height })
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Raw deserialization target for [`GridSize`], validated via `TryFrom`.
#[derive(Deserialize)]
struct UncheckedGridSize {
    width: usize,
    height: usize,
}

impl TryFrom<UncheckedGridSize> for GridSize {
    type Error = String;

    fn try_from(raw: UncheckedGridSize) -> Result<Self, Self::Error> {
        Self::checked(raw.width, raw.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let width: usize = w.parse().map_err(|_| format!("invalid width '{w}'"))?;
        let height: usize = h.parse().map_err(|_| format!("invalid height '{h}'"))?;
        Self::checked(width, height)
    }
}

/// Per-channel weights for the perceptual brightness formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LumaWeights {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Default for LumaWeights {
    fn default() -> Self {
        Self {
            red: LUMINANCE_R,
            green: LUMINANCE_G,
            blue: LUMINANCE_B,
        }
    }
}
