/// Width of the fixed analysis grid every frame is resampled to.
pub const GRID_WIDTH: usize = 320;

/// Height of the fixed analysis grid.
pub const GRID_HEIGHT: usize = 180;

/// Normalized difference at or above which a transition counts as a
/// scene change. The comparison is `>=`, not `>`.
pub const SCENE_CHANGE_THRESHOLD: u32 = 30;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Number of channels in a decoded pixel (R, G, B).
pub const CHANNEL_COUNT: usize = 3;
