pub mod error;
pub mod consts;
pub mod frame;
pub mod io;
pub mod downsample;
pub mod luminance;
pub mod scene;
pub mod pipeline;
pub mod report;
