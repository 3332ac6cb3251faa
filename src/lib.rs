//! Builds the 3D LUT that turns spectral channel images (magnitude,
//! log frequency, phase cosine) into preview colors.

pub mod channels;
pub mod color_map;
pub mod display_lut;
pub mod hsv;

pub use color_map::map_to_preview_rgb;
pub use display_lut::{generate_lut, write_lut, write_lut_file, Settings, DEFAULT_LUT_SIZE};
