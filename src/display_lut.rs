//! Generation and serialization of the spectral display LUT.
//!
//! The LUT's three input axes are the normalized channels in cube order:
//! red = magnitude, green = frequency, blue = phase cosine.  Red varies
//! fastest in the output, which is what cube consumers expect.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use lut::Lut3D;

use crate::color_map::map_to_preview_rgb;

/// Grid points per axis of the shipped LUT.
pub const DEFAULT_LUT_SIZE: usize = 33;

pub const LUT_TITLE: &str = "ReSyne Display (Magnitude/LogFreq/PhaseCos)";

/// Location of the shipped LUT, relative to the project root.
pub const LUT_RELATIVE_PATH: &[&str] = &["assets", "luts", "ReSyne_Display_v1.cube"];

/// What to generate and what to call it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub size: usize,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            size: DEFAULT_LUT_SIZE,
            title: LUT_TITLE.into(),
        }
    }
}

impl Settings {
    /// Where the LUT lives under the project root `anchor`.
    pub fn output_path(&self, anchor: &Path) -> PathBuf {
        LUT_RELATIVE_PATH
            .iter()
            .fold(anchor.to_path_buf(), |path, part| path.join(part))
    }
}

/// Evaluates the preview mapping over a `size`^3 grid.
///
/// Sample `i` is for magnitude index `i % size`, frequency index
/// `(i / size) % size`, and phase index `i / size^2`.
///
/// Panics if `size < 2`.
pub fn generate_lut(size: usize) -> Lut3D {
    log::debug!("Generating {0}x{0}x{0} display LUT.", size);

    Lut3D::from_fn(size, |magnitude_norm, frequency_norm, phase_cos_norm| {
        let (r, g, b) = map_to_preview_rgb(magnitude_norm, frequency_norm, phase_cos_norm);
        [r, g, b]
    })
}

/// Generates the LUT described by `settings` and writes it as a cube file.
pub fn write_lut<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    check_size(settings.size)?;
    let lut = generate_lut(settings.size);
    lut::write_cube_3d(out, &settings.title, &lut)
}

/// Writes the display LUT of the given `size` to `path`.
///
/// The parent directory must already exist.  Any I/O failure is returned
/// as-is; a partially written file is left behind and is simply
/// overwritten by the next successful run.
pub fn write_lut_file(path: &Path, size: usize) -> io::Result<()> {
    let settings = Settings {
        size,
        ..Settings::default()
    };

    // Check before truncating whatever is already there.
    check_size(size)?;

    let mut out = io::BufWriter::new(std::fs::File::create(path)?);
    write_lut(&mut out, &settings)?;
    out.flush()?;

    log::info!(
        "Wrote {} LUT samples to \"{}\".",
        size * size * size,
        path.display()
    );

    Ok(())
}

fn check_size(size: usize) -> io::Result<()> {
    if size < 2 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("LUT size must be at least 2, got {}", size),
        ));
    }
    Ok(())
}
