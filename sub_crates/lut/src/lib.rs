//! Holds color lookup tables and writes them out in the cube format.

use std::io::Write;

mod table;

pub use table::Lut3D;

/// Writes a 3D LUT in the cube format.
///
/// Domain bounds are written in their shortest round-trip form (e.g.
/// `0.0`, `1.0`) and table entries with six decimal places, one RGB
/// triple per line in table order.
pub fn write_cube_3d<W: Write>(out: &mut W, title: &str, lut: &Lut3D) -> std::io::Result<()> {
    assert!(lut.is_cubic(), "cube files only support equal resolution on all axes");
    assert!(lut.table.len() == lut.sample_count());

    let [r_range, g_range, b_range] = lut.ranges;

    out.write_all(format!("TITLE \"{}\"\n", title).as_bytes())?;
    out.write_all(format!("LUT_3D_SIZE {}\n", lut.resolution[0]).as_bytes())?;
    out.write_all(
        format!(
            "DOMAIN_MIN {:?} {:?} {:?}\n",
            r_range.0, g_range.0, b_range.0
        )
        .as_bytes(),
    )?;
    out.write_all(
        format!(
            "DOMAIN_MAX {:?} {:?} {:?}\n",
            r_range.1, g_range.1, b_range.1
        )
        .as_bytes(),
    )?;

    for [r, g, b] in lut.table.iter().copied() {
        out.write_all(format!("{:.6} {:.6} {:.6}\n", r, g, b).as_bytes())?;
    }

    Ok(())
}
