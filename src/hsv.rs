/// HSV -> RGB conversion.
///
/// Hue is in [0.0, 1.0) covering the full color wheel, and wraps outside
/// of that.  Saturation and value are expected in [0.0, 1.0].
///
/// This is the plain hexcone conversion, evaluated the same way as the
/// reference LUT generator so that generated tables match it to the bit.
pub fn hsv_to_rgb(hsv: (f64, f64, f64)) -> (f64, f64, f64) {
    let (h, s, v) = hsv;

    if s == 0.0 {
        return (v, v, v);
    }

    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
