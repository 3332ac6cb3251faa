//! The preview color mapping for spectral channel triples.
//!
//! Frequency drives hue, magnitude drives saturation and value, and the
//! phase cosine dims or brightens the value.  High frequencies land at the
//! red end of the wheel and low frequencies at violet.

use crate::{
    channels::{decode_cosine_component, denormalise_magnitude, max_amplitude},
    hsv::hsv_to_rgb,
};

/// Hue (in degrees) of the highest frequency.
pub const HUE_OFFSET_DEGREES: f64 = 20.0;
/// Degrees of hue covered by the full frequency range.
pub const HUE_SPAN_DEGREES: f64 = 280.0;

/// Saturation at silence, and how much full amplitude adds on top.
pub const SATURATION_FLOOR: f64 = 0.25;
pub const SATURATION_GAIN: f64 = 0.6;

/// `phase_weight = PHASE_WEIGHT_BASE + PHASE_WEIGHT_GAIN * cos(phase)`.
pub const PHASE_WEIGHT_BASE: f64 = 0.55;
pub const PHASE_WEIGHT_GAIN: f64 = 0.45;

/// Maps one normalized (magnitude, frequency, phase cosine) triple to a
/// preview RGB color, with every channel in [0.0, 1.0].
///
/// `frequency_norm` feeds the hue directly and is not clamped, so values
/// outside [0.0, 1.0] keep rotating around the hue wheel.
pub fn map_to_preview_rgb(
    magnitude_norm: f64,
    frequency_norm: f64,
    phase_cos_norm: f64,
) -> (f64, f64, f64) {
    let amplitude = denormalise_magnitude(magnitude_norm);
    let amplitude_ratio = (amplitude / max_amplitude()).clamp(0.0, 1.0);

    let hue_degrees = (1.0 - frequency_norm) * HUE_SPAN_DEGREES + HUE_OFFSET_DEGREES;
    let hue = hue_degrees.rem_euclid(360.0) / 360.0;

    let saturation = (SATURATION_FLOOR + amplitude_ratio * SATURATION_GAIN).clamp(0.0, 1.0);

    let cosine = decode_cosine_component(phase_cos_norm);
    let phase_weight = PHASE_WEIGHT_BASE + PHASE_WEIGHT_GAIN * cosine;
    let value = (amplitude_ratio.sqrt() * phase_weight).clamp(0.0, 1.0);

    // Clamp again, since the conversion can overshoot by an ulp.
    let rgb = hsv_to_rgb((hue, saturation, value));
    (
        rgb.0.clamp(0.0, 1.0),
        rgb.1.clamp(0.0, 1.0),
        rgb.2.clamp(0.0, 1.0),
    )
}
