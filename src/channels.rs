//! Conversions between the normalized spectral channels and their
//! physical quantities.
//!
//! The `denormalise_*`/`decode_*` functions take a channel value from the
//! [0.0, 1.0] encoding back to physical units.  The `normalise_*`/`encode_*`
//! functions go the other way, and match what the spectral colour encoder
//! writes into each channel.  Out-of-range inputs are clamped, never
//! rejected.

/// Lower end of the magnitude channel, in dB.
pub const DB_MIN: f64 = -120.0;
/// Upper end of the magnitude channel, in dB.
pub const DB_MAX: f64 = 20.0;
pub const DB_RANGE: f64 = DB_MAX - DB_MIN;

/// Lower end of the frequency channel, in Hz.
pub const MIN_FREQ: f64 = 20.0;
/// Upper end of the frequency channel, in Hz.
pub const MAX_FREQ: f64 = 20000.0;

/// Affine encoding of the phase cosine: `encoded = cos * SCALE + OFFSET`.
pub const PHASE_OFFSET: f64 = 0.5;
pub const PHASE_SCALE: f64 = 0.5;

/// Amplitudes at or below this are treated as silence when encoding.
const AMPLITUDE_FLOOR: f64 = 1e-6;

#[inline]
fn log_freq_min() -> f64 {
    MIN_FREQ.log2()
}

#[inline]
fn log_freq_range() -> f64 {
    MAX_FREQ.log2() - MIN_FREQ.log2()
}

/// Amplitude corresponding to `DB_MAX`, i.e. the loudest representable
/// magnitude.
#[inline]
pub fn max_amplitude() -> f64 {
    10.0f64.powf(DB_MAX / 20.0)
}

/// Normalized magnitude -> linear amplitude.
///
/// The channel is linear in dB over [`DB_MIN`, `DB_MAX`].
#[inline]
pub fn denormalise_magnitude(value: f64) -> f64 {
    let value = value.clamp(0.0, 1.0);
    let db = value * DB_RANGE + DB_MIN;
    10.0f64.powf(db / 20.0)
}

/// Linear amplitude -> normalized magnitude.
///
/// Non-finite and non-positive amplitudes map to 0.0.
pub fn normalise_magnitude(amplitude: f64) -> f64 {
    if !amplitude.is_finite() || amplitude <= 0.0 {
        return 0.0;
    }

    let db = 20.0 * amplitude.max(AMPLITUDE_FLOOR).log10();
    ((db - DB_MIN) / DB_RANGE).clamp(0.0, 1.0)
}

/// Normalized frequency -> frequency in Hz.
///
/// The channel is linear in log2(Hz), so equal steps in the channel are
/// equal musical intervals.
#[inline]
pub fn denormalise_frequency(value: f64) -> f64 {
    let value = value.clamp(0.0, 1.0);
    let log_freq = log_freq_min() + value * log_freq_range();
    2.0f64.powf(log_freq)
}

/// Frequency in Hz -> normalized frequency.
///
/// Frequencies outside [`MIN_FREQ`, `MAX_FREQ`] are clamped to it.
/// Non-finite and non-positive frequencies map to 0.0.
pub fn normalise_frequency(hz: f64) -> f64 {
    if !hz.is_finite() || hz <= 0.0 {
        return 0.0;
    }

    let log_freq = hz.clamp(MIN_FREQ, MAX_FREQ).log2();
    ((log_freq - log_freq_min()) / log_freq_range()).clamp(0.0, 1.0)
}

/// Encoded phase cosine -> cosine in [-1.0, 1.0].
#[inline]
pub fn decode_cosine_component(encoded: f64) -> f64 {
    (encoded.clamp(0.0, 1.0) - PHASE_OFFSET) / PHASE_SCALE
}

/// Cosine in [-1.0, 1.0] -> encoded phase cosine.
///
/// Non-finite input encodes as a zero cosine.
pub fn encode_cosine_component(cosine: f64) -> f64 {
    if !cosine.is_finite() {
        return PHASE_OFFSET;
    }
    cosine.clamp(-1.0, 1.0) * PHASE_SCALE + PHASE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps * b.abs().max(1.0)
    }

    #[test]
    fn magnitude_endpoints() {
        assert!(close(denormalise_magnitude(0.0), 1e-6, 1e-12));
        assert!(close(denormalise_magnitude(1.0), 10.0, 1e-12));
        assert!(close(max_amplitude(), 10.0, 1e-12));
        // 0 dB sits at 120/140 of the way up.
        assert!(close(denormalise_magnitude(120.0 / 140.0), 1.0, 1e-12));
    }

    #[test]
    fn magnitude_clamps() {
        assert_eq!(denormalise_magnitude(-0.5), denormalise_magnitude(0.0));
        assert_eq!(denormalise_magnitude(1.5), denormalise_magnitude(1.0));
    }

    #[test]
    fn magnitude_monotonic() {
        let mut prev = denormalise_magnitude(0.0);
        for i in 1..=1000 {
            let next = denormalise_magnitude(i as f64 / 1000.0);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn magnitude_round_trip() {
        for &n in &[0.0, 0.1, 0.5, 0.857, 1.0] {
            assert!(close(normalise_magnitude(denormalise_magnitude(n)), n, 1e-9));
        }
        assert_eq!(normalise_magnitude(0.0), 0.0);
        assert_eq!(normalise_magnitude(-3.0), 0.0);
        assert_eq!(normalise_magnitude(f64::NAN), 0.0);
        assert_eq!(normalise_magnitude(1000.0), 1.0);
    }

    #[test]
    fn frequency_endpoints() {
        assert!(close(denormalise_frequency(0.0), 20.0, 1e-9));
        assert!(close(denormalise_frequency(1.0), 20000.0, 1e-9));
        assert_eq!(denormalise_frequency(-1.0), denormalise_frequency(0.0));
        assert_eq!(denormalise_frequency(2.0), denormalise_frequency(1.0));
    }

    #[test]
    fn frequency_log_linear() {
        // Equal channel steps give equal frequency ratios.
        let ratio = denormalise_frequency(0.1) / denormalise_frequency(0.0);
        let mut prev = denormalise_frequency(0.0);
        for i in 1..=10 {
            let next = denormalise_frequency(i as f64 / 10.0);
            assert!(next > prev);
            assert!(close(next / prev, ratio, 1e-9));
            prev = next;
        }
        // Geometric mean of the range sits in the middle.
        assert!(close(denormalise_frequency(0.5), (20.0f64 * 20000.0).sqrt(), 1e-9));
    }

    #[test]
    fn frequency_round_trip() {
        for &n in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(close(normalise_frequency(denormalise_frequency(n)), n, 1e-9));
        }
        assert_eq!(normalise_frequency(5.0), 0.0);
        assert_eq!(normalise_frequency(96000.0), 1.0);
        assert_eq!(normalise_frequency(f64::INFINITY), 0.0);
    }

    #[test]
    fn cosine_decode() {
        assert!(close(decode_cosine_component(0.5), 0.0, 1e-12));
        assert!(close(decode_cosine_component(1.0), 1.0, 1e-12));
        assert!(close(decode_cosine_component(0.0), -1.0, 1e-12));
        assert_eq!(decode_cosine_component(-0.5), -1.0);
        assert_eq!(decode_cosine_component(1.5), 1.0);
    }

    #[test]
    fn cosine_encode() {
        assert_eq!(encode_cosine_component(0.0), 0.5);
        assert_eq!(encode_cosine_component(1.0), 1.0);
        assert_eq!(encode_cosine_component(-1.0), 0.0);
        assert_eq!(encode_cosine_component(3.0), 1.0);
        assert_eq!(encode_cosine_component(f64::NAN), 0.5);
        for &c in &[-1.0, -0.3, 0.0, 0.7, 1.0] {
            assert!(close(decode_cosine_component(encode_cosine_component(c)), c, 1e-12));
        }
    }
}
