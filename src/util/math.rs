//! Numeric helpers shared by the kernels and the evaluator.

/// Clamps a score into `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Divides `num` by `sqrt(energy_a * energy_b)`.
///
/// Returns `None` when the denominator is zero so callers can apply the
/// metric-specific fallback instead of producing NaN.
pub(crate) fn normalized_ratio(num: f64, energy_a: f64, energy_b: f64) -> Option<f64> {
    let denom = (energy_a * energy_b).sqrt();
    if denom <= 0.0 || !denom.is_finite() {
        return None;
    }
    Some(num / denom)
}

/// Saturates a signed value into the `u8` range.
pub(crate) fn saturate_u8(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::{clamp_unit, normalized_ratio, saturate_u8};

    #[test]
    fn clamp_unit_limits_range() {
        assert_eq!(clamp_unit(-0.25), 0.0);
        assert_eq!(clamp_unit(1.0 + 1e-6), 1.0);
        assert_eq!(clamp_unit(0.5), 0.5);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
    }

    #[test]
    fn normalized_ratio_rejects_zero_denominator() {
        assert!(normalized_ratio(3.0, 0.0, 9.0).is_none());
        let ratio = normalized_ratio(6.0, 4.0, 9.0).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn saturate_u8_clamps_both_ends() {
        assert_eq!(saturate_u8(-4), 0);
        assert_eq!(saturate_u8(300), 255);
        assert_eq!(saturate_u8(17), 17);
    }
}
