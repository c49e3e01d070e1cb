//! Easing curves for cell transitions, `t` in `[0, 1]`.

use std::f32::consts::PI;

#[inline]
pub fn ease_out_sine(t: f32) -> f32 {
    (t.clamp(0.0, 1.0) * PI / 2.0).sin()
}

#[inline]
pub fn ease_in_out_sine(t: f32) -> f32 {
    -((PI * t.clamp(0.0, 1.0)).cos() - 1.0) / 2.0
}

/// Scale keyframes 1 → 1.2 → 1, each half eased in-out.
pub fn pulse_scale(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        1.0 + 0.2 * ease_in_out_sine(t * 2.0)
    } else {
        1.2 - 0.2 * ease_in_out_sine((t - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn curves_hit_endpoints() {
        assert!(close(ease_out_sine(0.0), 0.0));
        assert!(close(ease_out_sine(1.0), 1.0));
        assert!(close(ease_in_out_sine(0.0), 0.0));
        assert!(close(ease_in_out_sine(0.5), 0.5));
        assert!(close(ease_in_out_sine(1.0), 1.0));
    }

    #[test]
    fn pulse_peaks_in_the_middle() {
        assert!(close(pulse_scale(0.0), 1.0));
        assert!(close(pulse_scale(0.5), 1.2));
        assert!(close(pulse_scale(1.0), 1.0));
        assert!(pulse_scale(0.25) > 1.0 && pulse_scale(0.25) < 1.2);
    }
}
