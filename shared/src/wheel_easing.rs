/// Raw spin curve `t^3 * (t*(4t - 10) + 8)`.
///
/// It overshoots 1 near `t = 0.69` and reaches 2 at `t = 1`, so callers go
/// through [`ease`] which clamps it.
pub fn shape(t: f32) -> f32 {
    t.powi(3) * (t * (4.0 * t - 10.0) + 8.0)
}

/// Spin progress in `[0, 1]` for a normalized time `t`.
pub fn ease(t: f32) -> f32 {
    shape(t).clamp(0.0, 1.0)
}

/// Plain linear interpolation, no angle wrapping.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_boundaries() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn test_shape_overshoots_before_clamp() {
        assert_eq!(shape(0.5), 0.5);
        assert_eq!(shape(1.0), 2.0);
        assert!(shape(0.75) > 1.0);
        assert_eq!(ease(0.75), 1.0);
    }

    #[test]
    fn test_lerp_is_linear_in_angle() {
        assert_eq!(lerp(181.0, -1981.0, 0.0), 181.0);
        assert_eq!(lerp(181.0, -1981.0, 1.0), -1981.0);
        assert_eq!(lerp(0.0, -720.0, 0.5), -360.0);
    }
}
