//! Small angle helpers shared across the crate.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::normalize_360;

    #[test]
    fn in_range_unchanged() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(359.75), 359.75);
    }

    #[test]
    fn wraps_positive_overflow() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(725.0), 5.0);
    }

    #[test]
    fn wraps_negative_angles() {
        assert_eq!(normalize_360(-1.0), 359.0);
        assert_eq!(normalize_360(-360.0), 0.0);
        assert_eq!(normalize_360(-725.0), 355.0);
    }
}
