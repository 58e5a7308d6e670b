//! The normalization rule set shared by every facet.
//!
//! # Rules
//!
//! - Scalars saturate into their declared `[min, max]`. NaN maps to the
//!   field default. Infinities saturate to the nearest bound.
//! - Half-precision fields are clamped first and rounded second. Every
//!   half range declared here has bounds that binary16 represents exactly,
//!   so rounding never leaves the range.
//! - Wide authored integers saturate into the runtime width.
//! - Weight-bearing sparse entries survive only when the clamped weight's
//!   magnitude exceeds [`SPARSE_EPSILON`].
//! - A paired bound authored out of order pulls the lower bound down to
//!   the upper one.
//!
//! None of these rules reports a diagnostic: clamping is ordinary slider
//! behavior.

use half::f16;

/// Magnitude at or below which a weighted sparse entry is dropped.
pub const SPARSE_EPSILON: f32 = 0.01;

/// Declared valid range and default of one scalar field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarRange {
    /// Lowest stored value.
    pub min: f32,
    /// Highest stored value.
    pub max: f32,
    /// Value stored when the input is NaN.
    pub default: f32,
}

impl ScalarRange {
    /// `[0, 1]`, default 0.
    pub const UNIT: Self = Self::new(0.0, 1.0, 0.0);

    /// `[-1, 1]`, default 0.
    pub const SIGNED_UNIT: Self = Self::new(-1.0, 1.0, 0.0);

    /// `[0, 100]`, default 50.
    pub const PERCENT_SCORE: Self = Self::new(0.0, 100.0, 50.0);

    /// Build a range. Callers keep `min <= default <= max`.
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    /// The same bounds with a different default.
    pub const fn with_default(self, default: f32) -> Self {
        Self { default, ..self }
    }

    /// Saturate `value` into this range.
    pub fn clamp(self, value: f32) -> f32 {
        clamp_scalar(value, self)
    }

    /// Saturate `value` into this range and round to half precision.
    pub fn half(self, value: f32) -> f16 {
        to_half(value, self)
    }
}

/// Saturate `value` into `range`. NaN becomes `range.default`.
pub fn clamp_scalar(value: f32, range: ScalarRange) -> f32 {
    if value.is_nan() {
        return range.default;
    }
    value.clamp(range.min, range.max)
}

/// Clamp into `range`, then round to IEEE binary16 (nearest, ties to even).
pub fn to_half(value: f32, range: ScalarRange) -> f16 {
    f16::from_f32(clamp_scalar(value, range))
}

/// Saturate a wide integer into `[min, max]` of `u8`.
pub fn clamp_u8(value: i64, min: u8, max: u8) -> u8 {
    u8::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(max)
}

/// Saturate a wide integer into `[min, max]` of `u16`.
pub fn clamp_u16(value: i64, min: u16, max: u16) -> u16 {
    u16::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(max)
}

/// Saturate a wide integer into `[min, max]` of `u32`.
pub fn clamp_u32(value: i64, min: u32, max: u32) -> u32 {
    u32::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(max)
}

/// Whether an already-clamped weight is large enough to keep.
pub fn passes_sparse(weight: f32) -> bool {
    weight.abs() > SPARSE_EPSILON
}

/// Order a float bound pair by pulling `min` down to `max` when needed.
pub fn ordered_bounds(min: f32, max: f32) -> (f32, f32) {
    if min > max { (max, max) } else { (min, max) }
}

/// Order an integer bound pair by pulling `min` down to `max` when needed.
pub const fn ordered_bounds_u32(min: u32, max: u32) -> (u32, u32) {
    if min > max { (max, max) } else { (min, max) }
}

/// Trim surrounding whitespace from an authored identifier.
pub fn trim_id(raw: &str) -> &str {
    raw.trim()
}

/// Trim a stored identifier so later bakes see the normalized text.
pub fn trim_in_place(raw: &mut String) {
    let trimmed = raw.trim();
    if trimmed.len() != raw.len() {
        *raw = trimmed.to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT: ScalarRange = ScalarRange::new(0.0, 100.0, 65.0);

    #[test]
    fn clamps_out_of_range() {
        assert!((clamp_scalar(1.5, ScalarRange::UNIT) - 1.0).abs() < f32::EPSILON);
        assert!((clamp_scalar(-3.0, ScalarRange::UNIT)).abs() < f32::EPSILON);
        assert!((clamp_scalar(0.25, ScalarRange::UNIT) - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn nan_maps_to_default() {
        assert!((clamp_scalar(f32::NAN, STAT) - 65.0).abs() < f32::EPSILON);
    }

    #[test]
    fn infinities_saturate() {
        assert!((clamp_scalar(f32::INFINITY, STAT) - 100.0).abs() < f32::EPSILON);
        assert!(clamp_scalar(f32::NEG_INFINITY, STAT).abs() < f32::EPSILON);
    }

    #[test]
    fn half_clamps_before_rounding() {
        assert_eq!(to_half(7.0, ScalarRange::SIGNED_UNIT), f16::from_f32(1.0));
        assert_eq!(to_half(-7.0, ScalarRange::SIGNED_UNIT), f16::from_f32(-1.0));
        assert_eq!(to_half(f32::NAN, STAT), f16::from_f32(65.0));
    }

    #[test]
    fn half_rounding_is_deterministic() {
        let a = to_half(0.333_333, ScalarRange::UNIT);
        let b = to_half(0.333_333, ScalarRange::UNIT);
        assert_eq!(a.to_bits(), b.to_bits());
        assert!(a.to_f32() <= 1.0);
    }

    #[test]
    fn integers_saturate() {
        assert_eq!(clamp_u8(-5, 0, 255), 0);
        assert_eq!(clamp_u8(9_000, 0, 255), 255);
        assert_eq!(clamp_u8(0, 1, 10), 1);
        assert_eq!(clamp_u16(70_000, 0, 4096), 4096);
        assert_eq!(clamp_u32(i64::MAX, 1, 1_000_000), 1_000_000);
        assert_eq!(clamp_u32(42, 1, 1_000_000), 42);
    }

    #[test]
    fn sparse_threshold_is_exclusive() {
        assert!(!passes_sparse(0.01));
        assert!(!passes_sparse(-0.005));
        assert!(passes_sparse(0.02));
        assert!(passes_sparse(-0.5));
        assert!(!passes_sparse(0.0));
    }

    #[test]
    fn bounds_pull_min_down() {
        let (lo, hi) = ordered_bounds(0.8, 0.2);
        assert!((lo - 0.2).abs() < f32::EPSILON);
        assert!((hi - 0.2).abs() < f32::EPSILON);
        assert_eq!(ordered_bounds_u32(500, 100), (100, 100));
        assert_eq!(ordered_bounds_u32(10, 100), (10, 100));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(trim_id("  lcv-sparrow \t"), "lcv-sparrow");
        assert_eq!(trim_id("   "), "");
    }

    #[test]
    fn trim_in_place_is_idempotent() {
        let mut id = String::from(" hull.frigate  ");
        trim_in_place(&mut id);
        assert_eq!(id, "hull.frigate");
        trim_in_place(&mut id);
        assert_eq!(id, "hull.frigate");
    }
}
