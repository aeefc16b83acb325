//! Value range and the slider mapping law.
//!
//! A slider position `s` in `[SLIDER_MIN, SLIDER_MAX]` and a value `v` in
//! `[min, max]` are related by a linear rescaling:
//!
//! ```text
//! v = min + (s / 1000) * (max - min)
//! s = round(1000 * (v - min) / (max - min))
//! ```
//!
//! The slider has 1001 discrete positions, which is coarser than the
//! decimal editor, so `v -> s -> v` is lossy. `s -> v -> s` is exact for
//! any non-degenerate range of reasonable magnitude.

/// Lowest slider position.
pub const SLIDER_MIN: i32 = 0;
/// Highest slider position.
pub const SLIDER_MAX: i32 = 1000;

/// Fraction of the span the decimal editor moves per step.
const EDITOR_STEPS_PER_SPAN: f64 = 100.0;

/// Closed interval `[min, max]` a parameter value lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the mapping law would divide by zero or go backwards.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        !(span.is_finite() && span > 0.0)
    }

    /// Clamp into the range. Never panics, even for inverted ranges.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Single step of the decimal editor.
    pub fn single_step(&self) -> f64 {
        self.span() / EDITOR_STEPS_PER_SPAN
    }

    /// Map a slider position to a value.
    pub fn value_from_position(&self, position: i32) -> f64 {
        self.min + (position as f64 / SLIDER_MAX as f64) * self.span()
    }

    /// Map a value to the nearest slider position.
    ///
    /// On a degenerate range the quotient is NaN or infinite and the
    /// saturating cast yields an arbitrary in-type position; callers must
    /// guarantee `max > min`.
    pub fn position_from_value(&self, value: f64) -> i32 {
        (SLIDER_MAX as f64 * (value - self.min) / self.span()).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_slider_to_value() {
        let r = ValueRange::new(0.0, 10.0);
        assert_eq!(r.value_from_position(0), 0.0);
        assert_eq!(r.value_from_position(250), 2.5);
        assert_eq!(r.value_from_position(1000), 10.0);
    }

    #[test]
    fn maps_value_to_slider_with_rounding() {
        let r = ValueRange::new(0.0, 10.0);
        assert_eq!(r.position_from_value(7.5), 750);
        assert_eq!(r.position_from_value(3.3333), 333);
        assert_eq!(r.position_from_value(3.336), 334);
    }

    #[test]
    fn offset_range() {
        let r = ValueRange::new(-5.0, 5.0);
        assert_eq!(r.value_from_position(500), 0.0);
        assert_eq!(r.position_from_value(-5.0), 0);
        assert_eq!(r.position_from_value(2.5), 750);
    }

    #[test]
    fn editor_step_is_one_percent_of_span() {
        assert_eq!(ValueRange::new(0.0, 10.0).single_step(), 0.1);
        assert_eq!(ValueRange::new(-1.0, 1.0).single_step(), 0.02);
    }

    #[test]
    fn degenerate_ranges_are_flagged() {
        assert!(ValueRange::new(5.0, 5.0).is_degenerate());
        assert!(ValueRange::new(10.0, 0.0).is_degenerate());
        assert!(ValueRange::new(0.0, f64::INFINITY).is_degenerate());
        assert!(!ValueRange::new(0.0, 1.0).is_degenerate());
    }

    #[test]
    fn degenerate_range_does_not_panic() {
        let r = ValueRange::new(5.0, 5.0);
        // 0/0: the result is meaningless but must not abort.
        let _ = r.position_from_value(5.0);
        assert_eq!(r.value_from_position(400), 5.0);
        assert_eq!(r.clamp(9.0), 5.0);
    }

    #[test]
    fn clamp_tolerates_inverted_range() {
        let r = ValueRange::new(10.0, 0.0);
        let _ = r.clamp(5.0);
        assert!(!r.contains(5.0));
    }
}
