//! UI surfaces owned by an attached parameter.
//!
//! These are plain state holders: a host renders them and forwards user
//! input through the owning parameter. Setters report whether the visible
//! value changed, which is what a toolkit widget would signal on.

use crate::number::round_to_decimals;
use crate::range::{ValueRange, SLIDER_MAX, SLIDER_MIN};

/// Decimal places shown and kept by the editor.
pub const EDITOR_DECIMALS: u32 = 2;

/// Static text naming the parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
}

/// Coarse integer slider over `[SLIDER_MIN, SLIDER_MAX]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    position: i32,
}

impl Slider {
    pub fn new(position: i32) -> Self {
        Self {
            position: position.clamp(SLIDER_MIN, SLIDER_MAX),
        }
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// Fraction of the track covered by the knob, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        (self.position - SLIDER_MIN) as f64 / (SLIDER_MAX - SLIDER_MIN) as f64
    }

    /// Move the knob, clamping into the slider domain.
    ///
    /// Returns `true` if the position changed.
    pub fn set_position(&mut self, position: i32) -> bool {
        let clamped = position.clamp(SLIDER_MIN, SLIDER_MAX);
        let changed = clamped != self.position;
        self.position = clamped;
        changed
    }
}

/// Precise decimal editor over the parameter's own range.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalEditor {
    value: f64,
    range: ValueRange,
    decimals: u32,
    single_step: f64,
}

impl DecimalEditor {
    pub fn new(range: ValueRange, value: f64) -> Self {
        let mut editor = Self {
            value: range.min,
            range,
            decimals: EDITOR_DECIMALS,
            single_step: range.single_step(),
        };
        editor.set_value(value);
        editor
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn single_step(&self) -> f64 {
        self.single_step
    }

    /// Clamp to the range, round to the editor precision, and store.
    ///
    /// Returns `true` if the shown value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let rounded = round_to_decimals(self.range.clamp(value), self.decimals);
        let next = self.range.clamp(rounded);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Move by `steps` single steps (negative moves down).
    pub fn step_by(&mut self, steps: i32) -> bool {
        self.set_value(self.value + steps as f64 * self.single_step)
    }

    /// Shown text, always with exactly `decimals` places.
    pub fn display_text(&self) -> String {
        format!("{:.*}", self.decimals as usize, self.value)
    }
}

/// The label, slider, and editor of one attached parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Surfaces {
    pub label: Label,
    pub slider: Slider,
    pub editor: DecimalEditor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamps_and_reports_change() {
        let mut s = Slider::new(2000);
        assert_eq!(s.position(), SLIDER_MAX);
        assert!(s.set_position(-5));
        assert_eq!(s.position(), SLIDER_MIN);
        assert!(!s.set_position(0));
        assert!(s.set_position(250));
        assert_eq!(s.fraction(), 0.25);
    }

    #[test]
    fn editor_clamps_and_rounds() {
        let mut e = DecimalEditor::new(ValueRange::new(0.0, 10.0), 7.5);
        assert_eq!(e.value(), 7.5);
        assert!(e.set_value(3.3333));
        assert_eq!(e.value(), 3.33);
        assert!(!e.set_value(3.331));
        assert!(e.set_value(42.0));
        assert_eq!(e.value(), 10.0);
        assert!(e.set_value(-1.0));
        assert_eq!(e.value(), 0.0);
    }

    #[test]
    fn editor_steps_by_one_percent() {
        let mut e = DecimalEditor::new(ValueRange::new(0.0, 10.0), 5.0);
        assert_eq!(e.single_step(), 0.1);
        assert!(e.step_by(3));
        assert_eq!(e.value(), 5.3);
        assert!(e.step_by(-10));
        assert_eq!(e.value(), 4.3);
        e.step_by(1000);
        assert_eq!(e.value(), 10.0);
    }

    #[test]
    fn editor_display_keeps_two_places() {
        let e = DecimalEditor::new(ValueRange::new(0.0, 10.0), 2.5);
        assert_eq!(e.display_text(), "2.50");
        assert_eq!(e.decimals(), EDITOR_DECIMALS);
    }
}
