//! Bounded float parameter bound to a slider and a decimal editor.
//!
//! The parameter owns one mutable value. When attached to a host grid it
//! also owns a label, a coarse slider, and a precise editor, and keeps
//! both controls in step with the value on every edit from either side.
//!
//! Surfaces report changes the way a toolkit widget would: any change to
//! a surface's visible value fires that surface's handler. Programmatic
//! pushes from one handler into the other surface happen with the
//! `updating` flag raised, which makes the other handler return early.

use crate::error::ParameterError;
use crate::layout::{GridCell, Host, SurfaceRole};
use crate::node::{ConfigNode, ATTR_DEFAULT, ATTR_MAX, ATTR_MIN, ATTR_NAME, ATTR_SAVED_VALUE};
use crate::notify::{Notifier, ValueChanged};
use crate::number::{format_decimal, parse_lenient, parse_strict, round_to_decimals};
use crate::range::ValueRange;
use crate::surface::{DecimalEditor, Label, Slider, Surfaces, EDITOR_DECIMALS};

/// Behaviour a form needs from every parameter kind.
pub trait Parameter {
    fn name(&self) -> &str;

    /// Create surfaces in `row` of the host's grid.
    ///
    /// Returns `false` without touching anything when the host has no
    /// grid. Any previously attached surfaces are discarded and their
    /// cells removed from the grid.
    fn add_to(&mut self, host: &mut dyn Host, row: usize) -> bool;

    /// Drop the surfaces and their grid cells, keeping the value.
    fn detach(&mut self, host: &mut dyn Host);

    fn is_attached(&self) -> bool;

    /// Current value as a locale-independent decimal string.
    fn text_value(&self) -> String;

    /// Set the value from text without emitting a notification.
    fn set_value(&mut self, text: &str);

    /// Restore the default value.
    fn reset(&mut self);

    /// Persist the current value into `node`.
    fn save_value(&self, node: &mut dyn ConfigNode);

    fn notifier_mut(&mut self) -> &mut Notifier;

    fn as_float(&self) -> Option<&FloatParameter> {
        None
    }

    fn as_float_mut(&mut self) -> Option<&mut FloatParameter> {
        None
    }
}

/// A named float in `[min, max]` edited through a slider and an editor.
#[derive(Debug)]
pub struct FloatParameter {
    name: String,
    range: ValueRange,
    default_value: f64,
    value: f64,
    surfaces: Option<Surfaces>,
    /// Grid row the surfaces were placed in.
    row: Option<usize>,
    updating: bool,
    notifier: Notifier,
}

impl FloatParameter {
    /// The value is taken as given; it is not clamped into `range`.
    pub fn new(name: impl Into<String>, range: ValueRange, default_value: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            range,
            default_value,
            value,
            surfaces: None,
            row: None,
            updating: false,
            notifier: Notifier::new(),
        }
    }

    /// Build from node attributes, reading malformed numbers as `0.0`.
    ///
    /// `savedValue` falls back to `default` when absent.
    pub fn from_node(node: &dyn ConfigNode) -> Self {
        let default_text = node.attribute_or(ATTR_DEFAULT, "");
        Self::new(
            node.attribute_or(ATTR_NAME, ""),
            ValueRange::new(
                parse_lenient(node.attribute_or(ATTR_MIN, "")),
                parse_lenient(node.attribute_or(ATTR_MAX, "")),
            ),
            parse_lenient(default_text),
            parse_lenient(node.attribute_or(ATTR_SAVED_VALUE, default_text)),
        )
    }

    /// Build from node attributes, rejecting missing or malformed numbers
    /// and ranges with `max <= min`.
    pub fn try_from_node(node: &dyn ConfigNode) -> Result<Self, ParameterError> {
        let required = |attribute: &str| -> Result<f64, ParameterError> {
            let text = node
                .attribute(attribute)
                .ok_or_else(|| ParameterError::MissingAttribute {
                    attribute: attribute.to_string(),
                })?;
            parse_strict(attribute, text)
        };

        let range = ValueRange::new(required(ATTR_MIN)?, required(ATTR_MAX)?);
        if range.is_degenerate() {
            return Err(ParameterError::DegenerateRange {
                min: range.min,
                max: range.max,
            });
        }
        let default_value = required(ATTR_DEFAULT)?;
        let value = match node.attribute(ATTR_SAVED_VALUE) {
            Some(text) => parse_strict(ATTR_SAVED_VALUE, text)?,
            None => default_value,
        };

        Ok(Self::new(
            node.attribute_or(ATTR_NAME, ""),
            range,
            default_value,
            value,
        ))
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    pub fn surfaces(&self) -> Option<&Surfaces> {
        self.surfaces.as_ref()
    }

    /// Grid row of the attached surfaces.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn slider_position(&self) -> Option<i32> {
        self.surfaces.as_ref().map(|s| s.slider.position())
    }

    pub fn editor_value(&self) -> Option<f64> {
        self.surfaces.as_ref().map(|s| s.editor.value())
    }

    // ── User input ───────────────────────────────────────────────────

    /// Drag the slider to `position`. No-op when detached.
    pub fn move_slider(&mut self, position: i32) {
        let changed = match self.surfaces.as_mut() {
            Some(s) => s.slider.set_position(position),
            None => return,
        };
        if changed {
            self.slider_changed_event();
        }
    }

    /// Move the slider by `delta` positions.
    pub fn nudge_slider(&mut self, delta: i32) {
        if let Some(position) = self.slider_position() {
            self.move_slider(position.saturating_add(delta));
        }
    }

    /// Type `value` into the editor. The editor clamps and rounds it.
    pub fn edit_value(&mut self, value: f64) {
        let changed = match self.surfaces.as_mut() {
            Some(s) => s.editor.set_value(value),
            None => return,
        };
        if changed {
            self.editor_changed_event();
        }
    }

    /// Press the editor's step arrows `steps` times (negative steps down).
    pub fn step_editor(&mut self, steps: i32) {
        let changed = match self.surfaces.as_mut() {
            Some(s) => s.editor.step_by(steps),
            None => return,
        };
        if changed {
            self.editor_changed_event();
        }
    }

    // ── Surface handlers ─────────────────────────────────────────────

    /// Slider handler: derive the value, mirror it in the editor, notify.
    pub fn on_slider_changed(&mut self, position: i32) {
        self.value = self.range.value_from_position(position);
        let value = self.value;
        self.while_updating(|this| this.push_to_editor(value));
        self.emit_changed();
    }

    /// Editor handler: take the value, mirror it on the slider, notify.
    pub fn on_editor_changed(&mut self, value: f64) {
        self.value = value;
        let position = self.range.position_from_value(value);
        self.while_updating(|this| this.push_to_slider(position));
        self.emit_changed();
    }

    fn slider_changed_event(&mut self) {
        if self.updating {
            return;
        }
        if let Some(position) = self.slider_position() {
            self.on_slider_changed(position);
        }
    }

    fn editor_changed_event(&mut self) {
        if self.updating {
            return;
        }
        if let Some(value) = self.editor_value() {
            self.on_editor_changed(value);
        }
    }

    fn push_to_slider(&mut self, position: i32) {
        let changed = self
            .surfaces
            .as_mut()
            .is_some_and(|s| s.slider.set_position(position));
        if changed {
            self.slider_changed_event();
        }
    }

    fn push_to_editor(&mut self, value: f64) {
        let changed = self
            .surfaces
            .as_mut()
            .is_some_and(|s| s.editor.set_value(value));
        if changed {
            self.editor_changed_event();
        }
    }

    /// Push the current value into both surfaces without re-entry.
    fn sync_surfaces(&mut self) {
        let value = self.value;
        let position = self.range.position_from_value(value);
        self.while_updating(|this| {
            this.push_to_slider(position);
            this.push_to_editor(value);
        });
    }

    fn while_updating(&mut self, f: impl FnOnce(&mut Self)) {
        let previous = std::mem::replace(&mut self.updating, true);
        f(self);
        self.updating = previous;
    }

    fn emit_changed(&mut self) {
        log::trace!("parameter '{}' changed to {}", self.name, self.value);
        let event = ValueChanged {
            name: self.name.clone(),
            value: self.value,
        };
        self.notifier.emit(&event);
    }
}

impl Parameter for FloatParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_to(&mut self, host: &mut dyn Host, row: usize) -> bool {
        let Some(grid) = host.grid_layout() else {
            log::debug!("host of parameter '{}' has no grid; not attached", self.name);
            return false;
        };
        if self.range.is_degenerate() {
            log::warn!(
                "parameter '{}' has degenerate range [{}, {}]; slider mapping is undefined",
                self.name,
                self.range.min,
                self.range.max
            );
        }

        let surfaces = Surfaces {
            label: Label {
                text: self.name.clone(),
            },
            slider: Slider::new(self.range.position_from_value(self.value)),
            editor: DecimalEditor::new(self.range, self.value),
        };
        if let Some(previous) = self.row {
            grid.remove_widgets(previous);
        }
        for role in [SurfaceRole::Label, SurfaceRole::Slider, SurfaceRole::Editor] {
            grid.add_widget(
                role,
                GridCell {
                    row,
                    column: role.column(),
                    row_span: 1,
                    column_span: 1,
                },
            );
        }

        if self.surfaces.replace(surfaces).is_some() {
            log::debug!("parameter '{}' reattached at row {row}", self.name);
        }
        self.row = Some(row);
        true
    }

    fn detach(&mut self, host: &mut dyn Host) {
        if let (Some(row), Some(grid)) = (self.row.take(), host.grid_layout()) {
            grid.remove_widgets(row);
        }
        self.surfaces = None;
    }

    fn is_attached(&self) -> bool {
        self.surfaces.is_some()
    }

    fn text_value(&self) -> String {
        let shown = self
            .editor_value()
            .unwrap_or_else(|| round_to_decimals(self.value, EDITOR_DECIMALS));
        format_decimal(shown)
    }

    fn set_value(&mut self, text: &str) {
        self.value = self.range.clamp(parse_lenient(text));
        self.sync_surfaces();
    }

    fn reset(&mut self) {
        self.value = self.default_value;
        self.sync_surfaces();
        self.emit_changed();
    }

    fn save_value(&self, node: &mut dyn ConfigNode) {
        let text = self.text_value();
        log::debug!("saving '{}' = {text}", self.name);
        node.set_attribute(ATTR_SAVED_VALUE, text);
    }

    fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    fn as_float(&self) -> Option<&FloatParameter> {
        Some(self)
    }

    fn as_float_mut(&mut self) -> Option<&mut FloatParameter> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FormGrid;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn attached(min: f64, max: f64, default: f64, value: f64) -> (FloatParameter, FormGrid) {
        let mut p = FloatParameter::new("gain", ValueRange::new(min, max), default, value);
        let mut grid = FormGrid::new();
        assert!(p.add_to(&mut grid, 0));
        (p, grid)
    }

    fn recorder(p: &mut FloatParameter) -> Rc<RefCell<Vec<f64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        p.notifier_mut().subscribe(move |e| sink.borrow_mut().push(e.value));
        seen
    }

    #[test]
    fn slider_edit_notifies_exactly_once() {
        let (mut p, _grid) = attached(0.0, 10.0, 5.0, 5.0);
        let seen = recorder(&mut p);

        p.move_slider(250);
        assert_eq!(*seen.borrow(), vec![2.5]);
        assert!(!p.updating);
    }

    #[test]
    fn editor_edit_notifies_exactly_once() {
        let (mut p, _grid) = attached(0.0, 10.0, 5.0, 5.0);
        let seen = recorder(&mut p);

        p.edit_value(3.33);
        assert_eq!(*seen.borrow(), vec![3.33]);
        assert_eq!(p.slider_position(), Some(333));
    }

    #[test]
    fn unchanged_surface_value_fires_nothing() {
        let (mut p, _grid) = attached(0.0, 10.0, 5.0, 5.0);
        let seen = recorder(&mut p);

        p.move_slider(500);
        p.edit_value(5.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn set_value_is_silent() {
        let (mut p, _grid) = attached(0.0, 10.0, 5.0, 5.0);
        let seen = recorder(&mut p);

        p.set_value("1.25");
        assert!(seen.borrow().is_empty());
        assert_eq!(p.slider_position(), Some(125));
        assert_eq!(p.editor_value(), Some(1.25));
    }

    #[test]
    fn reset_notifies_once() {
        let (mut p, _grid) = attached(0.0, 10.0, 5.0, 7.5);
        let seen = recorder(&mut p);

        p.reset();
        assert_eq!(*seen.borrow(), vec![5.0]);
    }

    #[test]
    fn input_on_detached_parameter_is_ignored() {
        let mut p = FloatParameter::new("gain", ValueRange::new(0.0, 10.0), 5.0, 5.0);
        let seen = recorder(&mut p);

        p.move_slider(100);
        p.edit_value(1.0);
        p.step_editor(1);
        assert_eq!(p.value(), 5.0);
        assert!(seen.borrow().is_empty());
    }
}
