//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here. Parameter change events arrive through an
//! mpsc channel and are drained once per loop iteration.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use anyhow::Result;

use rangeform_core::number::parse_strict;
use rangeform_core::{
    FloatParameter, FormGrid, Parameter, ParameterDocument, ParameterError, ParameterForm,
    ParseMode, ValueChanged,
};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Modal layer drawn over the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Typing an exact value for the selected parameter.
    Edit,
    Help,
}

/// Slider positions moved by `h`/`l`.
pub const FINE_SLIDER_STEP: i32 = 10;
/// Slider positions moved by `H`/`L`.
pub const COARSE_SLIDER_STEP: i32 = 100;

pub struct AppState {
    pub document: ParameterDocument,
    pub document_path: PathBuf,
    pub form: ParameterForm,
    pub grid: FormGrid,
    pub selected: usize,
    pub overlay: Overlay,
    pub edit_input: String,
    pub status_message: Option<(String, StatusLevel)>,
    pub last_change: Option<ValueChanged>,
    /// Values edited since the last save.
    pub dirty: bool,
    pub running: bool,
    events_rx: Receiver<ValueChanged>,
}

impl AppState {
    /// Build the form for `document` and attach it to a fresh grid.
    pub fn new(
        document: ParameterDocument,
        document_path: PathBuf,
        mode: ParseMode,
    ) -> Result<Self, ParameterError> {
        let mut form = ParameterForm::from_document(&document, mode)?;
        let (events_tx, events_rx) = mpsc::channel();
        form.subscribe_channel(&events_tx);

        let mut grid = FormGrid::new();
        let attached = form.attach_all(&mut grid);
        log::info!(
            "loaded '{}' from {}: {attached} parameters",
            document.title,
            document_path.display()
        );

        Ok(Self {
            document,
            document_path,
            form,
            grid,
            selected: 0,
            overlay: Overlay::None,
            edit_input: String::new(),
            status_message: None,
            last_change: None,
            dirty: false,
            running: true,
            events_rx,
        })
    }

    pub fn row_count(&self) -> usize {
        self.form.len()
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Clamp the selection after the form changed size.
    pub fn select_row(&mut self, row: usize) {
        self.selected = row.min(self.row_count().saturating_sub(1));
    }

    pub fn selected_parameter(&self) -> Option<&FloatParameter> {
        self.form.float(self.selected)
    }

    fn selected_parameter_mut(&mut self) -> Option<&mut FloatParameter> {
        self.form.float_mut(self.selected)
    }

    pub fn nudge_slider(&mut self, delta: i32) {
        if let Some(p) = self.selected_parameter_mut() {
            p.nudge_slider(delta);
        }
    }

    pub fn step_editor(&mut self, steps: i32) {
        if let Some(p) = self.selected_parameter_mut() {
            p.step_editor(steps);
        }
    }

    /// Open the exact-value prompt, prefilled with the current text.
    pub fn begin_edit(&mut self) {
        if let Some(p) = self.selected_parameter() {
            self.edit_input = p.text_value();
            self.overlay = Overlay::Edit;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.overlay = Overlay::None;
    }

    /// Commit the prompt through the editor, as if typed into it.
    pub fn commit_edit(&mut self) {
        let input = std::mem::take(&mut self.edit_input);
        self.overlay = Overlay::None;
        match parse_strict("value", &input) {
            Ok(value) => {
                if let Some(p) = self.selected_parameter_mut() {
                    p.edit_value(value);
                }
            }
            Err(e) => self.set_warning(e.to_string()),
        }
    }

    pub fn reset_selected(&mut self) {
        if let Some(p) = self.form.get_mut(self.selected) {
            p.reset();
        }
    }

    pub fn reset_all(&mut self) {
        self.form.reset_all();
    }

    /// Write all values into the document and save it to disk.
    pub fn save(&mut self) -> Result<()> {
        self.form.save_into(&mut self.document);
        self.document.save(&self.document_path)?;
        self.dirty = false;
        Ok(())
    }

    /// Apply queued change events. Returns how many were drained.
    pub fn drain_events(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.last_change = Some(event);
            drained += 1;
        }
        if drained > 0 {
            self.dirty = true;
            if let Some(change) = &self.last_change {
                let text = format!("{} = {:.2}", change.name, change.value);
                self.set_status(text);
            }
        }
        drained
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: String) {
        log::warn!("{msg}");
        self.status_message = Some((msg, StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: String) {
        log::error!("{msg}");
        self.status_message = Some((msg, StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = sample_app();
        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        app.select_row(10);
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn nudge_moves_slider_and_marks_dirty() {
        let mut app = sample_app();
        app.nudge_slider(-COARSE_SLIDER_STEP);
        assert_eq!(app.drain_events(), 1);
        assert!(app.dirty);
        let p = app.selected_parameter().unwrap();
        assert_eq!(p.slider_position(), Some(650));
        assert_eq!(p.value(), 6.5);
        assert_eq!(app.last_change.as_ref().unwrap().name, "Gamma");
    }

    #[test]
    fn commit_edit_goes_through_editor() {
        let mut app = sample_app();
        app.begin_edit();
        assert_eq!(app.overlay, Overlay::Edit);
        assert_eq!(app.edit_input, "7.5");

        app.edit_input = "3.33".into();
        app.commit_edit();
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.selected_parameter().unwrap().slider_position(), Some(333));
        assert_eq!(app.drain_events(), 1);
    }

    #[test]
    fn malformed_edit_warns_and_keeps_value() {
        let mut app = sample_app();
        app.begin_edit();
        app.edit_input = "3,5".into();
        app.commit_edit();
        assert_eq!(app.selected_parameter().unwrap().value(), 7.5);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
        assert_eq!(app.drain_events(), 0);
    }

    #[test]
    fn reset_selected_restores_default() {
        let mut app = sample_app();
        app.reset_selected();
        assert_eq!(app.selected_parameter().unwrap().value(), 5.0);
        assert_eq!(app.drain_events(), 1);
    }
}
