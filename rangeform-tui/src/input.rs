//! Keyboard input dispatch: overlays first, then global keys, then form keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, COARSE_SLIDER_STEP, FINE_SLIDER_STEP};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Edit => {
            handle_edit_overlay(app, key);
            return;
        }
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Form keys.
    handle_form_key(app, key);
}

fn handle_edit_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Backspace => {
            app.edit_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') => {
            app.edit_input.push(c);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('h') | KeyCode::Left => app.nudge_slider(-FINE_SLIDER_STEP),
        KeyCode::Char('l') | KeyCode::Right => app.nudge_slider(FINE_SLIDER_STEP),
        KeyCode::Char('H') => app.nudge_slider(-COARSE_SLIDER_STEP),
        KeyCode::Char('L') => app.nudge_slider(COARSE_SLIDER_STEP),
        KeyCode::Char('-') => app.step_editor(-1),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step_editor(1),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('r') => app.reset_selected(),
        KeyCode::Char('R') => {
            app.reset_all();
            app.set_status("All parameters reset to defaults".into());
        }
        KeyCode::Char('s') => match app.save() {
            Ok(()) => {
                let msg = format!("Saved {}", app.document_path.display());
                app.set_status(msg);
            }
            Err(e) => app.set_error(format!("Save failed: {e:#}")),
        },
        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("↑/k, ↓/j", "Select parameter"),
        ("←/h, →/l", "Move slider (fine)"),
        ("H, L", "Move slider (coarse)"),
        ("-, +", "Step editor"),
        ("e / Enter", "Type exact value"),
        ("r", "Reset selected"),
        ("R", "Reset all"),
        ("s", "Save values to document"),
        ("?", "Show this help"),
    ]
}
