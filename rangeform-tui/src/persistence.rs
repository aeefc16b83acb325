//! Session persistence: JSON save/load across restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub last_document: Option<PathBuf>,
    pub selected_row: usize,
    pub help_dismissed: bool,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState, help_dismissed: bool) -> PersistedState {
    PersistedState {
        last_document: Some(app.document_path.clone()),
        selected_row: app.selected,
        help_dismissed,
    }
}

/// Apply persisted state to AppState.
///
/// The row is only restored when the same document is reopened.
pub fn apply(app: &mut AppState, state: &PersistedState) {
    if state.last_document.as_deref() == Some(app.document_path.as_path()) {
        app.select_row(state.selected_row);
    }
    if !state.help_dismissed {
        app.overlay = crate::app::Overlay::Help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Overlay;
    use crate::test_helpers::sample_app_at;

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let state = PersistedState {
            last_document: Some(PathBuf::from("/tmp/tone.toml")),
            selected_row: 2,
            help_dismissed: true,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.last_document, state.last_document);
        assert_eq!(loaded.selected_row, 2);
        assert!(loaded.help_dismissed);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert!(loaded.last_document.is_none());
        assert_eq!(loaded.selected_row, 0);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert!(loaded.last_document.is_none());
    }

    #[test]
    fn row_restored_only_for_same_document() {
        let mut app = sample_app_at(PathBuf::from("/tmp/tone.toml"));
        let state = PersistedState {
            last_document: Some(PathBuf::from("/tmp/other.toml")),
            selected_row: 2,
            help_dismissed: true,
        };
        apply(&mut app, &state);
        assert_eq!(app.selected, 0);

        let state = PersistedState {
            last_document: Some(PathBuf::from("/tmp/tone.toml")),
            ..state
        };
        apply(&mut app, &state);
        assert_eq!(app.selected, 2);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn first_run_shows_help() {
        let mut app = sample_app_at(PathBuf::from("/tmp/tone.toml"));
        apply(&mut app, &PersistedState::default());
        assert_eq!(app.overlay, Overlay::Help);
    }
}
