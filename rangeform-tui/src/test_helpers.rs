//! Test helpers for building sample app state

use std::path::PathBuf;

use rangeform_core::{ParameterDocument, ParseMode};

use crate::app::AppState;

pub const SAMPLE_DOCUMENT: &str = r#"
title = "Tone"

[[parameter]]
name = "Gamma"
min = "0"
max = "10"
default = "5"
savedValue = "7.5"

[[parameter]]
name = "Offset"
min = "-1"
max = "1"
default = "0"

[[parameter]]
name = "Strength"
min = "0"
max = "100"
default = "50"
"#;

pub fn sample_document() -> ParameterDocument {
    ParameterDocument::from_toml(SAMPLE_DOCUMENT).unwrap()
}

pub fn sample_app() -> AppState {
    let path = std::env::temp_dir().join("rangeform_sample").join("tone.toml");
    sample_app_at(path)
}

pub fn sample_app_at(path: PathBuf) -> AppState {
    AppState::new(sample_document(), path, ParseMode::Lenient).unwrap()
}
