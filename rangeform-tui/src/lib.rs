//! Rangeform TUI - terminal form for editing parameter documents
//!
//! Each parameter gets one row with:
//! - Its label
//! - A coarse slider over 1001 positions
//! - A two-decimal editor for exact values
//!
//! Edits from either control keep the other in step; `s` writes the
//! values back into the document.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
