//! Bottom status bar: save state, command arguments, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme::{self, Theme};

const SEPARATOR: &str = " | ";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(status_line(app)), area);
}

/// Segments of the bar, left to right, joined by [`SEPARATOR`].
fn status_line(app: &AppState) -> Line<'_> {
    let save_state = if app.dirty { " [modified]" } else { " [saved]" };
    let mut segments = vec![
        Span::styled(
            save_state,
            Style::default().fg(Theme::default().save_state_color(app.dirty)),
        ),
        Span::styled(app.form.command_arguments(), theme::neutral()),
    ];
    if let Some((message, level)) = &app.status_message {
        segments.push(Span::styled(message.as_str(), level_style(*level)));
    }

    let mut spans = Vec::with_capacity(segments.len() * 2);
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(SEPARATOR));
        }
        spans.push(segment);
    }
    Line::from(spans)
}

fn level_style(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => theme::accent(),
        StatusLevel::Warning => theme::warning(),
        StatusLevel::Error => theme::negative(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn clean_form_shows_saved_and_arguments() {
        let app = sample_app();
        let line = status_line(&app);
        assert_eq!(text(&line), format!(" [saved] | {}", app.form.command_arguments()));
    }

    #[test]
    fn status_message_is_appended_with_its_level_style() {
        let mut app = sample_app();
        app.dirty = true;
        app.set_warning("rejected".into());
        let line = status_line(&app);
        assert!(text(&line).starts_with(" [modified] | "));
        let last = line.spans.last().unwrap();
        assert_eq!(last.content, "rejected");
        assert_eq!(last.style, theme::warning());
    }
}
