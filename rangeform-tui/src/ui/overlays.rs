//! Overlay widgets: exact-value prompt and key binding help.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use rangeform_core::Parameter;

use crate::app::AppState;
use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

/// Prompt for typing an exact value into the selected parameter's editor.
pub fn render_edit(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(50, 25, area);
    f.render_widget(Clear, popup);

    let Some(p) = app.selected_parameter() else {
        return;
    };
    let range = p.range();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} [Enter]apply [Esc]cancel ", p.name()))
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(Span::styled(
            format!("Range: {} .. {}", range.min, range.max),
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(format!("{}_", app.edit_input), theme::accent_bold()),
        ]),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Key binding help overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys ")
        .title_style(theme::accent_bold());

    let mut text = vec![Line::from("")];
    for (keys, action) in key_bindings_help() {
        text.push(Line::from(vec![
            Span::styled(format!("  {keys:<14}"), theme::accent()),
            Span::styled(action, theme::muted()),
        ]));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press any key to dismiss...",
        theme::neutral(),
    )));

    let para = Paragraph::new(text).block(block);
    f.render_widget(para, popup);
}
