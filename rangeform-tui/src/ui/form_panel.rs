//! Form panel: one grid row per parameter: label | slider | editor.
//!
//! Cells are drawn from the grid placements, so a row shows exactly the
//! surfaces its parameter attached.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use rangeform_core::{Surfaces, SurfaceRole};

use crate::app::AppState;
use crate::theme::{self, Theme};

const LABEL_WIDTH: usize = 18;
const EDITOR_WIDTH: usize = 10;
const MIN_SLIDER_WIDTH: usize = 10;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![Span::styled(
        "[j/k]select [h/l]slide [+/-]step [e]edit [r]reset [s]save [?]help",
        theme::muted(),
    )]));
    lines.push(Line::from(""));

    if app.form.is_empty() {
        lines.push(Line::from(Span::styled(
            "No editable parameters in this document.",
            theme::warning(),
        )));
    }

    let slider_width = (area.width as usize)
        .saturating_sub(LABEL_WIDTH + EDITOR_WIDTH + 8)
        .max(MIN_SLIDER_WIDTH);

    for row in 0..app.grid.row_count() {
        let Some(surfaces) = app.form.float(row).and_then(|p| p.surfaces()) else {
            continue;
        };
        let is_active = row == app.selected;
        let mut spans = vec![Span::raw(if is_active { "> " } else { "  " })];

        for (_, role) in app.grid.row(row) {
            spans.push(render_cell(role, surfaces, is_active, slider_width));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn render_cell(
    role: SurfaceRole,
    surfaces: &Surfaces,
    is_active: bool,
    slider_width: usize,
) -> Span<'static> {
    let text_style = if is_active {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    };

    match role {
        SurfaceRole::Label => Span::styled(
            format!("{:>width$}:", surfaces.label.text, width = LABEL_WIDTH),
            text_style,
        ),
        SurfaceRole::Slider => {
            let fraction = surfaces.slider.fraction();
            let color = Theme::default().slider_fill_color(fraction);
            Span::styled(
                render_slider_bar(fraction, slider_width),
                Style::default().fg(color),
            )
        }
        SurfaceRole::Editor => Span::styled(
            format!("{:>width$}", surfaces.editor.display_text(), width = EDITOR_WIDTH),
            if is_active { text_style } else { theme::neutral() },
        ),
    }
}

/// Render a slider track of `width` cells with the knob at `fraction`.
pub fn render_slider_bar(fraction: f64, width: usize) -> String {
    let frac = fraction.clamp(0.0, 1.0);
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(render_slider_bar(0.0, 4), "[    ]");
        assert_eq!(render_slider_bar(0.5, 4), "[==  ]");
        assert_eq!(render_slider_bar(1.0, 4), "[====]");
    }

    #[test]
    fn bar_clamps_fraction() {
        assert_eq!(render_slider_bar(2.0, 3), "[===]");
        assert_eq!(render_slider_bar(-1.0, 3), "[   ]");
    }
}
