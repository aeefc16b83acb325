//! Parrot/neon colors for the form.
//!
//! Cyan marks focus and the slider knob, green a saved document, orange
//! unsaved edits or rejected input, pink errors. Editor values are purple
//! and labels, hints, and the empty slider track are steel blue.

use ratatui::style::{Color, Modifier, Style};

/// Form palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
        }
    }

    /// Slider fill color: muted near the bottom of the track, accent above half.
    pub fn slider_fill_color(&self, fraction: f64) -> Color {
        match fraction {
            f if f >= 0.5 => self.accent,
            f if f >= 0.25 => self.neutral,
            _ => self.muted,
        }
    }

    /// Color for the dirty/saved indicator.
    pub fn save_state_color(&self, dirty: bool) -> Color {
        if dirty {
            self.warning
        } else {
            self.positive
        }
    }
}

fn fg(pick: fn(&Theme) -> Color) -> Style {
    Style::default().fg(pick(&Theme::default()))
}

pub fn accent() -> Style {
    fg(|t| t.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    fg(|t| t.muted)
}

pub fn neutral() -> Style {
    fg(|t| t.neutral)
}

pub fn warning() -> Style {
    fg(|t| t.warning)
}

pub fn negative() -> Style {
    fg(|t| t.negative)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
