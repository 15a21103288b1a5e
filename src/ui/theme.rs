use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Deep-sea palette: dark navy surfaces with cyan and teal accents.
pub struct Theme;

impl Theme {
    pub const BG_BASE: Color = Color::Rgb(5, 13, 28);
    pub const BG_SURFACE: Color = Color::Rgb(10, 26, 47);
    pub const BG_ELEVATED: Color = Color::Rgb(16, 38, 64);
    pub const BORDER_DIM: Color = Color::Rgb(40, 70, 95);
    pub const TEXT_PRIMARY: Color = Color::Rgb(235, 245, 250);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 190, 205);
    pub const TEXT_MUTED: Color = Color::Rgb(95, 120, 140);
    pub const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238);
    pub const ACCENT_TEAL: Color = Color::Rgb(0, 245, 212);
    pub const CORRECT: Color = Color::Rgb(45, 212, 160);
    pub const WRONG: Color = Color::Rgb(239, 68, 68);
    pub const WARNING: Color = Color::Rgb(250, 190, 70);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_accent() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn choice() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn choice_cursor() -> Style {
        Style::default()
            .fg(Self::BG_BASE)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn choice_correct() -> Style {
        Style::default()
            .fg(Self::CORRECT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn choice_wrong() -> Style {
        Style::default().fg(Self::WRONG).add_modifier(Modifier::BOLD)
    }

    pub fn timer(remaining: u32) -> Style {
        let fg = if remaining <= 5 {
            Self::WRONG
        } else if remaining <= 10 {
            Self::WARNING
        } else {
            Self::ACCENT_CYAN
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::ACCENT_CYAN).bg(Self::BORDER_DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }
}
