use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_AMBER: Color = Color::Rgb(251, 191, 36);
    pub const ACCENT_ORANGE: Color = Color::Rgb(251, 146, 60);
    pub const ACCENT_RED: Color = Color::Rgb(248, 113, 113);
    pub const ACCENT_GREEN: Color = Color::Rgb(74, 222, 128);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const BG_SURFACE: Color = Color::Rgb(24, 24, 32);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn headline() -> Style {
        Style::default()
            .fg(Self::ACCENT_ORANGE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn required_marker() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::Black).bg(Self::ACCENT_AMBER).add_modifier(Modifier::BOLD)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_ORANGE)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED).add_modifier(Modifier::BOLD)
    }

    pub fn menu_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
