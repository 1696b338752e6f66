use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let hero = centered(area, 48, 9);

    let lines = vec![
        Line::from(Span::styled("Udgosh 3.0", Theme::headline())),
        Line::from(""),
        Line::from(Span::styled("Event Registration", Theme::label())),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("  Register Now  →  ", Theme::button())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)),
            Span::styled(" Register  ", Theme::hint()),
            Span::styled("q", Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)),
            Span::styled(" Quit", Theme::hint()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), hero);
}
