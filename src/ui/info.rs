//! Screens with nothing to do but point back home.

use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render_auth(frame: &mut Frame, area: Rect) {
    render_card(
        frame,
        area,
        " Login ",
        vec![
            Line::from(Span::styled("Sign-in is not available in this client.", Theme::label())),
            Line::from(""),
            Line::from(Span::styled(
                "Registration does not need an account.",
                Theme::hint(),
            )),
        ],
    );
}

pub fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    render_card(
        frame,
        area,
        " 404 ",
        vec![
            Line::from(Span::styled("Page not found", Theme::error())),
            Line::from(""),
            Line::from(Span::styled(format!("Nothing lives at {path}"), Theme::hint())),
        ],
    );
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, mut lines: Vec<Line>) {
    let card = centered(area, 52, 9);
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused());

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Enter/Esc Home   q Quit", Theme::hint())));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, card);
}
