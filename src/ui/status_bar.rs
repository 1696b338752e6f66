use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let left = format!(" {} ", state.status_line());
    let hint = if state.menu.visible {
        " ↑↓ Select  Enter Go  Esc Close "
    } else {
        " F2 Menu  Ctrl-C Quit "
    };

    // Pad to fill remaining space
    let used = left.chars().count() + hint.chars().count();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(left, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(hint, Style::default().fg(Theme::ACCENT_AMBER).bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
