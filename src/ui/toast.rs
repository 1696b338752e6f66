use crate::app::state::AppState;
use crate::app::toast::ToastKind;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

const MAX_WIDTH: u16 = 60;

/// Stack toasts in the bottom-right corner of `area`, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut bottom = area.y + area.height;

    for toast in state.toasts.visible() {
        let (icon, style) = match toast.kind {
            ToastKind::Success => ("✔ ", Theme::success()),
            ToastKind::Error => ("✖ ", Theme::error()),
        };
        let width = ((toast.text.width() + icon.width() + 4) as u16)
            .min(MAX_WIDTH)
            .min(area.width);
        let height = 3;
        if bottom < area.y + height {
            break;
        }
        bottom -= height;

        let rect = Rect::new(area.x + area.width - width, bottom, width, height);
        frame.render_widget(Clear, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type_focused())
            .border_style(style)
            .style(Style::default().bg(Theme::BG_SURFACE));
        let line = Line::from(vec![
            Span::styled(icon, style),
            Span::styled(toast.text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), rect);
    }
}
