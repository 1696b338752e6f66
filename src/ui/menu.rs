use crate::app::menu::MenuItem;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const PANEL_WIDTH: u16 = 30;

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.menu.visible {
        return;
    }

    // Left-hand panel over the full height
    let area = frame.area();
    let panel = Rect::new(area.x, area.y, PANEL_WIDTH.min(area.width), area.height);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Navigation ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    if inner.height < 3 {
        return;
    }

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let text = format!("  {:<width$}", item.label(), width = (inner.width as usize).saturating_sub(2));
        let style = if i == state.menu.selected {
            Theme::menu_selected()
        } else {
            Style::default().fg(Theme::TEXT_PRIMARY)
        };
        lines.push(Line::from(Span::styled(text, style)));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // Footer
    let footer_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let footer = Paragraph::new(Span::styled("Udgosh 3.0 Event Registration", Theme::hint()))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}
