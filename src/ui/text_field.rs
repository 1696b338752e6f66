use crate::app::input::TextInput;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct FieldView<'a> {
    pub label: &'a str,
    pub required: bool,
    pub placeholder: &'a str,
    pub input: &'a TextInput,
    pub focused: bool,
}

pub fn render(frame: &mut Frame, area: Rect, field: &FieldView) {
    let (border_style, border_type) = if field.focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let title = if field.required {
        Line::from(vec![
            Span::styled(format!(" {} ", field.label), Theme::label()),
            Span::styled("* ", Theme::required_marker()),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!(" {} ", field.label), Theme::label()),
            Span::styled("(Optional) ", Theme::hint()),
        ])
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text = &field.input.text;
    if text.is_empty() && !field.focused {
        frame.render_widget(
            Paragraph::new(Span::styled(field.placeholder, Theme::placeholder())),
            inner,
        );
        return;
    }

    // Scroll multi-line input so the cursor line stays visible
    let (cursor_line, cursor_col) = field.input.cursor_position();
    let line_offset = cursor_line.saturating_sub(inner.height as usize - 1) as u16;
    let lines: Vec<Line> = text
        .split('\n')
        .map(|l| Line::from(Span::styled(l, Theme::input_text())))
        .collect();
    frame.render_widget(Paragraph::new(lines).scroll((line_offset, 0)), inner);

    if field.focused {
        let x = inner.x + (cursor_col as u16).min(inner.width - 1);
        let y = inner.y + cursor_line as u16 - line_offset;
        frame.set_cursor_position((x, y));
    }
}
