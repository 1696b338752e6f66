use crate::app::form::{FormField, RegistrationForm};
use crate::app::state::AppState;
use crate::registration::draft::Stream;
use crate::ui::layout::centered;
use crate::ui::text_field::{self, FieldView};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const CARD_WIDTH: u16 = 72;
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(form) = &state.form else { return };
    if form.is_success() {
        render_success(frame, area);
    } else {
        render_form(frame, area, form, state.tick_count);
    }
}

fn field_height(field: FormField) -> u16 {
    match field {
        FormField::CollegeAddress => 5,
        FormField::Submit => 2,
        _ => 3,
    }
}

/// First row to draw so the focused field is fully on screen.
fn scroll_offset(form: &RegistrationForm, available: u16) -> u16 {
    let mut top = 0;
    for field in FormField::ALL {
        let bottom = top + field_height(field);
        if field == form.focus {
            return bottom.saturating_sub(available);
        }
        top = bottom;
    }
    0
}

fn render_form(frame: &mut Frame, area: Rect, form: &RegistrationForm, tick: u64) {
    let total: u16 = FormField::ALL.iter().map(|f| field_height(*f)).sum();
    let card = centered(area, CARD_WIDTH, total + 2);

    let block = Block::default()
        .title(" Udgosh 3.0 Event Registration ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::headline())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let offset = scroll_offset(form, inner.height);
    let mut top = 0u16;
    for field in FormField::ALL {
        let height = field_height(field);
        let visible = top >= offset && top + height <= offset + inner.height;
        if visible {
            let rect = Rect::new(inner.x, inner.y + top - offset, inner.width, height);
            render_field(frame, rect, form, field, tick);
        }
        top += height;
    }
}

fn render_field(frame: &mut Frame, area: Rect, form: &RegistrationForm, field: FormField, tick: u64) {
    let focused = form.focus == field;
    match field {
        FormField::Stream => render_stream(frame, area, form.stream, focused),
        FormField::Submit => render_submit(frame, area, form, focused, tick),
        _ => {
            let Some(input) = form.input(field) else { return };
            let view = FieldView {
                label: field.label(),
                required: field.required(),
                placeholder: field.placeholder(),
                input,
                focused,
            };
            text_field::render(frame, area, &view);
        }
    }
}

fn render_stream(frame: &mut Frame, area: Rect, selected: Stream, focused: bool) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" {} ", FormField::Stream.label()), Theme::label()),
            Span::styled("* ", Theme::required_marker()),
        ]))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let mut spans = Vec::new();
    for stream in Stream::ALL {
        let marker = if stream == selected { "(•) " } else { "( ) " };
        let style = if stream == selected {
            Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)
        } else {
            Theme::input_text()
        };
        spans.push(Span::styled(format!(" {marker}{stream}   "), style));
    }
    if focused {
        spans.push(Span::styled("←/→ change", Theme::hint()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_submit(frame: &mut Frame, area: Rect, form: &RegistrationForm, focused: bool, tick: u64) {
    // Top row is spacing
    let button = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let (label, style) = if form.is_submitting() {
        let frame_idx = (tick / 2) as usize % SPINNER.len();
        (format!("{} Submitting...", SPINNER[frame_idx]), Theme::button_disabled())
    } else if focused {
        (format!("▶ {} ◀", FormField::Submit.label()), Theme::button_focused())
    } else {
        (FormField::Submit.label().to_string(), Theme::button())
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .style(style),
        button,
    );
}

fn render_success(frame: &mut Frame, area: Rect) {
    let rect = centered(area, 44, 5);
    let lines = vec![
        Line::from(Span::styled("✔", Theme::success())),
        Line::from(""),
        Line::from(Span::styled("Registration Successful!", Theme::title())),
        Line::from(Span::styled("Redirecting to event page...", Theme::hint())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
