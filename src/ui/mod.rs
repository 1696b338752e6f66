mod info;
mod landing;
mod layout;
mod menu;
mod registration;
mod status_bar;
mod text_field;
mod theme;
mod toast;

use crate::app::route::Route;
use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);
    match &state.route {
        Route::Landing => landing::render(frame, app_layout.content),
        Route::Register => registration::render(frame, app_layout.content, state),
        Route::Auth => info::render_auth(frame, app_layout.content),
        Route::NotFound(path) => info::render_not_found(frame, app_layout.content, path),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays last so they draw on top
    menu::render(frame, state);
    toast::render(frame, app_layout.content, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "KLE Society's Bachelor of Computer Application",
            Theme::title(),
        )),
        Line::from(Span::styled("F2 Menu", Theme::hint())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
