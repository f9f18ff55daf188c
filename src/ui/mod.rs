pub mod dashboard;
pub mod statusbar;
pub mod theme;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::App;
use crate::system::ProcessSource;

/// Header on the first line, ranked rows below, key hints or the inline
/// message on the last line.
pub fn draw<S: ProcessSource>(frame: &mut Frame, app: &mut App<S>) {
    let [header_area, rows_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let rows = app.visible_rows(rows_area.height as usize, Instant::now());

    dashboard::render_header(frame, header_area, &app.theme);
    dashboard::render_rows(frame, rows_area, &rows, &app.theme);
    statusbar::render(
        frame,
        status_area,
        app.inline_message.as_deref(),
        &app.theme,
    );
}
