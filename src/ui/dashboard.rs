use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::RowView;
use crate::format::{HEADER, format_row};
use crate::ui::theme::Theme;

pub fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let line = Line::from(Span::styled(HEADER, theme.header_style()));
    frame.render_widget(Paragraph::new(line), area);
}

/// One line per row from the top of `area`; rows past its height are dropped.
pub fn render_rows(frame: &mut Frame, area: Rect, rows: &[RowView], theme: &Theme) {
    for (offset, row) in rows.iter().take(area.height as usize).enumerate() {
        let row_area = Rect::new(area.x, area.y + offset as u16, area.width, 1);
        let line = row_line(row, area.width as usize, theme);
        frame.render_widget(Paragraph::new(line), row_area);
    }
}

fn row_line<'a>(row: &RowView, width: usize, theme: &Theme) -> Line<'a> {
    let text = format_row(row.index, &row.name, row.memory_mb);
    let label = if row.responsive {
        "Responsive"
    } else {
        "Unresponsive"
    };
    // Right-align the label, keeping at least one column of separation.
    let gap = width.saturating_sub(text.width() + label.width()).max(1);

    Line::from(vec![
        Span::styled(text, theme.row_style(row.highlighted)),
        Span::raw(" ".repeat(gap)),
        Span::styled(label, theme.label_style(row.responsive)),
    ])
}
