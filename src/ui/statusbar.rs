use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, inline_message: Option<&str>, theme: &Theme) {
    // An inline message replaces the key hints for the cycle it was raised in.
    if let Some(msg) = inline_message {
        let line = Line::from(Span::styled(msg.to_string(), theme.message_style()));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut spans = Vec::new();
    spans.extend(pill_spans("0", "Quit", theme));
    spans.extend(pill_spans("1-9", "Terminate row", theme));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {desc}"), Style::default().fg(theme.pill_desc_fg)),
    ]
}
