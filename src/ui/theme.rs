use ratatui::style::{Color, Modifier, Style};

use crate::config::ColorsConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub responsive: Color,
    pub unresponsive: Color,
    pub highlight: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            responsive: Color::Green,
            unresponsive: Color::Red,
            highlight: Color::Red,
            pill_key_bg: Color::Gray,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::Gray,
        }
    }
}

impl Theme {
    /// Applies configured colors; unparsable values keep the defaults.
    pub fn from_config(colors: &ColorsConfig) -> Self {
        let defaults = Theme::default();
        Theme {
            responsive: parse_color(&colors.responsive).unwrap_or(defaults.responsive),
            unresponsive: parse_color(&colors.unresponsive).unwrap_or(defaults.unresponsive),
            highlight: parse_color(&colors.highlight).unwrap_or(defaults.highlight),
            ..defaults
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn row_style(&self, highlighted: bool) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if highlighted {
            style.fg(self.highlight)
        } else {
            style
        }
    }

    pub fn label_style(&self, responsive: bool) -> Style {
        if responsive {
            Style::default().fg(self.responsive)
        } else {
            Style::default().fg(self.unresponsive)
        }
    }

    pub fn message_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Accepts ratatui color names (`red`, `lightblue`), indices and `#rrggbb`.
fn parse_color(s: &str) -> Option<Color> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
