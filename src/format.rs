use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const INDEX_WIDTH: usize = 7;
pub const NAME_WIDTH: usize = 30;

pub const HEADER: &str = "Index   Process Name               Memory Usage (MB)";

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Truncates or right-pads `s` to exactly `width` display columns.
pub fn fit_unicode(s: &str, width: usize) -> String {
    let mut out = truncate_unicode(s, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// `{index:<7} {name:<30} {memory:.2} MB`, measured in display columns.
pub fn format_row(index: usize, name: &str, memory_mb: f64) -> String {
    format!(
        "{index:<width$} {} {memory_mb:.2} MB",
        fit_unicode(name, NAME_WIDTH),
        width = INDEX_WIDTH
    )
}
