pub mod handler;

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Cuts `text` to at most `width` columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_and_clamps() {
        assert_eq!(centered(Rect::new(0, 0, 100, 40), 20, 10), Rect::new(40, 15, 20, 10));
        assert_eq!(centered(Rect::new(5, 5, 10, 4), 20, 10), Rect::new(5, 5, 10, 4));
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate("Mezcal", 10), "Mezcal");
        assert_eq!(truncate("Liim Lasalle Loves You", 8), "Liim La…");
        assert_eq!(truncate("abc", 0), "");
    }
}
