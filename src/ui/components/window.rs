use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};

use crate::{
    desktop::{
        content::Line,
        layout::{DesktopLayout, TitleButton},
    },
    ui::util::truncate,
    util::colors,
};

/// A Windows 98 frame: title bar with its three buttons and a scrolled
/// body of content lines.
pub struct WindowWidget<'a> {
    title: &'a str,
    active: bool,
    maximized: bool,
    lines: &'a [Line],
    scroll: usize,
}

impl<'a> WindowWidget<'a> {
    pub fn new(title: &'a str, lines: &'a [Line]) -> Self {
        Self {
            title,
            active: false,
            maximized: false,
            lines,
            scroll: 0,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for WindowWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 3 {
            return;
        }

        Clear.render(area, buf);
        Block::new()
            .borders(Borders::ALL)
            .style(Style::default().bg(colors::WIN_FACE).fg(colors::WIN_SHADOW))
            .render(area, buf);

        let title_bar = DesktopLayout::title_bar(area);
        let title_bg = if self.active { colors::WIN_TITLE } else { colors::WIN_TITLE_INACTIVE };
        buf.set_style(title_bar, Style::default().bg(title_bg).fg(colors::WIN_TITLE_TEXT));
        let room = title_bar.width.saturating_sub(3 * 3 + 3) as usize;
        buf.set_string(
            title_bar.x + 1,
            title_bar.y,
            truncate(self.title, room),
            Style::default()
                .bg(title_bg)
                .fg(colors::WIN_TITLE_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        let button = Style::default().bg(colors::WIN_FACE).fg(colors::WIN_TEXT);
        for (kind, symbol) in [
            (TitleButton::Minimize, "_"),
            (TitleButton::Maximize, if self.maximized { "❐" } else { "□" }),
            (TitleButton::Close, "×"),
        ] {
            let rect = DesktopLayout::title_button(area, kind);
            buf.set_style(rect, button);
            buf.set_string(rect.x + 1, rect.y, symbol, button);
        }

        let content = DesktopLayout::content(area);
        buf.set_style(content, Style::default().bg(colors::WIN_WINDOW).fg(colors::WIN_TEXT));

        for (row, line) in self.lines.iter().skip(self.scroll).take(content.height as usize).enumerate() {
            let y = content.y + row as u16;
            let width = content.width.saturating_sub(2) as usize;
            let span = match line {
                Line::Heading(text) => Span::styled(
                    truncate(text, width),
                    Style::default().fg(colors::WIN_TEXT).add_modifier(Modifier::BOLD),
                ),
                Line::Text(text) => Span::styled(truncate(text, width), Style::default().fg(colors::WIN_TEXT)),
                Line::Link { label, .. } => Span::styled(
                    truncate(label, width),
                    Style::default().fg(colors::WIN_LINK).add_modifier(Modifier::UNDERLINED),
                ),
                Line::Blank => continue,
            };
            buf.set_span(content.x + 1, y, &span, width as u16);
        }
    }
}
