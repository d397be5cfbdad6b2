use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::{desktop::BootPhase, ui::components::spinner::Spinner, ui::util::centered, util::colors};

/// Splash shown while the desktop "boots".
pub struct BootScreen {
    phase: BootPhase,
}

impl BootScreen {
    pub fn new(phase: BootPhase) -> Self {
        Self { phase }
    }
}

impl Widget for BootScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (bg, fg) = match self.phase {
            BootPhase::Fading => (colors::WIN_DESKTOP, colors::BRAND_LIGHT),
            _ => (colors::BRAND, colors::BRAND_LIGHT),
        };
        buf.set_style(area, Style::default().bg(bg).fg(fg));
        if area.width < 30 || area.height < 4 {
            return;
        }

        let block = centered(area, 30, 4);
        Line::styled("LIIM LASALLE", Style::default().fg(fg).add_modifier(Modifier::BOLD))
            .centered()
            .render(Rect::new(block.x, block.y, block.width, 1), buf);
        Line::styled("Windows 98 Edition", Style::default().fg(fg).add_modifier(Modifier::ITALIC))
            .centered()
            .render(Rect::new(block.x, block.y + 1, block.width, 1), buf);

        if self.phase == BootPhase::Booting {
            Spinner::new()
                .with_style(Style::default().fg(fg))
                .with_label("Starting up...")
                .render(Rect::new(block.x + 7, block.y + 3, block.width.saturating_sub(7), 1), buf);
        }
    }
}
