use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Widget},
};

use crate::{
    desktop::{BootPhase, Desktop, ICONS, START_MENU, content},
    shell::Library,
    ui::{
        components::{boot::BootScreen, taskbar::TaskbarWidget, window::WindowWidget},
        util::truncate,
    },
    util::colors,
};

pub struct DesktopView<'a> {
    desktop: &'a Desktop,
    library: &'a Library,
    clock: String,
}

impl<'a> DesktopView<'a> {
    pub fn new(desktop: &'a Desktop, library: &'a Library, clock: String) -> Self {
        Self { desktop, library, clock }
    }

    fn render_icons(&self, buf: &mut Buffer) {
        let layout = self.desktop.layout();
        for (index, (label, _)) in ICONS.iter().enumerate() {
            let rect = layout.icon(index);
            if rect.height < 2 || rect.width < 4 {
                continue;
            }
            let selected = self.desktop.selected_icon() == Some(index);
            let label_style = if selected {
                Style::default().bg(colors::WIN_SELECTION).fg(colors::WIN_TITLE_TEXT)
            } else {
                Style::default().bg(colors::WIN_DESKTOP).fg(colors::WIN_TITLE_TEXT)
            };

            let icon = Rect::new(rect.x + rect.width / 2 - 2, rect.y, 4.min(rect.width), 1);
            buf.set_style(icon, Style::default().bg(colors::WIN_FACE));
            buf.set_stringn(
                rect.x,
                rect.y + 1,
                truncate(label, rect.width as usize),
                rect.width as usize,
                label_style,
            );
        }
    }

    fn render_start_menu(&self, buf: &mut Buffer) {
        let menu = self.desktop.layout().start_menu(START_MENU.len());
        if menu.height < 3 {
            return;
        }

        let face = Style::default().bg(colors::WIN_FACE).fg(colors::WIN_TEXT);
        Clear.render(menu, buf);
        Block::new().borders(Borders::ALL).style(face).render(menu, buf);

        let banner = Rect::new(menu.x + 1, menu.y + 1, 2, menu.height - 2);
        buf.set_style(banner, Style::default().bg(colors::WIN_TITLE));

        for (row, (label, _)) in START_MENU.iter().enumerate().take(menu.height as usize - 2) {
            buf.set_stringn(
                menu.x + 4,
                menu.y + 1 + row as u16,
                label,
                menu.width.saturating_sub(5) as usize,
                face,
            );
        }
    }
}

impl Widget for DesktopView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase = self.desktop.boot_phase();
        if phase != BootPhase::Done {
            BootScreen::new(phase).render(area, buf);
            return;
        }

        let layout = self.desktop.layout();
        buf.set_style(layout.desktop, Style::default().bg(colors::WIN_DESKTOP));
        self.render_icons(buf);

        let wm = self.desktop.wm();
        for id in wm.z_order() {
            let (Some(rect), Some(state)) = (self.desktop.window_rect(id), wm.get(id)) else {
                continue;
            };
            let lines = content::lines(id, self.library);
            WindowWidget::new(id.title(), &lines)
                .active(wm.active() == Some(id))
                .maximized(state.maximized)
                .scroll(self.desktop.scroll_offset(id))
                .render(rect, buf);
        }

        let buttons = wm.taskbar();
        TaskbarWidget::new(layout, &buttons, &self.clock, self.desktop.start_open()).render(layout.taskbar, buf);

        if self.desktop.start_open() {
            self.render_start_menu(buf);
        }
    }
}
