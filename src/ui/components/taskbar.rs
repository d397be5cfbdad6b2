use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::{
    desktop::{layout::DesktopLayout, wm::TaskbarButton},
    ui::util::truncate,
    util::colors,
};

pub struct TaskbarWidget<'a> {
    layout: &'a DesktopLayout,
    buttons: &'a [TaskbarButton],
    clock: &'a str,
    start_open: bool,
}

impl<'a> TaskbarWidget<'a> {
    pub fn new(layout: &'a DesktopLayout, buttons: &'a [TaskbarButton], clock: &'a str, start_open: bool) -> Self {
        Self {
            layout,
            buttons,
            clock,
            start_open,
        }
    }
}

impl Widget for TaskbarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let face = Style::default().bg(colors::WIN_FACE).fg(colors::WIN_TEXT);
        buf.set_style(area, face);

        let start = self.layout.start_button;
        let start_style = if self.start_open {
            face.bg(colors::WIN_SHADOW).add_modifier(Modifier::BOLD)
        } else {
            face.add_modifier(Modifier::BOLD)
        };
        buf.set_style(start, start_style);
        buf.set_string(start.x + 1, start.y, "⊞ Start", start_style);

        for (index, button) in self.buttons.iter().enumerate() {
            let Some(rect) = self.layout.task_button(index) else {
                break;
            };
            let style = if button.active {
                face.bg(colors::WIN_SHADOW).add_modifier(Modifier::BOLD)
            } else if button.minimized {
                face.add_modifier(Modifier::ITALIC)
            } else {
                face
            };
            buf.set_style(rect, style);
            buf.set_string(rect.x + 1, rect.y, truncate(button.title, (rect.width as usize).saturating_sub(2)), style);
        }

        let clock = self.layout.clock;
        buf.set_style(clock, face.fg(colors::WIN_SHADOW));
        buf.set_stringn(clock.x + 1, clock.y, self.clock, (clock.width as usize).saturating_sub(1), face);
    }
}
