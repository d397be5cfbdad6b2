use chrono::Local;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{
    desktop::format_clock,
    shell::Skin,
    ui::{
        app::App,
        views::{DesktopView, IpodView},
    },
};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let library = self.shell.library();
        match self.shell.skin() {
            Skin::Ipod => {
                let progress = self.audio_system.progress().get_progress();
                IpodView::new(self.shell.ipod(), library, progress).render(area, buf);
            }
            Skin::Desktop => {
                let clock = format_clock(&Local::now());
                DesktopView::new(self.shell.desktop(), library, clock).render(area, buf);
            }
        }
    }
}
