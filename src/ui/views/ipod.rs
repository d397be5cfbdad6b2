use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::{
    catalog::{ALBUM_TITLE, ARTIST, TRACKS},
    ipod::{
        IpodShell,
        screens::{ItemAction, LOADING, MenuItem, ScreenBody},
    },
    shell::Library,
    ui::{
        components::{progress::ProgressWidget, spinner::Spinner, wheel::WheelWidget},
        util::truncate,
    },
    util::colors,
};

pub struct IpodView<'a> {
    ipod: &'a IpodShell,
    library: &'a Library,
    progress: (u64, u64),
}

impl<'a> IpodView<'a> {
    pub fn new(ipod: &'a IpodShell, library: &'a Library, progress: (u64, u64)) -> Self {
        Self {
            ipod,
            library,
            progress,
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(colors::IPOD_HEADER).fg(colors::IPOD_TEXT);
        buf.set_style(area, style);

        let title = truncate(&self.ipod.title(self.library), area.width.saturating_sub(4) as usize);
        Line::styled(title, style.add_modifier(Modifier::BOLD))
            .centered()
            .render(area, buf);
        Line::styled(self.ipod.indicator(), style).left_aligned().render(area, buf);
        Line::styled("▮▮▮", style).right_aligned().render(area, buf);
    }

    fn render_menu(&self, items: &[MenuItem], area: Rect, buf: &mut Buffer) {
        if let [item] = items
            && item.label == LOADING
        {
            Spinner::new()
                .with_style(Style::default().fg(colors::IPOD_TEXT))
                .with_label(LOADING)
                .render(Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), 1), buf);
            return;
        }

        let rows = area.height as usize;
        for (row, (index, item)) in items
            .iter()
            .enumerate()
            .skip(self.ipod.list_offset())
            .take(rows)
            .enumerate()
        {
            let rect = Rect::new(area.x, area.y + row as u16, area.width, 1);
            let selected = index == self.ipod.nav().selected();
            let style = if selected {
                Style::default().bg(colors::IPOD_SELECTION).fg(colors::IPOD_SELECTION_TEXT)
            } else {
                Style::default().bg(colors::IPOD_SCREEN).fg(colors::IPOD_TEXT)
            };
            buf.set_style(rect, style);

            let marker = match item.action {
                ItemAction::Open(_) => "›",
                ItemAction::Link(_) => "↗",
                _ => "",
            };
            let detail = item.detail.as_deref().unwrap_or_default();
            let right = if detail.is_empty() { marker.to_string() } else { detail.to_string() };
            let room = (area.width as usize).saturating_sub(right.chars().count() + 3);

            buf.set_string(rect.x + 1, rect.y, truncate(&item.label, room), style);
            Line::styled(format!("{right} "), style).right_aligned().render(rect, buf);
        }
    }

    fn render_text(&self, lines: &[String], area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(colors::IPOD_TEXT);
        for (row, line) in lines
            .iter()
            .skip(self.ipod.content_offset())
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_stringn(area.x + 1, area.y + row as u16, line, area.width.saturating_sub(2) as usize, style);
        }
    }

    fn render_now_playing(&self, area: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(colors::IPOD_TEXT);
        let track = self.ipod.media().state().current_track().and_then(|i| TRACKS.get(i));

        let mut lines = vec![Line::styled(self.ipod.track_number().unwrap_or_default(), text)];
        match track {
            Some(track) => {
                lines.push(Line::default());
                lines.push(Line::styled(track.title, text.add_modifier(Modifier::BOLD)));
                lines.push(Line::styled(ARTIST, text));
                lines.push(Line::styled(ALBUM_TITLE, text));
            }
            None => lines.push(Line::styled("Nothing playing", text)),
        }

        for (row, line) in lines.into_iter().take(area.height.saturating_sub(1) as usize).enumerate() {
            line.centered()
                .render(Rect::new(area.x, area.y + row as u16, area.width, 1), buf);
        }

        if area.height >= 2 {
            let (position, total) = self.progress;
            let view = self.ipod.progress_view(position, total);
            let bar = Rect::new(area.x + 1, area.bottom() - 1, area.width.saturating_sub(2), 1);
            ProgressWidget::new(&view).render(bar, buf);
        }
    }

    fn render_video(&self, area: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(colors::IPOD_TEXT);
        let video = self.ipod.media().video();
        let width = area.width.saturating_sub(2) as usize;

        let status = if video.is_playing() { "▶ Playing in your browser" } else { "❚❚ Paused" };
        let lines = [
            Line::styled(truncate(video.title().unwrap_or_default(), width), text.add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::styled(status, text),
            Line::from(Span::styled(
                truncate(video.embed_url().unwrap_or_default(), width),
                Style::default().fg(colors::IPOD_WHEEL_LABEL),
            )),
            Line::default(),
            Line::styled("MENU to stop", Style::default().fg(colors::IPOD_WHEEL_LABEL)),
        ];

        for (row, line) in lines.into_iter().take(area.height as usize).enumerate() {
            line.centered()
                .render(Rect::new(area.x, area.y + row as u16, area.width, 1), buf);
        }
    }
}

impl Widget for IpodView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(colors::BRAND));

        let layout = self.ipod.layout();
        if layout.list.height == 0 {
            Line::styled("Terminal too small", Style::default().fg(colors::BRAND_LIGHT))
                .centered()
                .render(area, buf);
            return;
        }

        Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .style(Style::default().bg(colors::IPOD_BODY).fg(colors::IPOD_BUTTON))
            .render(layout.device, buf);

        Block::new()
            .borders(Borders::ALL)
            .border_set(border::PLAIN)
            .style(Style::default().bg(colors::IPOD_SCREEN).fg(colors::IPOD_TEXT))
            .render(layout.screen, buf);

        self.render_header(layout.header, buf);

        match self.ipod.body(self.library) {
            ScreenBody::Menu(items) => self.render_menu(&items, layout.list, buf),
            ScreenBody::Text(lines) => self.render_text(&lines, layout.list, buf),
            ScreenBody::NowPlaying => self.render_now_playing(layout.list, buf),
            ScreenBody::VideoPlayer => self.render_video(layout.list, buf),
        }

        WheelWidget::new(layout.wheel_geometry(), self.ipod.wheel_active()).render(layout.wheel, buf);
    }
}
