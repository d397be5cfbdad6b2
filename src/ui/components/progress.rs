use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
};

use crate::{ipod::ProgressView, ui::components::gauge::CustomGauge, util::colors};

/// Elapsed time, bar and remaining time; or the volume level while the
/// volume overlay is up.
pub struct ProgressWidget<'a> {
    view: &'a ProgressView,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(view: &'a ProgressView) -> Self {
        Self { view }
    }
}

impl Widget for ProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(colors::IPOD_TEXT);
        let [left, bar, right] = Layout::horizontal([
            Constraint::Length(7),
            Constraint::Min(4),
            Constraint::Length(7),
        ])
        .spacing(1)
        .areas(area);

        Line::styled(self.view.left.as_str(), text)
            .left_aligned()
            .render(left, buf);
        Line::styled(self.view.right.as_str(), text)
            .right_aligned()
            .render(right, buf);

        CustomGauge::default()
            .ratio(self.view.ratio)
            .use_unicode(true)
            .filled_style(Style::default().fg(colors::IPOD_PROGRESS))
            .remaining_style(Style::default().fg(colors::IPOD_TRACK))
            .render(Rect::new(bar.x, bar.y, bar.width, bar.height.min(1)), buf);
    }
}
