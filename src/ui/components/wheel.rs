use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::{
    util::colors,
    wheel::{
        Point, TapZone, WheelGeometry,
        gesture::DEAD_ZONE_RATIO,
    },
};

/// The click wheel, drawn cell by cell from the same geometry the gesture
/// code hit-tests against.
pub struct WheelWidget {
    geometry: WheelGeometry,
    active: bool,
}

impl WheelWidget {
    pub fn new(geometry: WheelGeometry, active: bool) -> Self {
        Self { geometry, active }
    }

    fn label_at(&self, area: Rect, zone: TapZone) -> (u16, u16) {
        let label = zone.label().chars().count() as u16;
        let mid_x = area.x + area.width / 2;
        let mid_y = area.y + area.height / 2;
        match zone {
            TapZone::Menu => (mid_x - label / 2, area.y),
            TapZone::Play => (mid_x - label / 2, area.bottom().saturating_sub(1)),
            TapZone::Previous => (area.x + 2, mid_y),
            TapZone::Next => (area.right().saturating_sub(2 + label), mid_y),
            TapZone::Center => (mid_x, mid_y),
        }
    }
}

impl Widget for WheelWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 5 {
            return;
        }
        let ring = if self.active { colors::IPOD_BUTTON } else { colors::IPOD_WHEEL };

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let point = Point::from_cell(x, y);
                if self.geometry.in_dead_zone(point, DEAD_ZONE_RATIO) {
                    buf[(x, y)].set_symbol(" ").set_bg(colors::IPOD_BUTTON);
                } else if self.geometry.contains(point) {
                    buf[(x, y)].set_symbol(" ").set_bg(ring);
                }
            }
        }

        let label = Style::default()
            .fg(colors::IPOD_WHEEL_LABEL)
            .bg(ring)
            .add_modifier(Modifier::BOLD);
        for zone in [TapZone::Menu, TapZone::Play, TapZone::Previous, TapZone::Next] {
            let (x, y) = self.label_at(area, zone);
            buf.set_string(x, y, zone.label(), label);
        }
    }
}
