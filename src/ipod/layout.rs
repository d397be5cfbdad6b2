use ratatui::layout::Rect;

use crate::wheel::{WheelGeometry, geometry::CELL_WIDTH_PX};

const DEVICE_MAX_WIDTH: u16 = 46;
const DEVICE_MAX_HEIGHT: u16 = 36;
const WHEEL_MAX_ROWS: u16 = 15;
const WHEEL_MIN_ROWS: u16 = 5;

/// Where the parts of the iPod sit on the terminal. Recomputed on every
/// draw so the wheel geometry always matches what is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpodLayout {
    pub viewport: Rect,
    pub device: Rect,
    pub screen: Rect,
    pub header: Rect,
    pub list: Rect,
    pub wheel: Rect,
}

impl IpodLayout {
    pub fn new(viewport: Rect) -> Self {
        let width = viewport.width.min(DEVICE_MAX_WIDTH);
        let height = viewport.height.min(DEVICE_MAX_HEIGHT);
        let device = Rect::new(
            viewport.x + (viewport.width - width) / 2,
            viewport.y + (viewport.height - height) / 2,
            width,
            height,
        );

        let inner = Rect::new(
            device.x.saturating_add(1),
            device.y.saturating_add(1),
            device.width.saturating_sub(2),
            device.height.saturating_sub(2),
        );

        // Cells are twice as tall as wide, so a round wheel is twice as many
        // columns as rows.
        let mut wheel_rows = (inner.height / 2).clamp(WHEEL_MIN_ROWS, WHEEL_MAX_ROWS).min(inner.height);
        if wheel_rows * 2 > inner.width {
            wheel_rows = inner.width / 2;
        }
        let wheel_cols = wheel_rows * 2;

        let wheel = Rect::new(
            inner.x + (inner.width - wheel_cols) / 2,
            inner.y + inner.height - wheel_rows,
            wheel_cols,
            wheel_rows,
        );

        let screen = Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height.saturating_sub(wheel_rows + 1),
        );
        let screen_inner = Rect::new(
            screen.x.saturating_add(1),
            screen.y.saturating_add(1),
            screen.width.saturating_sub(2),
            screen.height.saturating_sub(2),
        );
        let header = Rect::new(screen_inner.x, screen_inner.y, screen_inner.width, screen_inner.height.min(1));
        let list = Rect::new(
            screen_inner.x,
            screen_inner.y + header.height,
            screen_inner.width,
            screen_inner.height - header.height,
        );

        Self {
            viewport,
            device,
            screen,
            header,
            list,
            wheel,
        }
    }

    pub fn wheel_geometry(&self) -> WheelGeometry {
        WheelGeometry::from_cells(self.wheel.x, self.wheel.y, self.wheel.width, self.wheel.height)
    }

    pub fn viewport_width_px(&self) -> f64 {
        self.viewport.width as f64 * CELL_WIDTH_PX
    }

    pub fn list_rows(&self) -> usize {
        self.list.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roomy_terminal_gets_full_size_device() {
        let layout = IpodLayout::new(Rect::new(0, 0, 160, 48));
        assert_eq!(layout.device.width, DEVICE_MAX_WIDTH);
        assert_eq!(layout.wheel.height, WHEEL_MAX_ROWS);
        assert_eq!(layout.wheel.width, WHEEL_MAX_ROWS * 2);
        assert!(layout.list_rows() > 5);
        assert!(layout.viewport_width_px() >= 1025.0);

        let wheel = layout.wheel_geometry();
        assert_eq!(wheel.radius, (WHEEL_MAX_ROWS * 2) as f64 * CELL_WIDTH_PX / 2.0);
    }

    #[test]
    fn parts_do_not_overlap() {
        for (w, h) in [(80, 24), (40, 20), (120, 40), (20, 10)] {
            let layout = IpodLayout::new(Rect::new(0, 0, w, h));
            assert!(layout.screen.bottom() <= layout.wheel.top());
            assert!(layout.device.right() <= w && layout.device.bottom() <= h);
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let layout = IpodLayout::new(Rect::new(0, 0, 3, 2));
        assert_eq!(layout.list_rows(), 0);
    }
}
