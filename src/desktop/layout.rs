use ratatui::layout::{Position, Rect};

use crate::wheel::geometry::{CELL_HEIGHT_PX, CELL_WIDTH_PX};

use super::wm::Geometry;

pub const TASKBAR_ROWS: u16 = 2;
pub const START_BUTTON_WIDTH: u16 = 9;
pub const CLOCK_WIDTH: u16 = 10;
pub const TASK_BUTTON_WIDTH: u16 = 24;
pub const START_MENU_WIDTH: u16 = 26;
pub const ICON_WIDTH: u16 = 12;
pub const ICON_HEIGHT: u16 = 4;
/// Min, maximize and close, right to left from the frame's edge.
pub const TITLE_BUTTON_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleButton {
    Minimize,
    Maximize,
    Close,
}

/// Cell rectangles for the fixed parts of the desktop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesktopLayout {
    pub viewport: Rect,
    pub desktop: Rect,
    pub taskbar: Rect,
    pub start_button: Rect,
    pub clock: Rect,
    pub tasks: Rect,
}

impl DesktopLayout {
    pub fn new(viewport: Rect) -> Self {
        let bar = TASKBAR_ROWS.min(viewport.height);
        let desktop = Rect::new(viewport.x, viewport.y, viewport.width, viewport.height - bar);
        let taskbar = Rect::new(viewport.x, viewport.y + desktop.height, viewport.width, bar);

        let start_button = Rect::new(taskbar.x, taskbar.y, START_BUTTON_WIDTH.min(taskbar.width), bar);
        let clock_width = CLOCK_WIDTH.min(taskbar.width.saturating_sub(start_button.width));
        let clock = Rect::new(taskbar.right() - clock_width, taskbar.y, clock_width, bar);
        let tasks = Rect::new(
            start_button.right(),
            taskbar.y,
            clock.x.saturating_sub(start_button.right()),
            bar,
        );

        Self {
            viewport,
            desktop,
            taskbar,
            start_button,
            clock,
            tasks,
        }
    }

    pub fn viewport_px(&self) -> (f64, f64) {
        (
            self.viewport.width as f64 * CELL_WIDTH_PX,
            self.viewport.height as f64 * CELL_HEIGHT_PX,
        )
    }

    /// Slot of the `index`-th taskbar button, if it still fits.
    pub fn task_button(&self, index: usize) -> Option<Rect> {
        let x = self.tasks.x as usize + 1 + index * (TASK_BUTTON_WIDTH as usize + 1);
        if x + TASK_BUTTON_WIDTH as usize > self.tasks.right() as usize {
            return None;
        }
        Some(Rect::new(x as u16, self.tasks.y, TASK_BUTTON_WIDTH, self.tasks.height))
    }

    pub fn task_button_at(&self, position: Position, count: usize) -> Option<usize> {
        (0..count).find(|&i| self.task_button(i).is_some_and(|rect| rect.contains(position)))
    }

    /// The start menu pops up above the start button.
    pub fn start_menu(&self, entries: usize) -> Rect {
        let height = (entries as u16 + 2).min(self.desktop.height);
        Rect::new(
            self.desktop.x,
            self.desktop.bottom() - height,
            START_MENU_WIDTH.min(self.desktop.width),
            height,
        )
    }

    /// Index of the start menu entry at `position`.
    pub fn start_entry_at(&self, position: Position, entries: usize) -> Option<usize> {
        let menu = self.start_menu(entries);
        if !menu.contains(position) || position.y == menu.y || position.y + 1 >= menu.bottom() {
            return None;
        }
        let index = (position.y - menu.y - 1) as usize;
        (index < entries).then_some(index)
    }

    pub fn icon(&self, index: usize) -> Rect {
        let rect = Rect::new(
            self.desktop.x + 1,
            self.desktop.y + 1 + index as u16 * ICON_HEIGHT,
            ICON_WIDTH,
            ICON_HEIGHT - 1,
        );
        rect.intersection(self.desktop)
    }

    pub fn icon_at(&self, position: Position, count: usize) -> Option<usize> {
        (0..count).find(|&i| self.icon(i).contains(position))
    }

    /// Converts a pixel frame into cells, clipped to the desktop area.
    pub fn window(&self, frame: Geometry) -> Rect {
        let x = (frame.left / CELL_WIDTH_PX).round() as u16;
        let y = (frame.top / CELL_HEIGHT_PX).round() as u16;
        let width = (frame.width / CELL_WIDTH_PX).round() as u16;
        let height = (frame.height / CELL_HEIGHT_PX).round() as u16;
        Rect::new(self.viewport.x + x, self.viewport.y + y, width, height).intersection(self.desktop)
    }

    pub fn title_bar(window: Rect) -> Rect {
        Rect::new(window.x, window.y, window.width, window.height.min(1))
    }

    pub fn title_button(window: Rect, button: TitleButton) -> Rect {
        let slot = match button {
            TitleButton::Close => 1,
            TitleButton::Maximize => 2,
            TitleButton::Minimize => 3,
        };
        let x = window.right().saturating_sub(slot * TITLE_BUTTON_WIDTH + 1);
        Rect::new(x.max(window.x), window.y, TITLE_BUTTON_WIDTH, window.height.min(1))
    }

    pub fn title_button_at(window: Rect, position: Position) -> Option<TitleButton> {
        [TitleButton::Minimize, TitleButton::Maximize, TitleButton::Close]
            .into_iter()
            .find(|button| Self::title_button(window, *button).contains(position))
    }

    /// Inside the border, below the title bar.
    pub fn content(window: Rect) -> Rect {
        Rect::new(
            window.x.saturating_add(1),
            window.y.saturating_add(1),
            window.width.saturating_sub(2),
            window.height.saturating_sub(2),
        )
    }
}
