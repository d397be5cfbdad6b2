//! Flat stack of desktop windows. Geometry is kept in virtual pixels so the
//! placement rules read the same as on a real screen.

use std::fmt;

use tracing::debug;

use crate::wheel::Point;

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const TASKBAR_HEIGHT_PX: f64 = 32.0;

const STAGGER_PX: f64 = 30.0;
const MIN_LEFT_PX: f64 = 50.0;
const MIN_TOP_PX: f64 = 30.0;
/// How much of a dragged window has to stay on screen.
const DRAG_MARGIN_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowId {
    About,
    Shows,
    Merch,
    Videos,
    News,
}

impl WindowId {
    pub const ALL: [WindowId; 5] = [
        WindowId::About,
        WindowId::Shows,
        WindowId::Merch,
        WindowId::Videos,
        WindowId::News,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WindowId::About => "Liim.exe",
            WindowId::Shows => "Shows.txt - Notepad",
            WindowId::Merch => "Merch",
            WindowId::Videos => "Windows Media Player",
            WindowId::News => "News.doc - WordPad",
        }
    }

    /// Width and height in virtual pixels.
    pub fn default_size(self) -> (f64, f64) {
        match self {
            WindowId::About => (700.0, 500.0),
            WindowId::Shows => (600.0, 450.0),
            WindowId::Merch => (550.0, 450.0),
            WindowId::Videos => (750.0, 500.0),
            WindowId::News => (600.0, 500.0),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            WindowId::About => "about",
            WindowId::Shows => "shows",
            WindowId::Merch => "merch",
            WindowId::Videos => "videos",
            WindowId::News => "news",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.left + self.width
            && point.y >= self.top
            && point.y < self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    pub minimized: bool,
    pub maximized: bool,
    pub geometry: Geometry,
    /// Geometry from before the window was maximized.
    pub saved: Option<Geometry>,
    /// Focus serial; the highest one is on top.
    pub z: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskbarButton {
    pub id: WindowId,
    pub title: &'static str,
    pub active: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    id: WindowId,
    start: Point,
    origin: (f64, f64),
}

#[derive(Debug, Default)]
pub struct WindowManager {
    /// Open windows in the order they were opened.
    windows: Vec<(WindowId, WindowState)>,
    active: Option<WindowId>,
    serial: u64,
    viewport: (f64, f64),
    drag: Option<Drag>,
}

impl WindowManager {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: (width, height),
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.0 <= MOBILE_BREAKPOINT_PX
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|(w, _)| *w == id).map(|(_, state)| state)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|(w, _)| *w == id).map(|(_, state)| state)
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    /// Opens a window by its key; unknown keys are ignored.
    pub fn open_key(&mut self, key: &str) {
        match WindowId::from_key(key) {
            Some(id) => self.open(id),
            None => debug!("No window named '{}'", key),
        }
    }

    pub fn open(&mut self, id: WindowId) {
        if let Some(state) = self.get_mut(id) {
            state.minimized = false;
            self.focus(id);
            return;
        }

        let (vw, vh) = self.viewport;
        let geometry = if self.is_mobile() {
            Geometry::new(0.0, 0.0, vw, vh - TASKBAR_HEIGHT_PX)
        } else {
            let (width, height) = id.default_size();
            let offset = self.windows.len() as f64 * STAGGER_PX;
            Geometry::new(
                ((vw - width) / 2.0 + offset).max(MIN_LEFT_PX),
                ((vh - TASKBAR_HEIGHT_PX - height) / 2.0 + offset).max(MIN_TOP_PX),
                width,
                height,
            )
        };

        debug!("Opening window {} at {:?}", id, geometry);
        self.windows.push((
            id,
            WindowState {
                minimized: false,
                maximized: false,
                geometry,
                saved: None,
                z: 0,
            },
        ));
        self.focus(id);
    }

    pub fn focus(&mut self, id: WindowId) {
        self.serial += 1;
        let serial = self.serial;
        if let Some(state) = self.get_mut(id) {
            state.z = serial;
            self.active = Some(id);
        }
    }

    /// Hands focus to the most recently focused window that is still visible.
    fn focus_next(&mut self) {
        let next = self
            .windows
            .iter()
            .filter(|(_, state)| !state.minimized)
            .max_by_key(|(_, state)| state.z)
            .map(|(id, _)| *id);

        match next {
            Some(id) => self.focus(id),
            None => self.active = None,
        }
    }

    pub fn minimize(&mut self, id: WindowId) {
        let Some(state) = self.get_mut(id) else {
            return;
        };
        state.minimized = true;
        self.focus_next();
    }

    pub fn toggle_maximize(&mut self, id: WindowId) {
        if self.is_mobile() {
            return;
        }
        let Some(state) = self.get_mut(id) else {
            return;
        };

        if state.maximized {
            state.maximized = false;
            if let Some(saved) = state.saved.take() {
                state.geometry = saved;
            }
        } else {
            state.saved = Some(state.geometry);
            state.maximized = true;
        }
        self.focus(id);
    }

    pub fn close(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|(w, _)| *w != id);
        if self.windows.len() == before {
            return;
        }
        if self.drag.is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }
        debug!("Closed window {}", id);
        self.focus_next();
    }

    /// Starts dragging by the title bar. Returns whether a drag began.
    pub fn begin_drag(&mut self, id: WindowId, at: Point) -> bool {
        if self.is_mobile() {
            return false;
        }
        let Some(state) = self.get(id) else {
            return false;
        };
        if state.maximized {
            return false;
        }

        let origin = (state.geometry.left, state.geometry.top);
        self.focus(id);
        self.drag = Some(Drag { id, start: at, origin });
        true
    }

    pub fn drag_to(&mut self, at: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let (vw, vh) = self.viewport;
        let max_left = (vw - DRAG_MARGIN_PX).max(0.0);
        let max_top = (vh - DRAG_MARGIN_PX).max(0.0);

        if let Some(state) = self.get_mut(drag.id) {
            state.geometry.left = (drag.origin.0 + at.x - drag.start.x).clamp(0.0, max_left);
            state.geometry.top = (drag.origin.1 + at.y - drag.start.y).clamp(0.0, max_top);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn taskbar(&self) -> Vec<TaskbarButton> {
        self.windows
            .iter()
            .map(|(id, state)| TaskbarButton {
                id: *id,
                title: id.title(),
                active: self.active == Some(*id) && !state.minimized,
                minimized: state.minimized,
            })
            .collect()
    }

    pub fn click_taskbar(&mut self, id: WindowId) {
        let Some(state) = self.get_mut(id) else {
            return;
        };

        if state.minimized {
            state.minimized = false;
            self.focus(id);
        } else if self.active == Some(id) {
            self.minimize(id);
        } else {
            self.focus(id);
        }
    }

    /// Visible windows from bottom to top.
    pub fn z_order(&self) -> Vec<WindowId> {
        let mut visible: Vec<_> = self.windows.iter().filter(|(_, state)| !state.minimized).collect();
        visible.sort_by_key(|(_, state)| state.z);
        visible.into_iter().map(|(id, _)| *id).collect()
    }

    /// Where a window is drawn, taking maximization into account.
    pub fn frame(&self, id: WindowId) -> Option<Geometry> {
        let state = self.get(id)?;
        if state.maximized {
            let (vw, vh) = self.viewport;
            Some(Geometry::new(0.0, 0.0, vw, vh - TASKBAR_HEIGHT_PX))
        } else {
            Some(state.geometry)
        }
    }

    /// Topmost visible window under `point`.
    pub fn window_at(&self, point: Point) -> Option<WindowId> {
        self.z_order()
            .into_iter()
            .rev()
            .find(|id| self.frame(*id).is_some_and(|frame| frame.contains(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> WindowManager {
        WindowManager::new(1280.0, 800.0)
    }

    #[test]
    fn opens_centered_with_stagger() {
        let mut wm = desktop();
        wm.open(WindowId::About);
        wm.open(WindowId::Shows);

        assert_eq!(wm.get(WindowId::About).map(|s| s.geometry), Some(Geometry::new(290.0, 134.0, 700.0, 500.0)));
        assert_eq!(wm.get(WindowId::Shows).map(|s| s.geometry), Some(Geometry::new(370.0, 189.0, 600.0, 450.0)));
        assert_eq!(wm.active(), Some(WindowId::Shows));
    }

    #[test]
    fn origin_has_a_floor() {
        let mut wm = WindowManager::new(800.0, 500.0);
        wm.open(WindowId::Videos);
        let geometry = wm.get(WindowId::Videos).map(|s| s.geometry);
        assert_eq!(geometry, Some(Geometry::new(50.0, 30.0, 750.0, 500.0)));
    }

    #[test]
    fn mobile_windows_fill_the_screen() {
        let mut wm = WindowManager::new(768.0, 1000.0);
        wm.open(WindowId::News);
        assert_eq!(wm.get(WindowId::News).map(|s| s.geometry), Some(Geometry::new(0.0, 0.0, 768.0, 968.0)));

        wm.toggle_maximize(WindowId::News);
        assert!(!wm.get(WindowId::News).is_some_and(|s| s.maximized));
        assert!(!wm.begin_drag(WindowId::News, Point::new(10.0, 10.0)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut wm = desktop();
        wm.open_key("recycle-bin");
        assert!(wm.taskbar().is_empty());
        wm.open_key("merch");
        assert!(wm.is_open(WindowId::Merch));
    }

    #[test]
    fn reopening_restores_and_focuses() {
        let mut wm = desktop();
        wm.open(WindowId::About);
        wm.open(WindowId::News);
        wm.minimize(WindowId::About);
        wm.open(WindowId::About);

        let about = wm.get(WindowId::About);
        assert!(about.is_some_and(|s| !s.minimized));
        assert_eq!(wm.active(), Some(WindowId::About));
        assert_eq!(wm.taskbar().len(), 2);
    }

    #[test]
    fn closing_focuses_most_recent_visible() {
        let mut wm = desktop();
        wm.open(WindowId::About);
        wm.open(WindowId::Shows);
        wm.open(WindowId::Merch);
        wm.focus(WindowId::About);
        wm.minimize(WindowId::Shows);

        wm.close(WindowId::About);
        assert_eq!(wm.active(), Some(WindowId::Merch));
        assert!(!wm.is_open(WindowId::About));

        wm.minimize(WindowId::Merch);
        assert_eq!(wm.active(), None);
    }

    #[test]
    fn maximize_then_restore_is_exact() {
        let mut wm = desktop();
        wm.open(WindowId::Shows);
        wm.begin_drag(WindowId::Shows, Point::new(400.0, 200.0));
        wm.drag_to(Point::new(433.5, 217.25));
        wm.end_drag();
        let before = wm.get(WindowId::Shows).map(|s| s.geometry);

        wm.toggle_maximize(WindowId::Shows);
        assert_eq!(wm.frame(WindowId::Shows), Some(Geometry::new(0.0, 0.0, 1280.0, 768.0)));
        assert!(!wm.begin_drag(WindowId::Shows, Point::new(10.0, 10.0)));

        wm.toggle_maximize(WindowId::Shows);
        assert_eq!(wm.get(WindowId::Shows).map(|s| s.geometry), before);
    }

    #[test]
    fn drags_are_clamped() {
        let mut wm = desktop();
        wm.open(WindowId::About);
        assert!(wm.begin_drag(WindowId::About, Point::new(300.0, 140.0)));

        wm.drag_to(Point::new(-1000.0, -1000.0));
        let geometry = wm.frame(WindowId::About).unwrap_or_default();
        assert_eq!((geometry.left, geometry.top), (0.0, 0.0));

        wm.drag_to(Point::new(5000.0, 5000.0));
        let geometry = wm.frame(WindowId::About).unwrap_or_default();
        assert_eq!((geometry.left, geometry.top), (1180.0, 700.0));

        wm.end_drag();
        wm.drag_to(Point::new(300.0, 140.0));
        assert_eq!(wm.frame(WindowId::About).map(|g| g.left), Some(1180.0));
    }

    #[test]
    fn taskbar_clicks_cycle() {
        let mut wm = desktop();
        wm.open(WindowId::About);
        wm.open(WindowId::News);

        // Active: minimize.
        wm.click_taskbar(WindowId::News);
        assert!(wm.get(WindowId::News).is_some_and(|s| s.minimized));
        assert_eq!(wm.active(), Some(WindowId::About));

        // Minimized: restore and focus.
        wm.click_taskbar(WindowId::News);
        assert_eq!(wm.active(), Some(WindowId::News));

        // Inactive: focus.
        wm.click_taskbar(WindowId::About);
        assert_eq!(wm.active(), Some(WindowId::About));

        let buttons = wm.taskbar();
        assert_eq!(buttons.iter().map(|b| b.id).collect::<Vec<_>>(), vec![WindowId::About, WindowId::News]);
        assert!(buttons[0].active);
        assert!(!buttons[1].active);
    }

    #[test]
    fn topmost_window_wins_hit_tests() {
        let mut wm = desktop();
        wm.open(WindowId::About);
        wm.open(WindowId::Shows);
        let overlap = Point::new(400.0, 300.0);

        assert_eq!(wm.window_at(overlap), Some(WindowId::Shows));
        wm.focus(WindowId::About);
        assert_eq!(wm.window_at(overlap), Some(WindowId::About));
        assert_eq!(wm.z_order(), vec![WindowId::Shows, WindowId::About]);
        assert_eq!(wm.window_at(Point::new(5.0, 5.0)), None);
    }
}
