//! The Windows 98 skin: boot screen, icons, start menu, taskbar and the
//! window stack.

pub mod content;
pub mod layout;
pub mod wm;

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use chrono::Timelike;
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::{
    shell::{Effect, Key, Library, ShellInput, Skin, Timer},
    wheel::Point,
};

use layout::{DesktopLayout, TitleButton};
use wm::{WindowId, WindowManager};

pub const BOOT_DURATION: Duration = Duration::from_millis(2500);
pub const BOOT_FADE: Duration = Duration::from_millis(500);
pub const DOUBLE_CLICK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Booting,
    Fading,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartEntry {
    Open(WindowId),
    SwitchSkin,
}

pub const START_MENU: &[(&str, StartEntry)] = &[
    ("About Liim", StartEntry::Open(WindowId::About)),
    ("Videos", StartEntry::Open(WindowId::Videos)),
    ("News", StartEntry::Open(WindowId::News)),
    ("Shows", StartEntry::Open(WindowId::Shows)),
    ("Merch", StartEntry::Open(WindowId::Merch)),
    ("iPod Mode", StartEntry::SwitchSkin),
];

pub const ICONS: &[(&str, WindowId)] = &[
    ("Liim.exe", WindowId::About),
    ("Videos", WindowId::Videos),
    ("News", WindowId::News),
    ("Shows", WindowId::Shows),
    ("Merch", WindowId::Merch),
];

/// `h:mm AM/PM`, as on the taskbar clock.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    let (pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if pm { "PM" } else { "AM" })
}

pub struct Desktop {
    wm: WindowManager,
    layout: DesktopLayout,
    boot: BootPhase,
    boot_generation: u64,
    start_open: bool,
    selected_icon: Option<usize>,
    last_icon_click: Option<(usize, Instant)>,
    scroll: HashMap<WindowId, usize>,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop {
    pub fn new() -> Self {
        Self {
            wm: WindowManager::default(),
            layout: DesktopLayout::default(),
            boot: BootPhase::Done,
            boot_generation: 0,
            start_open: false,
            selected_icon: None,
            last_icon_click: None,
            scroll: HashMap::new(),
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.layout = DesktopLayout::new(area);
        let (width, height) = self.layout.viewport_px();
        self.wm.set_viewport(width, height);
    }

    /// Shows the boot screen and schedules its fade.
    pub fn boot(&mut self) -> Vec<Effect> {
        self.boot = BootPhase::Booting;
        self.boot_generation += 1;
        vec![Effect::Schedule {
            timer: Timer::BootFade(self.boot_generation),
            after: BOOT_DURATION,
        }]
    }

    pub fn handle(&mut self, input: ShellInput, now: Instant, library: &mut Library) -> Vec<Effect> {
        match input {
            ShellInput::Resize(area) => {
                self.set_viewport(area);
                Vec::new()
            }
            ShellInput::Timer(timer) => self.timer(timer),
            _ if self.boot != BootPhase::Done => Vec::new(),
            ShellInput::PointerDown(point) => self.pointer_down(point, now, library),
            ShellInput::PointerMove(point) => {
                self.wm.drag_to(point);
                Vec::new()
            }
            ShellInput::PointerUp(_) => {
                self.wm.end_drag();
                Vec::new()
            }
            ShellInput::Scroll { at, delta } => {
                if let Some(id) = self.wm.window_at(at) {
                    self.scroll_content(id, if delta > 0.0 { 1 } else { -1 }, library);
                }
                Vec::new()
            }
            ShellInput::Key(key) => self.key(key, library),
            _ => Vec::new(),
        }
    }

    fn timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::BootFade(generation) if generation == self.boot_generation => {
                self.boot = BootPhase::Fading;
                vec![Effect::Schedule {
                    timer: Timer::BootDone(generation),
                    after: BOOT_FADE,
                }]
            }
            Timer::BootDone(generation) if generation == self.boot_generation => {
                self.boot = BootPhase::Done;
                self.wm.open(WindowId::About);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn key(&mut self, key: Key, library: &Library) -> Vec<Effect> {
        match key {
            Key::Escape => {
                if self.start_open {
                    self.start_open = false;
                } else if let Some(id) = self.wm.active() {
                    self.close(id);
                }
            }
            Key::Up | Key::Down => {
                if let Some(id) = self.wm.active() {
                    self.scroll_content(id, if key == Key::Down { 1 } else { -1 }, library);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn pointer_down(&mut self, point: Point, now: Instant, library: &Library) -> Vec<Effect> {
        let (column, row) = point.cell();
        let position = Position::new(column, row);

        if self.start_open {
            if let Some(index) = self.layout.start_entry_at(position, START_MENU.len()) {
                self.start_open = false;
                return self.start_entry(START_MENU[index].1);
            }
            self.start_open = false;
            if self.layout.start_button.contains(position) {
                return Vec::new();
            }
        }

        if self.layout.taskbar.contains(position) {
            if self.layout.start_button.contains(position) {
                self.start_open = true;
            } else {
                let buttons = self.wm.taskbar();
                if let Some(index) = self.layout.task_button_at(position, buttons.len()) {
                    self.wm.click_taskbar(buttons[index].id);
                }
            }
            return Vec::new();
        }

        if let Some(id) = self.wm.window_at(point) {
            return self.click_window(id, point, position, library);
        }

        match self.layout.icon_at(position, ICONS.len()) {
            Some(index) => {
                let double = self
                    .last_icon_click
                    .is_some_and(|(last, at)| last == index && now.saturating_duration_since(at) < DOUBLE_CLICK);
                self.selected_icon = Some(index);
                if double {
                    self.last_icon_click = None;
                    self.open(ICONS[index].1);
                } else {
                    self.last_icon_click = Some((index, now));
                }
            }
            None => {
                self.selected_icon = None;
                self.last_icon_click = None;
            }
        }
        Vec::new()
    }

    fn click_window(&mut self, id: WindowId, point: Point, position: Position, library: &Library) -> Vec<Effect> {
        let Some(rect) = self.window_rect(id) else {
            return Vec::new();
        };

        if let Some(button) = DesktopLayout::title_button_at(rect, position) {
            match button {
                TitleButton::Minimize => self.wm.minimize(id),
                TitleButton::Maximize => self.wm.toggle_maximize(id),
                TitleButton::Close => self.close(id),
            }
            return Vec::new();
        }

        if DesktopLayout::title_bar(rect).contains(position) {
            if !self.wm.begin_drag(id, point) {
                self.wm.focus(id);
            }
            return Vec::new();
        }

        self.wm.focus(id);
        let area = DesktopLayout::content(rect);
        if !area.contains(position) {
            return Vec::new();
        }

        let index = self.scroll_offset(id) + (position.y - area.y) as usize;
        match content::lines(id, library).get(index).and_then(|line| line.url()) {
            Some(url) => vec![Effect::OpenExternal(url.to_string())],
            None => Vec::new(),
        }
    }

    fn start_entry(&mut self, entry: StartEntry) -> Vec<Effect> {
        match entry {
            StartEntry::Open(id) => {
                self.open(id);
                Vec::new()
            }
            StartEntry::SwitchSkin => vec![Effect::SwitchSkin(Skin::Ipod)],
        }
    }

    fn open(&mut self, id: WindowId) {
        if !self.wm.is_open(id) {
            self.scroll.remove(&id);
        }
        self.wm.open(id);
    }

    fn close(&mut self, id: WindowId) {
        debug!("Closing {}", id);
        self.wm.close(id);
        self.scroll.remove(&id);
    }

    fn scroll_content(&mut self, id: WindowId, direction: i64, library: &Library) {
        let rows = self
            .window_rect(id)
            .map(|rect| DesktopLayout::content(rect).height as usize)
            .unwrap_or_default();
        let max = content::lines(id, library).len().saturating_sub(rows);
        let offset = self.scroll.entry(id).or_default();
        *offset = (*offset as i64 + direction).clamp(0, max as i64) as usize;
    }

    pub fn window_rect(&self, id: WindowId) -> Option<Rect> {
        self.wm.frame(id).map(|frame| self.layout.window(frame))
    }

    pub fn scroll_offset(&self, id: WindowId) -> usize {
        self.scroll.get(&id).copied().unwrap_or_default()
    }

    pub fn wm(&self) -> &WindowManager {
        &self.wm
    }

    pub fn layout(&self) -> &DesktopLayout {
        &self.layout
    }

    pub fn boot_phase(&self) -> BootPhase {
        self.boot
    }

    pub fn start_open(&self) -> bool {
        self.start_open
    }

    pub fn selected_icon(&self) -> Option<usize> {
        self.selected_icon
    }
}
