use std::time::{Duration, Instant};

use super::geometry::{Point, WheelGeometry, wrapped_delta};

/// Rotation needed for one menu step.
pub const MENU_STEP_DEGREES: f64 = 15.0;
/// Rotation needed for one volume step; volume is a little more sensitive.
pub const VOLUME_STEP_DEGREES: f64 = 12.0;

pub const TAP_MAX_DURATION: Duration = Duration::from_millis(300);
pub const TAP_MAX_TRAVEL_PX: f64 = 10.0;
/// Fraction of the radius taken by the center button.
pub const DEAD_ZONE_RATIO: f64 = 0.35;

/// The four labelled sectors of the wheel plus the center button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapZone {
    Menu,
    Play,
    Previous,
    Next,
    Center,
}

impl TapZone {
    /// Classifies an angle in `[0, 360)` into one of the four outer sectors.
    /// Every boundary is half-open so each angle lands in exactly one zone.
    pub fn from_angle(angle: f64) -> Self {
        if (225.0..315.0).contains(&angle) {
            TapZone::Menu
        } else if (45.0..135.0).contains(&angle) {
            TapZone::Play
        } else if (135.0..225.0).contains(&angle) {
            TapZone::Previous
        } else {
            TapZone::Next
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TapZone::Menu => "MENU",
            TapZone::Play => "▶❚❚",
            TapZone::Previous => "◀◀",
            TapZone::Next => "▶▶",
            TapZone::Center => "",
        }
    }
}

/// Adds `delta` to the accumulator and reports a step once the magnitude
/// reaches `threshold`. Returns the new accumulator and the step direction.
pub fn accumulate(accumulated: f64, delta: f64, threshold: f64) -> (f64, Option<i32>) {
    let next = accumulated + delta;
    if next.abs() >= threshold {
        let direction = if next > 0.0 { 1 } else { -1 };
        (0.0, Some(direction))
    } else {
        (next, None)
    }
}

/// Tracks a single press/drag/release cycle on the wheel.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    rotating: bool,
    pressed: bool,
    last_angle: Option<f64>,
    accumulated: f64,
    pressed_at: Option<Instant>,
    press_point: Point,
    moved: bool,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation is tracked only for presses on the ring, not the center button.
    pub fn is_active(&self) -> bool {
        self.rotating
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn press(&mut self, wheel: &WheelGeometry, point: Point, now: Instant) {
        self.pressed = true;
        self.rotating = !wheel.in_dead_zone(point, DEAD_ZONE_RATIO);
        self.last_angle = self.rotating.then(|| wheel.angle_of(point));
        self.accumulated = 0.0;
        self.pressed_at = Some(now);
        self.press_point = point;
        self.moved = false;
    }

    /// Feeds a pointer sample. Returns a step direction (+1 clockwise) when
    /// the accumulated rotation crosses `threshold`.
    pub fn move_to(&mut self, wheel: &WheelGeometry, point: Point, threshold: f64) -> Option<i32> {
        if !self.pressed {
            return None;
        }

        if point.distance(self.press_point) > TAP_MAX_TRAVEL_PX {
            self.moved = true;
        }

        if !self.rotating {
            return None;
        }

        let angle = wheel.angle_of(point);
        let step = self.last_angle.and_then(|last| {
            let (accumulated, step) = accumulate(self.accumulated, wrapped_delta(last, angle), threshold);
            self.accumulated = accumulated;
            step
        });
        self.last_angle = Some(angle);

        if step.is_some() {
            self.moved = true;
        }
        step
    }

    /// Ends the gesture. A quick, short press that never stepped is a tap,
    /// classified by where the pointer was released.
    pub fn release(&mut self, wheel: &WheelGeometry, point: Point, now: Instant) -> Option<TapZone> {
        if !self.pressed {
            return None;
        }

        let quick = self
            .pressed_at
            .is_some_and(|at| now.saturating_duration_since(at) < TAP_MAX_DURATION);
        let still = !self.moved && point.distance(self.press_point) < TAP_MAX_TRAVEL_PX;

        self.reset();

        if !(quick && still) {
            return None;
        }

        if wheel.in_dead_zone(point, DEAD_ZONE_RATIO) {
            Some(TapZone::Center)
        } else {
            Some(TapZone::from_angle(wheel.angle_of(point)))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
