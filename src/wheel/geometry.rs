/// Terminal cells are mapped onto a virtual pixel grid so that the wheel is
/// round in angle space even though cells are roughly twice as tall as wide.
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of a terminal cell, in virtual pixels.
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            x: column as f64 * CELL_WIDTH_PX + CELL_WIDTH_PX / 2.0,
            y: row as f64 * CELL_HEIGHT_PX + CELL_HEIGHT_PX / 2.0,
        }
    }

    /// The terminal cell containing this point.
    pub fn cell(self) -> (u16, u16) {
        (
            (self.x.max(0.0) / CELL_WIDTH_PX) as u16,
            (self.y.max(0.0) / CELL_HEIGHT_PX) as u16,
        )
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Position and size of the click wheel, refreshed on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
}

impl WheelGeometry {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Geometry of a wheel inscribed in a block of cells. The radius is half
    /// of the block's width in virtual pixels.
    pub fn from_cells(x: u16, y: u16, width: u16, height: u16) -> Self {
        let left = x as f64 * CELL_WIDTH_PX;
        let top = y as f64 * CELL_HEIGHT_PX;
        let w = width as f64 * CELL_WIDTH_PX;
        let h = height as f64 * CELL_HEIGHT_PX;

        Self {
            center: Point::new(left + w / 2.0, top + h / 2.0),
            radius: w / 2.0,
        }
    }

    /// Angle of `point` around the center in degrees, in `[0, 360)`.
    ///
    /// Screen coordinates grow downward, so 90° is the bottom of the wheel
    /// and 270° the top.
    pub fn angle_of(&self, point: Point) -> f64 {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        normalize_degrees(dy.atan2(dx).to_degrees())
    }

    pub fn distance_from_center(&self, point: Point) -> f64 {
        self.center.distance(point)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.distance_from_center(point) <= self.radius
    }

    /// Whether `point` falls inside the central button area.
    pub fn in_dead_zone(&self, point: Point, ratio: f64) -> bool {
        self.distance_from_center(point) < self.radius * ratio
    }
}

pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        // -1e-14 % 360 + 360 rounds to exactly 360.0
        let shifted = wrapped + 360.0;
        if shifted >= 360.0 { 0.0 } else { shifted }
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `[-180, 180]`.
pub fn wrapped_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    }
    if delta < -180.0 {
        delta += 360.0;
    }
    delta
}
