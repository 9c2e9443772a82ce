use crate::Config;
use glam::DVec2;

/// Axis-aligned bounding box stored as center + half size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    center: DVec2,
    extent: DVec2,
}

impl Aabb {
    pub fn new(center: DVec2, extent: DVec2) -> Self {
        Self {
            center,
            extent: extent.abs(),
        }
    }

    /// Build from a top-left corner and a size
    pub fn from_rect(pos: DVec2, size: DVec2) -> Self {
        let extent = size * 0.5;
        Self::new(pos + extent, extent)
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn extent(&self) -> DVec2 {
        self.extent
    }

    pub fn set_center(&mut self, center: DVec2) {
        self.center = center;
    }

    /// Translate the box by a delta
    pub fn translate(&mut self, delta: DVec2) {
        self.center += delta;
    }

    /// Separating axis test. Boxes that only touch do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let distance = (self.center - other.center).abs();
        let reach = self.extent + other.extent;
        distance.x < reach.x && distance.y < reach.y
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.extent.y
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.extent.y
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.extent.x
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.extent.x
    }
}

/// A filled rectangle given by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }
}

/// Static court geometry
#[derive(Debug, Clone)]
pub struct CourtMap {
    pub top_wall: Rect,
    pub bottom_wall: Rect,
    pub left_goal: Rect,
    pub right_goal: Rect,
}

impl CourtMap {
    pub fn new(config: &Config) -> Self {
        let width = config.canvas_width;
        let height = config.canvas_height;

        // Goal zones only begin once the ball has completely left the canvas
        let left_goal = Rect::new(
            -config.goal_depth,
            0.0,
            config.goal_depth - config.goal_margin,
            height,
        );
        let right_goal = Rect::new(width + config.goal_margin, 0.0, config.goal_depth, height);

        Self {
            top_wall: Rect::new(0.0, 0.0, width, config.wall_height),
            bottom_wall: Rect::new(0.0, height - config.wall_height, width, config.wall_height),
            left_goal,
            right_goal,
        }
    }
}
