use crate::{Aabb, Config, CourtMap, GameRng, Rect, Surface};
use glam::DVec2;

/// Which side of the court a paddle, goal or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

/// Vertical movement intent of a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Movement {
    Up,
    #[default]
    None,
    Down,
}

impl Movement {
    /// -1 = up, 0 = stop, 1 = down
    pub fn dir(self) -> f64 {
        match self {
            Movement::Up => -1.0,
            Movement::None => 0.0,
            Movement::Down => 1.0,
        }
    }
}

/// Top or bottom wall
#[derive(Debug, Clone)]
pub struct Wall {
    pub rect: Rect,
    pub aabb: Aabb,
}

impl Wall {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            aabb: rect.aabb(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(&self.rect);
    }
}

/// Invisible scoring zone behind a paddle
#[derive(Debug, Clone)]
pub struct Goal {
    pub aabb: Aabb,
}

impl Goal {
    pub fn new(rect: Rect) -> Self {
        Self { aabb: rect.aabb() }
    }
}

/// Player paddle. Spawned together with its [`Side`] and a [`PaddleIntent`].
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: DVec2, // top-left corner, x never changes
    pub size: DVec2,
    pub aabb: Aabb,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        let pos = DVec2::new(config.paddle_x(side), config.paddle_spawn_y());
        let size = DVec2::new(config.paddle_width, config.paddle_height);
        Self {
            pos,
            size,
            aabb: Aabb::from_rect(pos, size),
        }
    }

    /// Place the paddle at `y` and keep the AABB in sync
    pub fn set_y(&mut self, y: f64) {
        self.pos.y = y;
        self.aabb.set_center(self.pos + self.aabb.extent());
    }

    /// Re-center vertically
    pub fn reset(&mut self, config: &Config) {
        self.set_y(config.paddle_spawn_y());
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }
}

/// Which way the player wants the paddle to go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub movement: Movement,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: DVec2, // top-left corner
    pub size: DVec2,
    pub aabb: Aabb,
    pub velocity: f64,
    /// One of the four diagonals (±0.5, ±0.5), deliberately not unit length
    pub direction: DVec2,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        let pos = config.ball_spawn();
        let size = DVec2::splat(config.ball_size);
        Self {
            pos,
            size,
            aabb: Aabb::from_rect(pos, size),
            velocity: config.ball_speed_initial,
            direction: DVec2::new(-0.5, 0.5),
        }
    }

    /// Place the top-left corner at `pos` and keep the AABB in sync
    pub fn set_pos(&mut self, pos: DVec2) {
        self.pos = pos;
        self.aabb.set_center(pos + self.aabb.extent());
    }

    /// Pick one of the four diagonals uniformly
    pub fn randomize_direction(&mut self, rng: &mut GameRng) {
        use rand::Rng;
        self.direction = match rng.0.gen_range(0..4) {
            0 => DVec2::new(0.5, 0.5),
            1 => DVec2::new(0.5, -0.5),
            2 => DVec2::new(-0.5, 0.5),
            _ => DVec2::new(-0.5, -0.5),
        };
    }

    /// Re-center, serve in a random diagonal at the initial speed
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.set_pos(config.ball_spawn());
        self.randomize_direction(rng);
        self.velocity = config.ball_speed_initial;
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }
}

/// Top and bottom walls
#[derive(Debug, Clone)]
pub struct Walls {
    pub top: Wall,
    pub bottom: Wall,
}

impl Walls {
    pub fn new(map: &CourtMap) -> Self {
        Self {
            top: Wall::new(map.top_wall),
            bottom: Wall::new(map.bottom_wall),
        }
    }
}

/// Goal zones behind each paddle
#[derive(Debug, Clone)]
pub struct Goals {
    pub left: Goal,
    pub right: Goal,
}

impl Goals {
    pub fn new(map: &CourtMap) -> Self {
        Self {
            left: Goal::new(map.left_goal),
            right: Goal::new(map.right_goal),
        }
    }
}

/// Dashed decoration down the middle of the court. Never collides.
#[derive(Debug, Clone)]
pub struct CenterLine {
    x: f64,
    top: f64,
    bottom: f64,
    box_width: f64,
    step: f64,
}

impl CenterLine {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.center().x - config.box_width / 2.0,
            top: config.wall_height,
            bottom: config.canvas_height,
            box_width: config.box_width,
            step: config.center_line_step,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let mut y = self.top;
        while y < self.bottom {
            surface.fill_rect(self.x, y, self.box_width, self.box_width);
            y += self.step;
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment {
    Top,
    Middle,
    Bottom,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
    Center,
}

/// Segments lit for each digit. "1" uses the single center bar.
const DIGIT_SEGMENTS: [&[Segment]; 10] = {
    use Segment::*;
    [
        &[Top, Bottom, LeftTop, LeftBottom, RightTop, RightBottom],
        &[Center],
        &[Top, Middle, Bottom, LeftBottom, RightTop],
        &[Top, Middle, Bottom, RightTop, RightBottom],
        &[Middle, LeftTop, RightTop, RightBottom],
        &[Top, Middle, Bottom, LeftTop, RightBottom],
        &[Top, Middle, Bottom, LeftTop, LeftBottom, RightBottom],
        &[Top, RightTop, RightBottom],
        &[Top, Middle, Bottom, LeftTop, LeftBottom, RightTop, RightBottom],
        &[Top, Middle, Bottom, LeftTop, RightTop, RightBottom],
    ]
};

/// Seven-segment style score display
#[derive(Debug, Clone)]
pub struct ScoreDigit {
    pub rect: Rect,
    value: u8,
}

impl ScoreDigit {
    pub fn new(rect: Rect) -> Self {
        Self { rect, value: 0 }
    }

    /// Score display for one side of the court
    pub fn for_side(side: Side, config: &Config) -> Self {
        let size = DVec2::new(config.canvas_width / 10.0, config.canvas_height / 6.0);
        let center_x = config.center().x;
        let x = match side {
            Side::Left => center_x - (config.score_offset + size.x),
            Side::Right => center_x + config.score_offset,
        };
        Self::new(Rect::new(x, config.canvas_height / 10.0, size.x, size.y))
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    fn segment_rect(&self, segment: Segment) -> Rect {
        let Rect { pos, size } = self.rect;
        let (x, y, w, h) = (pos.x, pos.y, size.x, size.y);
        let t = h / 5.0;
        match segment {
            Segment::Top => Rect::new(x, y, w, t),
            Segment::Middle => Rect::new(x, y + h / 2.0 - t / 2.0, w, t),
            Segment::Bottom => Rect::new(x, y + (h - t), w, t),
            Segment::LeftTop => Rect::new(x, y, t, h / 2.0),
            Segment::LeftBottom => Rect::new(x, y + h / 2.0, t, h / 2.0),
            Segment::RightTop => Rect::new(x + w - t, y, t, h / 2.0),
            Segment::RightBottom => Rect::new(x + w - t, y + h / 2.0, t, h / 2.0),
            Segment::Center => Rect::new(x + w / 2.0 - t, y, t, h),
        }
    }

    /// Values outside 0..=9 draw nothing
    pub fn draw(&self, surface: &mut dyn Surface) {
        let Some(segments) = DIGIT_SEGMENTS.get(self.value as usize) else {
            return;
        };
        for &segment in segments.iter() {
            surface.fill(&self.segment_rect(segment));
        }
    }
}
