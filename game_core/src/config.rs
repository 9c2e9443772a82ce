use crate::{Params, Side};
use glam::DVec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub box_width: f64,
    pub wall_height: f64,
    pub center_line_step: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    pub edge_offset: f64,
    pub ball_size: f64,
    pub ball_speed_initial: f64,
    pub ball_speed_increase: f64,
    pub ball_speed_max: f64,
    pub goal_depth: f64,
    pub goal_margin: f64,
    pub score_offset: f64,
    pub pause_ticks: u32,
    pub max_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            box_width: Params::BOX_WIDTH,
            wall_height: Params::WALL_HEIGHT,
            center_line_step: Params::CENTER_LINE_STEP,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            edge_offset: Params::EDGE_OFFSET,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            goal_depth: Params::GOAL_DEPTH,
            goal_margin: Params::GOAL_MARGIN,
            score_offset: Params::SCORE_OFFSET,
            pause_ticks: Params::PAUSE_TICKS,
            max_score: Params::MAX_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for a canvas of the given size
    pub fn with_canvas(width: f64, height: f64) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Center point of the canvas
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Get the left edge X position for a paddle
    pub fn paddle_x(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.edge_offset,
            Side::Right => self.canvas_width - self.edge_offset - self.paddle_width,
        }
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self) -> f64 {
        self.center().y - self.paddle_height / 2.0
    }

    /// Top-left corner of a centered ball
    pub fn ball_spawn(&self) -> DVec2 {
        self.center() - DVec2::splat(self.ball_size / 2.0)
    }

    /// Whether a score has gone past the last playable point
    pub fn is_final_score(&self, score: u8) -> bool {
        score > self.max_score
    }
}
