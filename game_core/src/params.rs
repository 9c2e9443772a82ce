/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (replaced by the real canvas size at startup)
    pub const CANVAS_WIDTH: f64 = 800.0;
    pub const CANVAS_HEIGHT: f64 = 600.0;

    // Court
    pub const BOX_WIDTH: f64 = 20.0;
    pub const WALL_HEIGHT: f64 = Self::BOX_WIDTH;
    pub const CENTER_LINE_STEP: f64 = 1.93 * Self::BOX_WIDTH;

    // Paddle
    pub const PADDLE_WIDTH: f64 = Self::BOX_WIDTH;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    pub const PADDLE_SPEED: f64 = 8.0; // pixels per tick
    pub const EDGE_OFFSET: f64 = 30.0;

    // Ball
    pub const BALL_SIZE: f64 = Self::BOX_WIDTH;
    pub const BALL_SPEED_INITIAL: f64 = 8.0;
    pub const BALL_SPEED_INCREASE: f64 = 1.0; // added on each paddle hit
    pub const BALL_SPEED_MAX: f64 = 15.0;

    // Goals sit outside the canvas so a goal only counts once the ball has left it
    pub const GOAL_DEPTH: f64 = 1000.0;
    pub const GOAL_MARGIN: f64 = Self::BOX_WIDTH;

    // Score digits
    pub const SCORE_OFFSET: f64 = 70.0;

    // Match
    pub const PAUSE_TICKS: u32 = 30;
    pub const MAX_SCORE: u8 = 9; // a score above this ends the match
}
