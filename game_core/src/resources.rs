/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Winner once a score has passed `max_score`
    pub fn winner(&self, max_score: u8) -> Option<crate::Side> {
        if self.left > max_score {
            Some(crate::Side::Left)
        } else if self.right > max_score {
            Some(crate::Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform's entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What happened to the ball during the last tick. At most one flag is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Tick countdown that freezes the court at match start and after a goal
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseState {
    pub remaining: u32, // Ticks left before physics resumes (0 = running)
}

impl PauseState {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Count one tick down. Returns true while the court is still paused.
    pub fn tick(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        assert_eq!(score.right, 0);
        score.increment_right();
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_winner_needs_more_than_max() {
        let mut score = Score { left: 9, right: 9 };
        assert_eq!(score.winner(9), None);
        score.increment_right();
        assert_eq!(score.winner(9), Some(Side::Right));
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
        };
        events.clear();
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_pause_counts_down_to_zero() {
        let mut pause = PauseState::new(2);
        assert!(pause.tick());
        assert!(pause.tick());
        assert_eq!(pause.remaining, 0);
        assert!(!pause.tick(), "A finished pause lets physics run");
        assert_eq!(pause.remaining, 0);
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..8).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }
}
