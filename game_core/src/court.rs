//! The match itself: paddles, ball, walls and goals

use crate::{
    create_ball, create_paddle, step, Ball, CenterLine, Config, CourtMap,
    Events, Goals, Key, Movement, Paddle, PaddleIntent, PauseState, SceneAction, ScoreDigit,
    Session, Side, Surface, Walls,
};
use hecs::{Entity, Ref, World};

/// All entities of the court scene. Paddles and the ball live in `world`,
/// walls and goals are fixed map geometry.
pub struct Court {
    pub world: World,
    pub walls: Walls,
    pub goals: Goals,
    pub center_line: CenterLine,
    pub left_score: ScoreDigit,
    pub right_score: ScoreDigit,
    pub pause: PauseState,
    pub events: Events,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
}

impl Court {
    pub fn new(config: &Config) -> Self {
        let map = CourtMap::new(config);
        let mut world = World::new();
        let left_paddle = create_paddle(&mut world, Side::Left, config);
        let right_paddle = create_paddle(&mut world, Side::Right, config);
        let ball = create_ball(&mut world, config);
        Self {
            world,
            walls: Walls::new(&map),
            goals: Goals::new(&map),
            center_line: CenterLine::new(config),
            left_score: ScoreDigit::for_side(Side::Left, config),
            right_score: ScoreDigit::for_side(Side::Right, config),
            pause: PauseState::new(config.pause_ticks),
            events: Events::new(),
            left_paddle,
            right_paddle,
            ball,
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Ref<'_, Paddle>> {
        self.world.get::<&Paddle>(self.paddle_entity(side)).ok()
    }

    pub fn ball(&self) -> Option<Ref<'_, Ball>> {
        self.world.get::<&Ball>(self.ball).ok()
    }

    pub fn movement(&self, side: Side) -> Movement {
        self.world
            .get::<&PaddleIntent>(self.paddle_entity(side))
            .map(|intent| intent.movement)
            .unwrap_or_default()
    }

    pub fn set_movement(&mut self, side: Side, movement: Movement) {
        let entity = self.paddle_entity(side);
        if let Ok(intent) = self.world.query_one_mut::<&mut PaddleIntent>(entity) {
            intent.movement = movement;
        }
    }

    pub fn enter(&mut self, session: &mut Session) {
        session.score.reset();
        session.matches_started += 1;
        self.left_score.set_value(0);
        self.right_score.set_value(0);
        self.pause.start(session.config.pause_ticks);
        log::info!("Match {} started", session.matches_started);
    }

    /// Stop both paddles. Safe to call more than once.
    pub fn exit(&mut self) {
        self.set_movement(Side::Left, Movement::None);
        self.set_movement(Side::Right, Movement::None);
    }

    pub fn update(&mut self, session: &mut Session) -> Option<SceneAction> {
        let winner = step(
            self,
            &mut session.score,
            &mut session.rng,
            &session.config,
        )?;
        log::info!("{:?} player won the match", winner);
        Some(SceneAction::MatchOver)
    }

    /// Back to front: walls, center line, scores, paddles, ball
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();

        self.walls.top.draw(surface);
        self.walls.bottom.draw(surface);

        self.center_line.draw(surface);

        self.left_score.draw(surface);
        self.right_score.draw(surface);

        for side in [Side::Left, Side::Right] {
            if let Some(paddle) = self.paddle(side) {
                paddle.draw(surface);
            }
        }

        if let Some(ball) = self.ball() {
            ball.draw(surface);
        }
    }

    /// A pressed key takes over the paddle's direction
    pub fn key_down(&mut self, key: Key) {
        if let Some((side, movement)) = key.paddle_control() {
            self.set_movement(side, movement);
        }
    }

    /// A released key only stops the paddle if it was the one driving it
    pub fn key_up(&mut self, key: Key) {
        if let Some((side, movement)) = key.paddle_control() {
            if self.movement(side) == movement {
                self.set_movement(side, Movement::None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};
    use crate::{GameRng, Rect, Score};
    use glam::DVec2;

    fn entered_court() -> (Court, Session) {
        let mut session = Session::new(Config::new(), GameRng::new(12345));
        let mut court = Court::new(&session.config);
        court.enter(&mut session);
        (court, session)
    }

    #[test]
    fn test_enter_resets_score_and_pauses() {
        let mut session = Session::new(Config::new(), GameRng::new(1));
        session.score = Score { left: 4, right: 10 };
        let mut court = Court::new(&session.config);

        court.enter(&mut session);

        assert_eq!(session.score, Score::new());
        assert_eq!(session.matches_started, 1);
        assert_eq!(court.pause.remaining, 30);
    }

    #[test]
    fn test_pause_freezes_physics() {
        let (mut court, mut session) = entered_court();
        court.set_movement(Side::Left, Movement::Down);
        let ball_before = court.ball().unwrap().pos;

        for tick in 0..30 {
            court.update(&mut session);
            assert_eq!(court.ball().unwrap().pos, ball_before, "tick {tick}");
        }
        assert_eq!(court.pause.remaining, 0);
        assert_eq!(court.paddle(Side::Left).unwrap().pos.y, 250.0);

        court.update(&mut session);
        assert_eq!(court.ball().unwrap().pos, ball_before + DVec2::new(-4.0, 4.0));
        assert_eq!(court.paddle(Side::Left).unwrap().pos.y, 258.0);
    }

    #[test]
    fn test_key_release_only_stops_matching_direction() {
        let (mut court, _session) = entered_court();

        court.key_down(Key::RightUp);
        assert_eq!(court.movement(Side::Right), Movement::Up);

        court.key_down(Key::RightDown);
        court.key_up(Key::RightUp);
        assert_eq!(
            court.movement(Side::Right),
            Movement::Down,
            "Releasing up while moving down keeps moving"
        );

        court.key_up(Key::RightDown);
        assert_eq!(court.movement(Side::Right), Movement::None);

        court.key_down(Key::LeftUp);
        court.key_down(Key::Confirm);
        assert_eq!(court.movement(Side::Left), Movement::Up);
        assert_eq!(court.movement(Side::Right), Movement::None);
    }

    #[test]
    fn test_exit_is_idempotent() {
        let (mut court, _session) = entered_court();
        court.key_down(Key::LeftDown);
        court.exit();
        court.exit();
        assert_eq!(court.movement(Side::Left), Movement::None);
    }

    #[test]
    fn test_draw_order() {
        let (court, _session) = entered_court();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        court.draw(&mut surface);

        let calls = surface.calls();
        assert_eq!(calls[0], DrawCall::Clear(Rect::new(0.0, 0.0, 800.0, 600.0)));
        assert_eq!(calls[1], DrawCall::Fill(Rect::new(0.0, 0.0, 800.0, 20.0)));
        assert_eq!(calls[2], DrawCall::Fill(Rect::new(0.0, 580.0, 800.0, 20.0)));
        assert_eq!(calls[3], DrawCall::Fill(Rect::new(390.0, 20.0, 20.0, 20.0)));

        let n = calls.len();
        assert_eq!(calls[n - 3], DrawCall::Fill(Rect::new(30.0, 250.0, 20.0, 100.0)));
        assert_eq!(calls[n - 2], DrawCall::Fill(Rect::new(750.0, 250.0, 20.0, 100.0)));
        assert_eq!(calls[n - 1], DrawCall::Fill(Rect::new(390.0, 290.0, 20.0, 20.0)));
        // clear + 2 walls + 16 center boxes + two zeros + 2 paddles + ball
        assert_eq!(n, 1 + 2 + 16 + 6 + 6 + 2 + 1);
    }

    #[test]
    fn test_single_update_scores_at_most_once() {
        let (mut court, mut session) = entered_court();
        court.pause.remaining = 0;
        let ball = court.world.query_one_mut::<&mut Ball>(court.ball).unwrap();
        ball.set_pos(DVec2::new(-36.0, 300.0));
        ball.direction = DVec2::new(-0.5, 0.5);

        court.update(&mut session);

        assert_eq!(session.score, Score { left: 0, right: 1 });
        assert!(court.events.right_scored && !court.events.left_scored);
        assert_eq!(court.right_score.value(), 1);
        assert_eq!(court.left_score.value(), 0);
        assert_eq!(court.pause.remaining, 30);
    }

    #[test]
    fn test_court_spawns_paddles_and_ball() {
        let court = Court::new(&Config::new());

        assert_eq!(court.world.len(), 3);
        let mut sides: Vec<Side> = court
            .world
            .query::<(&Paddle, &Side, &PaddleIntent)>()
            .iter()
            .map(|(_entity, (_paddle, side, _intent))| *side)
            .collect();
        sides.sort();
        assert_eq!(sides, vec![Side::Left, Side::Right]);
        assert_eq!(court.world.query::<&Ball>().iter().count(), 1);
        assert_eq!(court.paddle(Side::Right).unwrap().pos.x, 750.0);
    }
}
