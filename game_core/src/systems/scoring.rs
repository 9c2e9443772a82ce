use crate::{Ball, Config, Events, GameRng, Movement, Paddle, PaddleIntent, Score, Side};
use hecs::World;

/// Put the ball and both paddles back to their serve positions
pub fn reset_serve(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, rng);
    }
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        paddle.reset(config);
        intent.movement = Movement::None;
    }
}

/// Score a goal for the player opposite `goal` after resetting the serve.
/// Returns the winner once a score passes the last playable point.
pub fn check_scoring(
    world: &mut World,
    goal: Side,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) -> Option<Side> {
    reset_serve(world, config, rng);

    match goal {
        // Ball left through the left goal: point for the right player
        Side::Left => {
            score.increment_right();
            events.right_scored = true;
        }
        Side::Right => {
            score.increment_left();
            events.left_scored = true;
        }
    }

    log::debug!("Goal! Score is now {} - {}", score.left, score.right);

    score.winner(config.max_score)
}
