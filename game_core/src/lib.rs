pub mod components;
pub mod config;
pub mod court;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod scene;
pub mod systems;

#[cfg(test)]
mod testing;

pub use components::*;
pub use config::*;
pub use court::*;
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use scene::*;

use hecs::World;
use systems::*;

/// Run one court tick.
///
/// While the pause countdown is running nothing moves. Otherwise paddles move,
/// then the ball, and the first collision found is resolved. Returns the
/// winner when this tick ended the match.
pub fn step(
    court: &mut Court,
    score: &mut Score,
    rng: &mut GameRng,
    config: &Config,
) -> Option<Side> {
    // Clear events at start of tick
    court.events.clear();

    if court.pause.tick() {
        return None;
    }

    // 1. Move paddles based on intents
    move_paddles(&mut court.world, &court.walls, config);

    // 2. Move ball
    move_ball(&mut court.world);

    // 3. Resolve at most one collision
    let contact = check_collisions(
        &mut court.world,
        &court.walls,
        &court.goals,
        config,
        &mut court.events,
    );

    // 4. Score if the ball reached a goal, then freeze for the next serve
    let Some(Contact::Goal(goal)) = contact else {
        return None;
    };
    let winner = check_scoring(
        &mut court.world,
        goal,
        score,
        &mut court.events,
        rng,
        config,
    );
    court.left_score.set_value(score.left);
    court.right_score.set_value(score.right);
    court.pause.start(config.pause_ticks);
    winner
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), side, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config),))
}
