use crate::{Ball, Config, Movement, Paddle, PaddleIntent, Walls};
use glam::DVec2;
use hecs::World;

/// Move a paddle by its intent and stop it flush against the wall it runs into
pub fn move_paddle(
    paddle: &mut Paddle,
    intent: &mut PaddleIntent,
    walls: &Walls,
    config: &Config,
) {
    let movement = intent.movement;
    if movement == Movement::None {
        return;
    }

    let delta = DVec2::new(0.0, movement.dir() * config.paddle_speed);
    paddle.pos += delta;
    paddle.aabb.translate(delta);

    // Only the wall in the direction of travel can be hit
    let wall = match movement {
        Movement::Down => &walls.bottom.aabb,
        _ => &walls.top.aabb,
    };
    if paddle.aabb.intersects(wall) {
        let y = if movement == Movement::Down {
            wall.center().y - wall.extent().y - paddle.size.y
        } else {
            wall.center().y + wall.extent().y
        };
        paddle.set_y(y);
        intent.movement = Movement::None;
    }
}

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, walls: &Walls, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        move_paddle(paddle, intent, walls, config);
    }
}

/// Move ball along its diagonal
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let delta = ball.direction * ball.velocity;
        ball.pos += delta;
        ball.aabb.translate(delta);
    }
}
