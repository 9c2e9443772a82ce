use crate::{Aabb, Ball, Config, Events, Goals, Paddle, Side, Walls};
use glam::DVec2;
use hecs::World;

/// The single thing the ball touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    BottomWall,
    TopWall,
    Paddle(Side),
    /// The ball entered the goal zone on this side
    Goal(Side),
}

/// Check ball collisions in priority order and resolve the first one found.
///
/// Walls and paddles are resolved here: the ball is snapped flush against the
/// other object's box and its direction mirrored. Goal contacts are only
/// reported, scoring is handled by [`check_scoring`](crate::systems::check_scoring).
pub fn check_collisions(
    world: &mut World,
    walls: &Walls,
    goals: &Goals,
    config: &Config,
    events: &mut Events,
) -> Option<Contact> {
    // Left paddle before right
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<(&Paddle, &Side)>()
        .iter()
        .map(|(_entity, (paddle, side))| (*side, paddle.aabb))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    let mut found = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some((contact, other)) = find_contact(ball, walls, &paddles, goals) else {
            continue;
        };
        resolve(ball, contact, &other, config, events);
        found = Some(contact);
    }
    found
}

fn find_contact(
    ball: &Ball,
    walls: &Walls,
    paddles: &[(Side, Aabb)],
    goals: &Goals,
) -> Option<(Contact, Aabb)> {
    let walls = [
        (Contact::BottomWall, walls.bottom.aabb),
        (Contact::TopWall, walls.top.aabb),
    ];
    let paddles = paddles
        .iter()
        .map(|&(side, aabb)| (Contact::Paddle(side), aabb));
    let goals = [
        (Contact::Goal(Side::Left), goals.left.aabb),
        (Contact::Goal(Side::Right), goals.right.aabb),
    ];
    walls
        .into_iter()
        .chain(paddles)
        .chain(goals)
        .find(|(_, aabb)| ball.aabb.intersects(aabb))
}

fn resolve(
    ball: &mut Ball,
    contact: Contact,
    other: &Aabb,
    config: &Config,
    events: &mut Events,
) {
    match contact {
        Contact::BottomWall => {
            let y = other.center().y - other.extent().y - ball.size.y;
            ball.set_pos(DVec2::new(ball.pos.x, y));
            ball.direction.y = -ball.direction.y;
            events.ball_hit_wall = true;
        }
        Contact::TopWall => {
            let y = other.center().y + other.extent().y;
            ball.set_pos(DVec2::new(ball.pos.x, y));
            ball.direction.y = -ball.direction.y;
            events.ball_hit_wall = true;
        }
        Contact::Paddle(side) => {
            let x = match side {
                Side::Left => other.center().x + other.extent().x,
                Side::Right => other.center().x - other.extent().x - ball.size.x,
            };
            ball.set_pos(DVec2::new(x, ball.pos.y));
            ball.direction.x = -ball.direction.x;
            ball.velocity = (ball.velocity + config.ball_speed_increase).min(config.ball_speed_max);
            events.ball_hit_paddle = true;
            log::debug!("Ball hit {:?} paddle, velocity {}", side, ball.velocity);
        }
        Contact::Goal(_) => {}
    }
}
