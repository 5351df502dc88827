use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::Events;

/// Resolve ball collisions for this frame: paddles first (left before
/// right, which is the tie-break if both could ever trigger at once), then
/// the top/bottom walls.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Snapshot paddles so the ball can be mutated without overlapping borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.check_paddle_collision(paddle, config.max_bounce_angle) {
                events.ball_hit_paddle = true;
            }
        }
        if ball.check_wall_collision(config.board_height) {
            events.ball_hit_wall = true;
        }
    }
}
