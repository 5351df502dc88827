use hecs::World;
use tracing::info;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};
use crate::vec2::Vec2;

/// Check whether the ball crossed a scoring boundary. On a score the
/// counter is bumped, the round is reset, and if the winning threshold was
/// just reached the match-end signal goes out with the score frozen.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let scorer = world
        .query_mut::<&Ball>()
        .into_iter()
        .next()
        .and_then(|(_e, ball)| ball.check_score(config.board_width));

    let Some(side) = scorer else {
        return;
    };

    score.increment(side);
    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    reset_round(world, config, rng);

    if let Some(winner) = score.has_winner(config.win_score) {
        info!(?winner, left = score.left, right = score.right, "match over");
        events.match_ended = Some(winner);
    }
}

/// Re-serve the ball from center and put both paddles back on their posts.
pub fn reset_round(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.ball_spawn(), config.serve_max_angle, rng);
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos = match paddle.side {
            Side::Left => config.left_paddle_start(),
            Side::Right => config.right_paddle_start(),
        };
        paddle.vel = Vec2::ZERO;
    }
}
