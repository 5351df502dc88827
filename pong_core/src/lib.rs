pub mod components;
pub mod config;
pub mod match_log;
pub mod resources;
pub mod state;
pub mod systems;
pub mod vec2;

pub use components::*;
pub use config::*;
pub use match_log::*;
pub use resources::*;
pub use state::*;
pub use vec2::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Order per frame: paddle intents, paddle movement, ball advance, paddle
/// collisions (left before right), wall collisions, scoring. The caller
/// owns the [`GameState`] and only calls this while `Playing`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &PlayerInputs,
    modifiers: &Modifiers,
    rng: &mut GameRng,
) {
    events.clear();

    // Sliders are pre-clamped by the UI; re-clamping here keeps a rogue
    // caller from distorting the physics.
    let modifiers = modifiers.clamped();

    apply_inputs(world, inputs);
    move_paddles(world, time, config, &modifiers);
    move_ball(world, time, &modifiers);
    check_collisions(world, config, events);
    check_scoring(world, config, score, events, rng);

    time.now += time.dt;
}

/// Helper to create a paddle entity on its starting post
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let pos = match side {
        Side::Left => config.left_paddle_start(),
        Side::Right => config.right_paddle_start(),
    };
    world.spawn((Paddle::new(side, pos, config), PaddleIntent::new()))
}

/// Helper to create the ball entity at board center (not yet served)
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config.ball_spawn(), config),))
}

/// Spawn both paddles and a served ball, ready for the first rally.
pub fn spawn_match(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
) -> (hecs::Entity, hecs::Entity, hecs::Entity) {
    let left = create_paddle(world, Side::Left, config);
    let right = create_paddle(world, Side::Right, config);
    let ball = create_ball(world, config);
    reset_round(world, config, rng);
    (left, right, ball)
}
