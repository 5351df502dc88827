use hecs::World;

use crate::components::{Paddle, PaddleIntent, Side};
use crate::resources::PlayerInputs;

/// Copy this frame's player inputs onto the paddle intents.
pub fn apply_inputs(world: &mut World, inputs: &PlayerInputs) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = match paddle.side {
            Side::Left => inputs.left,
            Side::Right => inputs.right,
        };
    }
}
