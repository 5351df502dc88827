use hecs::World;

use crate::components::{Ball, Direction, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::{Modifiers, Time};

/// Apply paddle movement based on intents. Paddles run on raw frame time
/// scaled only by the paddle-speed slider; the game-speed slider paces the
/// ball, not the players.
pub fn move_paddles(world: &mut World, time: &Time, config: &Config, modifiers: &Modifiers) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != Direction::Neutral {
            paddle.apply_move(
                intent.dir,
                time.dt,
                modifiers.paddle_speed,
                config.board_height,
            );
        }
    }
}

/// Advance the ball by `dt * game_speed`, additionally scaled by the
/// ball-speed slider. The acceleration toggle is propagated here so the
/// very next paddle bounce sees the current setting.
pub fn move_ball(world: &mut World, time: &Time, modifiers: &Modifiers) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.acceleration_enabled = modifiers.acceleration_enabled;
        ball.update(time.dt * modifiers.game_speed, modifiers.ball_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::vec2::Vec2;
    use crate::{create_ball, create_paddle};

    #[test]
    fn test_paddle_moves_on_intent() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Left, &config);
        world
            .insert_one(entity, PaddleIntent { dir: Direction::Down })
            .unwrap();

        let start_y = world.get::<&Paddle>(entity).unwrap().pos.y;
        let time = Time::new(0.1, 0.0);
        move_paddles(&mut world, &time, &config, &Modifiers::default());

        let paddle = world.get::<&Paddle>(entity).unwrap();
        let expected = start_y + config.paddle_speed * 0.1;
        assert!((paddle.pos.y - expected).abs() < 1e-3);
    }

    #[test]
    fn test_ball_advances_by_velocity_and_multipliers() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_ball(&mut world, &config);
        {
            let mut ball = world.get::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(100.0, 100.0);
            ball.vel = Vec2::new(200.0, -100.0);
        }

        let time = Time::new(0.1, 0.0);
        let modifiers = Modifiers {
            game_speed: 2.0,
            ball_speed: 1.5,
            ..Modifiers::default()
        };
        move_ball(&mut world, &time, &modifiers);

        let ball = world.get::<&Ball>(entity).unwrap();
        // dt * game_speed * ball_speed = 0.1 * 2.0 * 1.5 = 0.3
        assert!((ball.pos.x - 160.0).abs() < 1e-3);
        assert!((ball.pos.y - 70.0).abs() < 1e-3);
    }

    #[test]
    fn test_acceleration_toggle_propagates_to_ball() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_ball(&mut world, &config);

        let modifiers = Modifiers {
            acceleration_enabled: false,
            ..Modifiers::default()
        };
        move_ball(&mut world, &Time::default(), &modifiers);

        assert!(!world.get::<&Ball>(entity).unwrap().acceleration_enabled);
    }
}
