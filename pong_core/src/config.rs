use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 1080.0;
    pub const BOARD_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // pixels per second
    pub const PADDLE_MARGIN: f32 = 50.0; // gap between wall and paddle face

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 400.0; // serve speed, pixels per second
    pub const ACCELERATION_FACTOR: f32 = 1.05; // per paddle hit, compounds within a rally

    // Angles
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60 degrees
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees

    // Score
    pub const WIN_SCORE: u8 = 5;

    // External modifier sliders
    pub const MULTIPLIER_MIN: f32 = 0.5;
    pub const MULTIPLIER_MAX: f32 = 2.0;
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub acceleration_factor: f32,
    pub max_bounce_angle: f32,
    pub serve_max_angle: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            acceleration_factor: Params::ACCELERATION_FACTOR,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_max_angle: Params::SERVE_MAX_ANGLE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner of the left paddle at round start.
    pub fn left_paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.paddle_margin,
            (self.board_height - self.paddle_height) / 2.0,
        )
    }

    /// Top-left corner of the right paddle at round start.
    pub fn right_paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.board_width - self.paddle_margin - self.paddle_width,
            (self.board_height - self.paddle_height) / 2.0,
        )
    }

    /// Serve position, center of the board.
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.board_width / 2.0, self.board_height / 2.0)
    }

    /// Clamp a paddle's top-left Y into the board.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.board_height - self.paddle_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_start_positions() {
        let config = Config::new();
        assert_eq!(config.left_paddle_start(), Vec2::new(50.0, 310.0));
        assert_eq!(config.right_paddle_start(), Vec2::new(1015.0, 310.0));
    }

    #[test]
    fn test_ball_spawn_is_board_center() {
        let config = Config::new();
        assert_eq!(config.ball_spawn(), Vec2::new(540.0, 360.0));
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(10_000.0),
            config.board_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(310.0), 310.0);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::new();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
