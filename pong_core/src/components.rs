use rand::Rng;

use crate::config::Config;
use crate::resources::GameRng;
use crate::vec2::{Rect, Vec2};

/// Which player a paddle (or a point) belongs to. `Left` orders before
/// `Right`, which fixes the paddle collision check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical movement intent for a paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Direction {
    /// Sign in board coordinates (Y grows downward).
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
            Direction::Neutral => 0.0,
        }
    }
}

/// Paddle component - vertical slab moved by player intents
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub width: f32,
    pub height: f32,
    pub speed: f32, // base rate, pixels per second
    pub vel: Vec2,  // derived each move, not carried across frames
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, config: &Config) -> Self {
        Self {
            side,
            pos,
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            vel: Vec2::ZERO,
        }
    }

    /// Integrate one frame of movement, then clamp to the board. The clamp
    /// is a hard stop at the wall, not a bounce.
    pub fn apply_move(
        &mut self,
        dir: Direction,
        dt: f32,
        speed_multiplier: f32,
        board_height: f32,
    ) {
        self.vel = Vec2::new(0.0, dir.sign() * self.speed * speed_multiplier);
        self.pos += self.vel * dt;
        self.pos.y = self.pos.y.clamp(0.0, board_height - self.height);
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.bounding_rect().center()
    }
}

/// Movement intent for a paddle, refreshed from player input every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: Direction,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - vector-based physics with analytical-geometry collision
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub base_speed: f32,
    pub acceleration_enabled: bool,
    pub acceleration_factor: f32,
}

impl Ball {
    pub fn new(pos: Vec2, config: &Config) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            base_speed: config.ball_speed,
            acceleration_enabled: true,
            acceleration_factor: config.acceleration_factor,
        }
    }

    /// Advance the ball by one frame.
    pub fn update(&mut self, dt: f32, speed_multiplier: f32) {
        self.pos += self.vel * (dt * speed_multiplier);
    }

    /// Closest-point collision test against a paddle. On a hit the velocity
    /// is rebuilt from the hit offset and the ball is pushed out of the
    /// paddle horizontally so the next frame cannot re-trigger.
    pub fn check_paddle_collision(&mut self, paddle: &Paddle, max_bounce_angle: f32) -> bool {
        let closest = paddle.bounding_rect().closest_point(self.pos);
        let distance = (self.pos - closest).magnitude();

        if distance > self.radius {
            return false;
        }

        self.bounce_off_paddle(paddle, max_bounce_angle);

        let overlap = self.radius - distance;
        if overlap > 0.0 {
            let push_x = if self.vel.x > 0.0 { 1.0 } else { -1.0 };
            self.pos.x += push_x * overlap;
        }
        true
    }

    /// Angle-remapping bounce: the outgoing trajectory comes purely from
    /// where the ball struck the paddle, not from the incoming angle. This
    /// gives players deterministic control over the return.
    fn bounce_off_paddle(&mut self, paddle: &Paddle, max_bounce_angle: f32) {
        let offset = self.pos.y - paddle.center().y;
        let normalized_offset = (offset / (paddle.height / 2.0)).clamp(-1.0, 1.0);
        let bounce_angle = normalized_offset * max_bounce_angle;

        // Send the ball back toward the side it came from
        let direction = if self.vel.x < 0.0 { 1.0 } else { -1.0 };

        let mut speed = self.vel.magnitude();
        if self.acceleration_enabled {
            speed *= self.acceleration_factor;
        }

        self.vel = Vec2::new(
            bounce_angle.cos() * speed * direction,
            bounce_angle.sin() * speed,
        );
    }

    /// True specular reflection off the top/bottom walls, with the position
    /// clamped back onto the boundary.
    pub fn check_wall_collision(&mut self, board_height: f32) -> bool {
        if self.pos.y - self.radius <= 0.0 {
            self.vel = self.vel.reflect(Vec2::new(0.0, 1.0));
            self.pos.y = self.radius;
            true
        } else if self.pos.y + self.radius >= board_height {
            self.vel = self.vel.reflect(Vec2::new(0.0, -1.0));
            self.pos.y = board_height - self.radius;
            true
        } else {
            false
        }
    }

    /// Side-effect-free scoring query: which player, if any, just scored.
    pub fn check_score(&self, board_width: f32) -> Option<Side> {
        if self.pos.x - self.radius <= 0.0 {
            Some(Side::Right)
        } else if self.pos.x + self.radius >= board_width {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Serve: center the ball and pick a fresh random direction at base
    /// speed, discarding any acceleration built up in the prior rally.
    pub fn reset(&mut self, center: Vec2, serve_max_angle: f32, rng: &mut GameRng) {
        self.pos = center;

        let angle: f32 = rng.0.gen_range(-serve_max_angle..=serve_max_angle);
        let direction = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        self.vel = Vec2::new(
            angle.cos() * direction * self.base_speed,
            angle.sin() * self.base_speed,
        );
    }
}
