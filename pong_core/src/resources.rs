use crate::components::{Direction, Side};
use crate::config::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The match ends the instant either score reaches `win_score`.
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Seeded random number generator for deterministic serves
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_ended: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Per-frame paddle movement intents from the input layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInputs {
    pub left: Direction,
    pub right: Direction,
}

impl PlayerInputs {
    pub fn new(left: Direction, right: Direction) -> Self {
        Self { left, right }
    }
}

/// External pace modifiers, read once at the start of each step. The UI
/// layer owns the sliders; the core only consumes their values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    pub game_speed: f32,
    pub paddle_speed: f32,
    pub ball_speed: f32,
    pub acceleration_enabled: bool,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            game_speed: 1.0,
            paddle_speed: 1.0,
            ball_speed: 1.0,
            acceleration_enabled: true,
        }
    }
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multipliers forced back into the slider range.
    pub fn clamped(self) -> Self {
        let clamp = |v: f32| v.clamp(Params::MULTIPLIER_MIN, Params::MULTIPLIER_MAX);
        Self {
            game_speed: clamp(self.game_speed),
            paddle_speed: clamp(self.paddle_speed),
            ball_speed: clamp(self.ball_speed),
            acceleration_enabled: self.acceleration_enabled,
        }
    }
}
