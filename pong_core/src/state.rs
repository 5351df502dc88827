use std::fmt;

use tracing::warn;

/// Top-level game phase. Physics only advances while `Playing`; the owner
/// of this state decides when to call `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    PostGame,
}

impl GameState {
    /// Allowed transitions:
    /// Menu -> Playing; Playing -> Paused | PostGame;
    /// Paused -> Playing | PostGame; PostGame -> Playing | Menu.
    pub fn can_transition(self, next: GameState) -> bool {
        use GameState::*;
        matches!(
            (self, next),
            (Menu, Playing)
                | (Playing, Paused)
                | (Playing, PostGame)
                | (Paused, Playing)
                | (Paused, PostGame)
                | (PostGame, Playing)
                | (PostGame, Menu)
        )
    }

    pub fn try_transition(self, next: GameState) -> Result<GameState, StateError> {
        if self.can_transition(next) {
            Ok(next)
        } else {
            warn!(from = ?self, to = ?next, "rejected game state transition");
            Err(StateError::InvalidTransition { from: self, to: next })
        }
    }

    pub fn is_playing(self) -> bool {
        self == GameState::Playing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    InvalidTransition { from: GameState, to: GameState },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidTransition { from, to } => {
                write!(f, "invalid game state transition {from:?} -> {to:?}")
            }
        }
    }
}

impl std::error::Error for StateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_a_match() {
        assert_eq!(
            GameState::Menu.try_transition(GameState::Playing),
            Ok(GameState::Playing)
        );
    }

    #[test]
    fn test_pause_and_resume() {
        let state = GameState::Playing.try_transition(GameState::Paused).unwrap();
        assert_eq!(state.try_transition(GameState::Playing), Ok(GameState::Playing));
    }

    #[test]
    fn test_paused_match_can_be_ended_early() {
        assert_eq!(
            GameState::Paused.try_transition(GameState::PostGame),
            Ok(GameState::PostGame)
        );
    }

    #[test]
    fn test_postgame_play_again_or_menu() {
        assert_eq!(
            GameState::PostGame.try_transition(GameState::Playing),
            Ok(GameState::Playing)
        );
        assert_eq!(
            GameState::PostGame.try_transition(GameState::Menu),
            Ok(GameState::Menu)
        );
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        assert!(GameState::Menu.try_transition(GameState::Paused).is_err());
        assert!(GameState::Menu.try_transition(GameState::PostGame).is_err());
        assert!(GameState::Playing.try_transition(GameState::Menu).is_err());
        assert!(GameState::Paused.try_transition(GameState::Menu).is_err());
    }

    #[test]
    fn test_only_playing_advances_physics() {
        assert!(GameState::Playing.is_playing());
        assert!(!GameState::Paused.is_playing());
        assert!(!GameState::Menu.is_playing());
        assert!(!GameState::PostGame.is_playing());
    }
}
