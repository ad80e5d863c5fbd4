//! Keyboard to tick input

use crate::sim::TickInput;

/// Map a `KeyboardEvent.code` to a tick input. Space jumps while playing
/// and restarts once the game is over.
pub fn map_key(code: &str, game_over: bool) -> Option<TickInput> {
    match code {
        "Space" if game_over => Some(TickInput {
            jump: false,
            restart: true,
        }),
        "Space" => Some(TickInput {
            jump: true,
            restart: false,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_jumps_while_playing() {
        let input = map_key("Space", false).unwrap();
        assert!(input.jump);
        assert!(!input.restart);
    }

    #[test]
    fn test_space_restarts_after_game_over() {
        let input = map_key("Space", true).unwrap();
        assert!(!input.jump);
        assert!(input.restart);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key("KeyA", false), None);
        assert_eq!(map_key("Enter", true), None);
    }
}
