//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step, whatever the wall-clock
//! time between calls.

use super::state::{GameEvent, GameState};

/// Input commands for a single tick. Both are edge-triggered: the driver
/// sets them once per key press and clears them after the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub restart: bool,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.restart();
        events.push(GameEvent::Restarted);
    }

    // Frozen until someone restarts
    if state.game_over {
        return events;
    }

    if input.jump && state.player.jump() {
        events.push(GameEvent::Jumped);
    }

    state.increase_difficulty();

    state.background.update();
    state.player.update();
    if let Some(index) = state.spawner.update() {
        events.push(GameEvent::ObstacleSpawned { index });
    }

    if state.player_collides() {
        state.game_over = true;
        log::info!("Game over with score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    state.score += 1;

    events
}
