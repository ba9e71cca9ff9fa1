//! The autopilot driver: one strategy selection + one committed move per
//! tick, in the same shape the game modes drive the engine

use crate::game::{GameEngine, GameState, StepResult};

use super::search::Pathfinder;
use super::{select_strategy, Decision, Strategy};

/// Wraps the pathfinder and drives the engine one tick at a time
pub struct Autopilot {
    pathfinder: Pathfinder,
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            pathfinder: Pathfinder::new(),
        }
    }

    /// Decide and commit one move: pick the strategy from how full the
    /// board is, ask the planner for a cell, and step the snake onto it
    pub fn step(
        &mut self,
        engine: &mut GameEngine,
        state: &mut GameState,
    ) -> (StepResult, Decision) {
        let decision = match select_strategy(state.snake.len(), state.grid.interior_capacity()) {
            Strategy::Direct => self.pathfinder.next_cell(&state.grid, &state.snake, state.food),
            Strategy::Conservative => {
                self.pathfinder
                    .next_cell_conservatively(&state.grid, &state.snake, state.food)
            }
        };

        let result = engine.commit_agent_move(state, decision.cell);
        (result, decision)
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn test_first_move_is_adjacent() {
        let mut engine = GameEngine::new(GameConfig::new(7, 7));
        let mut state = engine.reset();
        let start = state.snake.head();

        let mut autopilot = Autopilot::new();
        let (result, decision) = autopilot.step(&mut engine, &mut state);

        assert!(!result.terminated);
        assert_eq!(state.snake.head(), decision.cell);
        assert_eq!(decision.cell.manhattan_distance(start), 1);
    }

    #[test]
    fn test_autopilot_survives_and_eats() {
        let mut engine = GameEngine::new(GameConfig::new(7, 7));
        let mut state = engine.reset();
        let mut autopilot = Autopilot::new();

        for _ in 0..60 {
            autopilot.step(&mut engine, &mut state);
        }

        assert!(state.is_alive);
        assert!(state.score >= 1);
    }
}
