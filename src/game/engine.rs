use rand::Rng;

use super::config::GameConfig;
use super::direction::Direction;
use super::grid::Grid;
use super::snake::Snake;
use super::state::{CollisionType, GameState, Position};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
///
/// The engine owns no per-game state; it advances a [`GameState`] one step
/// at a time and reports what happened. Failure to find a move is never an
/// engine error — a game only ends when the head lands on an illegal cell
/// (or the board fills up completely).
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let grid = Grid::new(self.config.grid_width as i32, self.config.grid_height as i32);
        let snake = Snake::new(Position::new(grid.width() / 2, grid.height() / 2));
        let food = self.spawn_food(&grid, &snake).unwrap_or_else(|| snake.head());
        GameState::new(grid, snake, food)
    }

    /// Buffer a human direction change; 180-degree reversals relative to
    /// the last committed direction are ignored
    pub fn steer(&self, state: &mut GameState, direction: Direction) {
        if state.is_alive && !state.snake.direction().is_opposite(direction) {
            state.snake.queue_direction(direction);
        }
    }

    /// Execute one step under human control
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: None,
                },
            };
        }

        state.snake.step_human();
        self.finish_step(state)
    }

    /// Commit one agent-decided cell: queue it and advance the snake onto
    /// it in the same tick
    pub fn commit_agent_move(&mut self, state: &mut GameState, cell: Position) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: None,
                },
            };
        }

        state.snake.queue_agent_move(cell);
        state.snake.step_agent();
        self.finish_step(state)
    }

    /// Shared post-move bookkeeping: food, growth, and collision detection
    fn finish_step(&mut self, state: &mut GameState) -> StepResult {
        state.steps += 1;

        let mut ate_food = false;
        let mut board_full = false;
        if state.snake.head() == state.food {
            ate_food = true;
            state.score += 1;
            state.snake.grow();
            match self.spawn_food(&state.grid, &state.snake) {
                Some(cell) => state.food = cell,
                None => board_full = true,
            }
        }

        let head = state.snake.head();
        if !state.grid.legal(head, &state.snake) && state.snake.len() > 0 {
            state.is_alive = false;
            let collision = if state.grid.is_interior(head) {
                CollisionType::SelfCollision
            } else {
                CollisionType::Wall
            };
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food,
                    collision_type: Some(collision),
                },
            };
        }

        StepResult {
            terminated: board_full,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    /// Re-roll a random interior cell until it is legal and off the head.
    /// Returns `None` when the snake has filled every spawnable cell.
    fn spawn_food(&mut self, grid: &Grid, snake: &Snake) -> Option<Position> {
        let spawnable = |cell: Position| grid.legal(cell, snake) && cell != snake.head();

        let any_free = (1..grid.width() - 1)
            .any(|x| (1..grid.height() - 1).any(|y| spawnable(Position::new(x, y))));
        if !any_free {
            return None;
        }

        loop {
            let x = self.rng.gen_range(1..grid.width() - 1);
            let y = self.rng.gen_range(1..grid.height() - 1);
            let cell = Position::new(x, y);
            if spawnable(cell) {
                return Some(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::small());
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert_eq!(state.snake.len(), 0);
        assert!(state.grid.legal(state.food, &state.snake));
        assert_ne!(state.food, state.snake.head());
    }

    #[test]
    fn test_food_consumption_grows_snake() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        // place food directly above the head; default drift is up
        state.food = state.snake.head().moved_in_direction(Direction::Up);

        let result = engine.step(&mut state);
        assert!(result.info.ate_food);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 0);

        // growth materializes on the following step
        engine.step(&mut state);
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_wall_collision_after_growth() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.food = state.snake.head().moved_in_direction(Direction::Up);
        engine.step(&mut state); // eat at (5, 4)

        engine.steer(&mut state, Direction::Left);
        let mut last = engine.step(&mut state);
        for _ in 0..4 {
            last = engine.step(&mut state);
        }

        assert!(last.terminated);
        assert!(!state.is_alive);
        assert_eq!(last.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(state.snake.head().x, 0);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        engine.steer(&mut state, Direction::Down); // opposite of initial up
        assert_eq!(state.snake.direction(), Direction::Up);
        assert_eq!(state.snake.pending_len(), 0);

        engine.steer(&mut state, Direction::Left);
        assert_eq!(state.snake.direction(), Direction::Left);
        assert_eq!(state.snake.pending_len(), 1);
    }

    #[test]
    fn test_commit_agent_move_advances_head() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        let target = state.snake.head().moved_in_direction(Direction::Right);

        let result = engine.commit_agent_move(&mut state, target);
        assert_eq!(state.snake.head(), target);
        assert_eq!(state.steps, 1);
        assert!(!result.terminated);
    }

    #[test]
    fn test_terminated_game_does_not_update() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.is_alive = false;
        let steps_before = state.steps;

        let result = engine.step(&mut state);
        assert!(result.terminated);
        assert_eq!(state.steps, steps_before);
    }
}
