//! Move planning on top of the A* core
//!
//! Two strategies plus a shared fallback. The direct strategy simulates
//! the whole planned path on a throwaway clone of the snake and only
//! commits to the first step if the simulated end state can still reach
//! its own tail with some clearance; the conservative strategy maximizes
//! tail slack once the board gets crowded.

use crate::game::{Grid, Position, Snake};

use super::search::Pathfinder;
use super::{Decision, Resolution, Strategy};

impl Pathfinder {
    /// Direct strategy: head for the food along the shortest path, but
    /// only if the snake could still reach its own tail after arriving.
    /// A snake that cannot reach its tail will eventually have no legal
    /// move, so an unsafe path is worse than stalling.
    pub fn next_cell(&mut self, grid: &Grid, snake: &Snake, goal: Position) -> Decision {
        if !self.can_find_path(grid, snake, snake.head(), goal) {
            return self.furthest_cell_from_goal(grid, snake, goal, Strategy::Direct);
        }

        let path = self.reconstruct_path_from(goal);
        let Some(&next) = path.last() else {
            // the head is already on the goal; nothing to plan
            return self.furthest_cell_from_goal(grid, snake, goal, Strategy::Direct);
        };

        // walk a clone of the snake all the way to the goal; the real
        // snake is never touched by the lookahead
        let mut sim = snake.clone();
        for &cell in path.iter().rev() {
            sim.queue_agent_move(cell);
        }
        while sim.pending_len() > 0 {
            sim.step_agent();
        }

        // after eating, the head must keep more than one cell of distance
        // to the tail, otherwise the tail cell could be the only legal
        // follow-up move
        let clear_of_tail =
            sim.is_empty() || sim.head().manhattan_distance(sim.tail()) > 1;
        if clear_of_tail && self.can_find_path(grid, &sim, sim.head(), sim.tail()) {
            Decision {
                cell: next,
                strategy: Strategy::Direct,
                resolution: Resolution::Planned,
            }
        } else {
            self.furthest_cell_from_goal(grid, snake, goal, Strategy::Direct)
        }
    }

    /// Conservative strategy: fill space instead of racing to the food.
    /// Prefers the neighbor that puts the longest path between head and
    /// tail while keeping the food reachable, and eats only when the tail
    /// stays reachable with more than one cell of clearance.
    pub fn next_cell_conservatively(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        goal: Position,
    ) -> Decision {
        let tail = snake.tail();
        let mut longest_tail_path = 0;
        let mut best: Option<Position> = None;

        for neighbor in grid.neighbors(snake.head()) {
            if !grid.legal(neighbor, snake) {
                continue;
            }

            let tail_reachable = self.can_find_path(grid, snake, neighbor, tail);

            if neighbor == goal && tail_reachable && neighbor.manhattan_distance(tail) > 1 {
                return Decision {
                    cell: neighbor,
                    strategy: Strategy::Conservative,
                    resolution: Resolution::Planned,
                };
            }

            if !tail_reachable {
                continue;
            }
            // measure the tail path right away, before the food search
            // below wipes the parent map
            let tail_path_len = self.reconstruct_path_from(tail).len();
            if tail_path_len > longest_tail_path && self.can_find_path(grid, snake, neighbor, goal)
            {
                best = Some(neighbor);
                longest_tail_path = tail_path_len;
            }
        }

        match best {
            Some(cell) => Decision {
                cell,
                strategy: Strategy::Conservative,
                resolution: Resolution::Planned,
            },
            None => self.furthest_cell_from_goal(grid, snake, goal, Strategy::Conservative),
        }
    }

    /// Stalling fallback: move as far from the food as possible without
    /// losing the tail, and when even that is impossible, chase the tail
    /// cell itself — it is vacated on the same step the head would arrive.
    fn furthest_cell_from_goal(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        goal: Position,
        strategy: Strategy,
    ) -> Decision {
        let mut max_distance = 0;
        let mut best: Option<Position> = None;

        for neighbor in grid.neighbors(snake.head()) {
            if grid.legal(neighbor, snake)
                && neighbor.manhattan_distance(goal) > max_distance
                && self.can_find_path(grid, snake, neighbor, snake.tail())
            {
                best = Some(neighbor);
                max_distance = neighbor.manhattan_distance(goal);
            }
        }

        match best {
            Some(cell) => Decision {
                cell,
                strategy,
                resolution: Resolution::Stalled,
            },
            None => Decision {
                cell: snake.tail(),
                strategy,
                resolution: Resolution::TailChase,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk a snake along `cells`, growing the whole way: the body ends up
    /// holding every cell but the last, the head on the last
    fn snake_along(cells: &[Position]) -> Snake {
        let mut snake = Snake::new(cells[0]);
        for &cell in &cells[1..] {
            snake.grow();
            snake.queue_agent_move(cell);
            snake.step_agent();
        }
        snake
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_bare_snake_steps_toward_corner_food() {
        // 3x3 interior, head in the center, food in a corner: the first
        // step must lie on a Manhattan-shortest path
        let grid = Grid::new(5, 5);
        let snake = Snake::new(p(2, 2));
        let mut pathfinder = Pathfinder::new();

        let decision = pathfinder.next_cell(&grid, &snake, p(1, 1));
        assert_eq!(decision.resolution, Resolution::Planned);
        assert_eq!(decision.cell.manhattan_distance(p(2, 2)), 1);
        assert_eq!(decision.cell.manhattan_distance(p(1, 1)), 1);
    }

    #[test]
    fn test_safe_shortest_path_is_taken() {
        let grid = Grid::new(7, 7);
        let snake = snake_along(&[p(1, 1), p(2, 1), p(3, 1)]);
        let mut pathfinder = Pathfinder::new();

        let decision = pathfinder.next_cell(&grid, &snake, p(4, 1));
        assert_eq!(
            decision,
            Decision {
                cell: p(4, 1),
                strategy: Strategy::Direct,
                resolution: Resolution::Planned,
            }
        );
    }

    #[test]
    fn test_unsafe_path_falls_back_to_tail_chase() {
        // the food sits in a corner pocket walled in by the snake's own
        // forward half; the path there exists, but after arriving the
        // simulated head cannot reach the simulated tail anymore
        let grid = Grid::new(7, 7);
        let snake = snake_along(&[
            p(5, 3),
            p(5, 4),
            p(5, 5),
            p(4, 5),
            p(3, 5),
            p(3, 4),
            p(3, 3),
            p(3, 2),
            p(3, 1),
            p(2, 1),
            p(2, 2),
            p(2, 3),
            p(2, 4),
            p(1, 4),
        ]);
        assert_eq!(snake.head(), p(1, 4));
        assert_eq!(snake.tail(), p(5, 3));

        let before = snake.clone();
        let mut pathfinder = Pathfinder::new();
        let decision = pathfinder.next_cell(&grid, &snake, p(1, 1));

        assert_eq!(
            decision,
            Decision {
                cell: p(5, 3),
                strategy: Strategy::Direct,
                resolution: Resolution::TailChase,
            }
        );
        // the lookahead walked a clone; the real snake is untouched
        assert_eq!(snake, before);
    }

    #[test]
    fn test_unreachable_food_stalls_away_from_it() {
        // body wall seals the left column; the food there cannot be
        // reached, so the snake retreats to the neighbor farthest from it
        // that still sees its own tail
        let grid = Grid::new(7, 7);
        let snake = snake_along(&[p(2, 1), p(2, 2), p(2, 3), p(2, 4), p(2, 5), p(3, 5)]);
        let mut pathfinder = Pathfinder::new();

        let decision = pathfinder.next_cell(&grid, &snake, p(1, 3));
        assert_eq!(
            decision,
            Decision {
                cell: p(4, 5),
                strategy: Strategy::Direct,
                resolution: Resolution::Stalled,
            }
        );
    }

    #[test]
    fn test_boxed_in_snake_chases_its_tail() {
        // every neighbor of the head is body or wall; the only move left
        // is the tail cell, which is always being vacated
        let grid = Grid::new(7, 7);
        let snake = snake_along(&[p(4, 1), p(4, 2), p(3, 2), p(2, 2), p(2, 1), p(3, 1)]);
        assert_eq!(snake.head(), p(3, 1));

        let mut pathfinder = Pathfinder::new();
        let decision = pathfinder.next_cell(&grid, &snake, p(1, 1));
        assert_eq!(decision.cell, snake.tail());
        assert_eq!(decision.resolution, Resolution::TailChase);
    }

    #[test]
    fn test_conservative_eats_adjacent_food_with_clearance() {
        let grid = Grid::new(7, 7);
        let snake = snake_along(&[p(1, 1), p(2, 1), p(3, 1)]);
        let mut pathfinder = Pathfinder::new();

        let decision = pathfinder.next_cell_conservatively(&grid, &snake, p(4, 1));
        assert_eq!(
            decision,
            Decision {
                cell: p(4, 1),
                strategy: Strategy::Conservative,
                resolution: Resolution::Planned,
            }
        );
    }

    #[test]
    fn test_conservative_prefers_longest_tail_path() {
        // moving to (2,4) forces a five-cell walk back to the tail, while
        // (3,3) and (1,3) reach it in three; the food stays reachable from
        // all of them, so the slackest neighbor wins
        let grid = Grid::new(7, 7);
        let snake = snake_along(&[p(2, 1), p(2, 2), p(2, 3)]);
        let mut pathfinder = Pathfinder::new();

        let decision = pathfinder.next_cell_conservatively(&grid, &snake, p(5, 1));
        assert_eq!(
            decision,
            Decision {
                cell: p(2, 4),
                strategy: Strategy::Conservative,
                resolution: Resolution::Planned,
            }
        );
    }
}
