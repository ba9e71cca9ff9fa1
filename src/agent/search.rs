//! A* search over the live grid and snake occupancy
//!
//! Cells carry no scores of their own; `g` values, parents and the open
//! set live here and are cleared at the start of every search, so repeated
//! searches can never interfere through leftover per-cell state.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::game::{Grid, Position, Snake};

/// Open-set candidate. Ordering (applied on pop): lowest f first, then
/// lowest g, then the candidate farthest from the snake's tail — the last
/// rule biases equally good paths away from the tail region so the snake
/// is less likely to cut off its own escape route.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: i32,
    g: i32,
    tail_distance: i32,
    cell: Position,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum, so "better" must compare Greater
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| self.tail_distance.cmp(&other.tail_distance))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Repeatedly-invoked path search.
///
/// All fields are scratch state scoped to one `can_find_path` call; the
/// parent map survives until the next call so the path it found can be
/// reconstructed.
pub struct Pathfinder {
    open: BinaryHeap<OpenEntry>,
    closed: HashSet<Position>,
    came_from: HashMap<Position, Position>,
    g_score: HashMap<Position, i32>,
}

impl Pathfinder {
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            came_from: HashMap::new(),
            g_score: HashMap::new(),
        }
    }

    /// A* from `start` to `goal` with unit edge costs and the Manhattan
    /// heuristic. Returns whether the goal is reachable; on success the
    /// parent map allows `reconstruct_path_from(goal)`.
    ///
    /// The goal cell is always expandable even when occupancy would block
    /// it (the tail is a valid search target). The snake's head is never a
    /// valid waypoint: it is about to vacate its cell but has not yet.
    pub fn can_find_path(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        start: Position,
        goal: Position,
    ) -> bool {
        self.open.clear();
        self.closed.clear();
        self.came_from.clear();
        self.g_score.clear();

        let tail = snake.tail();
        self.g_score.insert(start, 0);
        self.open.push(OpenEntry {
            f: start.manhattan_distance(goal),
            g: 0,
            tail_distance: start.manhattan_distance(tail),
            cell: start,
        });

        while let Some(current) = self.open.pop() {
            if current.cell == goal {
                return true;
            }
            if !self.closed.insert(current.cell) {
                // stale duplicate of an already-expanded cell
                continue;
            }

            for neighbor in grid.neighbors(current.cell) {
                let expandable = neighbor == goal || grid.legal(neighbor, snake);
                if !expandable || self.closed.contains(&neighbor) || neighbor == snake.head() {
                    continue;
                }

                let tentative_g = current.g + 1;
                if let Some(&known_g) = self.g_score.get(&neighbor) {
                    // relax only on a strictly better path; ties keep the
                    // existing parent
                    if tentative_g >= known_g {
                        continue;
                    }
                }

                self.g_score.insert(neighbor, tentative_g);
                self.came_from.insert(neighbor, current.cell);
                self.open.push(OpenEntry {
                    f: tentative_g + neighbor.manhattan_distance(goal),
                    g: tentative_g,
                    tail_distance: neighbor.manhattan_distance(tail),
                    cell: neighbor,
                });
            }
        }

        false
    }

    /// Walk the parent map backward from `cell`, producing a stack whose
    /// pop order runs from one step after the search start through `cell`
    pub fn reconstruct_path_from(&self, cell: Position) -> Vec<Position> {
        let mut path = Vec::new();
        let mut current = cell;
        while let Some(&parent) = self.came_from.get(&current) {
            path.push(current);
            current = parent;
        }
        path
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}
