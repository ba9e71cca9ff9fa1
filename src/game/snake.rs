use std::collections::VecDeque;

use super::direction::Direction;
use super::state::Position;

/// The snake in the game.
///
/// The body is a FIFO of previously occupied cells, oldest first; the head
/// is kept separately. `tail` caches the cell most recently popped off the
/// body front — that cell stays blocked for one extra step, which is what
/// makes tail-chasing always survivable. Queued moves let both the agent
/// (which pre-plans whole paths) and a fast-fingered human buffer several
/// turns ahead of consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    head: Position,
    tail: Position,
    pending: VecDeque<Position>,
    growth_credit: u32,
    direction: Direction,
}

impl Snake {
    /// Create a new snake: a bare head with an empty body and the tail
    /// coinciding with the head
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::new(),
            head,
            tail: head,
            pending: VecDeque::new(),
            growth_credit: 0,
            direction: Direction::Up,
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn tail(&self) -> Position {
        self.tail
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Number of body segments (the head is not counted)
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True if the cell is covered by the body or the trailing tail cell.
    /// The head is deliberately excluded; movement legality treats it
    /// separately because the head vacates its cell on the step being
    /// evaluated.
    pub fn occupies(&self, cell: Position) -> bool {
        cell == self.tail || self.body.contains(&cell)
    }

    /// Queue one growth event; the next tail pop is skipped instead
    pub fn grow(&mut self) {
        self.growth_credit += 1;
    }

    /// Queue a cell decided by the agent
    pub fn queue_agent_move(&mut self, cell: Position) {
        self.pending.push_back(cell);
    }

    /// Queue a move one cell in `direction` relative to the last queued
    /// cell (or the head when nothing is queued), and commit the direction.
    /// Used by human control; several turns can be buffered between steps.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.direction = direction;
        let base = self.pending.back().copied().unwrap_or(self.head);
        self.pending.push_back(base.moved_in_direction(direction));
    }

    /// Advance one step under human control: the head moves to the queued
    /// cell if any, otherwise drifts one cell in the committed direction
    pub fn step_human(&mut self) {
        self.body.push_back(self.head);
        self.apply_tail_rule();
        self.head = match self.pending.pop_front() {
            Some(cell) => cell,
            None => self.head.moved_in_direction(self.direction),
        };
    }

    /// Advance one step under agent control: the head moves to the queued
    /// cell. The agent always pre-queues its target; with nothing queued
    /// this is a no-op.
    pub fn step_agent(&mut self) {
        let Some(next) = self.pending.pop_front() else {
            return;
        };
        self.body.push_back(self.head);
        self.head = next;
        self.apply_tail_rule();
    }

    fn apply_tail_rule(&mut self) {
        if self.growth_credit == 0 {
            if let Some(cell) = self.body.pop_front() {
                self.tail = cell;
            }
        } else {
            self.growth_credit -= 1;
        }
    }
}
