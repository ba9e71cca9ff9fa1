//! Decision statistics for the autopilot
//!
//! Tracks which strategy produced each move and how often the planner had
//! to fall back to stalling or tail-chasing, plus per-episode scores over
//! a rolling window. Purely diagnostic; nothing here feeds back into
//! planning.

use std::collections::VecDeque;

use crate::agent::{Decision, Resolution, Strategy};

/// Rolling statistics over the autopilot's decisions and episodes
#[derive(Debug, Clone)]
pub struct AgentStats {
    /// Episode scores (rolling window)
    episode_scores: VecDeque<u32>,

    /// Episode lengths in steps (rolling window)
    episode_lengths: VecDeque<u32>,

    total_episodes: usize,
    total_decisions: usize,

    direct_moves: usize,
    conservative_moves: usize,
    stalled_moves: usize,
    tail_chases: usize,

    best_score: u32,
    window_size: usize,
}

impl AgentStats {
    pub fn new(window_size: usize) -> Self {
        Self {
            episode_scores: VecDeque::with_capacity(window_size),
            episode_lengths: VecDeque::with_capacity(window_size),
            total_episodes: 0,
            total_decisions: 0,
            direct_moves: 0,
            conservative_moves: 0,
            stalled_moves: 0,
            tail_chases: 0,
            best_score: 0,
            window_size,
        }
    }

    pub fn record_decision(&mut self, decision: &Decision) {
        self.total_decisions += 1;
        match decision.strategy {
            Strategy::Direct => self.direct_moves += 1,
            Strategy::Conservative => self.conservative_moves += 1,
        }
        match decision.resolution {
            Resolution::Planned => {}
            Resolution::Stalled => self.stalled_moves += 1,
            Resolution::TailChase => self.tail_chases += 1,
        }
    }

    pub fn record_episode(&mut self, score: u32, steps: u32) {
        if self.episode_scores.len() == self.window_size {
            self.episode_scores.pop_front();
            self.episode_lengths.pop_front();
        }
        self.episode_scores.push_back(score);
        self.episode_lengths.push_back(steps);

        self.total_episodes += 1;
        if score > self.best_score {
            self.best_score = score;
        }
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub fn total_decisions(&self) -> usize {
        self.total_decisions
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn mean_score(&self) -> f32 {
        if self.episode_scores.is_empty() {
            return 0.0;
        }
        self.episode_scores.iter().sum::<u32>() as f32 / self.episode_scores.len() as f32
    }

    /// Fraction of decisions that were fallbacks rather than planned moves
    pub fn fallback_rate(&self) -> f32 {
        if self.total_decisions == 0 {
            return 0.0;
        }
        (self.stalled_moves + self.tail_chases) as f32 / self.total_decisions as f32
    }

    pub fn format_summary(&self) -> String {
        format!(
            "episodes {} | best {} | mean {:.1} | direct {} | conservative {} | stalled {} | tail {}",
            self.total_episodes,
            self.best_score,
            self.mean_score(),
            self.direct_moves,
            self.conservative_moves,
            self.stalled_moves,
            self.tail_chases,
        )
    }
}

impl Default for AgentStats {
    fn default() -> Self {
        Self::new(100)
    }
}
