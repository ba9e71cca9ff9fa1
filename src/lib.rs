//! Snake with an autonomous A* pilot
//!
//! This library provides:
//! - Core game logic (game module)
//! - A* search and tail-safe move planning for the autopilot (agent module)
//! - TUI rendering (render module)
//! - Keyboard handling for the human mode (input module)
//! - Session and agent decision metrics (metrics module)
//! - Human and agent execution modes (modes module)

pub mod agent;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
