pub mod agent_stats;
pub mod game_metrics;

pub use agent_stats::AgentStats;
pub use game_metrics::GameMetrics;
