pub mod renderer;

pub use renderer::{AgentHud, Renderer};
