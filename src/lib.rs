#![warn(clippy::all, clippy::cargo)]

mod app;
mod engine;
mod grid;
mod pattern;
mod render;

pub use app::{App, TickMode};
pub use engine::{count_alive_neighbors, GenerationEngine};
pub use grid::LifeGrid;
pub use pattern::{builtin_pattern, BuiltinPattern, Pattern, BUILTIN_PATTERNS, DEFAULT_PATTERN};
pub use render::TerminalRenderer;
