/// Command-line interface and run orchestration
pub mod cli;
/// Defaults, limits and display constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of the maze net
pub mod image;
/// Terminal progress display
pub mod progress;
/// Carve capture and GIF export
pub mod visualization;
