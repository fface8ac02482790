//! Randomized Prim's maze generation on the surface of a cube
//!
//! The cube is unfolded into a cross-shaped net of six square faces. Moving
//! off one face lands on the adjacent face of the folded cube, with the axis
//! swaps and reversals that fold requires, and the generator carves passages
//! using only that adjacency.

#![forbid(unsafe_code)]

/// Maze generation including the frontier and carvability rules
pub mod algorithm;
/// Structural analysis of carved mazes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Cube net topology and grid storage
pub mod spatial;

pub use io::error::{MazeError, Result};
