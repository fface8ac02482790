//! Spatial data structures and cube surface topology
//!
//! This module contains spatial-related functionality including:
//! - Cardinal directions and their axis algebra
//! - Boundary edge tables of the unfolded cube
//! - Neighbor lookup across face boundaries
//! - Maze cell storage

/// Cardinal directions, axes and orientation signs
pub mod direction;
/// Boundary edges and the validated pairing table
pub mod edges;
/// Maze cell states over the net
pub mod grid;
/// Cube net geometry and cross-face movement
pub mod net;

pub use direction::Direction;
pub use grid::{Cell, MazeGrid};
pub use net::CubeNet;

/// Grid coordinate as `[x, y]`
pub type Position = [usize; 2];
