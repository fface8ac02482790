//! Rules deciding whether a frontier wall may be carved
//!
//! A wall joins the maze only through a single existing passage, and only if
//! doing so does not create a passage that touches another one corner to
//! corner without a shared side.

use crate::io::error::Result;
use crate::spatial::{Cell, CubeNet, Direction, MazeGrid, Position};

/// Cardinal neighbors that are still walls, in [`Direction::ALL`] order
///
/// # Errors
///
/// Returns an error if `position` is not on the net
pub fn wall_neighbors(net: &CubeNet, grid: &MazeGrid, position: Position) -> Result<Vec<Position>> {
    Ok(net
        .neighbors(position)?
        .into_iter()
        .filter(|&neighbor| grid.is(neighbor, Cell::Wall))
        .collect())
}

/// Direction of the first cardinal neighbor that is a passage
///
/// # Errors
///
/// Returns an error if `position` is not on the net
pub fn passage_direction(
    net: &CubeNet,
    grid: &MazeGrid,
    position: Position,
) -> Result<Option<Direction>> {
    for direction in Direction::ALL {
        if grid.is(net.next_cell(position, direction)?, Cell::Passage) {
            return Ok(Some(direction));
        }
    }
    Ok(None)
}

/// Whether carving `position` would touch a passage diagonally ahead of it
///
/// Assumes the cell has exactly one passage neighbor. Looks one cell ahead,
/// away from that passage, and inspects both cells beside it. The sides are
/// taken relative to the heading after the step, which rotates when the step
/// crosses onto a turned face.
///
/// # Errors
///
/// Returns an error if `position` is not on the net
pub fn has_front_diagonal_passage(
    net: &CubeNet,
    grid: &MazeGrid,
    position: Position,
) -> Result<bool> {
    let Some(back) = passage_direction(net, grid, position)? else {
        return Ok(false);
    };

    let ahead = net.travel(position, back.opposite())?;
    for side in ahead.heading.perpendicular() {
        if grid.is(net.next_cell(ahead.position, side)?, Cell::Passage) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether a wall may become a passage
///
/// True iff the cell is a wall, exactly three of its four neighbors are walls,
/// and no passage sits diagonally ahead of it.
///
/// # Errors
///
/// Returns an error if `position` is not on the net
pub fn wall_can_become_passage(net: &CubeNet, grid: &MazeGrid, position: Position) -> Result<bool> {
    if !grid.is(position, Cell::Wall) {
        return Ok(false);
    }
    if wall_neighbors(net, grid, position)?.len() != 3 {
        return Ok(false);
    }
    Ok(!has_front_diagonal_passage(net, grid, position)?)
}
