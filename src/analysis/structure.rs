//! Structural checks over a carved maze
//!
//! Counts cells, walks the passage graph across face boundaries and looks for
//! the corner-only contacts the generator is meant to prevent.

use std::collections::{HashSet, VecDeque};

use bitvec::prelude::*;

use crate::algorithm::carving::wall_can_become_passage;
use crate::io::error::Result;
use crate::spatial::{Cell, CubeNet, Direction, MazeGrid, Position};

/// Summary of a maze's passage graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeReport {
    /// Number of passage cells
    pub passages: usize,
    /// Number of wall cells
    pub walls: usize,
    /// Number of cells outside the net
    pub excluded: usize,
    /// Distinct pairs of adjacent passages
    pub passage_links: usize,
    /// Passages with exactly one passage neighbor
    pub dead_ends: usize,
    /// Passages reachable from the first passage found
    pub reachable_passages: usize,
    /// 2x2 blocks inside one face touching only at a corner
    pub in_face_diagonal_conflicts: usize,
}

impl MazeReport {
    /// Analyze a grid over its net
    ///
    /// # Errors
    ///
    /// Returns an error if the grid does not belong to `net`
    pub fn analyze(net: &CubeNet, grid: &MazeGrid) -> Result<Self> {
        let mut links = HashSet::new();
        let mut dead_ends = 0;

        for position in grid.positions_of(Cell::Passage) {
            let mut degree = 0;
            for direction in Direction::ALL {
                let neighbor = net.next_cell(position, direction)?;
                if grid.is(neighbor, Cell::Passage) {
                    degree += 1;
                    links.insert(if position <= neighbor {
                        (position, neighbor)
                    } else {
                        (neighbor, position)
                    });
                }
            }
            if degree == 1 {
                dead_ends += 1;
            }
        }

        Ok(Self {
            passages: grid.count(Cell::Passage),
            walls: grid.count(Cell::Wall),
            excluded: grid.count(Cell::Excluded),
            passage_links: links.len(),
            dead_ends,
            reachable_passages: reachable_passages(net, grid)?,
            in_face_diagonal_conflicts: in_face_diagonal_conflicts(net, grid),
        })
    }

    /// Whether every passage can reach every other
    pub const fn is_connected(&self) -> bool {
        self.reachable_passages == self.passages
    }

    /// Connected and acyclic
    pub const fn is_perfect(&self) -> bool {
        self.is_connected() && self.passage_links + 1 == self.passages
    }
}

fn reachable_passages(net: &CubeNet, grid: &MazeGrid) -> Result<usize> {
    let Some(origin) = grid.positions_of(Cell::Passage).next() else {
        return Ok(0);
    };

    let height = grid.height();
    let index = |[x, y]: Position| x * height + y;
    let mut visited = bitvec![0; grid.width() * height];
    let mut queue = VecDeque::from([origin]);
    visited.set(index(origin), true);
    let mut reached = 0;

    while let Some(position) = queue.pop_front() {
        reached += 1;
        for neighbor in net.neighbors(position)? {
            let seen = visited.get(index(neighbor)).is_some_and(|bit| *bit);
            if grid.is(neighbor, Cell::Passage) && !seen {
                visited.set(index(neighbor), true);
                queue.push_back(neighbor);
            }
        }
    }
    Ok(reached)
}

fn in_face_diagonal_conflicts(net: &CubeNet, grid: &MazeGrid) -> usize {
    let side = net.side();
    let mut conflicts = 0;

    for x in 0..grid.width().saturating_sub(1) {
        for y in 0..grid.height().saturating_sub(1) {
            if x / side != (x + 1) / side || y / side != (y + 1) / side {
                continue;
            }
            let passage = |position| grid.is(position, Cell::Passage);
            let wall = |position| grid.is(position, Cell::Wall);
            let (a, b, c, d) = ([x, y], [x + 1, y], [x, y + 1], [x + 1, y + 1]);

            if (passage(a) && passage(d) && wall(b) && wall(c))
                || (passage(b) && passage(c) && wall(a) && wall(d))
            {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Walls that could still be carved
///
/// Empty once generation is complete.
///
/// # Errors
///
/// Returns an error if the grid does not belong to `net`
pub fn carvable_walls(net: &CubeNet, grid: &MazeGrid) -> Result<Vec<Position>> {
    let mut carvable = Vec::new();
    for position in grid.positions_of(Cell::Wall) {
        if wall_can_become_passage(net, grid, position)? {
            carvable.push(position);
        }
    }
    Ok(carvable)
}
