//! Adjacency on the surface of a folded cube net
//!
//! The net is a 4x3 arrangement of `S x S` face blocks. Blocks `(1, 0)`,
//! `(0, 1)`, `(1, 1)`, `(2, 1)`, `(3, 1)` and `(1, 2)` hold the six faces;
//! every other cell is excluded. Moving off a face through a boundary edge
//! lands on the paired edge of the adjacent face, with the local coordinates
//! swapped and/or reflected as the pairing dictates.

use crate::io::configuration::MAX_SIDE_LENGTH;
use crate::io::error::{MazeError, Result, invalid_parameter, topology_error};
use crate::spatial::Position;
use crate::spatial::direction::{Axis, Direction};
use crate::spatial::edges::{Boundary, CrossingEffect, Edge, EdgeTable};

/// Start of a boundary run and the axis held fixed along it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLocation {
    /// First cell of the run
    pub origin: Position,
    /// Axis whose coordinate is constant along the run
    pub locked: Axis,
}

/// Result of one movement on the cube surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Travel {
    /// Cell reached
    pub position: Position,
    /// Direction of travel on arrival
    ///
    /// Differs from the requested direction after crossing an edge that swaps
    /// or reflects coordinates.
    pub heading: Direction,
}

/// Topology of a cube net with a fixed face size
#[derive(Debug, Clone, Copy)]
pub struct CubeNet {
    side: usize,
    edges: &'static EdgeTable,
}

impl CubeNet {
    /// Create a net whose faces are `side` cells wide
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `side` is zero or larger than `MAX_SIDE_LENGTH`
    /// - The built-in edge tables fail validation
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(invalid_parameter(
                "side_length",
                &side,
                &"must be a positive integer",
            ));
        }
        if side > MAX_SIDE_LENGTH {
            return Err(invalid_parameter(
                "side_length",
                &side,
                &format!("must not exceed {MAX_SIDE_LENGTH}"),
            ));
        }

        Ok(Self {
            side,
            edges: EdgeTable::standard()?,
        })
    }

    /// Cells along one face edge
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.side * 4
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.side * 3
    }

    /// Validated edge table backing this net
    pub const fn edge_table(&self) -> &'static EdgeTable {
        self.edges
    }

    /// Whether a coordinate lies inside the grid but outside every face
    pub const fn is_excluded(&self, position: Position) -> bool {
        let [x, y] = position;
        let s = self.side;
        x < self.width() && y < self.height() && (y < s || y >= 2 * s) && (x < s || x >= 2 * s)
    }

    /// Whether a coordinate lies on one of the six faces
    pub const fn contains(&self, position: Position) -> bool {
        position[0] < self.width() && position[1] < self.height() && !self.is_excluded(position)
    }

    /// Number of cells covered by faces
    pub const fn face_cell_count(&self) -> usize {
        self.side * self.side * 6
    }

    /// Center of the front face, where generation begins
    pub const fn start_position(&self) -> Position {
        let center = self.side * 3 / 2;
        [center, center]
    }

    /// Boundary edges present at a coordinate
    ///
    /// Interior cells have none and corner cells have two. With single-cell
    /// faces every cell sits on all four boundaries of its face.
    pub fn edges_at(&self, position: Position) -> Vec<Edge> {
        let [x, y] = position;
        let s = self.side;
        let mut edges = Vec::with_capacity(2);

        let checks = [
            (x % s == 0, Boundary::LeadingX, x / s, y / s),
            ((x + 1) % s == 0, Boundary::TrailingX, x / s, y / s),
            (y % s == 0, Boundary::LeadingY, y / s, x / s),
            ((y + 1) % s == 0, Boundary::TrailingY, y / s, x / s),
        ];
        for (on_boundary, boundary, band, member) in checks {
            if on_boundary {
                edges.extend(self.edges.edge_at(boundary, band, member));
            }
        }

        edges
    }

    /// Edge that `edge` touches once the net is folded
    pub fn paired_edge(&self, edge: Edge) -> Option<Edge> {
        self.edges.paired_edge(edge)
    }

    /// Movement direction, orientation flags and source of crossing `edge`
    pub fn crossing_effect(&self, edge: Edge) -> Option<CrossingEffect> {
        self.edges.crossing_effect(edge)
    }

    /// Origin and locked axis of the boundary run `edge` denotes
    pub fn locate_edge(&self, edge: Edge) -> Option<EdgeLocation> {
        let run = self.edges.run(edge)?;
        let s = self.side;

        // Single-member sets sit on the middle band of the other axis
        let along = if run.single { s } else { s * run.member };
        let across = if run.boundary.is_trailing() {
            s * (run.band + 1) - 1
        } else {
            s * run.band
        };

        let locked = run.boundary.locked_axis();
        let origin = match locked {
            Axis::X => [across, along],
            Axis::Y => [along, across],
        };
        Some(EdgeLocation { origin, locked })
    }

    /// Move one cell, following the cube surface across face boundaries
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `position` is not on a face
    /// - The edge tables cannot resolve the crossing
    pub fn travel(&self, position: Position, direction: Direction) -> Result<Travel> {
        if !self.contains(position) {
            return Err(MazeError::OutsideNet { position });
        }

        for edge in self.edges_at(position) {
            if let Some(effect) = self.crossing_effect(edge) {
                if effect.direction == direction {
                    return self.cross(position, effect);
                }
            }
        }

        let [dx, dy] = direction.offset();
        let moved = position[0]
            .checked_add_signed(dx)
            .zip(position[1].checked_add_signed(dy))
            .map(|(x, y)| [x, y])
            .filter(|&next| self.contains(next));

        moved
            .map(|next| Travel {
                position: next,
                heading: direction,
            })
            .ok_or_else(|| {
                topology_error(&format!(
                    "moving {direction} from ({}, {}) leaves the net without crossing an edge",
                    position[0], position[1]
                ))
            })
    }

    /// Cell reached by moving one step in `direction`
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is not on a face or the crossing cannot
    /// be resolved
    pub fn next_cell(&self, position: Position, direction: Direction) -> Result<Position> {
        self.travel(position, direction).map(|travel| travel.position)
    }

    /// Cells reached in each direction of [`Direction::ALL`]
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is not on a face
    pub fn neighbors(&self, position: Position) -> Result<[Position; 4]> {
        let mut neighbors = [position; 4];
        for (slot, direction) in neighbors.iter_mut().zip(Direction::ALL) {
            *slot = self.next_cell(position, direction)?;
        }
        Ok(neighbors)
    }

    fn cross(&self, position: Position, effect: CrossingEffect) -> Result<Travel> {
        let source = effect.source;
        let target = self
            .paired_edge(source)
            .ok_or_else(|| topology_error(&format!("edge {source} has no partner")))?;
        let location = self
            .locate_edge(target)
            .ok_or_else(|| topology_error(&format!("edge {target} has no location")))?;
        let heading = self
            .crossing_effect(target)
            .map(|back| back.direction.opposite())
            .ok_or_else(|| topology_error(&format!("edge {target} has no crossing effect")))?;

        let s = self.side;
        let mut relative = [position[0] % s, position[1] % s];
        if effect.swap {
            relative.swap(0, 1);
        }
        if effect.invert {
            relative = [s - 1 - relative[0], s - 1 - relative[1]];
        }

        let [base_x, base_y] = location.origin;
        let [rel_x, rel_y] = relative;
        let destination = match location.locked {
            Axis::X => [base_x, base_y + rel_y],
            Axis::Y => [base_x + rel_x, base_y],
        };

        Ok(Travel {
            position: destination,
            heading,
        })
    }
}
