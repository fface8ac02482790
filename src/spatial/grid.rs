//! Cell states of the maze laid out over the cube net

use std::fmt;

use ndarray::Array2;

use crate::io::error::{MazeError, Result};
use crate::spatial::Position;
use crate::spatial::net::CubeNet;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not part of any cube face
    Excluded,
    /// Not yet part of the maze
    Wall,
    /// Carved into the maze
    Passage,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excluded => "excluded",
            Self::Wall => "wall",
            Self::Passage => "passage",
        };
        f.write_str(name)
    }
}

/// Maze cells indexed by `[x, y]`
///
/// Excluded cells are fixed at construction and the only permitted transition
/// is `Wall` to `Passage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Array2<Cell>,
    side: usize,
}

impl MazeGrid {
    /// Fill the net: faces become `Wall`, everything else `Excluded`
    pub fn new(net: &CubeNet) -> Self {
        let cells = Array2::from_shape_fn((net.width(), net.height()), |(x, y)| {
            if net.contains([x, y]) {
                Cell::Wall
            } else {
                Cell::Excluded
            }
        });

        Self {
            cells,
            side: net.side(),
        }
    }

    /// Cells along one face edge
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// State at a coordinate, `None` outside the grid
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Whether the coordinate holds the given state
    pub fn is(&self, position: Position, cell: Cell) -> bool {
        self.get(position) == Some(cell)
    }

    /// Turn a wall into a passage
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The coordinate is outside the grid
    /// - The cell is not a `Wall`
    pub fn carve(&mut self, position: Position) -> Result<()> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(MazeError::OutsideNet { position })?;

        match *cell {
            Cell::Wall => {
                *cell = Cell::Passage;
                Ok(())
            }
            from => Err(MazeError::InvalidTransition { position, from }),
        }
    }

    /// Number of cells in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&state| state == cell).count()
    }

    /// Every coordinate, column by column
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = self.cells.dim();
        (0..width).flat_map(move |x| (0..height).map(move |y| [x, y]))
    }

    /// Coordinates currently holding the given state
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&position| self.is(position, cell))
    }
}
