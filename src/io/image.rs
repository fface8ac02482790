//! PNG export of the maze net

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::io::configuration::{
    CURSOR_ACTIVE_COLOR, CURSOR_COMPLETE_COLOR, EXCLUDED_COLOR, PASSAGE_COLOR, WALL_COLOR,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::{Cell, MazeGrid, Position};

/// Display color of a cell state
pub const fn cell_color(cell: Cell) -> [u8; 4] {
    match cell {
        Cell::Excluded => EXCLUDED_COLOR,
        Cell::Wall => WALL_COLOR,
        Cell::Passage => PASSAGE_COLOR,
    }
}

/// Render the grid with each cell drawn as a `cell_pixels` square
///
/// The cursor is highlighted red while generating and green once complete.
///
/// # Errors
///
/// Returns an error if `cell_pixels` is zero or the image would exceed `u32` dimensions
pub fn render_maze(
    grid: &MazeGrid,
    cursor: Option<Position>,
    complete: bool,
    cell_pixels: u32,
) -> Result<RgbaImage> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"must be at least 1",
        ));
    }

    let dimension = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(cell_pixels))
            .ok_or_else(|| invalid_parameter("cell_pixels", &cell_pixels, &"image too large"))
    };
    let width = dimension(grid.width())?;
    let height = dimension(grid.height())?;

    let cursor_color = if complete {
        CURSOR_COMPLETE_COLOR
    } else {
        CURSOR_ACTIVE_COLOR
    };

    Ok(RgbaImage::from_fn(width, height, |px, py| {
        let position = [(px / cell_pixels) as usize, (py / cell_pixels) as usize];
        if cursor == Some(position) {
            Rgba(cursor_color)
        } else {
            Rgba(cell_color(grid.get(position).unwrap_or(Cell::Excluded)))
        }
    }))
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(
    grid: &MazeGrid,
    cursor: Option<Position>,
    complete: bool,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_maze(grid, cursor, complete, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
