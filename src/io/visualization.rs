//! Carve event capture and GIF generation for watching the maze grow

use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame};

use crate::io::configuration::{FINAL_FRAME_HOLD, MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result};
use crate::io::image::render_maze;
use crate::spatial::{CubeNet, MazeGrid, Position};

/// A single cell turning into a passage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveEvent {
    /// Carved coordinate
    pub position: Position,
    /// Generator step that carved it
    pub iteration: usize,
}

/// Records carve events so the generation can be replayed
#[derive(Debug, Clone, Default)]
pub struct VisualizationCapture {
    events: Vec<CarveEvent>,
}

impl VisualizationCapture {
    /// Create a capture sized for roughly `expected_events` carves
    pub fn new(expected_events: usize) -> Self {
        Self {
            events: Vec::with_capacity(expected_events),
        }
    }

    /// Record a carve at the given step
    pub fn record_carve(&mut self, position: Position, iteration: usize) {
        self.events.push(CarveEvent {
            position,
            iteration,
        });
    }

    /// All recorded events in carve order
    pub fn events(&self) -> &[CarveEvent] {
        &self.events
    }

    /// Number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Forget all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Export the replayed generation as an animated GIF
    ///
    /// Frames are skipped when the requested delay is below what viewers
    /// support, or when the run has more carves than `MAX_GIF_FRAMES`. The
    /// last frame shows the finished maze and is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No carve events were captured
    /// - An event cannot be replayed on a fresh grid of `net`
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        net: &CubeNet,
        output_path: &Path,
        cell_pixels: u32,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.events.is_empty() {
            return Err(MazeError::InvalidParameter {
                parameter: "visualization",
                value: String::from("0 events"),
                reason: String::from("No carve events captured for visualization"),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let viewer_skip = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize;
        let budget_skip = self.events.len().div_ceil(MAX_GIF_FRAMES);
        let skip_factor = viewer_skip.max(budget_skip).max(1);

        let frames = self.generate_frames(net, cell_pixels, effective_delay_ms, skip_factor)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    fn generate_frames(
        &self,
        net: &CubeNet,
        cell_pixels: u32,
        delay_ms: u32,
        skip_factor: usize,
    ) -> Result<Vec<Frame>> {
        let mut grid = MazeGrid::new(net);
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let mut frames = Vec::with_capacity(self.events.len() / skip_factor + 2);

        frames.push(Frame::from_parts(
            render_maze(&grid, None, false, cell_pixels)?,
            0,
            0,
            delay,
        ));

        let mut cursor = None;
        for (count, event) in self.events.iter().enumerate() {
            grid.carve(event.position)?;
            cursor = Some(event.position);

            if (count + 1) % skip_factor == 0 {
                frames.push(Frame::from_parts(
                    render_maze(&grid, cursor, false, cell_pixels)?,
                    0,
                    0,
                    delay,
                ));
            }
        }

        // Final frame displays longer for better visibility
        frames.push(Frame::from_parts(
            render_maze(&grid, cursor, true, cell_pixels)?,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms.saturating_mul(FINAL_FRAME_HOLD), 1),
        ));

        Ok(frames)
    }
}
