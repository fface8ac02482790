use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::carving::{wall_can_become_passage, wall_neighbors};
use crate::algorithm::frontier::Frontier;
use crate::io::configuration::GIF_FRAME_DELAY_MS;
use crate::io::error::{MazeError, Result};
use crate::io::visualization::VisualizationCapture;
use crate::spatial::{CubeNet, MazeGrid, Position};

/// Lifecycle of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No grid exists; stepping reports [`StepOutcome::NotReady`]
    Uninitialized,
    /// Grid built, nothing carved yet
    NotStarted,
    /// Start carved and candidates remain
    Growing,
    /// Start carved and the frontier is exhausted
    Complete,
}

/// Result of a single [`MazeGenerator::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The grid has not been initialized
    NotReady,
    /// One wall candidate was evaluated, or the start cell was placed
    Advanced {
        /// Whether candidates remain after this step
        can_continue: bool,
        /// Most recently carved cell
        cursor: Position,
        /// Cell carved by this step, if the candidate was accepted
        carved: Option<Position>,
    },
    /// The frontier was already empty
    Finished {
        /// Last carved cell
        cursor: Position,
    },
}

impl StepOutcome {
    /// Whether another step could make progress
    pub const fn can_continue(self) -> bool {
        match self {
            Self::Advanced { can_continue, .. } => can_continue,
            Self::NotReady | Self::Finished { .. } => false,
        }
    }

    /// Cursor after the step, absent when not ready
    pub const fn cursor(self) -> Option<Position> {
        match self {
            Self::Advanced { cursor, .. } | Self::Finished { cursor } => Some(cursor),
            Self::NotReady => None,
        }
    }

    /// Cell carved by the step
    pub const fn carved(self) -> Option<Position> {
        match self {
            Self::Advanced { carved, .. } => carved,
            Self::NotReady | Self::Finished { .. } => None,
        }
    }
}

/// Randomized Prim's maze generator over a cube net
///
/// Owns the grid, the wall frontier and the random source. Generation is
/// driven by the caller one [`step`](Self::step) at a time, so every
/// intermediate state is a valid, displayable maze.
#[derive(Debug)]
pub struct MazeGenerator<R = StdRng> {
    net: CubeNet,
    grid: Option<MazeGrid>,
    frontier: Frontier,
    cursor: Option<Position>,
    rng: R,
    iteration: usize,
    visualization: Option<VisualizationCapture>,
}

impl MazeGenerator<StdRng> {
    /// Create an initialized generator with a seeded random source
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is zero or exceeds the supported maximum
    pub fn seeded(side: usize, seed: u64) -> Result<Self> {
        Self::with_rng(side, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Create an initialized generator drawing from `rng`
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is zero or exceeds the supported maximum
    pub fn with_rng(side: usize, rng: R) -> Result<Self> {
        let net = CubeNet::new(side)?;
        let mut generator = Self {
            net,
            grid: None,
            frontier: Frontier::new(),
            cursor: None,
            rng,
            iteration: 0,
            visualization: None,
        };
        generator.initialize();
        Ok(generator)
    }

    /// Build a fresh grid and enter [`Phase::NotStarted`]
    pub fn initialize(&mut self) {
        self.grid = Some(MazeGrid::new(&self.net));
        self.clear_progress();
    }

    /// Discard grid, frontier and cursor, returning to [`Phase::Uninitialized`]
    pub fn reset(&mut self) {
        self.grid = None;
        self.clear_progress();
    }

    fn clear_progress(&mut self) {
        self.frontier.clear();
        self.cursor = None;
        self.iteration = 0;
        if let Some(viz) = &mut self.visualization {
            viz.clear();
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        match (&self.grid, self.cursor) {
            (None, _) => Phase::Uninitialized,
            (Some(_), None) => Phase::NotStarted,
            (Some(_), Some(_)) if self.frontier.is_empty() => Phase::Complete,
            (Some(_), Some(_)) => Phase::Growing,
        }
    }

    /// Advance generation by one wall evaluation
    ///
    /// The first call carves the start cell. Later calls draw one frontier
    /// entry at random, carve it if it is still a valid extension, and drop
    /// that entry either way.
    ///
    /// # Errors
    ///
    /// Returns an error only if the grid and topology disagree, which a
    /// validated edge table rules out
    pub fn step(&mut self) -> Result<StepOutcome> {
        let Some(grid) = self.grid.as_mut() else {
            return Ok(StepOutcome::NotReady);
        };

        let Some(previous) = self.cursor else {
            let start = self.net.start_position();
            grid.carve(start)?;
            self.frontier.extend(wall_neighbors(&self.net, grid, start)?);
            self.cursor = Some(start);
            self.iteration += 1;
            if let Some(viz) = &mut self.visualization {
                viz.record_carve(start, self.iteration);
            }
            return Ok(StepOutcome::Advanced {
                can_continue: true,
                cursor: start,
                carved: Some(start),
            });
        };

        let Some(candidate) = self.frontier.take_random(&mut self.rng) else {
            return Ok(StepOutcome::Finished { cursor: previous });
        };
        self.iteration += 1;

        let mut carved = None;
        if wall_can_become_passage(&self.net, grid, candidate)? {
            grid.carve(candidate)?;
            self.frontier
                .extend(wall_neighbors(&self.net, grid, candidate)?);
            if let Some(viz) = &mut self.visualization {
                viz.record_carve(candidate, self.iteration);
            }
            carved = Some(candidate);
        }

        let cursor = carved.unwrap_or(previous);
        self.cursor = Some(cursor);
        Ok(StepOutcome::Advanced {
            can_continue: !self.frontier.is_empty(),
            cursor,
            carved,
        })
    }

    /// Step until complete or until `max_steps` steps have advanced
    ///
    /// Returns the number of steps that advanced.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`step`](Self::step)
    pub fn generate(&mut self, max_steps: Option<usize>) -> Result<usize> {
        let mut steps = 0;
        while max_steps.is_none_or(|limit| steps < limit) {
            let outcome = self.step()?;
            if !matches!(outcome, StepOutcome::Advanced { .. }) {
                break;
            }
            steps += 1;
            if !outcome.can_continue() {
                break;
            }
        }
        Ok(steps)
    }

    /// Topology the generator carves over
    pub const fn net(&self) -> &CubeNet {
        &self.net
    }

    /// Grid, absent while uninitialized
    pub const fn grid(&self) -> Option<&MazeGrid> {
        self.grid.as_ref()
    }

    /// Pending wall candidates
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Most recently carved cell
    pub const fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    /// Steps evaluated since the last initialize or reset
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Record carve events from now on for GIF export
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(self.net.face_cell_count()));
    }

    /// Captured carve events, if visualization is enabled
    pub const fn visualization(&self) -> Option<&VisualizationCapture> {
        self.visualization.as_ref()
    }

    /// Export the captured generation as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - GIF export fails
    pub fn export_visualization(&self, output_path: &Path, cell_pixels: u32) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(MazeError::InvalidParameter {
                    parameter: "visualization",
                    value: "disabled".to_string(),
                    reason: "Visualization was not enabled for this run".to_string(),
                })
            },
            |viz| viz.export_gif(&self.net, output_path, cell_pixels, GIF_FRAME_DELAY_MS),
        )
    }
}
