//! Command-line interface for generating and exporting a cube maze

use crate::algorithm::generator::{MazeGenerator, Phase, StepOutcome};
use crate::analysis::structure::MazeReport;
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_SIDE_LENGTH, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_maze_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cubemaze")]
#[command(
    author,
    version,
    about = "Carve a randomized Prim's maze across the faces of an unfolded cube"
)]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Cells along one side of each cube face
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIDE_LENGTH)]
    pub side: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Stop after this many steps even if the maze is unfinished
    #[arg(short, long)]
    pub max_steps: Option<usize>,

    /// Pixel size of one cell in exported images
    #[arg(short = 'p', long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Leave an existing output file untouched
    #[arg(long)]
    pub no_overwrite: bool,
}

impl Cli {
    /// Check if an existing output should be kept
    pub const fn skip_existing(&self) -> bool {
        self.no_overwrite
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// GIF path next to the PNG output
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let viz_name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = self.output.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}

/// Outcome of one completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Steps that advanced generation
    pub steps: usize,
    /// Whether the frontier was exhausted
    pub complete: bool,
    /// Structure of the final maze
    pub report: MazeReport,
    /// Written PNG
    pub output: PathBuf,
    /// Written GIF, when visualization was requested
    pub visualization: Option<PathBuf>,
}

/// Drives one generation from CLI arguments to exported files
pub struct MazeRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, export and report
    ///
    /// Returns `None` when the output exists and overwriting is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The side length or cell size is invalid
    /// - Image export fails
    pub fn run(&mut self) -> Result<Option<RunSummary>> {
        if self.cli.skip_existing() && self.cli.output.exists() {
            self.log(&format!(
                "Skipping: {} (output exists)",
                self.cli.output.display()
            ));
            return Ok(None);
        }

        let mut generator = MazeGenerator::seeded(self.cli.side, self.cli.seed)?;
        if self.cli.visualize {
            generator.enable_visualization();
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(generator.net().face_cell_count());
        }

        let mut steps = 0;
        let mut passages = 0;
        while self.cli.max_steps.is_none_or(|limit| steps < limit) {
            let outcome = generator.step()?;
            if !matches!(outcome, StepOutcome::Advanced { .. }) {
                break;
            }
            steps += 1;
            if outcome.carved().is_some() {
                passages += 1;
            }
            if let Some(ref pm) = self.progress_manager {
                pm.update(passages, generator.frontier().len());
            }
            if !outcome.can_continue() {
                break;
            }
        }

        let complete = generator.phase() == Phase::Complete;
        if let Some(ref pm) = self.progress_manager {
            pm.finish(if complete { "complete" } else { "stopped" });
        }

        let grid = generator.grid().ok_or_else(|| {
            invalid_parameter("generator", &"uninitialized", &"grid missing after generation")
        })?;
        export_maze_as_png(
            grid,
            generator.cursor(),
            complete,
            self.cli.cell_pixels,
            &self.cli.output,
        )?;

        let visualization = if self.cli.visualize {
            let viz_path = self.cli.visualization_path();
            generator.export_visualization(&viz_path, self.cli.cell_pixels)?;
            Some(viz_path)
        } else {
            None
        };

        let report = MazeReport::analyze(generator.net(), grid)?;
        let summary = RunSummary {
            steps,
            complete,
            report,
            output: self.cli.output.clone(),
            visualization,
        };
        self.report(&summary);

        Ok(Some(summary))
    }

    fn report(&self, summary: &RunSummary) {
        let report = &summary.report;
        self.log(&format!(
            "{} steps, {} passages, {} walls, {} dead ends, perfect: {}",
            summary.steps,
            report.passages,
            report.walls,
            report.dead_ends,
            report.is_perfect()
        ));
        self.log(&format!("Wrote {}", summary.output.display()));
        if let Some(ref path) = summary.visualization {
            self.log(&format!("Wrote {}", path.display()));
        }
    }

    // Allow print for user feedback on skipped and written files
    #[allow(clippy::print_stderr)]
    fn log(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
