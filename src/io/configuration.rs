//! Generation constants and runtime configuration defaults

// Net dimensions
/// Default number of cells along one face edge
pub const DEFAULT_SIDE_LENGTH: usize = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed face side length
pub const MAX_SIDE_LENGTH: usize = 1024;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default edge length of one maze cell in exported images
pub const DEFAULT_CELL_PIXELS: u32 = 8;

// Output settings
/// Default path of the exported maze image
pub const DEFAULT_OUTPUT: &str = "cube_maze.png";
/// Suffix added to the output stem for the generation animation
pub const VISUALIZATION_SUFFIX: &str = "_generation";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 10;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames written to a generation animation
pub const MAX_GIF_FRAMES: usize = 600;
/// Multiplier applied to the frame delay of the final animation frame
pub const FINAL_FRAME_HOLD: u32 = 25;

// Palette
/// Cells that belong to no cube face
pub const EXCLUDED_COLOR: [u8; 4] = [100, 100, 100, 255];
/// Cells not yet carved
pub const WALL_COLOR: [u8; 4] = [10, 10, 10, 255];
/// Carved cells
pub const PASSAGE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Most recently carved cell while generation is running
pub const CURSOR_ACTIVE_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Most recently carved cell once generation has finished
pub const CURSOR_COMPLETE_COLOR: [u8; 4] = [0, 255, 0, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
