/// Structural statistics of a carved maze
pub mod structure;
