/// Carvability rules including the diagonal-adjacency check
pub mod carving;
/// Multiset of wall candidates with uniform random removal
pub mod frontier;
/// Stepwise randomized Prim's generator
pub mod generator;
