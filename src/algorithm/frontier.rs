//! Candidate walls awaiting evaluation by the generator

use rand::Rng;

use crate::spatial::Position;

/// Multiset of wall coordinates adjacent to the carved region
///
/// A coordinate appears once for every passage that discovered it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    walls: Vec<Position>,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self { walls: Vec::new() }
    }

    /// Number of entries, counting duplicates
    pub const fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether no candidates remain
    pub const fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Add one candidate
    pub fn push(&mut self, position: Position) {
        self.walls.push(position);
    }

    /// Number of entries for one coordinate
    pub fn occurrences(&self, position: Position) -> usize {
        self.walls.iter().filter(|&&wall| wall == position).count()
    }

    /// Remove and return one entry chosen uniformly at random
    ///
    /// Other entries for the same coordinate stay in place.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if self.walls.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.walls.len());
        Some(self.walls.swap_remove(index))
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.walls.clear();
    }

    /// Entries in storage order
    pub fn as_slice(&self) -> &[Position] {
        &self.walls
    }
}

impl Extend<Position> for Frontier {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.walls.extend(iter);
    }
}
