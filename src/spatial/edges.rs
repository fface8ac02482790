//! Boundary edges of the cube net and the table pairing them across folds
//!
//! Face and edge labels of the unfolded cube (`S` cells per face):
//!
//! ```text
//!             1
//!          24     2
//!             23
//!    19       22       3      4
//! 18    20|21    11|10    8|7    5
//!    17       12       9      6
//!             13
//!          16    14
//!             15
//! ```
//!
//! Edges are grouped into boundary sets by the column (`x`) or row (`y`) band
//! they sit on. A set with several members is split along the perpendicular
//! coordinate, one member per face block.

use std::fmt;
use std::sync::LazyLock;

use crate::io::error::{MazeError, Result, topology_error};
use crate::spatial::direction::{Axis, Direction, Sign};

/// Number of distinct boundary edges on the net
pub const EDGE_COUNT: u8 = 24;

const SLOTS: usize = EDGE_COUNT as usize + 1;

/// Identifier of one boundary segment of the net (1 to 24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(u8);

impl Edge {
    /// Wrap a raw identifier, rejecting anything outside `1..=24`
    pub const fn new(id: u8) -> Option<Self> {
        if matches!(id, 1..=EDGE_COUNT) {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Raw identifier
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Every valid edge in identifier order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=EDGE_COUNT).filter_map(Self::new)
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of a face an edge set runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// First column of a face block
    LeadingX,
    /// Last column of a face block
    TrailingX,
    /// First row of a face block
    LeadingY,
    /// Last row of a face block
    TrailingY,
}

impl Boundary {
    /// All boundaries in table order
    pub const ALL: [Self; 4] = [
        Self::LeadingX,
        Self::TrailingX,
        Self::LeadingY,
        Self::TrailingY,
    ];

    /// Direction that leaves the face through this boundary
    pub const fn outward(self) -> Direction {
        match self {
            Self::LeadingX => Direction::Left,
            Self::TrailingX => Direction::Right,
            Self::LeadingY => Direction::Up,
            Self::TrailingY => Direction::Down,
        }
    }

    /// Axis whose coordinate stays fixed along the boundary
    pub const fn locked_axis(self) -> Axis {
        match self {
            Self::LeadingX | Self::TrailingX => Axis::X,
            Self::LeadingY | Self::TrailingY => Axis::Y,
        }
    }

    /// Whether the boundary is the last column or row of its block
    pub const fn is_trailing(self) -> bool {
        matches!(self, Self::TrailingX | Self::TrailingY)
    }
}

/// Edge identifiers grouped by boundary and band
///
/// `x` sets are indexed by `x / S` (4 bands) and split by `y / S`;
/// `y` sets are indexed by `y / S` (3 bands) and split by `x / S`.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySets {
    /// First columns of each column band
    pub x_leading: [&'static [u8]; 4],
    /// Last columns of each column band
    pub x_trailing: [&'static [u8]; 4],
    /// First rows of each row band
    pub y_leading: [&'static [u8]; 3],
    /// Last rows of each row band
    pub y_trailing: [&'static [u8]; 3],
}

impl BoundarySets {
    /// Edge sets of one boundary, one entry per band
    pub const fn bands(&self, boundary: Boundary) -> &[&'static [u8]] {
        match boundary {
            Boundary::LeadingX => &self.x_leading,
            Boundary::TrailingX => &self.x_trailing,
            Boundary::LeadingY => &self.y_leading,
            Boundary::TrailingY => &self.y_trailing,
        }
    }
}

/// Boundary sets of the cross-shaped net
pub const STANDARD_BOUNDARIES: BoundarySets = BoundarySets {
    x_leading: [&[18], &[24, 21, 16], &[10], &[7]],
    x_trailing: [&[20], &[2, 11, 14], &[8], &[5]],
    y_leading: [&[1], &[19, 22, 3, 4], &[13]],
    y_trailing: [&[23], &[17, 12, 9, 6], &[15]],
};

/// How coordinates transform when crossing from the first edge of a pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    /// Axis of the forward movement
    pub axis: Axis,
    /// Sign of the forward movement along `axis`
    pub sign: Sign,
    /// Local face coordinates are exchanged
    pub swap: bool,
    /// Local face coordinates are reflected
    pub invert: bool,
}

impl Orientation {
    /// Movement direction that crosses from the first edge to the second
    pub const fn forward(self) -> Direction {
        Direction::from_axis(self.axis, self.sign)
    }

    /// Heading with which a forward crossing enters the far face
    ///
    /// Swapping rotates the axis, inverting reverses the sign.
    pub const fn arrival(self) -> Direction {
        let axis = if self.swap {
            self.axis.other()
        } else {
            self.axis
        };
        let sign = if self.invert {
            self.sign.negated()
        } else {
            self.sign
        };
        Direction::from_axis(axis, sign)
    }
}

/// Two edges that touch once the net is folded into a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePairing {
    /// Edge the orientation is written from
    pub first: u8,
    /// Edge the orientation is written towards
    pub second: u8,
    /// Crossing orientation read from `first`
    pub orientation: Orientation,
}

const fn pairing(
    first: u8,
    second: u8,
    axis: Axis,
    sign: Sign,
    swap: bool,
    invert: bool,
) -> EdgePairing {
    EdgePairing {
        first,
        second,
        orientation: Orientation {
            axis,
            sign,
            swap,
            invert,
        },
    }
}

/// The twelve physical cube edges
pub const EDGE_PAIRINGS: [EdgePairing; 12] = [
    pairing(1, 4, Axis::Y, Sign::Positive, false, true),
    pairing(2, 3, Axis::X, Sign::Positive, true, true),
    pairing(5, 18, Axis::X, Sign::Positive, false, false),
    pairing(6, 15, Axis::Y, Sign::Negative, false, true),
    pairing(7, 8, Axis::X, Sign::Negative, false, false),
    pairing(9, 14, Axis::Y, Sign::Negative, true, false),
    pairing(16, 17, Axis::X, Sign::Negative, true, true),
    pairing(12, 13, Axis::Y, Sign::Negative, false, false),
    // 19 is the top of the left face, so leaving through it moves up
    pairing(19, 24, Axis::Y, Sign::Positive, true, false),
    pairing(20, 21, Axis::X, Sign::Positive, false, false),
    pairing(22, 23, Axis::Y, Sign::Positive, false, false),
    pairing(11, 10, Axis::X, Sign::Positive, false, false),
];

/// Effect of leaving a face through an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingEffect {
    /// Movement direction that triggers the crossing
    pub direction: Direction,
    /// Local face coordinates are exchanged
    pub swap: bool,
    /// Local face coordinates are reflected
    pub invert: bool,
    /// Edge being left
    pub source: Edge,
}

/// Position of an edge inside the boundary sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRun {
    /// Boundary the edge runs along
    pub boundary: Boundary,
    /// Column or row band of the boundary set
    pub band: usize,
    /// Index of the edge inside its set
    pub member: usize,
    /// Whether the set holds only this edge
    pub single: bool,
}

/// Validated lookup tables for every edge
///
/// Built once from boundary sets and pairings. Construction fails unless each
/// identifier lies on exactly one boundary, belongs to exactly one pairing with
/// a distinct partner, and crosses in the outward direction of its boundary.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    boundaries: BoundarySets,
    partners: [Option<Edge>; SLOTS],
    effects: [Option<CrossingEffect>; SLOTS],
    runs: [Option<EdgeRun>; SLOTS],
}

static STANDARD_TABLE: LazyLock<std::result::Result<EdgeTable, String>> = LazyLock::new(|| {
    EdgeTable::build(&EDGE_PAIRINGS, STANDARD_BOUNDARIES).map_err(|error| match error {
        MazeError::Topology { reason } => reason,
        other => other.to_string(),
    })
});

fn edge_id(id: u8) -> Result<Edge> {
    Edge::new(id).ok_or_else(|| topology_error(&format!("{id} is not an edge identifier")))
}

fn claim<T>(slots: &mut [Option<T>], edge: Edge, value: T, table: &str) -> Result<()> {
    let slot = slots
        .get_mut(edge.index())
        .ok_or_else(|| topology_error(&format!("edge {edge} has no {table} slot")))?;
    if slot.is_some() {
        return Err(topology_error(&format!(
            "edge {edge} appears more than once in the {table} table"
        )));
    }
    *slot = Some(value);
    Ok(())
}

impl EdgeTable {
    /// The validated table of the cross-shaped net
    ///
    /// # Errors
    ///
    /// Returns a topology error if the built-in tables are inconsistent
    pub fn standard() -> Result<&'static Self> {
        LazyLock::force(&STANDARD_TABLE)
            .as_ref()
            .map_err(topology_error)
    }

    /// Build and validate a table from raw boundary sets and pairings
    ///
    /// # Errors
    ///
    /// Returns a topology error if:
    /// - An identifier is outside `1..=24` or paired with itself
    /// - An identifier is missing from, or repeated in, either table
    /// - A crossing direction disagrees with the boundary the edge lies on
    pub fn build(pairings: &[EdgePairing], boundaries: BoundarySets) -> Result<Self> {
        let mut partners = [None; SLOTS];
        let mut effects = [None; SLOTS];

        for entry in pairings {
            let first = edge_id(entry.first)?;
            let second = edge_id(entry.second)?;
            if first == second {
                return Err(topology_error(&format!("edge {first} is paired with itself")));
            }

            let orientation = entry.orientation;
            let forward = CrossingEffect {
                direction: orientation.forward(),
                swap: orientation.swap,
                invert: orientation.invert,
                source: first,
            };
            // Read in reverse: undo the forward arrival
            let reverse = CrossingEffect {
                direction: orientation.arrival().opposite(),
                source: second,
                ..forward
            };

            claim(&mut partners, first, second, "pairing")?;
            claim(&mut partners, second, first, "pairing")?;
            claim(&mut effects, first, forward, "effect")?;
            claim(&mut effects, second, reverse, "effect")?;
        }

        let mut runs = [None; SLOTS];
        for boundary in Boundary::ALL {
            for (band, set) in boundaries.bands(boundary).iter().enumerate() {
                for (member, &id) in set.iter().enumerate() {
                    let run = EdgeRun {
                        boundary,
                        band,
                        member,
                        single: set.len() == 1,
                    };
                    claim(&mut runs, edge_id(id)?, run, "boundary")?;
                }
            }
        }

        let table = Self {
            boundaries,
            partners,
            effects,
            runs,
        };

        for edge in Edge::all() {
            let Some(effect) = table.crossing_effect(edge) else {
                return Err(topology_error(&format!("edge {edge} has no pairing")));
            };
            let Some(run) = table.run(edge) else {
                return Err(topology_error(&format!("edge {edge} lies on no boundary")));
            };
            if effect.direction != run.boundary.outward() {
                return Err(topology_error(&format!(
                    "edge {edge} is crossed moving {} but faces {}",
                    effect.direction,
                    run.boundary.outward()
                )));
            }
        }

        Ok(table)
    }

    /// Boundary sets the table was built from
    pub const fn boundaries(&self) -> &BoundarySets {
        &self.boundaries
    }

    /// Partner of an edge on the folded cube
    pub fn paired_edge(&self, edge: Edge) -> Option<Edge> {
        self.partners.get(edge.index()).copied().flatten()
    }

    /// Crossing effect when leaving a face through `edge`
    pub fn crossing_effect(&self, edge: Edge) -> Option<CrossingEffect> {
        self.effects.get(edge.index()).copied().flatten()
    }

    /// Where `edge` sits inside the boundary sets
    pub fn run(&self, edge: Edge) -> Option<EdgeRun> {
        self.runs.get(edge.index()).copied().flatten()
    }

    /// Edge of a boundary band, picking the member by block index
    ///
    /// Single-member sets ignore `member`.
    pub fn edge_at(&self, boundary: Boundary, band: usize, member: usize) -> Option<Edge> {
        let set = self.boundaries.bands(boundary).get(band)?;
        let id = if set.len() == 1 {
            set.first()
        } else {
            set.get(member)
        };
        id.copied().and_then(Edge::new)
    }
}
