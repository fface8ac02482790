//! Cardinal movement directions on the net and their axis algebra
//!
//! The net uses screen coordinates: `x` grows to the right and `y` grows
//! downwards. Edge orientations, however, are written with `+` meaning
//! "towards Up" on the `y` axis, so [`Direction::sign`] follows that convention
//! rather than the sign of the coordinate offset.

use std::fmt;

/// One of the two coordinate axes of the net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl Axis {
    /// The perpendicular axis
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Direction of travel along an axis as written in edge orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Right on `x`, Up on `y`
    Positive,
    /// Left on `x`, Down on `y`
    Negative,
}

impl Sign {
    /// The reversed sign
    pub const fn negated(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`
    Up,
    /// Towards larger `x`
    Right,
    /// Towards larger `y`
    Down,
    /// Towards smaller `x`
    Left,
}

impl Direction {
    /// All directions in clockwise order starting at `Up`
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The reverse direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Axis this direction moves along
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Y,
            Self::Right | Self::Left => Axis::X,
        }
    }

    /// Orientation sign of this direction
    pub const fn sign(self) -> Sign {
        match self {
            Self::Up | Self::Right => Sign::Positive,
            Self::Down | Self::Left => Sign::Negative,
        }
    }

    /// Direction described by an axis and orientation sign
    pub const fn from_axis(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Positive) => Self::Right,
            (Axis::X, Sign::Negative) => Self::Left,
            (Axis::Y, Sign::Positive) => Self::Up,
            (Axis::Y, Sign::Negative) => Self::Down,
        }
    }

    /// The two directions at right angles to this one
    pub const fn perpendicular(self) -> [Self; 2] {
        match self.axis() {
            Axis::Y => [Self::Left, Self::Right],
            Axis::X => [Self::Up, Self::Down],
        }
    }

    /// Unit `[dx, dy]` step in grid coordinates
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Right => [1, 0],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}
