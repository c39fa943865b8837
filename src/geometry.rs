//! Rectangles and positions on the track grid.
//!
//! Positions are plain `gridly` locations: the row is the Y coordinate (growing
//! southward) and the column is the X coordinate (growing eastward).

use std::fmt::{self, Display, Formatter};

use gridly::prelude::{Column, Location, Row};

#[inline]
pub fn point(x: isize, y: isize) -> Location {
    Row(y) + Column(x)
}

/// Sort key putting locations in reading order: top to bottom, then left to
/// right.
#[inline]
pub fn row_major(location: &Location) -> (isize, isize) {
    (location.row.0, location.column.0)
}

/// A location printed as `x,y`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Coords(pub Location);

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{},{}", self.0.column.0, self.0.row.0)
    }
}

impl From<Location> for Coords {
    fn from(location: Location) -> Self {
        Coords(location)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn is_horizontal(self) -> bool {
        match self {
            Side::Top | Side::Bottom => true,
            Side::Left | Side::Right => false,
        }
    }
}

/// An axis-aligned rectangle with inclusive corners.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Rect {
    pub min: Location,
    pub max: Location,
}

impl Rect {
    pub fn new(min: Location, max: Location) -> Self {
        Rect { min, max }
    }

    pub fn left(&self) -> isize {
        self.min.column.0
    }

    pub fn right(&self) -> isize {
        self.max.column.0
    }

    pub fn top(&self) -> isize {
        self.min.row.0
    }

    pub fn bottom(&self) -> isize {
        self.max.row.0
    }

    pub fn corner(&self, corner: Corner) -> Location {
        match corner {
            Corner::TopLeft => self.min,
            Corner::TopRight => point(self.right(), self.top()),
            Corner::BottomLeft => point(self.left(), self.bottom()),
            Corner::BottomRight => self.max,
        }
    }

    /// Which corner, if any, sits at `location`.
    pub fn corner_at(&self, location: Location) -> Option<Corner> {
        Corner::ALL
            .iter()
            .copied()
            .find(|&corner| self.corner(corner) == location)
    }

    pub fn on_perimeter(&self, location: Location) -> bool {
        let (x, y) = (location.column.0, location.row.0);
        let within = (self.left()..=self.right()).contains(&x) && (self.top()..=self.bottom()).contains(&y);

        within && (x == self.left() || x == self.right() || y == self.top() || y == self.bottom())
    }

    /// Every cell of the border exactly once, clockwise from the top-left
    /// corner. Corners are reported on the top and bottom sides.
    pub fn perimeter(&self) -> impl Iterator<Item = (Side, Location)> {
        let (left, right, top, bottom) = (self.left(), self.right(), self.top(), self.bottom());

        let top_edge = (left..=right).map(move |x| (Side::Top, point(x, top)));
        let right_edge = (top + 1..bottom).map(move |y| (Side::Right, point(right, y)));
        let bottom_edge = (left..=right).rev().map(move |x| (Side::Bottom, point(x, bottom)));
        let left_edge = (top + 1..bottom).rev().map(move |y| (Side::Left, point(left, y)));

        top_edge.chain(right_edge).chain(bottom_edge).chain(left_edge)
    }
}
