//! Headings, and the turns carts make at intersections.

use gridly::prelude::Direction as Compass;
use log::warn;

use crate::geometry::Corner;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '^' => Some(Direction::North),
            'v' => Some(Direction::South),
            '>' => Some(Direction::East),
            '<' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::North => '^',
            Direction::South => 'v',
            Direction::East => '>',
            Direction::West => '<',
        }
    }

    pub fn is_vertical(self) -> bool {
        match self {
            Direction::North | Direction::South => true,
            Direction::East | Direction::West => false,
        }
    }

    pub fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn turn(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.counter_clockwise(),
            Turn::Straight => self,
            Turn::Right => self.clockwise(),
        }
    }

    /// The heading a cart leaves `corner` with, having arrived there heading
    /// `self`. Each corner has two headings a cart can arrive with; anything
    /// else takes the same exit as the second of those.
    pub fn reflect(self, corner: Corner) -> Self {
        use Direction::*;

        match (corner, self) {
            (Corner::TopLeft, North) => East,
            (Corner::TopLeft, West) => South,
            (Corner::TopRight, East) => South,
            (Corner::TopRight, North) => West,
            (Corner::BottomLeft, West) => North,
            (Corner::BottomLeft, South) => East,
            (Corner::BottomRight, East) => North,
            (Corner::BottomRight, South) => West,

            (corner, heading) => {
                warn!("Cart heading {:?} can't have arrived at a {:?} corner", heading, corner);

                match corner {
                    Corner::TopLeft => South,
                    Corner::TopRight => West,
                    Corner::BottomLeft => East,
                    Corner::BottomRight => West,
                }
            }
        }
    }
}

impl From<Direction> for Compass {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Compass::Up,
            Direction::South => Compass::Down,
            Direction::East => Compass::Right,
            Direction::West => Compass::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Turn {
    Left,
    Straight,
    Right,
}

impl Turn {
    pub fn next(self) -> Self {
        match self {
            Turn::Left => Turn::Straight,
            Turn::Straight => Turn::Right,
            Turn::Right => Turn::Left,
        }
    }
}

impl Default for Turn {
    fn default() -> Self {
        Turn::Left
    }
}
