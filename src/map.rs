//! The character grid a layout is drawn on.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use gridly::prelude::*;
use gridly_grids::VecGrid;
use joinery::prelude::*;

use crate::direction::Direction;
use crate::error::ParseError;
use crate::geometry::{point, Coords, Corner};

pub const BLANK: char = ' ';
pub const VERTICAL: char = '|';
pub const HORIZONTAL: char = '-';
pub const INTERSECTION: char = '+';
pub const COLLISION: char = 'X';

/// `/`: the top-left and bottom-right corners.
pub const FORWARD_CURVE: char = '/';

/// `\`: the top-right and bottom-left corners.
pub const BACK_CURVE: char = '\\';

pub fn corner_glyph(corner: Corner) -> char {
    match corner {
        Corner::TopLeft | Corner::BottomRight => FORWARD_CURVE,
        Corner::TopRight | Corner::BottomLeft => BACK_CURVE,
    }
}

fn is_map_glyph(glyph: char) -> bool {
    match glyph {
        BLANK | VERTICAL | HORIZONTAL | INTERSECTION | FORWARD_CURVE | BACK_CURVE => true,
        glyph => Direction::from_glyph(glyph).is_some(),
    }
}

/// A rectangular grid of glyphs. Lines shorter than the widest one are padded
/// with blanks.
pub struct Map {
    grid: VecGrid<char>,
    rows: isize,
    columns: isize,
}

impl Map {
    /// A map of the given size with nothing drawn on it.
    pub fn blank(rows: isize, columns: isize) -> Option<Self> {
        VecGrid::new_fill(Rows(rows) + Columns(columns), &BLANK).map(|grid| Map {
            grid,
            rows,
            columns,
        })
    }

    pub fn rows(&self) -> isize {
        self.rows
    }

    pub fn columns(&self) -> isize {
        self.columns
    }

    pub fn contains(&self, location: Location) -> bool {
        (0..self.rows).contains(&location.row.0) && (0..self.columns).contains(&location.column.0)
    }

    /// The glyph at `location`, or `None` off the edge of the map.
    pub fn glyph(&self, location: Location) -> Option<char> {
        if self.contains(location) {
            self.grid.get(location).ok().copied()
        } else {
            None
        }
    }

    /// Overwrite a cell; drawing off the edge of the map does nothing.
    pub fn draw(&mut self, location: Location, glyph: char) {
        if self.contains(location) {
            self.grid[(location.row, location.column)] = glyph;
        }
    }

    /// Every location on the map, in reading order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |y| (0..columns).map(move |x| point(x, y)))
    }

    fn line(&self, y: isize) -> String {
        let line: String = (0..self.columns)
            .filter_map(|x| self.glyph(point(x, y)))
            .collect();

        line.trim_end().to_owned()
    }
}

impl FromStr for Map {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, ParseError> {
        let mut lines: Vec<&str> = input.lines().map(|line| line.trim_end()).collect();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }

        let num_columns = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        if num_columns == 0 {
            return Err(ParseError::EmptyMap);
        }

        let mut map = Map::blank(lines.len() as isize, num_columns as isize).ok_or(ParseError::EmptyMap)?;

        for (row, line) in (0..).map(Row).zip(&lines) {
            for (column, glyph) in (0..).map(Column).zip(line.chars()) {
                let location = row + column;

                if !is_map_glyph(glyph) {
                    return Err(ParseError::UnknownGlyph {
                        glyph,
                        at: Coords(location),
                    });
                }

                map.draw(location, glyph);
            }
        }

        Ok(map)
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let lines: Vec<String> = (0..self.rows).map(|y| self.line(y)).collect();
        write!(f, "{}", lines.iter().join_with('\n'))
    }
}
