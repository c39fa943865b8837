//! Track loops, and the parser that finds them on a map.

use std::collections::HashSet;
use std::str::FromStr;

use gridly::prelude::Direction as Compass;
use gridly::prelude::Location;
use log::debug;

use crate::cart::Cart;
use crate::direction::Direction;
use crate::error::ParseError;
use crate::geometry::{Coords, Rect};
use crate::map::{self, Map};

/// Handle to a track in a layout.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub usize);

/// One closed rectangular loop of rail. Tracks know nothing about the carts
/// riding on them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Track {
    rect: Rect,
    intersections: Vec<Location>,
}

impl Track {
    pub fn new(rect: Rect, intersections: Vec<Location>) -> Self {
        Self {
            rect,
            intersections,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Points on this track's perimeter where it crosses another track.
    pub fn intersections(&self) -> &[Location] {
        &self.intersections
    }
}

/// Everything found on a map: the tracks, and the carts sitting on them.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Layout {
    pub tracks: Vec<Track>,
    pub carts: Vec<Cart>,
}

impl Layout {
    pub fn parse(map: &Map) -> Result<Self, ParseError> {
        let mut layout = Layout::default();

        for location in map.locations().filter(|&location| is_top_left(map, location)) {
            let id = TrackId(layout.tracks.len());
            let rect = trace(map, location)?;
            let mut intersections = Vec::new();

            for (side, location) in rect.perimeter() {
                let glyph = map.glyph(location).unwrap_or(map::BLANK);
                let unexpected = ParseError::UnexpectedGlyph {
                    glyph,
                    at: Coords(location),
                };

                if let Some(corner) = rect.corner_at(location) {
                    if glyph != map::corner_glyph(corner) {
                        return Err(unexpected);
                    }
                    continue;
                }

                match glyph {
                    map::INTERSECTION => intersections.push(location),
                    map::HORIZONTAL if side.is_horizontal() => {}
                    map::VERTICAL if !side.is_horizontal() => {}
                    glyph => match Direction::from_glyph(glyph) {
                        Some(direction) if direction.is_vertical() != side.is_horizontal() => {
                            layout.carts.push(Cart::new(location, direction, id))
                        }
                        _ => return Err(unexpected),
                    },
                }
            }

            layout.tracks.push(Track::new(rect, intersections));
        }

        let mut seen = HashSet::with_capacity(layout.carts.len());
        if let Some(cart) = layout.carts.iter().find(|cart| !seen.insert(cart.position())) {
            return Err(ParseError::StackedCarts {
                at: Coords(cart.position()),
            });
        }

        let intersections: HashSet<Location> = layout
            .tracks
            .iter()
            .flat_map(|track| track.intersections().iter().copied())
            .collect();

        debug!(
            "Parsed {} tracks carrying {} carts, with {} intersections",
            layout.tracks.len(),
            layout.carts.len(),
            intersections.len()
        );

        Ok(layout)
    }
}

impl FromStr for Layout {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, ParseError> {
        Layout::parse(&input.parse()?)
    }
}

/// A `/` with vertical rail underneath it opens a new loop. The bottom-right
/// `/` of a loop never has rail below it.
fn is_top_left(map: &Map, location: Location) -> bool {
    map.glyph(location) == Some(map::FORWARD_CURVE)
        && match map.glyph(location + Compass::Down) {
            Some(map::VERTICAL) | Some(map::INTERSECTION) => true,
            Some(glyph) => Direction::from_glyph(glyph).map_or(false, Direction::is_vertical),
            None => false,
        }
}

/// Follow the loop starting at its top-left corner east to the top-right
/// corner, then south to the bottom-right corner.
fn trace(map: &Map, start: Location) -> Result<Rect, ParseError> {
    let unterminated = ParseError::UnterminatedTrack { start: Coords(start) };
    let mut corner = start;

    loop {
        corner = corner + Compass::Right;
        match map.glyph(corner) {
            Some(map::BACK_CURVE) => break,
            Some(_) => {}
            None => return Err(unterminated),
        }
    }

    loop {
        corner = corner + Compass::Down;
        match map.glyph(corner) {
            Some(map::FORWARD_CURVE) => break,
            Some(_) => {}
            None => return Err(unterminated),
        }
    }

    Ok(Rect::new(start, corner))
}
