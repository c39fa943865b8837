use gridly::prelude::Direction as Compass;
use gridly::prelude::Location;

use crate::direction::{Direction, Turn};
use crate::track::{Track, TrackId};

/// Handle to a cart in a simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct CartId(pub usize);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cart {
    position: Location,
    direction: Direction,
    track: TrackId,
    turn: Turn,
    crashed: bool,
}

impl Cart {
    pub fn new(position: Location, direction: Direction, track: TrackId) -> Self {
        Self {
            position,
            direction,
            track,
            turn: Turn::default(),
            crashed: false,
        }
    }

    pub fn position(&self) -> Location {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn track(&self) -> TrackId {
        self.track
    }

    /// The turn this cart will make at the next intersection.
    pub fn next_turn(&self) -> Turn {
        self.turn
    }

    pub fn crashed(&self) -> bool {
        self.crashed
    }

    pub fn glyph(&self) -> char {
        self.direction.glyph()
    }

    pub(crate) fn crash(&mut self) {
        self.crashed = true;
    }

    /// Pass through an intersection with `other`. Turning hands the cart over
    /// to the other track; the turn cycle moves on either way.
    pub fn intersect(&mut self, other: TrackId) {
        if self.turn != Turn::Straight {
            self.track = other;
            self.direction = self.direction.turn(self.turn);
        }

        self.turn = self.turn.next();
    }

    /// Move one cell along `track`, which must be the track the cart is on.
    /// A cart sitting on a corner takes the curve first.
    pub fn step(&mut self, track: &Track) {
        if let Some(corner) = track.rect().corner_at(self.position) {
            self.direction = self.direction.reflect(corner);
        }

        self.position = self.position + Compass::from(self.direction);
    }
}
