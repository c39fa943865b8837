use thiserror::Error;

use crate::geometry::Coords;

/// A map that can't be turned into a set of tracks.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("the map is empty")]
    EmptyMap,

    #[error("unrecognized glyph {glyph:?} at {at}")]
    UnknownGlyph { glyph: char, at: Coords },

    #[error("glyph {glyph:?} at {at} can't be part of the track perimeter")]
    UnexpectedGlyph { glyph: char, at: Coords },

    #[error("track starting at {start} runs off the edge of the map")]
    UnterminatedTrack { start: Coords },

    #[error("more than one track claims the cart at {at}")]
    StackedCarts { at: Coords },
}

/// A layout that parsed, but can't be simulated.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("intersection at {at} is shared by {tracks} distinct tracks instead of 2")]
    SharedIntersection { at: Coords, tracks: usize },

    #[error("track {track} claims an intersection at {at}, which isn't on its perimeter")]
    IntersectionOffTrack { track: usize, at: Coords },

    #[error("cart {cart} rides on track {track}, which doesn't exist")]
    UnknownTrack { cart: usize, track: usize },

    #[error("cart {cart} at {at} isn't on the perimeter of its track")]
    OffTrack { cart: usize, at: Coords },

    #[error("carts {first} and {second} both start at {at}")]
    StackedCarts {
        first: usize,
        second: usize,
        at: Coords,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed map: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid layout: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
