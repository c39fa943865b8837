//! Mine carts on a grid of rectangular track loops.
//!
//! A map like
//!
//! ```text
//! /->-\
//! |   |  /----\
//! | /-+--+-\  |
//! | | |  | v  |
//! \-+-/  \-+--/
//!   \------/
//! ```
//!
//! is parsed into a [`Layout`] of tracks (one per loop) and carts. Each tick of
//! a [`Simulation`] moves every cart one cell: carts are moved in reading
//! order of where they are at the start of the tick, follow the curve at each
//! corner, and turn left, go straight, then turn right (repeating) at
//! successive intersections. Two carts landing on the same cell crash, and
//! are taken out of the simulation.
//!
//! ```
//! use carts::{Coords, Layout, Simulation};
//!
//! let layout: Layout = "/>-<\\\n|   |\n\\---/".parse().unwrap();
//! let mut simulation = Simulation::new(layout).unwrap();
//! let crash = simulation.run_until_collision(100).unwrap();
//!
//! assert_eq!(Coords(crash).to_string(), "2,0");
//! ```

pub mod cart;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod map;
pub mod render;
pub mod simulation;
pub mod track;


pub use cart::{Cart, CartId};
pub use direction::{Direction, Turn};
pub use error::{ConfigError, Error, ParseError, Result};
pub use geometry::{Coords, Corner, Rect, Side};
pub use map::Map;
pub use render::Snapshot;
pub use simulation::Simulation;
pub use track::{Layout, Track, TrackId};
