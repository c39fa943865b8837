//! Drawing a simulation back out as a map.

use std::fmt::{self, Display, Formatter};

use crate::map::{self, Map};
use crate::simulation::Simulation;

/// The state of a simulation drawn the way the input map draws it. Collisions
/// are marked with `X`; crashed carts aren't drawn.
pub struct Snapshot<'a> {
    simulation: &'a Simulation,
}

impl Simulation {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { simulation: self }
    }
}

impl Snapshot<'_> {
    pub fn to_map(&self) -> Option<Map> {
        let simulation = self.simulation;
        let tracks = simulation.tracks();

        let rows = tracks.iter().map(|track| track.rect().bottom() + 1).max()?;
        let columns = tracks.iter().map(|track| track.rect().right() + 1).max()?;
        let mut canvas = Map::blank(rows, columns)?;

        for track in tracks {
            let rect = track.rect();

            for (side, location) in rect.perimeter() {
                let glyph = match rect.corner_at(location) {
                    Some(corner) => map::corner_glyph(corner),
                    None if side.is_horizontal() => map::HORIZONTAL,
                    None => map::VERTICAL,
                };
                canvas.draw(location, glyph);
            }
        }

        for location in simulation.intersections() {
            canvas.draw(location, map::INTERSECTION);
        }

        for &location in simulation.collisions() {
            canvas.draw(location, map::COLLISION);
        }

        for (_, cart) in simulation.survivors() {
            canvas.draw(cart.position(), cart.glyph());
        }

        Some(canvas)
    }
}

impl Display for Snapshot<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.to_map() {
            Some(canvas) => canvas.fmt(f),
            None => Ok(()),
        }
    }
}

