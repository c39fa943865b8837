//! The tick loop.

use std::collections::{HashMap, HashSet};
use std::mem;

use gridly::prelude::Location;
use log::{debug, info, trace};

use crate::cart::{Cart, CartId};
use crate::error::ConfigError;
use crate::geometry::{row_major, Coords};
use crate::track::{Layout, Track, TrackId};

/// Carts moving around a fixed set of tracks.
///
/// The simulation never stops on its own; callers decide whether they care
/// about the first collision or the last cart standing, and stop ticking
/// accordingly (see [`Simulation::run_until_collision`] and
/// [`Simulation::run_until_last`]).
#[derive(Debug, Clone)]
pub struct Simulation {
    tracks: Vec<Track>,
    carts: Vec<Cart>,

    // Every intersection, and the tracks that meet there
    intersections: HashMap<Location, Vec<TrackId>>,

    // Where each live cart is. Crashed carts are never in here.
    occupied: HashMap<Location, CartId>,

    collisions: Vec<Location>,
    ticks: usize,

    // Scratch space for the per-tick ordering
    order: Vec<CartId>,
}

impl Simulation {
    /// Set up a simulation from a parsed layout. The layout is validated
    /// before anything else happens, so every `Simulation` can be ticked.
    pub fn new(layout: Layout) -> Result<Self, ConfigError> {
        let Layout { tracks, carts } = layout;

        let mut intersections: HashMap<Location, Vec<TrackId>> = HashMap::new();
        for (index, track) in tracks.iter().enumerate() {
            for &location in track.intersections() {
                intersections.entry(location).or_default().push(TrackId(index));
            }
        }

        let mut occupied = HashMap::with_capacity(carts.len());
        for (index, cart) in carts.iter().enumerate().filter(|(_, cart)| !cart.crashed()) {
            if let Some(CartId(first)) = occupied.insert(cart.position(), CartId(index)) {
                return Err(ConfigError::StackedCarts {
                    first,
                    second: index,
                    at: Coords(cart.position()),
                });
            }
        }

        let order = Vec::with_capacity(carts.len());
        let simulation = Simulation {
            tracks,
            carts,
            intersections,
            occupied,
            collisions: Vec::new(),
            ticks: 0,
            order,
        };

        simulation.validate()?;

        debug!(
            "Simulating {} carts on {} tracks with {} intersections",
            simulation.carts.len(),
            simulation.tracks.len(),
            simulation.intersections.len()
        );

        Ok(simulation)
    }

    /// Check that every intersection lies on, and joins, exactly two distinct
    /// tracks, and that every cart is on the perimeter of a track that exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, track) in self.tracks.iter().enumerate() {
            if let Some(&location) = track
                .intersections()
                .iter()
                .find(|&&location| !track.rect().on_perimeter(location))
            {
                return Err(ConfigError::IntersectionOffTrack {
                    track: index,
                    at: Coords(location),
                });
            }
        }

        let bad_intersection = self
            .intersections
            .iter()
            .map(|(location, tracks)| (location, tracks.iter().collect::<HashSet<_>>().len()))
            .filter(|&(_, distinct)| distinct != 2)
            .min_by_key(|&(location, _)| row_major(location));

        if let Some((&location, distinct)) = bad_intersection {
            return Err(ConfigError::SharedIntersection {
                at: Coords(location),
                tracks: distinct,
            });
        }

        for (index, cart) in self.carts.iter().enumerate() {
            let TrackId(track) = cart.track();

            match self.tracks.get(track) {
                None => return Err(ConfigError::UnknownTrack { cart: index, track }),
                Some(track) if !track.rect().on_perimeter(cart.position()) => {
                    return Err(ConfigError::OffTrack {
                        cart: index,
                        at: Coords(cart.position()),
                    })
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Advance every live cart by one cell, in reading order of where the
    /// carts are at the start of the tick.
    pub fn tick(&mut self) {
        self.ticks += 1;

        let mut order = mem::take(&mut self.order);
        order.clear();
        order.extend((0..self.carts.len()).map(CartId));
        order.sort_by_key(|&CartId(index)| row_major(&self.carts[index].position()));

        for &id in &order {
            self.advance(id);
        }

        self.order = order;

        trace!("Tick {}: {} carts remaining", self.ticks, self.remaining());
    }

    pub fn tick_n(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    fn advance(&mut self, id: CartId) {
        if self.carts[id.0].crashed() {
            return;
        }

        self.occupied.remove(&self.carts[id.0].position());

        if let Some(other) = self.other_track(id) {
            self.carts[id.0].intersect(other);
        }

        let track = &self.tracks[self.carts[id.0].track().0];
        let cart = &mut self.carts[id.0];
        cart.step(track);
        let position = cart.position();

        match self.occupied.remove(&position) {
            Some(victim) => {
                self.carts[id.0].crash();
                self.carts[victim.0].crash();
                self.collisions.push(position);

                info!(
                    "Tick {}: carts {} and {} collided at {}",
                    self.ticks,
                    victim.0,
                    id.0,
                    Coords(position)
                );
            }
            None => {
                self.occupied.insert(position, id);
            }
        }
    }

    /// If the cart is sitting on an intersection, the track it crosses there.
    fn other_track(&self, id: CartId) -> Option<TrackId> {
        let cart = &self.carts[id.0];

        self.intersections
            .get(&cart.position())?
            .iter()
            .copied()
            .find(|&track| track != cart.track())
    }

    /// Tick until a collision has happened, or `limit` more ticks have run.
    pub fn run_until_collision(&mut self, limit: usize) -> Option<Location> {
        for _ in 0..limit {
            if !self.collisions.is_empty() {
                break;
            }
            self.tick();
        }

        self.first_collision()
    }

    /// Tick until at most one cart is left, or `limit` more ticks have run.
    /// Returns the surviving cart, if there is exactly one.
    pub fn run_until_last(&mut self, limit: usize) -> Option<&Cart> {
        for _ in 0..limit {
            if self.remaining() <= 1 {
                break;
            }
            self.tick();
        }

        self.last_survivor()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0)
    }

    /// All carts, crashed or not.
    pub fn carts(&self) -> &[Cart] {
        &self.carts
    }

    pub fn cart(&self, id: CartId) -> Option<&Cart> {
        self.carts.get(id.0)
    }

    pub fn survivors(&self) -> impl Iterator<Item = (CartId, &Cart)> {
        self.carts
            .iter()
            .enumerate()
            .filter(|(_, cart)| !cart.crashed())
            .map(|(index, cart)| (CartId(index), cart))
    }

    /// How many carts haven't crashed.
    pub fn remaining(&self) -> usize {
        self.occupied.len()
    }

    pub fn last_survivor(&self) -> Option<&Cart> {
        let mut survivors = self.survivors();

        match (survivors.next(), survivors.next()) {
            (Some((_, cart)), None) => Some(cart),
            _ => None,
        }
    }

    /// The cart at `location`, if a live one is there.
    pub fn occupant(&self, location: Location) -> Option<CartId> {
        self.occupied.get(&location).copied()
    }

    pub fn occupancy(&self) -> impl Iterator<Item = (Location, CartId)> + '_ {
        self.occupied.iter().map(|(&location, &id)| (location, id))
    }

    /// Every intersection, in no particular order.
    pub fn intersections(&self) -> impl Iterator<Item = Location> + '_ {
        self.intersections.keys().copied()
    }

    /// Where collisions happened, in the order they happened.
    pub fn collisions(&self) -> &[Location] {
        &self.collisions
    }

    pub fn first_collision(&self) -> Option<Location> {
        self.collisions.first().copied()
    }
}
