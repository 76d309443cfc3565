#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for Soulweaver.
//!
//! [`GameSession`] owns one [`Player`] and one [`World`], tracks the
//! player's current location as a key into the world's coordinate mapping,
//! and executes [`Command`] values through [`apply`]. Every assignment of
//! the current location appends an ordered change fan-out to the caller's
//! event buffer: one [`Event::CurrentLocationChanged`] followed by four
//! [`Event::ExitAvailabilityChanged`] values, so a front end bound to those
//! properties can re-read them in step with the session.

use std::collections::HashMap;

use soulweaver_core::{Command, Direction, Event, GridPosition};

/// A single addressable point in the world grid with descriptive content.
///
/// Identity for lookup purposes is the coordinate pair; nothing mutates a
/// location after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    position: GridPosition,
    name: String,
    description: String,
    items: Vec<String>,
}

impl Location {
    /// Creates a new location anchored at the provided coordinate.
    #[must_use]
    pub fn new(
        position: GridPosition,
        name: impl Into<String>,
        description: impl Into<String>,
        items: Vec<String>,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            description: description.into(),
            items,
        }
    }

    /// Coordinate the location occupies.
    #[must_use]
    pub const fn position(&self) -> GridPosition {
        self.position
    }

    /// Display name of the location.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptive text shown when the player arrives or looks around.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Identifiers of the content present at the location.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// The complete, read-only-after-construction collection of locations
/// indexed by coordinate.
#[derive(Clone, Debug)]
pub struct World {
    name: String,
    description: String,
    locations: HashMap<GridPosition, Location>,
}

impl World {
    /// Builds a world from its display header and location set.
    ///
    /// Each location is keyed by its own coordinate, so a retrievable
    /// location always matches its storage key. Factories reject duplicate
    /// coordinates before calling this; a duplicate that slips through
    /// keeps the last entry.
    #[must_use]
    pub fn from_locations(
        name: impl Into<String>,
        description: impl Into<String>,
        locations: Vec<Location>,
    ) -> Self {
        let mut map = HashMap::with_capacity(locations.len());
        for location in locations {
            let _ = map.insert(location.position(), location);
        }
        Self {
            name: name.into(),
            description: description.into(),
            locations: map,
        }
    }

    /// Display name supplied by the world factory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Introductory description supplied by the world factory.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the location stored at the provided coordinate, if any.
    ///
    /// A pure lookup: an unpopulated coordinate yields `None`, and no call
    /// alters state.
    #[must_use]
    pub fn get_location(&self, position: GridPosition) -> Option<&Location> {
        self.locations.get(&position)
    }

    /// Number of populated coordinates.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}

/// Attribute bag describing the player character.
///
/// Carries no navigation behavior; the session owns exactly one. The
/// default identity is an explicit stand-in that front ends replace with
/// user-supplied data before constructing the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Character class label.
    pub character_class: String,
    /// Experience level, starting at 1.
    pub level: u32,
    /// Coin on hand.
    pub coin: u32,
    /// Current hit points.
    pub hit_points: i32,
    /// Accumulated experience points.
    pub experience_points: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            character_class: "Soulweaver".to_string(),
            level: 1,
            coin: 0,
            hit_points: 20,
            experience_points: 0,
        }
    }
}

/// Represents one play session: a player traversing a world grid.
///
/// The current location is held as a coordinate key, never an owned copy;
/// dereferencing it is a [`World::get_location`] call. Stepping onto an
/// unpopulated coordinate commits the absent state (`None`), which is a
/// reachable data value rather than an error.
#[derive(Debug)]
pub struct GameSession {
    player: Player,
    world: World,
    current: Option<GridPosition>,
}

impl GameSession {
    /// Creates a session over an injected world and player.
    ///
    /// The current location resolves to the world's `(0, 0)` entry.
    /// Factories guarantee that coordinate exists; this constructor does
    /// not re-check it, so a world without it starts the session off the
    /// populated grid. The initial change fan-out is appended to
    /// `out_events` exactly as for any later move.
    #[must_use]
    pub fn new(player: Player, world: World, out_events: &mut Vec<Event>) -> Self {
        let mut session = Self {
            player,
            world,
            current: None,
        };
        let start = session
            .world
            .get_location(GridPosition::START)
            .map(Location::position);
        set_current_location(&mut session, start, out_events);
        session
    }
}

/// Applies the provided command to the session, mutating state
/// deterministically and appending the resulting events.
///
/// A move assigns the destination lookup result unconditionally: the
/// neighboring coordinate is computed, looked up, and committed whether or
/// not it is populated. A move issued while the current location is already
/// absent keeps it absent. Either way the full change fan-out runs before
/// this returns.
pub fn apply(session: &mut GameSession, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Move { direction } => {
            let destination = session
                .current
                .map(|position| position.step(direction))
                .and_then(|next| session.world.get_location(next).map(Location::position));
            set_current_location(session, destination, out_events);
        }
    }
}

fn set_current_location(
    session: &mut GameSession,
    position: Option<GridPosition>,
    out_events: &mut Vec<Event>,
) {
    session.current = position;
    out_events.push(Event::CurrentLocationChanged { position });
    for direction in Direction::ANNOUNCEMENT_ORDER {
        out_events.push(Event::ExitAvailabilityChanged {
            direction,
            available: query::has_location_to(session, direction),
        });
    }
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use soulweaver_core::{Direction, GridPosition};

    use super::{GameSession, Location, Player, World};

    /// The location the player presently occupies, if any.
    ///
    /// Resolved against the world mapping on every call.
    #[must_use]
    pub fn current_location(session: &GameSession) -> Option<&Location> {
        session
            .current
            .and_then(|position| session.world.get_location(position))
    }

    /// Coordinate of the current location, or `None` once the player has
    /// stepped off the populated grid.
    #[must_use]
    pub fn current_position(session: &GameSession) -> Option<GridPosition> {
        session.current
    }

    /// The player owned by the session.
    #[must_use]
    pub fn player(session: &GameSession) -> &Player {
        &session.player
    }

    /// The world owned by the session.
    #[must_use]
    pub fn world(session: &GameSession) -> &World {
        &session.world
    }

    /// Whether a location exists one step in the given direction.
    ///
    /// Recomputed from the current location and the world on every call.
    /// While the current location is absent there is no coordinate to step
    /// from, so every direction reports `false`.
    #[must_use]
    pub fn has_location_to(session: &GameSession, direction: Direction) -> bool {
        session.current.is_some_and(|position| {
            session
                .world
                .get_location(position.step(direction))
                .is_some()
        })
    }
}
