#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Soulweaver engine.
//!
//! This crate defines the message surface that connects front-end adapters
//! to the authoritative session. Adapters submit [`Command`] values
//! describing desired mutations, the session executes those commands via
//! its `apply` entry point, and then broadcasts [`Event`] values describing
//! what changed, in a fixed order adapters can rely on when re-rendering.

use serde::{Deserialize, Serialize};

/// Commands that express all permissible session mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that the player advance a single step in the specified
    /// direction.
    Move {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
}

/// Events broadcast by the session after processing commands.
///
/// Every assignment of the current location produces one
/// [`Event::CurrentLocationChanged`] followed by four
/// [`Event::ExitAvailabilityChanged`] values in
/// [`Direction::ANNOUNCEMENT_ORDER`], appended before control returns to
/// the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that the tracked current location was assigned.
    CurrentLocationChanged {
        /// Coordinate of the new current location, or `None` when the
        /// assignment resolved to an unpopulated coordinate.
        position: Option<GridPosition>,
    },
    /// Reports the recomputed availability of one directional exit.
    ExitAvailabilityChanged {
        /// Direction whose availability was recomputed.
        direction: Direction,
        /// Whether a location exists one step in that direction.
        available: bool,
    },
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward increasing `y`.
    North,
    /// Movement toward increasing `x`.
    East,
    /// Movement toward decreasing `y`.
    South,
    /// Movement toward decreasing `x`.
    West,
}

impl Direction {
    /// Order in which exit availability is announced after every
    /// assignment of the current location.
    pub const ANNOUNCEMENT_ORDER: [Self; 4] =
        [Self::North, Self::East, Self::West, Self::South];

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Coordinate delta of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

/// Location of a grid point expressed as signed x and y coordinates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPosition {
    x: i32,
    y: i32,
}

impl GridPosition {
    /// Coordinate every constructed world populates and every session
    /// starts on.
    pub const START: Self = Self::new(0, 0);

    /// Creates a new grid position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Signed horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Signed vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Coordinate one step away in the provided direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, GridPosition};

    #[test]
    fn step_offsets_one_axis_by_one() {
        let origin = GridPosition::new(3, -2);
        assert_eq!(origin.step(Direction::North), GridPosition::new(3, -1));
        assert_eq!(origin.step(Direction::South), GridPosition::new(3, -3));
        assert_eq!(origin.step(Direction::East), GridPosition::new(4, -2));
        assert_eq!(origin.step(Direction::West), GridPosition::new(2, -2));
    }

    #[test]
    fn opposite_steps_cancel() {
        let origin = GridPosition::new(-7, 11);
        for direction in Direction::ANNOUNCEMENT_ORDER {
            assert_eq!(
                origin.step(direction).step(direction.opposite()),
                origin
            );
        }
    }

    #[test]
    fn announcement_order_covers_every_direction_once() {
        let order = Direction::ANNOUNCEMENT_ORDER;
        assert_eq!(
            order,
            [
                Direction::North,
                Direction::East,
                Direction::West,
                Direction::South
            ]
        );
    }

    #[test]
    fn start_sits_at_the_origin() {
        assert_eq!(GridPosition::START, GridPosition::new(0, 0));
    }
}
