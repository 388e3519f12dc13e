//! Common types for placement: grid positions and error kinds.

use core::fmt;

/// A cell on the grid, 1-based on both axes.
///
/// Coordinates are unsigned: a negative value cannot be represented and is
/// refused when the position is built or deserialized, before placement
/// rules run. Out-of-range values that do reach placement (`0`, or above
/// `BOARD_SIZE`) fail with `PositionNotValid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl From<(u8, u8)> for Position {
    fn from((x, y): (u8, u8)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors returned by ship placement.
///
/// Every variant leaves the session untouched: validation runs to completion
/// before the inventory or board is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// A coordinate lies off the grid, or the placement runs along the main diagonal.
    #[error("Positions are not valid")]
    PositionNotValid,
    /// Positions are not collinear, or no ship kind has that many cells.
    #[error("Ship is not valid")]
    InvalidShip,
    /// Every ship of the resolved length has already been placed on this side.
    #[error("Ship has already been used")]
    AlreadyUsedShip,
    /// An endpoint coincides with an endpoint of a ship already on the board.
    #[error("A ship is already placed in this position")]
    ShipOverlaps,
}

/// Error returned when a status change does not follow the game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move session from {from:?} to {to:?}")]
pub struct StatusError {
    pub from: crate::session::SessionStatus,
    pub to: crate::session::SessionStatus,
}
