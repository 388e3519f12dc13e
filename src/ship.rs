//! Ship kinds and ship instances tracked in inventories and on boards.

use core::fmt;

use crate::common::Position;
use crate::config::SHIP_CATALOG;

/// One of the five kinds in the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
    PatrolBoat,
}

impl ShipKind {
    /// All kinds, in catalog order.
    pub const ALL: [ShipKind; 5] = SHIP_CATALOG;

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer | ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::PatrolBoat => "Patrol Boat",
        }
    }

    /// First catalog kind with the given length.
    pub fn from_length(length: usize) -> Option<ShipKind> {
        SHIP_CATALOG.iter().copied().find(|k| k.length() == length)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a ship sits on its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub start: Position,
    pub end: Position,
}

impl Placement {
    /// True if either endpoint of `self` equals either endpoint of `other`.
    pub fn shares_endpoint(&self, other: &Placement) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }
}

/// A ship of some kind, placed or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipInstance {
    kind: ShipKind,
    placement: Option<Placement>,
}

impl ShipInstance {
    /// An unplaced ship of `kind`.
    pub const fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            placement: None,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn start_position(&self) -> Option<Position> {
        self.placement.map(|p| p.start)
    }

    pub fn end_position(&self) -> Option<Position> {
        self.placement.map(|p| p.end)
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Consume the unplaced ship and return it pinned at `start`..`end`.
    pub(crate) fn placed_at(mut self, start: Position, end: Position) -> Self {
        self.placement = Some(Placement { start, end });
        self
    }
}
