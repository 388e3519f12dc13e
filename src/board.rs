//! Per-side fleet bookkeeping: ships still to place and ships already placed.

use alloc::vec::Vec;

use crate::common::Position;
use crate::config::SHIP_CATALOG;
use crate::ship::{Placement, ShipInstance, ShipKind};

/// Ships a side has not placed yet, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    ships: Vec<ShipInstance>,
}

impl Inventory {
    /// One unplaced ship of every catalog kind. Each call builds a fresh copy.
    pub fn standard() -> Self {
        Self {
            ships: SHIP_CATALOG.iter().map(|&k| ShipInstance::new(k)).collect(),
        }
    }

    /// Index of the first ship with the given length.
    pub fn position_of_length(&self, length: usize) -> Option<usize> {
        self.ships.iter().position(|s| s.length() == length)
    }

    /// Remove and return the first ship with the given length.
    pub fn take_by_length(&mut self, length: usize) -> Option<ShipInstance> {
        self.position_of_length(length).map(|i| self.ships.remove(i))
    }

    pub fn contains(&self, kind: ShipKind) -> bool {
        self.ships.iter().any(|s| s.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShipInstance> {
        self.ships.iter()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::standard()
    }
}

/// Ships a side has placed, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    ships: Vec<ShipInstance>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Returns `true` if any placed ship has `start` or `end` as one of its endpoints.
    ///
    /// Cells between the endpoints are not compared.
    pub fn overlaps_endpoints(&self, start: Position, end: Position) -> bool {
        let candidate = Placement { start, end };
        self.ships
            .iter()
            .filter_map(ShipInstance::placement)
            .any(|p| p.shares_endpoint(&candidate))
    }

    /// The placed ship of `kind`, if any.
    pub fn ship(&self, kind: ShipKind) -> Option<&ShipInstance> {
        self.ships.iter().find(|s| s.kind() == kind)
    }

    pub(crate) fn push(&mut self, ship: ShipInstance) {
        debug_assert!(ship.is_placed());
        self.ships.push(ship);
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShipInstance> {
        self.ships.iter()
    }
}
