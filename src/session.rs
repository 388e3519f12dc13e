//! A single human-vs-AI game: both fleets, both boards, and ship placement.

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::{Board, Inventory};
use crate::common::{PlacementError, Position, StatusError};
use crate::geometry::{are_positions_diagonal, are_positions_linear, is_position_valid};
use crate::id::IdGenerator;
use crate::ship::ShipKind;

/// Lifecycle of a session. Moves strictly forward, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    #[default]
    Started,
    PlacingShips,
    InProgress,
    Ended,
}

impl SessionStatus {
    /// The state that follows this one, or `None` once ended.
    pub fn next(self) -> Option<SessionStatus> {
        match self {
            SessionStatus::Started => Some(SessionStatus::PlacingShips),
            SessionStatus::PlacingShips => Some(SessionStatus::InProgress),
            SessionStatus::InProgress => Some(SessionStatus::Ended),
            SessionStatus::Ended => None,
        }
    }
}

/// Which half of the session an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Ai,
}

/// Game state for one player against the AI.
///
/// Placement is the only mutation the session performs on its own. The
/// status is left for the game-flow driver to advance, and the move lists
/// are filled by whatever resolves attacks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    id: String,
    player_id: String,
    player_inventory: Inventory,
    ai_inventory: Inventory,
    player_board: Board,
    ai_board: Board,
    player_moves: Vec<Position>,
    ai_moves: Vec<Position>,
    status: SessionStatus,
}

impl Session {
    /// Start a session for `player_id`, taking the session id from `ids`.
    pub fn create<G: IdGenerator + ?Sized>(player_id: impl Into<String>, ids: &mut G) -> Self {
        let session = Session {
            id: ids.generate(),
            player_id: player_id.into(),
            player_inventory: Inventory::standard(),
            ai_inventory: Inventory::standard(),
            player_board: Board::new(),
            ai_board: Board::new(),
            player_moves: Vec::new(),
            ai_moves: Vec::new(),
            status: SessionStatus::Started,
        };
        log::debug!("session {} created for {}", session.id, session.player_id);
        session
    }

    /// Start a session with a random id from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new(player_id: impl Into<String>) -> Self {
        let mut ids = crate::id::RandomIdGenerator::new(rand::rng());
        Self::create(player_id, &mut ids)
    }

    pub fn add_ship_player(&mut self, positions: &[Position]) -> Result<(), PlacementError> {
        self.add_ship(Side::Player, positions)
    }

    pub fn add_ship_ai(&mut self, positions: &[Position]) -> Result<(), PlacementError> {
        self.add_ship(Side::Ai, positions)
    }

    /// Validate `positions` and place the matching ship on `side`'s board.
    ///
    /// The ship kind is chosen by the number of positions given. On error the
    /// session is unchanged.
    pub fn add_ship(&mut self, side: Side, positions: &[Position]) -> Result<(), PlacementError> {
        let id = &self.id;
        let (inventory, board) = match side {
            Side::Player => (&mut self.player_inventory, &mut self.player_board),
            Side::Ai => (&mut self.ai_inventory, &mut self.ai_board),
        };
        let result = place(positions, inventory, board);
        match result {
            Ok(kind) => log::debug!("session {}: {:?} placed {}", id, side, kind),
            Err(e) => log::debug!("session {}: {:?} placement rejected: {}", id, side, e),
        }
        result.map(|_| ())
    }

    /// Move the session to the next lifecycle state.
    pub fn advance_status(&mut self, to: SessionStatus) -> Result<(), StatusError> {
        if self.status.next() != Some(to) {
            return Err(StatusError {
                from: self.status,
                to,
            });
        }
        log::debug!("session {}: {:?} -> {:?}", self.id, self.status, to);
        self.status = to;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn player_inventory(&self) -> &Inventory {
        &self.player_inventory
    }

    pub fn ai_inventory(&self) -> &Inventory {
        &self.ai_inventory
    }

    pub fn player_moves(&self) -> &[Position] {
        &self.player_moves
    }

    pub fn ai_moves(&self) -> &[Position] {
        &self.ai_moves
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Ai => &self.ai_board,
        }
    }

    pub fn inventory(&self, side: Side) -> &Inventory {
        match side {
            Side::Player => &self.player_inventory,
            Side::Ai => &self.ai_inventory,
        }
    }

    /// Returns `true` once every ship of `side` is on its board.
    pub fn is_fleet_complete(&self, side: Side) -> bool {
        self.inventory(side).is_empty()
    }
}

fn place(
    positions: &[Position],
    inventory: &mut Inventory,
    board: &mut Board,
) -> Result<ShipKind, PlacementError> {
    if !positions.iter().all(is_position_valid) || are_positions_diagonal(positions) {
        return Err(PlacementError::PositionNotValid);
    }
    if !are_positions_linear(positions) {
        return Err(PlacementError::InvalidShip);
    }
    // TODO: derive the length from the start/end distance instead of the cell count
    let kind = ShipKind::from_length(positions.len()).ok_or(PlacementError::InvalidShip)?;
    if inventory.position_of_length(kind.length()).is_none() {
        return Err(PlacementError::AlreadyUsedShip);
    }

    // non-empty: the diagonal check rejects an empty list
    let (start, end) = match (positions.first(), positions.last()) {
        (Some(&s), Some(&e)) => (s, e),
        _ => return Err(PlacementError::PositionNotValid),
    };
    if board.overlaps_endpoints(start, end) {
        return Err(PlacementError::ShipOverlaps);
    }

    let ship = inventory
        .take_by_length(kind.length())
        .ok_or(PlacementError::AlreadyUsedShip)?
        .placed_at(start, end);
    let kind = ship.kind();
    board.push(ship);
    Ok(kind)
}
