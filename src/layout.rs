//! Random fleet layouts for filling a board through the regular placement path.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::{PlacementError, Position};
use crate::config::BOARD_SIZE;
use crate::geometry::placement_cells;
use crate::session::{Session, Side};
use crate::ship::ShipKind;

const MAX_ATTEMPTS: usize = 100;

/// Errors returned while laying out a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("no free position found for {0}")]
    NoRoom(ShipKind),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A contiguous horizontal or vertical run of cells for `kind` that touches
/// no cell of any ship already on `board`.
pub fn random_positions<R: Rng>(
    rng: &mut R,
    kind: ShipKind,
    board: &Board,
) -> Option<Vec<Position>> {
    let occupied: Vec<Position> = board
        .iter()
        .filter_map(|s| s.placement())
        .filter_map(|p| placement_cells(p.start, p.end))
        .flatten()
        .collect();
    let len = kind.length() as u8;
    let last_start = BOARD_SIZE - len + 1;

    for _ in 0..MAX_ATTEMPTS {
        let horizontal: bool = rng.random();
        let (x, y) = if horizontal {
            (rng.random_range(1..=last_start), rng.random_range(1..=BOARD_SIZE))
        } else {
            (rng.random_range(1..=BOARD_SIZE), rng.random_range(1..=last_start))
        };
        let cells: Vec<Position> = (0..len)
            .map(|i| {
                if horizontal {
                    Position::new(x + i, y)
                } else {
                    Position::new(x, y + i)
                }
            })
            .collect();
        if cells.iter().all(|c| !occupied.contains(c)) {
            return Some(cells);
        }
    }
    None
}

/// Place every ship left in `side`'s inventory at random.
pub fn random_fleet<R: Rng>(
    rng: &mut R,
    session: &mut Session,
    side: Side,
) -> Result<(), LayoutError> {
    let remaining: Vec<ShipKind> = session.inventory(side).iter().map(|s| s.kind()).collect();
    for kind in remaining {
        let positions =
            random_positions(rng, kind, session.board(side)).ok_or(LayoutError::NoRoom(kind))?;
        session.add_ship(side, &positions)?;
    }
    Ok(())
}
