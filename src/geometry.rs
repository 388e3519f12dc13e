//! Pure checks on raw position lists, run before any session state is touched.

use alloc::vec::Vec;

use crate::common::Position;
use crate::config::BOARD_SIZE;

/// True if the position lies on the 10×10 grid.
pub fn is_position_valid(position: &Position) -> bool {
    (1..=BOARD_SIZE).contains(&position.x) && (1..=BOARD_SIZE).contains(&position.y)
}

/// True if every position has `x == y`.
///
/// Only placements along the main diagonal are caught; `(1, 3), (2, 4)` is not.
/// An empty list counts as diagonal.
pub fn are_positions_diagonal(positions: &[Position]) -> bool {
    positions.iter().all(|p| p.x == p.y)
}

/// True if every position shares its row or its column with the first one.
pub fn are_positions_linear(positions: &[Position]) -> bool {
    match positions.split_first() {
        Some((first, rest)) => rest.iter().all(|p| p.x == first.x || p.y == first.y),
        None => true,
    }
}

/// Every cell from `start` to `end` inclusive, for an axis-aligned segment.
///
/// Returns `None` when the two positions share neither row nor column.
pub fn placement_cells(start: Position, end: Position) -> Option<Vec<Position>> {
    if start.x == end.x {
        let (lo, hi) = (start.y.min(end.y), start.y.max(end.y));
        Some((lo..=hi).map(|y| Position::new(start.x, y)).collect())
    } else if start.y == end.y {
        let (lo, hi) = (start.x.min(end.x), start.x.max(end.x));
        Some((lo..=hi).map(|x| Position::new(x, start.y)).collect())
    } else {
        None
    }
}
