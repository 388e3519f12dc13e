use crate::ship::ShipKind;

/// Width and height of each board. Coordinates run from 1 to `BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Reference fleet, in the order inventories are created and searched.
pub const SHIP_CATALOG: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::PatrolBoat,
];

/// Total number of ship segments used in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;
