use battleship_session::{
    are_positions_diagonal, are_positions_linear, is_position_valid, placement_cells, Position,
    ShipKind, BOARD_SIZE,
};

fn p(x: u8, y: u8) -> Position {
    Position::new(x, y)
}

#[test]
fn test_position_bounds() {
    assert!(is_position_valid(&p(1, 1)));
    assert!(is_position_valid(&p(BOARD_SIZE, BOARD_SIZE)));
    assert!(is_position_valid(&p(1, 10)));
    assert!(!is_position_valid(&p(0, 5)));
    assert!(!is_position_valid(&p(5, 0)));
    assert!(!is_position_valid(&p(11, 5)));
    assert!(!is_position_valid(&p(5, 11)));
}

#[test]
fn test_diagonal_only_catches_x_equals_y() {
    assert!(are_positions_diagonal(&[p(1, 1), p(2, 2), p(3, 3)]));
    assert!(are_positions_diagonal(&[p(7, 7)]));
    assert!(are_positions_diagonal(&[]));
    // off the main diagonal goes unnoticed
    assert!(!are_positions_diagonal(&[p(1, 3), p(2, 4)]));
    assert!(!are_positions_diagonal(&[p(1, 1), p(2, 1)]));
    assert!(!are_positions_diagonal(&[p(2, 1), p(2, 2), p(2, 3)]));
}

#[test]
fn test_linear_against_first_position() {
    assert!(are_positions_linear(&[p(1, 1), p(2, 1), p(3, 1)]));
    assert!(are_positions_linear(&[p(4, 2), p(4, 3), p(4, 9)]));
    assert!(are_positions_linear(&[p(4, 2)]));
    assert!(are_positions_linear(&[]));
    assert!(!are_positions_linear(&[p(1, 1), p(2, 2)]));
    // each follower only needs to share an axis with the first
    assert!(are_positions_linear(&[p(1, 1), p(1, 5), p(5, 1)]));
}

#[test]
fn test_placement_cells() {
    assert_eq!(
        placement_cells(p(2, 3), p(2, 5)),
        Some(vec![p(2, 3), p(2, 4), p(2, 5)])
    );
    assert_eq!(placement_cells(p(4, 1), p(3, 1)), Some(vec![p(3, 1), p(4, 1)]));
    assert_eq!(placement_cells(p(1, 1), p(2, 2)), None);
}

#[test]
fn test_ship_kind_catalog() {
    let lengths: Vec<usize> = ShipKind::ALL.iter().map(|k| k.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
    assert_eq!(ShipKind::from_length(3), Some(ShipKind::Destroyer));
    assert_eq!(ShipKind::from_length(2), Some(ShipKind::PatrolBoat));
    assert_eq!(ShipKind::from_length(1), None);
    assert_eq!(ShipKind::from_length(6), None);
    assert_eq!(ShipKind::PatrolBoat.to_string(), "Patrol Boat");
}
