use noughts::{Board, BoardState, GameError, Mark, Side};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.cells(), [Mark::Empty; 9]);
    assert_eq!(board.empty_count(), 9);
    assert!(!board.is_full());
    for i in 0..9 {
        assert!(board.is_empty(i).unwrap());
    }
}

#[test]
fn test_set_get_and_overwrite() {
    let mut board = Board::new();
    board.set(4, Side::O).unwrap();
    assert_eq!(board.get(4).unwrap(), Mark::O);
    assert!(!board.is_empty(4).unwrap());

    // set does not check ownership
    board.set(4, Side::X).unwrap();
    assert_eq!(board.get(4).unwrap(), Mark::X);
    assert_eq!(board.occupancy(Side::O).count_ones(), 0);
    assert_eq!(board.empty_count(), 8);
}

#[test]
fn test_out_of_range_index() {
    let mut board = Board::new();
    assert_eq!(board.set(9, Side::X), Err(GameError::InvalidIndex));
    assert_eq!(board.get(9), Err(GameError::InvalidIndex));
    assert_eq!(board.is_empty(42), Err(GameError::InvalidIndex));
}

#[test]
fn test_fill_all_and_clear() {
    let mut board = Board::new();
    board.set(0, Side::X).unwrap();
    board.set(1, Side::O).unwrap();

    board.fill_all(Side::O);
    assert_eq!(board.cells(), [Mark::O; 9]);
    assert!(board.is_full());
    assert_eq!(board.occupancy(Side::X).count_ones(), 0);

    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_cells_ascending() {
    let mut board = Board::new();
    for i in [0, 2, 4, 6, 8] {
        board.set(i, Side::X).unwrap();
    }
    let empties: Vec<_> = board.empty_cells().collect();
    assert_eq!(empties, vec![1, 3, 5, 7]);
}

#[test]
fn test_board_state_conversion() {
    use Mark::{Empty as E, O, X};
    let cells = [O, O, E, E, X, E, E, E, E];
    let board = Board::from(cells);
    assert_eq!(board.cells(), cells);
    assert_eq!(BoardState::from(&board), BoardState { cells });
}

#[test]
fn test_display_uses_dash_for_empty() {
    let mut board = Board::new();
    board.set(0, Side::X).unwrap();
    board.set(4, Side::O).unwrap();
    assert_eq!(board.to_string(), "X - -\n- O -\n- - -");
}
