use noughts::{evaluate, is_draw, Board, Mark, Side, Win, LINES};
use proptest::prelude::*;

use Mark::{Empty as E, O, X};

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(evaluate(&Board::new()), None);
}

#[test]
fn test_every_line_is_detected() {
    for line in LINES {
        for side in Side::ALL {
            let mut board = Board::new();
            for i in line {
                board.set(i, side).unwrap();
            }
            let win = evaluate(&board).expect("line should win");
            assert_eq!(win, Win { side, line });
            assert_eq!(win.end(), line[2]);
        }
    }
}

#[test]
fn test_incomplete_and_mixed_lines() {
    let board = Board::from([X, X, E, O, O, X, E, E, E]);
    assert_eq!(evaluate(&board), None);
}

#[test]
fn test_first_line_in_scan_order_wins() {
    // X holds column 0 and O holds column 2: column 0 is scanned first
    let board = Board::from([X, E, O, X, E, O, X, E, O]);
    let win = evaluate(&board).unwrap();
    assert_eq!(win.side, Side::X);
    assert_eq!(win.line, [0, 3, 6]);

    let mut filled = Board::new();
    filled.fill_all(Side::X);
    assert_eq!(evaluate(&filled).unwrap().line, [0, 1, 2]);
}

#[test]
fn test_draw_detection() {
    let board = Board::from([X, O, X, X, O, O, O, X, X]);
    assert_eq!(evaluate(&board), None);
    assert!(is_draw(&board));
    assert!(!is_draw(&Board::new()));
}

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(E), Just(X), Just(O)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Evaluation agrees with a direct scan of the lines and leaves the board as it was.
    #[test]
    fn evaluate_matches_scan_and_is_pure(cells in prop::array::uniform9(arb_mark())) {
        let board = Board::from(cells);
        let before = board;
        let expected = LINES.iter().find_map(|line| {
            let first = cells[line[0]];
            let side = first.side()?;
            (cells[line[1]] == first && cells[line[2]] == first).then_some(Win { side, line: *line })
        });
        prop_assert_eq!(evaluate(&board), expected);
        prop_assert_eq!(board, before);
    }

    /// Writing any line in full on top of arbitrary cells is always reported.
    #[test]
    fn completed_line_is_always_found(
        cells in prop::array::uniform9(arb_mark()),
        line_idx in 0..LINES.len(),
        x_wins in any::<bool>(),
    ) {
        let side = if x_wins { Side::X } else { Side::O };
        let mut board = Board::from(cells);
        for i in LINES[line_idx] {
            board.set(i, side).unwrap();
        }
        prop_assert!(evaluate(&board).is_some());
    }
}
