//! Tests for win detection through the public API.

use tictactoe_core::{
    Board, LINES, Outcome, Player, Position, Square, WinningLine, check_winner, is_draw,
};

#[test]
fn test_each_triple_reports_winner_and_line() {
    let expected = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    for (line, indices) in LINES.iter().zip(expected) {
        assert_eq!(line.map(Position::to_index), indices);

        let mut board = Board::new();
        for pos in line {
            board.set(*pos, Square::Occupied(Player::O));
        }
        assert_eq!(
            check_winner(&board),
            Some(WinningLine {
                winner: Player::O,
                line: *line
            })
        );
    }
}

#[test]
fn test_two_in_a_row_is_not_a_win() {
    for line in LINES {
        let mut board = Board::new();
        board.set(line[0], Square::Occupied(Player::X));
        board.set(line[1], Square::Occupied(Player::X));
        board.set(line[2], Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None, "line {:?}", line);
    }
}

#[test]
fn test_outcome_display() {
    assert_eq!(Outcome::Winner(Player::X).to_string(), "Winner: X");
    assert_eq!(Outcome::Draw.to_string(), "Draw");
}

#[test]
fn test_draw_board() {
    let board = Board::from_cells("XOX XOO OXX").unwrap();
    assert_eq!(check_winner(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn test_winning_line_serializes() {
    let win = WinningLine {
        winner: Player::X,
        line: [Position::TopLeft, Position::Center, Position::BottomRight],
    };
    let json = serde_json::to_string(&win).unwrap();
    assert_eq!(
        json,
        r#"{"winner":"X","line":["TopLeft","Center","BottomRight"]}"#
    );
}
