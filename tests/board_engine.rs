//! Board engine behaviour: creation, legality, line and board winners.

mod common;

use common::board_3x3;
use tictactoe_lab::{
    Board, Cell, Error, Position, Side,
    tictactoe::{board_winner, diagonals_at_least, line_winner, rows},
};

mod board_creation {
    use super::*;

    #[test]
    fn test_new_board_shape() {
        let board = Board::new(3);
        assert_eq!(board.size(), 3);
        assert_eq!(board.cells().len(), 9);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert!(board.cells().iter().all(|&cell| cell == Cell::Empty));
        assert_eq!(board.values().iter().map(|&v| i32::from(v)).sum::<i32>(), 0);
    }

    #[test]
    fn test_from_values_rejects_bad_input() {
        assert!(matches!(
            Board::from_values(&[0, 0, 0, 0, 0]),
            Err(Error::NonSquareBoard { cells: 5 })
        ));
        assert!(matches!(
            Board::from_values(&[0, 0, 2, 0]),
            Err(Error::InvalidCellValue { value: 2, index: 2 })
        ));
    }
}

mod applying_moves {
    use super::*;

    #[test]
    fn test_apply_move_in_place_on_empty_field() {
        let mut board = Board::new(3);
        let position = Position::new(1, 2);

        board.apply_move_in_place(position, Side::PlayerOne).unwrap();
        assert_eq!(board.get(position), Cell::PlayerOne);
    }

    #[test]
    fn test_apply_move_in_place_on_taken_field() {
        let mut board = Board::new(3);
        let position = Position::new(1, 2);
        board.apply_move_in_place(position, Side::PlayerOne).unwrap();

        let err = board
            .apply_move_in_place(position, Side::PlayerTwo)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::IllegalMove {
                occupant: Side::PlayerOne,
                ..
            }
        ));
        assert_eq!(board.get(position), Cell::PlayerOne);
    }

    #[test]
    fn test_apply_move_on_empty_field_leaves_input() {
        let board = Board::new(3);
        let position = Position::new(0, 1);

        let next = board.apply_move(position, Side::PlayerOne).unwrap();
        assert_eq!(board.get(position), Cell::Empty);
        assert_eq!(next.get(position), Cell::PlayerOne);
    }

    #[test]
    fn test_apply_move_on_taken_field() {
        let board = Board::new(3)
            .apply_move(Position::new(0, 1), Side::PlayerOne)
            .unwrap();
        assert!(matches!(
            board.apply_move(Position::new(0, 1), Side::PlayerTwo),
            Err(Error::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let mut board = Board::new(3);
        assert!(matches!(
            board.apply_move_in_place(Position::new(3, 0), Side::PlayerOne),
            Err(Error::PositionOutOfBounds { size: 3, .. })
        ));
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_available_moves() {
        let mut board = Board::new(3);
        assert_eq!(board.available_moves().len(), 9);

        board
            .apply_move_in_place(Position::new(1, 1), Side::PlayerOne)
            .unwrap();
        let moves = board.available_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::new(1, 1)));
        assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));

        let full = board_3x3([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]);
        assert!(full.available_moves().is_empty());
    }
}

mod winners {
    use super::*;

    fn first_row(board: &Board) -> Vec<Cell> {
        rows(board).next().unwrap()
    }

    #[test]
    fn test_line_winner_on_empty_line() {
        let board = Board::new(3);
        assert_eq!(line_winner(&first_row(&board), 3), None);
    }

    #[test]
    fn test_line_winner_on_winning_line() {
        let mut board = Board::new(3);
        for col in 0..3 {
            board
                .apply_move_in_place(Position::new(0, col), Side::PlayerTwo)
                .unwrap();
        }
        assert_eq!(line_winner(&first_row(&board), 3), Some(Side::PlayerTwo));
    }

    #[test]
    fn test_two_qualifying_diagonals_on_3x3() {
        assert_eq!(diagonals_at_least(&Board::new(3), 3).len(), 2);
    }

    #[test]
    fn test_empty_diagonals_have_no_winner() {
        let diagonals = diagonals_at_least(&Board::new(3), 3);
        assert_eq!(line_winner(&diagonals[0], 3), None);
        assert_eq!(line_winner(&diagonals[1], 3), None);
    }

    #[test]
    fn test_main_diagonal_is_second() {
        let mut board = Board::new(3);
        for i in 0..3 {
            board
                .apply_move_in_place(Position::new(i, i), Side::PlayerTwo)
                .unwrap();
        }
        let diagonals = diagonals_at_least(&board, 3);
        assert_eq!(line_winner(&diagonals[0], 3), None);
        assert_eq!(line_winner(&diagonals[1], 3), Some(Side::PlayerTwo));
    }

    #[test]
    fn test_board_winner_on_empty_board() {
        assert_eq!(board_winner(&Board::new(3), 3), None);
    }

    #[test]
    fn test_board_winner_on_winning_row() {
        let board = board_3x3([[-1, -1, -1], [0, 1, 0], [1, 0, 0]]);
        assert_eq!(board_winner(&board, 3), Some(Side::PlayerTwo));
    }

    #[test]
    fn test_board_winner_on_winning_column() {
        let board = board_3x3([[-1, 1, 0], [-1, 1, 0], [-1, 0, 0]]);
        assert_eq!(board_winner(&board, 3), Some(Side::PlayerTwo));
    }

    #[test]
    fn test_board_winner_on_winning_diagonal() {
        let board = board_3x3([[-1, 1, 0], [0, -1, 1], [0, 0, -1]]);
        assert_eq!(board_winner(&board, 3), Some(Side::PlayerTwo));
    }

    #[test]
    fn test_board_winner_on_winning_anti_diagonal() {
        let board = board_3x3([[-1, -1, 1], [0, 1, 0], [1, 0, 0]]);
        assert_eq!(board_winner(&board, 3), Some(Side::PlayerOne));
    }

    #[test]
    fn test_board_winner_on_draw_board() {
        let board = board_3x3([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]);
        assert_eq!(board_winner(&board, 3), None);
    }

    #[test]
    fn test_winning_length_one() {
        let board = board_3x3([[0, 0, 0], [0, -1, 0], [0, 0, 0]]);
        assert_eq!(board_winner(&board, 1), Some(Side::PlayerTwo));
    }
}
