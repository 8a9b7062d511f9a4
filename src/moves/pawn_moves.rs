use crate::{
    board_location::offset_location,
    chess_board::ChessBoard,
    chess_move::ChessMove,
    piece_record::PieceRecord,
    piece_team::PieceTeam,
};

/// Forward direction along the row axis for the given team. White pawns
/// start on row 6 and advance toward row 0.
pub fn forward_direction(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::White => -1,
        PieceTeam::Black => 1,
    }
}

fn start_row(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::White => 6,
        PieceTeam::Black => 1,
    }
}

/// Pseudo-legal pawn moves: forward one onto an empty square, forward two
/// from the start row when both squares are empty, and diagonal steps only
/// when they capture an enemy piece. En passant is not part of this core,
/// and promotion is an execution concern, not a generation concern.
pub fn generate_pawn_moves(board: &ChessBoard, piece: &PieceRecord) -> Vec<ChessMove> {
    let mut result = Vec::new();
    let dir = forward_direction(piece.team);

    if let Ok(one) = offset_location(&piece.location, 0, dir) {
        if board.get_piece(one.0, one.1).is_none() {
            result.push(ChessMove {
                start: piece.location,
                stop: one,
            });
            if piece.location.1 == start_row(piece.team) {
                if let Ok(two) = offset_location(&piece.location, 0, 2 * dir) {
                    if board.get_piece(two.0, two.1).is_none() {
                        result.push(ChessMove {
                            start: piece.location,
                            stop: two,
                        });
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Ok(diag) = offset_location(&piece.location, d_file, dir) {
            if let Some(target) = board.get_piece(diag.0, diag.1) {
                if target.team != piece.team {
                    result.push(ChessMove {
                        start: piece.location,
                        stop: diag,
                    });
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{piece_class::PieceClass, piece_record::PieceRecord};

    fn pawn(team: PieceTeam, location: (i8, i8)) -> PieceRecord {
        PieceRecord {
            class: PieceClass::Pawn,
            location,
            team,
        }
    }

    #[test]
    fn white_start_row_pawn_has_single_and_double_step() {
        let mut board = ChessBoard::empty();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::White, (3, 6)), (3, 6))
            .unwrap();
        let moves = generate_pawn_moves(&board, board.get_piece(3, 6).unwrap());
        assert_eq!(
            moves,
            vec![
                ChessMove { start: (3, 6), stop: (3, 5) },
                ChessMove { start: (3, 6), stop: (3, 4) },
            ]
        );
    }

    #[test]
    fn blocked_pawn_cannot_advance() {
        let mut board = ChessBoard::empty();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::White, (3, 6)), (3, 6))
            .unwrap();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::Black, (3, 5)), (3, 5))
            .unwrap();
        let moves = generate_pawn_moves(&board, board.get_piece(3, 6).unwrap());
        assert!(moves.is_empty());
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = ChessBoard::empty();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::Black, (2, 1)), (2, 1))
            .unwrap();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::White, (2, 3)), (2, 3))
            .unwrap();
        let moves = generate_pawn_moves(&board, board.get_piece(2, 1).unwrap());
        assert_eq!(moves, vec![ChessMove { start: (2, 1), stop: (2, 2) }]);
    }

    #[test]
    fn diagonal_steps_only_capture_enemies() {
        let mut board = ChessBoard::empty();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::White, (3, 4)), (3, 4))
            .unwrap();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::Black, (2, 3)), (2, 3))
            .unwrap();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::White, (4, 3)), (4, 3))
            .unwrap();
        let moves = generate_pawn_moves(&board, board.get_piece(3, 4).unwrap());
        // Forward one, plus the enemy on (2, 3); the friend on (4, 3) is not
        // a target and empty diagonals never are.
        assert_eq!(
            moves,
            vec![
                ChessMove { start: (3, 4), stop: (3, 3) },
                ChessMove { start: (3, 4), stop: (2, 3) },
            ]
        );
    }

    #[test]
    fn black_pawns_advance_toward_higher_rows() {
        let mut board = ChessBoard::empty();
        board
            .piece_register
            .add_piece_record(pawn(PieceTeam::Black, (0, 4)), (0, 4))
            .unwrap();
        let moves = generate_pawn_moves(&board, board.get_piece(0, 4).unwrap());
        assert_eq!(moves, vec![ChessMove { start: (0, 4), stop: (0, 5) }]);
    }
}
