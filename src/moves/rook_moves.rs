use crate::{
    board_location::offset_location,
    chess_board::ChessBoard,
    chess_move::ChessMove,
    piece_record::PieceRecord,
};

/// Rank and file unit directions, in the fixed generation order.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Pseudo-legal rook moves: sliding along ranks and files, stopping before a
/// friendly piece and on an enemy piece (the capture square is included).
pub fn generate_rook_moves(board: &ChessBoard, piece: &PieceRecord) -> Vec<ChessMove> {
    let mut result = Vec::new();
    for (d_file, d_row) in ROOK_DIRECTIONS {
        trace_ray(board, piece, d_file, d_row, &mut result);
    }
    result
}

/// Walks from the piece one step at a time in the given direction,
/// collecting empty squares and stopping at the first occupied one, which is
/// kept only when it holds an enemy. Shared with the bishop and, through
/// both, the queen.
pub(crate) fn trace_ray(
    board: &ChessBoard,
    piece: &PieceRecord,
    d_file: i8,
    d_row: i8,
    result: &mut Vec<ChessMove>,
) {
    let mut cursor = piece.location;
    while let Ok(stop) = offset_location(&cursor, d_file, d_row) {
        match board.get_piece(stop.0, stop.1) {
            None => {
                result.push(ChessMove {
                    start: piece.location,
                    stop,
                });
                cursor = stop;
            }
            Some(target) => {
                if target.team != piece.team {
                    result.push(ChessMove {
                        start: piece.location,
                        stop,
                    });
                }
                break;
            }
        }
    }
}
