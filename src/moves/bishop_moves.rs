use crate::{
    chess_board::ChessBoard, chess_move::ChessMove, moves::rook_moves::trace_ray,
    piece_record::PieceRecord,
};

/// Diagonal unit directions, in the fixed generation order.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Pseudo-legal bishop moves: the same blocked-sliding walk as the rook,
/// along diagonals.
pub fn generate_bishop_moves(board: &ChessBoard, piece: &PieceRecord) -> Vec<ChessMove> {
    let mut result = Vec::new();
    for (d_file, d_row) in BISHOP_DIRECTIONS {
        trace_ray(board, piece, d_file, d_row, &mut result);
    }
    result
}
