use crate::{
    chess_board::ChessBoard,
    chess_move::ChessMove,
    moves::{bishop_moves::generate_bishop_moves, rook_moves::generate_rook_moves},
    piece_record::PieceRecord,
};

/// Pseudo-legal queen moves: the union of the rook and bishop patterns, rook
/// directions first.
pub fn generate_queen_moves(board: &ChessBoard, piece: &PieceRecord) -> Vec<ChessMove> {
    let mut result = generate_rook_moves(board, piece);
    result.extend(generate_bishop_moves(board, piece));
    result
}
