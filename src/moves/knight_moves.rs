use crate::{
    board_location::offset_location,
    chess_board::ChessBoard,
    chess_move::ChessMove,
    piece_record::PieceRecord,
};

/// The eight L-shaped offsets, in the fixed order move lists are produced in.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Pseudo-legal knight moves. Knights jump, so intervening pieces never
/// block; only bounds and same-team occupancy filter the offsets.
pub fn generate_knight_moves(board: &ChessBoard, piece: &PieceRecord) -> Vec<ChessMove> {
    let mut result = Vec::new();
    for (d_file, d_row) in KNIGHT_OFFSETS {
        if let Ok(stop) = offset_location(&piece.location, d_file, d_row) {
            let blocked_by_friend = matches!(
                board.get_piece(stop.0, stop.1),
                Some(target) if target.team == piece.team
            );
            if !blocked_by_friend {
                result.push(ChessMove {
                    start: piece.location,
                    stop,
                });
            }
        }
    }
    result
}
