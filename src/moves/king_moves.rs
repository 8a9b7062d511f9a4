use crate::{
    board_location::{offset_location, BoardLocation},
    chess_board::ChessBoard,
    chess_move::ChessMove,
    piece_class::PieceClass,
    piece_record::PieceRecord,
};

/// The eight adjacent offsets, in the fixed generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Pseudo-legal king moves: the adjacent squares filtered by bounds and
/// same-team occupancy, followed by any castling candidates.
pub fn generate_king_moves(board: &ChessBoard, piece: &PieceRecord) -> Vec<ChessMove> {
    let mut result = Vec::new();
    for (d_file, d_row) in KING_OFFSETS {
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
    add_castling_candidates(board, piece, &mut result);
    result
}

/// Appends the two-file castling moves this core considers available: the
/// team's king-moved flag is unset, the king stands on its original square,
/// the matching rook stands on its corner, and every square between them is
/// empty. Whether the king would cross an attacked square is not examined
/// here or anywhere else in the crate.
fn add_castling_candidates(board: &ChessBoard, piece: &PieceRecord, result: &mut Vec<ChessMove>) {
    if board.king_has_moved(piece.team) {
        return;
    }
    let back = piece.team.back_row();
    if piece.location != (4, back) {
        return;
    }
    // King-side: rook on the H file, F and G empty.
    if rook_of_team_on(board, piece, (7, back)) && all_empty(board, &[(5, back), (6, back)]) {
        result.push(ChessMove {
            start: piece.location,
            stop: (6, back),
        });
    }
    // Queen-side: rook on the A file, B through D empty.
    if rook_of_team_on(board, piece, (0, back)) && all_empty(board, &[(1, back), (2, back), (3, back)])
    {
        result.push(ChessMove {
            start: piece.location,
            stop: (2, back),
        });
    }
}

fn rook_of_team_on(board: &ChessBoard, piece: &PieceRecord, location: BoardLocation) -> bool {
    matches!(
        board.get_piece(location.0, location.1),
        Some(candidate)
            if candidate.team == piece.team && matches!(candidate.class, PieceClass::Rook)
    )
}

fn all_empty(board: &ChessBoard, locations: &[BoardLocation]) -> bool {
    locations
        .iter()
        .all(|loc| board.get_piece(loc.0, loc.1).is_none())
}
