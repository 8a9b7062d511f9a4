use crate::board_location::BoardLocation;

/// Immutable from/to descriptor, the only unit accepted by
/// `ChessBoard::perform_move`.
///
/// No capture flag and no promotion choice are carried: captures, promotion
/// (always to a queen), and castling are derived from board state at
/// execution time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
}
