use crate::board_location::BoardLocation;

/// Unified error type for the rules core.
///
/// Each variant corresponds to a specific failure mode in board manipulation
/// or move execution and carries contextual payloads where useful so callers
/// can log or display precise diagnostics. Queries such as `get_piece` and
/// `in_bounds` answer with sentinels instead of errors; only mutators and the
/// engine layer report through this enum.
#[derive(Debug)]
pub enum ChessErrors {
    /// Generic failure used in unit tests as a quick-fail value.
    FailedTest,

    /// Attempted to move from `BoardLocation` by the offset `(d_file, d_row)`
    /// which would leave the board.
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Invalid file or row indices were provided (outside 0..=7).
    InvalidFileOrRank((i8, i8)),

    /// A move's starting square holds no piece. Executing such a move is a
    /// contract violation by the caller, not a silent no-op.
    NoPieceAtMoveStart(BoardLocation),

    /// Attempted to place a piece on a square that is already occupied.
    BoardLocationOccupied(BoardLocation),

    /// A two-file king move was executed but the square the castling rook
    /// was expected on is empty.
    MissingCastlingRook(BoardLocation),

    /// An engine was asked to pick a move for a side with no moves at all.
    NoMovesAvailable,
}
