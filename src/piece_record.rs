use crate::{board_location::BoardLocation, piece_class::PieceClass, piece_team::PieceTeam};

/// Represents a chess piece with its class, team, and current square.
///
/// The `location` field always equals the grid indices of the register cell
/// holding the record; `ChessBoard::move_piece` is the only place allowed to
/// update it. Records are plain values, so copying a board never aliases a
/// piece with the original.
#[derive(Copy, Clone, Debug)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece location.
    pub location: BoardLocation,
    /// Piece team.
    pub team: PieceTeam,
}
