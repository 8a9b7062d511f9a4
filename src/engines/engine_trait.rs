//! Engine abstraction layer.
//!
//! Defines the one call a move-choosing strategy must answer so harnesses
//! and front ends can swap strategies behind a single trait interface.

use crate::{
    chess_board::ChessBoard, chess_errors::ChessErrors, chess_move::ChessMove,
    piece_team::PieceTeam,
};

pub trait Engine {
    /// Picks a move for `team` on `board` from its pseudo-legal moves.
    /// Returns `ChessErrors::NoMovesAvailable` when the team cannot move.
    fn choose_move(
        &mut self,
        board: &ChessBoard,
        team: PieceTeam,
    ) -> Result<ChessMove, ChessErrors>;
}
