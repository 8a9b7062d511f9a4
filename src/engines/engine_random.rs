//! Difficulty-1 random-move engine.
//!
//! Selects uniformly from the pseudo-legal moves and is primarily used for
//! diagnostics, integration testing, and low-strength gameplay.

use rand::seq::IndexedRandom;

use crate::{
    chess_board::ChessBoard, chess_errors::ChessErrors, chess_move::ChessMove,
    engines::engine_trait::Engine, piece_team::PieceTeam,
};

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        board: &ChessBoard,
        team: PieceTeam,
    ) -> Result<ChessMove, ChessErrors> {
        let moves = board.get_possible_moves(team);
        let mut rng = rand::rng();
        moves
            .choose(&mut rng)
            .copied()
            .ok_or(ChessErrors::NoMovesAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chosen_move_comes_from_the_generated_list() {
        let board = ChessBoard::new();
        let mut engine = RandomEngine::new();
        let chosen = engine.choose_move(&board, PieceTeam::White).unwrap();
        assert!(board.get_possible_moves(PieceTeam::White).contains(&chosen));
    }

    #[test]
    fn empty_board_leaves_nothing_to_choose() {
        let board = ChessBoard::empty();
        let mut engine = RandomEngine::new();
        assert!(matches!(
            engine.choose_move(&board, PieceTeam::Black),
            Err(ChessErrors::NoMovesAvailable)
        ));
    }
}
