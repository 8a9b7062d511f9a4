//! Text-oriented board renderer.
//!
//! Produces a human-readable grid for debugging, tests, and terminal
//! diagnostics. Nothing parses this output back.

use std::fmt::Write;

use crate::{
    chess_board::ChessBoard, piece_class::PieceClass, piece_record::PieceRecord,
    piece_team::PieceTeam,
};

/// Renders the grid with file labels A through H and rank labels 8 down
/// to 1. Occupied cells show a two-letter team+class code, empty cells show
/// `..`.
pub fn render_board(board: &ChessBoard) -> String {
    let mut out = String::new();
    out.push_str("    A  B  C  D  E  F  G  H\n");
    out.push_str("    -----------------------\n");
    for row in 0..8i8 {
        let _ = write!(out, "{} | ", 8 - row);
        for file in 0..8i8 {
            match board.get_piece(file, row) {
                Some(piece) => {
                    out.push_str(short_code(piece));
                    out.push(' ');
                }
                None => out.push_str(".. "),
            }
        }
        out.push('\n');
    }
    out
}

fn short_code(piece: &PieceRecord) -> &'static str {
    match (piece.team, piece.class) {
        (PieceTeam::White, PieceClass::Pawn) => "WP",
        (PieceTeam::White, PieceClass::Knight) => "WN",
        (PieceTeam::White, PieceClass::Bishop) => "WB",
        (PieceTeam::White, PieceClass::Rook) => "WR",
        (PieceTeam::White, PieceClass::Queen) => "WQ",
        (PieceTeam::White, PieceClass::King) => "WK",
        (PieceTeam::Black, PieceClass::Pawn) => "BP",
        (PieceTeam::Black, PieceClass::Knight) => "BN",
        (PieceTeam::Black, PieceClass::Bishop) => "BB",
        (PieceTeam::Black, PieceClass::Rook) => "BR",
        (PieceTeam::Black, PieceClass::Queen) => "BQ",
        (PieceTeam::Black, PieceClass::King) => "BK",
    }
}
