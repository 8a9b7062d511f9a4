use crate::{
    board_location::{in_bounds, BoardLocation},
    chess_errors::ChessErrors,
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_team::PieceTeam,
};

/// 8x8 grid of optional pieces, indexed `[file][row]`.
///
/// Each cell holds at most one piece. The register only stores and retrieves;
/// rule knowledge (turn order, movement, special moves) lives in
/// `ChessBoard` and the move generators.
#[derive(Default, Clone, Debug)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    /// Mutable cell access. `x` must be in bounds.
    pub fn at(&mut self, x: BoardLocation) -> &mut Option<PieceRecord> {
        debug_assert!(in_bounds(x.0, x.1));
        &mut self.buffer[x.0 as usize][x.1 as usize]
    }

    /// Read-only cell access. `x` must be in bounds.
    pub fn view(&self, x: BoardLocation) -> &Option<PieceRecord> {
        debug_assert!(in_bounds(x.0, x.1));
        &self.buffer[x.0 as usize][x.1 as usize]
    }

    /// Places a piece on the empty square `y`. The stored record's location
    /// is normalized to `y` so it always matches its grid cell.
    pub fn add_piece_record(&mut self, x: PieceRecord, y: BoardLocation) -> Result<(), ChessErrors> {
        if !in_bounds(y.0, y.1) {
            return Err(ChessErrors::InvalidFileOrRank((y.0, y.1)));
        }
        if self.view(y).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(y));
        }
        *self.at(y) = Some(PieceRecord { location: y, ..x });
        Ok(())
    }

    /// Clears the square `y` and returns whatever occupied it. Out-of-bounds
    /// coordinates answer `None` like an empty square.
    pub fn remove_piece_record(&mut self, y: BoardLocation) -> Option<PieceRecord> {
        if !in_bounds(y.0, y.1) {
            return None;
        }
        self.at(y).take()
    }

    /// Scans the whole grid for a king of the given team.
    pub fn contains_king(&self, team: PieceTeam) -> bool {
        for column in &self.buffer {
            for cell in column {
                if let Some(piece) = cell {
                    if piece.team == team && matches!(piece.class, PieceClass::King) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
