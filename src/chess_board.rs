//! Mutable board state and the operations over it: standard setup, move
//! aggregation, move execution with special-move handling, and check
//! detection by capture simulation.

use std::fmt;

use crate::{
    board_location::{in_bounds, BoardLocation, BOARD_HEIGHT, BOARD_WIDTH},
    chess_errors::ChessErrors,
    chess_move::ChessMove,
    moves::{
        bishop_moves::generate_bishop_moves, king_moves::generate_king_moves,
        knight_moves::generate_knight_moves, pawn_moves::generate_pawn_moves,
        queen_moves::generate_queen_moves, rook_moves::generate_rook_moves,
    },
    piece_class::PieceClass,
    piece_record::PieceRecord,
    piece_register::PieceRegister,
    piece_team::PieceTeam,
    utils::render_board::render_board,
};

/// Back-rank piece order by file, A through H, shared by both teams.
const BACK_ROW_CLASSES: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

/// The piece grid plus per-team king-moved flags.
///
/// A board is exclusively owned by its caller; all mutators take `&mut self`
/// and there is no interior mutability. `Clone` is a deep copy: piece records
/// are plain values, so a clone never aliases the original.
#[derive(Clone, Debug)]
pub struct ChessBoard {
    pub piece_register: PieceRegister,
    pub white_king_moved: bool,
    pub black_king_moved: bool,
}

impl ChessBoard {
    /// A board with no pieces and cleared flags, for setting up scenarios
    /// piece by piece via the register.
    pub fn empty() -> Self {
        ChessBoard {
            piece_register: PieceRegister::default(),
            white_king_moved: false,
            black_king_moved: false,
        }
    }

    /// The standard starting layout: pawns on each team's second row, the
    /// usual back-rank order behind them.
    pub fn new() -> Self {
        let mut board = ChessBoard::empty();
        board.create_pawns();
        board.create_back_rows();
        board
    }

    fn create_pawns(&mut self) {
        for file in 0..BOARD_WIDTH {
            self.place(PieceClass::Pawn, PieceTeam::White, (file, 6));
            self.place(PieceClass::Pawn, PieceTeam::Black, (file, 1));
        }
    }

    fn create_back_rows(&mut self) {
        for (file, class) in BACK_ROW_CLASSES.into_iter().enumerate() {
            self.place(class, PieceTeam::White, (file as i8, PieceTeam::White.back_row()));
            self.place(class, PieceTeam::Black, (file as i8, PieceTeam::Black.back_row()));
        }
    }

    fn place(&mut self, class: PieceClass, team: PieceTeam, location: BoardLocation) {
        *self.piece_register.at(location) = Some(PieceRecord {
            class,
            location,
            team,
        });
    }

    /// The piece on `(file, row)`, or `None` for empty squares and for
    /// coordinates off the board. Never indexes out of bounds.
    pub fn get_piece(&self, file: i8, row: i8) -> Option<&PieceRecord> {
        if in_bounds(file, row) {
            self.piece_register.view((file, row)).as_ref()
        } else {
            None
        }
    }

    pub fn king_has_moved(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::White => self.white_king_moved,
            PieceTeam::Black => self.black_king_moved,
        }
    }

    /// Every pseudo-legal move for the given team, in file-major scan order
    /// (file 0 row 0, file 0 row 1, .. file 7 row 7). The order is fixed so
    /// results are reproducible; moves that would expose the mover's own
    /// king are not filtered out here.
    pub fn get_possible_moves(&self, team: PieceTeam) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for file in 0..BOARD_WIDTH {
            for row in 0..BOARD_HEIGHT {
                if let Some(piece) = self.get_piece(file, row) {
                    if piece.team == team {
                        moves.extend(self.generate_piece_moves(piece));
                    }
                }
            }
        }
        moves
    }

    /// Pseudo-legal moves for a single piece, dispatched on its class.
    pub fn generate_piece_moves(&self, piece: &PieceRecord) -> Vec<ChessMove> {
        match piece.class {
            PieceClass::Pawn => generate_pawn_moves(self, piece),
            PieceClass::Knight => generate_knight_moves(self, piece),
            PieceClass::Bishop => generate_bishop_moves(self, piece),
            PieceClass::Rook => generate_rook_moves(self, piece),
            PieceClass::Queen => generate_queen_moves(self, piece),
            PieceClass::King => generate_king_moves(self, piece),
        }
    }

    /// Relocates the piece on `from` to `to` with no special-move handling.
    /// Whatever occupied `to` is discarded (a capture). The stored record's
    /// location is updated so it keeps matching its grid cell.
    pub fn move_piece(&mut self, from: &BoardLocation, to: &BoardLocation) -> Result<(), ChessErrors> {
        if !in_bounds(to.0, to.1) {
            return Err(ChessErrors::TriedToMoveOutOfBounds((
                *from,
                to.0 - from.0,
                to.1 - from.1,
            )));
        }
        if !in_bounds(from.0, from.1) {
            return Err(ChessErrors::NoPieceAtMoveStart(*from));
        }
        let mut piece = self
            .piece_register
            .remove_piece_record(*from)
            .ok_or(ChessErrors::NoPieceAtMoveStart(*from))?;
        piece.location = *to;
        *self.piece_register.at(*to) = Some(piece);
        Ok(())
    }

    /// Executes a move: relocation first, then pawn promotion and king
    /// bookkeeping (flags and the castling rook). Errors if the starting
    /// square is empty.
    pub fn perform_move(&mut self, chess_move: &ChessMove) -> Result<(), ChessErrors> {
        let piece = *self
            .get_piece(chess_move.start.0, chess_move.start.1)
            .ok_or(ChessErrors::NoPieceAtMoveStart(chess_move.start))?;
        self.move_piece(&chess_move.start, &chess_move.stop)?;
        self.handle_special_moves(&piece, chess_move)
    }

    fn handle_special_moves(
        &mut self,
        piece: &PieceRecord,
        chess_move: &ChessMove,
    ) -> Result<(), ChessErrors> {
        match piece.class {
            PieceClass::Pawn => {
                self.handle_pawn_promotion(piece, chess_move);
                Ok(())
            }
            PieceClass::King => self.handle_king_move(piece.team, chess_move),
            _ => Ok(()),
        }
    }

    /// A pawn that reached the farthest row for either team is discarded and
    /// a fresh queen of the same team takes its square. Always a queen.
    fn handle_pawn_promotion(&mut self, piece: &PieceRecord, chess_move: &ChessMove) {
        if chess_move.stop.1 == 0 || chess_move.stop.1 == BOARD_HEIGHT - 1 {
            *self.piece_register.at(chess_move.stop) = Some(PieceRecord {
                class: PieceClass::Queen,
                location: chess_move.stop,
                team: piece.team,
            });
        }
    }

    fn handle_king_move(
        &mut self,
        team: PieceTeam,
        chess_move: &ChessMove,
    ) -> Result<(), ChessErrors> {
        match team {
            PieceTeam::White => self.white_king_moved = true,
            PieceTeam::Black => self.black_king_moved = true,
        }
        self.handle_castling(chess_move)
    }

    /// Moves the matching rook after a two-file king move: the H-file rook
    /// to the king's inner side after a king-side move, the A-file rook
    /// likewise after a queen-side move. Only the relocation happens here;
    /// eligibility (flags, empty path) is the move generator's concern, and
    /// crossing an attacked square is checked nowhere.
    fn handle_castling(&mut self, chess_move: &ChessMove) -> Result<(), ChessErrors> {
        let d_file = chess_move.stop.0 - chess_move.start.0;
        if d_file == 2 {
            let rook_from = (chess_move.stop.0 + 1, chess_move.stop.1);
            let rook_to = (chess_move.stop.0 - 1, chess_move.stop.1);
            self.relocate_castling_rook(&rook_from, &rook_to)
        } else if d_file == -2 {
            let rook_from = (chess_move.stop.0 - 2, chess_move.stop.1);
            let rook_to = (chess_move.stop.0 + 1, chess_move.stop.1);
            self.relocate_castling_rook(&rook_from, &rook_to)
        } else {
            Ok(())
        }
    }

    fn relocate_castling_rook(
        &mut self,
        from: &BoardLocation,
        to: &BoardLocation,
    ) -> Result<(), ChessErrors> {
        if self.get_piece(from.0, from.1).is_none() {
            return Err(ChessErrors::MissingCastlingRook(*from));
        }
        self.move_piece(from, to)
    }

    /// True when `team` is in check: some opposing pseudo-legal move, played
    /// out on a clone of this board, leaves no king of `team` on the grid.
    /// The definition is capture-based rather than attacked-square based, so
    /// a board already missing the king reports check as soon as the
    /// opponent has any move at all.
    pub fn is_check(&self, team: PieceTeam) -> Result<bool, ChessErrors> {
        for candidate in self.get_possible_moves(team.opposite()) {
            let mut copy = self.clone();
            copy.perform_move(&candidate)?;
            if !copy.piece_register.contains_king(team) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        ChessBoard::new()
    }
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
