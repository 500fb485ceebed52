use chess::{Board, ChessMove, Piece, Square};

use crate::params::OPENING_MOVES;

/// The four central squares used for the center-control tag.
pub const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Advisory tags for one legal move in one position.
///
/// Computed fresh per query and never cached across positions. Tags only
/// inform scoring and ordering; they never reject a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveClassification {
    pub is_capture: bool,
    pub captured: Option<Piece>,
    pub gives_check: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
    pub controls_center: bool,
    pub develops_piece: bool,
}

/// Label a candidate move given the positions before and after it.
///
/// `move_number` is the game's fullmove counter; it gates the
/// development tag to the opening phase.
pub fn classify(
    before: &Board,
    mv: ChessMove,
    after: &Board,
    move_number: u16,
) -> MoveClassification {
    let source = mv.get_source();
    let dest = mv.get_dest();

    let mover = before.piece_on(source);
    let captured = before.piece_on(dest);

    let is_castle = mover == Some(Piece::King) && file_distance(source, dest) == 2;

    let develops_piece = matches!(mover, Some(Piece::Knight) | Some(Piece::Bishop))
        && move_number < OPENING_MOVES;

    MoveClassification {
        is_capture: captured.is_some(),
        captured,
        // The mover's opponent is the side to move in `after`.
        gives_check: after.checkers().popcnt() > 0,
        is_castle,
        is_promotion: mv.get_promotion().is_some(),
        controls_center: CENTER_SQUARES.contains(&dest),
        develops_piece,
    }
}

fn file_distance(a: Square, b: Square) -> usize {
    let fa = a.get_file().to_index();
    let fb = b.get_file().to_index();
    fa.abs_diff(fb)
}
