// Conventional material values in pawn units. The king carries no trade
// value; losing it is represented by checkmate detection, not material.

pub const PAWN_VALUE: f32 = 1.0;
pub const KNIGHT_VALUE: f32 = 3.0;
pub const BISHOP_VALUE: f32 = 3.0;
pub const ROOK_VALUE: f32 = 5.0;
pub const QUEEN_VALUE: f32 = 9.0;
pub const KING_VALUE: f32 = 0.0;

#[inline(always)]
pub fn piece_value(piece: chess::Piece) -> f32 {
    match piece {
        chess::Piece::Pawn => PAWN_VALUE,
        chess::Piece::Knight => KNIGHT_VALUE,
        chess::Piece::Bishop => BISHOP_VALUE,
        chess::Piece::Rook => ROOK_VALUE,
        chess::Piece::Queen => QUEEN_VALUE,
        chess::Piece::King => KING_VALUE,
    }
}
