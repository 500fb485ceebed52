use chess::{Color, Piece, Square};

/// Divisor applied to the raw table values so positional terms never
/// outweigh a full pawn of material.
pub const PST_SCALE: f32 = 100.0;

// Piece-square tables from White's perspective. Index 0 is a1 and the
// first literal row is rank 1; Black looks them up vertically mirrored.

#[rustfmt::skip]
const PAWN_TABLE: [i16; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i16; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i16; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i16; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i16; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_TABLE: [i16; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// Positional bonus for a piece on a square, in pawn units.
#[inline]
pub fn pst_bonus(piece: Piece, color: Color, square: Square) -> f32 {
    let index = match color {
        Color::White => square.to_index(),
        // Flip the rank, keep the file
        Color::Black => square.to_index() ^ 56,
    };

    let table = match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_TABLE,
    };

    f32::from(table[index]) / PST_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_knight_beats_rim_knight() {
        let center = pst_bonus(Piece::Knight, Color::White, Square::E4);
        let rim = pst_bonus(Piece::Knight, Color::White, Square::A1);
        assert!(center > rim);
    }

    #[test]
    fn test_black_lookup_is_mirrored() {
        // e2 for White is the same table entry as e7 for Black.
        let white = pst_bonus(Piece::Pawn, Color::White, Square::E2);
        let black = pst_bonus(Piece::Pawn, Color::Black, Square::E7);
        assert_eq!(white, black);
    }

    #[test]
    fn test_advanced_pawn_is_rewarded() {
        let home = pst_bonus(Piece::Pawn, Color::White, Square::D2);
        let advanced = pst_bonus(Piece::Pawn, Color::White, Square::D6);
        assert!(advanced > home);
    }

    #[test]
    fn test_bonus_bounded_by_a_pawn() {
        for &sq in chess::ALL_SQUARES.iter() {
            for &piece in chess::ALL_PIECES.iter() {
                assert!(pst_bonus(piece, Color::White, sq).abs() < 1.0);
            }
        }
    }
}
