use chess::{BitBoard, Board, Color, Piece};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// Check if the position is a dead draw by insufficient material.
///
/// Returns true for:
/// - K vs K
/// - K+N vs K (either side)
/// - K+B vs K (either side)
/// - K+B vs K+B with same-colored bishops
pub fn has_insufficient_material(board: &Board) -> bool {
    let pawns = *board.pieces(Piece::Pawn);
    let rooks = *board.pieces(Piece::Rook);
    let queens = *board.pieces(Piece::Queen);

    if (pawns | rooks | queens).popcnt() > 0 {
        return false;
    }

    let white = *board.color_combined(Color::White);
    let black = *board.color_combined(Color::Black);
    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);

    let white_knights = (white & knights).popcnt();
    let black_knights = (black & knights).popcnt();
    let white_bishops = (white & bishops).popcnt();
    let black_bishops = (black & bishops).popcnt();

    let white_minors = white_knights + white_bishops;
    let black_minors = black_knights + black_bishops;

    // K vs K
    if white_minors == 0 && black_minors == 0 {
        return true;
    }

    // A single minor cannot force mate
    if white_minors + black_minors == 1 {
        return true;
    }

    // K+B vs K+B with bishops on same color squares
    if white_bishops == 1 && black_bishops == 1 && white_minors == 1 && black_minors == 1 {
        let light_squares = BitBoard(LIGHT_SQUARES_MASK);
        let white_on_light = (white & bishops & light_squares).popcnt() > 0;
        let black_on_light = (black & bishops & light_squares).popcnt() > 0;

        if white_on_light == black_on_light {
            return true;
        }
    }

    false
}
