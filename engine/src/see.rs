use chess::{BitBoard, Board, ChessMove, MoveGen, Piece};
use evaluation::piece_value;

/// Static exchange evaluation of a move in pawn units.
///
/// Simulates alternating recaptures on the destination square, each side
/// always recapturing with its least valuable attacker, then folds the
/// captured values backwards. Every side after the first may decline to
/// continue the exchange, so the result is the forced move's true net:
/// positive wins material for the side making `mv`, negative loses it.
pub fn see(board: &Board, mv: ChessMove) -> f32 {
    let target = mv.get_dest();

    let mut first_gain = match board.piece_on(target) {
        Some(victim) => piece_value(victim),
        None => 0.0,
    };

    // A promotion trades a pawn off the board for the promoted piece
    if let Some(promo) = mv.get_promotion() {
        first_gain += piece_value(promo) - piece_value(Piece::Pawn);
    }

    // gains[i] is the value captured at ply i of the exchange
    let mut gains = vec![first_gain];

    let mut current = board.make_move_new(mv);
    while let Some(recapture) = cheapest_recapture(&current, target) {
        // The piece standing on the target square is what gets taken
        if let Some(standing) = current.piece_on(target) {
            gains.push(piece_value(standing));
        }
        current = current.make_move_new(recapture);
    }

    // Each responder may stop the exchange; the initial move is forced.
    let mut best_reply = 0.0;
    for i in (1..gains.len()).rev() {
        best_reply = (gains[i] - best_reply).max(0.0);
    }

    gains[0] - best_reply
}

/// True if playing `mv` leaves the moved piece capturable at a net
/// material gain for the opponent.
pub fn hangs_piece(board: &Board, mv: ChessMove) -> bool {
    let after = board.make_move_new(mv);
    let target = mv.get_dest();

    let mut captures = MoveGen::new_legal(&after);
    captures.set_iterator_mask(BitBoard::from_square(target));

    captures.any(|m| see(&after, m) > 0.0)
}

/// Least valuable legal recapture landing on `target`, if any.
fn cheapest_recapture(board: &Board, target: chess::Square) -> Option<ChessMove> {
    let mut recaptures = MoveGen::new_legal(board);
    recaptures.set_iterator_mask(BitBoard::from_square(target));

    let mut best = None;
    let mut best_value = f32::INFINITY;
    for m in recaptures {
        if let Some(attacker) = board.piece_on(m.get_source()) {
            let value = piece_value(attacker);
            if value < best_value {
                best_value = value;
                best = Some(m);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Square;
    use std::str::FromStr;

    #[test]
    fn test_undefended_pawn_is_a_clean_win() {
        let board = Board::from_str("4k3/8/8/3p4/8/8/8/3RK3 w - - 0 1").unwrap();
        let mv = ChessMove::new(Square::D1, Square::D5, None);
        assert!(see(&board, mv) >= 1.0);
    }

    #[test]
    fn test_pawn_trade_is_even() {
        let board =
            Board::from_str("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        // exd5 wins a pawn, Qxd5 takes ours back.
        let mv = ChessMove::new(Square::E4, Square::D5, None);
        assert_eq!(see(&board, mv), 0.0);
    }

    #[test]
    fn test_queen_takes_defended_pawn_loses() {
        // Black pawn on d5 defended by the pawn on e6.
        let board = Board::from_str("4k3/8/4p3/3p4/8/8/8/3QK3 w - - 0 1").unwrap();
        let mv = ChessMove::new(Square::D1, Square::D5, None);
        // Qxd5 exd5: win a pawn, lose the queen.
        assert!(see(&board, mv) < 0.0);
    }

    #[test]
    fn test_quiet_move_to_safe_square_does_not_hang() {
        let board = Board::default();
        let mv = ChessMove::new(Square::G1, Square::F3, None);
        assert!(!hangs_piece(&board, mv));
    }

    #[test]
    fn test_queen_moving_onto_attacked_square_hangs() {
        // Qd1-d5 walks into the e6 pawn's capture.
        let board = Board::from_str("4k3/8/4p3/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let mv = ChessMove::new(Square::D1, Square::D5, None);
        assert!(hangs_piece(&board, mv));
    }

    #[test]
    fn test_piece_attacked_by_a_pawn_hangs_even_when_defended() {
        // Nc3-d5 is met by exd5; the e4 pawn recaptures, but a knight
        // for a pawn is still a win for Black.
        let board = Board::from_str("4k3/8/4p3/8/4P3/2N5/8/4K3 w - - 0 1").unwrap();
        let mv = ChessMove::new(Square::C3, Square::D5, None);
        assert!(hangs_piece(&board, mv));
    }

    #[test]
    fn test_equal_trade_on_defended_square_is_safe() {
        // Nc3-d5 offers a knight trade; Nf6xd5 is answered by exd5, so
        // the exchange is level and the knight does not hang.
        let board = Board::from_str("4k3/8/5n2/8/4P3/2N5/8/4K3 w - - 0 1").unwrap();
        let mv = ChessMove::new(Square::C3, Square::D5, None);
        assert!(!hangs_piece(&board, mv));
    }
}
