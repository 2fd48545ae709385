/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arrayvec::ArrayVec;

use super::{Board, CaptureList, Color, Move, MoveList, Piece, Square};

/// A piece moves along at most four diagonals, so a position yields at most
/// four immediate jumps.
type JumpCandidates = ArrayVec<(Square, Square), 4>;

impl Board {
    /// Enumerates the non-capturing moves available to the piece on `from`:
    /// one diagonal step onto an empty square, along each of the piece's
    /// directions.
    ///
    /// Returns an empty list if `from` is unoccupied. Edge pieces simply have
    /// fewer candidates.
    ///
    /// Note that steps are *candidate* moves: under the mandatory-capture rule
    /// they are only legal when no piece of the same color can capture. Use
    /// [`Board::legal_moves`] for the filtered set.
    pub fn steps_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();

        if let Some(piece) = self.piece_at(from) {
            for &(dr, dc) in piece.directions() {
                if let Some(to) = from.offset(dr, dc) {
                    if self.piece_at(to).is_none() {
                        moves.push(Move::step(from, to));
                    }
                }
            }
        }

        moves
    }

    /// Enumerates the single-hop captures available to the piece on `from`:
    /// one diagonal hop over an adjacent opponent piece onto the empty square
    /// directly beyond it.
    ///
    /// Each entry is a one-capture [`Move`]; chains are assembled by
    /// [`Board::capture_chains_from`].
    pub fn jumps_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();

        if let Some(piece) = self.piece_at(from) {
            for (over, to) in self.jump_candidates(piece, from) {
                let mut captured = CaptureList::new();
                captured.push(over);
                moves.push(Move::jump(from, to, captured));
            }
        }

        moves
    }

    /// Enumerates every maximal capture chain available to the piece on `from`.
    ///
    /// The search is a depth-first recursion over hypothetical boards: each
    /// jump relocates the mover and removes the jumped piece immediately, so it
    /// can neither be re-captured nor block a later hop of the same chain. A
    /// chain is emitted only once it cannot be extended, so no chain in the
    /// result is a prefix of another. Distinct maximal chains of *different*
    /// lengths are all offered; nothing forces the longest (see
    /// [`Board::legal_moves`]).
    ///
    /// The mover keeps its kind for the whole chain: promotion applies only
    /// after the move completes, so a man mid-chain never gains king mobility.
    ///
    /// Termination is guaranteed because every hop removes a piece from the
    /// hypothetical board.
    pub fn capture_chains_from(&self, from: Square) -> MoveList {
        let mut chains = MoveList::new();

        if let Some(piece) = self.piece_at(from) {
            self.extend_chains(piece, from, from, &CaptureList::new(), &mut chains);
        }

        chains
    }

    /// Recursive worker for [`Board::capture_chains_from`].
    ///
    /// `self` is the hypothetical board with all of `captured` already removed
    /// and the mover standing on `from`; `origin` is where the chain began on
    /// the real board.
    fn extend_chains(
        &self,
        piece: Piece,
        origin: Square,
        from: Square,
        captured: &CaptureList,
        chains: &mut MoveList,
    ) {
        let mut extended = false;

        if !captured.is_full() {
            for (over, to) in self.jump_candidates(piece, from) {
                let mut board = *self;
                board.remove(over);
                board.remove(from);
                board.place(to, piece);

                let mut chain = captured.clone();
                chain.push(over);

                extended = true;
                board.extend_chains(piece, origin, to, &chain, chains);
            }
        }

        if !extended && !captured.is_empty() {
            chains.push(Move::jump(origin, from, captured.clone()));
        }
    }

    /// The (jumped, landing) square pairs for one hop of `piece` from `from`.
    fn jump_candidates(&self, piece: Piece, from: Square) -> JumpCandidates {
        let mut candidates = JumpCandidates::new();

        for &(dr, dc) in piece.directions() {
            let Some(over) = from.offset(dr, dc) else {
                continue;
            };
            let Some(to) = from.offset(2 * dr, 2 * dc) else {
                continue;
            };

            let jumped_opponent = self
                .piece_at(over)
                .is_some_and(|p| p.color() == piece.color().opponent());
            if jumped_opponent && self.piece_at(to).is_none() {
                candidates.push((over, to));
            }
        }

        candidates
    }

    /// Returns `true` if any piece of the provided [`Color`] has a capture
    /// available somewhere on the board.
    ///
    /// When this holds, every non-capturing move is illegal for that color
    /// this turn.
    pub fn side_has_capture(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(sq, piece)| !self.jump_candidates(piece, sq).is_empty())
    }

    /// Enumerates the legal moves for the provided [`Color`], applying the
    /// mandatory-capture rule across the color's entire piece set.
    ///
    /// If any owned piece can capture, the legal set is exactly the union of
    /// every owned piece's maximal capture chains; a piece with no capture of
    /// its own cannot move at all that turn. Otherwise the legal set is the
    /// union of every owned piece's simple steps. An empty result means the
    /// color cannot move (which loses the game).
    ///
    /// Each returned [`Move`] carries its own origin square, so the result is
    /// the (piece position, move) pairing the caller needs for highlighting.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color};
    /// let board = Board::standard();
    /// // No captures exist at the start, so the legal set is all steps.
    /// let moves = board.legal_moves(Color::Red);
    /// assert_eq!(moves.len(), 7);
    /// assert!(moves.iter().all(|mv| !mv.is_capture()));
    /// ```
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for (sq, _) in self.pieces(color) {
            moves.extend(self.capture_chains_from(sq));
        }

        if moves.is_empty() {
            for (sq, _) in self.pieces(color) {
                moves.extend(self.steps_from(sq));
            }
        }

        moves
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(setup: &str) -> Board {
        Board::from_setup(setup).unwrap()
    }

    #[test]
    fn test_steps_respect_direction_and_occupancy() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . b . . . . . .
            . . r . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );

        // The red man steps forward only; (4, 1) is occupied, (4, 3) is free
        let steps = board.steps_from(Square::new(5, 2));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].to(), Square::new(4, 3));

        // The black man steps toward row 7; (5, 2) is occupied, (5, 0) is free
        let steps = board.steps_from(Square::new(4, 1));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].to(), Square::new(5, 0));

        // No piece, no steps
        assert!(board.steps_from(Square::new(0, 1)).is_empty());
    }

    #[test]
    fn test_king_steps_all_four_diagonals() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . R . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );

        assert_eq!(board.steps_from(Square::new(4, 3)).len(), 4);
    }

    #[test]
    fn test_jump_requires_opponent_and_empty_landing() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . b . b . .
            . . r . . . r .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );

        // Red at (4, 2) can jump the black man at (3, 3) to (2, 4)
        let jumps = board.jumps_from(Square::new(4, 2));
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].to(), Square::new(2, 4));
        assert_eq!(jumps[0].captured(), &[Square::new(3, 3)]);

        // Red at (4, 6) can jump the black man at (3, 5) to (2, 4)
        let jumps = board.jumps_from(Square::new(4, 6));
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].captured(), &[Square::new(3, 5)]);
    }

    #[test]
    fn test_jump_blocked_by_occupied_landing() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . r . . .
            . . . b . . . .
            . . r . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );

        // Landing square (2, 4) is occupied by a friendly piece
        assert!(board.jumps_from(Square::new(4, 2)).is_empty());
    }

    #[test]
    fn test_men_do_not_jump_backward() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . r . . . . .
            . . . b . . . .
            . . . . . . . .
            ",
        );

        // The black man at (6, 3) is behind the red man at (5, 2)
        assert!(board.jumps_from(Square::new(5, 2)).is_empty());
        // Make it a king and the backward jump appears
        let mut board = board;
        board.place(Square::new(5, 2), Piece::king(Color::Red));
        let jumps = board.jumps_from(Square::new(5, 2));
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].to(), Square::new(7, 4));
    }

    #[test]
    fn test_chain_is_one_move_not_two() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . . . . . . .
            . b . . . . . .
            r . . . . . . .
            . . . . . . . .
            ",
        );

        let chains = board.capture_chains_from(Square::new(6, 0));
        assert_eq!(chains.len(), 1);

        let chain = &chains[0];
        assert_eq!(chain.from(), Square::new(6, 0));
        assert_eq!(chain.to(), Square::new(2, 4));
        assert_eq!(chain.captured(), &[Square::new(5, 1), Square::new(3, 3)]);
    }

    #[test]
    fn test_chains_branch_and_all_maximal_offered() {
        // From (6, 2), jumping left ends after one capture, jumping right
        // leads to a second capture. Both maximal chains are offered.
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . . . . . . .
            . b . b . . . .
            . . r . . . . .
            . . . . . . . .
            ",
        );

        let mut chains = board.capture_chains_from(Square::new(6, 2));
        chains.sort_by_key(Move::capture_count);

        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].captured(), &[Square::new(5, 1)]);
        assert_eq!(chains[0].to(), Square::new(4, 0));
        assert_eq!(
            chains[1].captured(),
            &[Square::new(5, 3), Square::new(3, 3)]
        );
        assert_eq!(chains[1].to(), Square::new(2, 2));
    }

    #[test]
    fn test_removed_piece_cannot_block_later_hop() {
        // A king circles a diamond of black men: the first jumped piece is
        // gone from the hypothetical board, so the fourth hop is open.
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . b . b . . .
            . . . . . . . .
            . . b . b . . .
            . . . R . . . .
            . . . . . . . .
            ",
        );

        let chains = board.capture_chains_from(Square::new(6, 3));
        let longest = chains.iter().map(Move::capture_count).max().unwrap();
        assert_eq!(longest, 4);

        let full_circle = chains
            .iter()
            .find(|mv| mv.capture_count() == 4)
            .unwrap();
        // A four-capture loop lands back where it started
        assert_eq!(full_circle.to(), Square::new(6, 3));
        // No square is captured twice
        let mut seen = full_circle.captured().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_mandatory_capture_filters_whole_piece_set() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            . . . . r . . .
            . . . . . . . .
            . r . . . . . .
            . . . . . . . .
            ",
        );

        // The red man at (6, 1) has ordinary steps, but (4, 4) can capture,
        // so the legal set is exactly that capture.
        let moves = board.legal_moves(Color::Red);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from(), Square::new(4, 4));
        assert_eq!(moves[0].to(), Square::new(2, 2));
        assert_eq!(moves[0].captured(), &[Square::new(3, 3)]);

        // Each side's mandatory-capture probe is independent: Black could
        // also capture here, but that only matters on Black's turn.
        assert!(board.side_has_capture(Color::Red));
        assert!(board.side_has_capture(Color::Black));
    }

    #[test]
    fn test_no_moves_for_blocked_side() {
        // The black man on its own promotion row has no forward square
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . b . . . .
            ",
        );

        assert!(board.legal_moves(Color::Black).is_empty());
    }

    #[test]
    fn test_legal_moves_is_pure() {
        let board = Board::standard();
        assert_eq!(board.legal_moves(Color::Red), board.legal_moves(Color::Red));
        assert_eq!(
            board.legal_moves(Color::Black),
            board.legal_moves(Color::Black)
        );
    }
}
