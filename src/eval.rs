/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Add, AddAssign},
};

use crate::{Board, Color, Move, Square};

/// Bonus for each column, encouraging play toward the center files where a
/// piece covers the most diagonals.
const CENTER_BONUS: [i32; Square::SIDE as usize] = [0, 1, 2, 3, 3, 2, 1, 0];

/// A numerical estimate of a move's quality, used for single-ply ranking.
///
/// Scores compare moves available in one position for one side; they are not
/// a position evaluation and carry no meaning across turns.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Score of a move with nothing going for it.
    pub const ZERO: Self = Self(0);

    /// Weight of each captured piece.
    ///
    /// Deliberately larger than everything else combined: a capture should
    /// outrank any quiet move, and a longer chain any shorter one.
    pub const CAPTURE: Self = Self(120);

    /// Bonus for a move that promotes a man to a king.
    pub const PROMOTION: Self = Self(40);

    /// Bonus per row advanced toward the promotion row.
    ///
    /// Kings stepping away from it pay the same amount instead.
    pub const ADVANCE: Self = Self(2);
}

impl Add for Score {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Scores a candidate [`Move`] for `color` on `board`.
///
/// The heuristic is a weighted sum: captured pieces dominate, then a bonus
/// for promoting, then small positional nudges for advancing toward the
/// promotion row and for ending up near the center columns. No lookahead of
/// any kind; randomized tie-breaking is the selector's job.
///
/// # Example
/// ```
/// # use hopper::{score_move, Board, Color, Move, Square};
/// let board = Board::standard();
/// let quiet = Move::step(Square::new(5, 0), Square::new(4, 1));
/// assert!(score_move(&board, Color::Red, &quiet) > hopper::Score::ZERO);
/// ```
pub fn score_move(board: &Board, color: Color, mv: &Move) -> Score {
    let mut score = Score::ZERO;

    score += Score(Score::CAPTURE.0 * mv.capture_count() as i32);

    let is_man = board.piece_at(mv.from()).is_some_and(|p| !p.is_king());
    if is_man && mv.to().row() == color.promotion_row() {
        score += Score::PROMOTION;
    }

    // Rows advanced toward the promotion row; negative when a king retreats
    let advanced = match color {
        Color::Red => mv.from().row() as i32 - mv.to().row() as i32,
        Color::Black => mv.to().row() as i32 - mv.from().row() as i32,
    };
    score += Score(Score::ADVANCE.0 * advanced);

    score += Score(CENTER_BONUS[mv.to().col() as usize]);

    score
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::CaptureList;

    fn board(setup: &str) -> Board {
        Board::from_setup(setup).unwrap()
    }

    #[test]
    fn test_captures_dominate_quiet_moves() {
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

        let mut captured = CaptureList::new();
        captured.push(Square::new(3, 3));
        let jump = Move::jump(Square::new(4, 4), Square::new(2, 2), captured);
        let quiet = Move::step(Square::new(6, 1), Square::new(5, 2));

        assert!(score_move(&board, Color::Red, &jump) > score_move(&board, Color::Red, &quiet));
    }

    #[test]
    fn test_longer_chains_score_higher() {
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

        assert!(
            score_move(&board, Color::Red, &chains[1]) > score_move(&board, Color::Red, &chains[0])
        );
    }

    #[test]
    fn test_promotion_outranks_plain_advance() {
        let board = board(
            "
            . . . . . . . .
            r . . . . . . .
            . . . . r . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . b . .
            . . . . . . . .
            ",
        );

        // Both moves advance one row toward promotion; only one promotes
        // this turn.
        let promoting = Move::step(Square::new(1, 0), Square::new(0, 1));
        let kept_back = Move::step(Square::new(2, 4), Square::new(1, 5));

        assert!(
            score_move(&board, Color::Red, &promoting)
                > score_move(&board, Color::Red, &kept_back)
        );
    }

    #[test]
    fn test_center_columns_preferred() {
        let board = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . r . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );

        let toward_center = Move::step(Square::new(5, 2), Square::new(4, 3));
        let toward_edge = Move::step(Square::new(5, 2), Square::new(4, 1));

        assert!(
            score_move(&board, Color::Red, &toward_center)
                > score_move(&board, Color::Red, &toward_edge)
        );
    }
}
