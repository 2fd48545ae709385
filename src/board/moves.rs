/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::Square;

/// Maximum number of pieces one move can capture.
///
/// A side starts with 12 pieces and never gains any, and a chain cannot jump
/// the same piece twice, so no chain outlasts the opponent's piece count.
pub const MAX_CHAIN_CAPTURES: usize = 12;

/// An ordered list of the squares captured along one jump chain.
pub type CaptureList = arrayvec::ArrayVec<Square, MAX_CHAIN_CAPTURES>;

/// An alias for the list of moves available in a position.
///
/// Capture chains branch, so there is no tight compile-time bound on how many
/// distinct maximal chains a position offers.
pub type MoveList = Vec<Move>;

/// Represents a move made on a checkers board: either a single diagonal step,
/// or a jump chain that captures one or more opponent pieces.
///
/// `captured` holds the jumped squares in the order they were jumped; it is
/// non-empty exactly when the move is a capture. Moves are computed on demand
/// by move generation and carry everything needed to apply them, including the
/// origin square, so a legal-move list needs no side table of piece positions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: CaptureList,
}

impl Move {
    /// Creates a new non-capturing [`Move`]: one diagonal step.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Move, Square};
    /// let mv = Move::step(Square::new(5, 0), Square::new(4, 1));
    /// assert!(!mv.is_capture());
    /// assert_eq!(mv.to_string(), "a3-b4");
    /// ```
    #[inline(always)]
    pub const fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: CaptureList::new_const(),
        }
    }

    /// Creates a new capturing [`Move`] over the provided jumped squares.
    #[inline(always)]
    pub const fn jump(from: Square, to: Square, captured: CaptureList) -> Self {
        Self { from, to, captured }
    }

    /// Fetches the origin [`Square`] of this [`Move`].
    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Fetches the final landing [`Square`] of this [`Move`].
    ///
    /// For a jump chain, this is where the piece comes to rest after the last
    /// hop; intermediate landing squares are not recorded.
    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Fetches the squares captured by this [`Move`], in jump order.
    #[inline(always)]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    /// Returns `true` if this [`Move`] captures at least one piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// The number of pieces this [`Move`] captures.
    #[inline(always)]
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }
}

impl fmt::Display for Move {
    /// A step is displayed as `a3-b4`; a capture as `b6xd4`, regardless of
    /// how many pieces the chain takes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    /// Debug formatting also lists the captured squares, if any.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capture() {
            write!(f, "{self} capturing {:?}", self.captured.as_slice())
        } else {
            write!(f, "{self}")
        }
    }
}
