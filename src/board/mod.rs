/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The board itself; an 8x8 grid of optionally-occupied squares.
mod board;

/// Legal move generation, including capture chains and the mandatory-capture rule.
mod movegen;

/// Moves, including the ordered list of squares captured along a jump chain.
mod moves;

/// Colors, piece kinds, and pieces.
mod piece;

/// Locations on the board.
mod square;

pub use board::*;
pub use moves::*;
pub use piece::*;
pub use square::*;
