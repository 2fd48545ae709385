/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The heuristic opponent: difficulty levels and noisy-greedy move selection.
mod ai;

/// Board representation: squares, pieces, moves, and move generation.
mod board;

/// Heuristic scoring of candidate moves.
mod eval;

/// Turn management, move application, and win detection.
mod game;

pub use ai::*;
pub use board::*;
pub use eval::*;
pub use game::*;
