/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{cmp::Reverse, fmt, str::FromStr};

use anyhow::{bail, Result};
use rand::Rng;

use crate::{score_move, Game, Move};

/// Magnitude of the uniform jitter added to every move's score before ranking.
///
/// Small enough that a capture always outranks a quiet move, large enough to
/// shuffle moves of similar positional value.
const JITTER: i32 = 10;

/// How strong an opponent the AI plays.
///
/// Difficulty only tempers how randomly the AI picks among its ranked moves;
/// it never changes which moves are legal.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Difficulty {
    /// Picks uniformly from every legal move.
    Easy,

    /// Picks uniformly from the better half of the ranking.
    #[default]
    Medium,

    /// Picks the top-ranked move, breaking ties uniformly at random.
    Hard,
}

impl Difficulty {
    /// Number of difficulty variants.
    pub const COUNT: usize = 3;

    /// An array of all difficulties, weakest first.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Easy, Self::Medium, Self::Hard]
    }

    /// How many of `ranked` moves (sorted best-first) this difficulty draws from.
    ///
    /// Never zero for a non-empty ranking.
    #[inline(always)]
    fn slice_len(&self, ranked: &[(Move, i32)]) -> usize {
        match self {
            Self::Easy => ranked.len(),
            Self::Medium => ranked.len().div_ceil(2),
            Self::Hard => ranked
                .iter()
                .take_while(|(_, score)| *score == ranked[0].1)
                .count(),
        }
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => bail!("Invalid str for Difficulty: expected \"easy\", \"medium\", or \"hard\". Got {s:?}"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// A heuristic opponent: "noisy greedy" move selection with no lookahead.
///
/// The opponent owns its random number generator, so tests can inject a seeded
/// one and get fully deterministic selections. Selection is read-only on the
/// game: the caller applies the returned move via
/// [`Game::apply_move`](crate::Game::apply_move).
///
/// # Example
/// ```
/// # use hopper::{AiOpponent, Color, Difficulty, Game};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut game = Game::new();
/// let mut ai = AiOpponent::new(Difficulty::Medium, StdRng::seed_from_u64(7));
///
/// let mv = ai.select_move(&game).unwrap();
/// game.apply_move(Color::Red, &mv).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct AiOpponent<R> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> AiOpponent<R> {
    /// Creates a new [`AiOpponent`] that plays at `difficulty` and draws its
    /// randomness from `rng`.
    #[inline(always)]
    pub const fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    /// Fetches the [`Difficulty`] this opponent plays at.
    #[inline(always)]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Selects a move for the side to move, or `None` if it has none (which
    /// includes a finished game).
    ///
    /// Every legal move is scored by [`score_move`], jittered, and sorted
    /// descending; the result is drawn uniformly at random from the
    /// difficulty-dependent top slice of that ranking. The answer is computed
    /// immediately; any "thinking time" is the caller's presentation concern.
    pub fn select_move(&mut self, game: &Game) -> Option<Move> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return None;
        }

        let side = game.side_to_move();
        let mut ranked: Vec<(Move, i32)> = moves
            .into_iter()
            .map(|mv| {
                let score =
                    score_move(game.board(), side, &mv).0 + self.rng.gen_range(-JITTER..=JITTER);
                (mv, score)
            })
            .collect();
        ranked.sort_by_key(|(_, score)| Reverse(*score));

        let candidates = self.difficulty.slice_len(&ranked);
        let (mv, score) = ranked.swap_remove(self.rng.gen_range(0..candidates));

        log::debug!(
            "{} AI picked {mv} (score {score}) from the top {candidates} of its ranking",
            self.difficulty
        );

        Some(mv)
    }
}

/// Selects a move for the side to move using a fresh thread-local RNG.
///
/// Convenience wrapper around [`AiOpponent`] for callers that don't need
/// deterministic selection.
#[inline(always)]
pub fn select_move(game: &Game, difficulty: Difficulty) -> Option<Move> {
    AiOpponent::new(difficulty, rand::thread_rng()).select_move(game)
}
