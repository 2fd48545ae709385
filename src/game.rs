/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use thiserror::Error;

use crate::{Board, Color, Move, MoveList};

/// The ways [`Game::apply_move`] can reject a request.
///
/// Rejections are routine, expected conditions: they are raised synchronously,
/// leave the game completely untouched, and carry enough context for the
/// caller to report them. Rule refusals like "you must capture" are *not*
/// errors; they surface through the legal-move set itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already been won; no further moves are accepted.
    #[error("the game is already over")]
    GameOver,

    /// A color tried to move on the other color's turn.
    #[error("it is not {attempted}'s turn to move")]
    OutOfTurn {
        /// The color that attempted to move.
        attempted: Color,
    },

    /// The provided move is not in the current legal-move set.
    ///
    /// This covers wrong origin or destination, wrong capture list, and
    /// non-captures attempted while a capture is mandatory.
    #[error("{mv} is not a legal move for {color}")]
    IllegalMove {
        /// The color that attempted to move.
        color: Color,
        /// The rejected move.
        mv: Move,
    },
}

/// The status of a [`Game`]: still being played, or won.
///
/// There are no draws: a side with no pieces *or* no legal moves loses, so
/// every finished game has a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Both sides have pieces and the side to move has at least one legal move.
    InProgress,

    /// The provided color has won.
    Won(Color),
}

/// A game of checkers.
///
/// This is the single authoritative state of a match: the board, whose turn it
/// is, and the winner once there is one. It can only be mutated through
/// [`Game::apply_move`], which validates against the legal-move set before
/// committing, so every reachable [`Game`] upholds the rules.
///
/// The basic methods you're probably looking for are [`Game::new`],
/// [`Game::legal_moves`], and [`Game::apply_move`].
///
/// # Example
/// ```
/// # use hopper::{Color, Game};
/// let mut game = Game::new();
/// assert_eq!(game.side_to_move(), Color::Red);
///
/// let mv = game.legal_moves().into_iter().next().unwrap();
/// game.apply_move(Color::Red, &mv).unwrap();
/// assert_eq!(game.side_to_move(), Color::Black);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    winner: Option<Color>,
}

impl Game {
    /// Creates a new [`Game`] with the standard starting layout, Red to move.
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::Red)
    }

    /// Creates a new [`Game`] from an arbitrary position.
    ///
    /// The winner is evaluated immediately, so a position where `side_to_move`
    /// has no pieces or no legal moves starts out already won by the opponent.
    pub fn with_board(board: Board, side_to_move: Color) -> Self {
        let winner = evaluate_winner(&board, side_to_move);
        Self {
            board,
            side_to_move,
            winner,
        }
    }

    /// Fetches the current [`Board`].
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Fetches the [`Color`] whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Fetches the winning [`Color`], if the game is over.
    #[inline(always)]
    pub const fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns `true` if the game is over.
    #[inline(always)]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Fetches the [`GameStatus`] of this [`Game`].
    #[inline(always)]
    pub const fn status(&self) -> GameStatus {
        match self.winner {
            Some(color) => GameStatus::Won(color),
            None => GameStatus::InProgress,
        }
    }

    /// Enumerates the legal moves for the side to move.
    ///
    /// Read-only; suitable for driving UI highlighting. Returns an empty list
    /// once the game is over. Repeated calls on an unmodified game return
    /// identical lists.
    #[inline(always)]
    pub fn legal_moves(&self) -> MoveList {
        if self.is_over() {
            return MoveList::new();
        }
        self.board.legal_moves(self.side_to_move)
    }

    /// Applies `mv` for `color`, advancing the turn.
    ///
    /// The request is rejected, with no mutation at all, unless the game is in
    /// progress, `color` is the side to move, and `mv` is in the current
    /// legal-move set. An accepted move commits atomically:
    ///
    /// 1. the piece relocates from `mv.from()` to `mv.to()`,
    /// 2. every captured square is cleared,
    /// 3. a man landing on the opponent's back row is promoted,
    /// 4. the opponent loses if they have no pieces or no legal reply,
    /// 5. otherwise the turn passes to them.
    ///
    /// No intermediate board state is ever observable, not even for a
    /// multi-jump chain.
    pub fn apply_move(&mut self, color: Color, mv: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if color != self.side_to_move {
            return Err(MoveError::OutOfTurn { attempted: color });
        }
        if !self.legal_moves().contains(mv) {
            return Err(MoveError::IllegalMove {
                color,
                mv: mv.clone(),
            });
        }

        // Validated; build the successor position on a scratch board and
        // commit it in one assignment at the end.
        let mut board = self.board;

        let Some(mut piece) = board.remove(mv.from()) else {
            // Unreachable for a move drawn from the legal set, but stay total.
            return Err(MoveError::IllegalMove {
                color,
                mv: mv.clone(),
            });
        };

        for &sq in mv.captured() {
            board.remove(sq);
        }

        // Promotion applies on landing, after the whole chain resolves.
        if !piece.is_king() && mv.to().row() == color.promotion_row() {
            piece = piece.promoted();
        }
        board.place(mv.to(), piece);

        let opponent = color.opponent();
        let winner = evaluate_winner(&board, opponent);

        self.board = board;
        self.side_to_move = opponent;
        self.winner = winner;

        log::debug!(
            "{color} played {mv}; {}",
            match winner {
                Some(w) => format!("{w} wins"),
                None => format!("{opponent} to move"),
            }
        );

        Ok(())
    }

    /// Copies `self` and returns a [`Game`] after having applied the provided [`Move`].
    #[inline(always)]
    pub fn with_move_applied(&self, color: Color, mv: &Move) -> Result<Self, MoveError> {
        let mut copied = *self;
        copied.apply_move(color, mv)?;
        Ok(copied)
    }
}

/// Evaluates whether the position is won, given the side about to move.
///
/// A pure predicate: `to_move` loses if it has no pieces left or no legal
/// move; otherwise the game is undecided. A side unable to move loses; there
/// is no stalemate draw.
fn evaluate_winner(board: &Board, to_move: Color) -> Option<Color> {
    if board.count(to_move) == 0 || board.legal_moves(to_move).is_empty() {
        Some(to_move.opponent())
    } else {
        None
    }
}

impl Default for Game {
    /// A "default" game is a freshly set up standard game.
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    /// Displays the board, followed by whose turn it is or who won.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.status() {
            GameStatus::InProgress => write!(f, "{} to move", self.side_to_move),
            GameStatus::Won(color) => write!(f, "{color} wins"),
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
