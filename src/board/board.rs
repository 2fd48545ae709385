/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Index, str::FromStr};

use anyhow::{bail, Context, Result};

use super::{Color, Piece, Square};

/// Number of piece-bearing rows each side starts with.
const SETUP_ROWS: u8 = 3;

/// Represents the checkers board: an `8x8` grid of optionally-occupied squares.
///
/// A [`Board`] is a plain value. Methods that "modify" positions, like
/// [`Board::with_piece_moved`], return a new board and leave the original
/// untouched, which keeps the hypothetical boards explored during capture-chain
/// search invisible to everyone else.
///
/// All queries are total: asking about any square of the `8x8` domain is valid,
/// and coordinates outside it are rejected at [`Square`] construction.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates an empty [`Board`].
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            squares: [None; Square::COUNT],
        }
    }

    /// Creates a [`Board`] with the standard starting layout.
    ///
    /// Each side fills the dark squares of its three nearest rows with men:
    /// Black on rows `0..3` (top), Red on rows `5..8` (bottom), 12 pieces each.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color};
    /// let board = Board::standard();
    /// assert_eq!(board.count(Color::Red), 12);
    /// assert_eq!(board.count(Color::Black), 12);
    /// ```
    pub fn standard() -> Self {
        let mut board = Self::empty();

        for sq in Square::iter().filter(Square::is_dark) {
            if sq.row() < SETUP_ROWS {
                board.place(sq, Piece::man(Color::Black));
            } else if sq.row() >= Square::SIDE - SETUP_ROWS {
                board.place(sq, Piece::man(Color::Red));
            }
        }

        board
    }

    /// Creates a [`Board`] from an 8-line diagram.
    ///
    /// Each line holds one row (top row first) of the characters `.` (empty),
    /// `r`/`b` (men), and `R`/`B` (kings), optionally separated by spaces.
    /// Blank lines are ignored, so diagrams can be written with raw strings.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color, Square};
    /// let board = Board::from_setup("
    ///     . . . . . . . .
    ///     . . . . . . . .
    ///     . . . . . . . .
    ///     . . . b . . . .
    ///     . . . . r . . .
    ///     . . . . . . . .
    ///     . . . . . . . .
    ///     . . . . . . . .
    /// ").unwrap();
    /// assert_eq!(board.count(Color::Red), 1);
    /// assert!(board.piece_at(Square::new(3, 3)).is_some());
    /// ```
    pub fn from_setup(setup: &str) -> Result<Self> {
        let mut board = Self::empty();

        let rows = setup.lines().filter(|line| !line.trim().is_empty());
        let mut row = 0;
        for line in rows {
            if row >= Square::SIDE {
                bail!("Invalid setup: more than {} rows", Square::SIDE);
            }

            let mut col = 0;
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                if col >= Square::SIDE {
                    bail!("Invalid setup: row {row} has more than {} squares", Square::SIDE);
                }
                if c != '.' {
                    let piece = Piece::from_char(c)
                        .with_context(|| format!("Invalid setup at row {row}, col {col}"))?;
                    board.place(Square::new(row, col), piece);
                }
                col += 1;
            }

            if col != Square::SIDE {
                bail!("Invalid setup: row {row} has {col} squares, expected {}", Square::SIDE);
            }
            row += 1;
        }

        if row != Square::SIDE {
            bail!("Invalid setup: found {row} rows, expected {}", Square::SIDE);
        }

        // The capture-chain search stores captured squares in a list sized for
        // the standard layout, so a side may not field more than 12 pieces.
        for color in Color::all() {
            let count = board.count(color);
            if count > super::MAX_CHAIN_CAPTURES {
                bail!(
                    "Invalid setup: {count} {color} pieces exceeds the standard limit of {}",
                    super::MAX_CHAIN_CAPTURES
                );
            }
        }

        Ok(board)
    }

    /// Fetches the piece occupying the provided [`Square`], if there is one.
    #[inline(always)]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Places `piece` on `sq`, replacing whatever occupied it.
    #[inline(always)]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Removes and returns the piece on `sq`, if there is one.
    #[inline(always)]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Copies `self` and returns a [`Board`] with the piece on `from` relocated to `to`.
    ///
    /// This is pure relocation: captures and promotion are layered on top by
    /// the turn controller. Moving from an empty square yields an unchanged copy.
    #[must_use]
    #[inline(always)]
    pub fn with_piece_moved(&self, from: Square, to: Square) -> Self {
        let mut board = *self;
        if let Some(piece) = board.remove(from) {
            board.place(to, piece);
        }
        board
    }

    /// Counts the pieces of the provided [`Color`] on the board.
    #[inline(always)]
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// An iterator over every (square, piece) pair of the provided [`Color`].
    #[inline(always)]
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }
}

impl Default for Board {
    /// A "default" board has the standard starting layout.
    #[inline(always)]
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.index()]
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self> {
        Self::from_setup(s)
    }
}

impl fmt::Display for Board {
    /// A [`Board`] is displayed as a bordered diagram with rank and file labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Square::SIDE {
            write!(f, "{}|", Square::SIDE - row)?;
            for col in 0..Square::SIDE {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, " +{}", "-".repeat(Square::SIDE as usize * 2))?;
        write!(f, "  ")?;
        for col in 0..Square::SIDE {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
