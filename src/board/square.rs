/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

/// Represents a single square on an `8x8` checkers board.
///
/// Internally encoded as a row-major index, so `square = row * 8 + col`.
/// Row `0` is the top of the board (Black's own back row) and row `7` is the
/// bottom (Red's own back row). The indices of each square are given as follows:
/// ```text
/// 8|  0  1  2  3  4  5  6  7
/// 7|  8  9 10 11 12 13 14 15
/// 6| 16 17 18 19 20 21 22 23
/// 5| 24 25 26 27 28 29 30 31
/// 4| 32 33 34 35 36 37 38 39
/// 3| 40 41 42 43 44 45 46 47
/// 2| 48 49 50 51 52 53 54 55
/// 1| 56 57 58 59 60 61 62 63
///  +------------------------
///    a  b  c  d  e  f  g  h
/// ```
///
/// Only the dark squares (those where `row + col` is odd) are ever occupied
/// during normal play, since every piece starts on a dark square and diagonal
/// movement preserves square shade.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Number of rows (and columns) on the board.
    pub const SIDE: u8 = 8;

    /// Creates a new [`Square`] from the provided row and column.
    ///
    /// # Panics
    /// If `row` or `col` is out of bounds and debug assertions are enabled.
    ///
    /// # Example
    /// ```
    /// # use hopper::Square;
    /// let sq = Square::new(5, 0);
    /// assert_eq!(sq.row(), 5);
    /// assert_eq!(sq.col(), 0);
    /// ```
    #[inline(always)]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < Self::SIDE && col < Self::SIDE);
        Self(row * Self::SIDE + col)
    }

    /// Creates a new [`Square`] from the provided row and column, if both are in bounds.
    ///
    /// This is the total-function entry point for caller-supplied coordinates:
    /// anything outside the `8x8` domain yields `None` rather than an error.
    ///
    /// # Example
    /// ```
    /// # use hopper::Square;
    /// assert!(Square::try_new(4, 1).is_some());
    /// assert!(Square::try_new(-1, 3).is_none());
    /// assert!(Square::try_new(3, 8).is_none());
    /// ```
    #[inline(always)]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if 0 <= row && row < Self::SIDE as i8 && 0 <= col && col < Self::SIDE as i8 {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Creates a new [`Square`] from a raw board index.
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            bail!("Invalid index for Square: must be in [0,64). Got {index}")
        }
    }

    /// Creates a new [`Square`] from a raw board index, ignoring safety checks.
    ///
    /// # Panics
    /// If `index` is out of bounds and debug assertions are enabled.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT);
        Self(index as u8)
    }

    /// Fetches the row of this [`Square`], in the range `[0,8)`.
    ///
    /// Row `0` is the top of the board.
    #[inline(always)]
    pub const fn row(&self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Fetches the column of this [`Square`], in the range `[0,8)`.
    #[inline(always)]
    pub const fn col(&self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Fetches the raw board index of this [`Square`].
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if this [`Square`] is a dark square.
    ///
    /// Dark squares are the playable ones: the standard layout places every
    /// piece on a dark square, and diagonal movement never leaves them.
    ///
    /// # Example
    /// ```
    /// # use hopper::Square;
    /// assert!(Square::new(5, 0).is_dark());
    /// assert!(!Square::new(4, 4).is_dark());
    /// ```
    #[inline(always)]
    pub const fn is_dark(&self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Offsets this [`Square`] by the provided row and column deltas.
    ///
    /// Returns `None` if the destination falls off the board.
    ///
    /// # Example
    /// ```
    /// # use hopper::Square;
    /// let sq = Square::new(5, 0);
    /// assert_eq!(sq.offset(-1, 1), Some(Square::new(4, 1)));
    /// assert_eq!(sq.offset(-1, -1), None); // off the left edge
    /// ```
    #[inline(always)]
    pub const fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// An iterator over every [`Square`] on the board, in index order.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    /// Parses a [`Square`] from algebraic coordinates, like `a6` or `H1`.
    ///
    /// Rank `8` is row `0`.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();

        let file = chars
            .next()
            .context("Square str cannot be empty")?
            .to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            bail!("Invalid file for Square: must be [a,h]. Got {s:?}");
        }

        let rank = chars
            .next()
            .context("Square str must have a rank digit")?;
        if chars.next().is_some() {
            bail!("Square str must be exactly two characters. Got {s:?}");
        }
        if !('1'..='8').contains(&rank) {
            bail!("Invalid rank for Square: must be [1,8]. Got {s:?}");
        }

        let col = file as u8 - b'a';
        let row = b'8' - rank as u8;
        Ok(Self::new(row, col))
    }
}

impl fmt::Display for Square {
    /// A [`Square`] is displayed in algebraic coordinates: `e4`, `a8`, etc.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            Self::SIDE - self.row()
        )
    }
}

impl fmt::Debug for Square {
    /// Debug formatting includes the raw (row, col) coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({}, {})", self.row(), self.col())
    }
}
