/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Not, str::FromStr};

use anyhow::{bail, Result};

/// Represents the color of a player or piece.
///
/// Red sits at the bottom of the board, advances toward row `0`, and moves
/// first in a new game.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with Red.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Red, Self::Black]
    }

    /// Returns `true` if this [`Color`] is Red.
    #[inline(always)]
    pub const fn is_red(&self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` if this [`Color`] is Black.
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        matches!(self, Self::Black)
    }

    /// Fetches the opposing [`Color`].
    ///
    /// # Example
    /// ```
    /// # use hopper::Color;
    /// assert_eq!(Color::Red.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::Red);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// The row delta of this color's forward direction.
    ///
    /// Red advances up the board (toward row `0`), Black down (toward row `7`).
    #[inline(always)]
    pub const fn forward(&self) -> i8 {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }

    /// The row on which this color's men promote: the opponent's back row.
    ///
    /// # Example
    /// ```
    /// # use hopper::Color;
    /// assert_eq!(Color::Red.promotion_row(), 0);
    /// assert_eq!(Color::Black.promotion_row(), 7);
    /// ```
    #[inline(always)]
    pub const fn promotion_row(&self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Black => 7,
        }
    }

    /// Fetches a unique index for this [`Color`], useful for indexing arrays.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Fetches a human-readable name for this [`Color`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Black => "Black",
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Self::Red),
            "b" | "black" => Ok(Self::Black),
            _ => bail!("Invalid str for Color: expected \"red\" or \"black\". Got {s:?}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents the rank of a piece: an uncrowned man or a crowned king.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum PieceKind {
    /// A regular (uncrowned) piece; moves and captures along its color's two forward diagonals.
    #[default]
    Man,

    /// A crowned piece; moves and captures along all four diagonals.
    King,
}

impl PieceKind {
    /// Returns `true` if this [`PieceKind`] is a King.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self, Self::King)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Man => write!(f, "Man"),
            Self::King => write!(f, "King"),
        }
    }
}

/// The two forward diagonals for a Red man.
const RED_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// The two forward diagonals for a Black man.
const BLACK_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// All four diagonals, for kings.
const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Represents a piece on the board: a [`Color`] paired with a [`PieceKind`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// Creates a new [`Piece`] of the provided color and kind.
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Creates a new man of the provided color.
    #[inline(always)]
    pub const fn man(color: Color) -> Self {
        Self::new(color, PieceKind::Man)
    }

    /// Creates a new king of the provided color.
    #[inline(always)]
    pub const fn king(color: Color) -> Self {
        Self::new(color, PieceKind::King)
    }

    /// Fetches the [`Color`] of this [`Piece`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Fetches the [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns `true` if this [`Piece`] is a king.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        self.kind.is_king()
    }

    /// Fetches the king this [`Piece`] becomes on promotion.
    ///
    /// Promoting a king yields the same king.
    #[inline(always)]
    pub const fn promoted(self) -> Self {
        Self::king(self.color)
    }

    /// The diagonal directions along which this [`Piece`] may move and capture.
    ///
    /// Men get their color's two forward diagonals; kings get all four.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Color, Piece};
    /// assert_eq!(Piece::man(Color::Red).directions().len(), 2);
    /// assert_eq!(Piece::king(Color::Black).directions().len(), 4);
    /// ```
    #[inline(always)]
    pub const fn directions(&self) -> &'static [(i8, i8)] {
        match (self.color, self.kind) {
            (_, PieceKind::King) => &KING_DIRECTIONS,
            (Color::Red, PieceKind::Man) => &RED_MAN_DIRECTIONS,
            (Color::Black, PieceKind::Man) => &BLACK_MAN_DIRECTIONS,
        }
    }

    /// Fetches the character used for this [`Piece`] in board diagrams.
    ///
    /// Men are lowercase (`r` / `b`) and kings uppercase (`R` / `B`).
    #[inline(always)]
    pub const fn to_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }

    /// Creates a new [`Piece`] from a board-diagram character.
    #[inline(always)]
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'r' => Ok(Self::man(Color::Red)),
            'R' => Ok(Self::king(Color::Red)),
            'b' => Ok(Self::man(Color::Black)),
            'B' => Ok(Self::king(Color::Black)),
            _ => bail!("Invalid char for Piece: must be one of [r, R, b, B]. Got {c:?}"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
