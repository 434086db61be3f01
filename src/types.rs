//! Shared vocabulary types for the decision core.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A board coordinate pair `(x, y)`: `x` is the column, `y` the row,
/// with `(0, 0)` at the lower-left corner.
pub type Coord = (usize, usize);

/// Stone color of a board point.
///
/// `Empty` is a first-class color so that empty regions can be chained
/// exactly like stone groups during recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    Empty,
}

impl Color {
    /// Get the opposing color. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
            Color::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'X' => Some(Color::Black),
            'O' => Some(Color::White),
            '.' => Some(Color::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Empty => "Empty",
        };
        write!(f, "{name}")
    }
}

/// Opponent personality driving the move-priority selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opponent {
    NoAi,
    Netburners,
    SlumSnakes,
    TheBlackHand,
    Tetrads,
    Daedalus,
    Illuminati,
}

impl Opponent {
    pub fn name(self) -> &'static str {
        match self {
            Opponent::NoAi => "No AI",
            Opponent::Netburners => "Netburners",
            Opponent::SlumSnakes => "Slum Snakes",
            Opponent::TheBlackHand => "The Black Hand",
            Opponent::Tetrads => "Tetrads",
            Opponent::Daedalus => "Daedalus",
            Opponent::Illuminati => "Illuminati",
        }
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Opponent {
    type Err = crate::Error;

    /// Parse an opponent name. The redacted endgame name
    /// `"????????????"` is an alias for Illuminati.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "No AI" => Ok(Opponent::NoAi),
            "Netburners" => Ok(Opponent::Netburners),
            "Slum Snakes" => Ok(Opponent::SlumSnakes),
            "The Black Hand" => Ok(Opponent::TheBlackHand),
            "Tetrads" => Ok(Opponent::Tetrads),
            "Daedalus" => Ok(Opponent::Daedalus),
            "Illuminati" | "????????????" => Ok(Opponent::Illuminati),
            other => Err(crate::Error::UnknownOpponent {
                name: other.to_string(),
            }),
        }
    }
}

/// Final decision emitted by the engine for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Play {
    Move { x: usize, y: usize },
    Pass,
    GameOver,
}

/// Classification of a hypothetical stone placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Validity {
    GameOver,
    NotYourTurn,
    PointBroken,
    PointNotEmpty,
    NoSuicide,
    BoardRepeated,
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Validity::GameOver => "gameOver",
            Validity::NotYourTurn => "notYourTurn",
            Validity::PointBroken => "pointBroken",
            Validity::PointNotEmpty => "pointNotEmpty",
            Validity::NoSuicide => "noSuicide",
            Validity::BoardRepeated => "boardRepeated",
            Validity::Valid => "valid",
            Validity::Invalid => "invalid",
        };
        write!(f, "{name}")
    }
}

/// Identifier of a chain: the coordinate of the first member reached by
/// the column-major recomputation scan. Two points belong to the same
/// chain iff they carry the same id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChainId {
    pub x: usize,
    pub y: usize,
}

impl From<Coord> for ChainId {
    fn from((x, y): Coord) -> Self {
        ChainId { x, y }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
