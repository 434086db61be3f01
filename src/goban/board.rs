//! Board grid, point storage, and the textual SimpleBoard codec.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::{ChainId, Color, Coord},
};

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 19;

/// One cell of the board.
///
/// Chain membership and liberties are stored as plain coordinates, not
/// references: the board owns every point, so a deep copy is an
/// element-wise copy with no fix-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub color: Color,
    /// Chain this point belongs to; `None` until the next recomputation.
    pub chain: Option<ChainId>,
    /// Empty points orthogonally adjacent to this point's chain, sorted;
    /// `None` until the next recomputation.
    pub liberties: Option<Vec<Coord>>,
}

impl Point {
    pub(crate) fn unanalyzed(x: usize, y: usize, color: Color) -> Point {
        Point {
            x,
            y,
            color,
            chain: None,
            liberties: None,
        }
    }

    /// Liberty count of this point's chain, treating unanalyzed as zero.
    pub fn liberty_count(&self) -> usize {
        self.liberties.as_ref().map_or(0, Vec::len)
    }
}

/// A square grid of points indexed `[x][y]` column-major, `(0, 0)` at
/// the visual bottom-left. A `None` cell is an offline hole: it blocks
/// chains and belongs to none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Point>>,
}

impl Board {
    /// Create an all-empty board of the given size.
    pub fn empty(size: usize) -> Result<Board> {
        validate_size(size)?;
        let mut cells = Vec::with_capacity(size * size);
        for x in 0..size {
            for y in 0..size {
                cells.push(Some(Point::unanalyzed(x, y, Color::Empty)));
            }
        }
        Ok(Board { size, cells })
    }

    /// Decode a SimpleBoard: one string per column, character `j` of
    /// string `i` is the cell at `(i, j)`.
    ///
    /// `X` is Black, `O` is White, `#` is an offline hole; any other
    /// character degrades to an empty cell rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not square or its size falls
    /// outside `2..=19`.
    pub fn from_simple(rows: &[String]) -> Result<Board> {
        let size = rows.len();
        validate_size(size)?;
        for (column, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != size {
                return Err(Error::BoardNotSquare {
                    column,
                    got,
                    expected: size,
                });
            }
        }

        let mut cells = Vec::with_capacity(size * size);
        for (x, row) in rows.iter().enumerate() {
            for (y, ch) in row.chars().enumerate() {
                cells.push(match ch {
                    '#' => None,
                    other => Some(Point::unanalyzed(
                        x,
                        y,
                        Color::from_char(other).unwrap_or(Color::Empty),
                    )),
                });
            }
        }
        Ok(Board { size, cells })
    }

    /// Encode the board back into SimpleBoard form. Exact inverse of
    /// [`Board::from_simple`] modulo chain and liberty fields.
    pub fn to_simple(&self) -> Vec<String> {
        (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| match self.point(x, y) {
                        Some(point) => point.color.to_char(),
                        None => '#',
                    })
                    .collect()
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// The point at `(x, y)`, or `None` when out of bounds or offline.
    pub fn point(&self, x: usize, y: usize) -> Option<&Point> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    pub fn point_mut(&mut self, x: usize, y: usize) -> Option<&mut Point> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.index(x, y);
        self.cells[idx].as_mut()
    }

    /// True for an in-bounds offline hole.
    pub fn is_absent(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x, y)].is_none()
    }

    /// All grid coordinates in column-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| (x, y)))
    }

    /// In-bounds orthogonal neighbor coordinates of `(x, y)`.
    pub fn adjacent_coords(&self, x: usize, y: usize) -> impl Iterator<Item = Coord> {
        let size = self.size;
        [(0isize, 1isize), (1, 0), (0, -1), (-1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                (nx < size && ny < size).then_some((nx, ny))
            })
    }

    /// Orthogonal neighbors of `(x, y)` that are online points.
    pub fn neighbor_points(&self, x: usize, y: usize) -> impl Iterator<Item = &Point> + '_ {
        self.adjacent_coords(x, y)
            .filter_map(|(nx, ny)| self.point(nx, ny))
    }

    /// Coordinates of the empty orthogonal neighbors of `(x, y)`.
    pub fn empty_neighbors(&self, x: usize, y: usize) -> Vec<Coord> {
        self.adjacent_coords(x, y)
            .filter(|&(nx, ny)| {
                self.point(nx, ny)
                    .is_some_and(|point| point.color == Color::Empty)
            })
            .collect()
    }

    /// Number of online cells (holes excluded).
    pub fn live_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

fn validate_size(size: usize) -> Result<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(Error::BoardSizeOutOfRange { size })
    }
}

impl fmt::Display for Board {
    /// Render visually: top row first, `(0, 0)` at the bottom-left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size).rev() {
            for x in 0..self.size {
                let ch = match self.point(x, y) {
                    Some(point) => point.color.to_char(),
                    None => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
