//! The tape of cells.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
};
use std::{
    fmt::{self, Display, Formatter},
    iter,
    str::FromStr,
};

/// A growable, ordered line of cells.
///
/// Logical coordinate `c` lives at array index `c + zero_offset`.
/// Prepending cells shifts `zero_offset` instead of renumbering, so
/// coordinates are stable as the automaton grows to the left.
///
/// The padding invariant: every active cell has at least `width - 1`
/// inactive cells on both ends of the array, where `width` is the rule
/// window width. [`Tape::pad`] restores the invariant; the world calls it
/// after parsing and after every step, so every window a step needs is
/// always addressable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<State>,
    zero_offset: i64,
}

impl Tape {
    /// Creates a tape from the cells of the initial pattern,
    /// with coordinate `0` at array index `0`.
    pub fn new(cells: Vec<State>) -> Self {
        Self {
            cells,
            zero_offset: 0,
        }
    }

    /// Creates a tape whose coordinate `0` is at array index `zero_offset`.
    pub(crate) fn with_offset(cells: Vec<State>, zero_offset: i64) -> Self {
        Self { cells, zero_offset }
    }

    /// Number of cells in the array, padding included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the tape has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The array index of logical coordinate `0`.
    pub const fn zero_offset(&self) -> i64 {
        self.zero_offset
    }

    /// The state of the cell at logical coordinate `coord`.
    ///
    /// Cells outside the array are inactive.
    pub fn get(&self, coord: Coord) -> State {
        usize::try_from(coord + self.zero_offset)
            .ok()
            .and_then(|i| self.cells.get(i))
            .copied()
            .unwrap_or(DEAD)
    }

    /// The lowest and highest logical coordinates of active cells,
    /// or `None` if every cell is inactive.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let lo = self.cells.iter().position(|&s| s == ALIVE)?;
        let hi = self.cells.iter().rposition(|&s| s == ALIVE)?;
        Some((lo as i64 - self.zero_offset, hi as i64 - self.zero_offset))
    }

    /// Restores the padding invariant for rule window width `width`,
    /// prepending and appending inactive cells as needed.
    ///
    /// Prepending shifts `zero_offset` by the same amount, so logical
    /// coordinates are unaffected. No-op if the invariant already holds,
    /// or if there are no active cells.
    pub fn pad(&mut self, width: usize) {
        let Some((lo, hi)) = self.bounds() else {
            return;
        };
        let lo = (lo + self.zero_offset) as usize;
        let hi = (hi + self.zero_offset) as usize;
        let head = (width - 1).saturating_sub(lo);
        let tail = (hi + width).saturating_sub(self.cells.len());
        if head + tail == 0 {
            return;
        }
        let mut cells = Vec::with_capacity(self.cells.len() + head + tail);
        cells.extend(iter::repeat(DEAD).take(head));
        cells.extend_from_slice(&self.cells);
        cells.extend(iter::repeat(DEAD).take(tail));
        self.cells = cells;
        self.zero_offset += head as i64;
    }

    /// The `width` contiguous cells whose result cell is at array index `i`.
    ///
    /// Only defined for `i` in [`Self::window_range`].
    pub(crate) fn window(&self, i: usize, width: usize) -> &[State] {
        let start = i - width / 2;
        &self.cells[start..start + width]
    }

    /// The array indices where a window of the given width is addressable.
    pub(crate) fn window_range(&self, width: usize) -> std::ops::Range<usize> {
        width / 2..self.cells.len().saturating_sub(width / 2 + 1)
    }

    /// The sum of the logical coordinates of all active cells.
    pub fn coordinate_sum(&self) -> i64 {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == ALIVE)
            .map(|(i, _)| i as i64 - self.zero_offset)
            .sum()
    }
}

/// Parses a pattern string, where `#` is active and `.` is inactive.
impl FromStr for Tape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .map(|c| match c {
                '#' => Ok(ALIVE),
                '.' => Ok(DEAD),
                _ => Err(Error::UnknownCellChar(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if cells.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self::new(cells))
    }
}

/// Displays the tape as a pattern string, padding included.
impl Display for Tape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            f.write_str(if cell == ALIVE { "#" } else { "." })?;
        }
        Ok(())
    }
}
