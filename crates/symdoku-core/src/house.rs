//! Rows, columns, and boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Each house holds nine cells that must contain pairwise distinct digits.
/// Houses drive [`Grid::is_consistent`](crate::Grid::is_consistent) and the
/// validity assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into a [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => {
                Position::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
            }
        }
    }

    /// Iterates over the nine positions of this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position(i))
    }
}
