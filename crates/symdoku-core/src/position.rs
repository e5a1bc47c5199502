//! Board positions and the central-symmetry mirror relation.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board, `x` and `y` each in 0-8.
///
/// Positions are plain values with a stable hash, so they work as set
/// elements and stack entries. The linear [`index`](Self::index) runs
/// row-major with x fastest, which is also the scan order the solver uses.
///
/// # Examples
///
/// ```
/// use symdoku_core::Position;
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.mirror(), Position::new(6, 8));
/// assert_eq!(pos.mirror().mirror(), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in scan order (row-major, x fastest).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// One representative per mirror pair, plus the self-mirrored center.
    ///
    /// These are exactly the positions with linear index 0-40: for every
    /// mirror pair the member in the upper half of the board. Symmetric
    /// generation draws from this table so each pair is placed once.
    pub const CANONICAL: [Self; 41] = {
        let mut half = [Self { x: 0, y: 0 }; 41];
        let mut i = 0;
        while i < 41 {
            half[i] = Self::ALL[i];
            i += 1;
        }
        half
    };

    /// Creates a position from coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Creates a position from its linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 81, "position index out of range: {index}");
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// The x coordinate (column, 0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// The y coordinate (row, 0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// The linear index in scan order, `y * 9 + x`.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.y) * 9 + usize::from(self.x)
    }

    /// The point reflection of this position through the board center.
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self {
            x: 8 - self.x,
            y: 8 - self.y,
        }
    }

    /// Returns `true` for the single self-mirrored cell, the center (4, 4).
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.x == 4 && self.y == 4
    }

    /// Index of the containing 3×3 box (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
