//! Bitset of Sudoku digits.

use std::{fmt, iter::FusedIterator};

use crate::Digit;

/// A set of digits 1-9 backed by a 16-bit mask.
///
/// Bits 0-8 represent the digits 1-9. This is the currency of candidate
/// evaluation: [`Grid::candidates`] returns one, and every legality decision
/// in the engine branches on it.
///
/// [`Grid::candidates`]: crate::Grid::candidates
///
/// # Examples
///
/// ```
/// use symdoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::FULL;
/// set.remove(Digit::D5);
/// set.remove(Digit::D7);
///
/// assert_eq!(set.len(), 7);
/// assert!(!set.contains(Digit::D5));
/// assert!(set.contains(Digit::D1));
/// ```
///
/// Sets combine with the usual operators and iterate in ascending order:
///
/// ```
/// use symdoku_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D3, Digit::D1]);
/// let b = DigitSet::from_iter([Digit::D3, Digit::D9]);
///
/// let union: Vec<_> = (a | b).into_iter().collect();
/// assert_eq!(union, [Digit::D1, Digit::D3, Digit::D9]);
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D3]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

const MASK: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digits present in both `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits present in either `self` or `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the digits present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0 & MASK)
    }

    /// Iterates over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(Digit::value))
            .finish()
    }
}

impl std::ops::BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u8 + 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
