//! Typed Sudoku digits.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// Cells store `Option<Digit>`, so an empty cell is `None` rather than a
/// sentinel value, and invalid digits cannot be constructed at all.
///
/// # Examples
///
/// ```
/// use symdoku_core::Digit;
///
/// let digit = Digit::new(7).unwrap();
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
///
/// // 0 is not a digit; empty cells are `None` at the grid level.
/// assert_eq!(Digit::new(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a numeric value, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use symdoku_core::Digit;
    ///
    /// assert_eq!(Digit::new(1), Some(Digit::D1));
    /// assert_eq!(Digit::new(9), Some(Digit::D9));
    /// assert_eq!(Digit::new(10), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a value known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// ```should_panic
    /// use symdoku_core::Digit;
    ///
    /// let _ = Digit::from_value(0); // panics
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::new(value) {
            Some(digit) => digit,
            None => panic!("invalid digit value: {value}"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        char::from(b'0' + digit.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_exactly_1_to_9() {
        assert_eq!(Digit::new(0), None);
        for value in 1..=9 {
            assert_eq!(Digit::new(value).map(Digit::value), Some(value));
        }
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(u8::MAX), None);
    }

    #[test]
    fn test_all_is_ascending_and_complete() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(digit.value()), i + 1);
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(format!("{}", Digit::D4), "4");
        assert_eq!(u8::from(Digit::D8), 8);
        assert_eq!(char::from(Digit::D3), '3');
        assert_eq!(Digit::from_value(6), Digit::D6);
    }

    #[test]
    #[should_panic(expected = "invalid digit value: 10")]
    fn test_from_value_out_of_range_panics() {
        let _ = Digit::from_value(10);
    }
}
