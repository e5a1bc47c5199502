//! Reproducible seeding for puzzle generation.

use std::{fmt, str::FromStr};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed pinning an entire generation run.
///
/// The same seed and givens goal reproduce the same puzzle, so a seed is
/// all that needs to be shared to hand someone a specific puzzle. Seeds
/// render as 64 lowercase hex characters and parse back from that form.
///
/// # Examples
///
/// ```
/// use symdoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("rainy sunday");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from a human-memorable phrase via SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase).into())
    }

    /// The raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The generation RNG this seed stands for.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed(\"{self}\")")
    }
}

/// Error parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {length}")]
    WrongLength {
        /// Number of characters in the input.
        length: usize,
    },
    /// The input contains a character outside `0-9a-fA-F`.
    #[display("invalid character {character:?} in seed")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (chars.next(), chars.next()) else {
                return Err(ParseSeedError::WrongLength {
                    length: s.chars().count(),
                });
            };
            *byte = (hex_digit(hi)? << 4) | hex_digit(lo)?;
        }
        if chars.next().is_some() {
            return Err(ParseSeedError::WrongLength {
                length: s.chars().count(),
            });
        }
        Ok(Self(bytes))
    }
}

fn hex_digit(character: char) -> Result<u8, ParseSeedError> {
    let digit = character
        .to_digit(16)
        .ok_or(ParseSeedError::InvalidCharacter { character })?;
    #[expect(clippy::cast_possible_truncation)]
    let digit = digit as u8;
    Ok(digit)
}
