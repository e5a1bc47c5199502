//! Named difficulty presets.

/// Preset givens goals.
///
/// The generator treats these as opaque targets; fewer givens leave more
/// cells for the player to deduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 32 givens.
    Easy,
    /// 28 givens.
    Medium,
    /// 24 givens.
    Hard,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The givens goal this preset stands for.
    #[must_use]
    pub const fn givens(self) -> usize {
        match self {
            Self::Easy => 32,
            Self::Medium => 28,
            Self::Hard => 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_goals() {
        assert_eq!(Difficulty::Easy.givens(), 32);
        assert_eq!(Difficulty::Medium.givens(), 28);
        assert_eq!(Difficulty::Hard.givens(), 24);
    }

    #[test]
    fn test_presets_get_strictly_harder() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].givens() > pair[1].givens());
        }
    }
}
