//! Difficulty presets
//!
//! Each difficulty fixes the code length and the decimal bounds a raw guess
//! must fall within before it is decomposed into digits.

use std::fmt;

/// Guesses allowed per round unless overridden
pub const DEFAULT_GUESS_LIMIT: u32 = 10;

/// Named difficulty preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    /// All presets in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Moderate, Self::Hard];

    /// Map a menu selection to a preset
    ///
    /// Only 1, 2 and 3 are recognized; every other value is `Easy`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_id(3), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_id(99), Difficulty::Easy);
    /// ```
    #[must_use]
    pub const fn from_id(id: i64) -> Self {
        match id {
            2 => Self::Moderate,
            3 => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Menu selection for this preset
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Easy => 1,
            Self::Moderate => 2,
            Self::Hard => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
        }
    }

    /// Code length and guess bounds for this preset
    #[must_use]
    pub const fn config(self) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig {
                length: 4,
                min_range: 1111,
                max_range: 6666,
            },
            Self::Moderate => DifficultyConfig {
                length: 5,
                min_range: 11_111,
                max_range: 66_666,
            },
            Self::Hard => DifficultyConfig {
                length: 6,
                min_range: 111_111,
                max_range: 666_666,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} digits)", self.name(), self.config().length)
    }
}

/// Immutable round shape selected once at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyConfig {
    pub length: usize,
    pub min_range: u32,
    pub max_range: u32,
}

impl DifficultyConfig {
    /// Config for a raw menu selection, falling back to `Easy`
    #[must_use]
    pub const fn select(difficulty_id: i64) -> Self {
        Difficulty::from_id(difficulty_id).config()
    }

    /// Whether a raw guess is inside `min_range..=max_range`
    ///
    /// This is the only gate a guess passes before scoring.
    #[inline]
    #[must_use]
    pub const fn accepts(&self, raw: u32) -> bool {
        raw >= self.min_range && raw <= self.max_range
    }
}
