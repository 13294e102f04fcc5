//! Difficulty tiers and their word lengths

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier chosen by the player
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every tier, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Word lengths the built-in lists provide for this tier
    #[must_use]
    pub const fn default_lengths(self) -> &'static [usize] {
        match self {
            Self::Easy => &[3, 4, 5],
            Self::Medium => &[5, 6, 7],
            Self::Hard => &[7, 8, 9],
        }
    }

    /// Lowercase name, also used for word list directories
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Capitalized name for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
