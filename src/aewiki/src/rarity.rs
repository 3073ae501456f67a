//! Rarity tiers and their display ordering
//!
//! Seven fixed tiers, Common (rank 1) through Phantom (rank 7). Rank drives
//! catalog ordering; style drives card colours in the web client.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Errors from rarity lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RarityError {
    #[error("Invalid rarity: {0:?}")]
    InvalidRarity(String),
}

/// Collectible rarity tier
///
/// Variant order matches rank order, so the derived `Ord` sorts Common first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
    Phantom,
}

/// Display style for a rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RarityStyle {
    /// Solid background colour used on badges
    pub background: &'static str,
    /// Gradient utility classes used on avatar cards
    pub gradient: &'static str,
}

impl Rarity {
    /// All rarities in rank order
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
        Rarity::Phantom,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
            Rarity::Phantom => "Phantom",
        }
    }

    /// Sort rank, 1 (Common) through 7 (Phantom)
    pub fn rank(&self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 3,
            Rarity::Epic => 4,
            Rarity::Legendary => 5,
            Rarity::Mythical => 6,
            Rarity::Phantom => 7,
        }
    }

    /// Badge colour and card gradient
    pub fn style(&self) -> RarityStyle {
        let (background, gradient) = match self {
            Rarity::Common => ("#868686", "from-gray-400 to-gray-500"),
            Rarity::Uncommon => ("#00ff00", "from-green-400 to-green-500"),
            Rarity::Rare => ("#27dbff", "from-blue-400 to-blue-500"),
            Rarity::Epic => ("#c800ff", "from-purple-400 to-purple-500"),
            Rarity::Legendary => ("#ffc82d", "from-yellow-400 to-yellow-500"),
            Rarity::Mythical => ("#ff0000", "from-red-400 to-red-500"),
            Rarity::Phantom => ("#450067", "from-pink-400 to-pink-500"),
        };
        RarityStyle {
            background,
            gradient,
        }
    }

    /// Look up a rarity by its rank
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.rank() == rank)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rarity {
    type Err = RarityError;

    /// Case-insensitive match against the canonical names.
    /// Source data is not consistent about casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RarityError::InvalidRarity(s.to_string()))
    }
}

impl TryFrom<String> for Rarity {
    type Error = RarityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rarity> for &'static str {
    fn from(rarity: Rarity) -> Self {
        rarity.name()
    }
}

/// Rank of a rarity given by name
pub fn rank_of(rarity: &str) -> Result<u8, RarityError> {
    rarity.parse::<Rarity>().map(|r| r.rank())
}

/// Style of a rarity given by name
pub fn style_of(rarity: &str) -> Result<RarityStyle, RarityError> {
    rarity.parse::<Rarity>().map(|r| r.style())
}

/// Ascending comparator: Common before Phantom
pub fn compare_ascending(a: Rarity, b: Rarity) -> Ordering {
    a.rank().cmp(&b.rank())
}

/// Stable sort, highest rarity first
pub fn sort_by_rarity_desc<T>(items: &mut [T], rarity: impl Fn(&T) -> Rarity) {
    items.sort_by(|a, b| compare_ascending(rarity(b), rarity(a)));
}
