//! Avatar upgrade tiers and boosted energy
//!
//! Tiers come from the `avatar` module of the dataset. Each tier pairs a
//! level with a percentage bonus authored as text (`"500%"`). Lookups are by
//! exact level only: a level without a tier leaves energy unchanged.

use serde::{Deserialize, Serialize};

/// Errors from upgrade calculations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpgradeError {
    #[error("Malformed percent value: {0:?}")]
    MalformedPercent(String),
}

/// One row of the avatar upgrade table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeTier {
    pub level: u32,
    /// Bonus as authored, e.g. `"500%"`
    pub energy_bonus: String,
    /// Display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_upgrade_cost: Option<u64>,
}

impl UpgradeTier {
    /// Parsed bonus percentage
    pub fn bonus_percent(&self) -> Result<u64, UpgradeError> {
        parse_percent(&self.energy_bonus)
    }
}

/// Parse `"<integer>%"` into the integer.
///
/// The trailing `%` is required and the remainder must be a non-negative
/// integer; anything else is a data-authoring defect.
pub fn parse_percent(text: &str) -> Result<u64, UpgradeError> {
    let malformed = || UpgradeError::MalformedPercent(text.to_string());
    let digits = text.trim().strip_suffix('%').ok_or_else(malformed)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    digits.parse::<u64>().map_err(|_| malformed())
}

/// Find the tier defined for exactly `level`
pub fn tier_for_level(level: u32, tiers: &[UpgradeTier]) -> Option<&UpgradeTier> {
    tiers.iter().find(|t| t.level == level)
}

/// `floor(base * (1 + percent / 100))` in integer arithmetic, saturating at
/// `u64::MAX`
fn apply_bonus(base_energy: u64, percent: u64) -> u64 {
    u128::from(base_energy)
        .checked_mul(100 + u128::from(percent))
        .and_then(|boosted| u64::try_from(boosted / 100).ok())
        .unwrap_or(u64::MAX)
}

/// Energy of an avatar at `level`.
///
/// Returns `base_energy` unchanged when no tier matches the level exactly.
/// Only the matching tier's bonus text is parsed.
pub fn upgraded_energy(
    base_energy: u64,
    level: u32,
    tiers: &[UpgradeTier],
) -> Result<u64, UpgradeError> {
    match tier_for_level(level, tiers) {
        Some(tier) => Ok(apply_bonus(base_energy, tier.bonus_percent()?)),
        None => Ok(base_energy),
    }
}

/// A computed step of an avatar's upgrade path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeStep {
    pub level: u32,
    pub bonus_percent: u64,
    pub energy: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_upgrade_cost: Option<u64>,
}

/// Energy at every defined tier, ordered by level
pub fn upgrade_progression(
    base_energy: u64,
    tiers: &[UpgradeTier],
) -> Result<Vec<UpgradeStep>, UpgradeError> {
    let mut steps = tiers
        .iter()
        .map(|tier| {
            let bonus_percent = tier.bonus_percent()?;
            Ok(UpgradeStep {
                level: tier.level,
                bonus_percent,
                energy: apply_bonus(base_energy, bonus_percent),
                total_upgrade_cost: tier.total_upgrade_cost,
            })
        })
        .collect::<Result<Vec<_>, UpgradeError>>()?;
    steps.sort_by_key(|s| s.level);
    Ok(steps)
}
