//! Rank-up progression table
//!
//! Ranks are authored display data: requirement and multiplier stay text
//! exactly as written in the dataset.

use serde::{Deserialize, Serialize};

/// One row of the rank-up table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub current_rank: u32,
    pub requirement: String,
    pub energy_multiplier: String,
}

/// Headline figures for the rank-up page, taken from the final row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSummary {
    pub total_ranks: usize,
    pub max_rank: u32,
    pub max_energy_multiplier: String,
    pub final_requirement: String,
}

/// Rank-up table in authoring order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable {
    entries: Vec<RankEntry>,
}

impl RankTable {
    pub fn new(entries: Vec<RankEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a rank by number
    pub fn rank(&self, current_rank: u32) -> Option<&RankEntry> {
        self.entries.iter().find(|r| r.current_rank == current_rank)
    }

    /// Summary of the last row, `None` for an empty table
    pub fn summary(&self) -> Option<RankSummary> {
        let last = self.entries.last()?;
        Some(RankSummary {
            total_ranks: self.entries.len(),
            max_rank: last.current_rank,
            max_energy_multiplier: last.energy_multiplier.clone(),
            final_requirement: last.requirement.clone(),
        })
    }
}
