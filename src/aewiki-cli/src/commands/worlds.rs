//! World listing command handler

use aewiki::{thousands, WikiData, World};
use anyhow::Result;
use serde::Serialize;

use super::output::print_rows;
use crate::cli::OutputFormat;

/// Per-world overview used for the world selector
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorldSummary<'a> {
    pub id: u32,
    pub name: &'a str,
    pub avatar_count: usize,
    pub total_base_energy: u64,
}

pub fn summarize(worlds: &[World]) -> Vec<WorldSummary<'_>> {
    worlds
        .iter()
        .map(|w| WorldSummary {
            id: w.id,
            name: &w.name,
            avatar_count: w.avatars.len(),
            total_base_energy: w
                .avatars
                .iter()
                .fold(0u64, |acc, a| acc.saturating_add(a.base_energy)),
        })
        .collect()
}

/// Handle `worlds`
pub fn handle(data: &WikiData, format: OutputFormat) -> Result<()> {
    let summaries = summarize(data.worlds());
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.to_string(),
                s.avatar_count.to_string(),
                thousands(s.total_base_energy),
            ]
        })
        .collect();
    print_rows(
        format,
        &["id", "name", "avatars", "total_base_energy"],
        &rows,
        &summaries,
    )
}
