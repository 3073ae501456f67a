//! Rarity tier listing

use aewiki::{flatten, Rarity, WikiData};
use anyhow::Result;

use super::output::render_table;

/// One row per rarity with its avatar count in `data`
pub fn rarity_rows(data: &WikiData) -> Vec<Vec<String>> {
    let avatars = flatten(data.worlds());
    Rarity::ALL
        .iter()
        .map(|rarity| {
            let style = rarity.style();
            let count = avatars.iter().filter(|a| a.rarity == *rarity).count();
            vec![
                rarity.rank().to_string(),
                rarity.name().to_string(),
                style.background.to_string(),
                style.gradient.to_string(),
                count.to_string(),
            ]
        })
        .collect()
}

/// Handle `rarities`
pub fn handle(data: &WikiData) -> Result<()> {
    let rows = rarity_rows(data);
    print!(
        "{}",
        render_table(&["rank", "name", "color", "gradient", "avatars"], &rows)
    );
    Ok(())
}
