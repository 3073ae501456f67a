//! Rank-up table command handler

use aewiki::WikiData;
use anyhow::Result;

use super::output::{print_rows, render_structured};
use crate::cli::OutputFormat;

/// Handle `ranks`
pub fn handle(data: &WikiData, summary: bool, format: OutputFormat) -> Result<()> {
    let table = data.ranks();

    if summary {
        let Some(summary) = table.summary() else {
            println!("No ranks defined");
            return Ok(());
        };
        if let Some(structured) = render_structured(&summary, format)? {
            println!("{}", structured.trim_end());
            return Ok(());
        }
        println!("Total ranks:           {}", summary.total_ranks);
        println!("Max rank:              {}", summary.max_rank);
        println!("Max energy multiplier: {}", summary.max_energy_multiplier);
        println!("Final requirement:     {}", summary.final_requirement);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = table
        .entries()
        .iter()
        .map(|r| {
            vec![
                r.current_rank.to_string(),
                r.requirement.clone(),
                r.energy_multiplier.clone(),
            ]
        })
        .collect();
    print_rows(
        format,
        &["rank", "requirement", "energy_multiplier"],
        &rows,
        table,
    )
}
