//! Avatar listing command handlers
//!
//! Filters the catalog and prints either a flat list or world groups.

use aewiki::{compact_number, AvatarCatalog, AvatarFilter, EnrichedAvatar, Rarity, WikiData};
use anyhow::{Context, Result};

use super::output::{print_rows, render_structured};
use crate::cli::OutputFormat;

const HEADERS: &[&str] = &["name", "world", "rarity", "base_energy"];

/// Build filter criteria from command-line options
pub fn build_filter(
    world: Option<u32>,
    rarity: Option<&str>,
    search: Option<String>,
) -> Result<AvatarFilter> {
    let rarity = rarity
        .map(|r| r.parse::<Rarity>())
        .transpose()
        .with_context(|| {
            let names: Vec<&str> = Rarity::ALL.iter().map(|r| r.name()).collect();
            format!("Expected one of: {}", names.join(", "))
        })?;
    Ok(AvatarFilter {
        world_id: world,
        rarity,
        search,
    })
}

/// One table row per avatar. Table output uses compact energy.
pub fn avatar_rows(avatars: &[EnrichedAvatar], compact: bool) -> Vec<Vec<String>> {
    avatars
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.world_name.clone(),
                a.rarity.to_string(),
                if compact {
                    compact_number(a.base_energy)
                } else {
                    a.base_energy.to_string()
                },
            ]
        })
        .collect()
}

/// Handle `avatars`
pub fn handle(
    data: &WikiData,
    filter: &AvatarFilter,
    group: bool,
    format: OutputFormat,
) -> Result<()> {
    let catalog = AvatarCatalog::from_data(data);

    if let Some(id) = filter.world_id {
        if catalog.world(id).is_none() {
            tracing::warn!("No world with id {}", id);
        }
    }

    if group {
        print_grouped(&catalog, filter, format)
    } else {
        print_flat(&catalog, filter, format)
    }
}

fn print_flat(catalog: &AvatarCatalog<'_>, filter: &AvatarFilter, format: OutputFormat) -> Result<()> {
    let avatars = catalog.filter(filter);
    tracing::debug!(matched = avatars.len(), total = catalog.all().len(), "filtered avatars");

    if avatars.is_empty() && format == OutputFormat::Table {
        println!("No avatars found matching your criteria.");
        return Ok(());
    }

    let rows = avatar_rows(&avatars, format == OutputFormat::Table);
    print_rows(format, HEADERS, &rows, &avatars)
}

fn print_grouped(
    catalog: &AvatarCatalog<'_>,
    filter: &AvatarFilter,
    format: OutputFormat,
) -> Result<()> {
    let groups = catalog.grouped(filter);
    tracing::debug!(worlds = groups.len(), avatars = groups.avatar_count(), "grouped avatars");

    if let Some(structured) = render_structured(&groups, format)? {
        println!("{}", structured.trim_end());
        return Ok(());
    }

    match format {
        OutputFormat::Csv => {
            // Bucket order is preserved by emitting buckets back to back
            let avatars: Vec<EnrichedAvatar> = groups
                .iter()
                .flat_map(|g| g.avatars.iter().cloned())
                .collect();
            let rows = avatar_rows(&avatars, false);
            print_rows(format, HEADERS, &rows, &avatars)
        }
        _ => {
            if groups.is_empty() {
                println!("No worlds found matching your criteria.");
                return Ok(());
            }
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let count = group.avatars.len();
                println!(
                    "== {} ({} avatar{})",
                    group.world_name,
                    count,
                    if count == 1 { "" } else { "s" }
                );
                let rows = avatar_rows(&group.avatars, true);
                print_rows(format, HEADERS, &rows, &group.avatars)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() -> Result<()> {
        let filter = build_filter(Some(3), Some("mythical"), Some("king".to_string()))?;
        assert_eq!(filter.world_id, Some(3));
        assert_eq!(filter.rarity, Some(Rarity::Mythical));
        assert_eq!(filter.search.as_deref(), Some("king"));

        let empty = build_filter(None, None, None)?;
        assert!(empty.is_empty());
        Ok(())
    }

    #[test]
    fn test_build_filter_rejects_unknown_rarity() {
        let err = build_filter(None, Some("all"), None).unwrap_err();
        assert!(err.to_string().contains("Expected one of: Common"));
        assert!(format!("{:#}", err).contains("Invalid rarity"));
    }

    #[test]
    fn test_avatar_rows() {
        let avatar = EnrichedAvatar {
            name: "Soul King".to_string(),
            rarity: Rarity::Phantom,
            base_energy: 420_000,
            world_id: 3,
            world_name: "Soul Society".to_string(),
        };
        let avatars = [avatar];
        assert_eq!(
            avatar_rows(&avatars, true),
            vec![vec!["Soul King", "Soul Society", "Phantom", "420.00K"]]
        );
        assert_eq!(avatar_rows(&avatars, false)[0][3], "420000");
    }

    #[test]
    fn test_handle_bundled() -> Result<()> {
        let data = WikiData::bundled()?;
        let filter = build_filter(Some(1), None, None)?;
        handle(data, &filter, true, OutputFormat::Json)?;
        handle(data, &filter, false, OutputFormat::Csv)?;
        handle(data, &AvatarFilter::default().search("no such avatar"), false, OutputFormat::Table)?;
        Ok(())
    }
}
