//! Upgrade energy command handlers
//!
//! Computes boosted energy either for a raw base value or for a named
//! avatar from the catalog.

use aewiki::{
    thousands, upgrade::tier_for_level, upgrade_progression, upgraded_energy, AvatarCatalog,
    WikiData,
};
use anyhow::{bail, Result};

use super::output::render_table;

/// Resolve base energy from `--base` or from an avatar name
pub fn resolve_base_energy(
    data: &WikiData,
    base: Option<u64>,
    avatar: Option<&str>,
    world: Option<u32>,
) -> Result<u64> {
    if let Some(base) = base {
        return Ok(base);
    }
    let Some(name) = avatar else {
        bail!("Provide --base or --avatar");
    };

    let catalog = AvatarCatalog::from_data(data);
    let matches = catalog.find(name, world);
    match matches.as_slice() {
        [] => bail!("No avatar named {:?}", name),
        [only] => {
            tracing::debug!(
                avatar = %only.name,
                world = %only.world_name,
                base_energy = only.base_energy,
                "resolved avatar"
            );
            Ok(only.base_energy)
        }
        many => {
            let worlds: Vec<String> = many
                .iter()
                .map(|a| format!("{} ({})", a.world_name, a.world_id))
                .collect();
            bail!(
                "Avatar {:?} exists in several worlds: {}. Use --world to pick one.",
                name,
                worlds.join(", ")
            )
        }
    }
}

/// Handle `upgrade`
pub fn handle(
    data: &WikiData,
    level: Option<u32>,
    base: Option<u64>,
    avatar: Option<&str>,
    world: Option<u32>,
    table: bool,
) -> Result<()> {
    let base_energy = resolve_base_energy(data, base, avatar, world)?;
    let tiers = data.upgrade_tiers();

    if table {
        let steps = upgrade_progression(base_energy, tiers)?;
        let rows: Vec<Vec<String>> = steps
            .iter()
            .map(|s| {
                vec![
                    s.level.to_string(),
                    format!("{}%", s.bonus_percent),
                    thousands(s.energy),
                    s.total_upgrade_cost.map(thousands).unwrap_or_default(),
                ]
            })
            .collect();
        println!("Base energy: {}", thousands(base_energy));
        print!(
            "{}",
            render_table(&["level", "bonus", "energy", "total_cost"], &rows)
        );
        return Ok(());
    }

    let Some(level) = level else {
        bail!("Provide --level or --table");
    };
    let energy = upgraded_energy(base_energy, level, tiers)?;
    match tier_for_level(level, tiers) {
        Some(tier) => println!(
            "Level {}: {} -> {} (+{})",
            level,
            thousands(base_energy),
            thousands(energy),
            tier.energy_bonus.trim()
        ),
        None => {
            println!("Level {}: {} (no upgrade tier at this level)", level, thousands(energy));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aewiki::{Avatar, RankTable, Rarity, UpgradeTier, World};

    fn data() -> WikiData {
        let avatar = |name: &str, base_energy| Avatar {
            name: name.to_string(),
            rarity: Rarity::Rare,
            base_energy,
        };
        WikiData::new(
            vec![
                World {
                    id: 1,
                    name: "One".to_string(),
                    avatars: vec![avatar("Twin", 100), avatar("Solo", 250)],
                },
                World {
                    id: 2,
                    name: "Two".to_string(),
                    avatars: vec![avatar("Twin", 900)],
                },
            ],
            vec![UpgradeTier {
                level: 100,
                energy_bonus: "500%".to_string(),
                total_upgrade_cost: None,
            }],
            RankTable::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_base_energy() -> Result<()> {
        let data = data();
        assert_eq!(resolve_base_energy(&data, Some(42), None, None)?, 42);
        assert_eq!(resolve_base_energy(&data, None, Some("solo"), None)?, 250);
        assert_eq!(resolve_base_energy(&data, None, Some("Twin"), Some(2))?, 900);
        Ok(())
    }

    #[test]
    fn test_resolve_base_energy_errors() {
        let data = data();
        let ambiguous = resolve_base_energy(&data, None, Some("Twin"), None).unwrap_err();
        assert!(ambiguous.to_string().contains("One (1), Two (2)"));
        assert!(resolve_base_energy(&data, None, Some("Nobody"), None).is_err());
        assert!(resolve_base_energy(&data, None, None, None).is_err());
    }

    #[test]
    fn test_handle() -> Result<()> {
        let data = data();
        handle(&data, Some(100), Some(1000), None, None, false)?;
        handle(&data, Some(77), Some(1000), None, None, false)?;
        handle(&data, None, None, Some("Solo"), None, true)?;
        assert!(handle(&data, None, Some(1000), None, None, false).is_err());
        Ok(())
    }
}
