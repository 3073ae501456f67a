//! Wiki dataset loading
//!
//! The dataset is a list of modules keyed by id. Three are read here:
//! - `worlds`: worlds and the avatars they own
//! - `avatar`: upgrade tiers for avatar energy
//! - `rank-up`: the rank progression table
//!
//! A copy of the dataset is embedded at compile time from
//! `share/wiki-data.json` and parsed on first use.

use crate::ranks::{RankEntry, RankTable};
use crate::rarity::Rarity;
use crate::upgrade::UpgradeTier;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUNDLED_JSON: &str = include_str!("../../../share/wiki-data.json");

pub const WORLDS_MODULE: &str = "worlds";
pub const AVATAR_MODULE: &str = "avatar";
pub const RANK_UP_MODULE: &str = "rank-up";

/// Errors that can occur while loading the dataset
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse wiki data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Module not found: {0}")]
    MissingModule(&'static str),

    #[error("World id must be positive (world {0:?})")]
    InvalidWorldId(String),

    #[error("Duplicate world id: {0}")]
    DuplicateWorldId(u32),

    #[error("World {0} has an empty name")]
    EmptyWorldName(u32),

    #[error("World {world:?} has an avatar with an empty name")]
    EmptyAvatarName { world: String },
}

/// A collectible avatar as authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub name: String,
    pub rarity: Rarity,
    pub base_energy: u64,
}

/// A world and the avatars it owns, in authoring order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub avatars: Vec<Avatar>,
}

/// An avatar with its owning world attached. Query view only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAvatar {
    pub name: String,
    pub rarity: Rarity,
    pub base_energy: u64,
    pub world_id: u32,
    pub world_name: String,
}

impl EnrichedAvatar {
    pub fn new(world: &World, avatar: &Avatar) -> Self {
        Self {
            name: avatar.name.clone(),
            rarity: avatar.rarity,
            base_energy: avatar.base_energy,
            world_id: world.id,
            world_name: world.name.clone(),
        }
    }

    /// The avatar without its world
    pub fn avatar(&self) -> Avatar {
        Avatar {
            name: self.name.clone(),
            rarity: self.rarity,
            base_energy: self.base_energy,
        }
    }
}

/// One dataset module. `data` is interpreted per module id.
#[derive(Debug, Clone, Deserialize)]
struct Module {
    id: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RawWikiData {
    modules: Vec<Module>,
}

#[derive(Debug, Default, Deserialize)]
struct WorldsPayload {
    #[serde(default)]
    worlds: Vec<World>,
}

#[derive(Debug, Default, Deserialize)]
struct AvatarPayload {
    #[serde(default)]
    upgrades: Vec<UpgradeTier>,
}

#[derive(Debug, Default, Deserialize)]
struct RankUpPayload {
    #[serde(default)]
    ranks: Vec<RankEntry>,
}

/// Parsed, validated wiki dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiData {
    worlds: Vec<World>,
    upgrade_tiers: Vec<UpgradeTier>,
    ranks: RankTable,
}

static BUNDLED: OnceCell<WikiData> = OnceCell::new();

impl WikiData {
    /// Build a dataset from already-parsed parts
    pub fn new(
        worlds: Vec<World>,
        upgrade_tiers: Vec<UpgradeTier>,
        ranks: RankTable,
    ) -> Result<Self, CatalogError> {
        validate_worlds(&worlds)?;
        Ok(Self {
            worlds,
            upgrade_tiers,
            ranks,
        })
    }

    /// Parse a dataset from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawWikiData = serde_json::from_str(json)?;
        debug!(modules = raw.modules.len(), "parsed wiki data");

        let worlds: WorldsPayload = module_payload(&raw.modules, WORLDS_MODULE)?
            .ok_or(CatalogError::MissingModule(WORLDS_MODULE))?;
        let avatar: AvatarPayload =
            module_payload(&raw.modules, AVATAR_MODULE)?.unwrap_or_default();
        let rank_up: RankUpPayload =
            module_payload(&raw.modules, RANK_UP_MODULE)?.unwrap_or_default();

        debug!(
            worlds = worlds.worlds.len(),
            upgrade_tiers = avatar.upgrades.len(),
            ranks = rank_up.ranks.len(),
            "loaded modules"
        );

        Self::new(
            worlds.worlds,
            avatar.upgrades,
            RankTable::new(rank_up.ranks),
        )
    }

    /// Read and parse a dataset file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading wiki data");
        Self::from_json(&json)
    }

    /// The dataset embedded in this build, parsed once per process
    pub fn bundled() -> Result<&'static WikiData, CatalogError> {
        BUNDLED.get_or_try_init(|| Self::from_json(BUNDLED_JSON))
    }

    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn upgrade_tiers(&self) -> &[UpgradeTier] {
        &self.upgrade_tiers
    }

    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    /// Find a world by id
    pub fn world(&self, id: u32) -> Option<&World> {
        self.worlds.iter().find(|w| w.id == id)
    }
}

/// Deserialize the payload of the first module with `id`, if present
fn module_payload<T: serde::de::DeserializeOwned>(
    modules: &[Module],
    id: &str,
) -> Result<Option<T>, CatalogError> {
    match modules.iter().find(|m| m.id == id) {
        Some(module) => {
            debug!(module = id, "found module");
            Ok(Some(T::deserialize(&module.data)?))
        }
        None => Ok(None),
    }
}

/// Check world ids are positive and unique and names are non-empty
fn validate_worlds(worlds: &[World]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(worlds.len());
    for world in worlds {
        if world.id == 0 {
            return Err(CatalogError::InvalidWorldId(world.name.clone()));
        }
        if !seen.insert(world.id) {
            return Err(CatalogError::DuplicateWorldId(world.id));
        }
        if world.name.trim().is_empty() {
            return Err(CatalogError::EmptyWorldName(world.id));
        }
        if world.avatars.iter().any(|a| a.name.trim().is_empty()) {
            return Err(CatalogError::EmptyAvatarName {
                world: world.name.clone(),
            });
        }
    }
    Ok(())
}
