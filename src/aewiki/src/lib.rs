//! # aewiki
//!
//! Anime Eternal wiki library - avatar catalog queries, rarity ordering, and
//! upgrade math.
//!
//! This library provides functionality to:
//! - Load the bundled wiki dataset (worlds, avatar upgrades, rank-up table)
//! - Flatten, filter, and search avatars across worlds
//! - Group avatars by world, ordered by rarity rank
//! - Compute boosted avatar energy at an upgrade level
//!
//! ## Example
//!
//! ```no_run
//! use aewiki::{AvatarCatalog, AvatarFilter, Rarity, WikiData};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = WikiData::bundled()?;
//! let catalog = AvatarCatalog::from_data(data);
//!
//! let filter = AvatarFilter::new().rarity(Rarity::Legendary).search("sage");
//! for group in &catalog.grouped(&filter) {
//!     println!("{} ({} avatars)", group.world_name, group.avatars.len());
//! }
//!
//! let energy = aewiki::upgraded_energy(1000, 100, data.upgrade_tiers())?;
//! println!("Energy at level 100: {}", energy);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod format;
pub mod query;
pub mod ranks;
pub mod rarity;
pub mod upgrade;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Avatar, CatalogError, EnrichedAvatar, WikiData, World};
#[doc(inline)]
pub use format::{compact_number, thousands};
#[doc(inline)]
pub use query::{
    filter, filter_by_rarity, filter_by_search_term, filter_by_world, flatten, group_by_world,
    sort_by_rarity_rank, AvatarCatalog, AvatarFilter, WorldGroup, WorldGroups,
};
#[doc(inline)]
pub use ranks::{RankEntry, RankSummary, RankTable};
#[doc(inline)]
pub use rarity::{rank_of, style_of, Rarity, RarityError, RarityStyle};
#[doc(inline)]
pub use upgrade::{
    parse_percent, upgrade_progression, upgraded_energy, UpgradeError, UpgradeStep, UpgradeTier,
};
