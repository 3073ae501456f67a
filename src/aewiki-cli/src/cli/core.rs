//! Core CLI definitions

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

#[derive(Parser)]
#[command(name = "aewiki")]
#[command(about = "Anime Eternal wiki browser", long_about = None)]
pub struct Cli {
    /// Path to a wiki-data.json file (uses the bundled dataset if not provided)
    #[arg(long, global = true, env = "AEWIKI_DATA")]
    pub data: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List avatars, optionally filtered and grouped by world
    #[command(visible_alias = "a")]
    Avatars {
        /// Only avatars from this world id
        #[arg(short, long)]
        world: Option<u32>,

        /// Only avatars of this rarity (e.g. "Legendary")
        #[arg(short, long)]
        rarity: Option<String>,

        /// Case-insensitive search over avatar and world names
        #[arg(short, long)]
        search: Option<String>,

        /// Group by world, sorted by rarity within each world
        #[arg(short, long)]
        group: bool,

        /// Output format (uses configured default if not provided)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// List worlds and their avatar counts
    #[command(visible_alias = "w")]
    Worlds {
        /// Output format (uses configured default if not provided)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show the rarity tiers in rank order
    Rarities,

    /// Compute avatar energy at an upgrade level
    #[command(visible_alias = "u")]
    Upgrade {
        /// Upgrade level
        #[arg(short, long, required_unless_present = "table")]
        level: Option<u32>,

        /// Base energy to upgrade
        #[arg(short, long, conflicts_with = "avatar", required_unless_present = "avatar")]
        base: Option<u64>,

        /// Avatar name to take base energy from
        #[arg(short, long)]
        avatar: Option<String>,

        /// World id to disambiguate the avatar name
        #[arg(short, long, requires = "avatar")]
        world: Option<u32>,

        /// Print energy at every defined upgrade tier
        #[arg(short, long)]
        table: bool,
    },

    /// Show the rank-up progression table
    #[command(visible_alias = "r")]
    Ranks {
        /// Only show max rank, max multiplier, and final requirement
        #[arg(short, long)]
        summary: bool,

        /// Output format (uses configured default if not provided)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default dataset path
        #[arg(long)]
        data_path: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Remove all configured defaults
        #[arg(long)]
        clear: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
