//! Command handlers for aewiki CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod avatars;
pub mod configure;
pub mod output;
pub mod ranks;
pub mod rarities;
pub mod upgrade;
pub mod worlds;
