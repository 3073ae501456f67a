//! WebAssembly bindings for aewiki
//!
//! JavaScript-friendly wrappers over the bundled dataset. Structured results
//! are returned as JSON strings for the web client to `JSON.parse`.

use crate::catalog::WikiData;
use crate::format::compact_number;
use crate::query::{AvatarCatalog, AvatarFilter};
use crate::rarity::Rarity;
use crate::upgrade::upgraded_energy as rust_upgraded_energy;
use wasm_bindgen::prelude::*;

fn bundled() -> Result<&'static WikiData, JsValue> {
    WikiData::bundled().map_err(|e| JsValue::from_str(&format!("Load failed: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Whole, non-negative JS number as energy
fn energy_from_js(n: f64) -> Result<u64, String> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(format!("Energy must be a non-negative integer, got {}", n));
    }
    if n >= u64::MAX as f64 {
        return Err(format!("Energy out of range: {}", n));
    }
    Ok(n as u64)
}

/// Build a filter from optional UI selections
fn build_filter(
    world_id: Option<u32>,
    rarity: Option<String>,
    search: Option<String>,
) -> Result<AvatarFilter, JsValue> {
    let rarity = rarity
        .map(|r| r.parse::<Rarity>())
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(AvatarFilter {
        world_id,
        rarity,
        search,
    })
}

/// All worlds with their avatars, as JSON
#[wasm_bindgen(js_name = worlds)]
pub fn worlds() -> Result<String, JsValue> {
    to_json(&bundled()?.worlds())
}

/// Filtered avatars in catalog order, as JSON
///
/// # Arguments
/// * `world_id` - Restrict to one world
/// * `rarity` - Restrict to one rarity (case-insensitive name)
/// * `search` - Substring of avatar or world name
#[wasm_bindgen(js_name = filterAvatars)]
pub fn filter_avatars(
    world_id: Option<u32>,
    rarity: Option<String>,
    search: Option<String>,
) -> Result<String, JsValue> {
    let catalog = AvatarCatalog::from_data(bundled()?);
    to_json(&catalog.filter(&build_filter(world_id, rarity, search)?))
}

/// Filtered avatars grouped by world, as JSON `[{worldName, avatars}]`
#[wasm_bindgen(js_name = groupByWorld)]
pub fn group_by_world(
    world_id: Option<u32>,
    rarity: Option<String>,
    search: Option<String>,
) -> Result<String, JsValue> {
    let catalog = AvatarCatalog::from_data(bundled()?);
    to_json(&catalog.grouped(&build_filter(world_id, rarity, search)?))
}

/// Energy at an upgrade level using the bundled upgrade tiers
#[wasm_bindgen(js_name = upgradedEnergy)]
pub fn upgraded_energy(base_energy: f64, level: u32) -> Result<f64, JsValue> {
    let base_energy = energy_from_js(base_energy).map_err(|e| JsValue::from_str(&e))?;
    let tiers = bundled()?.upgrade_tiers();
    rust_upgraded_energy(base_energy, level, tiers)
        .map(|v| v as f64)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Background colour for a rarity badge
#[wasm_bindgen(js_name = rarityStyle)]
pub fn rarity_style(rarity: &str) -> Result<String, JsValue> {
    crate::rarity::style_of(rarity)
        .map(|s| s.background.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Gradient classes for a rarity card
#[wasm_bindgen(js_name = rarityGradient)]
pub fn rarity_gradient(rarity: &str) -> Result<String, JsValue> {
    crate::rarity::style_of(rarity)
        .map(|s| s.gradient.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rarity names in rank order
#[wasm_bindgen(js_name = rarities)]
pub fn rarities() -> js_sys::Array {
    Rarity::ALL
        .iter()
        .map(|r| JsValue::from_str(r.name()))
        .collect()
}

/// Compact display form, e.g. `1.23M`
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(n: f64) -> String {
    compact_number(n as u64)
}
