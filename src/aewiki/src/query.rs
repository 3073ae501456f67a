//! Avatar catalog queries
//!
//! Every avatar page reads the catalog through these functions: flatten the
//! worlds, narrow by world / rarity / search term, then bucket by world with
//! members ordered Common first. Inputs are never mutated; each call returns
//! fresh collections.

use crate::catalog::{EnrichedAvatar, WikiData, World};
use crate::rarity::Rarity;
use serde::Serialize;

/// Optional filter criteria, combined with AND.
///
/// `None` means no constraint on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarFilter {
    pub world_id: Option<u32>,
    pub rarity: Option<Rarity>,
    pub search: Option<String>,
}

impl AvatarFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(mut self, world_id: u32) -> Self {
        self.world_id = Some(world_id);
        self
    }

    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.world_id.is_none() && self.rarity.is_none() && search_needle(&self.search).is_none()
    }

    /// Whether a single avatar passes every present criterion
    pub fn matches(&self, avatar: &EnrichedAvatar) -> bool {
        self.matches_with(avatar, search_needle(&self.search).as_deref())
    }

    fn matches_with(&self, avatar: &EnrichedAvatar, needle: Option<&str>) -> bool {
        self.world_id.is_none_or(|id| avatar.world_id == id)
            && self.rarity.is_none_or(|r| avatar.rarity == r)
            && needle.is_none_or(|n| matches_search(avatar, n))
    }
}

/// Lowercased search term, `None` for absent or blank terms.
/// Non-blank terms are matched as given, surrounding whitespace included.
fn search_needle(term: &Option<String>) -> Option<String> {
    term.as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(str::to_lowercase)
}

fn matches_search(avatar: &EnrichedAvatar, needle: &str) -> bool {
    avatar.name.to_lowercase().contains(needle) || avatar.world_name.to_lowercase().contains(needle)
}

/// Every avatar with its world attached, worlds in input order then avatars
/// in input order
pub fn flatten(worlds: &[World]) -> Vec<EnrichedAvatar> {
    worlds
        .iter()
        .flat_map(|world| {
            world
                .avatars
                .iter()
                .map(move |avatar| EnrichedAvatar::new(world, avatar))
        })
        .collect()
}

/// Avatars from one world, or everything when `world_id` is `None`
pub fn filter_by_world(all: &[EnrichedAvatar], world_id: Option<u32>) -> Vec<EnrichedAvatar> {
    filter(
        all,
        &AvatarFilter {
            world_id,
            ..AvatarFilter::default()
        },
    )
}

/// Avatars of one rarity, or everything when `rarity` is `None`
pub fn filter_by_rarity(all: &[EnrichedAvatar], rarity: Option<Rarity>) -> Vec<EnrichedAvatar> {
    filter(
        all,
        &AvatarFilter {
            rarity,
            ..AvatarFilter::default()
        },
    )
}

/// Case-insensitive substring search over avatar and world names.
/// Blank terms match everything.
pub fn filter_by_search_term(all: &[EnrichedAvatar], term: Option<&str>) -> Vec<EnrichedAvatar> {
    filter(
        all,
        &AvatarFilter {
            search: term.map(str::to_string),
            ..AvatarFilter::default()
        },
    )
}

/// Stable filter: keeps input order
pub fn filter(all: &[EnrichedAvatar], criteria: &AvatarFilter) -> Vec<EnrichedAvatar> {
    let needle = search_needle(&criteria.search);
    all.iter()
        .filter(|a| criteria.matches_with(a, needle.as_deref()))
        .cloned()
        .collect()
}

/// Stable sort, Common first. Equal rarities keep their relative order.
pub fn sort_by_rarity_rank(items: &mut [EnrichedAvatar]) {
    items.sort_by_key(|a| a.rarity.rank());
}

/// Avatars of one world, sorted by rarity rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldGroup {
    pub world_name: String,
    pub avatars: Vec<EnrichedAvatar>,
}

/// World name → avatars, iterating in first-seen world order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorldGroups {
    groups: Vec<WorldGroup>,
}

impl WorldGroups {
    pub fn get(&self, world_name: &str) -> Option<&[EnrichedAvatar]> {
        self.groups
            .iter()
            .find(|g| g.world_name == world_name)
            .map(|g| g.avatars.as_slice())
    }

    pub fn world_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.world_name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorldGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total avatars across all buckets
    pub fn avatar_count(&self) -> usize {
        self.groups.iter().map(|g| g.avatars.len()).sum()
    }
}

impl<'a> IntoIterator for &'a WorldGroups {
    type Item = &'a WorldGroup;
    type IntoIter = std::slice::Iter<'a, WorldGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Bucket by world name, each bucket sorted Common first
pub fn group_by_world(items: &[EnrichedAvatar]) -> WorldGroups {
    let mut groups: Vec<WorldGroup> = Vec::new();
    for avatar in items {
        match groups.iter_mut().find(|g| g.world_name == avatar.world_name) {
            Some(group) => group.avatars.push(avatar.clone()),
            None => groups.push(WorldGroup {
                world_name: avatar.world_name.clone(),
                avatars: vec![avatar.clone()],
            }),
        }
    }
    for group in &mut groups {
        sort_by_rarity_rank(&mut group.avatars);
    }
    WorldGroups { groups }
}

/// Read-only query service over one dataset
#[derive(Debug, Clone)]
pub struct AvatarCatalog<'a> {
    worlds: &'a [World],
    all: Vec<EnrichedAvatar>,
}

impl<'a> AvatarCatalog<'a> {
    pub fn new(worlds: &'a [World]) -> Self {
        Self {
            worlds,
            all: flatten(worlds),
        }
    }

    pub fn from_data(data: &'a WikiData) -> Self {
        Self::new(data.worlds())
    }

    pub fn worlds(&self) -> &'a [World] {
        self.worlds
    }

    pub fn world(&self, id: u32) -> Option<&'a World> {
        self.worlds.iter().find(|w| w.id == id)
    }

    /// Every avatar in flatten order
    pub fn all(&self) -> &[EnrichedAvatar] {
        &self.all
    }

    pub fn filter(&self, criteria: &AvatarFilter) -> Vec<EnrichedAvatar> {
        filter(&self.all, criteria)
    }

    /// Filter, then group by world
    pub fn grouped(&self, criteria: &AvatarFilter) -> WorldGroups {
        group_by_world(&self.filter(criteria))
    }

    /// Find an avatar by name, case-insensitive, optionally within one world
    pub fn find(&self, name: &str, world_id: Option<u32>) -> Vec<&EnrichedAvatar> {
        let name = name.trim();
        self.all
            .iter()
            .filter(|a| world_id.is_none_or(|id| a.world_id == id))
            .filter(|a| a.name.eq_ignore_ascii_case(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Avatar;
    use std::collections::HashSet;

    fn avatar(name: &str, rarity: Rarity, base_energy: u64) -> Avatar {
        Avatar {
            name: name.to_string(),
            rarity,
            base_energy,
        }
    }

    fn sample_worlds() -> Vec<World> {
        vec![
            World {
                id: 1,
                name: "Dragon Town".to_string(),
                avatars: vec![
                    avatar("Dragon Slayer", Rarity::Legendary, 5000),
                    avatar("Villager", Rarity::Common, 10),
                    avatar("Guard", Rarity::Rare, 200),
                    avatar("Elder", Rarity::Common, 40),
                ],
            },
            World {
                id: 2,
                name: "Ninja Village".to_string(),
                avatars: vec![
                    avatar("Shadow", Rarity::Phantom, 90000),
                    avatar("Genin", Rarity::Uncommon, 50),
                ],
            },
            World {
                id: 3,
                name: "Empty Plains".to_string(),
                avatars: vec![],
            },
        ]
    }

    fn names(items: &[EnrichedAvatar]) -> Vec<&str> {
        items.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_flatten_preserves_order_and_fields() {
        let worlds = sample_worlds();
        let flat = flatten(&worlds);
        assert_eq!(
            names(&flat),
            vec!["Dragon Slayer", "Villager", "Guard", "Elder", "Shadow", "Genin"]
        );
        for world in &worlds {
            for a in &world.avatars {
                let hits: Vec<_> = flat
                    .iter()
                    .filter(|e| e.world_id == world.id && e.name == a.name)
                    .collect();
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].world_name, world.name);
                assert_eq!(&hits[0].avatar(), a);
            }
        }
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_filter_without_criteria_is_identity() {
        let all = flatten(&sample_worlds());
        assert_eq!(filter(&all, &AvatarFilter::new()), all);
        assert!(AvatarFilter::new().is_empty());
        assert!(AvatarFilter::new().search("   ").is_empty());
    }

    #[test]
    fn test_filter_by_world() {
        let all = flatten(&sample_worlds());
        let ninja = filter_by_world(&all, Some(2));
        assert_eq!(names(&ninja), vec!["Shadow", "Genin"]);
        assert!(ninja.iter().all(|a| a.world_id == 2));
        assert!(filter_by_world(&all, Some(99)).is_empty());
        assert!(filter_by_world(&all, Some(3)).is_empty());
        assert_eq!(filter_by_world(&all, None), all);
    }

    #[test]
    fn test_filter_by_rarity() {
        let all = flatten(&sample_worlds());
        let common = filter_by_rarity(&all, Some(Rarity::Common));
        assert_eq!(names(&common), vec!["Villager", "Elder"]);
        assert!(filter_by_rarity(&all, Some(Rarity::Mythical)).is_empty());
        assert_eq!(filter_by_rarity(&all, None), all);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = flatten(&sample_worlds());
        assert_eq!(
            names(&filter_by_search_term(&all, Some("drag"))),
            vec!["Dragon Slayer", "Villager", "Guard", "Elder"]
        );
        assert_eq!(names(&filter_by_search_term(&all, Some("SLAYER"))), vec!["Dragon Slayer"]);
        // World name matches pull in the whole world
        assert_eq!(
            names(&filter_by_search_term(&all, Some("ninja"))),
            vec!["Shadow", "Genin"]
        );
    }

    #[test]
    fn test_blank_search_is_no_constraint() {
        let all = flatten(&sample_worlds());
        assert_eq!(filter_by_search_term(&all, Some("")), all);
        assert_eq!(filter_by_search_term(&all, Some(" \t ")), all);
        assert_eq!(filter_by_search_term(&all, None), all);
    }

    #[test]
    fn test_padded_search_is_not_trimmed() {
        let all = flatten(&sample_worlds());
        assert!(filter_by_search_term(&all, Some("slayer ")).is_empty());
        assert_eq!(
            names(&filter_by_search_term(&all, Some(" slayer"))),
            vec!["Dragon Slayer"]
        );
        let criteria = AvatarFilter::new().search("slayer ");
        assert!(!all.iter().any(|a| criteria.matches(a)));
    }

    #[test]
    fn test_combined_filter_equals_sequential() {
        let all = flatten(&sample_worlds());
        let criteria = AvatarFilter::new()
            .world(1)
            .rarity(Rarity::Common)
            .search("e");
        let combined = filter(&all, &criteria);

        let sequential = filter_by_search_term(
            &filter_by_rarity(&filter_by_world(&all, Some(1)), Some(Rarity::Common)),
            Some("e"),
        );
        let reversed = filter_by_world(
            &filter_by_rarity(&filter_by_search_term(&all, Some("e")), Some(Rarity::Common)),
            Some(1),
        );
        assert_eq!(combined, sequential);
        assert_eq!(combined, reversed);
        assert_eq!(names(&combined), vec!["Villager", "Elder"]);
        assert!(combined.iter().all(|a| criteria.matches(a)));
    }

    #[test]
    fn test_filter_is_deterministic() {
        let all = flatten(&sample_worlds());
        let criteria = AvatarFilter::new().search("a");
        let first = filter(&all, &criteria);
        let second = filter(&all, &criteria);
        assert_eq!(first, second);
        assert_eq!(all, flatten(&sample_worlds()));
    }

    #[test]
    fn test_group_by_world_sorts_by_rank() {
        let all = flatten(&sample_worlds());
        let groups = group_by_world(&all);
        assert_eq!(
            groups.world_names().collect::<Vec<_>>(),
            vec!["Dragon Town", "Ninja Village"]
        );
        let dragon = groups.get("Dragon Town").unwrap();
        // Villager and Elder tie on Common and keep input order
        assert_eq!(names(dragon), vec!["Villager", "Elder", "Guard", "Dragon Slayer"]);
        assert_eq!(names(groups.get("Ninja Village").unwrap()), vec!["Genin", "Shadow"]);
        assert!(groups.get("Empty Plains").is_none());
    }

    #[test]
    fn test_group_by_world_partitions_input() {
        let all = flatten(&sample_worlds());
        let groups = group_by_world(&all);
        assert_eq!(groups.avatar_count(), all.len());

        let input: HashSet<(u32, &str)> = all.iter().map(|a| (a.world_id, a.name.as_str())).collect();
        let output: HashSet<(u32, &str)> = groups
            .iter()
            .flat_map(|g| g.avatars.iter())
            .map(|a| (a.world_id, a.name.as_str()))
            .collect();
        assert_eq!(input, output);

        for group in &groups {
            let ranks: Vec<u8> = group.avatars.iter().map(|a| a.rarity.rank()).collect();
            assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
            assert!(group.avatars.iter().all(|a| a.world_name == group.world_name));
        }
    }

    #[test]
    fn test_group_by_world_empty() {
        let groups = group_by_world(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }

    #[test]
    fn test_catalog_service() {
        let worlds = sample_worlds();
        let catalog = AvatarCatalog::new(&worlds);
        assert_eq!(catalog.all().len(), 6);
        assert_eq!(catalog.world(2).map(|w| w.name.as_str()), Some("Ninja Village"));

        let grouped = catalog.grouped(&AvatarFilter::new().rarity(Rarity::Common));
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped.avatar_count(), 2);

        let found = catalog.find("dragon slayer", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].base_energy, 5000);
        assert!(catalog.find("Dragon Slayer", Some(2)).is_empty());
    }

    #[test]
    fn test_enriched_serializes_camel_case() {
        let all = flatten(&sample_worlds());
        let value = serde_json::to_value(&all[0]).unwrap();
        assert_eq!(value["worldId"], 1);
        assert_eq!(value["worldName"], "Dragon Town");
        assert_eq!(value["baseEnergy"], 5000);
        assert_eq!(value["rarity"], "Legendary");
    }
}
