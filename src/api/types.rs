//! Catalog and detail records, plus the PokeAPI JSON shapes they are decoded from.
//!
//! The wire structs mirror the nesting the API uses (`types[].type.name` etc.)
//! and are flattened into the domain records right after decoding, so nothing
//! outside this module ever sees the wrapper objects.

use serde::Deserialize;

use super::ApiError;

/// One catalog row: a display name and the URL its detail lives at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListEntry {
    pub name: String,
    pub locator: String,
}

impl ListEntry {
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// Detail for a single Pokémon, flattened from the API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub name: String,
    pub id: u32,
    pub height: u32,
    pub weight: u32,
    /// `null` for a handful of alternate forms in the live API.
    pub base_experience: Option<u32>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct CatalogResponse {
    results: Vec<CatalogItem>,
}

#[derive(Deserialize, Debug)]
struct CatalogItem {
    name: String,
    url: String,
}

#[derive(Deserialize, Debug)]
struct NamedResource {
    name: String,
}

#[derive(Deserialize, Debug)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Deserialize, Debug)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Deserialize, Debug)]
struct StatSlot {
    stat: NamedResource,
    base_stat: u32,
}

#[derive(Deserialize, Debug)]
struct DetailResponse {
    name: String,
    id: u32,
    height: u32,
    weight: u32,
    #[serde(default)]
    base_experience: Option<u32>,
    types: Vec<TypeSlot>,
    abilities: Vec<AbilitySlot>,
    stats: Vec<StatSlot>,
}

impl From<DetailResponse> for DetailRecord {
    fn from(raw: DetailResponse) -> Self {
        Self {
            name: raw.name,
            id: raw.id,
            height: raw.height,
            weight: raw.weight,
            base_experience: raw.base_experience,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes a `/pokemon?limit=N` listing body into catalog entries, in API order.
pub fn parse_catalog(body: &str) -> Result<Vec<ListEntry>, ApiError> {
    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(response
        .results
        .into_iter()
        .map(|item| ListEntry::new(item.name, item.url))
        .collect())
}

/// Decodes a single `/pokemon/{id}` body.
pub fn parse_detail(body: &str) -> Result<DetailRecord, ApiError> {
    let response: DetailResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(response.into())
}
