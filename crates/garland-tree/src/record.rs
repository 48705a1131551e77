//! Ornament record types.

use garland_placement::Position;
use serde::{Deserialize, Serialize};

/// An ornament row as fetched from the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrnamentRecord {
    /// Stable anonymous ornament id, used as the placement hash seed.
    pub id: String,
    /// Public URL of the generated ornament image.
    pub image_url: String,
    /// Short generated description.
    pub description: String,
    /// Owning wallet address. Compared, never displayed.
    pub owner: String,
    /// Creation timestamp as stored (opaque here).
    pub created_at: String,
}

/// A curated ornament with its resolved placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOrnament {
    pub id: String,
    pub url: String,
    pub desc: String,
    pub owner: String,
    /// Whether the ornament belongs to the current viewer.
    pub is_mine: bool,
    pub band: u32,
    pub slot: u32,
    pub position: Position,
}

/// The assembled scene: placed ornaments plus the count of records that
/// did not fit on the lattice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeScene {
    pub ornaments: Vec<TreeOrnament>,
    pub overflow_count: usize,
}
