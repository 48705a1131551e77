//! Scene assembly: merge, deduplicate, truncate, place.

use std::collections::HashSet;

use garland_placement::{placement_for_ornament, TOTAL_CAPACITY};
use tracing::{debug, warn};

use crate::record::{OrnamentRecord, TreeOrnament, TreeScene};
use crate::ViewerAddress;

/// Build the tree scene from the viewer's own ornaments and the global
/// list.
///
/// `owned` takes priority: its entries are always marked as the viewer's
/// and win deduplication against `global`. Global entries are marked as
/// the viewer's when their owner matches `viewer`. After the owned-first
/// stable sort, the list is truncated to [`TOTAL_CAPACITY`]; records past
/// the cut are counted as overflow and not placed.
///
/// Placement uses each record's index in the curated list as its sequence
/// index, so the scene is a pure function of `(viewer, owned, global)`.
pub fn build_scene(
    viewer: Option<&ViewerAddress>,
    owned: &[OrnamentRecord],
    global: &[OrnamentRecord],
) -> TreeScene {
    let mut seen: HashSet<&str> = HashSet::with_capacity(owned.len() + global.len());
    let mut merged: Vec<(bool, &OrnamentRecord)> = Vec::with_capacity(owned.len() + global.len());

    for record in owned {
        if seen.insert(&record.id) {
            merged.push((true, record));
        }
    }
    for record in global {
        if seen.insert(&record.id) {
            let is_mine = viewer.is_some_and(|v| v.matches(&record.owner));
            merged.push((is_mine, record));
        }
    }

    // Stable: owned entries keep their order, then global in fetch order.
    merged.sort_by_key(|&(is_mine, _)| !is_mine);

    let capacity = TOTAL_CAPACITY as usize;
    let overflow_count = merged.len().saturating_sub(capacity);
    merged.truncate(capacity);

    if overflow_count > 0 {
        warn!(overflow_count, capacity, "ornament list exceeds lattice capacity");
    }

    let ornaments: Vec<TreeOrnament> = merged
        .iter()
        .enumerate()
        .map(|(index, &(is_mine, record))| {
            let placement = placement_for_ornament(&record.id, index as u32, is_mine);
            TreeOrnament {
                id: record.id.clone(),
                url: record.image_url.clone(),
                desc: record.description.clone(),
                owner: record.owner.clone(),
                is_mine,
                band: placement.band(),
                slot: placement.slot(),
                position: placement.position,
            }
        })
        .collect();

    debug!(
        placed = ornaments.len(),
        owned_in = owned.len(),
        global_in = global.len(),
        overflow_count,
        "tree scene assembled"
    );

    TreeScene {
        ornaments,
        overflow_count,
    }
}
