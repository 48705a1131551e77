//! Slot assignment for ornaments.
//!
//! Two strategies, keyed on ownership:
//!
//! - **Viewer-owned** ornaments go to the two mid-height bands (2 and 3),
//!   alternating by list index, and step around the band with a stride of
//!   7 slots. gcd(7, 24) = 1, so the stride walks all 24 slots before any
//!   repeat - consecutive owned ornaments spread around the tree instead
//!   of stacking next to each other.
//! - **Everything else** is scattered by the identity hash: the hash picks
//!   the band, and the hash plus the list index picks the slot. The index
//!   perturbation keeps two identities that hash to the same band from
//!   also landing on the same slot, as long as their indices differ.
//!
//! The hash branch tolerates coordinate collisions between distinct
//! identities. Strict avoidance (linear probing within the band, spilling
//! to the next) is a possible strengthening, deliberately not done here.

use crate::hash::hash_str;
use crate::lattice::{LatticeCoord, Position};
use crate::{BANDS, SLOTS_PER_BAND};

/// Lowest band used for viewer-owned ornaments.
pub const OWNED_BAND_BASE: u32 = 2;

/// Number of bands viewer-owned ornaments alternate between.
pub const OWNED_BAND_SPAN: u32 = 2;

/// Slot stride between consecutive viewer-owned ornaments.
pub const OWNED_SLOT_STRIDE: u32 = 7;

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// The stride must be coprime with the band size for full slot coverage,
// and the owned bands must fit on the lattice.
const _: () = assert!(gcd(OWNED_SLOT_STRIDE, SLOTS_PER_BAND) == 1);
const _: () = assert!(OWNED_BAND_BASE + OWNED_BAND_SPAN <= BANDS);

/// A resolved placement: the lattice coordinate plus its 3D position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub coord: LatticeCoord,
    pub position: Position,
}

impl Placement {
    /// Vertical tier of this placement.
    pub const fn band(&self) -> u32 {
        self.coord.band
    }

    /// Angular slot of this placement.
    pub const fn slot(&self) -> u32 {
        self.coord.slot
    }
}

/// Assign a lattice coordinate to an ornament.
///
/// `sequence_index` is the ornament's position in the caller's curated
/// list. The function is total and stateless: the same
/// `(identity, sequence_index, owned_by_viewer)` triple always maps to the
/// same coordinate.
pub fn coord_for_ornament(identity: &str, sequence_index: u32, owned_by_viewer: bool) -> LatticeCoord {
    if owned_by_viewer {
        let band = OWNED_BAND_BASE + sequence_index % OWNED_BAND_SPAN;
        let slot = ((sequence_index as u64 * OWNED_SLOT_STRIDE as u64) % SLOTS_PER_BAND as u64) as u32;
        return LatticeCoord::new(band, slot);
    }

    let h = hash_str(identity);
    let band = h % BANDS;
    let slot = ((h as u64 + sequence_index as u64) % SLOTS_PER_BAND as u64) as u32;
    LatticeCoord::new(band, slot)
}

/// Assign a full placement (coordinate and 3D position) to an ornament.
///
/// # Examples
///
/// ```
/// use garland_placement::placement_for_ornament;
///
/// // Owned ornaments alternate bands 2/3 and stride 7 slots apart.
/// let first = placement_for_ornament("any-id", 0, true);
/// assert_eq!((first.band(), first.slot()), (2, 0));
/// let second = placement_for_ornament("any-id", 1, true);
/// assert_eq!((second.band(), second.slot()), (3, 7));
/// ```
pub fn placement_for_ornament(identity: &str, sequence_index: u32, owned_by_viewer: bool) -> Placement {
    let coord = coord_for_ornament(identity, sequence_index, owned_by_viewer);
    Placement {
        coord,
        position: coord.position(),
    }
}
