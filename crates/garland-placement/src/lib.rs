//! Garland Ornament Placement
//!
//! Deterministic placement of ornaments on a fixed-capacity conical lattice.
//!
//! # The Lattice
//!
//! The tree surface is discretized into `BANDS` horizontal tiers, each with
//! `SLOTS_PER_BAND` evenly spaced angular slots. Band 0 is the lowest and
//! widest tier; band `BANDS - 1` is the highest and narrowest. Height grows
//! and radius shrinks linearly with the band index, producing the conical
//! silhouette.
//!
//! # Placement Strategies
//!
//! Two disjoint strategies assign an ornament a `(band, slot)` coordinate:
//!
//! - **Viewer-owned**: restricted to the two mid-height bands (2 and 3),
//!   stepping around each band with a stride of 7 slots. The stride is
//!   coprime with `SLOTS_PER_BAND`, so consecutive owned ornaments visit
//!   all 24 slots before any repeat.
//! - **Hash-spread**: everything else is scattered by a rolling string hash
//!   of its identity, perturbed by its list index so equal hashes do not
//!   also collide on slot.
//!
//! Both strategies are pure functions of their inputs - identical inputs
//! always reproduce identical coordinates, so a tree renders the same way
//! on every visit.
//!
//! # Collisions
//!
//! The hash-spread branch does not guarantee distinct coordinates for
//! distinct identities. Occasional overlap is accepted as a visual
//! imperfection, not a correctness violation.

mod decor;
mod hash;
mod lattice;
mod placement;

pub use decor::{generate_decor, DecorInstance, DecorKind, FAIRY_COUNT, ICICLE_COUNT, RIBBON_COUNT};
pub use hash::{hash_str, seeded_random, Seed};
pub use lattice::{position_for_slot, LatticeCoord, Position};
pub use placement::{
    coord_for_ornament, placement_for_ornament, Placement, OWNED_BAND_BASE, OWNED_BAND_SPAN,
    OWNED_SLOT_STRIDE,
};

/// Number of horizontal tiers on the tree.
pub const BANDS: u32 = 6;

/// Angular slots per tier.
pub const SLOTS_PER_BAND: u32 = 24;

/// Total number of distinct lattice coordinates.
pub const TOTAL_CAPACITY: u32 = BANDS * SLOTS_PER_BAND;

/// Height of band 0, in tree-space units.
pub const Y_MIN: f64 = 1.15;

/// Height of the top band.
pub const Y_MAX: f64 = 6.95;

/// Radius of band 0 (slightly outside the lowest foliage tier).
pub const BASE_RADIUS: f64 = 4.85;

/// Radius of the top band.
pub const TOP_RADIUS: f64 = 1.6;

// Height interpolation divides by BANDS - 1.
const _: () = assert!(BANDS >= 2);

const _: () = assert!(TOTAL_CAPACITY == BANDS * SLOTS_PER_BAND);
