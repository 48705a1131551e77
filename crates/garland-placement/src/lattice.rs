//! The band/slot lattice and its mapping into tree space.
//!
//! A lattice coordinate is a pair `(band, slot)`:
//!
//! - `band` in `[0, BANDS)` selects a horizontal tier, 0 lowest/widest.
//! - `slot` in `[0, SLOTS_PER_BAND)` selects an angular position.
//!
//! The 3D mapping is pure linear interpolation over the normalized band
//! height `t = band / (BANDS - 1)`:
//!
//! ```text
//! y      = Y_MIN       + t * (Y_MAX - Y_MIN)
//! radius = BASE_RADIUS - t * (BASE_RADIUS - TOP_RADIUS)
//! angle  = slot / SLOTS_PER_BAND * 2π
//! (x, z) = (cos(angle), sin(angle)) * radius
//! ```
//!
//! Height is non-decreasing and radius non-increasing in `band`, which is
//! what makes the slots trace a cone.

use crate::{BANDS, BASE_RADIUS, SLOTS_PER_BAND, TOP_RADIUS, Y_MAX, Y_MIN};

/// A discrete position on the placement lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeCoord {
    /// Vertical tier, `0..BANDS`.
    pub band: u32,
    /// Angular position within the tier, `0..SLOTS_PER_BAND`.
    pub slot: u32,
}

impl LatticeCoord {
    /// Create a new coordinate.
    pub const fn new(band: u32, slot: u32) -> Self {
        Self { band, slot }
    }

    /// The 3D position of this coordinate.
    pub fn position(&self) -> Position {
        position_for_slot(self.band, self.slot)
    }
}

impl std::fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(band {}, slot {})", self.band, self.slot)
    }
}

/// A point in tree space.
///
/// `y` is height; `x` and `z` span the horizontal plane, with the trunk on
/// the vertical axis through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the vertical (trunk) axis.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.z)
    }

    /// Angle around the vertical axis, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.z.atan2(self.x)
    }
}

impl From<Position> for [f64; 3] {
    fn from(p: Position) -> Self {
        [p.x, p.y, p.z]
    }
}

/// Map a lattice coordinate to its 3D position.
///
/// Pure geometry: no randomness, no state. The same `(band, slot)` pair
/// always yields the same point.
pub fn position_for_slot(band: u32, slot: u32) -> Position {
    let t = band as f64 / (BANDS - 1) as f64;

    let y = Y_MIN + t * (Y_MAX - Y_MIN);
    let radius = BASE_RADIUS - t * (BASE_RADIUS - TOP_RADIUS);
    let angle = (slot as f64 / SLOTS_PER_BAND as f64) * std::f64::consts::TAU;

    Position {
        x: angle.cos() * radius,
        y,
        z: angle.sin() * radius,
    }
}
