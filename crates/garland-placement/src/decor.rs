//! Seeded generation of the tree's fixed decorations.
//!
//! Ribbons, fairy lights and icicle drop lights are not ornaments: they are
//! scenery, generated once per tree from a caller-supplied seed string. The
//! layout is a pure function of that seed - the same seed reproduces the
//! same tree, and tests can vary the seed freely because nothing here reads
//! global state.
//!
//! Each piece derives its own sub-seed by concatenating the numeric seed
//! hash, the piece index, and a role suffix, then drawing from
//! [`seeded_random`]. Ribbons and icicles snap to lattice slots (icicles
//! avoid the top band so they have room to hang); fairy lights use a free
//! conical distribution independent of the lattice.

use crate::hash::{hash_str, seeded_random};
use crate::lattice::{position_for_slot, Position};
use crate::{BANDS, SLOTS_PER_BAND};

/// Number of ribbon pieces per tree.
pub const RIBBON_COUNT: u32 = 48;

/// Number of fairy lights per tree.
pub const FAIRY_COUNT: u32 = 150;

/// Number of icicle drop lights per tree.
pub const ICICLE_COUNT: u32 = 80;

/// Kind of decorative element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecorKind {
    Ribbon,
    Fairy,
    Icicle,
}

/// One placed decorative element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecorInstance {
    pub kind: DecorKind,
    pub position: Position,
    /// Euler rotation in radians.
    pub rotation: [f64; 3],
    pub scale: f64,
    /// CSS-style hex color.
    pub color: &'static str,
}

/// Sub-seed for piece `i` in a named role: decimal `seed_hash + i`
/// concatenated with the role suffix.
fn sub_seed(seed_hash: u32, i: u32, role: &str) -> String {
    format!("{}{}", seed_hash as u64 + i as u64, role)
}

/// Generate the full decoration set for a tree.
///
/// Deterministic in `seed`: identical seeds yield identical layouts.
pub fn generate_decor(seed: &str) -> Vec<DecorInstance> {
    let seed_hash = hash_str(seed);
    let mut decors =
        Vec::with_capacity((RIBBON_COUNT + FAIRY_COUNT + ICICLE_COUNT) as usize);

    // Ribbons: lattice-snapped, pushed slightly outward from the foliage.
    for i in 0..RIBBON_COUNT {
        let r1 = seeded_random(sub_seed(seed_hash, i, "r_band").as_str());
        let r2 = seeded_random(sub_seed(seed_hash, i, "r_slot").as_str());
        let band = (r1 * BANDS as f64).floor() as u32;
        let slot = (r2 * SLOTS_PER_BAND as f64).floor() as u32;

        let p = position_for_slot(band, slot);
        let outward = 1.05;

        decors.push(DecorInstance {
            kind: DecorKind::Ribbon,
            position: Position::new(p.x * outward, p.y, p.z * outward),
            rotation: [0.0, r2 * std::f64::consts::TAU, 0.3],
            scale: 0.2 + r1 * 0.1,
            color: "#500a0c",
        });
    }

    // Fairy lights: free conical spiral, not tied to the lattice.
    for i in 0..FAIRY_COUNT {
        let r1 = seeded_random(sub_seed(seed_hash, i, "f_h").as_str());
        let r2 = seeded_random(sub_seed(seed_hash, i, "f_a").as_str());
        let t = r1;
        let y = t * 6.5 + 0.5;
        let radius = 3.6 * (1.0 - t * 0.9);
        let angle = r2 * std::f64::consts::TAU;

        decors.push(DecorInstance {
            kind: DecorKind::Fairy,
            position: Position::new(angle.cos() * radius, y, angle.sin() * radius),
            rotation: [0.0, 0.0, 0.0],
            scale: 0.05,
            color: if i % 2 == 0 { "#FFDFA6" } else { "#d4af37" },
        });
    }

    // Icicle drop lights: lattice-snapped below their slot, top band skipped.
    for i in 0..ICICLE_COUNT {
        let r1 = seeded_random(sub_seed(seed_hash, i, "i_b").as_str());
        let r2 = seeded_random(sub_seed(seed_hash, i, "i_s").as_str());
        let band = (r1 * (BANDS - 1) as f64).floor() as u32;
        let slot = (r2 * SLOTS_PER_BAND as f64).floor() as u32;

        let p = position_for_slot(band, slot);

        decors.push(DecorInstance {
            kind: DecorKind::Icicle,
            position: Position::new(p.x * 1.02, p.y - 0.2, p.z * 1.02),
            rotation: [0.0, 0.0, 0.0],
            scale: 0.15 + r1 * 0.2,
            color: "#ffffff",
        });
    }

    decors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = generate_decor("FESTIVE_2025_V1");
        let b = generate_decor("FESTIVE_2025_V1");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_seeds_change_the_layout() {
        let a = generate_decor("seed-a");
        let b = generate_decor("seed-b");
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn piece_counts() {
        let decors = generate_decor("any");
        let count = |kind: DecorKind| decors.iter().filter(|d| d.kind == kind).count() as u32;
        assert_eq!(count(DecorKind::Ribbon), RIBBON_COUNT);
        assert_eq!(count(DecorKind::Fairy), FAIRY_COUNT);
        assert_eq!(count(DecorKind::Icicle), ICICLE_COUNT);
        assert_eq!(
            decors.len() as u32,
            RIBBON_COUNT + FAIRY_COUNT + ICICLE_COUNT
        );
    }

    #[test]
    fn fairy_colors_alternate() {
        let decors = generate_decor("palette");
        let fairies: Vec<_> = decors
            .iter()
            .filter(|d| d.kind == DecorKind::Fairy)
            .collect();
        for (i, fairy) in fairies.iter().enumerate() {
            let expected = if i % 2 == 0 { "#FFDFA6" } else { "#d4af37" };
            assert_eq!(fairy.color, expected);
        }
    }

    #[test]
    fn icicles_avoid_the_top_band() {
        // Icicle bands come from r1 * (BANDS - 1), so y never reaches the
        // apex height even before the 0.2 drop.
        let top = crate::position_for_slot(crate::BANDS - 1, 0).y;
        for d in generate_decor("icicles") {
            if d.kind == DecorKind::Icicle {
                assert!(d.position.y < top);
            }
        }
    }

    #[test]
    fn fairies_stay_inside_the_cone_height() {
        for d in generate_decor("heights") {
            if d.kind == DecorKind::Fairy {
                assert!(d.position.y >= 0.5 && d.position.y < 7.0);
                assert!(d.position.radius() <= 3.6 + 1e-9);
            }
        }
    }

    #[test]
    fn sub_seed_concatenates_decimal_and_role() {
        assert_eq!(sub_seed(100, 5, "r_band"), "105r_band");
        assert_eq!(sub_seed(0, 0, "f_h"), "0f_h");
    }
}
