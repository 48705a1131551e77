//! Garland Tree Curation
//!
//! Turns raw ornament lists into a renderable tree scene.
//!
//! The placement engine in `garland-placement` is a pure coordinate
//! function; it does not curate its input. This crate owns the list side
//! of that split:
//!
//! 1. Merge the viewer's own ornaments with the global list, owned first.
//! 2. Deduplicate by ornament id (owned entries win).
//! 3. Mark global entries as the viewer's where the owner address matches.
//! 4. Sort viewer-owned entries ahead of the rest (stable).
//! 5. Truncate to the lattice capacity, counting the rest as overflow.
//! 6. Assign each surviving record a placement by its curated list index.
//!
//! Everything here is synchronous and in-memory. Fetching the lists from
//! the remote store is the application's concern, not this crate's.

mod address;
mod record;
mod scene;

pub use address::{AddressError, ViewerAddress};
pub use record::{OrnamentRecord, TreeOrnament, TreeScene};
pub use scene::build_scene;
