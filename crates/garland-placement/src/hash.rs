//! Deterministic string hashing and seeded pseudo-randomness.
//!
//! Two contracts matter here, and only two:
//!
//! - **Determinism**: the same input always produces the same output, on
//!   every platform. Placement must replay identically across sessions.
//! - **Dispersion**: small input changes should flip many output bits, so
//!   visually the hash-spread ornaments do not cluster.
//!
//! Nothing cryptographic is required. The hash is the classic rolling
//! `h * 31 + unit` polynomial, computed as `(h << 5) - h + unit` in
//! wrapping 32-bit signed arithmetic over UTF-16 code units.

/// Rolling polynomial hash of a string.
///
/// The empty string hashes to 0. Total over all inputs.
///
/// # Examples
///
/// ```
/// use garland_placement::hash_str;
///
/// assert_eq!(hash_str(""), 0);
/// assert_eq!(hash_str("abc"), hash_str("abc"));
/// assert_ne!(hash_str("abc"), hash_str("abd"));
/// ```
pub fn hash_str(input: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32);
    }
    h.unsigned_abs()
}

/// A seed for [`seeded_random`]: either text (hashed first) or a number
/// (used directly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seed<'a> {
    /// Text seed, reduced through [`hash_str`].
    Text(&'a str),
    /// Numeric seed, fed straight into the transform.
    Number(f64),
}

impl<'a> From<&'a str> for Seed<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for Seed<'_> {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for Seed<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Reproducible pseudo-random value in `[0, 1)` for a given seed.
///
/// The transform takes the sine of the seed, scales it by 10000, and keeps
/// the fractional part. Neighboring seeds land far apart in the output
/// range while any fixed seed reproduces exactly.
///
/// # Examples
///
/// ```
/// use garland_placement::seeded_random;
///
/// let a = seeded_random("tinsel");
/// let b = seeded_random("tinsel");
/// assert_eq!(a, b);
/// assert!((0.0..1.0).contains(&a));
/// ```
pub fn seeded_random<'a>(seed: impl Into<Seed<'a>>) -> f64 {
    let s = match seed.into() {
        Seed::Text(text) => hash_str(text) as f64,
        Seed::Number(n) => n,
    };
    let x = s.sin() * 10000.0;
    x - x.floor()
}
