//! Seed derivation: a stable identifier becomes a reproducible numeric
//! "personality" for a body.
//!
//! **Seed-based consistency:** `seed_of(name)` is fully deterministic — the
//! same name always produces the same seed, in every process, with no
//! dependency on call order or prior calls. Cached visual assets and repeated
//! scene rebuilds therefore always agree.
//!
//! Sub-values come from `derive(seed, index)`, which hashes the seed bits at
//! an index-dependent offset rather than re-hashing the previous value, so
//! derived channels do not move in lockstep as the seed varies.

/// Fixed channel assignments for `derive`, so independent visual features
/// never read the same sub-value.
pub mod channels {
    pub const HUE: u64 = 0;
    pub const SATURATION: u64 = 1;
    pub const VALUE: u64 = 2;
    pub const BANDS: u64 = 3;
    pub const BAND_JITTER: u64 = 4;
    pub const STORM: u64 = 5;
    /// Storm sampling spans four channels: 6..=9.
    pub const STORM_POS: u64 = 6;
    pub const ORBIT_PHASE: u64 = 10;
    /// Companion-star orbit shaping.
    pub const ECCENTRICITY: u64 = 11;
    pub const ORBIT_TILT: u64 = 12;
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Weyl-sequence increment for offset-based derivation (splitmix64 gamma).
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Map the top 53 bits of a hash onto [0, 1).
#[inline]
fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

/// splitmix64 finalizer: well-mixed output for sequential inputs.
#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Deterministic seed in [0, 1) from a body's stable identifier (FNV-1a).
pub fn seed_of(name: &str) -> f64 {
    let mut hash = FNV_OFFSET;
    for byte in name.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    unit_from_bits(mix(hash))
}

/// Derive the `index`-th independent sub-value in [0, 1) from a seed.
pub fn derive(seed: f64, index: u64) -> f64 {
    let offset = seed.to_bits().wrapping_add((index + 1).wrapping_mul(GOLDEN_GAMMA));
    unit_from_bits(mix(offset))
}

/// A value in [min, max) from the seed's `index`-th channel.
pub fn scale_between(seed: f64, index: u64, min: f32, max: f32) -> f32 {
    min + derive(seed, index) as f32 * (max - min)
}

/// A rotation/phase angle in [0, 2π).
pub fn angle_of(seed: f64, index: u64) -> f32 {
    derive(seed, index) as f32 * std::f32::consts::TAU
}

/// Hue perturbation in [-0.08, 0.08] (fraction of the hue circle).
pub fn hue_shift(seed: f64, index: u64) -> f32 {
    scale_between(seed, index, -0.08, 0.08)
}

/// Saturation perturbation in [-0.15, 0.15].
pub fn saturation_shift(seed: f64, index: u64) -> f32 {
    scale_between(seed, index, -0.15, 0.15)
}

/// Value (brightness) perturbation in [-0.15, 0.15].
pub fn value_shift(seed: f64, index: u64) -> f32 {
    scale_between(seed, index, -0.15, 0.15)
}

/// Fixed probability tiers for "feature present" toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureTier {
    /// ~15% of bodies.
    Rare,
    /// ~35% of bodies.
    Uncommon,
    /// ~65% of bodies.
    Common,
    /// ~85% of bodies.
    Ubiquitous,
}

impl FeatureTier {
    pub fn probability(&self) -> f64 {
        match self {
            FeatureTier::Rare => 0.15,
            FeatureTier::Uncommon => 0.35,
            FeatureTier::Common => 0.65,
            FeatureTier::Ubiquitous => 0.85,
        }
    }
}

/// Whether a feature at the given tier is present for this seed/channel.
pub fn has_feature(seed: f64, index: u64, tier: FeatureTier) -> bool {
    derive(seed, index) < tier.probability()
}

/// Integer band count in [min, max] for banded (gas-giant-style) bodies.
pub fn band_count(seed: f64, index: u64, min: u32, max: u32) -> u32 {
    let span = max.saturating_sub(min) + 1;
    min + (derive(seed, index) * f64::from(span)) as u32
}

/// Per-band width jitter in [0, 1).
pub fn band_jitter(seed: f64, index: u64) -> f32 {
    derive(seed, index) as f32
}

/// A storm spot sampled on a body's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StormSample {
    /// Signed sine-latitude; magnitude biased into the mid-latitude band
    /// [0.3, 0.7] where large storms actually sit.
    pub latitude: f32,
    /// Longitude as a fraction of the full circle, [0, 1).
    pub longitude: f32,
    /// Angular size as a fraction of the body radius, [0.05, 0.25].
    pub size: f32,
}

/// Sample a storm position/size. Uses four consecutive channels starting
/// at `index`.
pub fn storm_sample(seed: f64, index: u64) -> StormSample {
    let hemisphere = if derive(seed, index) < 0.5 { -1.0 } else { 1.0 };
    let latitude = hemisphere * scale_between(seed, index + 1, 0.3, 0.7);
    let longitude = derive(seed, index + 2) as f32;
    let size = scale_between(seed, index + 3, 0.05, 0.25);
    StormSample {
        latitude,
        longitude,
        size,
    }
}
