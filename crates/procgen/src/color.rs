//! Temperature-driven coloring: blackbody approximation and illumination
//! tinting.
//!
//! The table maps effective temperature to an approximate visible RGB over
//! 1000K-40000K. Out-of-range temperatures clamp to the nearest entry;
//! in-range temperatures interpolate linearly between the bracketing pair.

use glam::Vec3;

/// Reference points (Kelvin, linear RGB), ordered by temperature.
/// Spans M-dwarf embers to O-star blue-white.
const BLACKBODY_TABLE: [(f32, Vec3); 13] = [
    (1_000.0, Vec3::new(1.00, 0.22, 0.00)),
    (2_000.0, Vec3::new(1.00, 0.49, 0.15)),
    (3_000.0, Vec3::new(1.00, 0.71, 0.42)),
    (4_000.0, Vec3::new(1.00, 0.84, 0.67)),
    (5_000.0, Vec3::new(1.00, 0.93, 0.84)),
    (6_000.0, Vec3::new(1.00, 0.98, 0.96)),
    (7_000.0, Vec3::new(0.95, 0.95, 1.00)),
    (8_000.0, Vec3::new(0.87, 0.90, 1.00)),
    (10_000.0, Vec3::new(0.78, 0.84, 1.00)),
    (15_000.0, Vec3::new(0.68, 0.77, 1.00)),
    (20_000.0, Vec3::new(0.62, 0.73, 1.00)),
    (30_000.0, Vec3::new(0.58, 0.69, 1.00)),
    (40_000.0, Vec3::new(0.56, 0.68, 1.00)),
];

/// Temperature below which `illumination_tint` adds a brightness boost so
/// cool red sources do not produce visually dead lighting.
const COOL_BOOST_BELOW_K: f32 = 3_500.0;
const COOL_BOOST: f32 = 0.15;

/// Approximate visible color of a blackbody at `teff_k` Kelvin.
pub fn temperature_to_color(teff_k: f32) -> Vec3 {
    let (min_k, first) = BLACKBODY_TABLE[0];
    let (max_k, last) = BLACKBODY_TABLE[BLACKBODY_TABLE.len() - 1];
    if !teff_k.is_finite() || teff_k <= min_k {
        return first;
    }
    if teff_k >= max_k {
        return last;
    }
    // Locate the bracketing pair and interpolate by fractional position.
    for window in BLACKBODY_TABLE.windows(2) {
        let (lo_k, lo) = window[0];
        let (hi_k, hi) = window[1];
        if teff_k <= hi_k {
            let t = (teff_k - lo_k) / (hi_k - lo_k);
            return lo.lerp(hi, t);
        }
    }
    last
}

/// Illumination tint of a host star at `teff_k`, for tinting an orbiting
/// body's materials.
///
/// The blackbody color is normalized by its max channel so a cool star never
/// darkens the lit surface, and very cool sources get a small fixed
/// brightness boost.
pub fn illumination_tint(teff_k: f32) -> Vec3 {
    let color = temperature_to_color(teff_k);
    let max_channel = color.max_element().max(1e-6);
    let mut tint = color / max_channel;
    if teff_k < COOL_BOOST_BELOW_K {
        tint = (tint + Vec3::splat(COOL_BOOST)).min(Vec3::ONE);
    }
    tint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_boundaries_exact() {
        assert_eq!(temperature_to_color(1_000.0), Vec3::new(1.00, 0.22, 0.00));
        assert_eq!(temperature_to_color(40_000.0), Vec3::new(0.56, 0.68, 1.00));
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(temperature_to_color(500.0), temperature_to_color(1_000.0));
        assert_eq!(temperature_to_color(60_000.0), temperature_to_color(40_000.0));
        assert_eq!(temperature_to_color(f32::NAN), temperature_to_color(1_000.0));
    }

    #[test]
    fn interpolates_between_bracketing_pair() {
        // Midway between 5000K (1.0, 0.93, 0.84) and 6000K (1.0, 0.98, 0.96).
        let c = temperature_to_color(5_500.0);
        assert!((c.x - 1.0).abs() < 1e-5);
        assert!((c.y - 0.955).abs() < 1e-5);
        assert!((c.z - 0.90).abs() < 1e-5);
    }

    #[test]
    fn warmer_is_bluer() {
        let cool = temperature_to_color(3_000.0);
        let hot = temperature_to_color(20_000.0);
        assert!(cool.x > cool.z);
        assert!(hot.z > hot.x);
    }

    #[test]
    fn tint_normalized_to_max_channel() {
        for teff in [3_700.0, 5_778.0, 10_000.0, 30_000.0] {
            let tint = illumination_tint(teff);
            assert!((tint.max_element() - 1.0).abs() < 1e-5, "teff {}", teff);
        }
    }

    #[test]
    fn cool_source_boosted() {
        let plain = temperature_to_color(2_000.0);
        let tint = illumination_tint(2_000.0);
        // Normalization leaves red at 1.0; the boost lifts the dim channels.
        assert!(tint.z > plain.z / plain.max_element());
        assert!(tint.min_element() >= COOL_BOOST - 1e-5);
    }
}
