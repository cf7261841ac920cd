//! Per-body shader parameters for the external shading backend.
//!
//! `#[repr(C)]` + Pod so a renderer can upload the block directly as uniform
//! data. Every field is normalized into a documented range; the generation
//! side guarantees no NaN/Infinity ever lands here.

use bytemuck::{Pod, Zeroable};
use engine_core::{PlanetClass, PlanetRecord};

use crate::color::illumination_tint;
use crate::seed::{self, channels, FeatureTier};

/// Density normalization ceiling in g/cm³ (Earth is ~5.5).
const DENSITY_MAX_GCC: f64 = 8.0;
/// Insolation log-compression ceiling in Earth-flux units.
const INSOLATION_MAX_EARTH: f64 = 10_000.0;
/// Equilibrium-temperature normalization ceiling in Kelvin.
const EQ_TEMP_MAX_K: f64 = 2_500.0;

/// Neutral fallbacks for missing measurements.
const DENSITY_FALLBACK_GCC: f64 = 4.0;
const INSOLATION_FALLBACK_EARTH: f64 = 1.0;
const EQ_TEMP_FALLBACK_K: f64 = 255.0;

/// Deterministic numeric bundle consumed read-only by the rendering layer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShaderParams {
    /// Body seed, [0, 1).
    pub seed: f32,
    /// Detail level from the body's drawn size, [0, 1].
    pub detail: f32,
    /// Bulk density over 0..8 g/cm³, [0, 1].
    pub density: f32,
    /// Log-compressed insolation over 0..10⁴ Earth flux, [0, 1].
    pub insolation: f32,
    /// Equilibrium temperature over 0..2500 K, [0, 1].
    pub surface_temp: f32,
    /// Host-star effective temperature, raw Kelvin.
    pub star_temp: f32,
    /// Hue perturbation, [-0.08, 0.08].
    pub hue_shift: f32,
    /// Band count for banded bodies, 0 or [4, 10].
    pub band_count: f32,
    /// Per-band width jitter, [0, 1).
    pub band_jitter: f32,
    /// Storm signed sine-latitude, 0 when no storm, else magnitude [0.3, 0.7].
    pub storm_latitude: f32,
    /// Storm longitude fraction, [0, 1).
    pub storm_longitude: f32,
    /// Storm size fraction of body radius, 0 when absent, else [0.05, 0.25].
    pub storm_size: f32,
    /// Host-star illumination tint, max channel = 1.
    pub tint: [f32; 3],
    pub _pad: f32,
}

/// Clamp a measured value into [0, 1] with a fallback for missing/invalid.
fn normalized(value: Option<f64>, fallback: f64, max: f64) -> f32 {
    let v = match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => fallback,
    };
    (v / max).clamp(0.0, 1.0) as f32
}

/// Log-compress insolation into [0, 1]; hot Jupiters sit near 1 without
/// crushing temperate planets into 0.
fn normalized_insolation(value: Option<f64>) -> f32 {
    let v = match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => INSOLATION_FALLBACK_EARTH,
    };
    ((1.0 + v).ln() / (1.0 + INSOLATION_MAX_EARTH).ln()).clamp(0.0, 1.0) as f32
}

impl ShaderParams {
    /// Build the parameter block for a planet.
    pub fn for_planet(
        seed: f64,
        class: PlanetClass,
        record: &PlanetRecord,
        host_teff_k: f32,
        detail: f32,
    ) -> Self {
        let banded = matches!(class, PlanetClass::GasGiant | PlanetClass::NeptuneLike);
        let storm_tier = match class {
            PlanetClass::GasGiant => Some(FeatureTier::Common),
            PlanetClass::NeptuneLike => Some(FeatureTier::Uncommon),
            _ => None,
        };
        let has_storm = storm_tier
            .map(|tier| seed::has_feature(seed, channels::STORM, tier))
            .unwrap_or(false);
        let storm = if has_storm {
            seed::storm_sample(seed, channels::STORM_POS)
        } else {
            seed::StormSample {
                latitude: 0.0,
                longitude: 0.0,
                size: 0.0,
            }
        };
        let tint = illumination_tint(host_teff_k);

        Self {
            seed: seed as f32,
            detail: detail.clamp(0.0, 1.0),
            density: normalized(record.density_gcc, DENSITY_FALLBACK_GCC, DENSITY_MAX_GCC),
            insolation: normalized_insolation(record.insolation_earth),
            surface_temp: normalized(record.eq_temp_k, EQ_TEMP_FALLBACK_K, EQ_TEMP_MAX_K),
            star_temp: host_teff_k,
            hue_shift: seed::hue_shift(seed, channels::HUE),
            band_count: if banded {
                seed::band_count(seed, channels::BANDS, 4, 10) as f32
            } else {
                0.0
            },
            band_jitter: if banded {
                seed::band_jitter(seed, channels::BAND_JITTER)
            } else {
                0.0
            },
            storm_latitude: storm.latitude,
            storm_longitude: storm.longitude,
            storm_size: storm.size,
            tint: tint.to_array(),
            _pad: 0.0,
        }
    }

    /// Build the parameter block for a star (no surface measurements; the
    /// shading backend drives granulation off seed + temperature alone).
    pub fn for_star(seed: f64, teff_k: f32) -> Self {
        Self {
            seed: seed as f32,
            detail: 1.0,
            density: 0.0,
            insolation: 0.0,
            surface_temp: (teff_k / 40_000.0).clamp(0.0, 1.0),
            star_temp: teff_k,
            hue_shift: seed::hue_shift(seed, channels::HUE),
            band_count: 0.0,
            band_jitter: 0.0,
            storm_latitude: 0.0,
            storm_longitude: 0.0,
            storm_size: 0.0,
            tint: [1.0, 1.0, 1.0],
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_of;

    fn gas_giant_record() -> PlanetRecord {
        PlanetRecord {
            name: Some("Jovian test".into()),
            density_gcc: Some(1.33),
            insolation_earth: Some(50.0),
            eq_temp_k: Some(800.0),
            ..Default::default()
        }
    }

    #[test]
    fn planet_params_deterministic() {
        let record = gas_giant_record();
        let seed = seed_of("Jovian test");
        let a = ShaderParams::for_planet(seed, PlanetClass::GasGiant, &record, 5778.0, 0.8);
        let b = ShaderParams::for_planet(seed, PlanetClass::GasGiant, &record, 5778.0, 0.8);
        assert_eq!(a, b);
    }

    #[test]
    fn gas_giant_gets_bands() {
        let record = gas_giant_record();
        let params =
            ShaderParams::for_planet(seed_of("Jovian test"), PlanetClass::GasGiant, &record, 5778.0, 0.8);
        assert!((4.0..=10.0).contains(&params.band_count));
    }

    #[test]
    fn rocky_planet_has_no_bands_or_storm() {
        let record = PlanetRecord::default();
        let params =
            ShaderParams::for_planet(seed_of("rocky"), PlanetClass::Terrestrial, &record, 5778.0, 0.3);
        assert_eq!(params.band_count, 0.0);
        assert_eq!(params.storm_size, 0.0);
    }

    #[test]
    fn missing_measurements_use_neutral_fallbacks() {
        let record = PlanetRecord::default();
        let params =
            ShaderParams::for_planet(seed_of("sparse"), PlanetClass::SuperEarth, &record, 5778.0, 0.5);
        assert!((params.density - 0.5).abs() < 1e-5);
        assert!(params.insolation > 0.0 && params.insolation < 0.2);
        assert!(params.surface_temp > 0.0 && params.surface_temp < 0.2);
    }

    #[test]
    fn hostile_inputs_stay_finite() {
        let record = PlanetRecord {
            density_gcc: Some(f64::NAN),
            insolation_earth: Some(f64::INFINITY),
            eq_temp_k: Some(-40.0),
            ..Default::default()
        };
        let params =
            ShaderParams::for_planet(seed_of("hostile"), PlanetClass::SubNeptune, &record, 5778.0, 0.5);
        assert!(params.density.is_finite());
        assert!((0.0..=1.0).contains(&params.insolation));
        assert!((0.0..=1.0).contains(&params.surface_temp));
    }

    #[test]
    fn star_params_tint_is_white() {
        let params = ShaderParams::for_star(seed_of("Kepler-22"), 5778.0);
        assert_eq!(params.tint, [1.0, 1.0, 1.0]);
        assert_eq!(params.band_count, 0.0);
    }
}
