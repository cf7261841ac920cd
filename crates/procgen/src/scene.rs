//! Scene generation: catalog records in, renderable body graph out.
//!
//! `generate` never fails. Every missing or malformed measurement falls back
//! to a documented default, every division is zero-guarded, and geometric
//! inputs are clamped before use. A completely empty star record still
//! produces a Sun-like scene, because downstream rendering has no other way
//! to recover.

use engine_core::{planet_class, star_class, PlanetClass, PlanetRecord, StarRecord, SystemRecord};
use glam::Vec3;

use crate::color::temperature_to_color;
use crate::orbit::{build_orbit, OrbitPath};
use crate::seed::{self, channels};
use crate::shader_params::ShaderParams;

/// Scene diameter per solar radius below the knee (Sun -> 2.0 units).
const STAR_DIAMETER_PER_SOLAR_RADIUS: f32 = 2.0;
/// Above this radius (solar radii) star sizing switches to the log branch so
/// super-giant hosts stop dwarfing the scene.
pub const STAR_SIZE_KNEE_SOLAR: f32 = 5.0;
/// Fallbacks for an empty star record: Sun-like.
const STAR_RADIUS_FALLBACK_SOLAR: f64 = 1.0;
const SUN_TEFF_K: f64 = 5_778.0;

/// Emissive intensity: baseline plus a capped luminosity term.
const EMISSIVE_BASE: f32 = 1.0;
const EMISSIVE_GAIN: f32 = 0.5;
const EMISSIVE_MAX_TERM: f32 = 3.0;

/// Planets with no usable semi-major axis sort after everything real.
const AXIS_FALLBACK_AU: f64 = 999.0;
/// Log compression of AU into scene units.
const ORBIT_LOG_SCALE: f32 = 14.0;
const ORBIT_LOG_GAIN: f32 = 4.0;
/// Clearance between the star's surface and the innermost allowed orbit.
pub const ORBIT_PADDING: f32 = 2.0;
/// Per-index outward step; keeps tied or missing axes strictly ordered.
const ORBIT_INDEX_STEP: f32 = 0.5;

/// 1 Jupiter radius in Earth radii.
const EARTH_RADII_PER_JUPITER: f64 = 11.2;
/// Scene diameter per Jupiter radius, and the visual clamp band.
const PLANET_DIAMETER_PER_JUPITER: f32 = 1.6;
const PLANET_DIAMETER_MIN: f32 = 0.18;
const PLANET_DIAMETER_MAX: f32 = 2.4;
/// Default size for a planet with no radius at all (Neptune-ish).
const PLANET_RADIUS_FALLBACK_JUPITER: f64 = 0.35;

/// Animation period: baseline plus sqrt of the physical period, so outer
/// planets stay visibly moving.
const ANIM_PERIOD_BASE: f32 = 200.0;
const ANIM_PERIOD_GAIN: f32 = 5.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Transit inclinations map to scene tilt, clamped so orbits stay readable.
const TILT_MAX_RAD: f32 = 0.35;

/// Hard cap on generated companion stars.
const MAX_COMPANIONS: u32 = 3;

/// Star or planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
}

/// Self-lit surface parameters (stars only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissive {
    pub color: Vec3,
    pub intensity: f32,
}

/// One body in a generated scene. Immutable after generation; a new input
/// produces a wholly new `Vec<CelestialBody>`.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    /// Stable identifier; also the seed source and the registry key.
    pub id: String,
    pub name: String,
    pub kind: BodyKind,
    /// Companion stars orbit the barycenter and are flagged here.
    pub companion: bool,
    /// Visual diameter in scene units, always positive.
    pub diameter: f32,
    pub base_color: Vec3,
    /// Stars only.
    pub emissive: Option<Emissive>,
    /// Effective or equilibrium temperature in Kelvin.
    pub temperature_k: f32,
    /// None for stars.
    pub class: Option<PlanetClass>,
    /// Atmosphere thickness factor, [0, 1].
    pub atmosphere: f32,
    /// Scene units; 0 for the primary star.
    pub orbit_radius: f32,
    /// Scene time units per revolution; 0 for the primary star.
    pub orbit_period: f32,
    /// Radians out of the reference plane.
    pub orbit_tilt: f32,
    /// Clamped to [0, 0.99].
    pub eccentricity: f32,
    pub rings: bool,
    pub shader_params: ShaderParams,
    /// Index into the originating planet record slice; None for stars.
    /// Read-only back-reference for downstream display.
    pub source_index: Option<usize>,
}

impl CelestialBody {
    /// Derived orbit geometry for this body. Companion stars get
    /// barycenter-centered (binary-class) paths.
    pub fn orbit_path(&self) -> OrbitPath {
        build_orbit(self.orbit_radius, self.eccentricity, self.companion)
    }

    pub fn is_primary_star(&self) -> bool {
        self.kind == BodyKind::Star && !self.companion
    }
}

/// Piecewise star sizing: linear below the knee, logarithmic above it.
/// The two branches agree exactly at the knee.
pub fn star_scene_diameter(radius_solar: f32) -> f32 {
    let r = if radius_solar.is_finite() && radius_solar > 0.0 {
        radius_solar
    } else {
        STAR_RADIUS_FALLBACK_SOLAR as f32
    };
    let knee = STAR_SIZE_KNEE_SOLAR;
    if r <= knee {
        STAR_DIAMETER_PER_SOLAR_RADIUS * r
    } else {
        STAR_DIAMETER_PER_SOLAR_RADIUS * knee * (1.0 + (r / knee).ln())
    }
}

/// Log-compress a semi-major axis in AU into orbit scene units
/// (pre-clamp, pre-index-step).
fn compress_axis(axis_au: f64) -> f32 {
    ORBIT_LOG_SCALE * (1.0 + ORBIT_LOG_GAIN * axis_au as f32).ln()
}

/// Inverse of `compress_axis`; used to give synthesized orbits (companions)
/// a consistent Kepler-estimated period.
fn scene_radius_to_au(radius: f32) -> f64 {
    (((radius / ORBIT_LOG_SCALE).exp() - 1.0) / ORBIT_LOG_GAIN).max(0.0) as f64
}

/// Usable positive finite value, or None.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Scene animation period from a physical period in days.
fn animation_period(period_days: f64) -> f32 {
    ANIM_PERIOD_BASE + ANIM_PERIOD_GAIN * (period_days.max(0.0) as f32).sqrt()
}

/// Kepler third-law period estimate (days) for a solar-mass host.
fn kepler_period_days(axis_au: f64) -> f64 {
    DAYS_PER_YEAR * axis_au.max(0.0).powf(1.5)
}

/// Rings per class: only gas giants ring up. Fixed table, not seeded, so a
/// body's silhouette never flickers across rebuilds of a changing catalog.
fn class_rings(class: PlanetClass) -> bool {
    matches!(class, PlanetClass::GasGiant)
}

/// Atmosphere thickness factor per class, [0, 1].
fn class_atmosphere(class: PlanetClass) -> f32 {
    match class {
        PlanetClass::GasGiant => 1.0,
        PlanetClass::NeptuneLike => 0.9,
        PlanetClass::SubNeptune => 0.7,
        PlanetClass::SuperEarth => 0.45,
        PlanetClass::EarthSized => 0.4,
        PlanetClass::Terrestrial => 0.3,
        PlanetClass::SubEarth => 0.15,
    }
}

/// Small fixed palette per class. Same-type siblings rotate through it by
/// orbital position so they stay distinguishable.
fn class_palette(class: PlanetClass) -> [Vec3; 3] {
    match class {
        PlanetClass::GasGiant => [
            Vec3::new(0.76, 0.60, 0.42),
            Vec3::new(0.82, 0.70, 0.52),
            Vec3::new(0.65, 0.48, 0.36),
        ],
        PlanetClass::NeptuneLike => [
            Vec3::new(0.25, 0.41, 0.88),
            Vec3::new(0.33, 0.55, 0.85),
            Vec3::new(0.20, 0.35, 0.70),
        ],
        PlanetClass::SubNeptune => [
            Vec3::new(0.42, 0.62, 0.76),
            Vec3::new(0.52, 0.70, 0.78),
            Vec3::new(0.36, 0.54, 0.68),
        ],
        PlanetClass::SuperEarth => [
            Vec3::new(0.55, 0.48, 0.38),
            Vec3::new(0.48, 0.55, 0.42),
            Vec3::new(0.60, 0.52, 0.46),
        ],
        PlanetClass::EarthSized => [
            Vec3::new(0.28, 0.46, 0.60),
            Vec3::new(0.34, 0.52, 0.44),
            Vec3::new(0.45, 0.44, 0.36),
        ],
        PlanetClass::SubEarth => [
            Vec3::new(0.55, 0.52, 0.50),
            Vec3::new(0.62, 0.58, 0.55),
            Vec3::new(0.47, 0.45, 0.44),
        ],
        PlanetClass::Terrestrial => [
            Vec3::new(0.52, 0.46, 0.40),
            Vec3::new(0.58, 0.52, 0.44),
            Vec3::new(0.46, 0.42, 0.38),
        ],
    }
}

/// Generate the scene graph for one system. Body order: primary star, then
/// planets ascending by semi-major axis, then flagged companion stars.
pub fn generate(star: &StarRecord, planets: &[PlanetRecord]) -> Vec<CelestialBody> {
    let mut bodies = Vec::with_capacity(planets.len() + 1);

    let star_name = star
        .name
        .clone()
        .unwrap_or_else(|| "Unnamed Star".to_string());
    if star.radius_solar.is_none() && star.teff_k.is_none() && star.log_luminosity.is_none() {
        log::warn!("star record {:?} has no usable measurements, using Sun-like defaults", star_name);
    }

    // Spectral class stands in for a missing temperature measurement.
    let teff = usable(star.teff_k)
        .or_else(|| star_class(star).map(|c| c.representative_teff()))
        .unwrap_or(SUN_TEFF_K) as f32;
    let star_diameter =
        star_scene_diameter(star.radius_solar.unwrap_or(STAR_RADIUS_FALLBACK_SOLAR) as f32);
    let log_lum = star.log_luminosity.filter(|l| l.is_finite()).unwrap_or(0.0) as f32;
    let emissive_intensity = EMISSIVE_BASE + (EMISSIVE_GAIN * 10f32.powf(log_lum)).min(EMISSIVE_MAX_TERM);
    let star_color = temperature_to_color(teff);
    let star_seed = seed::seed_of(&star_name);

    bodies.push(CelestialBody {
        id: star_name.clone(),
        name: star_name.clone(),
        kind: BodyKind::Star,
        companion: false,
        diameter: star_diameter,
        base_color: star_color,
        emissive: Some(Emissive {
            color: star_color,
            intensity: emissive_intensity,
        }),
        temperature_k: teff,
        class: None,
        atmosphere: 0.0,
        orbit_radius: 0.0,
        orbit_period: 0.0,
        orbit_tilt: 0.0,
        eccentricity: 0.0,
        rings: false,
        shader_params: ShaderParams::for_star(star_seed, teff),
        source_index: None,
    });

    // Sort planets ascending by axis; unknown axes take the far sentinel so
    // they land at the outside instead of corrupting the ordering.
    let mut order: Vec<usize> = (0..planets.len()).collect();
    order.sort_by(|&a, &b| {
        let ka = usable(planets[a].semi_major_axis_au).unwrap_or(AXIS_FALLBACK_AU);
        let kb = usable(planets[b].semi_major_axis_au).unwrap_or(AXIS_FALLBACK_AU);
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });

    // Track type repetition for palette rotation.
    let mut outermost = star_diameter / 2.0 + ORBIT_PADDING;
    for (orbit_index, &source_index) in order.iter().enumerate() {
        let record = &planets[source_index];
        let body = generate_planet(record, source_index, orbit_index, star_diameter, teff, &star_name);
        outermost = outermost.max(body.orbit_radius);
        bodies.push(body);
    }

    // Companion stars from the system's star count, on barycentric orbits
    // outside the outermost planet.
    let companion_count = star
        .num_stars
        .unwrap_or(1)
        .saturating_sub(1)
        .min(MAX_COMPANIONS);
    for k in 0..companion_count {
        let body = generate_companion(k, &star_name, star_diameter, teff, outermost);
        outermost = outermost.max(body.orbit_radius);
        bodies.push(body);
    }

    log::debug!(
        "generated scene for {:?}: {} bodies, outermost orbit {:.1}",
        star_name,
        bodies.len(),
        outermost
    );
    bodies
}

/// Convenience wrapper over [`generate`] for a loaded catalog record.
pub fn generate_system(system: &SystemRecord) -> Vec<CelestialBody> {
    generate(&system.star, &system.planets)
}

fn generate_planet(
    record: &PlanetRecord,
    source_index: usize,
    orbit_index: usize,
    star_diameter: f32,
    host_teff: f32,
    star_name: &str,
) -> CelestialBody {
    let name = record
        .name
        .clone()
        .unwrap_or_else(|| format!("{} planet {}", star_name, source_index + 1));
    let body_seed = seed::seed_of(&name);
    let class = planet_class(record);

    // Size: Jupiter radii, Earth-radii conversion fallback, clamped band.
    let radius_jupiter = usable(record.radius_jupiter)
        .or_else(|| usable(record.radius_earth).map(|re| re / EARTH_RADII_PER_JUPITER))
        .unwrap_or(PLANET_RADIUS_FALLBACK_JUPITER);
    let diameter = (PLANET_DIAMETER_PER_JUPITER * radius_jupiter as f32)
        .clamp(PLANET_DIAMETER_MIN, PLANET_DIAMETER_MAX);
    let detail = (diameter - PLANET_DIAMETER_MIN) / (PLANET_DIAMETER_MAX - PLANET_DIAMETER_MIN);

    // Orbit: log-compressed axis, floored outside the star, stepped by index.
    let axis_au = usable(record.semi_major_axis_au).unwrap_or(AXIS_FALLBACK_AU);
    let orbit_floor = star_diameter / 2.0 + ORBIT_PADDING;
    let orbit_radius =
        compress_axis(axis_au).max(orbit_floor) + (orbit_index as f32 + 1.0) * ORBIT_INDEX_STEP;

    let period_days = usable(record.period_days).unwrap_or_else(|| kepler_period_days(axis_au));
    let orbit_period = animation_period(period_days);

    let orbit_tilt = record
        .inclination_deg
        .filter(|i| i.is_finite())
        .map(|i| ((i - 90.0).to_radians() as f32).clamp(-TILT_MAX_RAD, TILT_MAX_RAD))
        .unwrap_or(0.0);

    let eccentricity = record
        .eccentricity
        .filter(|e| e.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 0.99) as f32;

    // Palette rotation by orbital position, then a subtle seeded value shift.
    let palette = class_palette(class);
    let swatch = palette[orbit_index % palette.len()];
    let base_color = (swatch * (1.0 + seed::value_shift(body_seed, channels::VALUE)))
        .clamp(Vec3::ZERO, Vec3::ONE);

    CelestialBody {
        id: name.clone(),
        name,
        kind: BodyKind::Planet,
        companion: false,
        diameter,
        base_color,
        emissive: None,
        temperature_k: usable(record.eq_temp_k).unwrap_or(255.0) as f32,
        class: Some(class),
        atmosphere: class_atmosphere(class),
        orbit_radius,
        orbit_period,
        orbit_tilt,
        eccentricity,
        rings: class_rings(class),
        shader_params: ShaderParams::for_planet(body_seed, class, record, host_teff, detail),
        source_index: Some(source_index),
    }
}

fn generate_companion(
    k: u32,
    star_name: &str,
    primary_diameter: f32,
    primary_teff: f32,
    outermost: f32,
) -> CelestialBody {
    let letter = (b'B' + k as u8) as char;
    let name = format!("{} {}", star_name, letter);
    let body_seed = seed::seed_of(&name);

    // Cooler, smaller secondary; each further companion shrinks again.
    let diameter = (primary_diameter * 0.6f32.powi(k as i32 + 1)).max(0.5);
    let teff = primary_teff * 0.75;
    let color = temperature_to_color(teff);

    let orbit_radius = outermost * 1.4 + k as f32 * 6.0;
    let period_days = kepler_period_days(scene_radius_to_au(orbit_radius));
    let eccentricity = seed::scale_between(body_seed, channels::ECCENTRICITY, 0.05, 0.3);
    let orbit_tilt = seed::scale_between(body_seed, channels::ORBIT_TILT, -0.15, 0.15);

    CelestialBody {
        id: name.clone(),
        name,
        kind: BodyKind::Star,
        companion: true,
        diameter,
        base_color: color,
        emissive: Some(Emissive {
            color,
            intensity: EMISSIVE_BASE,
        }),
        temperature_k: teff,
        class: None,
        atmosphere: 0.0,
        orbit_radius,
        orbit_period: animation_period(period_days),
        orbit_tilt,
        eccentricity,
        rings: false,
        shader_params: ShaderParams::for_star(body_seed, teff),
        source_index: None,
    }
}
