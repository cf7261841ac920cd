//! Stellar and planetary classification.
//!
//! Spectral class comes from the catalog's spectral-type string when present,
//! with an effective-temperature fallback. Planet class comes from the
//! catalog's categorical label, with a radius-threshold fallback. Both sides
//! of each fallback chain use the same fixed boundaries so classification is
//! deterministic for any input.

use crate::records::{PlanetRecord, StarRecord};

/// Main stellar classes, hot to cool. L/T/Y cover brown dwarfs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y,
}

impl StarClass {
    /// Parse the class letter from a spectral-type string ("G2V" -> G).
    pub fn from_spectral_type(spectype: &str) -> Option<Self> {
        match spectype.trim().chars().next()?.to_ascii_uppercase() {
            'O' => Some(StarClass::O),
            'B' => Some(StarClass::B),
            'A' => Some(StarClass::A),
            'F' => Some(StarClass::F),
            'G' => Some(StarClass::G),
            'K' => Some(StarClass::K),
            'M' => Some(StarClass::M),
            'L' => Some(StarClass::L),
            'T' => Some(StarClass::T),
            'Y' => Some(StarClass::Y),
            _ => None,
        }
    }

    /// Infer class from effective temperature (standard boundaries).
    pub fn from_temperature(teff_k: f64) -> Self {
        if teff_k >= 30_000.0 {
            StarClass::O
        } else if teff_k >= 10_000.0 {
            StarClass::B
        } else if teff_k >= 7_500.0 {
            StarClass::A
        } else if teff_k >= 6_000.0 {
            StarClass::F
        } else if teff_k >= 5_200.0 {
            StarClass::G
        } else if teff_k >= 3_700.0 {
            StarClass::K
        } else if teff_k >= 2_400.0 {
            StarClass::M
        } else if teff_k >= 1_300.0 {
            StarClass::L
        } else if teff_k >= 550.0 {
            StarClass::T
        } else {
            StarClass::Y
        }
    }

    /// Representative effective temperature for the class, used when a record
    /// carries a spectral type but no measured temperature.
    pub fn representative_teff(&self) -> f64 {
        match self {
            StarClass::O => 35_000.0,
            StarClass::B => 15_000.0,
            StarClass::A => 8_500.0,
            StarClass::F => 6_750.0,
            StarClass::G => 5_600.0,
            StarClass::K => 4_400.0,
            StarClass::M => 3_000.0,
            StarClass::L => 1_800.0,
            StarClass::T => 900.0,
            StarClass::Y => 400.0,
        }
    }
}

/// Classify a star record: spectral type first, temperature fallback.
/// Returns None only when the record has neither.
pub fn star_class(star: &StarRecord) -> Option<StarClass> {
    if let Some(spectype) = star.spectral_type.as_deref() {
        if let Some(class) = StarClass::from_spectral_type(spectype) {
            return Some(class);
        }
    }
    star.teff_k.map(StarClass::from_temperature)
}

/// Planet size/composition classes from the catalog's scheme.
/// `Terrestrial` is the neutral entry unrecognized or missing types map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetClass {
    SubEarth,
    EarthSized,
    SuperEarth,
    SubNeptune,
    NeptuneLike,
    GasGiant,
    Terrestrial,
}

impl PlanetClass {
    /// Parse a catalog type label. Unrecognized -> None (caller decides the
    /// fallback chain).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "sub-earth" => Some(PlanetClass::SubEarth),
            "earth-sized" | "earth-like" => Some(PlanetClass::EarthSized),
            "super-earth" | "super earth" => Some(PlanetClass::SuperEarth),
            "sub-neptune" | "mini-neptune" => Some(PlanetClass::SubNeptune),
            "neptune-like" | "neptunian" => Some(PlanetClass::NeptuneLike),
            "gas giant" | "jovian" => Some(PlanetClass::GasGiant),
            "terrestrial" | "rocky" => Some(PlanetClass::Terrestrial),
            _ => None,
        }
    }

    /// Radius-threshold classification in Earth radii
    /// (1.0 / 1.25 / 2.0 / 4.0 / 10.0 boundaries).
    pub fn from_radius_earth(radius: f64) -> Self {
        if radius < 1.0 {
            PlanetClass::SubEarth
        } else if radius < 1.25 {
            PlanetClass::EarthSized
        } else if radius < 2.0 {
            PlanetClass::SuperEarth
        } else if radius < 4.0 {
            PlanetClass::SubNeptune
        } else if radius < 10.0 {
            PlanetClass::NeptuneLike
        } else {
            PlanetClass::GasGiant
        }
    }
}

/// Classify a planet record: label first, then radius, then the neutral
/// terrestrial default. Never fails.
pub fn planet_class(planet: &PlanetRecord) -> PlanetClass {
    if let Some(label) = planet.type_name.as_deref() {
        if let Some(class) = PlanetClass::from_label(label) {
            return class;
        }
    }
    let radius_earth = planet
        .radius_earth
        .or(planet.radius_jupiter.map(|rj| rj * 11.2));
    match radius_earth {
        Some(r) if r > 0.0 => PlanetClass::from_radius_earth(r),
        _ => PlanetClass::Terrestrial,
    }
}
