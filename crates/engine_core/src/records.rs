//! Catalog records: the raw measurements a data layer hands us.
//!
//! Every field is optional. Archive rows are sparse — a confirmed planet may
//! have a period but no radius, a radius but no mass, and so on. The scene
//! generator must accept any combination of present/absent fields, so nothing
//! here validates; records are plain carriers.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A host-star record. Units follow the archive conventions:
/// solar radii, Kelvin, log10 solar luminosities, gigayears, parsecs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarRecord {
    /// Host star name.
    #[serde(default)]
    pub name: Option<String>,
    /// Spectral type string, e.g. "G2V", "M8", "K5".
    #[serde(default)]
    pub spectral_type: Option<String>,
    /// Radius in solar radii.
    #[serde(default)]
    pub radius_solar: Option<f64>,
    /// Effective temperature in Kelvin.
    #[serde(default)]
    pub teff_k: Option<f64>,
    /// log10 of luminosity in solar units (Sun = 0).
    #[serde(default)]
    pub log_luminosity: Option<f64>,
    /// Age in gigayears.
    #[serde(default)]
    pub age_gyr: Option<f64>,
    /// Distance from Earth in parsecs.
    #[serde(default)]
    pub distance_pc: Option<f64>,
    /// Number of stars in the system (1 = single, 2 = binary, ...).
    #[serde(default)]
    pub num_stars: Option<u32>,
}

/// A planet record. Radii in Earth or Jupiter units, axis in AU,
/// period in days, temperatures in Kelvin, density in g/cm³,
/// insolation in Earth-flux units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// Planet name (e.g. "Kepler-22 b").
    #[serde(default)]
    pub name: Option<String>,
    /// Categorical type from the catalog ("Gas Giant", "Super-Earth", ...).
    #[serde(default)]
    pub type_name: Option<String>,
    /// Finer classification ("Hot Jupiter", "Ice World", ...).
    #[serde(default)]
    pub subtype_name: Option<String>,
    /// Radius in Earth radii.
    #[serde(default)]
    pub radius_earth: Option<f64>,
    /// Radius in Jupiter radii.
    #[serde(default)]
    pub radius_jupiter: Option<f64>,
    /// Mass in Earth masses (best estimate).
    #[serde(default)]
    pub mass_earth: Option<f64>,
    /// Orbital semi-major axis in AU.
    #[serde(default)]
    pub semi_major_axis_au: Option<f64>,
    /// Orbital period in days.
    #[serde(default)]
    pub period_days: Option<f64>,
    /// Orbital eccentricity.
    #[serde(default)]
    pub eccentricity: Option<f64>,
    /// Orbital inclination in degrees (~90 = edge-on transit geometry).
    #[serde(default)]
    pub inclination_deg: Option<f64>,
    /// Equilibrium temperature in Kelvin.
    #[serde(default)]
    pub eq_temp_k: Option<f64>,
    /// Bulk density in g/cm³.
    #[serde(default)]
    pub density_gcc: Option<f64>,
    /// Insolation flux in Earth units.
    #[serde(default)]
    pub insolation_earth: Option<f64>,
}

/// One system as handed to the scene generator: a star plus its planets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemRecord {
    pub star: StarRecord,
    #[serde(default)]
    pub planets: Vec<PlanetRecord>,
}

/// Errors loading a catalog file. Generation itself never fails; only the
/// I/O boundary does.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog format: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl SystemRecord {
    /// Load a system from a RON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let system: SystemRecord = ron::from_str(&data)?;
        log::debug!(
            "Loaded catalog {:?}: {} planet(s)",
            path.as_ref(),
            system.planets.len()
        );
        Ok(system)
    }
}
