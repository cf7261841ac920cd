//! Camera tuning constants. Loaded from `camera.ron` when present.
//!
//! These are tuning values, not contract: the resize thresholds and smoothing
//! rates can be adjusted per deployment without touching controller logic.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smoothing rates are exponential (units: 1/second); ramp speed is
/// progress-per-second; thresholds compare responsiveness multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraTuning {
    /// Aspect ratio the framing constants were tuned against.
    #[serde(default = "default_reference_aspect")]
    pub reference_aspect: f32,
    /// Responsiveness-multiplier delta that triggers resize adjustment.
    #[serde(default = "default_resize_enter")]
    pub resize_enter: f32,
    /// Smaller settle threshold that ends resize adjustment.
    #[serde(default = "default_resize_settle")]
    pub resize_settle: f32,
    /// Smoothing rate while chasing a newly focused body.
    #[serde(default = "default_chase_rate")]
    pub chase_rate: f32,
    /// Smoothing rate once locked on (chase blends into this as focus
    /// progress saturates).
    #[serde(default = "default_follow_rate")]
    pub follow_rate: f32,
    /// Slower rate for returning/resize framing so manual framing is only
    /// overridden while something is actively in progress.
    #[serde(default = "default_return_rate")]
    pub return_rate: f32,
    /// Focus progress gained per second.
    #[serde(default = "default_focus_ramp")]
    pub focus_ramp: f32,
    /// Idle scene rotation in radians per second.
    #[serde(default = "default_auto_rotate_speed")]
    pub auto_rotate_speed: f32,
    /// Clamp band for the responsiveness multiplier.
    #[serde(default = "default_responsiveness_min")]
    pub responsiveness_min: f32,
    #[serde(default = "default_responsiveness_max")]
    pub responsiveness_max: f32,
    /// Default distance = max(star_diameter * this, ...).
    #[serde(default = "default_star_distance_factor")]
    pub star_distance_factor: f32,
    /// ... max(..., outermost_orbit * this).
    #[serde(default = "default_orbit_distance_factor")]
    pub orbit_distance_factor: f32,
    /// Focused viewing distance as a multiple of the body diameter.
    #[serde(default = "default_focus_distance_factor")]
    pub focus_distance_factor: f32,
    /// Floor on the focused viewing distance.
    #[serde(default = "default_focus_distance_min")]
    pub focus_distance_min: f32,
    /// Default-pose height as a fraction of the default distance.
    #[serde(default = "default_elevation")]
    pub elevation: f32,
}

fn default_reference_aspect() -> f32 {
    16.0 / 9.0
}
fn default_resize_enter() -> f32 {
    0.05
}
fn default_resize_settle() -> f32 {
    0.01
}
fn default_chase_rate() -> f32 {
    2.5
}
fn default_follow_rate() -> f32 {
    8.0
}
fn default_return_rate() -> f32 {
    1.5
}
fn default_focus_ramp() -> f32 {
    1.2
}
fn default_auto_rotate_speed() -> f32 {
    0.05
}
fn default_responsiveness_min() -> f32 {
    0.75
}
fn default_responsiveness_max() -> f32 {
    2.5
}
fn default_star_distance_factor() -> f32 {
    6.0
}
fn default_orbit_distance_factor() -> f32 {
    1.15
}
fn default_focus_distance_factor() -> f32 {
    4.0
}
fn default_focus_distance_min() -> f32 {
    1.5
}
fn default_elevation() -> f32 {
    0.35
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            reference_aspect: default_reference_aspect(),
            resize_enter: default_resize_enter(),
            resize_settle: default_resize_settle(),
            chase_rate: default_chase_rate(),
            follow_rate: default_follow_rate(),
            return_rate: default_return_rate(),
            focus_ramp: default_focus_ramp(),
            auto_rotate_speed: default_auto_rotate_speed(),
            responsiveness_min: default_responsiveness_min(),
            responsiveness_max: default_responsiveness_max(),
            star_distance_factor: default_star_distance_factor(),
            orbit_distance_factor: default_orbit_distance_factor(),
            focus_distance_factor: default_focus_distance_factor(),
            focus_distance_min: default_focus_distance_min(),
            elevation: default_elevation(),
        }
    }
}

impl CameraTuning {
    /// Load tuning from a RON file. Missing or invalid files fall back to
    /// defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(data) => match ron::from_str(&data) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::warn!("Invalid camera tuning at {:?}: {}, using defaults", path.as_ref(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
