//! Orbit geometry: ellipse parameters and sampled paths.
//!
//! Purely visual — no Kepler solving here. A planet orbits a focus of its
//! ellipse, so the path is offset by `c = a·e` along +X; binary companions
//! orbit the barycenter, so their path is centered (`c = 0`).

use glam::Vec3;
use std::f32::consts::TAU;

/// Number of uniform angular samples per path (plus a closing point).
pub const ORBIT_SAMPLES: usize = 128;

/// Eccentricity clamp ceiling. Values at or above 1 are non-periodic and must
/// never reach the geometry unclamped.
pub const MAX_ECCENTRICITY: f32 = 0.99;

/// Above this eccentricity an orbit is presented as visibly elliptical.
pub const ECCENTRIC_THRESHOLD: f32 = 0.1;

/// Presentation class of an orbit. Exposed because downstream rendering
/// treats the three classes differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitClass {
    /// Barycenter-centered companion-star orbit.
    Binary,
    /// Eccentricity above [`ECCENTRIC_THRESHOLD`].
    Eccentric,
    /// Near-circular.
    Circular,
}

/// A sampled elliptical orbit in the XZ plane.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    /// Semi-major axis (scene units).
    pub semi_major: f32,
    /// Semi-minor axis `a·sqrt(1 - e²)`.
    pub semi_minor: f32,
    /// Focus offset `a·e`, or 0 for barycentric orbits.
    pub focus_offset: f32,
    /// Clamped eccentricity actually used.
    pub eccentricity: f32,
    pub class: OrbitClass,
    /// Closed polyline: `ORBIT_SAMPLES + 1` points, first == last.
    /// Degenerate (a <= 0) orbits collapse to a single point.
    pub points: Vec<Vec3>,
}

impl OrbitPath {
    /// Point on the ellipse at parametric angle `theta`.
    #[inline]
    pub fn point_at(&self, theta: f32) -> Vec3 {
        Vec3::new(
            self.semi_major * theta.cos() - self.focus_offset,
            0.0,
            self.semi_minor * theta.sin(),
        )
    }
}

/// Build a sampled orbit from semi-major axis and eccentricity.
///
/// `e` is clamped to `[0, 0.99]`; `a <= 0` yields a degenerate single-point
/// path rather than dividing by zero anywhere downstream.
pub fn build_orbit(semi_major: f32, eccentricity: f32, barycentric: bool) -> OrbitPath {
    let e = if eccentricity.is_finite() {
        eccentricity.clamp(0.0, MAX_ECCENTRICITY)
    } else {
        0.0
    };
    let a = if semi_major.is_finite() { semi_major } else { 0.0 };

    let class = if barycentric {
        OrbitClass::Binary
    } else if e > ECCENTRIC_THRESHOLD {
        OrbitClass::Eccentric
    } else {
        OrbitClass::Circular
    };

    if a <= 0.0 {
        return OrbitPath {
            semi_major: 0.0,
            semi_minor: 0.0,
            focus_offset: 0.0,
            eccentricity: e,
            class,
            points: vec![Vec3::ZERO],
        };
    }

    let b = a * (1.0 - e * e).sqrt();
    let c = if barycentric { 0.0 } else { a * e };

    let mut points = Vec::with_capacity(ORBIT_SAMPLES + 1);
    for i in 0..=ORBIT_SAMPLES {
        let theta = TAU * i as f32 / ORBIT_SAMPLES as f32;
        points.push(Vec3::new(a * theta.cos() - c, 0.0, b * theta.sin()));
    }
    OrbitPath {
        semi_major: a,
        semi_minor: b,
        focus_offset: c,
        eccentricity: e,
        class,
        points,
    }
}
