//! Orbital animation: evaluates each body's ellipse against scene time and
//! publishes positions into the registry.
//!
//! The animator is the single writer for every body id it owns. Hosts must
//! tick it before the camera controller each frame so the camera reads
//! current-tick positions.

use engine_core::PositionRegistry;
use glam::Vec3;

use crate::orbit::{build_orbit, OrbitPath};
use crate::scene::CelestialBody;
use crate::seed::{self, channels};

#[derive(Debug, Clone)]
struct AnimEntry {
    id: String,
    path: OrbitPath,
    tilt: f32,
    /// Scene seconds per revolution; 0 pins the body at its phase angle.
    period: f32,
    /// Seeded starting angle so bodies don't launch aligned on one ray.
    phase: f32,
}

/// Drives every orbiting body's live position from the scene clock.
#[derive(Debug, Clone)]
pub struct OrbitAnimator {
    entries: Vec<AnimEntry>,
}

impl OrbitAnimator {
    /// Build an animator for a generated scene.
    pub fn new(bodies: &[CelestialBody]) -> Self {
        let entries = bodies
            .iter()
            .map(|body| AnimEntry {
                id: body.id.clone(),
                path: build_orbit(body.orbit_radius, body.eccentricity, body.companion),
                tilt: body.orbit_tilt,
                period: body.orbit_period.max(0.0),
                phase: seed::angle_of(seed::seed_of(&body.id), channels::ORBIT_PHASE),
            })
            .collect();
        Self { entries }
    }

    /// Position of one entry at scene time `t` (seconds).
    fn position_at(entry: &AnimEntry, t: f64) -> Vec3 {
        if entry.path.semi_major <= 0.0 {
            // The primary star and degenerate orbits sit at the origin.
            return Vec3::ZERO;
        }
        let theta = if entry.period > 0.0 {
            entry.phase + std::f32::consts::TAU * (t as f32 / entry.period)
        } else {
            entry.phase
        };
        let flat = entry.path.point_at(theta);
        // Tilt out of the reference plane about +X.
        Vec3::new(flat.x, flat.z * entry.tilt.sin(), flat.z * entry.tilt.cos())
    }

    /// Publish every body's position for scene time `t` into the registry.
    pub fn tick(&self, t: f64, registry: &mut PositionRegistry) {
        for entry in &self.entries {
            registry.publish(&entry.id, Self::position_at(entry, t));
        }
    }

    pub fn body_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::generate;
    use engine_core::{PlanetRecord, StarRecord};

    fn test_scene() -> Vec<CelestialBody> {
        let star = StarRecord {
            name: Some("Anim Star".into()),
            radius_solar: Some(1.0),
            teff_k: Some(5_778.0),
            ..Default::default()
        };
        let planet = PlanetRecord {
            name: Some("Anim Star b".into()),
            semi_major_axis_au: Some(1.0),
            period_days: Some(365.0),
            eccentricity: Some(0.2),
            ..Default::default()
        };
        generate(&star, &[planet])
    }

    #[test]
    fn primary_star_pinned_at_origin() {
        let bodies = test_scene();
        let animator = OrbitAnimator::new(&bodies);
        let mut registry = PositionRegistry::new();
        animator.tick(123.0, &mut registry);
        assert_eq!(registry.position("Anim Star"), Some(Vec3::ZERO));
    }

    #[test]
    fn planet_stays_on_its_ellipse() {
        let bodies = test_scene();
        let planet = &bodies[1];
        let path = planet.orbit_path();
        let animator = OrbitAnimator::new(&bodies);
        let mut registry = PositionRegistry::new();
        for step in 0..50 {
            animator.tick(step as f64 * 7.3, &mut registry);
            let p = registry.position(&planet.id).unwrap();
            // Undo the tilt, then check the implicit ellipse equation.
            let z_flat = (p.y * p.y + p.z * p.z).sqrt() * p.z.signum();
            let x_c = (p.x + path.focus_offset) / path.semi_major;
            let z_c = z_flat / path.semi_minor;
            assert!((x_c * x_c + z_c * z_c - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn full_period_returns_to_start() {
        let bodies = test_scene();
        let planet = &bodies[1];
        let animator = OrbitAnimator::new(&bodies);
        let mut registry = PositionRegistry::new();
        animator.tick(0.0, &mut registry);
        let start = registry.position(&planet.id).unwrap();
        animator.tick(planet.orbit_period as f64, &mut registry);
        let after = registry.position(&planet.id).unwrap();
        assert!((start - after).length() < 1e-3);
    }

    #[test]
    fn publishes_every_body() {
        let bodies = test_scene();
        let animator = OrbitAnimator::new(&bodies);
        let mut registry = PositionRegistry::new();
        animator.tick(0.0, &mut registry);
        assert_eq!(registry.len(), bodies.len());
        assert_eq!(animator.body_count(), bodies.len());
    }
}
