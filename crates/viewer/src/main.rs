//! exoviz - headless demo driver for the scene-generation and camera core.
//!
//! Loads a system catalog (RON) or falls back to a built-in Sun-like sample,
//! generates the scene graph, then runs a fixed number of frame ticks
//! exercising orbital animation, focus-follow, and a simulated viewport
//! rotation. A rendering layer would consume the same outputs per frame.

use anyhow::Result;
use camera::{CameraController, CameraMode, CameraTuning, Viewport};
use engine_core::{PlanetRecord, PositionRegistry, SceneClock, StarRecord, SystemRecord};
use procgen::{generate_system, BodyKind, OrbitAnimator};

const FRAME_DT: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u64 = 900;
const FOCUS_FRAME: u64 = 200;
const UNFOCUS_FRAME: u64 = 500;
const RESIZE_FRAME: u64 = 700;

/// Sun plus three familiar planets, for running without a catalog file.
fn sample_system() -> SystemRecord {
    SystemRecord {
        star: StarRecord {
            name: Some("Sol".into()),
            spectral_type: Some("G2V".into()),
            radius_solar: Some(1.0),
            teff_k: Some(5_778.0),
            log_luminosity: Some(0.0),
            num_stars: Some(1),
            ..Default::default()
        },
        planets: vec![
            PlanetRecord {
                name: Some("Mercury".into()),
                type_name: Some("Sub-Earth".into()),
                radius_earth: Some(0.38),
                semi_major_axis_au: Some(0.39),
                period_days: Some(88.0),
                eccentricity: Some(0.205),
                ..Default::default()
            },
            PlanetRecord {
                name: Some("Earth".into()),
                type_name: Some("Earth-sized".into()),
                radius_earth: Some(1.0),
                semi_major_axis_au: Some(1.0),
                period_days: Some(365.25),
                eccentricity: Some(0.017),
                density_gcc: Some(5.51),
                insolation_earth: Some(1.0),
                eq_temp_k: Some(255.0),
                ..Default::default()
            },
            PlanetRecord {
                name: Some("Jupiter".into()),
                type_name: Some("Gas Giant".into()),
                radius_jupiter: Some(1.0),
                semi_major_axis_au: Some(5.2),
                period_days: Some(4_332.0),
                eccentricity: Some(0.049),
                density_gcc: Some(1.33),
                ..Default::default()
            },
        ],
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let system = match args.next() {
        Some(path) => {
            log::info!("Loading catalog {}", path);
            SystemRecord::load(&path)?
        }
        None => {
            log::info!("No catalog given, using built-in sample system");
            sample_system()
        }
    };
    let tuning = match args.next() {
        Some(path) => CameraTuning::load(path),
        None => CameraTuning::default(),
    };

    let bodies = generate_system(&system);
    for body in &bodies {
        match body.kind {
            BodyKind::Star => log::info!(
                "{:<20} star{}  d={:.2}  T={:.0}K  emissive={:.2}",
                body.name,
                if body.companion { " (companion)" } else { "" },
                body.diameter,
                body.temperature_k,
                body.emissive.map(|e| e.intensity).unwrap_or(0.0),
            ),
            BodyKind::Planet => log::info!(
                "{:<20} {:?}  d={:.2}  orbit={:.1}  period={:.0}s  e={:.2}{}",
                body.name,
                body.class.unwrap_or(engine_core::PlanetClass::Terrestrial),
                body.diameter,
                body.orbit_radius,
                body.orbit_period,
                body.eccentricity,
                if body.rings { "  [rings]" } else { "" },
            ),
        }
    }

    // Pick the outermost planet as the focus subject for the demo run.
    let focus_id = bodies
        .iter()
        .filter(|b| b.kind == BodyKind::Planet)
        .last()
        .map(|b| b.id.clone());

    let mut clock = SceneClock::new();
    let mut registry = PositionRegistry::new();
    let animator = OrbitAnimator::new(&bodies);
    let mut controller = CameraController::new(tuning);
    controller.set_scene(&bodies);
    controller.set_on_click(Box::new(|id: &str| log::info!("clicked {}", id)));

    let mut viewport = Viewport::new(1920.0, 1080.0);
    let mut last_mode = controller.state().mode;

    for frame in 0..TOTAL_FRAMES {
        if frame == FOCUS_FRAME {
            if let Some(id) = focus_id.as_deref() {
                controller.set_focus(Some(id));
            }
        }
        if frame == UNFOCUS_FRAME {
            controller.set_focus(None);
        }
        if frame == RESIZE_FRAME {
            viewport = Viewport::new(1080.0, 1920.0);
            log::info!("viewport rotated to portrait");
        }

        // Ordering contract: clock, then animator publishes this tick's
        // positions, then the camera reads them.
        clock.tick(FRAME_DT as f64);
        animator.tick(clock.elapsed(), &mut registry);
        controller.tick(FRAME_DT, &registry, viewport);

        let state = controller.state();
        if state.mode != last_mode {
            log::info!(
                "frame {:>4}: camera {:?} -> {:?} (progress {:.2}, responsiveness {:.2})",
                frame,
                last_mode,
                state.mode,
                state.focus_progress,
                state.responsiveness,
            );
            last_mode = state.mode;
        }
    }

    let state = controller.state();
    log::info!(
        "done after {} frames: camera at {:.1?}, looking at {:.1?}",
        clock.frame_count(),
        state.position,
        state.target,
    );
    Ok(())
}
