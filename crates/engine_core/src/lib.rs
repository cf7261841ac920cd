//! Core types and utilities for the exoviz scene core.
//!
//! This crate provides the foundational types used across all systems:
//! - Catalog records (star/planet measurements, every field optional)
//! - Stellar and planetary classification
//! - Scene-time clock
//! - The body-position registry read by the camera each frame

pub mod classify;
pub mod clock;
pub mod records;
pub mod registry;

pub use classify::*;
pub use clock::*;
pub use records::*;
pub use registry::*;

// Re-export commonly used math types
pub use glam::{Vec2, Vec3};
