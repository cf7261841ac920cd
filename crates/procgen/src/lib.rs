//! Procedural generation for the exoviz scene core: seeds, colors, orbits,
//! scene graphs, and shader parameters.

pub mod animate;
pub mod color;
pub mod orbit;
pub mod scene;
pub mod seed;
pub mod shader_params;

pub use animate::*;
pub use color::*;
pub use orbit::*;
pub use scene::*;
pub use seed::*;
pub use shader_params::*;
