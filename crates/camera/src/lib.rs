//! Camera control for the exoviz scene core: framing, focus-follow, and
//! viewport responsiveness.

pub mod controller;
pub mod tuning;

pub use controller::*;
pub use tuning::*;
