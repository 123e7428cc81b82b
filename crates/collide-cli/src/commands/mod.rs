//! CLI command implementations.

pub mod common;
pub mod follow;
pub mod pan;
pub mod presets;
pub mod render;
pub mod vca;
