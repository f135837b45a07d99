//! The rendering layer: tabs and their text output.

pub mod render;
pub mod tab;

pub use render::*;
pub use tab::*;
