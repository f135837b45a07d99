//! Pure data structures for the three resources shown by the tabs.
//!
//! Each type carries its own fixed fallback value. The Data Provider serves the
//! same constants, so a degraded session looks the same as a live one apart from
//! the greeting text.

pub mod catalog;
pub mod greeting;
pub mod kind;
pub mod profile;

pub use catalog::*;
pub use greeting::*;
pub use kind::*;
pub use profile::*;
