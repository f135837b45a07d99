//! Transport clients the view controller fetches through.

pub mod data_provider;
pub mod http_provider;

pub use data_provider::*;
pub use http_provider::*;
