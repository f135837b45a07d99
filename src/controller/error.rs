//! Error types for the view controller plumbing.

use thiserror::Error;

/// Failures talking to the controller task itself.
///
/// Fetch failures never show up here; they degrade the session instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ControllerError {
    #[error("Controller closed")]
    ControllerClosed,
    #[error("Controller dropped response channel")]
    ControllerDropped,
}
