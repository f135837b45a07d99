//! # Resource Trait & Load States
//!
//! [`Resource`] is the contract each loadable type satisfies so the controller can
//! run one generic fetch-or-fallback routine for all of them. It ties a Rust type
//! to its [`ResourceKind`], its fixed fallback value, and its slot inside
//! [`SessionState`].

use crate::controller::SessionState;
use crate::model::{Catalog, Greeting, Profile, ResourceKind};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Trait that any type loaded by the view controller must implement.
pub trait Resource: DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Which endpoint serves this resource.
    const KIND: ResourceKind;

    /// Constant substituted when the provider is unavailable.
    fn fallback() -> Self;

    fn slot(state: &SessionState) -> &LoadState<Self>;

    fn slot_mut(state: &mut SessionState) -> &mut LoadState<Self>;
}

impl Resource for Greeting {
    const KIND: ResourceKind = ResourceKind::Greeting;

    fn fallback() -> Self {
        Greeting::fallback()
    }

    fn slot(state: &SessionState) -> &LoadState<Self> {
        &state.greeting
    }

    fn slot_mut(state: &mut SessionState) -> &mut LoadState<Self> {
        &mut state.greeting
    }
}

impl Resource for Profile {
    const KIND: ResourceKind = ResourceKind::Profile;

    fn fallback() -> Self {
        Profile::fallback()
    }

    fn slot(state: &SessionState) -> &LoadState<Self> {
        &state.profile
    }

    fn slot_mut(state: &mut SessionState) -> &mut LoadState<Self> {
        &mut state.profile
    }
}

impl Resource for Catalog {
    const KIND: ResourceKind = ResourceKind::Catalog;

    fn fallback() -> Self {
        Catalog::fallback()
    }

    fn slot(state: &SessionState) -> &LoadState<Self> {
        &state.catalog
    }

    fn slot_mut(state: &mut SessionState) -> &mut LoadState<Self> {
        &mut state.catalog
    }
}

/// Per-resource state machine: `Unloaded -> Loading -> {Loaded | FallenBack}`.
///
/// `Loaded` and `FallenBack` are terminal for the session.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Unloaded,
    Loading,
    /// Value came from the provider.
    Loaded(T),
    /// Value is the fixed fallback.
    FallenBack(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Unloaded
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// True once a value is cached, whatever its origin.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::FallenBack(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadState::FallenBack(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) | LoadState::FallenBack(value) => Some(value),
            LoadState::Unloaded | LoadState::Loading => None,
        }
    }
}

/// What a `load` request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Already settled earlier in the session; nothing happened.
    Cached,
    /// Fetched from the provider.
    Loaded,
    /// Fallback value assigned.
    FallenBack,
}
