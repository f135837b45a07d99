//! Session-scoped state owned by the view controller.
use crate::controller::{LoadState, Resource};
use crate::model::{Catalog, Greeting, Profile, ResourceKind};

/// Whether the Data Provider is believed reachable for this session.
///
/// Starts available. The first failure degrades it and nothing restores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    available: bool,
    reason: Option<String>,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            available: true,
            reason: None,
        }
    }
}

impl Availability {
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Why the session was degraded. Only the first reason is kept.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    fn degrade(&mut self, reason: String) {
        if self.available {
            self.available = false;
            self.reason = Some(reason);
        }
    }
}

/// Everything the rendering layer needs: availability plus one load state per
/// resource.
///
/// The controller owns the only mutable copy; clients receive clones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    availability: Availability,
    pub(crate) greeting: LoadState<Greeting>,
    pub(crate) profile: LoadState<Profile>,
    pub(crate) catalog: LoadState<Catalog>,
}

impl SessionState {
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    pub fn greeting(&self) -> &LoadState<Greeting> {
        &self.greeting
    }

    pub fn profile(&self) -> &LoadState<Profile> {
        &self.profile
    }

    pub fn catalog(&self) -> &LoadState<Catalog> {
        &self.catalog
    }

    pub fn get<T: Resource>(&self) -> &LoadState<T> {
        T::slot(self)
    }

    pub fn is_loading(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Greeting => self.greeting.is_loading(),
            ResourceKind::Profile => self.profile.is_loading(),
            ResourceKind::Catalog => self.catalog.is_loading(),
        }
    }

    pub fn is_settled(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Greeting => self.greeting.is_settled(),
            ResourceKind::Profile => self.profile.is_settled(),
            ResourceKind::Catalog => self.catalog.is_settled(),
        }
    }

    pub(crate) fn slot_mut<T: Resource>(&mut self) -> &mut LoadState<T> {
        T::slot_mut(self)
    }

    /// The single write path for availability.
    pub(crate) fn degrade(&mut self, reason: impl Into<String>) {
        self.availability.degrade(reason.into());
    }
}
