use crate::model::ResourceKind;
use std::fmt::Display;

/// The three tabs of the page. Each shows exactly one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Welcome,
    User,
    Products,
}

impl Tab {
    /// Tabs in display order; `Welcome` is active when the page opens.
    pub const ALL: [Tab; 3] = [Tab::Welcome, Tab::User, Tab::Products];

    pub fn kind(self) -> ResourceKind {
        match self {
            Tab::Welcome => ResourceKind::Greeting,
            Tab::User => ResourceKind::Profile,
            Tab::Products => ResourceKind::Catalog,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Welcome => "Welcome",
            Tab::User => "User",
            Tab::Products => "Products",
        }
    }
}

impl From<ResourceKind> for Tab {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Greeting => Tab::Welcome,
            ResourceKind::Profile => Tab::User,
            ResourceKind::Catalog => Tab::Products,
        }
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
