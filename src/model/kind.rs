use std::fmt::Display;

/// The three resources a session can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Greeting,
    Profile,
    Catalog,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Greeting, Self::Profile, Self::Catalog];

    /// Path of the provider endpoint serving this resource.
    pub fn path(self) -> &'static str {
        match self {
            Self::Greeting => "/api/hello",
            Self::Profile => "/api/user",
            Self::Catalog => "/api/products",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Greeting => "greeting",
            Self::Profile => "profile",
            Self::Catalog => "catalog",
        };
        f.write_str(name)
    }
}
