use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u32);

impl Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// The user shown on the User tab.
///
/// `skills` keeps the order the provider sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub location: String,
    /// Years of experience.
    pub experience: u32,
    /// Number of completed projects.
    pub projects: u32,
    pub skills: Vec<String>,
}

impl Profile {
    /// The fixed profile, served by the provider and used as the fallback.
    pub fn fallback() -> Self {
        Self {
            id: ProfileId(1),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: "Senior Developer".to_string(),
            department: "Engineering".to_string(),
            location: "San Francisco, CA".to_string(),
            experience: 5,
            projects: 12,
            skills: ["JavaScript", "React", "Node.js", "Express"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
