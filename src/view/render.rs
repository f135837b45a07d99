//! Plain-text rendering of a tab from a [`SessionState`] snapshot.

use crate::controller::{LoadState, SessionState};
use crate::model::{Catalog, Greeting, Profile};
use crate::view::Tab;

pub const SPINNER: &str = "Loading...";

/// Renders `tab` as it should look for `state`.
///
/// A degraded session gets a banner above the content. The content is a spinner
/// while the resource loads and a placeholder if the tab was never activated.
pub fn render(tab: Tab, state: &SessionState) -> String {
    let mut lines = vec![format!("== {} ==", tab.title())];

    if !state.is_available() {
        let reason = state
            .availability()
            .reason()
            .map(|r| format!(" ({})", r))
            .unwrap_or_default();
        lines.push(format!("[offline] Showing fallback data{}", reason));
    }

    match tab {
        Tab::Welcome => render_slot(&mut lines, state.greeting(), render_greeting),
        Tab::User => render_slot(&mut lines, state.profile(), render_profile),
        Tab::Products => render_slot(&mut lines, state.catalog(), render_catalog),
    }

    lines.join("\n")
}

fn render_slot<T>(lines: &mut Vec<String>, slot: &LoadState<T>, body: fn(&T) -> Vec<String>) {
    match slot {
        LoadState::Unloaded => lines.push("Not loaded yet.".to_string()),
        LoadState::Loading => lines.push(SPINNER.to_string()),
        LoadState::Loaded(value) | LoadState::FallenBack(value) => lines.extend(body(value)),
    }
}

fn render_greeting(greeting: &Greeting) -> Vec<String> {
    vec![greeting.to_string()]
}

fn render_profile(profile: &Profile) -> Vec<String> {
    vec![
        format!("{} <{}>", profile.name, profile.email),
        format!("{}, {}", profile.role, profile.department),
        format!("Location: {}", profile.location),
        format!("Experience: {} years", profile.experience),
        format!("Projects: {}", profile.projects),
        format!("Skills: {}", profile.skills.join(", ")),
    ]
}

fn render_catalog(catalog: &Catalog) -> Vec<String> {
    catalog
        .items()
        .iter()
        .map(|p| {
            let stock = if p.in_stock { "In stock" } else { "Out of stock" };
            format!(
                "#{} {:<20} ${:>8.2}  {:<12} {}",
                p.id.0, p.name, p.price, p.category, stock
            )
        })
        .collect()
}
