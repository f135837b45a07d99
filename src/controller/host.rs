use std::fmt::Display;

/// The address the page is being served from.
///
/// Used once at session start to decide whether a Data Provider can exist at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    host: String,
}

impl HostEnvironment {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Host name without scheme, port, path or trailing dot, lowercased.
    ///
    /// IPv6 literals come back without their brackets.
    pub fn hostname(&self) -> String {
        let host = self.host.trim();
        let host = host
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(host);
        let host = host.split('/').next().unwrap_or(host);
        let host = match host.strip_prefix('[') {
            Some(literal) => literal.split(']').next().unwrap_or(literal),
            None => strip_port(host),
        };
        host.trim_end_matches('.').to_ascii_lowercase()
    }

    /// True when the host is one of `static_hosts` or a subdomain of one.
    pub fn is_static_hosting(&self, static_hosts: &[String]) -> bool {
        let hostname = self.hostname();
        static_hosts.iter().any(|suffix| {
            let suffix = suffix.trim().trim_start_matches('.').to_ascii_lowercase();
            !suffix.is_empty()
                && (hostname == suffix || hostname.ends_with(&format!(".{}", suffix)))
        })
    }
}

/// Drops a trailing `:port` only when it is numeric and the rest holds no other colon.
fn strip_port(host: &str) -> &str {
    let numeric = |port: &str| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit());
    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') && numeric(port) => name,
        _ => host,
    }
}

impl Display for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.host)
    }
}
