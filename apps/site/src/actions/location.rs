//! Current-address lookup.
//!
//! The address is read once when a share session mounts; there is no live
//! subscription. Empty strings count as "not known".

/// Returns the full address of the currently displayed page, if known.
pub trait LocationHost: Send + Sync {
    fn current_address(&self) -> Option<String>;
}

/// A fixed address, e.g. the configured `PUBLIC_URL`.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub String);

impl LocationHost for FixedLocation {
    fn current_address(&self) -> Option<String> {
        normalize(Some(self.0.clone()))
    }
}

/// Address of an incoming HTTP request, built from its `Host` header and path.
#[derive(Debug, Clone)]
pub struct RequestLocation {
    pub host: Option<String>,
    pub path: String,
}

impl LocationHost for RequestLocation {
    fn current_address(&self) -> Option<String> {
        let host = self.host.as_deref().map(str::trim).filter(|h| !h.is_empty())?;
        Some(format!("http://{}{}", host, self.path))
    }
}

/// Maps empty or whitespace-only addresses to `None`.
pub fn normalize(address: Option<String>) -> Option<String> {
    address.filter(|a| !a.trim().is_empty())
}
