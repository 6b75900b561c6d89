//! Contact action links derived from the stored contact strings.

use crate::models::ContactInfo;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Location,
    Email,
    Github,
    Linkedin,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Location => "location",
            ContactKind::Email => "email",
            ContactKind::Github => "github",
            ContactKind::Linkedin => "linkedin",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub text: String,
    pub href: String,
}

/// The four contact links, in display order: location, email, GitHub, LinkedIn.
pub fn contact_links(contact: &ContactInfo) -> [ContactLink; 4] {
    [
        ContactLink {
            kind: ContactKind::Location,
            text: contact.location.clone(),
            href: maps_search_url(&contact.location),
        },
        ContactLink {
            kind: ContactKind::Email,
            text: contact.email.clone(),
            href: format!("mailto:{}", contact.email),
        },
        ContactLink {
            kind: ContactKind::Github,
            text: contact.github.clone(),
            href: format!("https://{}", contact.github),
        },
        ContactLink {
            kind: ContactKind::Linkedin,
            text: contact.linkedin.clone(),
            href: format!("https://{}", contact.linkedin),
        },
    ]
}

/// Same bytes as the browser's `encodeURIComponent`, which leaves
/// `! ' ( ) *` unescaped where `urlencoding` escapes them.
pub fn maps_search_url(location: &str) -> String {
    let query = urlencoding::encode(location)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*");
    format!("{MAPS_SEARCH_URL}{query}")
}
