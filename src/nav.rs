//! Site navigation.
//!
//! Five fixed entries. Section entries (`Events`, `Gallery`) are active on
//! every page below them, so a filtered listing or an open overlay still
//! highlights its section. Performance pages are the events page with a
//! video overlay open, so they highlight `Events` too. Anchor entries
//! (`About`, `Contact`) are active only on the home page with the matching
//! fragment, which a generated page never has.

use crate::routes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
}

/// The page being viewed. Generated pages have no fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub hash: Option<String>,
}

impl Location {
    pub fn page(path: &str) -> Self {
        Self {
            path: path.to_string(),
            hash: None,
        }
    }

    #[cfg(test)]
    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = Some(hash.trim_start_matches('#').to_string());
        self
    }
}

pub fn items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            href: routes::HOME.to_string(),
        },
        NavItem {
            label: "About",
            href: routes::home_section("about"),
        },
        NavItem {
            label: "Events",
            href: routes::EVENTS.to_string(),
        },
        NavItem {
            label: "Gallery",
            href: routes::GALLERY.to_string(),
        },
        NavItem {
            label: "Contact",
            href: routes::home_section("contact"),
        },
    ]
}

impl NavItem {
    pub fn is_active(&self, location: &Location) -> bool {
        if let Some(anchor) = self.href.strip_prefix("/#") {
            return location.path == routes::HOME && location.hash.as_deref() == Some(anchor);
        }
        if self.href == routes::HOME {
            return location.path == routes::HOME && location.hash.is_none();
        }
        location.path.starts_with(&self.href)
    }
}
