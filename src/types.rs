//! Content records shared by the loader, the filter engine and the renderer.
//!
//! These are deserialized from the catalog files (`events.toml`,
//! `gallery.toml`, `videos.toml`) and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown status '{0}' (expected upcoming, ongoing or past)")]
pub struct UnknownStatus(pub String);

/// Event status as authored. Not derived from the event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Upcoming,
    Ongoing,
    Past,
}

impl Status {
    /// Every status, in filter-button order.
    pub const ALL: [Status; 3] = [Status::Upcoming, Status::Ongoing, Status::Past];

    /// Lowercase form used in content files and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Upcoming => "upcoming",
            Status::Ongoing => "ongoing",
            Status::Past => "past",
        }
    }

    /// Capitalized form used on badges and filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Upcoming => "Upcoming",
            Status::Ongoing => "Ongoing",
            Status::Past => "Past",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive: `"Upcoming"`, `"upcoming"` and `"UPCOMING"` all parse.
impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A show, workshop or festival listed on the events page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub capacity: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// A photo of a past production, workshop or festival.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub image: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
}

/// A recorded performance hosted by the video provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Provider-side identifier, passed through to the embed URL untouched.
    pub video_id: String,
    pub date: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Upcoming".parse::<Status>(), Ok(Status::Upcoming));
        assert_eq!("ongoing".parse::<Status>(), Ok(Status::Ongoing));
        assert_eq!("PAST".parse::<Status>(), Ok(Status::Past));
    }

    #[test]
    fn status_rejects_unknown_label() {
        let err = "cancelled".parse::<Status>().unwrap_err();
        assert_eq!(err, UnknownStatus("cancelled".to_string()));
    }

    #[test]
    fn status_label_and_str_forms() {
        assert_eq!(Status::Past.as_str(), "past");
        assert_eq!(Status::Past.label(), "Past");
        assert_eq!(Status::Ongoing.to_string(), "Ongoing");
    }

    #[test]
    fn event_deserializes_with_optional_fields_missing() {
        let event: Event = toml::from_str(
            r#"
            id = 3
            title = "Annual Drama Festival"
            date = "May 1-5, 2024"
            time = "Various timings"
            location = "College Amphitheatre"
            description = "Five days of theatre."
            image = "/images/events/festival.jpg"
            category = "Festival"
            capacity = "500 attendees"
            status = "upcoming"
            "#,
        )
        .unwrap();
        assert_eq!(event.status, Status::Upcoming);
        assert!(event.artists.is_empty());
        assert!(event.duration.is_none());
    }

    #[test]
    fn event_rejects_unknown_status_value() {
        let result: Result<Event, _> = toml::from_str(
            r#"
            id = 1
            title = "t"
            date = "d"
            time = "t"
            location = "l"
            description = "d"
            image = "i"
            category = "c"
            capacity = "c"
            status = "postponed"
            "#,
        );
        assert!(result.is_err());
    }
}
