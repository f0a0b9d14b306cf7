//! Embedded video provider (YouTube).
//!
//! The site never interprets provider data. It hands over an identifier and
//! only cares whether the embed loaded:
//!
//! ```text
//!   Loading ──on_load──▶ Loaded
//!      │
//!   on_error
//!      ▼
//!   Failed ──retry──▶ Loading
//! ```
//!
//! `retry` re-triggers the same load once. There is no backoff and no
//! timeout. The rendered markup carries the state in `data-state` and the
//! client script applies the same transitions.

const EMBED_BASE: &str = "https://www.youtube.com/embed";
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
const CHANNEL_BASE: &str = "https://www.youtube.com/@";

/// Message shown inside a failed embed.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load video. Please try again later.";

/// Permissions granted to provider iframes.
pub const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedState {
    Loading,
    Loaded,
    Failed,
}

impl EmbedState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedState::Loading => "loading",
            EmbedState::Loaded => "loaded",
            EmbedState::Failed => "failed",
        }
    }
}

/// One provider iframe and its load state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    src: String,
    title: String,
    state: EmbedState,
}

impl Embed {
    pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
            state: EmbedState::Loading,
        }
    }

    /// A single performance, autoplaying once the overlay opens.
    pub fn video(video_id: &str, title: &str) -> Self {
        Self::new(video_embed_url(video_id, true), title)
    }

    /// The channel showcase playlist.
    pub fn channel(channel: &str, title: &str) -> Self {
        Self::new(channel_embed_url(channel), title)
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> EmbedState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == EmbedState::Loading
    }

    pub fn on_load(&mut self) {
        self.state = EmbedState::Loaded;
    }

    pub fn on_error(&mut self) {
        self.state = EmbedState::Failed;
    }

    /// Re-trigger the load. Only a failed embed can retry; returns whether it did.
    pub fn retry(&mut self) -> bool {
        if self.state == EmbedState::Failed {
            self.state = EmbedState::Loading;
            true
        } else {
            false
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.state == EmbedState::Failed).then_some(LOAD_ERROR_MESSAGE)
    }
}

/// Provider thumbnail sizes. `MaxRes` is not generated for every upload,
/// so pages fall back to `Medium` when it fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    MaxRes,
    Medium,
}

impl ThumbnailQuality {
    fn file_name(&self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault.jpg",
            ThumbnailQuality::Medium => "mqdefault.jpg",
        }
    }

    pub fn fallback(&self) -> Option<ThumbnailQuality> {
        match self {
            ThumbnailQuality::MaxRes => Some(ThumbnailQuality::Medium),
            ThumbnailQuality::Medium => None,
        }
    }
}

pub fn video_embed_url(video_id: &str, autoplay: bool) -> String {
    if autoplay {
        format!("{EMBED_BASE}/{video_id}?autoplay=1")
    } else {
        format!("{EMBED_BASE}/{video_id}")
    }
}

pub fn channel_embed_url(channel: &str) -> String {
    format!("{EMBED_BASE}?listType=user&list={channel}")
}

pub fn channel_page_url(channel: &str) -> String {
    format!("{CHANNEL_BASE}{channel}")
}

pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("{THUMBNAIL_BASE}/{video_id}/{}", quality.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_embed_is_loading() {
        let embed = Embed::video("abc", "Nukkad Natak");
        assert!(embed.is_loading());
        assert_eq!(embed.error_message(), None);
    }

    #[test]
    fn load_success() {
        let mut embed = Embed::video("abc", "t");
        embed.on_load();
        assert_eq!(embed.state(), EmbedState::Loaded);
    }

    #[test]
    fn load_failure_surfaces_message() {
        let mut embed = Embed::video("abc", "t");
        embed.on_error();
        assert_eq!(embed.state(), EmbedState::Failed);
        assert_eq!(embed.error_message(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn retry_only_from_failed() {
        let mut embed = Embed::video("abc", "t");
        assert!(!embed.retry());
        assert!(embed.is_loading());

        embed.on_error();
        assert!(embed.retry());
        assert!(embed.is_loading());
        assert_eq!(embed.error_message(), None);

        // A second press while the reload is in flight does nothing.
        assert!(!embed.retry());

        embed.on_load();
        assert!(!embed.retry());
        assert_eq!(embed.state(), EmbedState::Loaded);
    }

    #[test]
    fn video_urls() {
        assert_eq!(
            video_embed_url("VIDEO_ID_1", true),
            "https://www.youtube.com/embed/VIDEO_ID_1?autoplay=1"
        );
        assert_eq!(
            video_embed_url("VIDEO_ID_1", false),
            "https://www.youtube.com/embed/VIDEO_ID_1"
        );
    }

    #[test]
    fn channel_urls() {
        assert_eq!(
            channel_embed_url("troupe42"),
            "https://www.youtube.com/embed?listType=user&list=troupe42"
        );
        assert_eq!(channel_page_url("troupe42"), "https://www.youtube.com/@troupe42");
    }

    #[test]
    fn thumbnail_fallback_chain() {
        assert_eq!(
            thumbnail_url("x", ThumbnailQuality::MaxRes),
            "https://img.youtube.com/vi/x/maxresdefault.jpg"
        );
        let fallback = ThumbnailQuality::MaxRes.fallback().unwrap();
        assert_eq!(
            thumbnail_url("x", fallback),
            "https://img.youtube.com/vi/x/mqdefault.jpg"
        );
        assert_eq!(fallback.fallback(), None);
    }

    #[test]
    fn state_strings() {
        assert_eq!(EmbedState::Loading.as_str(), "loading");
        assert_eq!(EmbedState::Failed.as_str(), "failed");
    }
}
