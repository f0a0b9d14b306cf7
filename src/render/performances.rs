//! Featured performances: the channel showcase, the video cards, and the
//! video overlay.
//!
//! Every embed renders in its `Loading` state with the spinner visible and
//! the error block hidden. The state each iframe event leads to is written
//! into `data-on-load`, `data-on-error` and `data-on-retry` from [`Embed`]'s
//! own transitions; `site.js` follows those attributes and re-assigns `src`
//! when Retry is pressed.

use super::{Context, OverlayLinks, detail_overlay};
use crate::media::{self, Embed, ThumbnailQuality};
use crate::routes;
use crate::selection::Selection;
use crate::types::Video;
use maud::{Markup, html};

/// States reached from `embed` on load, on error, and on retry after a failure.
fn transition_targets(embed: &Embed) -> [&'static str; 3] {
    let mut loaded = embed.clone();
    loaded.on_load();
    let mut failed = embed.clone();
    failed.on_error();
    let mut retried = failed.clone();
    retried.retry();
    [loaded.state(), failed.state(), retried.state()].map(|state| state.as_str())
}

/// One provider iframe with its loading and failure states.
pub(crate) fn embed_frame(embed: &Embed) -> Markup {
    let [on_load, on_error, on_retry] = transition_targets(embed);
    html! {
        div.embed data-state=(embed.state().as_str())
            data-on-load=(on_load) data-on-error=(on_error) data-on-retry=(on_retry) {
            div.embed-spinner aria-hidden="true" {}
            div.embed-error role="alert" hidden[embed.error_message().is_none()] {
                p { (media::LOAD_ERROR_MESSAGE) }
                button.button.embed-retry type="button" { "Retry" }
            }
            iframe src=(embed.src()) title=(embed.title())
                allow=(media::IFRAME_ALLOW) allowfullscreen {}
        }
    }
}

/// Thumbnail with the lower-quality fallback in `data-fallback`.
fn thumbnail(video: &Video) -> Markup {
    let quality = ThumbnailQuality::MaxRes;
    let fallback = quality
        .fallback()
        .map(|q| media::thumbnail_url(&video.video_id, q));
    html! {
        img.video-thumb src=(media::thumbnail_url(&video.video_id, quality))
            alt=(video.title) loading="lazy" data-fallback=[fallback];
    }
}

/// The section on the events page, anchored at `#performances`.
pub(crate) fn performances_section(ctx: &Context) -> Markup {
    let channel = ctx.site.config.videos.channel.as_deref();
    let videos = ctx.site.videos.items();
    if channel.is_none() && videos.is_empty() {
        return html! {};
    }
    html! {
        section.performances id=(routes::PERFORMANCES_ANCHOR) {
            h2.section-title { "Featured Performances" }
            @if let Some(channel) = channel {
                div.showcase {
                    (embed_frame(&Embed::channel(channel, "Channel showcase")))
                    a.channel-link href=(media::channel_page_url(channel))
                        target="_blank" rel="noopener noreferrer" { "Visit our channel" }
                }
            }
            @if !videos.is_empty() {
                div.video-grid {
                    @for video in videos {
                        a.video-card href=(routes::performance(&video.id)) {
                            div.video-thumb-wrap {
                                (thumbnail(video))
                                span.play-icon aria-hidden="true" { "▶" }
                            }
                            div.card-body {
                                span.badge { (video.category) }
                                h3 { (video.title) }
                                p.card-meta { (video.date) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The video overlay. Closing returns to the performances section.
pub(crate) fn video_overlay(ctx: &Context, selection: &Selection<String>) -> Markup {
    let links = OverlayLinks::close_only(routes::performances_section());
    detail_overlay(
        selection.resolve(&ctx.site.videos),
        |video: &Video| video.title.clone(),
        &links,
        |video| {
            html! {
                div.video-detail {
                    (embed_frame(&Embed::video(&video.video_id, &video.title)))
                    h2 { (video.title) }
                    p.card-meta { (video.category) " · " (video.date) }
                    p { (video.description) }
                }
            }
        },
    )
}
