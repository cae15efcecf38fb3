//! Now-playing metadata for the live stream. The stream host exposes a
//! small JSON document with the current track; it is read through the
//! relay and reduced to a [`NowPlayingInfo`]. Every failure mode falls
//! back to the live-broadcast default, never to an error the UI has to
//! render.

use crate::api::models::{NowPlayingInfo, DEFAULT_ARTWORK};
use crate::api::relay;
use crate::i18n::Locale;
use crate::utils::{compact_whitespace, is_absolute_http_url};
use dioxus::logger::tracing::debug;
use serde_json::Value;

/// The stream host's current-track endpoint.
pub const METADATA_URL: &str = "https://sr10.inmystream.it/cp/get_info.php?p=8015";

/// Reduce the inner metadata JSON to display info. An empty or missing
/// title means the whole payload is untrusted; an `album_art` that is not
/// an absolute http(s) URL is discarded on its own.
pub fn parse_now_playing(contents: &str, locale: Locale) -> NowPlayingInfo {
    let fallback = NowPlayingInfo::live_default(locale);

    let Ok(payload) = serde_json::from_str::<Value>(contents) else {
        return fallback;
    };

    let title = payload
        .get("title")
        .and_then(Value::as_str)
        .map(compact_whitespace)
        .filter(|title| !title.is_empty());

    let Some(title) = title else {
        return fallback;
    };

    let artwork_url = payload
        .get("album_art")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| is_absolute_http_url(url))
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_ARTWORK.to_string());

    NowPlayingInfo { title, artwork_url }
}

/// One poll tick: fetch through the relay and parse. Failures are
/// write-only to the debug log.
pub async fn fetch_now_playing(locale: Locale) -> NowPlayingInfo {
    match relay::fetch_via_relay(METADATA_URL).await {
        Ok(contents) => parse_now_playing(&contents, locale),
        Err(error) => {
            debug!("now-playing fetch failed: {error}");
            NowPlayingInfo::live_default(locale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_and_artwork() {
        let info = parse_now_playing(
            r#"{"title":"Song A","album_art":"https://x/a.png"}"#,
            Locale::En,
        );
        assert_eq!(info.title, "Song A");
        assert_eq!(info.artwork_url, "https://x/a.png");
    }

    #[test]
    fn non_url_artwork_falls_back_to_placeholder() {
        let info = parse_now_playing(
            r#"{"title":"Song A","album_art":"not-a-url"}"#,
            Locale::En,
        );
        assert_eq!(info.title, "Song A");
        assert_eq!(info.artwork_url, DEFAULT_ARTWORK);
    }

    #[test]
    fn missing_artwork_falls_back_to_placeholder() {
        let info = parse_now_playing(r#"{"title":"Song A"}"#, Locale::En);
        assert_eq!(info.artwork_url, DEFAULT_ARTWORK);
    }

    #[test]
    fn empty_or_missing_title_yields_live_default() {
        let default = NowPlayingInfo::live_default(Locale::En);
        assert_eq!(parse_now_playing(r#"{"title":"  "}"#, Locale::En), default);
        assert_eq!(
            parse_now_playing(r#"{"album_art":"https://x/a.png"}"#, Locale::En),
            default
        );
    }

    #[test]
    fn malformed_payload_yields_live_default() {
        let default = NowPlayingInfo::live_default(Locale::En);
        assert_eq!(parse_now_playing("not json at all", Locale::En), default);
        assert_eq!(parse_now_playing("", Locale::En), default);
        assert_eq!(parse_now_playing("[1,2,3]", Locale::En), default);
    }

    #[test]
    fn live_default_is_localized() {
        assert_eq!(
            NowPlayingInfo::live_default(Locale::En).title,
            "Live Broadcast"
        );
        assert_eq!(NowPlayingInfo::live_default(Locale::It).title, "Diretta");
        assert_eq!(
            NowPlayingInfo::live_default(Locale::En).artwork_url,
            DEFAULT_ARTWORK
        );
    }

    #[test]
    fn title_whitespace_is_compacted() {
        let info = parse_now_playing(r#"{"title":"  Song   A \n"}"#, Locale::En);
        assert_eq!(info.title, "Song A");
    }
}
