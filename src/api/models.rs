use crate::i18n::{self, Locale};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artwork shown whenever no track metadata is available.
pub const DEFAULT_ARTWORK: &str = "/assets/images/live-placeholder.jpg";

/// The display pair for the currently airing track. Defaults to the
/// locale's live-broadcast string and the bundled placeholder whenever
/// nothing is playing or the last metadata fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlayingInfo {
    pub title: String,
    pub artwork_url: String,
}

impl NowPlayingInfo {
    pub fn live_default(locale: Locale) -> Self {
        Self {
            title: i18n::text(locale, "player.live").to_string(),
            artwork_url: DEFAULT_ARTWORK.to_string(),
        }
    }
}

/// One entry of a news or sport feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
    pub summary: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PollOption {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Poll {
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub closes: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Announcement {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub link: Option<String>,
}
