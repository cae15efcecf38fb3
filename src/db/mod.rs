//! Small persistence layer. On the web target everything lives in browser
//! local storage; native builds keep an in-memory map so the same code
//! paths (and the tests) work without a browser.
//!
//! Volume and playback state are intentionally not stored here: a reload
//! always starts stopped, at default volume.

use crate::i18n::Locale;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

const SETTINGS_KEY: &str = "rvrradio.app_settings";
const SEEN_KEY: &str = "rvrradio.seen_announcements";
const VOTES_KEY: &str = "rvrradio.poll_votes";
const CLIENT_ID_KEY: &str = "rvrradio.client_id";

/// App settings stored across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub locale: Locale,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            locale: Locale::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
static MEMORY_STORE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> Option<String> {
    LocalStorage::get::<String>(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn write_raw(key: &str, value: &str) {
    let _ = LocalStorage::set(key, value.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw(key: &str) -> Option<String> {
    MEMORY_STORE
        .lock()
        .ok()
        .and_then(|store| store.get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(key: &str, value: &str) {
    if let Ok(mut store) = MEMORY_STORE.lock() {
        store.insert(key.to_string(), value.to_string());
    }
}

fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = read_raw(key)?;
    serde_json::from_str(&raw).ok()
}

fn write_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        write_raw(key, &raw);
    }
}

pub fn load_settings() -> AppSettings {
    read_json(SETTINGS_KEY).unwrap_or_default()
}

pub fn save_settings(settings: &AppSettings) {
    write_json(SETTINGS_KEY, settings);
}

/// Announcement ids the listener has dismissed.
pub fn load_seen_announcements() -> Vec<String> {
    read_json(SEEN_KEY).unwrap_or_default()
}

pub fn mark_announcement_seen(id: &str) {
    let mut seen = load_seen_announcements();
    if !seen.iter().any(|existing| existing == id) {
        seen.push(id.to_string());
        write_json(SEEN_KEY, &seen);
    }
}

/// One vote cast on this client, attributed to the anonymous client id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub option: String,
    pub client: String,
}

/// Poll id → vote cast on this client.
pub fn load_poll_votes() -> HashMap<String, VoteRecord> {
    read_json(VOTES_KEY).unwrap_or_default()
}

/// Record a vote. The first choice wins; a later call for the same poll
/// is ignored and the original record is returned.
pub fn record_poll_vote(poll_id: &str, option_id: &str) -> VoteRecord {
    let mut votes = load_poll_votes();
    if let Some(existing) = votes.get(poll_id) {
        return existing.clone();
    }
    let record = VoteRecord {
        option: option_id.to_string(),
        client: client_id(),
    };
    votes.insert(poll_id.to_string(), record.clone());
    write_json(VOTES_KEY, &votes);
    record
}

/// Stable anonymous id for this installation, created on first use.
pub fn client_id() -> String {
    if let Some(existing) = read_raw(CLIENT_ID_KEY) {
        if !existing.trim().is_empty() {
            return existing;
        }
    }
    let id = uuid::Uuid::new_v4().to_string();
    write_raw(CLIENT_ID_KEY, &id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_with_defaults() {
        let loaded: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, AppSettings::default());
        assert_eq!(loaded.theme, "dark");
        assert_eq!(loaded.locale, Locale::En);

        let custom = AppSettings {
            theme: "light".to_string(),
            locale: Locale::It,
        };
        save_settings(&custom);
        assert_eq!(load_settings(), custom);
    }

    #[test]
    fn seen_announcements_accumulate_without_duplicates() {
        mark_announcement_seen("a1");
        mark_announcement_seen("a2");
        mark_announcement_seen("a1");
        let seen = load_seen_announcements();
        assert_eq!(
            seen.iter().filter(|id| id.as_str() == "a1").count(),
            1,
            "duplicate dismissals must not duplicate ids"
        );
        assert!(seen.iter().any(|id| id == "a2"));
    }

    #[test]
    fn first_vote_wins() {
        let first = record_poll_vote("poll-9", "opt-a");
        let second = record_poll_vote("poll-9", "opt-b");
        assert_eq!(first.option, "opt-a");
        assert_eq!(second, first, "a re-vote returns the original record");
        assert_eq!(load_poll_votes().get("poll-9").unwrap().option, "opt-a");
    }

    #[test]
    fn votes_carry_the_client_id() {
        let record = record_poll_vote("poll-10", "opt-x");
        assert_eq!(record.client, client_id());
    }

    #[test]
    fn client_id_is_stable() {
        let first = client_id();
        let second = client_id();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
