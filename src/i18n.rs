//! Locale-aware text lookup. The station serves an Italian audience but
//! the app ships English strings as the baseline, so an unknown Italian
//! entry falls back to English and an unknown key falls back to itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    En,
    It,
}

impl Locale {
    pub fn key(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::It => "Italiano",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "it" => Some(Self::It),
            _ => None,
        }
    }
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "player.live" => "Live Broadcast",
        "player.listen" => "Listen live",
        "player.stop" => "Stop",
        "player.volume" => "Volume",
        "nav.home" => "Home",
        "nav.news" => "News",
        "nav.sport" => "Sport",
        "nav.polls" => "Polls",
        "nav.settings" => "Settings",
        "feed.empty" => "Nothing to read right now.",
        "feed.error" => "The feed is unavailable. Pull to retry later.",
        "polls.empty" => "No open polls at the moment.",
        "polls.closed" => "Closed",
        "polls.vote" => "Vote",
        "polls.voted" => "Thanks for voting",
        "announcements.dismiss" => "Dismiss",
        "settings.theme" => "Theme",
        "settings.theme.dark" => "Dark",
        "settings.theme.light" => "Light",
        "settings.language" => "Language",
        _ => return None,
    })
}

fn italian(key: &str) -> Option<&'static str> {
    Some(match key {
        "player.live" => "Diretta",
        "player.listen" => "Ascolta la diretta",
        "player.stop" => "Ferma",
        "player.volume" => "Volume",
        "nav.home" => "Home",
        "nav.news" => "Notizie",
        "nav.sport" => "Sport",
        "nav.polls" => "Sondaggi",
        "nav.settings" => "Impostazioni",
        "feed.empty" => "Niente da leggere al momento.",
        "feed.error" => "Il feed non è disponibile. Riprova più tardi.",
        "polls.empty" => "Nessun sondaggio aperto al momento.",
        "polls.closed" => "Chiuso",
        "polls.vote" => "Vota",
        "polls.voted" => "Grazie per aver votato",
        "announcements.dismiss" => "Chiudi",
        "settings.theme" => "Tema",
        "settings.theme.dark" => "Scuro",
        "settings.theme.light" => "Chiaro",
        "settings.language" => "Lingua",
        _ => return None,
    })
}

/// Look up a display string. Total: unknown locale entries fall back to
/// English, unknown keys fall back to the key itself.
pub fn text(locale: Locale, key: &str) -> &str {
    let localized = match locale {
        Locale::En => english(key),
        Locale::It => italian(key).or_else(|| english(key)),
    };
    localized.unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_lookup() {
        assert_eq!(text(Locale::En, "player.live"), "Live Broadcast");
        assert_eq!(text(Locale::En, "nav.news"), "News");
    }

    #[test]
    fn italian_lookup() {
        assert_eq!(text(Locale::It, "player.live"), "Diretta");
        assert_eq!(text(Locale::It, "nav.settings"), "Impostazioni");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(text(Locale::En, "no.such.key"), "no.such.key");
        assert_eq!(text(Locale::It, "no.such.key"), "no.such.key");
    }

    #[test]
    fn locale_keys_round_trip() {
        for locale in [Locale::En, Locale::It] {
            assert_eq!(Locale::from_key(locale.key()), Some(locale));
        }
        assert_eq!(Locale::from_key("fr"), None);
    }
}
