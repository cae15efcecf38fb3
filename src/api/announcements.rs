//! Station announcements, shown as dismissible banners on the home view.
//! Dismissed ids live in local storage so a banner never comes back.

use crate::api::models::Announcement;
use crate::api::relay;

pub const ANNOUNCEMENTS_URL: &str = "https://www.radiorvr.it/app/announcements.json";

pub async fn fetch_announcements() -> Result<Vec<Announcement>, String> {
    let body = relay::fetch_via_relay(ANNOUNCEMENTS_URL).await?;
    serde_json::from_str(&body).map_err(|error| error.to_string())
}

/// The announcements the listener has not dismissed yet, in feed order.
pub fn unseen(all: &[Announcement], seen_ids: &[String]) -> Vec<Announcement> {
    all.iter()
        .filter(|announcement| !seen_ids.iter().any(|seen| *seen == announcement.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(id: &str) -> Announcement {
        Announcement {
            id: id.to_string(),
            title: format!("Title {id}"),
            body: String::new(),
            link: None,
        }
    }

    #[test]
    fn filters_seen_ids() {
        let all = vec![announcement("a"), announcement("b"), announcement("c")];
        let seen = vec!["b".to_string()];
        let visible = unseen(&all, &seen);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, "a");
        assert_eq!(visible[1].id, "c");
    }

    #[test]
    fn empty_seen_set_shows_everything() {
        let all = vec![announcement("a")];
        assert_eq!(unseen(&all, &[]), all);
    }

    #[test]
    fn all_seen_shows_nothing() {
        let all = vec![announcement("a"), announcement("b")];
        let seen = vec!["a".to_string(), "b".to_string()];
        assert!(unseen(&all, &seen).is_empty());
    }
}
