//! Listener polls. Poll definitions (with running vote counts) are
//! published by the station site as JSON and read through the relay.
//! Voting is client-side: one choice per poll, recorded locally, and
//! counted into the fetched totals before display.

use crate::api::models::{Poll, PollOption};
use crate::api::relay;
use chrono::{DateTime, Utc};

pub const POLLS_URL: &str = "https://www.radiorvr.it/app/polls.json";

pub async fn fetch_polls() -> Result<Vec<Poll>, String> {
    let body = relay::fetch_via_relay(POLLS_URL).await?;
    serde_json::from_str(&body).map_err(|error| error.to_string())
}

pub fn total_votes(poll: &Poll) -> u32 {
    poll.options.iter().map(|option| option.votes).sum()
}

/// Integer percentage of the total, rounded half-up. Zero totals render
/// as zero rather than dividing.
pub fn percentage(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((votes as u64 * 100 + (total as u64 / 2)) / total as u64) as u32
}

/// Fold the local vote into the published counts so the voter sees their
/// own choice reflected immediately. Unknown option ids change nothing.
pub fn with_local_vote(poll: &Poll, voted_option: Option<&str>) -> Poll {
    let Some(voted_option) = voted_option else {
        return poll.clone();
    };

    let options = poll
        .options
        .iter()
        .map(|option| PollOption {
            votes: option.votes + u32::from(option.id == voted_option),
            ..option.clone()
        })
        .collect();

    Poll {
        options,
        ..poll.clone()
    }
}

pub fn is_closed(poll: &Poll, now: DateTime<Utc>) -> bool {
    poll.closes.map(|closes| closes <= now).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_poll() -> Poll {
        Poll {
            id: "poll-1".to_string(),
            question: "Song of the summer?".to_string(),
            options: vec![
                PollOption {
                    id: "a".to_string(),
                    label: "Song A".to_string(),
                    votes: 3,
                },
                PollOption {
                    id: "b".to_string(),
                    label: "Song B".to_string(),
                    votes: 1,
                },
            ],
            closes: None,
        }
    }

    #[test]
    fn totals_and_percentages() {
        let poll = sample_poll();
        assert_eq!(total_votes(&poll), 4);
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(percentage(1, 4), 25);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn local_vote_counts_once() {
        let poll = sample_poll();
        let tallied = with_local_vote(&poll, Some("b"));
        assert_eq!(tallied.options[0].votes, 3);
        assert_eq!(tallied.options[1].votes, 2);
        assert_eq!(total_votes(&tallied), 5);

        // No local vote leaves counts untouched.
        assert_eq!(with_local_vote(&poll, None), poll);
        // An id that no longer exists changes nothing.
        assert_eq!(total_votes(&with_local_vote(&poll, Some("gone"))), 4);
    }

    #[test]
    fn closed_detection() {
        let now = Utc.with_ymd_and_hms(2025, 8, 5, 12, 0, 0).unwrap();
        let mut poll = sample_poll();
        assert!(!is_closed(&poll, now), "open-ended polls never close");

        poll.closes = Some(Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap());
        assert!(is_closed(&poll, now));

        poll.closes = Some(Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap());
        assert!(!is_closed(&poll, now));
    }

    #[test]
    fn decodes_published_json_with_missing_fields() {
        let polls: Vec<Poll> = serde_json::from_str(
            r#"[{"id":"p1","question":"Q?","options":[{"id":"x"}]}]"#,
        )
        .unwrap();
        assert_eq!(polls[0].options[0].votes, 0);
        assert!(polls[0].closes.is_none());
    }
}
