use crate::api::rss::SPORT_FEED_URL;
use crate::components::views::FeedView;
use dioxus::prelude::*;

#[component]
pub fn SportView() -> Element {
    rsx! {
        FeedView {
            feed_url: SPORT_FEED_URL.to_string(),
            heading_key: "nav.sport".to_string(),
        }
    }
}
