use crate::api::rss::NEWS_FEED_URL;
use crate::components::views::FeedView;
use dioxus::prelude::*;

#[component]
pub fn NewsView() -> Element {
    rsx! {
        FeedView {
            feed_url: NEWS_FEED_URL.to_string(),
            heading_key: "nav.news".to_string(),
        }
    }
}
