//! Route table and per-route chrome metadata.

use crate::components::views::{HomeView, NewsView, PollsView, SettingsView, SportView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        HomeView {},
        #[route("/news")]
        NewsView {},
        #[route("/sport")]
        SportView {},
        #[route("/polls")]
        PollsView {},
        #[route("/settings")]
        SettingsView {},
}

/// Tab bar entries, in display order.
pub const TAB_ORDER: [AppView; 5] = [
    AppView::HomeView {},
    AppView::NewsView {},
    AppView::SportView {},
    AppView::PollsView {},
    AppView::SettingsView {},
];

/// Localization key for a route's label.
pub fn view_label_key(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "nav.home",
        AppView::NewsView {} => "nav.news",
        AppView::SportView {} => "nav.sport",
        AppView::PollsView {} => "nav.polls",
        AppView::SettingsView {} => "nav.settings",
    }
}

/// Icon name for a route's tab.
pub fn view_icon(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "radio",
        AppView::NewsView {} => "news",
        AppView::SportView {} => "sport",
        AppView::PollsView {} => "poll",
        AppView::SettingsView {} => "settings",
    }
}
