use crate::api::announcements::{fetch_announcements, unseen};
use crate::api::models::Announcement;
use crate::components::{Icon, Player};
use crate::db::{self, AppSettings};
use crate::i18n;
use dioxus::prelude::*;

/// Home: the full player plus any station announcements the listener has
/// not dismissed yet.
#[component]
pub fn HomeView() -> Element {
    let mut seen_ids = use_signal(db::load_seen_announcements);
    let announcements = use_resource(|| async move { fetch_announcements().await });

    let visible = match announcements() {
        Some(Ok(all)) => unseen(&all, &seen_ids()),
        _ => Vec::new(),
    };

    rsx! {
        div { class: "space-y-6",
            for announcement in visible {
                AnnouncementBanner {
                    announcement: announcement.clone(),
                    on_dismiss: move |id: String| {
                        db::mark_announcement_seen(&id);
                        seen_ids.set(db::load_seen_announcements());
                    },
                }
            }
            Player {}
        }
    }
}

#[component]
fn AnnouncementBanner(announcement: Announcement, on_dismiss: EventHandler<String>) -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let locale = settings().locale;
    let id_for_dismiss = announcement.id.clone();

    rsx! {
        div { class: "rounded-xl border border-red-500/30 bg-red-500/10 p-4",
            div { class: "flex items-start justify-between gap-3",
                div { class: "min-w-0 space-y-1",
                    p { class: "font-semibold text-white", "{announcement.title}" }
                    if !announcement.body.is_empty() {
                        p { class: "text-sm text-zinc-300", "{announcement.body}" }
                    }
                    if let Some(link) = announcement.link.clone() {
                        a {
                            class: "inline-flex items-center gap-1 text-xs text-red-300 hover:text-red-200",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener",
                            Icon {
                                name: "external-link".to_string(),
                                class: "w-3 h-3".to_string(),
                            }
                            "{link}"
                        }
                    }
                }
                button {
                    class: "p-1 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800/70 transition-colors flex-shrink-0",
                    aria_label: i18n::text(locale, "announcements.dismiss").to_string(),
                    onclick: move |_| on_dismiss.call(id_for_dismiss.clone()),
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }
    }
}
