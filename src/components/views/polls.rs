use crate::api::models::Poll;
use crate::api::polls::{self, fetch_polls};
use crate::components::Icon;
use crate::db::{self, AppSettings};
use crate::i18n;
use chrono::Utc;
use dioxus::prelude::*;

#[component]
pub fn PollsView() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let locale = settings().locale;

    let mut votes = use_signal(db::load_poll_votes);
    let polls = use_resource(|| async move { fetch_polls().await });

    rsx! {
        div { class: "space-y-6",
            header { class: "page-header",
                h1 { class: "page-title", {i18n::text(locale, "nav.polls")} }
            }
            {
                match polls() {
                    Some(Ok(list)) if !list.is_empty() => rsx! {
                        div { class: "space-y-4",
                            for poll in list {
                                PollCard {
                                    poll: poll.clone(),
                                    voted_option: votes().get(&poll.id).map(|record| record.option.clone()),
                                    on_vote: {
                                        let poll_id = poll.id.clone();
                                        move |option_id: String| {
                                            db::record_poll_vote(&poll_id, &option_id);
                                            votes.set(db::load_poll_votes());
                                        }
                                    },
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        div { class: "flex flex-col items-center justify-center py-20 text-center",
                            Icon {
                                name: "poll".to_string(),
                                class: "w-12 h-12 text-zinc-600 mb-4".to_string(),
                            }
                            p { class: "text-zinc-400", {i18n::text(locale, "polls.empty")} }
                        }
                    },
                    None => rsx! {
                        div { class: "flex items-center justify-center py-20",
                            Icon {
                                name: "loader".to_string(),
                                class: "w-8 h-8 text-zinc-500".to_string(),
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn PollCard(poll: Poll, voted_option: Option<String>, on_vote: EventHandler<String>) -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let locale = settings().locale;

    let closed = polls::is_closed(&poll, Utc::now());
    let tallied = polls::with_local_vote(&poll, voted_option.as_deref());
    let total = polls::total_votes(&tallied);
    let show_results = closed || voted_option.is_some();

    rsx! {
        div { class: "rounded-2xl border border-zinc-800/70 bg-zinc-900/60 p-5 space-y-4",
            div { class: "flex items-start justify-between gap-3",
                h2 { class: "text-lg font-semibold text-white", "{poll.question}" }
                if closed {
                    span { class: "text-xs uppercase tracking-widest text-zinc-500 flex-shrink-0",
                        {i18n::text(locale, "polls.closed")}
                    }
                }
            }

            if show_results {
                div { class: "space-y-3",
                    for option in tallied.options.iter().cloned() {
                        {
                            let percent = polls::percentage(option.votes, total);
                            let chosen = voted_option.as_deref() == Some(option.id.as_str());
                            rsx! {
                                div { class: "space-y-1",
                                    div { class: "flex items-center justify-between text-sm",
                                        span {
                                            class: if chosen { "text-red-300 font-medium flex items-center gap-1" } else { "text-zinc-300" },
                                            if chosen {
                                                Icon { name: "check".to_string(), class: "w-3 h-3".to_string() }
                                            }
                                            "{option.label}"
                                        }
                                        span { class: "text-zinc-500", "{percent}%" }
                                    }
                                    div { class: "h-2 rounded-full bg-zinc-800 overflow-hidden",
                                        div {
                                            class: "h-full rounded-full bg-red-500/70",
                                            style: "width: {percent}%",
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if voted_option.is_some() {
                    p { class: "text-xs text-zinc-500", {i18n::text(locale, "polls.voted")} }
                }
            } else {
                div { class: "space-y-2",
                    for option in poll.options.iter().cloned() {
                        button {
                            class: "w-full text-left rounded-xl border border-zinc-800/80 bg-zinc-950/70 px-4 py-3 text-sm text-white hover:border-red-500/50 hover:bg-zinc-900 transition-colors",
                            onclick: {
                                let option_id = option.id.clone();
                                move |_| on_vote.call(option_id.clone())
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}
