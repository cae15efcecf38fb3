use crate::api::models::Article;
use crate::api::rss::fetch_feed;
use crate::components::Icon;
use crate::db::AppSettings;
use crate::i18n;
use crate::utils::truncate_chars;
use dioxus::prelude::*;

const SUMMARY_MAX_CHARS: usize = 180;

/// Shared view for the news and sport routes: one feed URL, one heading.
#[component]
pub fn FeedView(feed_url: String, heading_key: String) -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let locale = settings().locale;

    let url_for_fetch = feed_url.clone();
    let articles = use_resource(move || {
        let url = url_for_fetch.clone();
        async move { fetch_feed(&url).await }
    });

    rsx! {
        div { class: "space-y-6",
            header { class: "page-header",
                h1 { class: "page-title", {i18n::text(locale, &heading_key)} }
            }
            {
                match articles() {
                    Some(Ok(items)) if !items.is_empty() => rsx! {
                        div { class: "space-y-3",
                            for article in items {
                                ArticleCard { article: article.clone() }
                            }
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        FeedNotice { message: i18n::text(locale, "feed.empty").to_string() }
                    },
                    Some(Err(_)) => rsx! {
                        FeedNotice { message: i18n::text(locale, "feed.error").to_string() }
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
fn ArticleCard(article: Article) -> Element {
    let date_line = article
        .published
        .map(|published| published.format("%d %b %Y, %H:%M").to_string());
    let summary = truncate_chars(&article.summary, SUMMARY_MAX_CHARS);
    let has_link = !article.link.is_empty();

    rsx! {
        a {
            class: "group flex gap-4 p-4 rounded-xl bg-zinc-800/30 border border-zinc-700/30 hover:bg-zinc-800/50 hover:border-red-500/30 transition-all",
            href: if has_link { article.link.clone() } else { "#".to_string() },
            target: "_blank",
            rel: "noopener",
            if let Some(image) = article.image_url.clone() {
                img {
                    src: "{image}",
                    alt: "",
                    class: "w-20 h-20 rounded-lg object-cover flex-shrink-0",
                    loading: "lazy",
                }
            }
            div { class: "min-w-0 flex-1",
                p { class: "font-medium text-white group-hover:text-red-400 transition-colors",
                    "{article.title}"
                }
                if !summary.is_empty() {
                    p { class: "mt-1 text-sm text-zinc-400", "{summary}" }
                }
                if let Some(date_line) = date_line {
                    p { class: "mt-2 text-xs uppercase tracking-widest text-zinc-500",
                        "{date_line}"
                    }
                }
            }
        }
    }
}

#[component]
fn FeedNotice(message: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-20 text-center",
            Icon {
                name: "news".to_string(),
                class: "w-12 h-12 text-zinc-600 mb-4".to_string(),
            }
            p { class: "text-zinc-400", "{message}" }
        }
    }
}
