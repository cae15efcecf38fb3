use crate::db::AppSettings;
use crate::i18n::{self, Locale};
use dioxus::prelude::*;

/// Theme and language. Writes go through the shared settings signal; the
/// app shell persists every change.
#[component]
pub fn SettingsView() -> Element {
    let mut settings = use_context::<Signal<AppSettings>>();
    let current = settings();
    let locale = current.locale;

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title", {i18n::text(locale, "nav.settings")} }
            }

            section { class: "rounded-2xl border border-zinc-800/70 bg-zinc-900/60 p-5 space-y-4",
                h2 { class: "text-xs uppercase tracking-widest text-zinc-500",
                    {i18n::text(locale, "settings.theme")}
                }
                div { class: "flex gap-2",
                    for (value, label_key) in [("dark", "settings.theme.dark"), ("light", "settings.theme.light")] {
                        button {
                            class: if current.theme == value {
                                "flex-1 rounded-xl bg-red-600 px-4 py-3 text-sm font-semibold text-white"
                            } else {
                                "flex-1 rounded-xl border border-zinc-800/80 bg-zinc-950/70 px-4 py-3 text-sm text-zinc-300 hover:bg-zinc-900 transition-colors"
                            },
                            onclick: move |_| {
                                settings.write().theme = value.to_string();
                            },
                            {i18n::text(locale, label_key)}
                        }
                    }
                }
            }

            section { class: "rounded-2xl border border-zinc-800/70 bg-zinc-900/60 p-5 space-y-4",
                h2 { class: "text-xs uppercase tracking-widest text-zinc-500",
                    {i18n::text(locale, "settings.language")}
                }
                div { class: "flex gap-2",
                    for option in [Locale::En, Locale::It] {
                        button {
                            class: if current.locale == option {
                                "flex-1 rounded-xl bg-red-600 px-4 py-3 text-sm font-semibold text-white"
                            } else {
                                "flex-1 rounded-xl border border-zinc-800/80 bg-zinc-950/70 px-4 py-3 text-sm text-zinc-300 hover:bg-zinc-900 transition-colors"
                            },
                            onclick: move |_| {
                                settings.write().locale = option;
                            },
                            {option.label()}
                        }
                    }
                }
            }
        }
    }
}
