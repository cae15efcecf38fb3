use crate::api::models::NowPlayingInfo;
use crate::components::{
    view_icon, view_label_key, AppView, Icon, MiniPlayer, NowPlayingSignal, SessionSignal,
    StreamController, StreamSession, TAB_ORDER,
};
use crate::db::{self, AppSettings};
use crate::i18n;
use dioxus::prelude::*;

/// App shell: constructs the shared state exactly once, provides it via
/// context, and renders the route outlet with the sticky chrome. The
/// stream session lives here and nowhere else.
#[component]
pub fn AppShell() -> Element {
    let settings = use_signal(db::load_settings);
    let session = use_signal(StreamSession::default);
    let now_playing = use_signal(|| NowPlayingInfo::live_default(db::load_settings().locale));

    use_context_provider(|| settings);
    use_context_provider(|| SessionSignal(session));
    use_context_provider(|| NowPlayingSignal(now_playing));

    // Persist settings on every change.
    use_effect(move || {
        let current = settings();
        db::save_settings(&current);
    });

    let route = use_route::<AppView>();
    let theme = settings().theme;
    let on_home = matches!(route, AppView::HomeView {});

    rsx! {
        div {
            class: "app-shell min-h-screen bg-zinc-950 text-white",
            "data-theme": "{theme}",
            StreamController {}
            main { class: "mx-auto max-w-xl px-4 pt-6 pb-36", Outlet::<AppView> {} }
            if !on_home {
                MiniPlayer {}
            }
            BottomNav { current: route }
        }
    }
}

#[component]
fn BottomNav(current: AppView) -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let locale = settings().locale;

    rsx! {
        nav { class: "fixed bottom-0 left-0 right-0 z-50 border-t border-zinc-800/60 bg-zinc-950/90 backdrop-blur-xl",
            div { class: "mx-auto flex max-w-xl items-stretch justify-between px-2",
                for tab in TAB_ORDER {
                    {
                        let active = tab == current;
                        let label = i18n::text(locale, view_label_key(&tab));
                        rsx! {
                            Link {
                                to: tab.clone(),
                                class: if active {
                                    "flex flex-1 flex-col items-center gap-1 py-3 text-red-400"
                                } else {
                                    "flex flex-1 flex-col items-center gap-1 py-3 text-zinc-500 hover:text-zinc-300 transition-colors"
                                },
                                Icon {
                                    name: view_icon(&tab).to_string(),
                                    class: "w-5 h-5".to_string(),
                                }
                                span { class: "text-[10px] uppercase tracking-wider", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
