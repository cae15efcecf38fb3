use crate::components::{toggle_play, AppView, Icon, NowPlayingSignal, SessionSignal};
use dioxus::prelude::*;

/// Sticky mini-player shown on every route except the full player. Same
/// shared state as the full player, no logic of its own.
#[component]
pub fn MiniPlayer() -> Element {
    let session_handle = use_context::<SessionSignal>();
    let now_playing = use_context::<NowPlayingSignal>().0;

    let session = (session_handle.0)();
    let info = now_playing();
    let is_playing = session.is_playing();

    let on_toggle = move |e: Event<MouseData>| {
        e.stop_propagation();
        toggle_play(session_handle);
    };

    rsx! {
        div { class: "fixed bottom-16 left-0 right-0 z-40 px-3",
            Link {
                to: AppView::HomeView {},
                class: "flex items-center gap-3 max-w-xl mx-auto rounded-xl bg-zinc-900/95 backdrop-blur border border-zinc-800/70 px-3 py-2 shadow-lg",
                img {
                    src: "{info.artwork_url}",
                    alt: "",
                    class: "w-10 h-10 rounded-lg object-cover flex-shrink-0",
                }
                div { class: "min-w-0 flex-1",
                    p { class: "text-sm font-medium text-white truncate", "{info.title}" }
                    p { class: "text-xs text-zinc-500", "RVR" }
                }
                button {
                    class: "w-10 h-10 rounded-full bg-red-600 hover:bg-red-500 flex items-center justify-center flex-shrink-0 transition-colors",
                    onclick: on_toggle,
                    if is_playing {
                        Icon { name: "pause".to_string(), class: "w-4 h-4 text-white".to_string() }
                    } else {
                        Icon {
                            name: "play".to_string(),
                            class: "w-4 h-4 text-white ml-0.5".to_string(),
                        }
                    }
                }
            }
        }
    }
}
