use crate::components::{set_volume_percent, toggle_play, Icon, NowPlayingSignal, SessionSignal};
use crate::db::AppSettings;
use crate::i18n;
use dioxus::prelude::*;

/// Full-screen live player, the home route's main content. Pure
/// consumer: reads the shared session and now-playing state, forwards
/// gestures back to the session.
#[component]
pub fn Player() -> Element {
    let session_handle = use_context::<SessionSignal>();
    let now_playing = use_context::<NowPlayingSignal>().0;
    let settings = use_context::<Signal<AppSettings>>();

    let locale = settings().locale;
    let session = (session_handle.0)();
    let info = now_playing();
    let is_playing = session.is_playing();
    let volume_percent = (session.volume() * 100.0).round() as u32;

    let on_toggle = move |_| toggle_play(session_handle);
    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<f64>() {
            set_volume_percent(session_handle, value);
        }
    };

    rsx! {
        div { class: "flex flex-col items-center gap-8 pt-4",
            div { class: "w-64 h-64 rounded-2xl overflow-hidden shadow-2xl shadow-red-900/30 bg-zinc-800",
                img {
                    src: "{info.artwork_url}",
                    alt: "{info.title}",
                    class: "w-full h-full object-cover",
                }
            }

            div { class: "text-center space-y-1",
                p { class: "text-xl font-semibold text-white", "{info.title}" }
                if is_playing {
                    p { class: "inline-flex items-center gap-2 text-xs uppercase tracking-widest text-red-400",
                        span { class: "w-2 h-2 rounded-full bg-red-500 animate-pulse" }
                        "RVR"
                    }
                } else {
                    p { class: "text-xs uppercase tracking-widest text-zinc-500", "RVR" }
                }
            }

            button {
                class: "w-20 h-20 rounded-full bg-red-600 hover:bg-red-500 flex items-center justify-center shadow-lg shadow-red-600/30 transition-colors",
                aria_label: if is_playing {
                    i18n::text(locale, "player.stop").to_string()
                } else {
                    i18n::text(locale, "player.listen").to_string()
                },
                onclick: on_toggle,
                if is_playing {
                    Icon { name: "pause".to_string(), class: "w-8 h-8 text-white".to_string() }
                } else {
                    Icon {
                        name: "play".to_string(),
                        class: "w-8 h-8 text-white ml-1".to_string(),
                    }
                }
            }

            div { class: "flex items-center gap-3 w-full max-w-xs",
                Icon {
                    name: "volume".to_string(),
                    class: "w-5 h-5 text-zinc-400 flex-shrink-0".to_string(),
                }
                input {
                    class: "w-full accent-red-500",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{volume_percent}",
                    aria_label: i18n::text(locale, "player.volume").to_string(),
                    oninput: on_volume_change,
                }
            }
        }
    }
}
