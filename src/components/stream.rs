//! Stream session - owns the single live-audio element and the
//! now-playing poller, outside of the component render cycle. The
//! element is created lazily inside the first play gesture (autoplay
//! policy forbids creating-and-playing earlier) and its source is
//! detached on stop so the next play reconnects cleanly instead of
//! resuming a stale buffer.

#[cfg(target_arch = "wasm32")]
use crate::api::metadata::fetch_now_playing;
use crate::api::models::NowPlayingInfo;
#[cfg(target_arch = "wasm32")]
use crate::db::AppSettings;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// The station's fixed live stream.
pub const STREAM_URL: &str = "https://sr10.inmystream.it/proxy/rvr?mp=/stream";

/// Cadence of the now-playing poller while the stream is audible.
pub const POLL_INTERVAL_MS: u32 = 15_000;

const AUDIO_ELEMENT_ID: &str = "rvr-live-audio";
const DEFAULT_VOLUME: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Stopped => Self::Playing,
            Self::Playing => Self::Stopped,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// The one playback session, constructed once at the app root and handed
/// to consumers through context. Every transition bumps the epoch; async
/// work started under an older epoch discards its result instead of
/// writing stale state.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSession {
    state: PlaybackState,
    volume: f64,
    epoch: u64,
}

impl Default for StreamSession {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            volume: DEFAULT_VOLUME,
            epoch: 0,
        }
    }
}

impl StreamSession {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Flip between stopped and playing.
    pub fn toggle(&mut self) -> PlaybackState {
        self.state = self.state.toggled();
        self.epoch += 1;
        self.state
    }

    /// Revert to stopped after a rejected play request or an
    /// unrecoverable element error. No-op while already stopped.
    pub fn force_stop(&mut self) {
        if self.state.is_playing() {
            self.state = PlaybackState::Stopped;
            self.epoch += 1;
        }
    }

    /// Clamp and retain the volume. Applies to the live element via the
    /// controller; a later-created element inherits it.
    pub fn set_volume(&mut self, level: f64) {
        self.volume = normalize_volume(level);
    }

    /// Whether a poll result started under `epoch` may still be applied.
    pub fn accepts_update(&self, epoch: u64) -> bool {
        self.state.is_playing() && self.epoch == epoch
    }
}

fn normalize_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    value.clamp(0.0, 1.0)
}

/// Context handle for the shared session.
#[derive(Clone, Copy)]
pub struct SessionSignal(pub Signal<StreamSession>);

/// Context handle for the shared now-playing info.
#[derive(Clone, Copy)]
pub struct NowPlayingSignal(pub Signal<NowPlayingInfo>);

/// Toggle helper for the play buttons.
pub fn toggle_play(session: SessionSignal) {
    let mut signal = session.0;
    signal.write().toggle();
}

/// Volume helper for the sliders (input is the element's 0-100 range).
pub fn set_volume_percent(session: SessionSignal, percent: f64) {
    let mut signal = session.0;
    signal.write().set_volume(percent / 100.0);
}

/// Initialize the live audio element once.
#[cfg(target_arch = "wasm32")]
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // A live stream has nothing worth preloading before the gesture.
    audio.set_attribute("preload", "none").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Request playback and revert the session if the browser rejects it
/// (autoplay policy, unreachable stream). The rejection is logged, never
/// surfaced as UI.
#[cfg(target_arch = "wasm32")]
fn try_play(audio: &HtmlAudioElement, session: Signal<StreamSession>) {
    match audio.play() {
        Ok(promise) => {
            let mut session = session;
            spawn(async move {
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    warn!("live stream play request rejected");
                    session.write().force_stop();
                }
            });
        }
        Err(_) => {
            warn!("live stream play request could not be issued");
            let mut session = session;
            session.write().force_stop();
        }
    }
}

/// Stream controller - drives the audio element and the poller from the
/// session state. Renders nothing.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn StreamController() -> Element {
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn StreamController() -> Element {
    let session = use_context::<SessionSignal>().0;
    let mut now_playing = use_context::<NowPlayingSignal>().0;
    let settings = use_context::<Signal<AppSettings>>();

    // Track the last state this effect acted on so volume-only writes to
    // the session don't re-run the transition logic.
    let mut last_state = use_signal(PlaybackState::default);

    use_effect(move || {
        let snapshot = session();
        let locale = settings.peek().locale;

        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(snapshot.volume());
        }

        if snapshot.state() == last_state() {
            return;
        }
        last_state.set(snapshot.state());

        match snapshot.state() {
            PlaybackState::Playing => {
                let Some(audio) = get_or_create_audio_element() else {
                    let mut session = session;
                    session.write().force_stop();
                    return;
                };
                audio.set_src(STREAM_URL);
                audio.set_volume(snapshot.volume());
                try_play(&audio, session);

                // Poller: one immediate fetch, then fixed ticks, ending
                // as soon as the epoch moves on. A fetch resolving after
                // a stop is discarded, never written.
                let epoch = snapshot.epoch();
                spawn(async move {
                    loop {
                        let info = fetch_now_playing(locale).await;
                        if !session.peek().accepts_update(epoch) {
                            break;
                        }
                        now_playing.set(info);

                        gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                        if !session.peek().accepts_update(epoch) {
                            break;
                        }
                    }
                });
            }
            PlaybackState::Stopped => {
                if let Some(audio) = get_or_create_audio_element() {
                    let _ = audio.pause();
                    audio.set_src("");
                }
                now_playing.set(NowPlayingInfo::live_default(locale));
            }
        }
    });

    // Keep the stopped-state placeholder in the listener's language.
    use_effect(move || {
        let locale = settings().locale;
        if !session.peek().is_playing() {
            now_playing.set(NowPlayingInfo::live_default(locale));
        }
    });

    // Navigation away must not leave a live element or poller behind.
    use_drop(move || {
        let mut session = session;
        session.write().force_stop();
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
            audio.set_src("");
        }
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_and_alternates_strictly() {
        let mut session = StreamSession::default();
        assert_eq!(session.state(), PlaybackState::Stopped);

        for round in 0..5 {
            assert_eq!(
                session.toggle(),
                PlaybackState::Playing,
                "round {round}: odd toggles play"
            );
            assert_eq!(
                session.toggle(),
                PlaybackState::Stopped,
                "round {round}: even toggles stop"
            );
        }
    }

    #[test]
    fn volume_reads_back_in_any_state() {
        let mut session = StreamSession::default();
        session.set_volume(0.25);
        assert_eq!(session.volume(), 0.25);

        session.toggle();
        session.set_volume(1.0);
        assert_eq!(session.volume(), 1.0);
        session.set_volume(0.0);
        assert_eq!(session.volume(), 0.0);
    }

    #[test]
    fn volume_is_clamped() {
        let mut session = StreamSession::default();
        session.set_volume(1.7);
        assert_eq!(session.volume(), 1.0);
        session.set_volume(-0.3);
        assert_eq!(session.volume(), 0.0);
        session.set_volume(f64::NAN);
        assert_eq!(session.volume(), DEFAULT_VOLUME);
    }

    #[test]
    fn volume_changes_do_not_move_the_epoch() {
        let mut session = StreamSession::default();
        let epoch = session.epoch();
        session.set_volume(0.5);
        assert_eq!(session.epoch(), epoch);
    }

    #[test]
    fn stale_poll_results_are_rejected_after_stop() {
        let mut session = StreamSession::default();
        session.toggle();
        let poll_epoch = session.epoch();
        assert!(session.accepts_update(poll_epoch));

        // Listener stops before the in-flight fetch resolves.
        session.toggle();
        assert!(
            !session.accepts_update(poll_epoch),
            "a fetch from a stopped session must be discarded"
        );

        // Even a fresh play session rejects the old epoch.
        session.toggle();
        assert!(!session.accepts_update(poll_epoch));
        assert!(session.accepts_update(session.epoch()));
    }

    #[test]
    fn force_stop_only_acts_while_playing() {
        let mut session = StreamSession::default();
        let epoch = session.epoch();
        session.force_stop();
        assert_eq!(session.epoch(), epoch, "stopped sessions stay put");

        session.toggle();
        session.force_stop();
        assert_eq!(session.state(), PlaybackState::Stopped);
        assert!(session.epoch() > epoch);
    }

    #[test]
    fn updates_require_a_playing_state() {
        let session = StreamSession::default();
        assert!(
            !session.accepts_update(session.epoch()),
            "a stopped session accepts no updates even for its own epoch"
        );
    }
}
