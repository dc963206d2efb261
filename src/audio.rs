// Audio side effects of the game: unlocking the browser's audio output on the
// first user gesture, and the short "pop" cue played for every burst.
// Audio is best-effort. Nothing here may interrupt the simulation.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, HtmlAudioElement, HtmlMediaElement};

pub trait AudioOutput {
    // Resume the output context if the browser suspended it. Idempotent.
    fn ensure_running(&mut self);
    fn is_loaded(&self) -> bool;
    fn stop(&mut self);
    fn play(&mut self);
}

// Restarts the cue instead of stacking overlapping copies
pub fn cue_pop<A: AudioOutput + ?Sized>(audio: &mut A) {
    if audio.is_loaded() {
        audio.stop();
        audio.play();
    }
}

/// Silent output, used when the browser gives us nothing to play through.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAudio;

impl AudioOutput for NoAudio {
    fn ensure_running(&mut self) {}

    fn is_loaded(&self) -> bool {
        false
    }

    fn stop(&mut self) {}

    fn play(&mut self) {}
}

/// Browser audio: a preloaded `<audio>` element holding the pop sound, played
/// through an `AudioContext` that needs resuming after a user gesture.
pub struct WebAudio {
    context: Option<AudioContext>,
    sound: Option<HtmlAudioElement>,
    // Swallows rejected play() promises, e.g. when the next pop interrupts this one
    on_play_rejected: Closure<dyn FnMut(JsValue)>,
}

impl WebAudio {
    pub fn new(sound_url: &str, volume: f64) -> WebAudio {
        let context = match AudioContext::new() {
            Ok(context) => Some(context),
            Err(err) => {
                warn!("audio context unavailable: {:?}", err);
                None
            }
        };
        let sound = match HtmlAudioElement::new_with_src(sound_url) {
            Ok(sound) => {
                sound.set_preload("auto");
                sound.set_volume(volume);
                Some(sound)
            }
            Err(err) => {
                warn!("failed to create audio element for {}: {:?}", sound_url, err);
                None
            }
        };
        if let (Some(context), Some(sound)) = (&context, &sound) {
            route_through(context, sound);
        }
        let on_play_rejected = Closure::wrap(Box::new(|err: JsValue| {
            debug!("pop sound playback rejected: {:?}", err);
        }) as Box<dyn FnMut(JsValue)>);
        WebAudio {
            context,
            sound,
            on_play_rejected,
        }
    }
}

// Plays the element through the context so that resuming the context is what
// makes it audible. On failure the element keeps playing on its own.
fn route_through(context: &AudioContext, sound: &HtmlAudioElement) {
    let routed = context
        .create_media_element_source(sound)
        .and_then(|source| source.connect_with_audio_node(&context.destination()));
    if let Err(err) = routed {
        warn!("pop sound not routed through audio context: {:?}", err);
    }
}

impl AudioOutput for WebAudio {
    fn ensure_running(&mut self) {
        if let Some(context) = &self.context {
            if context.state() != AudioContextState::Running {
                if let Err(err) = context.resume() {
                    warn!("failed to resume audio context: {:?}", err);
                }
            }
        }
    }

    fn is_loaded(&self) -> bool {
        self.sound
            .as_ref()
            .map(|sound| sound.ready_state() >= HtmlMediaElement::HAVE_ENOUGH_DATA)
            .unwrap_or(false)
    }

    fn stop(&mut self) {
        if let Some(sound) = &self.sound {
            if let Err(err) = sound.pause() {
                warn!("failed to pause pop sound: {:?}", err);
            }
            sound.set_current_time(0.0);
        }
    }

    fn play(&mut self) {
        if let Some(sound) = &self.sound {
            // Fire-and-forget: only a rejection handler is attached
            match sound.play() {
                Ok(promise) => {
                    let _ = promise.catch(&self.on_play_rejected);
                }
                Err(err) => warn!("failed to play pop sound: {:?}", err),
            }
        }
    }
}
