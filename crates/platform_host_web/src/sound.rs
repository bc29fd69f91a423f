//! Web Audio implementation of [`platform_host::SoundCuePlayer`].
//!
//! Cues are short synthesized sweeps, so the shell ships no audio assets. The audio context is
//! created lazily on the first cue, which always follows a user gesture (a click or key press that
//! opened, closed, or minimized a window).

use std::cell::RefCell;

use platform_host::{SoundCue, SoundCuePlayer};

const CUE_VOLUME: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CueTone {
    start_hz: f32,
    end_hz: f32,
    duration_s: f64,
}

fn cue_tone(cue: SoundCue) -> CueTone {
    match cue {
        SoundCue::Open => CueTone {
            start_hz: 660.0,
            end_hz: 880.0,
            duration_s: 0.12,
        },
        SoundCue::Close => CueTone {
            start_hz: 520.0,
            end_hz: 330.0,
            duration_s: 0.12,
        },
        SoundCue::Minimize => CueTone {
            start_hz: 440.0,
            end_hz: 220.0,
            duration_s: 0.18,
        },
    }
}

#[derive(Debug, Default)]
/// Browser sound cue player backed by a lazily created `AudioContext`.
pub struct WebSoundCuePlayer {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    context: RefCell<Option<web_sys::AudioContext>>,
}

impl WebSoundCuePlayer {
    #[cfg(target_arch = "wasm32")]
    fn with_context(&self, f: impl FnOnce(&web_sys::AudioContext)) {
        let mut slot = self.context.borrow_mut();
        if slot.is_none() {
            *slot = web_sys::AudioContext::new().ok();
        }
        if let Some(context) = slot.as_ref() {
            f(context);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn play_tone(context: &web_sys::AudioContext, tone: CueTone) -> Result<(), wasm_bindgen::JsValue> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    let now = context.current_time();
    let end = now + tone.duration_s;

    oscillator.set_type(web_sys::OscillatorType::Sine);
    oscillator.frequency().set_value_at_time(tone.start_hz, now)?;
    oscillator
        .frequency()
        .exponential_ramp_to_value_at_time(tone.end_hz, end)?;
    gain.gain().set_value_at_time(CUE_VOLUME, now)?;
    gain.gain().exponential_ramp_to_value_at_time(0.001, end)?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;
    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}

impl SoundCuePlayer for WebSoundCuePlayer {
    fn play(&self, cue: SoundCue) {
        #[cfg(target_arch = "wasm32")]
        {
            // Autoplay restrictions and missing audio devices surface as JS errors; cues are
            // best-effort.
            self.with_context(|context| {
                let _ = play_tone(context, cue_tone(cue));
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = cue_tone(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_cue_rises_and_close_cues_fall() {
        let open = cue_tone(SoundCue::Open);
        let close = cue_tone(SoundCue::Close);
        let minimize = cue_tone(SoundCue::Minimize);

        assert!(open.end_hz > open.start_hz);
        assert!(close.end_hz < close.start_hz);
        assert!(minimize.end_hz < minimize.start_hz);
        assert!(minimize.duration_s > close.duration_s);
    }

    #[test]
    fn non_wasm_playback_is_silent_noop() {
        let player = WebSoundCuePlayer::default();
        player.play(SoundCue::Open);
        player.play(SoundCue::Close);
    }
}
