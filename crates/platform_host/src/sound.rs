//! Fire-and-forget UI sound cue contract.

use std::{cell::RefCell, rc::Rc};

/// Named UI sound cues emitted by window lifecycle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A window was opened or reactivated.
    Open,
    /// A window was closed.
    Close,
    /// A window was minimized.
    Minimize,
}

impl SoundCue {
    /// Returns the stable cue name used by players and diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Minimize => "minimize",
        }
    }
}

/// Host service that plays [`SoundCue`] values.
///
/// Implementations must return immediately; playback failures are the player's concern and never
/// reach the caller.
pub trait SoundCuePlayer {
    /// Starts playback of `cue`.
    fn play(&self, cue: SoundCue);
}

#[derive(Debug, Clone, Copy, Default)]
/// Player that discards every cue.
pub struct NoopSoundCuePlayer;

impl SoundCuePlayer for NoopSoundCuePlayer {
    fn play(&self, _cue: SoundCue) {}
}

#[derive(Debug, Clone, Default)]
/// Player that records cues in order, for tests and diagnostics.
pub struct RecordingSoundCuePlayer {
    played: Rc<RefCell<Vec<SoundCue>>>,
}

impl RecordingSoundCuePlayer {
    /// Returns every cue played so far.
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.borrow().clone()
    }
}

impl SoundCuePlayer for RecordingSoundCuePlayer {
    fn play(&self, cue: SoundCue) {
        self.played.borrow_mut().push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_tokens_are_stable() {
        assert_eq!(SoundCue::Open.token(), "open");
        assert_eq!(SoundCue::Close.token(), "close");
        assert_eq!(SoundCue::Minimize.token(), "minimize");
    }

    #[test]
    fn recording_player_keeps_order_across_clones() {
        let player = RecordingSoundCuePlayer::default();
        let handle: Rc<dyn SoundCuePlayer> = Rc::new(player.clone());
        handle.play(SoundCue::Open);
        handle.play(SoundCue::Minimize);
        assert_eq!(player.played(), vec![SoundCue::Open, SoundCue::Minimize]);
    }
}
