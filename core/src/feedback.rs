use core::fmt;
use serde::{Deserialize, Serialize};

/// Sound-like cues the engine can ask its feedback collaborator for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Explosion,
}

impl Cue {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Explosion => "explosion",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fire-and-forget receiver of engine cues. The engine never asks whether a cue was actually played, muting and asset
/// handling are up to the implementation.
pub trait Feedback {
    fn prepare(&mut self, cue: Cue);
    fn play(&mut self, cue: Cue);
    fn stop_all(&mut self);
}

impl<F: Feedback + ?Sized> Feedback for &mut F {
    fn prepare(&mut self, cue: Cue) {
        (**self).prepare(cue)
    }

    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }

    fn stop_all(&mut self) {
        (**self).stop_all()
    }
}

/// Ignores every cue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Silent;

impl Feedback for Silent {
    fn prepare(&mut self, _cue: Cue) {}

    fn play(&mut self, _cue: Cue) {}

    fn stop_all(&mut self) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Prepare(Cue),
    Play(Cue),
    StopAll,
}

/// Keeps every received signal in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recorder {
    signals: Vec<Signal>,
}

impl Recorder {
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Returns the signals received so far and starts over.
    pub fn take(&mut self) -> Vec<Signal> {
        core::mem::take(&mut self.signals)
    }
}

impl Feedback for Recorder {
    fn prepare(&mut self, cue: Cue) {
        self.signals.push(Signal::Prepare(cue));
    }

    fn play(&mut self, cue: Cue) {
        self.signals.push(Signal::Play(cue));
    }

    fn stop_all(&mut self) {
        self.signals.push(Signal::StopAll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order_and_take_drains() {
        let mut recorder = Recorder::default();
        recorder.stop_all();
        recorder.prepare(Cue::Explosion);
        recorder.play(Cue::Explosion);

        assert_eq!(
            recorder.take(),
            vec![
                Signal::StopAll,
                Signal::Prepare(Cue::Explosion),
                Signal::Play(Cue::Explosion)
            ]
        );
        assert!(recorder.signals().is_empty());
    }

    #[test]
    fn forwards_through_mutable_reference() {
        fn explode(mut feedback: impl Feedback) {
            feedback.play(Cue::Explosion);
        }

        let mut recorder = Recorder::default();
        explode(&mut recorder);
        assert_eq!(recorder.signals(), &[Signal::Play(Cue::Explosion)]);
    }
}
