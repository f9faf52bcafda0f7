use std::collections::HashSet;
use std::io::Write;
use sweeper_core::{Cue, Feedback};

/// Plays cues as a terminal bell plus a short line of text.
///
/// A cue has to be prepared before it can be played, like loading an audio asset. Muting stops whatever is playing
/// and silences later cues.
#[derive(Debug)]
pub(crate) struct TerminalCues<W: Write> {
    out: W,
    prepared: HashSet<Cue>,
    playing: Vec<Cue>,
    muted: bool,
}

impl<W: Write> TerminalCues<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prepared: HashSet::new(),
            playing: Vec::new(),
            muted: false,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.stop_all();
        }
    }

    fn text(cue: Cue) -> &'static str {
        match cue {
            Cue::Explosion => "\x07*** BOOM ***",
        }
    }
}

impl<W: Write> Feedback for TerminalCues<W> {
    fn prepare(&mut self, cue: Cue) {
        if self.prepared.insert(cue) {
            log::trace!("Prepared cue {cue}");
        }
    }

    fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        if !self.prepared.contains(&cue) {
            log::warn!("Cue {cue} has no associated player, was it prepared?");
            return;
        }

        if let Err(err) = writeln!(self.out, "{}", Self::text(cue)) {
            log::warn!("Could not play cue {cue}: {err}");
            return;
        }
        self.playing.push(cue);
    }

    fn stop_all(&mut self) {
        for cue in self.playing.drain(..) {
            log::debug!("Stopped cue {cue}");
        }
    }
}
