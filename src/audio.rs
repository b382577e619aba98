//! Sound cues. There is no mixer: the terminal bell is the only speaker.

use crate::game::GameEvent;
use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Death,
    Score,
}

impl SoundCue {
    /// The cue a game event should play, if any.
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundCue::Jump),
            GameEvent::Died { .. } => Some(SoundCue::Death),
            GameEvent::Scored(_) => Some(SoundCue::Score),
            _ => None,
        }
    }
}

/// Somewhere to send sound cues.
///
/// Sinks may skip cues they cannot voice; the terminal bell skips `Jump`.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue) -> io::Result<()>;

    /// Play every cue a batch of events implies.
    fn play_events(&mut self, events: &[GameEvent]) -> io::Result<()> {
        for cue in events.iter().filter_map(SoundCue::for_event) {
            self.play(cue)?;
        }
        Ok(())
    }
}

/// Rings BEL on the wrapped writer. Jumps are too frequent to ring for.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) -> io::Result<()> {
        match cue {
            SoundCue::Jump => {
                log::trace!("jump cue not rung on the bell");
                Ok(())
            }
            SoundCue::Death | SoundCue::Score => {
                self.out.queue(Print('\x07'))?;
                self.out.flush()
            }
        }
    }
}

/// Swallows everything (`--mute`, or `sound: false` in the config).
pub struct Muted;

impl SoundSink for Muted {
    fn play(&mut self, _cue: SoundCue) -> io::Result<()> {
        Ok(())
    }
}

/// Pick the sink for the current settings.
pub fn sink_for(sound: bool) -> Box<dyn SoundSink> {
    if sound {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Muted)
    }
}
