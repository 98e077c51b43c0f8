//! Sound cues
//!
//! Gameplay only names a cue; the device decides how to play it. The rodio
//! device decodes each clip from memory on every play and detaches the sink so
//! cues overlap freely.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Flap,
    Point,
    Crash,
    PowerUp,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [SoundCue::Flap, SoundCue::Point, SoundCue::Crash, SoundCue::PowerUp];

    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Flap => "sfx_wing.mp3",
            SoundCue::Point => "sfx_point.mp3",
            SoundCue::Crash => "crash.mp3",
            SoundCue::PowerUp => "power_up.mp3",
        }
    }
}

/// Fire-and-forget playback
pub trait SoundDevice {
    fn play(&mut self, cue: SoundCue);
}

pub struct RodioSound {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: HashMap<SoundCue, Vec<u8>>,
}

impl RodioSound {
    /// Opens the default output and reads every clip from `directory`.
    pub fn load(directory: &Path) -> Result<Self, String> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| format!("Failed to open audio output: {}", e))?;

        let mut clips = HashMap::new();
        for cue in SoundCue::ALL {
            let path = directory.join(cue.file_name());
            let bytes = std::fs::read(&path)
                .map_err(|e| format!("Failed to load sound {}: {}", path.display(), e))?;
            // Reject undecodable files now rather than on first play
            Decoder::new(Cursor::new(bytes.clone()))
                .map_err(|e| format!("Failed to decode sound {}: {}", path.display(), e))?;
            clips.insert(cue, bytes);
        }

        tracing::info!("Loaded {} sound cues from {}", clips.len(), directory.display());

        Ok(RodioSound {
            _stream: stream,
            handle,
            clips,
        })
    }
}

impl SoundDevice for RodioSound {
    fn play(&mut self, cue: SoundCue) {
        let Some(bytes) = self.clips.get(&cue) else {
            return;
        };
        let Ok(sink) = Sink::try_new(&self.handle) else {
            tracing::debug!("No sink available for {:?}", cue);
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) else {
            return;
        };
        sink.append(source);
        sink.detach();
    }
}

/// Keeps every cue in order instead of playing it
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSound {
    pub played: Vec<SoundCue>,
}

#[cfg(test)]
impl RecordingSound {
    pub fn count(&self, cue: SoundCue) -> usize {
        self.played.iter().filter(|&&c| c == cue).count()
    }
}

#[cfg(test)]
impl SoundDevice for RecordingSound {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}
