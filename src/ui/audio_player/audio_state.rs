use std::path::PathBuf;

use super::audio_backend::{AudioBackend, PlatformAudioBackend};

/// Narration attached to the open document.
#[derive(Debug, Clone)]
pub struct NarrationTrack {
    /// Path recorded for this document in the audio index
    pub path: PathBuf,
    /// Document name, shown next to the transport controls
    pub title: String,
}

/// Audio player state
pub struct AudioState {
    /// Narration for the current document (if any was indexed)
    pub current: Option<NarrationTrack>,

    /// Is the audio currently playing
    pub is_playing: bool,

    /// Current volume (0.0 - 1.0)
    pub volume: f32,

    /// Is the audio muted
    pub is_muted: bool,

    /// Previous volume before mute
    pub previous_volume: f32,

    /// Audio backend for playback
    backend: Option<Box<dyn AudioBackend>>,
}

// Manual Debug implementation since dyn AudioBackend doesn't implement Debug
impl std::fmt::Debug for AudioState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioState")
            .field("current", &self.current)
            .field("is_playing", &self.is_playing)
            .field("volume", &self.volume)
            .field("is_muted", &self.is_muted)
            .field("backend", &"<audio backend>")
            .finish()
    }
}

impl Default for AudioState {
    fn default() -> Self {
        let mut state = Self {
            current: None,
            is_playing: false,
            volume: 1.0,
            is_muted: false,
            previous_volume: 1.0,
            backend: None,
        };

        match state.init_backend() {
            Ok(()) => log::info!("Audio backend initialized successfully"),
            Err(e) => log::error!("Failed to initialize audio backend: {}", e),
        }

        state
    }
}

impl AudioState {
    pub fn new() -> Self {
        Self::default()
    }

    fn init_backend(&mut self) -> Result<(), String> {
        let mut backend = Box::new(PlatformAudioBackend::new());
        backend.init()?;
        self.backend = Some(backend);
        Ok(())
    }

    /// Swap in the narration for a newly opened document (or `None` when
    /// the index has nothing for it). Any current playback stops.
    pub fn load(&mut self, track: Option<NarrationTrack>) {
        self.stop();
        self.current = track;
    }

    pub fn has_audio(&self) -> bool {
        self.current.is_some()
    }

    /// Whether a playback backend actually came up at startup.
    pub fn is_available(&self) -> bool {
        self.backend.as_ref().is_some_and(|b| b.is_available())
    }

    /// Start playback from the beginning of the narration.
    pub fn play(&mut self) {
        let Some(track) = &self.current else {
            return;
        };
        let path = track.path.clone();

        if let Some(backend) = &mut self.backend {
            match backend.play(&path) {
                Ok(()) => {
                    self.is_playing = true;
                    let volume = if self.is_muted { 0.0 } else { self.volume };
                    if let Err(e) = backend.set_volume(volume) {
                        log::error!("Failed to apply volume: {}", e);
                    }
                }
                Err(e) => {
                    log::error!("Failed to play {}: {}", path.display(), e);
                    self.is_playing = false;
                }
            }
        }
    }

    /// Pause in place. Pressing play afterwards restarts from the top.
    pub fn pause(&mut self) {
        self.is_playing = false;

        if let Some(backend) = &mut self.backend {
            if let Err(e) = backend.pause() {
                // Expected when nothing is playing yet
                if e.contains("No audio playing") {
                    log::debug!("Pause called but no audio is currently playing");
                } else {
                    log::error!("Failed to pause audio: {}", e);
                }
            }
        }
    }

    /// Stop the audio playback
    pub fn stop(&mut self) {
        self.is_playing = false;

        if let Some(backend) = &mut self.backend {
            if let Err(e) = backend.stop() {
                if e.contains("No audio playing") {
                    log::debug!("Stop called but no audio is currently playing");
                } else {
                    log::error!("Failed to stop audio: {}", e);
                }
            }
        }
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        if self.is_muted {
            self.volume = self.previous_volume;
            self.is_muted = false;
        } else {
            self.previous_volume = self.volume;
            self.is_muted = true;
        }

        self.apply_volume();
    }

    /// Set the volume (0.0 - 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if self.volume > 0.0 {
            self.is_muted = false;
        }

        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        let volume = if self.is_muted { 0.0 } else { self.volume };
        if let Some(backend) = &mut self.backend {
            if let Err(e) = backend.set_volume(volume) {
                log::error!("Failed to set audio volume: {}", e);
            }
        }
    }

    /// Sync `is_playing` with the backend; a track that ran off its end
    /// reads as stopped.
    pub fn update_from_backend(&mut self) {
        if let Some(backend) = &self.backend {
            if self.is_playing {
                self.is_playing = backend.is_playing();
            }
        }
    }

    pub fn position(&self) -> f32 {
        self.backend.as_ref().map_or(0.0, |b| b.position())
    }

    pub fn duration(&self) -> f32 {
        self.backend.as_ref().map_or(0.0, |b| b.duration())
    }

    /// Get playback progress as a ratio (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        let duration = self.duration();
        if duration > 0.0 {
            self.position() / duration
        } else {
            0.0
        }
    }

    /// Get formatted current position (MM:SS)
    pub fn format_position(&self) -> String {
        format_seconds(self.position())
    }

    /// Get formatted total duration (MM:SS)
    pub fn format_duration(&self) -> String {
        format_seconds(self.duration())
    }
}

fn format_seconds(seconds: f32) -> String {
    let minutes = (seconds / 60.0).floor() as u32;
    let seconds = (seconds % 60.0).floor() as u32;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_as_minutes_and_seconds() {
        assert_eq!(format_seconds(0.0), "00:00");
        assert_eq!(format_seconds(75.4), "01:15");
        assert_eq!(format_seconds(600.0), "10:00");
    }

    #[test]
    fn mute_restores_previous_volume() {
        let mut state = AudioState::new();
        state.set_volume(0.6);

        state.toggle_mute();
        assert!(state.is_muted);
        assert_eq!(state.volume, 0.6);

        state.toggle_mute();
        assert!(!state.is_muted);
        assert_eq!(state.volume, 0.6);
    }

    #[test]
    fn setting_volume_clears_mute() {
        let mut state = AudioState::new();
        state.toggle_mute();
        state.set_volume(0.3);
        assert!(!state.is_muted);
        assert_eq!(state.volume, 0.3);
    }

    #[test]
    fn volume_is_clamped() {
        let mut state = AudioState::new();
        state.set_volume(2.5);
        assert_eq!(state.volume, 1.0);
        state.set_volume(-1.0);
        assert_eq!(state.volume, 0.0);
    }

    #[test]
    fn progress_is_zero_without_audio() {
        let state = AudioState::new();
        assert_eq!(state.progress(), 0.0);
    }
}
