use std::path::Path;

/// Audio playback backend trait
///
/// Narration transport is fire-and-forget: callers log failures and move
/// on, they never propagate them into navigation.
pub trait AudioBackend {
    /// Initialize the audio backend
    fn init(&mut self) -> Result<(), String>;

    /// Start playing a file from its beginning, replacing any current sound
    fn play(&mut self, path: &Path) -> Result<(), String>;

    /// Pause playback in place
    fn pause(&mut self) -> Result<(), String>;

    /// Stop playback and rewind
    fn stop(&mut self) -> Result<(), String>;

    /// Set the volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32) -> Result<(), String>;

    /// Check if audio is currently playing
    fn is_playing(&self) -> bool;

    /// Current playback position in seconds
    fn position(&self) -> f32;

    /// Duration of the current audio in seconds, 0.0 when unknown
    fn duration(&self) -> f32;

    /// Check if the backend is available (properly initialized)
    fn is_available(&self) -> bool;
}
