use std::path::Path;
use std::time::Instant;

use kira::{
    AudioManager,
    AudioManagerSettings,
    DefaultBackend,
    Tween,
    sound::FromFileError,
    sound::streaming::{StreamingSoundData, StreamingSoundHandle},
};

use super::trait_def::AudioBackend;

/// Native audio backend implementation using kira
pub struct NativeAudioBackend {
    /// Audio manager for playback
    manager: Option<AudioManager<DefaultBackend>>,
    /// Handle to the currently playing sound
    sound_handle: Option<StreamingSoundHandle<FromFileError>>,
    /// Position frozen at the last pause or stop, in seconds
    current_position: f32,
    /// Start of the running play interval, for position tracking
    playback_start_time: Option<Instant>,
    /// Duration of the loaded file in seconds
    duration: f32,
    /// Is currently playing
    is_playing: bool,
    /// Whether backend initialization succeeded
    initialized: bool,
    /// Current volume level (0.0 - 1.0)
    volume: f32,
}

impl NativeAudioBackend {
    pub fn new() -> Self {
        Self {
            manager: None,
            sound_handle: None,
            current_position: 0.0,
            playback_start_time: None,
            duration: 0.0,
            is_playing: false,
            initialized: false,
            volume: 1.0,
        }
    }

    /// kira takes decibels; map linear 0-1 onto a -80dB..0dB range.
    fn volume_to_decibels(volume: f32) -> f32 {
        let clamped = volume.clamp(0.0, 1.0);
        if clamped <= 0.0 {
            -80.0
        } else {
            20.0 * clamped.log10()
        }
    }
}

impl AudioBackend for NativeAudioBackend {
    fn init(&mut self) -> Result<(), String> {
        match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => {
                self.manager = Some(manager);
                self.initialized = true;
                Ok(())
            }
            Err(e) => {
                self.initialized = false;
                Err(format!("Failed to initialize audio manager: {}", e))
            }
        }
    }

    fn play(&mut self, path: &Path) -> Result<(), String> {
        if !self.initialized {
            return Err("Audio backend not initialized".to_owned());
        }

        let manager = self
            .manager
            .as_mut()
            .ok_or_else(|| "Audio manager not available".to_owned())?;

        if let Some(mut handle) = self.sound_handle.take() {
            handle.stop(Tween::default());
        }

        let sound_data = StreamingSoundData::from_file(path)
            .map_err(|e| format!("Failed to load audio file: {}", e))?;

        let mut handle = manager
            .play(sound_data)
            .map_err(|e| format!("Failed to start audio playback: {}", e))?;

        self.duration = match mp3_duration::from_path(path) {
            Ok(d) => d.as_secs_f32(),
            Err(e) => {
                log::debug!("could not read duration of {}: {}", path.display(), e);
                0.0
            }
        };
        self.current_position = 0.0;
        self.playback_start_time = Some(Instant::now());
        self.is_playing = true;

        let volume_db = Self::volume_to_decibels(self.volume);
        let _ = handle.set_volume(volume_db, Tween::default());

        self.sound_handle = Some(handle);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        if self.is_playing && self.sound_handle.is_some() {
            self.current_position = self.position();
        }

        if let Some(handle) = &mut self.sound_handle {
            handle.pause(Tween::default());
            self.is_playing = false;
            self.playback_start_time = None;
            Ok(())
        } else {
            Err("No audio playing".to_owned())
        }
    }

    fn stop(&mut self) -> Result<(), String> {
        if let Some(mut handle) = self.sound_handle.take() {
            self.current_position = 0.0;
            self.playback_start_time = None;
            self.is_playing = false;

            handle.stop(Tween::default());
            Ok(())
        } else {
            Err("No audio playing".to_owned())
        }
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), String> {
        self.volume = volume;
        if let Some(handle) = &mut self.sound_handle {
            let volume_db = Self::volume_to_decibels(self.volume);
            let _ = handle.set_volume(volume_db, Tween::default());
        }
        Ok(())
    }

    fn is_playing(&self) -> bool {
        if self.is_playing && self.duration > 0.0 {
            return self.position() < self.duration;
        }

        self.is_playing
    }

    fn position(&self) -> f32 {
        match self.playback_start_time {
            Some(start_time) if self.is_playing => {
                let elapsed = start_time.elapsed().as_secs_f32();
                let position = self.current_position + elapsed;
                if self.duration > 0.0 {
                    position.min(self.duration)
                } else {
                    position
                }
            }
            _ => self.current_position,
        }
    }

    fn duration(&self) -> f32 {
        self.duration
    }

    fn is_available(&self) -> bool {
        self.initialized
    }
}

impl Default for NativeAudioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NativeAudioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeAudioBackend")
            .field("duration", &self.duration)
            .field("is_playing", &self.is_playing)
            .field("initialized", &self.initialized)
            .field("volume", &self.volume)
            .field("manager", &self.manager.as_ref().map(|_| "<audio manager>"))
            .field(
                "sound_handle",
                &self.sound_handle.as_ref().map(|_| "<sound handle>"),
            )
            .finish()
    }
}
