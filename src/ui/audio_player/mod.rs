// Audio player module components
mod audio_backend;
mod audio_controls;
mod audio_state;

// Re-export the main components
pub use audio_controls::AudioControls;
pub use audio_state::{AudioState, NarrationTrack};
