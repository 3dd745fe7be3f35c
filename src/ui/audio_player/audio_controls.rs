use egui::{Align, Button, Color32, Layout, RichText, Slider, Ui};
use egui_phosphor::regular;

use super::audio_state::AudioState;

/// Transport controls for the document's narration.
///
/// Rendered under the page canvas. When the audio index found no narration
/// for the open document the row collapses to a hint label and no transport
/// command can be issued.
pub struct AudioControls;

impl AudioControls {
    pub fn show(ui: &mut Ui, state: &mut AudioState) {
        if !state.has_audio() {
            ui.label(RichText::new("无音频 No narration for this document").weak());
            return;
        }
        if !state.is_available() {
            ui.label(RichText::new("Audio device unavailable").weak());
            return;
        }

        // Keep the position readout moving while playback runs
        if state.is_playing {
            ui.ctx().request_repaint();
        }

        if let Some(track) = &state.current {
            ui.label(
                RichText::new(format!("{} {}", regular::MUSIC_NOTES, track.title))
                    .color(ui.visuals().strong_text_color()),
            );
            ui.add_space(4.0);
        }

        ui.horizontal(|ui| {
            let play_btn = Button::new(
                RichText::new(format!("{} 播放 Play", regular::PLAY))
                    .color(Color32::from_rgb(100, 200, 100)),
            );
            if ui.add(play_btn).clicked() {
                state.play();
            }

            let pause_btn = Button::new(format!("{} 暂停 Pause", regular::PAUSE));
            if ui.add(pause_btn).clicked() {
                state.pause();
            }

            let stop_btn = Button::new(
                RichText::new(format!("{} 停止 Stop", regular::STOP))
                    .color(Color32::from_rgb(255, 100, 100)),
            );
            if ui.add(stop_btn).clicked() {
                state.stop();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let mut volume = state.volume * 100.0;
                let slider_response = ui
                    .scope(|ui| {
                        ui.spacing_mut().slider_width = 80.0;
                        ui.add(Slider::new(&mut volume, 0.0..=100.0).show_value(false))
                    })
                    .inner;
                if slider_response.changed() {
                    state.set_volume(volume / 100.0);
                }

                let volume_icon = if state.is_muted || state.volume <= 0.0 {
                    regular::SPEAKER_NONE
                } else if state.volume < 0.5 {
                    regular::SPEAKER_LOW
                } else {
                    regular::SPEAKER_HIGH
                };
                let mute_btn = Button::new(RichText::new(volume_icon).size(16.0)).frame(false);
                if ui.add(mute_btn).on_hover_text("Mute / unmute").clicked() {
                    state.toggle_mute();
                }
            });
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} / {}",
                    state.format_position(),
                    state.format_duration()
                ))
                .monospace(),
            );
            ui.add(egui::ProgressBar::new(state.progress()).desired_width(
                ui.available_width(),
            ));
        });
    }
}
