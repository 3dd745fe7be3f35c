#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use readalong::library::{self, AudioIndex};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Build the narration index once, up front. A missing or unreadable
    // narration root leaves the documents browsable with no transport row.
    let audio_index = match AudioIndex::scan(&library::narration_root()) {
        Ok(index) => {
            log::info!("narration index ready: {} entries", index.len());
            index
        }
        Err(e) => {
            log::warn!("narration index unavailable: {}", e);
            AudioIndex::default()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PDF & MP3 Player",
        native_options,
        Box::new(|cc| Ok(Box::new(readalong::PlayerApp::new(cc, audio_index)))),
    )
}
