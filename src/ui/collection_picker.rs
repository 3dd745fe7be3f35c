use egui::{Button, RichText, Ui};
use egui_phosphor::regular;

/// Home screen: one button per collection folder.
pub struct CollectionPicker;

impl CollectionPicker {
    /// Returns the collection the user clicked, if any.
    pub fn show(ui: &mut Ui, collections: &[String]) -> Option<String> {
        let mut picked = None;

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading("请选择文件夹 Choose a folder");
            ui.add_space(16.0);

            if collections.is_empty() {
                ui.label(RichText::new(regular::FOLDER_DASHED).size(32.0).weak());
                ui.add_space(8.0);
                ui.label(RichText::new("No collections found").weak());
                return;
            }

            ui.horizontal_wrapped(|ui| {
                for collection in collections {
                    let btn = Button::new(format!("{} {}", regular::FOLDER, collection));
                    if ui.add(btn).clicked() {
                        picked = Some(collection.clone());
                    }
                }
            });
        });

        picked
    }
}
