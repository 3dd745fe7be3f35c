use egui::{Align, Button, Layout, RichText, ScrollArea, Ui};
use egui_phosphor::regular;

use crate::library::AudioIndex;

/// What the user did on the document list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentListAction {
    /// Open the named document
    Open(String),
    /// Go back to the collection chooser
    Back,
}

/// Second screen: the documents of one collection.
#[derive(Default)]
pub struct DocumentList {
    filter: String,
}

impl DocumentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names matching the filter box, in shelf order.
    fn filtered<'a>(&self, documents: &'a [String]) -> Vec<&'a String> {
        if self.filter.is_empty() {
            return documents.iter().collect();
        }

        let query = self.filter.to_lowercase();
        documents
            .iter()
            .filter(|name| name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        collection: &str,
        documents: &[String],
        narration: &AudioIndex,
    ) -> Option<DocumentListAction> {
        let mut action = None;

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let back_btn = Button::new(format!("{} 返回 Back", regular::ARROW_LEFT));
            if ui.add(back_btn).clicked() {
                action = Some(DocumentListAction::Back);
            }
            ui.heading(format!("{} {}", regular::FOLDER_OPEN, collection));
        });
        ui.add_space(8.0);

        // Name filter box
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .corner_radius(4.0)
            .inner_margin(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(regular::MAGNIFYING_GLASS).weak());

                    ui.add(
                        egui::TextEdit::singleline(&mut self.filter)
                            .desired_width(ui.available_width() - 24.0)
                            .hint_text("Filter documents...")
                            .frame(false),
                    );

                    if !self.filter.is_empty()
                        && ui.button(regular::X).on_hover_text("Clear").clicked()
                    {
                        self.filter.clear();
                    }
                });
            });
        ui.add_space(8.0);

        if documents.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(RichText::new(regular::FILE_DASHED).size(32.0).weak());
                ui.add_space(8.0);
                ui.label(RichText::new("No documents in this folder").weak());
            });
            return action;
        }

        let filtered = self.filtered(documents);
        if filtered.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(RichText::new("No matching documents").weak());
            });
            return action;
        }

        let row_height = 28.0;
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show_rows(ui, row_height, filtered.len(), |ui, row_range| {
                for i in row_range {
                    let name = filtered[i];

                    ui.horizontal(|ui| {
                        let label = format!("{} {}", regular::FILE_PDF, name);
                        if ui.selectable_label(false, label).clicked() {
                            action = Some(DocumentListAction::Open(name.clone()));
                        }

                        // Mark documents that have narration indexed
                        if narration.get(name).is_some() {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(regular::MUSIC_NOTES).weak())
                                    .on_hover_text("Has narration");
                            });
                        }
                    });
                }
            });

        action
    }
}
