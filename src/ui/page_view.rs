use egui::{Align, Button, Layout, RichText, TextureHandle, Ui, Vec2};
use egui_phosphor::regular;

use crate::library::NavigationState;
use crate::pdf::{PAGE_VIEW_HEIGHT, PAGE_VIEW_WIDTH};

use super::audio_player::{AudioControls, AudioState};

/// What the user did on the viewer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Back to the document list
    Back,
    /// Step one page backwards
    PrevPage,
    /// Step one page forwards
    NextPage,
}

/// Third screen: the open document, one page at a time.
pub struct PageView;

impl PageView {
    pub fn show(
        ui: &mut Ui,
        navigation: &NavigationState,
        page_texture: Option<&TextureHandle>,
        audio: &mut AudioState,
    ) -> Option<PageAction> {
        let mut action = None;

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let back_btn = Button::new(format!("{} 返回 Back", regular::ARROW_LEFT));
            if ui.add(back_btn).clicked() {
                action = Some(PageAction::Back);
            }
            if let Some(document) = navigation.selected_document() {
                ui.label(RichText::new(document).strong());
            }
        });
        ui.add_space(4.0);

        // Fixed-size canvas; the rendered page is centered inside it.
        ui.vertical_centered(|ui| {
            let canvas = Vec2::new(PAGE_VIEW_WIDTH, PAGE_VIEW_HEIGHT);
            let (rect, _response) =
                ui.allocate_exact_size(canvas, egui::Sense::hover());

            match page_texture {
                Some(texture) => {
                    let size = texture.size_vec2();
                    let image_rect =
                        egui::Rect::from_center_size(rect.center(), size);
                    egui::Image::new((texture.id(), size)).paint_at(ui, image_rect);
                }
                None => {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Page unavailable",
                        egui::TextStyle::Body.resolve(ui.style()),
                        ui.visuals().weak_text_color(),
                    );
                }
            }
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let prev_btn = Button::new(format!("{} 上一页 Prev", regular::CARET_LEFT));
            if ui.add(prev_btn).clicked() {
                action = Some(PageAction::PrevPage);
            }

            let next_btn = Button::new(format!("下一页 Next {}", regular::CARET_RIGHT));
            if ui.add(next_btn).clicked() {
                action = Some(PageAction::NextPage);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} / {}",
                        navigation.current_page() + 1,
                        navigation.page_count()
                    ))
                    .monospace()
                    .weak(),
                );
            });
        });

        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);

        AudioControls::show(ui, audio);

        action
    }
}
