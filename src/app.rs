use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::library::{self, AudioIndex, NavigationState, PageStep, Shelf};
use crate::pdf::Document;
use crate::ui::{
    AudioState, CollectionPicker, DocumentList, DocumentListAction, NarrationTrack, PageAction,
    PageView,
};

/// The slice of state worth keeping between runs: the player volume.
/// Reading position is deliberately not persisted.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)]
struct PlayerPrefs {
    volume: f32,
    muted: bool,
}

pub struct PlayerApp {
    shelf: Shelf,
    audio_index: AudioIndex,
    navigation: NavigationState,

    /// The one live document handle; replaced only after the previous one
    /// is dropped.
    document: Option<Document>,

    /// Cached listings for the two chooser screens
    collections: Vec<String>,
    documents: Vec<String>,

    /// Texture of the page currently shown, and which page it holds.
    /// `rendered_page` is also set on a failed render so a broken page is
    /// not retried every frame.
    page_texture: Option<TextureHandle>,
    rendered_page: Option<usize>,

    document_list: DocumentList,
    audio: AudioState,
}

impl PlayerApp {
    /// Called once before the first frame. The audio index is built by
    /// `main` and handed in; it is never rebuilt.
    pub fn new(cc: &eframe::CreationContext<'_>, audio_index: AudioIndex) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let shelf = Shelf::new(library::document_root());
        let collections = match shelf.collections() {
            Ok(collections) => collections,
            Err(e) => {
                log::warn!("cannot list collections: {}", e);
                Vec::new()
            }
        };

        let mut audio = AudioState::new();
        if let Some(storage) = cc.storage {
            if let Some(prefs) = eframe::get_value::<PlayerPrefs>(storage, eframe::APP_KEY) {
                audio.set_volume(prefs.volume);
                if prefs.muted {
                    audio.toggle_mute();
                }
            }
        }

        Self {
            shelf,
            audio_index,
            navigation: NavigationState::new(),
            document: None,
            collections,
            documents: Vec::new(),
            page_texture: None,
            rendered_page: None,
            document_list: DocumentList::new(),
            audio,
        }
    }

    fn select_folder(&mut self, folder: &str) {
        self.documents = match self.shelf.documents(folder) {
            Ok(documents) => documents,
            Err(e) => {
                log::warn!("cannot list documents of {}: {}", folder, e);
                Vec::new()
            }
        };
        self.navigation.select_folder(folder);
    }

    /// Open a document from the list screen. On failure nothing opens:
    /// navigation and the narration player stay exactly as they were.
    fn open_document(&mut self, name: &str) {
        let Some(folder) = self.navigation.selected_folder().map(str::to_owned) else {
            return;
        };

        // Hold at most one handle: release the old document first
        self.document = None;
        self.page_texture = None;
        self.rendered_page = None;

        let path = self.shelf.document_path(&folder, name);
        match Document::open(&path) {
            Ok(document) => {
                let narration = self.audio_index.get(name).map(|p| NarrationTrack {
                    path: p.to_path_buf(),
                    title: name.to_owned(),
                });
                self.audio.load(narration);
                self.navigation.open(name, document.page_count());
                self.document = Some(document);
            }
            Err(e) => {
                log::warn!("cannot open {}: {}", path.display(), e);
            }
        }
    }

    /// Back from the viewer to the document list. The narration keeps
    /// playing; only the document handle and page state are released.
    fn close_document(&mut self) {
        self.navigation.close();
        self.document = None;
        self.page_texture = None;
        self.rendered_page = None;
    }

    /// Back from the document list to the collection chooser.
    fn back_to_collections(&mut self) {
        self.navigation.reset();
        self.documents.clear();
        self.collections = match self.shelf.collections() {
            Ok(collections) => collections,
            Err(e) => {
                log::warn!("cannot list collections: {}", e);
                Vec::new()
            }
        };
    }

    /// Rasterize the current page into the texture cache if it is not
    /// already there.
    fn ensure_page_texture(&mut self, ctx: &egui::Context) {
        let current = self.navigation.current_page();
        if self.rendered_page == Some(current) {
            return;
        }

        let Some(document) = &self.document else {
            return;
        };

        match document.render_page(current) {
            Ok(bitmap) => {
                let image = ColorImage::from_rgba_unmultiplied(
                    [bitmap.width as usize, bitmap.height as usize],
                    &bitmap.pixels,
                );
                self.page_texture =
                    Some(ctx.load_texture("page", image, TextureOptions::LINEAR));
            }
            Err(e) => {
                log::error!("{}", e);
                self.page_texture = None;
            }
        }
        self.rendered_page = Some(current);
    }

    fn home_screen(&mut self, ui: &mut egui::Ui) {
        if let Some(folder) = CollectionPicker::show(ui, &self.collections) {
            self.select_folder(&folder);
        }
    }

    fn list_screen(&mut self, ui: &mut egui::Ui) {
        let Some(folder) = self.navigation.selected_folder().map(str::to_owned) else {
            return;
        };

        let action =
            self.document_list
                .show(ui, &folder, &self.documents, &self.audio_index);
        match action {
            Some(DocumentListAction::Open(name)) => self.open_document(&name),
            Some(DocumentListAction::Back) => self.back_to_collections(),
            None => {}
        }
    }

    fn viewer_screen(&mut self, ui: &mut egui::Ui) {
        self.ensure_page_texture(ui.ctx());

        let action = PageView::show(
            ui,
            &self.navigation,
            self.page_texture.as_ref(),
            &mut self.audio,
        );
        match action {
            Some(PageAction::Back) => self.close_document(),
            Some(PageAction::PrevPage) => self.step_page(-1),
            Some(PageAction::NextPage) => self.step_page(1),
            None => {}
        }
    }

    fn step_page(&mut self, delta: isize) {
        match self.navigation.change_page(delta) {
            PageStep::Moved(page) => {
                log::debug!("showing page {}", page);
                // ensure_page_texture picks up the change next frame
            }
            PageStep::AtBoundary => {
                log::debug!("page change {} ignored: at boundary", delta);
            }
        }
    }
}

impl eframe::App for PlayerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let prefs = PlayerPrefs {
            volume: self.audio.volume,
            muted: self.audio.is_muted,
        };
        eframe::set_value(storage, eframe::APP_KEY, &prefs);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.audio.update_from_backend();

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.navigation.selected_document().is_some() {
                self.viewer_screen(ui);
            } else if self.navigation.selected_folder().is_some() {
                self.list_screen(ui);
            } else {
                self.home_screen(ui);
            }
        });
    }
}
