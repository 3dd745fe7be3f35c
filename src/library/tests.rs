use std::fs;
use std::path::{Path, PathBuf};

use super::{AudioIndex, LibraryError, NavigationState, PageStep, Shelf};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    p.push(format!("readalong_test_{}_{}", name, nonce));
    fs::create_dir_all(&p).unwrap();
    p
}

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

// --- audio index ---

#[test]
fn index_maps_document_name_to_narration_path() {
    let root = unique_temp_dir("index_basic");
    let folder = root.join("folderA");
    fs::create_dir(&folder).unwrap();
    let file = folder.join("01.docX.mp3");
    touch(&file);

    let index = AudioIndex::scan(&root).unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(index.get("docX"), Some(file.as_path()));
}

#[test]
fn index_strips_only_the_prefix_before_the_first_delimiter() {
    let root = unique_temp_dir("index_delimiter");
    let folder = root.join("folderA");
    fs::create_dir(&folder).unwrap();
    // Only the first delimiter splits; further dots belong to the name
    let file = folder.join("07.story.part one.mp3");
    touch(&file);

    let index = AudioIndex::scan(&root).unwrap();

    assert_eq!(index.get("story.part one"), Some(file.as_path()));
}

#[test]
fn index_skips_files_without_the_audio_extension() {
    let root = unique_temp_dir("index_extension");
    let folder = root.join("folderA");
    fs::create_dir(&folder).unwrap();
    touch(&folder.join("01.docX.wav"));
    touch(&folder.join("README"));
    touch(&folder.join("notes"));

    let index = AudioIndex::scan(&root).unwrap();

    assert!(index.is_empty());
}

#[test]
fn index_skips_plain_files_at_the_top_level() {
    let root = unique_temp_dir("index_top_level");
    touch(&root.join("stray.docX.mp3"));

    let index = AudioIndex::scan(&root).unwrap();

    assert!(index.is_empty());
}

#[test]
fn index_keeps_one_entry_per_name_on_collision() {
    let root = unique_temp_dir("index_collision");
    for folder in ["folderA", "folderB"] {
        let dir = root.join(folder);
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("01.docX.mp3"));
    }

    let index = AudioIndex::scan(&root).unwrap();

    // Which collection wins depends on enumeration order; exactly one
    // entry must survive either way.
    assert_eq!(index.len(), 1);
    let winner = index.get("docX").unwrap();
    assert!(winner.ends_with("01.docX.mp3"));
}

#[test]
fn index_of_empty_root_is_empty_not_an_error() {
    let root = unique_temp_dir("index_empty");

    let index = AudioIndex::scan(&root).unwrap();

    assert!(index.is_empty());
    assert_eq!(index.get("docX"), None);
}

#[test]
fn index_of_missing_root_is_an_error() {
    let root = unique_temp_dir("index_missing").join("does_not_exist");

    match AudioIndex::scan(&root) {
        Err(LibraryError::RootNotFound { path }) => assert_eq!(path, root),
        other => panic!("expected RootNotFound, got {:?}", other),
    }
}

// --- navigation ---

#[test]
fn open_starts_at_the_first_page() {
    let mut nav = NavigationState::new();
    nav.select_folder("folderA");
    nav.open("docX", 3);

    assert_eq!(nav.selected_document(), Some("docX"));
    assert_eq!(nav.current_page(), 0);
    assert_eq!(nav.page_count(), 3);
}

#[test]
fn page_walk_stops_at_the_last_page() {
    let mut nav = NavigationState::new();
    nav.open("docX", 3);

    assert_eq!(nav.change_page(1), PageStep::Moved(1));
    assert_eq!(nav.change_page(1), PageStep::Moved(2));
    assert_eq!(nav.change_page(1), PageStep::AtBoundary);
    assert_eq!(nav.current_page(), 2);
}

#[test]
fn page_walk_stops_at_the_first_page() {
    let mut nav = NavigationState::new();
    nav.open("docX", 3);

    assert_eq!(nav.change_page(-1), PageStep::AtBoundary);
    assert_eq!(nav.current_page(), 0);
}

#[test]
fn larger_steps_never_wrap_or_clamp() {
    let mut nav = NavigationState::new();
    nav.open("docX", 5);

    assert_eq!(nav.change_page(4), PageStep::Moved(4));
    assert_eq!(nav.change_page(2), PageStep::AtBoundary);
    assert_eq!(nav.current_page(), 4);
    assert_eq!(nav.change_page(-4), PageStep::Moved(0));
}

#[test]
fn change_page_after_close_is_a_boundary() {
    let mut nav = NavigationState::new();
    nav.select_folder("folderA");
    nav.open("docX", 3);
    nav.close();

    assert_eq!(nav.selected_document(), None);
    assert_eq!(nav.change_page(1), PageStep::AtBoundary);
    assert_eq!(nav.change_page(-1), PageStep::AtBoundary);
    assert_eq!(nav.current_page(), 0);
    // The folder selection survives a document close
    assert_eq!(nav.selected_folder(), Some("folderA"));
}

#[test]
fn reset_clears_the_folder_selection_too() {
    let mut nav = NavigationState::new();
    nav.select_folder("folderA");
    nav.open("docX", 3);
    nav.reset();

    assert_eq!(nav.selected_folder(), None);
    assert_eq!(nav.selected_document(), None);
    assert_eq!(nav.page_count(), 0);
}

// --- shelf ---

#[test]
fn collections_are_sorted_and_skip_plain_files() {
    let root = unique_temp_dir("shelf_collections");
    fs::create_dir(root.join("zebra")).unwrap();
    fs::create_dir(root.join("alpha")).unwrap();
    touch(&root.join("stray.txt"));

    let shelf = Shelf::new(&root);

    assert_eq!(shelf.collections().unwrap(), ["alpha", "zebra"]);
}

#[test]
fn documents_are_sorted_with_the_extension_stripped() {
    let root = unique_temp_dir("shelf_documents");
    let folder = root.join("folderA");
    fs::create_dir(&folder).unwrap();
    touch(&folder.join("beta.pdf"));
    touch(&folder.join("alpha.pdf"));
    touch(&folder.join("notes.txt"));

    let shelf = Shelf::new(&root);

    assert_eq!(shelf.documents("folderA").unwrap(), ["alpha", "beta"]);
}

#[test]
fn document_path_rejoins_the_extension() {
    let shelf = Shelf::new("go/pdf");

    assert_eq!(
        shelf.document_path("folderA", "docX"),
        PathBuf::from("go/pdf/folderA/docX.pdf")
    );
}

#[test]
fn documents_of_a_missing_collection_is_an_error() {
    let root = unique_temp_dir("shelf_missing");
    let shelf = Shelf::new(&root);

    assert!(shelf.documents("nope").is_err());
}
