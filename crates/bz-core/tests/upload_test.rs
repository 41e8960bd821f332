use bz_core::upload::{UploadState, UploadView};
use bz_core::validation::{FileMeta, UploadRules};

fn png(name: &str) -> FileMeta {
    FileMeta::new(name, "image/png", 2048)
}

#[test]
fn starts_empty() {
    let state = UploadState::new();
    assert_eq!(state.view(), UploadView::Empty);
    assert!(state.is_initial());
    assert_eq!(state.zone_class(), "file-upload-zone");
}

#[test]
fn valid_image_selects_and_wants_preview() {
    let mut state = UploadState::new();
    let sel = state.offer(png("a.png"), &UploadRules::default()).expect("accepted");
    assert!(sel.wants_preview);
    assert_eq!(sel.generation, 1);
    assert_eq!(state.view(), UploadView::FileWithoutPreview);
    assert_eq!(state.file().map(|f| f.name.as_str()), Some("a.png"));
    assert!(state.zone_class().contains("has-file"));
}

#[test]
fn non_image_never_wants_preview() {
    let mut state = UploadState::new();
    let rules = UploadRules::new(".pdf", 10.0);
    let sel = state
        .offer(FileMeta::new("doc.pdf", "application/pdf", 10), &rules)
        .expect("accepted");
    assert!(!sel.wants_preview);
    assert_eq!(state.view(), UploadView::FileWithoutPreview);
}

#[test]
fn preview_attaches_for_current_generation() {
    let mut state = UploadState::new();
    let sel = state.offer(png("a.png"), &UploadRules::default()).expect("accepted");
    assert!(state.attach_preview(sel.generation, "data:image/png;base64,AA==".into()));
    assert_eq!(state.view(), UploadView::FileWithPreview);
    assert_eq!(state.preview(), Some("data:image/png;base64,AA=="));
}

#[test]
fn rejected_file_keeps_previous_selection() {
    let mut state = UploadState::new();
    let rules = UploadRules::new("image/*", 1.0);
    state.offer(png("keep.png"), &rules).expect("accepted");

    let err = state
        .offer(FileMeta::new("huge.png", "image/png", 5 * 1024 * 1024), &rules)
        .expect_err("too large");
    assert_eq!(state.error(), Some(err.to_string().as_str()));
    assert_eq!(state.file().map(|f| f.name.as_str()), Some("keep.png"));
}

#[test]
fn new_offer_clears_old_error() {
    let mut state = UploadState::new();
    let rules = UploadRules::default();
    state
        .offer(FileMeta::new("a.txt", "text/plain", 1), &rules)
        .expect_err("wrong type");
    assert_eq!(state.error(), Some("Invalid file type"));
    state.offer(png("b.png"), &rules).expect("accepted");
    assert_eq!(state.error(), None);
}

#[test]
fn error_is_replaced_not_accumulated() {
    let mut state = UploadState::new();
    let rules = UploadRules::new("image/*", 1.0);
    let _ = state.offer(FileMeta::new("a.txt", "text/plain", 1), &rules);
    let _ = state.offer(FileMeta::new("b.png", "image/png", 2 * 1024 * 1024), &rules);
    assert_eq!(state.error(), Some("File size must be less than 1MB"));
}

#[test]
fn drag_flag_toggles_and_drop_clears_it() {
    let mut state = UploadState::new();
    state.drag_over();
    assert!(state.is_dragging());
    assert!(state.zone_class().contains("dragging"));
    assert_eq!(state.icon_class(), "file-upload-icon active");
    state.drag_leave();
    assert!(!state.is_dragging());

    state.drag_over();
    assert!(state.drop_file(None, &UploadRules::default()).is_none());
    assert!(!state.is_dragging());
    assert_eq!(state.view(), UploadView::Empty);
}

#[test]
fn drop_offers_the_file() {
    let mut state = UploadState::new();
    state.drag_over();
    let outcome = state.drop_file(Some(png("d.png")), &UploadRules::default());
    assert!(matches!(outcome, Some(Ok(_))));
    assert!(!state.is_dragging());
    assert_eq!(state.file().map(|f| f.name.as_str()), Some("d.png"));
}

#[test]
fn remove_resets_to_initial() {
    let mut state = UploadState::new();
    let rules = UploadRules::default();
    let sel = state.offer(png("a.png"), &rules).expect("accepted");
    state.attach_preview(sel.generation, "data:,".into());
    let _ = state.offer(FileMeta::new("bad.txt", "text/plain", 1), &rules);
    state.drag_over();

    state.remove();
    assert!(state.is_initial());
    assert_eq!(state.view(), UploadView::Empty);
    assert_eq!(state.file(), None);
    assert_eq!(state.preview(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn stale_preview_after_remove_is_discarded() {
    let mut state = UploadState::new();
    let sel = state.offer(png("a.png"), &UploadRules::default()).expect("accepted");
    state.remove();
    assert!(!state.attach_preview(sel.generation, "data:,".into()));
    assert_eq!(state.view(), UploadView::Empty);
}

#[test]
fn stale_preview_after_reselect_is_discarded() {
    let mut state = UploadState::new();
    let rules = UploadRules::default();
    let first = state.offer(png("first.png"), &rules).expect("accepted");
    let second = state.offer(png("second.png"), &rules).expect("accepted");
    assert!(second.generation > first.generation);

    assert!(!state.attach_preview(first.generation, "data:first".into()));
    assert_eq!(state.view(), UploadView::FileWithoutPreview);
    assert!(state.attach_preview(second.generation, "data:second".into()));
    assert_eq!(state.preview(), Some("data:second"));
}
