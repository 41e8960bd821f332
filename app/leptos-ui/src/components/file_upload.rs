use bz_core::upload::{UploadState, UploadView};
use bz_core::validation::UploadRules;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};

use crate::files::{self, PickedFile};

pub const REMOVE_LABEL: &str = "Remove file";

const UPLOAD_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" y1="3" x2="12" y2="15"/></svg>"#;
const IMAGE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><polyline points="21 15 16 10 5 21"/></svg>"#;
const X_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;

/// Drag-and-drop file picker with validation and an image preview.
///
/// `on_file_select` receives the accepted file, or `None` after removal.
/// Rejected files only update the error line.
#[component]
pub fn FileUpload(
    #[prop(default = "image/*".to_string(), into)] accept: String,
    #[prop(default = 10.0)] max_size_mb: f64,
    #[prop(optional, into)] on_file_select: Option<Callback<Option<PickedFile>>>,
    #[prop(default = "Upload a file".to_string(), into)] placeholder: String,
    #[prop(default = "PNG, JPG up to 10MB".to_string(), into)] hint: String,
    #[prop(default = String::new(), into)] class: String,
) -> impl IntoView {
    let rules = StoredValue::new(UploadRules::new(&accept, max_size_mb));
    let state = RwSignal::new(UploadState::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let root_class = if class.is_empty() {
        "file-upload".to_string()
    } else {
        format!("file-upload {class}")
    };

    // Shared by the drop target and the hidden input.
    let accept_file = move |file: Option<web_sys::File>, dropped: bool| {
        let picked = file.map(PickedFile::new);
        let meta = picked.as_ref().map(|p| p.meta.clone());
        let outcome = rules
            .with_value(|r| {
                state.try_update(|s| {
                    if dropped {
                        s.drop_file(meta, r)
                    } else {
                        meta.map(|m| s.offer(m, r))
                    }
                })
            })
            .flatten();

        let (Some(picked), Some(Ok(selection))) = (picked, outcome) else {
            return;
        };

        if let Some(cb) = on_file_select {
            cb.run(Some(picked.clone()));
        }

        if selection.wants_preview {
            let handle = picked.handle().clone();
            spawn_local(async move {
                match files::read_preview(&handle).await {
                    Ok(url) => state.update(|s| {
                        s.attach_preview(selection.generation, url);
                    }),
                    Err(e) => web_sys::console::warn_1(
                        &format!("[file-upload] preview read failed: {e}").into(),
                    ),
                }
            });
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        state.update(UploadState::drag_over);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        state.update(UploadState::drag_leave);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|list| list.get(0));
        accept_file(file, true);
    };

    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|list| list.get(0));
        if file.is_some() {
            accept_file(file, false);
        }
    };

    let on_choose = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_remove = move |_: MouseEvent| {
        state.update(UploadState::remove);
        if let Some(cb) = on_file_select {
            cb.run(None);
        }
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    let body = move || {
        let (layout, name, preview, icon_class) = state.with(|s| {
            (
                s.view(),
                s.file().map(|f| f.name.clone()).unwrap_or_default(),
                s.preview().map(str::to_string),
                s.icon_class(),
            )
        });
        match layout {
            UploadView::FileWithPreview => view! {
                <div class="file-upload-preview">
                    <img src=preview alt="Preview" class="file-upload-preview-img" />
                    <button
                        type="button"
                        class="file-upload-remove file-upload-remove-corner"
                        aria-label=REMOVE_LABEL
                        on:click=on_remove
                        inner_html=X_ICON
                    ></button>
                    <p class="file-upload-name">{name}</p>
                </div>
            }
            .into_any(),
            UploadView::FileWithoutPreview => view! {
                <div class="file-upload-selected">
                    <span class="file-upload-file-icon" inner_html=IMAGE_ICON></span>
                    <span class="file-upload-name">{name}</span>
                    <button
                        type="button"
                        class="file-upload-remove"
                        aria-label=REMOVE_LABEL
                        on:click=on_remove
                        inner_html=X_ICON
                    ></button>
                </div>
            }
            .into_any(),
            UploadView::Empty => view! {
                <span class=icon_class inner_html=UPLOAD_ICON></span>
                <p class="file-upload-placeholder">{placeholder.clone()}</p>
                <p class="file-upload-hint">{hint.clone()}</p>
                <button type="button" class="btn btn-outline" on:click=on_choose>
                    "Choose File"
                </button>
            }
            .into_any(),
        }
    };

    view! {
        <div class=root_class>
            <div
                class=move || state.with(UploadState::zone_class)
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                {body}
            </div>
            {move || state.with(|s| s.error().map(str::to_string)).map(|e| view! {
                <p class="file-upload-error" role="alert">{e}</p>
            })}
            <input
                node_ref=input_ref
                type="file"
                accept=accept
                class="file-upload-input"
                style="display: none;"
                on:change=on_change
            />
        </div>
    }
}
