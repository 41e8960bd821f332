use bz_core::compression::estimate_compressed_size;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::file_upload::FileUpload;
use crate::components::spinner::Spinner;
use crate::files::{self, PickedFile};
use crate::state::use_app_state;

/// What the sell form shows about the photo that will be uploaded.
#[derive(Debug, Clone, PartialEq)]
struct PhotoSummary {
    name: String,
    original_bytes: u64,
    compressed_bytes: u64,
    width: u32,
    height: u32,
    quality: f64,
    within_budget: bool,
    data_url: String,
}

fn kib(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

#[component]
pub fn SellPage() -> impl IntoView {
    let state = use_app_state();
    let (upload_cfg, compression) =
        state.config.with_value(|c| (c.upload.clone(), c.compression.clone()));

    let (compressing, set_compressing) = signal(false);
    let (summary, set_summary) = signal(Option::<PhotoSummary>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // Bumped per selection so a slow compression cannot overwrite a newer one.
    let (ticket, set_ticket) = signal(0u64);

    let on_file_select = Callback::new(move |picked: Option<PickedFile>| {
        set_summary.set(None);
        set_error_msg.set(None);
        set_ticket.update(|t| *t += 1);
        let Some(picked) = picked else {
            set_compressing.set(false);
            return;
        };

        let my_ticket = ticket.get_untracked();
        let handle = picked.handle().clone();
        let meta = picked.meta.clone();
        let opts = compression.clone();
        set_compressing.set(true);
        spawn_local(async move {
            let result = files::compress_file(&handle, &opts).await;
            if ticket.get_untracked() != my_ticket {
                return;
            }
            match result {
                Ok(out) => set_summary.set(Some(PhotoSummary {
                    name: meta.name,
                    original_bytes: meta.size,
                    compressed_bytes: out.byte_len() as u64,
                    width: out.width,
                    height: out.height,
                    quality: out.quality,
                    within_budget: out.within_budget,
                    data_url: out.data_url(),
                })),
                Err(e) => {
                    web_sys::console::error_1(&format!("[sell] compression failed: {e}").into());
                    set_error_msg.set(Some(e));
                }
            }
            set_compressing.set(false);
        });
    });

    view! {
        <section class="page sell-page">
            <h2 class="page-title">"Sell an item"</h2>
            <FileUpload
                accept=upload_cfg.accept.clone()
                max_size_mb=upload_cfg.max_size_mb
                placeholder=upload_cfg.placeholder.clone()
                hint=upload_cfg.hint.clone()
                on_file_select=on_file_select
                class="sell-photo-upload"
            />
            {move || compressing.get().then(|| view! {
                <Spinner size="sm" label="Compressing photo..." />
            })}
            {move || error_msg.get().map(|e| view! {
                <p class="sell-error" role="alert">{e}</p>
            })}
            {move || summary.get().map(|s| {
                let estimate = estimate_compressed_size(s.original_bytes);
                view! {
                    <div class="compression-summary">
                        <img src=s.data_url alt=format!("Compressed {}", s.name) class="compression-summary-img" />
                        <dl>
                            <dt>"Dimensions"</dt>
                            <dd>{format!("{}x{}", s.width, s.height)}</dd>
                            <dt>"Size"</dt>
                            <dd>{format!("{} -> {} (estimated {})", kib(s.original_bytes), kib(s.compressed_bytes), kib(estimate))}</dd>
                            <dt>"Quality"</dt>
                            <dd>{format!("{:.1}", s.quality)}</dd>
                        </dl>
                        {(!s.within_budget).then(|| view! {
                            <p class="compression-warning">"Photo is still larger than the upload budget."</p>
                        })}
                    </div>
                }
            })}
        </section>
    }
}
