use leptos::prelude::*;

/// Small CSS spinner with an optional caption.
/// Sizes: "sm" (16px), "md" (24px), "lg" (32px)
#[component]
pub fn Spinner(
    #[prop(default = "md")] size: &'static str,
    #[prop(default = "")] label: &'static str,
) -> impl IntoView {
    let px = match size {
        "sm" => 16,
        "lg" => 32,
        _ => 24,
    };
    let style = format!("width: {px}px; height: {px}px;");
    let aria = if label.is_empty() { "Loading" } else { label };
    view! {
        <div class=format!("spinner-container spinner-container-{}", size) role="status" aria-label=aria>
            <span class="spinner-ring" style=style></span>
            {(!label.is_empty()).then(|| view! {
                <span class="spinner-label">{label}</span>
            })}
        </div>
    }
}
