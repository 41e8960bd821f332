// =============================================================================
// component_tests.rs - Leptos WASM component tests for the bazaar UI
//
// Covers listing deserialization, demo data, card presentation and the
// upload widget mounted into a real document.
//
// Run with:
//   cd app/leptos-ui && wasm-pack test --headless --chrome
// =============================================================================

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use bz_api_types::ApiItem;
use bz_core::config::DisplayConfig;
use bz_core::listing::{BadgeVariant, ItemCardModel};
use bz_leptos_ui::types::demo_items;

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

/// Fresh container appended to `<body>` so tests do not see each other's DOM.
/// Resolve after a macrotask so queued reactive renders have run.
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("no window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
            .expect("set_timeout");
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.expect("tick");
}

fn container(id: &str) -> web_sys::HtmlElement {
    use wasm_bindgen::JsCast;
    let doc = document();
    let el = doc.create_element("div").expect("create div");
    el.set_id(id);
    doc.body().expect("no body").append_child(&el).expect("append");
    el.dyn_into::<web_sys::HtmlElement>().expect("html element")
}

// =============================================================================
// Listing data
// =============================================================================

mod listing_data {
    use super::*;

    #[wasm_bindgen_test]
    fn test_item_deserialize_camel_case() {
        let json = r#"{
            "id": "it-9",
            "name": "Desk lamp",
            "price": 650,
            "condition": "New",
            "category": "Home",
            "aiPriceRating": "Good Price",
            "seller": { "name": "zoya", "verificationStatus": "VERIFIED", "avgRating": 4.25, "isOnline": true }
        }"#;
        let item: ApiItem = serde_json::from_str(json).expect("ApiItem deserialization failed");
        assert_eq!(item.id, "it-9");
        assert_eq!(item.price, 650.0);
        assert!(item.seller.is_verified());
        assert!(item.seller.is_online);
    }

    #[wasm_bindgen_test]
    fn test_demo_items_are_renderable() {
        let items = demo_items();
        assert!(!items.is_empty());
        let mut ids = std::collections::HashSet::new();
        for item in &items {
            assert!(ids.insert(item.id.clone()), "duplicate demo id {}", item.id);
            assert!(!item.name.is_empty());
            assert!(!item.seller.name.is_empty());
        }
    }

    #[wasm_bindgen_test]
    fn test_demo_items_cover_card_variants() {
        let items = demo_items();
        assert!(items.iter().any(|i| i.ai_price_rating.is_none()));
        assert!(items.iter().any(|i| i.seller.is_online));
        assert!(items.iter().any(|i| !i.seller.is_online));
        assert!(items.iter().any(|i| i.seller.badges.len() > 2));
    }

    #[wasm_bindgen_test]
    fn test_card_model_caps_badges() {
        let display = DisplayConfig::default();
        for item in demo_items() {
            let model = ItemCardModel::with_default_rating(&item, &display);
            assert!(model.seller_badges.len() <= display.max_seller_badges);
            assert!(model.href.ends_with(&item.id));
        }
    }
}

// =============================================================================
// Mounted components
// =============================================================================

mod mounted {
    use super::*;
    use bz_leptos_ui::components::file_upload::FileUpload;
    use bz_leptos_ui::components::item_card::ItemCard;
    use bz_leptos_ui::components::skeleton::ItemGridSkeleton;
    use leptos::prelude::*;

    #[wasm_bindgen_test]
    fn test_item_card_renders_listing() {
        let host = container("card-host");
        let item = demo_items().remove(0);
        leptos::mount::mount_to(host.clone(), move || view! { <ItemCard item=item /> }).forget();

        let link = host.query_selector("a.item-card-link").unwrap().expect("card link");
        assert_eq!(link.get_attribute("href").as_deref(), Some("/item/demo-1"));
        let price = host.query_selector(".item-card-price").unwrap().expect("price");
        assert_eq!(price.text_content().as_deref(), Some("\u{20B9}12500.00"));
        assert!(host.query_selector(".verified-mark").unwrap().is_some());
        assert!(host.query_selector(".presence-online").unwrap().is_some());
        assert_eq!(host.query_selector_all(".seller-badge").unwrap().length(), 2);
        assert!(host.query_selector(".item-card-no-image").unwrap().is_some());
        assert!(host.query_selector(".badge-success").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn test_item_card_custom_rating_mapping() {
        let host = container("card-mapping-host");
        let item = demo_items().remove(0);
        leptos::mount::mount_to(host.clone(), move || {
            view! { <ItemCard item=item rating_variant=Callback::new(|_: String| BadgeVariant::Destructive) /> }
        })
        .forget();
        assert!(host.query_selector(".badge-destructive").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn test_grid_skeleton_count() {
        let host = container("skeleton-host");
        leptos::mount::mount_to(host.clone(), || view! { <ItemGridSkeleton count=3 /> }).forget();
        assert_eq!(host.query_selector_all(".skeleton-card").unwrap().length(), 3);
    }

    #[wasm_bindgen_test]
    fn test_file_upload_initial_state() {
        let host = container("upload-host");
        leptos::mount::mount_to(host.clone(), || {
            view! { <FileUpload accept="image/png,.pdf" placeholder="Add a photo" /> }
        })
        .forget();

        let zone = host.query_selector(".file-upload-zone").unwrap().expect("zone");
        assert_eq!(zone.class_name(), "file-upload-zone");
        let placeholder = host.query_selector(".file-upload-placeholder").unwrap().expect("placeholder");
        assert_eq!(placeholder.text_content().as_deref(), Some("Add a photo"));
        let hint = host.query_selector(".file-upload-hint").unwrap().expect("hint");
        assert_eq!(hint.text_content().as_deref(), Some("PNG, JPG up to 10MB"));
        let input = host.query_selector("input[type=file]").unwrap().expect("input");
        assert_eq!(input.get_attribute("accept").as_deref(), Some("image/png,.pdf"));
        assert!(host.query_selector(".file-upload-error").unwrap().is_none());
    }

    /// Put `file` on the hidden input and fire a bubbling `change`.
    fn choose_file(input: &web_sys::HtmlInputElement, file: &web_sys::File) {
        let dt = web_sys::DataTransfer::new().expect("data transfer");
        dt.items().add_with_file(file).expect("add file");
        input.set_files(dt.files().as_ref());
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let change = web_sys::Event::new_with_event_init_dict("change", &init).expect("event");
        input.dispatch_event(&change).expect("dispatch");
    }

    fn png_file(name: &str) -> web_sys::File {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(&[0x89u8, b'P', b'N', b'G'][..]));
        let bag = web_sys::FilePropertyBag::new();
        bag.set_type("image/png");
        web_sys::File::new_with_u8_array_sequence_and_options(&parts, name, &bag).expect("file")
    }

    #[wasm_bindgen_test]
    async fn test_file_upload_remove_notifies_and_clears_input() {
        use std::sync::{Arc, Mutex};
        use wasm_bindgen::JsCast;

        let host = container("upload-remove-host");
        let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
        let log = Arc::clone(&seen);
        let on_select = Callback::new(move |picked: Option<bz_leptos_ui::files::PickedFile>| {
            log.lock().unwrap().push(picked.map(|p| p.meta.name));
        });
        leptos::mount::mount_to(host.clone(), move || {
            view! { <FileUpload on_file_select=on_select /> }
        })
        .forget();

        let input: web_sys::HtmlInputElement = host
            .query_selector("input[type=file]")
            .unwrap()
            .expect("input")
            .dyn_into()
            .expect("input element");
        choose_file(&input, &png_file("photo.png"));
        next_tick().await;

        assert_eq!(*seen.lock().unwrap(), vec![Some("photo.png".to_string())]);
        assert!(!input.value().is_empty());
        let zone = host.query_selector(".file-upload-zone").unwrap().expect("zone");
        assert!(zone.class_name().contains("has-file"));

        let remove: web_sys::HtmlElement = host
            .query_selector("button[aria-label='Remove file']")
            .unwrap()
            .expect("remove button")
            .dyn_into()
            .expect("button element");
        remove.click();
        next_tick().await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some("photo.png".to_string()), None]
        );
        assert_eq!(input.value(), "");
        assert_eq!(input.files().map(|f| f.length()).unwrap_or(0), 0);
        assert_eq!(zone.class_name(), "file-upload-zone");
        assert!(host.query_selector(".file-upload-placeholder").unwrap().is_some());
        assert!(host.query_selector(".file-upload-error").unwrap().is_none());
    }
}
