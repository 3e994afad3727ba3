use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};

use crate::domain::pft::ui::browser::{fetch_dataset, BrowserState, CategoryBrowser};
use crate::shared::app_context::{claim_start, WindowMarker};
use crate::shared::asset_locator::{data_url, locate_assets_base};
use crate::shared::components::ErrorNotice;
use crate::shared::config::WidgetConfig;
use crate::shared::error::WidgetError;

/// Start the widget once per page: now if the document is parsed,
/// otherwise on `DOMContentLoaded`.
pub fn run(config: WidgetConfig) {
    if !claim_start(&WindowMarker::new(config.init_marker)) {
        log::debug!("PFT app already initialized on this page");
        return;
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        init(config);
        return;
    }

    let callback = wasm_bindgen::closure::Closure::once_into_js(move || init(config));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    ) {
        log::error!("PFT app: cannot wait for DOMContentLoaded: {:?}", e);
    }
}

fn init(config: WidgetConfig) {
    let Some(container) = find_container(&config) else {
        // Not every page hosts the widget
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = load(&config).await;
        if let Err(err) = &result {
            log::error!("PFT app error: {}", err);
        }
        match WidgetView::from(result) {
            WidgetView::Browser(state) => mount_browser(container, state),
            WidgetView::Failed(message) => mount_error(container, message),
        }
    });
}

/// What ends up in the container: the full browser or one error card
#[derive(Debug)]
pub enum WidgetView {
    Browser(BrowserState),
    Failed(String),
}

impl From<Result<BrowserState, WidgetError>> for WidgetView {
    fn from(result: Result<BrowserState, WidgetError>) -> Self {
        match result {
            Ok(state) => WidgetView::Browser(state),
            Err(err) => WidgetView::Failed(err.user_message()),
        }
    }
}

fn find_container(config: &WidgetConfig) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(config.container_id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

async fn load(config: &WidgetConfig) -> Result<BrowserState, WidgetError> {
    let base = locate_assets_base(config)?;
    log::debug!("PFT assets base: {}", base);

    let dataset = fetch_dataset(&data_url(&base, config)).await?;
    log::info!("Loaded {} PFTs", dataset.len());

    Ok(BrowserState::new(Arc::new(dataset), base, *config))
}

fn mount_browser(container: HtmlElement, state: BrowserState) {
    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <CategoryBrowser state=state /> })
        .forget();
}

fn mount_error(container: HtmlElement, message: String) {
    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <ErrorNotice message=message /> })
        .forget();
}
