use async_trait::async_trait;
use gloo::events::EventListener;
use gloo_net::http::Request;
use wasm_bindgen::{prelude::wasm_bindgen, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::{
    error::SuggestError,
    render::SuggestionResponse,
    renderer::{search_query_url, OutputRegion, SuggestionRenderer, SuggestionSource},
    SEARCH_BOX_ID, SUGGESTIONS_ID,
};

fn element_by_id(id: &'static str) -> Result<Element, SuggestError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or(SuggestError::MissingElement(id))
}

struct HttpSource;

#[async_trait(?Send)]
impl SuggestionSource for HttpSource {
    async fn fetch(&self, query: &str) -> Result<SuggestionResponse, SuggestError> {
        let body = Request::get(&search_query_url(query))
            .send()
            .await?
            .text()
            .await?;
        SuggestionResponse::from_body(&body)
    }
}

struct DomRegion(Element);

impl OutputRegion for DomRegion {
    fn replace_content(&self, markup: &str) -> Result<(), SuggestError> {
        self.0.set_inner_html(markup);
        Ok(())
    }
}

#[wasm_bindgen(js_name = showSuggestions)]
pub fn show_suggestions(query: String) {
    spawn_local(async move {
        let region = match element_by_id(SUGGESTIONS_ID) {
            Ok(element) => DomRegion(element),
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };
        let renderer = SuggestionRenderer::new(HttpSource, region);
        if let Err(e) = renderer.show_suggestions(&query).await {
            log::error!("Search failed: {e}");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Ok(search_box) = element_by_id(SEARCH_BOX_ID) else {
        log::debug!("no search box on this page");
        return;
    };
    EventListener::new(&search_box, "input", move |event| {
        let value = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        show_suggestions(value);
    })
    .forget();
}
