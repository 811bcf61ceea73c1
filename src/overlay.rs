use crate::core::ease::Ease;
use crate::core::loader::{display_percent, LoaderView};
use crate::core::markup::{self, LOADER_BAR_ID, LOADER_CLASS, LOADER_PERCENT_ID};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Insert the loader overlay as the first child of `<body>`.
pub fn show(document: &web::Document, brand: &str) {
    if let Some(body) = document.body() {
        _ = body.insert_adjacent_html("afterbegin", &markup::loader(brand));
    }
}

pub fn remove(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(&format!(".{}", LOADER_CLASS)) {
        el.remove();
    }
}

/// DOM side of the loader sequencer.
pub struct OverlayView {
    document: web::Document,
}

impl OverlayView {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn container(&self) -> Option<web::HtmlElement> {
        self.document
            .query_selector(&format!(".{}", LOADER_CLASS))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}

impl LoaderView for OverlayView {
    fn show_progress(&mut self, progress: f64) {
        let percent = display_percent(progress);
        if let Some(bar) = dom::html_by_id(&self.document, LOADER_BAR_ID) {
            _ = bar.style().set_property("width", &format!("{}%", percent));
        }
        if let Some(label) = self.document.get_element_by_id(LOADER_PERCENT_ID) {
            label.set_text_content(Some(&format!("{}%", percent)));
        }
    }

    fn start_fade(&mut self, duration_ms: u32) {
        if let Some(el) = self.container() {
            let style = el.style();
            _ = style.set_property(
                "transition",
                &format!("opacity {}ms {}", duration_ms, Ease::InOutQuad.css()),
            );
            _ = style.set_property("opacity", "0");
        }
    }
}
