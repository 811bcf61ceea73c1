use crate::constants::ROOT_SCROLL_BEHAVIOR;
use crate::core::config::{SiteConfig, COLLECTIONS, FOOTER, HERO, SITE, VIEWPORT_META, WELCOME};
use crate::core::loader::Loader;
use crate::core::markup::{self, MAIN_ID};
use crate::core::page::PageState;
use crate::dom;
use crate::overlay::{self, OverlayView};
use crate::sections::{FloatingButtons, Hero, Showcase};
use crate::timers::BrowserTimers;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Everything mounted on the page. Dropping it releases every listener,
/// observer and timer.
struct App {
    document: web::Document,
    page: PageState,
    started: Instant,
    loader: Option<Loader<BrowserTimers, StdRng>>,
    _hero: Hero,
    _showcase: Showcase,
    _buttons: FloatingButtons,
    _timers: Rc<BrowserTimers>,
}

impl App {
    fn mount(window: web::Window, document: web::Document) -> anyhow::Result<Self> {
        let started = Instant::now();
        apply_head(&document, &SITE);
        let main = main_element(&document)?;
        main.set_inner_html(&markup::page(&HERO, &WELCOME, &COLLECTIONS, &FOOTER));

        let page = PageState::default();
        _ = main.set_attribute("style", &page.main_style());
        overlay::show(&document, HERO.brand_name);

        let timers = Rc::new(BrowserTimers::new(window));
        let hero = Hero::mount(&document, &HERO, timers.clone());
        let showcase = Showcase::mount(&document, FOOTER.newsletter.confirmation);
        let buttons = FloatingButtons::mount(&document, &FOOTER);

        let loader = Loader::mount(
            timers.clone(),
            StdRng::from_entropy(),
            Box::new(OverlayView::new(document.clone())),
            Box::new(|| {
                APP.with(|app| {
                    if let Some(app) = app.borrow_mut().as_mut() {
                        app.finish_loading();
                    }
                })
            }),
        );

        Ok(Self {
            document,
            page,
            started,
            loader: Some(loader),
            _hero: hero,
            _showcase: showcase,
            _buttons: buttons,
            _timers: timers,
        })
    }

    fn finish_loading(&mut self) {
        if !self.page.finish_loading() {
            return;
        }
        self.loader = None;
        overlay::remove(&self.document);
        if let Some(main) = self.document.get_element_by_id(MAIN_ID) {
            _ = main.set_attribute("style", &self.page.main_style());
        }
        log::info!(
            "[app] content shown after {} ms",
            self.started.elapsed().as_millis()
        );
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if self.page.is_loading() {
            overlay::remove(&self.document);
        }
    }
}

fn apply_head(document: &web::Document, site: &SiteConfig) {
    document.set_title(site.title);
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", site.language);
        if let Ok(root) = root.dyn_into::<web::HtmlElement>() {
            _ = root
                .style()
                .set_property("scroll-behavior", ROOT_SCROLL_BEHAVIOR);
        }
    }
    set_meta(document, "viewport", VIEWPORT_META);
    set_meta(document, "description", site.description);
}

fn set_meta(document: &web::Document, name: &str, content: &str) {
    let existing = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten();
    let meta = match existing {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("meta") else {
                return;
            };
            _ = el.set_attribute("name", name);
            if let Some(head) = document.head() {
                _ = head.append_child(&el);
            }
            el
        }
    };
    _ = meta.set_attribute("content", content);
}

fn main_element(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(MAIN_ID) {
        return Ok(el);
    }
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let el = document
        .create_element("main")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_id(MAIN_ID);
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("amerey-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    if APP.with(|app| app.borrow().is_some()) {
        log::warn!("[app] already mounted");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = App::mount(window, document)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Tear the page down: cancels timers, removes listeners and observers.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        log::info!("[app] unmounted");
    }
    drop(app);
}
