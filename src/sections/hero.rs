use crate::constants::{
    HERO_DECODE_INTERVAL_MS, HERO_INTRO_DELAY_MS, HERO_INTRO_MS, HERO_INTRO_STAGGER_MS,
    HERO_INTRO_Y,
};
use crate::core::config::HeroConfig;
use crate::core::decode::TitleDecoder;
use crate::core::markup::{
    HERO_BG_CLASS, HERO_CONTENT_CLASS, HERO_DESC_ID, HERO_ID, HERO_SUBTITLE_ID, HERO_TITLE_ID,
    MENU_TOGGLE_ID, MOBILE_MENU_ID, NAV_ID, NAV_LINK_CLASS,
};
use crate::core::nav::NavMenu;
use crate::core::reveal::{RevealGroup, RevealSpec, ToggleActions};
use crate::core::scroll::{hero_scrub, ScrollControls};
use crate::core::timers::Timers;
use crate::dom;
use crate::events::scroll::{self, ScrollSubscription};
use crate::timers::BrowserTimers;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Hero banner: title decode, intro fade, nav bar and scroll scrub.
pub struct Hero {
    timers: Rc<BrowserTimers>,
    decode: Rc<Cell<Option<i32>>>,
    _menu: Rc<RefCell<NavMenu>>,
    _scroll: Option<ScrollSubscription>,
    _listeners: Vec<dom::Listener>,
}

impl Hero {
    pub fn mount(document: &web::Document, cfg: &HeroConfig, timers: Rc<BrowserTimers>) -> Self {
        let decode = start_title_decode(document, cfg, &timers);
        play_intro(document);

        let menu = Rc::new(RefCell::new(NavMenu::default()));
        let mut listeners = Vec::new();
        if let Some(hero) = document.get_element_by_id(HERO_ID) {
            for link in dom::html_by_class(&hero, NAV_LINK_CLASS) {
                let Some(section) = link.get_attribute("data-section") else {
                    continue;
                };
                let (m, doc) = (menu.clone(), document.clone());
                listeners.extend(dom::listen(&link, "click", move |_| {
                    let navigated = m.borrow_mut().select(&section, dom::scroll_to_anchor);
                    if navigated {
                        sync_menu(&doc, &m.borrow());
                    }
                }));
            }
        }
        let (m, doc) = (menu.clone(), document.clone());
        listeners.extend(dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
            m.borrow_mut().toggle();
            sync_menu(&doc, &m.borrow());
        }));

        let scroll = wire_scroll(document);
        log::info!("[hero] mounted ({} listeners)", listeners.len());

        Self {
            timers,
            decode,
            _menu: menu,
            _scroll: scroll,
            _listeners: listeners,
        }
    }
}

impl Drop for Hero {
    fn drop(&mut self) {
        if let Some(id) = self.decode.take() {
            self.timers.cancel(id);
        }
    }
}

fn start_title_decode(
    document: &web::Document,
    cfg: &HeroConfig,
    timers: &Rc<BrowserTimers>,
) -> Rc<Cell<Option<i32>>> {
    let handle = Rc::new(Cell::new(None));
    let Some(title) = dom::html_by_id(document, HERO_TITLE_ID) else {
        return handle;
    };
    let mut decoder = TitleDecoder::new(cfg.main_title);
    let mut rng = StdRng::from_entropy();
    let (h, weak) = (handle.clone(), Rc::downgrade(timers));
    let id = timers.every(
        HERO_DECODE_INTERVAL_MS,
        Box::new(move || {
            let (text, last) = decoder.frame(&mut rng);
            title.set_inner_text(&text);
            if last {
                if let (Some(id), Some(t)) = (h.take(), weak.upgrade()) {
                    t.cancel(id);
                }
            }
        }),
    );
    handle.set(Some(id));
    handle
}

fn play_intro(document: &web::Document) {
    let els: Vec<web::HtmlElement> = [HERO_SUBTITLE_ID, HERO_DESC_ID]
        .iter()
        .filter_map(|id| dom::html_by_id(document, id))
        .collect();
    let Some(first) = els.first().cloned() else {
        return;
    };
    let mut spec = RevealSpec::fade_up(HERO_INTRO_Y, HERO_INTRO_MS, HERO_INTRO_DELAY_MS, 0.0)
        .staggered(HERO_INTRO_STAGGER_MS);
    spec.toggle = ToggleActions::PLAY_ONCE;
    let mut group = RevealGroup::new(spec, els);
    let hidden = group.hide_now();
    group.apply(&hidden);
    dom::force_reflow(&first);
    let plan = group.enter();
    group.apply(&plan);
}

fn sync_menu(document: &web::Document, menu: &NavMenu) {
    if let Some(panel) = document.get_element_by_id(MOBILE_MENU_ID) {
        if menu.is_open() {
            _ = panel.remove_attribute("hidden");
        } else {
            _ = panel.set_attribute("hidden", "");
        }
    }
    if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
        _ = toggle.set_attribute("aria-expanded", if menu.is_open() { "true" } else { "false" });
    }
}

fn wire_scroll(document: &web::Document) -> Option<ScrollSubscription> {
    let nav = document.get_element_by_id(NAV_ID);
    let hero = dom::html_by_id(document, HERO_ID);
    let (bg, content) = match &hero {
        Some(h) => (
            dom::html_by_class(h, HERO_BG_CLASS).into_iter().next(),
            dom::html_by_class(h, HERO_CONTENT_CLASS).into_iter().next(),
        ),
        None => (None, None),
    };

    let mut controls = ScrollControls::default();
    let mut on_offset = move |offset: f64| {
        if let Some(solid) = controls.update(offset).nav_solid {
            if let Some(nav) = &nav {
                let list = nav.class_list();
                if solid {
                    _ = list.replace("nav-transparent", "nav-solid");
                } else {
                    _ = list.replace("nav-solid", "nav-transparent");
                }
            }
        }
        let height = hero.as_ref().map(|h| h.offset_height() as f64).unwrap_or(0.0);
        let scrub = hero_scrub(offset, height);
        if let Some(bg) = &bg {
            _ = bg
                .style()
                .set_property("transform", &format!("translateY({}%)", scrub.bg_y_percent));
        }
        if let Some(content) = &content {
            let style = content.style();
            _ = style.set_property("opacity", &scrub.content_opacity.to_string());
            _ = style.set_property("transform", &format!("translateY({}px)", scrub.content_y));
        }
    };
    on_offset(dom::scroll_offset());
    scroll::subscribe(on_offset)
}
