use crate::constants::{DIVIDER_WIDTH_PX, REVEAL_START_FOOTER, REVEAL_START_GRID, REVEAL_START_TITLE};
use crate::core::markup::{
    CARD_CLASS, COLLECTIONS_DESC_ID, COLLECTIONS_ID, COLLECTIONS_TITLE_ID, FEATURE_CLASS,
    FOOTER_ANIMATE_CLASS, FOOTER_ID, WELCOME_DESC_ID, WELCOME_DIVIDER_ID, WELCOME_ID,
    WELCOME_SUBTITLE_ID, WELCOME_TITLE_ID,
};
use crate::core::newsletter::Newsletter;
use crate::core::reveal::{self, RevealGroup, RevealSpec, ViewportObserver, VisualState};
use crate::core::tilt::CardHover;
use crate::dom;
use crate::events::{forms, pointer};
use crate::viewport::{DomViewport, ObserverHandle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const WELCOME_TITLE: RevealSpec = RevealSpec::fade_up(50.0, 1000, 0, REVEAL_START_TITLE);
const WELCOME_SUBTITLE: RevealSpec = RevealSpec::fade_up(40.0, 1000, 200, REVEAL_START_TITLE);
const WELCOME_DESC: RevealSpec = RevealSpec::fade_up(30.0, 1000, 500, REVEAL_START_TITLE);
const WELCOME_FEATURES: RevealSpec =
    RevealSpec::fade_up(40.0, 800, 700, REVEAL_START_GRID).staggered(150);
const COLLECTIONS_TITLE: RevealSpec = RevealSpec::fade_up(50.0, 1000, 0, REVEAL_START_TITLE);
const COLLECTIONS_DESC: RevealSpec = RevealSpec::fade_up(30.0, 1000, 200, REVEAL_START_TITLE);
const FOOTER_BLOCKS: RevealSpec =
    RevealSpec::fade_up(40.0, 800, 0, REVEAL_START_FOOTER).staggered(100);

fn collection_cards() -> RevealSpec {
    let mut spec = RevealSpec::fade_up(60.0, 1000, 400, REVEAL_START_GRID).staggered(200);
    spec.from = spec.from.with_rotate_x(15.0);
    spec
}

fn welcome_divider() -> RevealSpec {
    let mut spec = RevealSpec::fade_up(0.0, 800, 400, REVEAL_START_TITLE);
    spec.from = VisualState::width(0.0);
    spec.to = VisualState::width(DIVIDER_WIDTH_PX);
    spec
}

/// Welcome, collections and footer: scroll reveals plus card hover and the
/// newsletter form.
pub struct Showcase {
    viewport: DomViewport,
    handles: Vec<Option<ObserverHandle>>,
    _hover: Rc<RefCell<CardHover>>,
    _newsletter: Rc<RefCell<Newsletter>>,
    _listeners: Vec<dom::Listener>,
}

impl Showcase {
    pub fn mount(document: &web::Document, newsletter_confirmation: &'static str) -> Self {
        let mut this = Self {
            viewport: DomViewport::default(),
            handles: Vec::new(),
            _hover: Rc::new(RefCell::new(CardHover::default())),
            _newsletter: Rc::new(RefCell::new(Newsletter::default())),
            _listeners: Vec::new(),
        };

        if let Some(section) = document.get_element_by_id(WELCOME_ID) {
            let by_id = |id: &str| dom::html_by_id(document, id).into_iter().collect::<Vec<_>>();
            this.reveal(&section, WELCOME_TITLE, by_id(WELCOME_TITLE_ID));
            this.reveal(&section, WELCOME_SUBTITLE, by_id(WELCOME_SUBTITLE_ID));
            this.reveal(&section, welcome_divider(), by_id(WELCOME_DIVIDER_ID));
            this.reveal(&section, WELCOME_DESC, by_id(WELCOME_DESC_ID));
            this.reveal(&section, WELCOME_FEATURES, dom::html_by_class(&section, FEATURE_CLASS));
        }

        if let Some(section) = document.get_element_by_id(COLLECTIONS_ID) {
            let by_id = |id: &str| dom::html_by_id(document, id).into_iter().collect::<Vec<_>>();
            this.reveal(&section, COLLECTIONS_TITLE, by_id(COLLECTIONS_TITLE_ID));
            this.reveal(&section, COLLECTIONS_DESC, by_id(COLLECTIONS_DESC_ID));
            this.reveal(&section, collection_cards(), dom::html_by_class(&section, CARD_CLASS));
            let listeners = pointer::wire_card_tilt(&section, this._hover.clone());
            this._listeners.extend(listeners);
        }

        if let Some(section) = document.get_element_by_id(FOOTER_ID) {
            this.reveal(
                &section,
                FOOTER_BLOCKS,
                dom::html_by_class(&section, FOOTER_ANIMATE_CLASS),
            );
        }

        let listeners =
            forms::wire_newsletter(document, this._newsletter.clone(), newsletter_confirmation);
        this._listeners.extend(listeners);

        log::info!("[showcase] mounted {} reveal groups", this.handles.len());
        this
    }

    fn reveal(&mut self, trigger: &web::Element, spec: RevealSpec, els: Vec<web::HtmlElement>) {
        if els.is_empty() {
            return;
        }
        let group = RevealGroup::new(spec, els);
        let handle = reveal::bind(&mut self.viewport, trigger, group);
        self.handles.push(handle);
    }
}

impl Drop for Showcase {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            self.viewport.unregister(handle);
        }
    }
}
