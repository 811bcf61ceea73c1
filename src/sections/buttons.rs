use crate::constants::{SCROLL_TOP_APPEAR_MS, SCROLL_TOP_APPEAR_Y};
use crate::core::config::FooterConfig;
use crate::core::links::whatsapp_link;
use crate::core::markup::{SCROLL_TOP_BTN_ID, WHATSAPP_BTN_ID};
use crate::core::reveal::{RevealGroup, RevealSpec, ToggleActions};
use crate::core::scroll::ScrollControls;
use crate::dom;
use crate::events::scroll::{self, ScrollSubscription};
use web_sys as web;

/// WhatsApp and scroll-to-top buttons.
pub struct FloatingButtons {
    _scroll: Option<ScrollSubscription>,
    _listeners: Vec<dom::Listener>,
}

impl FloatingButtons {
    pub fn mount(document: &web::Document, footer: &FooterConfig) -> Self {
        let mut listeners = Vec::with_capacity(2);

        let link = whatsapp_link(footer.whatsapp_number, footer.whatsapp_message);
        listeners.extend(dom::add_click_listener(document, WHATSAPP_BTN_ID, move || {
            if let Some(w) = web::window() {
                _ = w.open_with_url_and_target(&link, "_blank");
            }
        }));
        listeners.extend(dom::add_click_listener(
            document,
            SCROLL_TOP_BTN_ID,
            dom::scroll_to_top,
        ));

        Self {
            _scroll: wire_scroll_top(document),
            _listeners: listeners,
        }
    }
}

fn wire_scroll_top(document: &web::Document) -> Option<ScrollSubscription> {
    let button = dom::html_by_id(document, SCROLL_TOP_BTN_ID)?;
    let mut spec = RevealSpec::fade_up(SCROLL_TOP_APPEAR_Y, SCROLL_TOP_APPEAR_MS, 0, 0.0);
    spec.toggle = ToggleActions::PLAY_ONCE;
    let mut appear = RevealGroup::new(spec, [button.clone()]);

    let mut controls = ScrollControls::default();
    let mut on_offset = move |offset: f64| {
        let Some(visible) = controls.update(offset).scroll_top_visible else {
            return;
        };
        if visible {
            _ = button.remove_attribute("hidden");
            let hidden = appear.hide_now();
            appear.apply(&hidden);
            dom::force_reflow(&button);
            let plan = appear.enter();
            appear.apply(&plan);
        } else {
            _ = button.set_attribute("hidden", "");
        }
    };
    on_offset(dom::scroll_offset());
    scroll::subscribe(on_offset)
}
