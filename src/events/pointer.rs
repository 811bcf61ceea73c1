use crate::constants::{TILT_IN_MS, TILT_OUT_MS};
use crate::core::ease::Ease;
use crate::core::markup::{CARD_CLASS, CARD_OVERLAY_CLASS, CARD_TILT_CLASS};
use crate::core::tilt::{tilt_for_pointer, CardHover, Tilt};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn card_id(card: &web::HtmlElement) -> Option<u32> {
    card.get_attribute("data-card-id")?.parse().ok()
}

// Written to the card's inner layer; the card itself belongs to its reveal group.
fn apply_tilt(layer: &web::HtmlElement, tilt: Tilt, duration_ms: u32) {
    let style = layer.style();
    _ = style.set_property(
        "transition",
        &format!("transform {}ms {}", duration_ms, Ease::OutQuad.css()),
    );
    _ = style.set_property("transform", &tilt.transform());
}

fn refresh_overlays(cards: &[web::HtmlElement], hover: &CardHover) {
    for card in cards {
        let Some(id) = card_id(card) else { continue };
        for overlay in dom::html_by_class(card, CARD_OVERLAY_CLASS) {
            _ = overlay
                .style()
                .set_property("opacity", &hover.overlay_opacity(id).to_string());
        }
    }
}

/// Pointer tilt and hover overlay for every collection card under `grid`.
pub fn wire_card_tilt(grid: &web::Element, hover: Rc<RefCell<CardHover>>) -> Vec<dom::Listener> {
    let cards = Rc::new(dom::html_by_class(grid, CARD_CLASS));
    let mut listeners = Vec::with_capacity(cards.len() * 2);

    for card in cards.iter() {
        let Some(id) = card_id(card) else { continue };
        let Some(layer) = dom::html_by_class(card, CARD_TILT_CLASS).into_iter().next() else {
            continue;
        };

        let (c, l, h, all) = (card.clone(), layer.clone(), hover.clone(), cards.clone());
        listeners.extend(dom::listen(card, "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = c.get_bounding_client_rect();
            let tilt = tilt_for_pointer(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            apply_tilt(&l, tilt, TILT_IN_MS);
            let changed = h.borrow_mut().enter(id).is_some();
            if changed {
                refresh_overlays(&all, &h.borrow());
            }
        }));

        let (l, h, all) = (layer, hover.clone(), cards.clone());
        listeners.extend(dom::listen(card, "mouseleave", move |_| {
            apply_tilt(&l, Tilt::FLAT, TILT_OUT_MS);
            h.borrow_mut().leave();
            refresh_overlays(&all, &h.borrow());
        }));
    }
    listeners
}
