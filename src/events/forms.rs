use crate::core::markup::{NEWSLETTER_FORM_ID, NEWSLETTER_INPUT_ID};
use crate::core::newsletter::{Newsletter, SubmitOutcome};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep `state` in sync with the email field and handle submits.
///
/// An empty submit is ignored; otherwise `confirmation` is shown once and
/// the field is cleared.
pub fn wire_newsletter(
    document: &web::Document,
    state: Rc<RefCell<Newsletter>>,
    confirmation: &'static str,
) -> Vec<dom::Listener> {
    let (Some(form), Some(input)) = (
        document.get_element_by_id(NEWSLETTER_FORM_ID),
        document
            .get_element_by_id(NEWSLETTER_INPUT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok()),
    ) else {
        return Vec::new();
    };

    let mut listeners = Vec::with_capacity(2);

    let (s, i) = (state.clone(), input.clone());
    listeners.extend(dom::listen(&input, "input", move |_| {
        s.borrow_mut().set_email(i.value());
    }));

    listeners.extend(dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let outcome = state.borrow_mut().submit();
        if let SubmitOutcome::Subscribed { .. } = outcome {
            if let Some(w) = web::window() {
                _ = w.alert_with_message(confirmation);
            }
            input.set_value("");
        }
    }));
    listeners
}
