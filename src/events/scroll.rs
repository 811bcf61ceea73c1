use crate::dom;
use web_sys as web;

/// A passive window `scroll` listener, removed on drop.
///
/// Each owning component holds its own subscription so that dropping the
/// component on any path releases the listener with it.
pub struct ScrollSubscription {
    _listener: dom::Listener,
}

/// Call `on_offset` with `window.scrollY` on every scroll event.
pub fn subscribe(mut on_offset: impl FnMut(f64) + 'static) -> Option<ScrollSubscription> {
    let window = web::window()?;
    let listener = dom::listen_passive(&window, "scroll", move |_| {
        on_offset(dom::scroll_offset());
    })?;
    log::debug!("[scroll] subscribed");
    Some(ScrollSubscription {
        _listener: listener,
    })
}
