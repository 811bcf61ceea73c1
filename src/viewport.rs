use crate::core::reveal::{classify_crossing, root_margin, Crossing, ViewportObserver};
use crate::dom;
use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u32);

/// `IntersectionObserver`-backed [`ViewportObserver`].
///
/// The observer root is the viewport with its lower edge raised to the trigger
/// line and its upper edge extended far above the page; a section
/// "intersects" exactly while its top is above that line.
#[derive(Default)]
pub struct DomViewport {
    next: u32,
    observers: FnvHashMap<u32, (web::IntersectionObserver, ObserverCallback)>,
}

impl ViewportObserver for DomViewport {
    type Target = web::Element;
    type Handle = Option<ObserverHandle>;

    fn register(
        &mut self,
        target: &web::Element,
        start_fraction: f64,
        mut on_enter: Box<dyn FnMut()>,
        mut on_exit: Box<dyn FnMut()>,
    ) -> Option<ObserverHandle> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let top = entry.bounding_client_rect().top();
                    let line_y = entry
                        .root_bounds()
                        .map(|r| r.bottom())
                        .unwrap_or_else(|| dom::viewport_height() * start_fraction);
                    match classify_crossing(entry.is_intersecting(), top, line_y) {
                        Crossing::Enter => on_enter(),
                        Crossing::Exit => on_exit(),
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(start_fraction));
        init.set_threshold(&JsValue::from_f64(0.0));
        let observer = match web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[reveal] observer unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        let id = self.next;
        self.next += 1;
        self.observers.insert(id, (observer, callback));
        Some(ObserverHandle(id))
    }

    fn unregister(&mut self, handle: Option<ObserverHandle>) {
        if let Some((observer, _callback)) = handle.and_then(|h| self.observers.remove(&h.0)) {
            observer.disconnect();
        }
    }
}

impl Drop for DomViewport {
    fn drop(&mut self) {
        for (_, (observer, _)) in self.observers.drain() {
            observer.disconnect();
        }
    }
}
