use crate::core::timers::Timers;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Slot {
    id: i32,
    repeating: bool,
    closure: Closure<dyn FnMut()>,
}

#[derive(Default)]
struct Inner {
    live: FnvHashMap<i32, Slot>,
    // Fired or cancelled closures, dropped once they are not executing.
    retired: Vec<Slot>,
    running: Option<i32>,
}

impl Inner {
    fn sweep(&mut self) {
        let running = self.running;
        self.retired.retain(|s| Some(s.id) == running);
    }
}

/// `setTimeout`/`setInterval` behind the [`Timers`] capability.
pub struct BrowserTimers {
    window: web::Window,
    inner: Rc<RefCell<Inner>>,
}

impl BrowserTimers {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    fn begin(inner: &Weak<RefCell<Inner>>, id: i32) {
        if let Some(i) = inner.upgrade() {
            i.borrow_mut().running = Some(id);
        }
    }

    fn end(inner: &Weak<RefCell<Inner>>, id: i32, once: bool) {
        if let Some(i) = inner.upgrade() {
            let mut i = i.borrow_mut();
            i.running = None;
            if once {
                if let Some(slot) = i.live.remove(&id) {
                    i.retired.push(slot);
                }
            }
        }
    }

    fn install(
        &self,
        id: Result<i32, wasm_bindgen::JsValue>,
        repeating: bool,
        cell: &Cell<i32>,
        closure: Closure<dyn FnMut()>,
    ) -> i32 {
        match id {
            Ok(id) => {
                cell.set(id);
                let mut inner = self.inner.borrow_mut();
                inner.sweep();
                inner.live.insert(
                    id,
                    Slot {
                        id,
                        repeating,
                        closure,
                    },
                );
                id
            }
            Err(e) => {
                log::error!("[timers] schedule failed: {:?}", e);
                -1
            }
        }
    }
}

impl Timers for BrowserTimers {
    type Handle = i32;

    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> i32 {
        let cell = Rc::new(Cell::new(-1));
        let weak = Rc::downgrade(&self.inner);
        let id_cell = cell.clone();
        let closure: Closure<dyn FnMut()> = Closure::once(move || {
            let id = id_cell.get();
            Self::begin(&weak, id);
            f();
            Self::end(&weak, id, true);
        });
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            );
        self.install(id, false, &cell, closure)
    }

    fn every(&self, period_ms: u32, mut f: Box<dyn FnMut()>) -> i32 {
        let cell = Rc::new(Cell::new(-1));
        let weak = Rc::downgrade(&self.inner);
        let id_cell = cell.clone();
        let closure = Closure::wrap(Box::new(move || {
            let id = id_cell.get();
            Self::begin(&weak, id);
            f();
            Self::end(&weak, id, false);
        }) as Box<dyn FnMut()>);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            );
        self.install(id, true, &cell, closure)
    }

    fn cancel(&self, handle: i32) {
        let mut inner = self.inner.borrow_mut();
        let Some(slot) = inner.live.remove(&handle) else {
            return;
        };
        if slot.repeating {
            self.window.clear_interval_with_handle(handle);
        } else {
            self.window.clear_timeout_with_handle(handle);
        }
        inner.retired.push(slot);
        inner.sweep();
    }
}

impl Drop for BrowserTimers {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        let running = inner.running;
        let live: Vec<Slot> = inner.live.drain().map(|(_, s)| s).collect();
        for slot in live {
            if slot.repeating {
                self.window.clear_interval_with_handle(slot.id);
            } else {
                self.window.clear_timeout_with_handle(slot.id);
            }
            // Dropped from inside its own callback: leak rather than free it.
            if Some(slot.id) == running {
                slot.closure.forget();
            }
        }
        for slot in inner.retired.drain(..) {
            if Some(slot.id) == running {
                slot.closure.forget();
            }
        }
    }
}
