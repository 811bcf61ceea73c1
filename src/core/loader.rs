//! Loader sequencer: `Loading -> Completing -> Done`.
//!
//! Two independent timers run from mount: a progress tick and the completion
//! delay. The delay is authoritative; progress is decorative and may sit
//! below 100 when the fade starts. Both timers, plus the fade timer, are
//! cancelled on teardown so a removed loader never calls back.

use crate::constants::{
    LOADER_DELAY_MS, LOADER_FADE_MS, LOADER_MAX_INCREMENT, LOADER_PROGRESS_MAX, LOADER_TICK_MS,
};
use crate::core::timers::Timers;
use rand::Rng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Loading,
    Completing,
    Done,
    Cancelled,
}

/// Visual side of the loader, supplied by the host.
pub trait LoaderView {
    fn show_progress(&mut self, progress: f64);
    fn start_fade(&mut self, duration_ms: u32);
}

/// Percent label shown under the bar.
pub fn display_percent(progress: f64) -> u8 {
    progress.round().clamp(0.0, LOADER_PROGRESS_MAX) as u8
}

struct State<H, R> {
    phase: LoaderPhase,
    progress: f64,
    rng: R,
    tick: Option<H>,
    delay: Option<H>,
    fade: Option<H>,
    view: Box<dyn LoaderView>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

pub struct Loader<T: Timers + 'static, R: Rng + 'static> {
    timers: Rc<T>,
    state: Rc<RefCell<State<T::Handle, R>>>,
}

impl<T: Timers + 'static, R: Rng + 'static> Loader<T, R> {
    /// Start both timers. `on_complete` runs once, after the fade.
    pub fn mount(
        timers: Rc<T>,
        rng: R,
        view: Box<dyn LoaderView>,
        on_complete: Box<dyn FnOnce()>,
    ) -> Self {
        let state = Rc::new(RefCell::new(State {
            phase: LoaderPhase::Loading,
            progress: 0.0,
            rng,
            tick: None,
            delay: None,
            fade: None,
            view,
            on_complete: Some(on_complete),
        }));

        let weak = Rc::downgrade(&state);
        let t = Rc::downgrade(&timers);
        let tick = timers.every(LOADER_TICK_MS, Box::new(move || on_tick(&weak, &t)));

        let weak = Rc::downgrade(&state);
        let t = Rc::downgrade(&timers);
        let delay = timers.after(LOADER_DELAY_MS, Box::new(move || on_delay(&weak, &t)));

        {
            let mut st = state.borrow_mut();
            st.tick = Some(tick);
            st.delay = Some(delay);
        }
        log::debug!("[loader] mounted");
        Self { timers, state }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.state.borrow().phase
    }

    pub fn progress(&self) -> f64 {
        self.state.borrow().progress
    }

    /// Whether the progress tick timer is still scheduled.
    pub fn is_ticking(&self) -> bool {
        self.state.borrow().tick.is_some()
    }

    /// Cancel every outstanding timer. Safe to call more than once.
    pub fn teardown(&self) {
        let handles = {
            let mut st = self.state.borrow_mut();
            if st.phase != LoaderPhase::Done {
                st.phase = LoaderPhase::Cancelled;
            }
            st.on_complete = None;
            [st.tick.take(), st.delay.take(), st.fade.take()]
        };
        for h in handles.into_iter().flatten() {
            self.timers.cancel(h);
        }
    }
}

impl<T: Timers + 'static, R: Rng + 'static> Drop for Loader<T, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn on_tick<T: Timers, R: Rng>(state: &Weak<RefCell<State<T::Handle, R>>>, timers: &Weak<T>) {
    let Some(state) = state.upgrade() else { return };
    let mut st = state.borrow_mut();
    if st.phase == LoaderPhase::Cancelled {
        return;
    }
    let step = st.rng.gen_range(0.0..=LOADER_MAX_INCREMENT);
    st.progress = (st.progress + step).min(LOADER_PROGRESS_MAX);
    let progress = st.progress;
    st.view.show_progress(progress);
    if progress >= LOADER_PROGRESS_MAX {
        if let (Some(h), Some(timers)) = (st.tick.take(), timers.upgrade()) {
            timers.cancel(h);
        }
    }
}

fn on_delay<T: Timers + 'static, R: Rng + 'static>(
    state: &Weak<RefCell<State<T::Handle, R>>>,
    timers: &Weak<T>,
) {
    let (Some(rc), Some(timers)) = (state.upgrade(), timers.upgrade()) else {
        return;
    };
    let mut st = rc.borrow_mut();
    if st.phase != LoaderPhase::Loading {
        return;
    }
    st.delay = None;
    st.phase = LoaderPhase::Completing;
    st.view.start_fade(LOADER_FADE_MS);
    log::debug!("[loader] fading out (progress={:.0})", st.progress);

    let weak = state.clone();
    st.fade = Some(timers.after(LOADER_FADE_MS, Box::new(move || on_faded(&weak))));
}

fn on_faded<H, R>(state: &Weak<RefCell<State<H, R>>>) {
    let Some(rc) = state.upgrade() else { return };
    let callback = {
        let mut st = rc.borrow_mut();
        if st.phase != LoaderPhase::Completing {
            return;
        }
        st.fade = None;
        st.phase = LoaderPhase::Done;
        st.on_complete.take()
    };
    // Borrow released: the callback may drop or tear down this loader.
    if let Some(cb) = callback {
        cb();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_label_rounds_and_clamps() {
        assert_eq!(display_percent(0.0), 0);
        assert_eq!(display_percent(49.5), 50);
        assert_eq!(display_percent(99.6), 100);
        assert_eq!(display_percent(100.0), 100);
    }
}
