//! Timer capability used by the loader and hero title decode.
//!
//! Callbacks run on the single UI thread. Implementations must not hold
//! internal borrows while a callback runs, since callbacks may schedule or
//! cancel timers themselves.

use fnv::FnvHashMap;
use std::cell::RefCell;

pub trait Timers {
    type Handle: Copy + Eq + std::fmt::Debug + 'static;

    /// Run `f` once after `delay_ms`.
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Self::Handle;
    /// Run `f` every `period_ms` until cancelled.
    fn every(&self, period_ms: u32, f: Box<dyn FnMut()>) -> Self::Handle;
    /// Cancel a pending timer. Unknown or already fired handles are ignored.
    fn cancel(&self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>, u32),
}

struct Entry {
    due_ms: u64,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now_ms: u64,
    next_id: u64,
    entries: FnvHashMap<u64, Entry>,
    running: Option<u64>,
    running_cancelled: bool,
}

/// Deterministic virtual clock. Time only moves through [`ManualTimers::advance`].
#[derive(Default)]
pub struct ManualTimers {
    state: RefCell<ManualState>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of scheduled timers that have not fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Move the clock forward, firing due timers in deadline order
    /// (ties broken by registration order).
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        loop {
            let next = {
                let mut st = self.state.borrow_mut();
                let due = st
                    .entries
                    .iter()
                    .filter(|(_, e)| e.due_ms <= target)
                    .min_by_key(|(id, e)| (e.due_ms, **id))
                    .map(|(id, _)| *id);
                match due {
                    Some(id) => {
                        let entry = st.entries.remove(&id);
                        if let Some(e) = &entry {
                            st.now_ms = e.due_ms;
                        }
                        st.running = Some(id);
                        st.running_cancelled = false;
                        entry.map(|e| (id, e))
                    }
                    None => None,
                }
            };
            let Some((id, entry)) = next else { break };
            match entry.task {
                Task::Once(f) => f(),
                Task::Repeat(mut f, period) => {
                    f();
                    let mut st = self.state.borrow_mut();
                    if !st.running_cancelled {
                        let due_ms = entry.due_ms + u64::from(period.max(1));
                        st.entries.insert(
                            id,
                            Entry {
                                due_ms,
                                task: Task::Repeat(f, period),
                            },
                        );
                    }
                }
            }
            self.state.borrow_mut().running = None;
        }
        self.state.borrow_mut().now_ms = target;
    }

    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId {
        let mut st = self.state.borrow_mut();
        let id = st.next_id;
        st.next_id += 1;
        let due_ms = st.now_ms + u64::from(delay_ms);
        st.entries.insert(id, Entry { due_ms, task });
        TimerId(id)
    }
}

impl Timers for ManualTimers {
    type Handle = TimerId;

    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> TimerId {
        self.schedule(delay_ms, Task::Once(f))
    }

    fn every(&self, period_ms: u32, f: Box<dyn FnMut()>) -> TimerId {
        self.schedule(period_ms, Task::Repeat(f, period_ms))
    }

    fn cancel(&self, handle: TimerId) {
        let mut st = self.state.borrow_mut();
        if st.running == Some(handle.0) {
            st.running_cancelled = true;
        }
        st.entries.remove(&handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn once_fires_at_deadline() {
        let timers = ManualTimers::new();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let h = hits.clone();
        timers.after(250, Box::new(move || h.borrow_mut().push(250)));
        timers.advance(249);
        assert!(hits.borrow().is_empty());
        timers.advance(1);
        assert_eq!(*hits.borrow(), vec![250]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn repeat_cancels_itself_from_callback() {
        let timers = Rc::new(ManualTimers::new());
        let count = Rc::new(RefCell::new(0));
        let handle: Rc<RefCell<Option<TimerId>>> = Rc::new(RefCell::new(None));
        let (c, t, hd) = (count.clone(), timers.clone(), handle.clone());
        let id = timers.every(
            10,
            Box::new(move || {
                *c.borrow_mut() += 1;
                if *c.borrow() == 3 {
                    if let Some(id) = *hd.borrow() {
                        t.cancel(id);
                    }
                }
            }),
        );
        *handle.borrow_mut() = Some(id);
        timers.advance(1000);
        assert_eq!(*count.borrow(), 3);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cancel_before_deadline_drops_callback() {
        let timers = ManualTimers::new();
        let fired = Rc::new(RefCell::new(false));
        let f = fired.clone();
        let id = timers.after(10, Box::new(move || *f.borrow_mut() = true));
        timers.cancel(id);
        timers.cancel(id);
        timers.advance(100);
        assert!(!*fired.borrow());
    }
}
