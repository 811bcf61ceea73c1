// Loader sequencer driven by a virtual clock.

use amerey_web::core::loader::{Loader, LoaderPhase, LoaderView};
use amerey_web::core::timers::ManualTimers;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum ViewEvent {
    Progress(f64),
    Fade(u32),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<ViewEvent>>>);

impl LoaderView for Recorder {
    fn show_progress(&mut self, progress: f64) {
        self.0.borrow_mut().push(ViewEvent::Progress(progress));
    }
    fn start_fade(&mut self, duration_ms: u32) {
        self.0.borrow_mut().push(ViewEvent::Fade(duration_ms));
    }
}

impl Recorder {
    fn progress(&self) -> Vec<f64> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Progress(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn fades(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Fade(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }
}

fn counter() -> (Rc<Cell<u32>>, Box<dyn FnOnce()>) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, Box::new(move || c.set(c.get() + 1)))
}

#[test]
fn progress_is_monotonic_and_bounded() {
    let timers = Rc::new(ManualTimers::new());
    let view = Recorder::default();
    let (_, done) = counter();
    let loader = Loader::mount(
        timers.clone(),
        StdRng::seed_from_u64(7),
        Box::new(view.clone()),
        done,
    );

    timers.advance(2400);
    let values = view.progress();
    assert!(!values.is_empty());
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(values.iter().all(|p| (0.0..=100.0).contains(p)));
    assert_eq!(loader.progress(), *values.last().unwrap());
}

#[test]
fn ticking_stops_once_full() {
    let timers = Rc::new(ManualTimers::new());
    let view = Recorder::default();
    let (_, done) = counter();
    // Always draws close to the maximum increment.
    let rng = StepRng::new(u64::MAX, 0);
    let loader = Loader::mount(timers.clone(), rng, Box::new(view.clone()), done);

    timers.advance(1000);
    assert_eq!(loader.progress(), 100.0);
    assert!(!loader.is_ticking());
    let ticks = view.progress().len();
    assert!(ticks <= 8, "ticked {} times", ticks);

    timers.advance(1000);
    assert_eq!(view.progress().len(), ticks);
    // Only the completion delay is left.
    assert_eq!(timers.pending(), 1);
}

#[test]
fn fade_starts_at_delay() {
    let timers = Rc::new(ManualTimers::new());
    let view = Recorder::default();
    let (_, done) = counter();
    let loader = Loader::mount(
        timers.clone(),
        StdRng::seed_from_u64(1),
        Box::new(view.clone()),
        done,
    );

    timers.advance(2499);
    assert!(view.fades().is_empty());
    assert_eq!(loader.phase(), LoaderPhase::Loading);

    timers.advance(1);
    assert_eq!(view.fades(), vec![800]);
    assert_eq!(loader.phase(), LoaderPhase::Completing);
}

#[test]
fn completion_fires_once_after_fade() {
    let timers = Rc::new(ManualTimers::new());
    let (count, done) = counter();
    let loader = Loader::mount(
        timers.clone(),
        StdRng::seed_from_u64(3),
        Box::new(Recorder::default()),
        done,
    );

    timers.advance(3299);
    assert_eq!(count.get(), 0);
    timers.advance(1);
    assert_eq!(count.get(), 1);
    assert_eq!(loader.phase(), LoaderPhase::Done);

    timers.advance(10_000);
    assert_eq!(count.get(), 1);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn teardown_before_delay_cancels_everything() {
    let timers = Rc::new(ManualTimers::new());
    let view = Recorder::default();
    let (count, done) = counter();
    let loader = Loader::mount(
        timers.clone(),
        StdRng::seed_from_u64(5),
        Box::new(view.clone()),
        done,
    );

    timers.advance(1000);
    loader.teardown();
    assert_eq!(timers.pending(), 0);
    assert_eq!(loader.phase(), LoaderPhase::Cancelled);

    let ticks = view.progress().len();
    timers.advance(10_000);
    assert_eq!(count.get(), 0);
    assert_eq!(view.progress().len(), ticks);
    assert!(view.fades().is_empty());

    // Second teardown is a no-op.
    loader.teardown();
    assert_eq!(loader.phase(), LoaderPhase::Cancelled);
}

#[test]
fn teardown_during_fade_suppresses_completion() {
    let timers = Rc::new(ManualTimers::new());
    let (count, done) = counter();
    let loader = Loader::mount(
        timers.clone(),
        StdRng::seed_from_u64(9),
        Box::new(Recorder::default()),
        done,
    );

    timers.advance(2900);
    assert_eq!(loader.phase(), LoaderPhase::Completing);
    drop(loader);
    assert_eq!(timers.pending(), 0);
    timers.advance(1000);
    assert_eq!(count.get(), 0);
}

#[test]
fn completion_may_drop_the_loader() {
    type Slot = Rc<RefCell<Option<Loader<ManualTimers, StdRng>>>>;
    let timers = Rc::new(ManualTimers::new());
    let slot: Slot = Rc::new(RefCell::new(None));
    let finished = Rc::new(Cell::new(false));

    let (s, f) = (slot.clone(), finished.clone());
    let loader = Loader::mount(
        timers.clone(),
        StdRng::seed_from_u64(11),
        Box::new(Recorder::default()),
        Box::new(move || {
            s.borrow_mut().take();
            f.set(true);
        }),
    );
    *slot.borrow_mut() = Some(loader);

    timers.advance(3300);
    assert!(finished.get());
    assert!(slot.borrow().is_none());
    assert_eq!(timers.pending(), 0);
}
