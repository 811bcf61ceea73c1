//! Reveal-on-scroll engine.
//!
//! A [`RevealGroup`] is an ordered set of elements sharing one trigger. The
//! group is either hidden or revealed; `enter`/`exit` produce a plan of
//! per-element steps and flip that state, so replaying a trigger that is
//! already satisfied yields no steps and leaves the end-state unchanged.

use crate::core::ease::Ease;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

/// Inline visual state of one tracked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_y: f32,
    pub rotate_x: f32,
    pub width_px: Option<f32>,
}

impl VisualState {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        rotate_x: 0.0,
        width_px: None,
    };

    /// Transparent and pushed down by `y` pixels.
    pub const fn hidden_below(y: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y: y,
            rotate_x: 0.0,
            width_px: None,
        }
    }

    pub const fn with_rotate_x(mut self, deg: f32) -> Self {
        self.rotate_x = deg;
        self
    }

    pub const fn width(px: f32) -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            rotate_x: 0.0,
            width_px: Some(px),
        }
    }

    /// CSS property/value pairs for this state.
    pub fn declarations(&self) -> SmallVec<[(&'static str, String); 3]> {
        let mut out = SmallVec::new();
        if let Some(w) = self.width_px {
            out.push(("width", format!("{}px", w)));
            return out;
        }
        out.push(("opacity", format!("{}", self.opacity)));
        let mut transform = format!("translateY({}px)", self.translate_y);
        if self.rotate_x != 0.0 {
            _ = write!(transform, " rotateX({}deg)", self.rotate_x);
        }
        out.push(("transform", transform));
        out
    }

    pub fn css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Play,
    Reverse,
}

/// What happens when the trigger line is crossed downwards (`on_enter`)
/// and back upwards (`on_exit`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_exit: Action,
}

impl ToggleActions {
    pub const PLAY_REVERSE: Self = Self {
        on_enter: Action::Play,
        on_exit: Action::Reverse,
    };
    pub const PLAY_ONCE: Self = Self {
        on_enter: Action::Play,
        on_exit: Action::None,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub ease: Ease,
    /// Trigger line as a fraction of viewport height from the top.
    pub start_fraction: f64,
    pub toggle: ToggleActions,
}

impl RevealSpec {
    pub const fn fade_up(y: f32, duration_ms: u32, delay_ms: u32, start_fraction: f64) -> Self {
        Self {
            from: VisualState::hidden_below(y),
            to: VisualState::VISIBLE,
            duration_ms,
            delay_ms,
            stagger_ms: 0,
            ease: Ease::OutQuad,
            start_fraction,
            toggle: ToggleActions::PLAY_REVERSE,
        }
    }

    pub const fn staggered(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub ease: Ease,
}

impl Timing {
    pub const INSTANT: Self = Self {
        delay_ms: 0,
        duration_ms: 0,
        ease: Ease::Linear,
    };

    /// `transition` value covering the given properties.
    pub fn css(&self, properties: &[&str]) -> String {
        if self.duration_ms == 0 {
            return "none".to_string();
        }
        properties
            .iter()
            .map(|p| {
                format!(
                    "{} {}ms {} {}ms",
                    p,
                    self.duration_ms,
                    self.ease.css(),
                    self.delay_ms
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub index: usize,
    pub state: VisualState,
    pub timing: Timing,
}

pub type Plan = SmallVec<[Step; 8]>;

/// Anything whose inline style can be set.
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
}

impl<T: StyleTarget + ?Sized> StyleTarget for Rc<T> {
    fn set_style(&self, property: &str, value: &str) {
        (**self).set_style(property, value)
    }
}

pub struct RevealGroup<E> {
    spec: RevealSpec,
    elements: SmallVec<[E; 8]>,
    revealed: bool,
}

impl<E: StyleTarget> RevealGroup<E> {
    pub fn new(spec: RevealSpec, elements: impl IntoIterator<Item = E>) -> Self {
        Self {
            spec,
            elements: elements.into_iter().collect(),
            revealed: false,
        }
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Snap every element to the hidden state, without transition.
    pub fn hide_now(&mut self) -> Plan {
        self.revealed = false;
        (0..self.elements.len())
            .map(|index| Step {
                index,
                state: self.spec.from,
                timing: Timing::INSTANT,
            })
            .collect()
    }

    pub fn enter(&mut self) -> Plan {
        self.act(self.spec.toggle.on_enter)
    }

    pub fn exit(&mut self) -> Plan {
        self.act(self.spec.toggle.on_exit)
    }

    fn act(&mut self, action: Action) -> Plan {
        match action {
            Action::Play if !self.revealed => {
                self.revealed = true;
                self.forward()
            }
            Action::Reverse if self.revealed => {
                self.revealed = false;
                self.backward()
            }
            _ => Plan::new(),
        }
    }

    fn forward(&self) -> Plan {
        let s = &self.spec;
        (0..self.elements.len())
            .map(|index| Step {
                index,
                state: s.to,
                timing: Timing {
                    delay_ms: s.delay_ms + index as u32 * s.stagger_ms,
                    duration_ms: s.duration_ms,
                    ease: s.ease,
                },
            })
            .collect()
    }

    // Reverse plays last element first and skips the leading delay.
    fn backward(&self) -> Plan {
        let s = &self.spec;
        let n = self.elements.len();
        (0..n)
            .map(|index| Step {
                index,
                state: s.from,
                timing: Timing {
                    delay_ms: (n - 1 - index) as u32 * s.stagger_ms,
                    duration_ms: s.duration_ms,
                    ease: s.ease,
                },
            })
            .collect()
    }

    /// Write a plan to the elements. Steps for missing indices are skipped.
    pub fn apply(&self, plan: &Plan) {
        for step in plan {
            let Some(el) = self.elements.get(step.index) else {
                continue;
            };
            let decls = step.state.declarations();
            let props: SmallVec<[&str; 3]> = decls.iter().map(|(k, _)| *k).collect();
            el.set_style("transition", &step.timing.css(&props));
            for (k, v) in &decls {
                el.set_style(k, v);
            }
        }
    }
}

/// Direction in which a trigger line was crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Exit,
}

/// Classify a visibility change of a section against its trigger line.
///
/// `target_top` and `line_y` are viewport coordinates. A section that is no
/// longer intersecting because it scrolled up past the viewport has still
/// crossed the line downwards, so it counts as an enter.
pub fn classify_crossing(is_intersecting: bool, target_top: f64, line_y: f64) -> Crossing {
    if is_intersecting || target_top < line_y {
        Crossing::Enter
    } else {
        Crossing::Exit
    }
}

/// Top extension of the observer root, far beyond any page height.
pub const ROOT_TOP_EXTENSION_PX: u32 = 100_000;

/// `IntersectionObserver` root margin for a trigger line at `start_fraction`.
///
/// The bottom edge moves up to the line and the top edge is pushed far above
/// the viewport, so a section intersects exactly while its top is above the
/// line. Every crossing of the line, scrolled or jumped, flips intersection.
pub fn root_margin(start_fraction: f64) -> String {
    let cut = ((1.0 - start_fraction) * 100.0).clamp(0.0, 100.0);
    format!("{}px 0px -{:.0}% 0px", ROOT_TOP_EXTENSION_PX, cut)
}

/// Observer-registration capability implemented by the host environment.
pub trait ViewportObserver {
    type Target: ?Sized;
    type Handle;

    fn register(
        &mut self,
        target: &Self::Target,
        start_fraction: f64,
        on_enter: Box<dyn FnMut()>,
        on_exit: Box<dyn FnMut()>,
    ) -> Self::Handle;

    fn unregister(&mut self, handle: Self::Handle);
}

/// Hide the group now and drive it from `observer` crossings of `trigger`.
pub fn bind<O, E>(observer: &mut O, trigger: &O::Target, group: RevealGroup<E>) -> O::Handle
where
    O: ViewportObserver,
    E: StyleTarget + 'static,
{
    let start = group.spec.start_fraction;
    let group = Rc::new(RefCell::new(group));
    {
        let mut g = group.borrow_mut();
        let plan = g.hide_now();
        g.apply(&plan);
    }
    let on_enter = {
        let group = group.clone();
        Box::new(move || {
            let mut g = group.borrow_mut();
            let plan = g.enter();
            g.apply(&plan);
        })
    };
    let on_exit = Box::new(move || {
        let mut g = group.borrow_mut();
        let plan = g.exit();
        g.apply(&plan);
    });
    observer.register(trigger, start, on_enter, on_exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Null;
    impl StyleTarget for Null {
        fn set_style(&self, _: &str, _: &str) {}
    }

    #[test]
    fn forward_steps_are_staggered_in_order() {
        let spec = RevealSpec::fade_up(40.0, 800, 700, 0.6).staggered(150);
        let mut g = RevealGroup::new(spec, [Null, Null, Null]);
        let plan = g.enter();
        let delays: Vec<u32> = plan.iter().map(|s| s.timing.delay_ms).collect();
        assert_eq!(delays, vec![700, 850, 1000]);
    }

    #[test]
    fn reverse_steps_run_last_element_first() {
        let spec = RevealSpec::fade_up(40.0, 800, 700, 0.6).staggered(100);
        let mut g = RevealGroup::new(spec, [Null, Null, Null]);
        g.enter();
        let plan = g.exit();
        let delays: Vec<u32> = plan.iter().map(|s| s.timing.delay_ms).collect();
        assert_eq!(delays, vec![200, 100, 0]);
        assert!(plan.iter().all(|s| s.state == spec.from));
    }

    #[test]
    fn visible_state_css() {
        assert_eq!(
            VisualState::VISIBLE.css(),
            "opacity: 1; transform: translateY(0px);"
        );
        assert_eq!(
            VisualState::hidden_below(60.0).with_rotate_x(15.0).css(),
            "opacity: 0; transform: translateY(60px) rotateX(15deg);"
        );
        assert_eq!(VisualState::width(60.0).css(), "width: 60px;");
    }
}
