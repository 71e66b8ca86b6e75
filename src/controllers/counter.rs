//! Stat counters that count up once they are half visible.

use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserverEntry};

use super::Controller;
use crate::counter::{
    BOUNCE_MS, BOUNCE_TRANSFORM, CounterRun, CounterTarget, REST_TRANSFORM, TICK_MS, VISIBILITY_THRESHOLD,
};
use crate::dom::{self, Observer, Timers};
use crate::error::DomError;
use crate::page::PageContext;

pub struct CounterAnimation {
    observer: Option<Observer>,
    timers: Rc<Timers>,
}

impl CounterAnimation {
    pub const NAME: &'static str = "CounterAnimation";

    /// Observe every stat; each one counts exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the selector is invalid or the browser
    /// lacks `IntersectionObserver`.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let timers = Timers::new();
        let stats = dom::elements(&ctx.document.query_selector_all(&ctx.config.selectors.stat_numbers)?);

        let observer = {
            let timers = Rc::clone(&timers);
            Observer::new(VISIBILITY_THRESHOLD, None, move |entries, observer| {
                for entry in entries.into_iter().filter(IntersectionObserverEntry::is_intersecting) {
                    let stat = entry.target();
                    observer.unobserve(&stat);
                    start(&timers, stat);
                }
            })?
        };
        for stat in &stats {
            observer.observe(stat);
        }
        Ok(Self { observer: Some(observer), timers })
    }
}

fn start(timers: &Rc<Timers>, stat: Element) {
    let text = stat.text_content().unwrap_or_default();
    let Some(target) = CounterTarget::parse(&text) else {
        log::debug!("stat {text:?} has no number to count to");
        return;
    };
    let run = CounterRun::new(target);
    let bounce_timers = Rc::downgrade(timers);
    let mut tick = 0_u32;
    timers.repeat(TICK_MS, move || {
        tick = tick.saturating_add(1);
        let frame = run.frame(tick);
        stat.set_text_content(Some(&frame.text));
        if frame.done {
            bounce(&bounce_timers, &stat);
        }
        !frame.done
    });
}

fn bounce(timers: &Weak<Timers>, stat: &Element) {
    let Some(stat) = stat.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    dom::report("counter bounce", dom::set_style(&stat, "transform", BOUNCE_TRANSFORM));
    if let Some(timers) = timers.upgrade() {
        timers.schedule(BOUNCE_MS, move || {
            dom::report("counter bounce", dom::set_style(&stat, "transform", REST_TRANSFORM));
        });
    }
}

impl Controller for CounterAnimation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        drop(self.observer.take());
        self.timers.cancel_all();
    }
}
