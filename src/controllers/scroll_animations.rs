//! Card fade-up on scroll and the timed hero entrance.

use std::rc::Rc;

use web_sys::{Element, IntersectionObserverEntry};

use super::Controller;
use crate::dom::{self, Observer, Timers};
use crate::error::DomError;
use crate::page::PageContext;
use crate::reveal::{CARD_REVEAL, FADE_UP_CLASS, HERO_SCHEDULE, staggered_reveals};

pub struct ScrollAnimations {
    observer: Option<Observer>,
    timers: Rc<Timers>,
}

impl ScrollAnimations {
    pub const NAME: &'static str = "ScrollAnimations";

    /// Observe the cards and schedule the hero animation.
    ///
    /// Without `IntersectionObserver` support every card is revealed at once,
    /// since the stylesheet keeps unrevealed cards invisible.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if a selector is invalid.
    pub fn attach(ctx: &PageContext) -> Result<Self, DomError> {
        let timers = Timers::new();
        let cards = dom::elements(&ctx.document.query_selector_all(&ctx.config.selectors.reveal_cards)?);

        let observer = {
            let timers = Rc::clone(&timers);
            Observer::new(CARD_REVEAL.threshold, Some(CARD_REVEAL.root_margin), move |entries, _| {
                let hits = entries.iter().map(IntersectionObserverEntry::is_intersecting).collect::<Vec<_>>();
                for (index, delay) in staggered_reveals(&hits) {
                    let card = entries[index].target();
                    timers.schedule(delay, move || {
                        dom::report("card reveal", dom::add_class(&card, FADE_UP_CLASS));
                    });
                }
            })
        };
        let observer = match observer {
            Ok(observer) => {
                for card in &cards {
                    observer.observe(card);
                }
                Some(observer)
            }
            Err(e) => {
                log::warn!("scroll reveal unavailable, showing cards: {e}");
                for card in &cards {
                    dom::report("card reveal", dom::add_class(card, FADE_UP_CLASS));
                }
                None
            }
        };

        schedule_hero(ctx, &timers)?;
        Ok(Self { observer, timers })
    }
}

/// Hero content and image animate only when both are present.
fn schedule_hero(ctx: &PageContext, timers: &Rc<Timers>) -> Result<(), DomError> {
    let mut found: Vec<Element> = Vec::with_capacity(HERO_SCHEDULE.len());
    for step in &HERO_SCHEDULE {
        match ctx.document.query_selector(step.selector)? {
            Some(element) => found.push(element),
            None => return Ok(()),
        }
    }
    for (element, step) in found.into_iter().zip(HERO_SCHEDULE) {
        timers.schedule(step.delay_ms, move || {
            dom::report("hero animation", dom::add_class(&element, step.class));
        });
    }
    Ok(())
}

impl Controller for ScrollAnimations {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn detach(&mut self) {
        drop(self.observer.take());
        self.timers.cancel_all();
    }
}
