//! The mounted "featured work" section: carousel plus stage transition.

use std::time::Duration;

use folio_types::ui::{AnimPhase, Region, SlideEffect};
use folio_types::{Carousel, ItemId, JumpOutcome};

/// Something clickable in the work section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkTarget {
    ListEntry(usize),
    Dot(usize),
    Previous,
    Next,
}

/// Regions the renderer drew on the last frame.
#[derive(Debug, Clone, Default)]
pub struct WorkHitMap {
    pub targets: Vec<(Region, WorkTarget)>,
}

impl WorkHitMap {
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<WorkTarget> {
        self.targets
            .iter()
            .find(|(region, _)| region.contains(column, row))
            .map(|&(_, target)| target)
    }
}

#[derive(Debug)]
pub struct WorkSection {
    carousel: Carousel,
    effect: Option<SlideEffect>,
    transition: Duration,
    animate: bool,
    hits: WorkHitMap,
}

impl WorkSection {
    pub(crate) fn new(carousel: Carousel, transition: Duration, reduced_motion: bool) -> Self {
        Self {
            carousel,
            effect: None,
            transition,
            animate: !reduced_motion && !transition.is_zero(),
            hits: WorkHitMap::default(),
        }
    }

    pub fn next(&mut self) {
        self.navigate(Carousel::next);
    }

    pub fn previous(&mut self) {
        self.navigate(Carousel::previous);
    }

    pub fn jump_to(&mut self, target: usize) -> JumpOutcome {
        let mut outcome = JumpOutcome::Rejected;
        self.navigate(|carousel| outcome = carousel.jump_to(target));
        if outcome == JumpOutcome::Rejected {
            tracing::debug!(
                requested = target,
                items = self.carousel.item_count(),
                "Rejected out-of-range jump"
            );
        }
        outcome
    }

    fn navigate(&mut self, op: impl FnOnce(&mut Carousel)) {
        let from = self.carousel.index();
        let revision = self.carousel.revision();
        op(&mut self.carousel);
        if self.carousel.revision() == revision {
            return;
        }
        let to = self.carousel.index();
        tracing::debug!(
            from,
            to,
            direction = self.carousel.direction().sign(),
            "Carousel moved"
        );
        if self.animate && from != to {
            self.effect = Some(SlideEffect::new(
                self.carousel.direction(),
                from,
                self.transition,
            ));
        }
    }

    pub fn set_hovered(&mut self, id: Option<&ItemId>) {
        if !self.carousel.set_hovered(id) {
            tracing::debug!(?id, "Ignoring hover for unknown item");
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        if let Some(effect) = self.effect.as_mut() {
            effect.advance(delta);
            if effect.phase() == AnimPhase::Completed {
                self.effect = None;
            }
        }
    }

    /// Replace the clickable regions; called by the renderer every frame.
    pub fn record_hits(&mut self, hits: WorkHitMap) {
        self.hits = hits;
    }

    pub(crate) fn clear_hits(&mut self) {
        self.hits = WorkHitMap::default();
    }

    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<WorkTarget> {
        self.hits.target_at(column, row)
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Running stage transition, if any.
    #[must_use]
    pub fn effect(&self) -> Option<&SlideEffect> {
        self.effect.as_ref()
    }
}
