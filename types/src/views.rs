//! Read-only projections of a `Carousel`.
//!
//! Every view is a pure function of the carousel's current state and is
//! recomputed on each render; nothing here caches.

use crate::carousel::{Carousel, NavDirection};
use crate::item::{DisplayItem, Rgb};

/// The single active item, tagged with the move that brought it in.
#[derive(Debug, Clone, Copy)]
pub struct StageView<'a> {
    pub item: &'a DisplayItem,
    pub index: usize,
    pub direction: NavDirection,
    pub accents: AccentPair,
}

/// Accent of the active item and the one after it, for ambient glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPair {
    pub primary: Rgb,
    pub secondary: Rgb,
}

/// Relative emphasis of a list entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prominence {
    pub opacity: f32,
    pub scale: f32,
    /// Horizontal nudge, positive pushes away from the stage.
    pub shift_x: f32,
    /// Vertical stacking offset relative to the active entry.
    pub shift_y: f32,
}

impl Prominence {
    const ACTIVE: Prominence = Prominence {
        opacity: 1.0,
        scale: 1.05,
        shift_x: 0.0,
        shift_y: 0.0,
    };
    const INACTIVE: Prominence = Prominence {
        opacity: 0.4,
        scale: 0.85,
        shift_x: 20.0,
        shift_y: 0.0,
    };
    const HOVERED: Prominence = Prominence {
        opacity: 1.0,
        scale: 1.1,
        shift_x: -10.0,
        shift_y: 0.0,
    };
    const STACK_STEP: f32 = 10.0;

    fn for_entry(position: usize, active: usize, hovered: bool) -> Self {
        let base = if hovered {
            Self::HOVERED
        } else if position == active {
            Self::ACTIVE
        } else {
            Self::INACTIVE
        };
        Self {
            shift_y: (position as f32 - active as f32) * Self::STACK_STEP,
            ..base
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListEntry<'a> {
    pub item: &'a DisplayItem,
    pub position: usize,
    pub active: bool,
    pub hovered: bool,
    pub prominence: Prominence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub position: usize,
    pub active: bool,
    pub accent: Rgb,
}

impl Carousel {
    #[must_use]
    pub fn stage_view(&self) -> StageView<'_> {
        let items = self.items();
        let next = (self.index() + 1) % items.len();
        StageView {
            item: self.active(),
            index: self.index(),
            direction: self.direction(),
            accents: AccentPair {
                primary: self.active().accent,
                secondary: items[next].accent,
            },
        }
    }

    /// One entry per item in original order.
    #[must_use]
    pub fn list_view(&self) -> Vec<ListEntry<'_>> {
        let active = self.index();
        let hovered = self.hovered();
        self.items()
            .iter()
            .enumerate()
            .map(|(position, item)| {
                let is_hovered = hovered == Some(&item.id);
                ListEntry {
                    item,
                    position,
                    active: position == active,
                    hovered: is_hovered,
                    prominence: Prominence::for_entry(position, active, is_hovered),
                }
            })
            .collect()
    }

    /// One indicator per item; exactly one is active.
    #[must_use]
    pub fn dots_view(&self) -> Vec<Dot> {
        let active = self.index();
        self.items()
            .iter()
            .enumerate()
            .map(|(position, item)| Dot {
                position,
                active: position == active,
                accent: item.accent,
            })
            .collect()
    }
}
