//! Circular single-selection navigator over a fixed item list.
//!
//! `Carousel` is the only owner of the selected index and the direction of
//! the last move. Views are projections computed from it (see `views`).

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::item::{DisplayItem, ItemId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("duplicate item id '{0}'")]
    DuplicateId(ItemId),
}

/// Signed annotation of the most recent move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavDirection {
    Backward,
    /// Only before the first move.
    #[default]
    None,
    Forward,
}

impl NavDirection {
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            NavDirection::Backward => -1,
            NavDirection::None => 0,
            NavDirection::Forward => 1,
        }
    }

    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, NavDirection::Forward)
    }

    #[must_use]
    pub const fn is_backward(self) -> bool {
        matches!(self, NavDirection::Backward)
    }
}

/// What a jump to the already-selected slot does to `direction`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSlotPolicy {
    /// Leave the previous direction in place.
    #[default]
    Keep,
    /// Treat the jump as a backward move.
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Moved,
    /// Target was the current slot; index untouched.
    Unchanged,
    /// Target outside `[0, n)`; nothing changed.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<DisplayItem>,
    index: usize,
    direction: NavDirection,
    hovered: Option<ItemId>,
    same_slot: SameSlotPolicy,
    /// Bumped on every change to `index` or `direction`.
    revision: u64,
}

impl Carousel {
    pub fn new(items: Vec<DisplayItem>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CarouselError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            items,
            index: 0,
            direction: NavDirection::None,
            hovered: None,
            same_slot: SameSlotPolicy::default(),
            revision: 0,
        })
    }

    #[must_use]
    pub fn with_same_slot_policy(mut self, policy: SameSlotPolicy) -> Self {
        self.same_slot = policy;
        self
    }

    pub fn next(&mut self) {
        self.direction = NavDirection::Forward;
        self.index = (self.index + 1) % self.items.len();
        self.revision += 1;
    }

    pub fn previous(&mut self) {
        let n = self.items.len();
        self.direction = NavDirection::Backward;
        self.index = (self.index + n - 1) % n;
        self.revision += 1;
    }

    pub fn jump_to(&mut self, target: usize) -> JumpOutcome {
        if target >= self.items.len() {
            return JumpOutcome::Rejected;
        }
        if target == self.index {
            if self.same_slot == SameSlotPolicy::Backward
                && self.direction != NavDirection::Backward
            {
                self.direction = NavDirection::Backward;
                self.revision += 1;
            }
            return JumpOutcome::Unchanged;
        }
        self.direction = if target > self.index {
            NavDirection::Forward
        } else {
            NavDirection::Backward
        };
        self.index = target;
        self.revision += 1;
        JumpOutcome::Moved
    }

    /// Highlight an item without selecting it. Unknown ids are ignored and
    /// reported as `false`.
    pub fn set_hovered(&mut self, id: Option<&ItemId>) -> bool {
        match id {
            None => {
                self.hovered = None;
                true
            }
            Some(id) if self.position_of(id).is_some() => {
                self.hovered = Some(id.clone());
                true
            }
            Some(_) => false,
        }
    }

    #[must_use]
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn direction(&self) -> NavDirection {
        self.direction
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Always at least one.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn active(&self) -> &DisplayItem {
        &self.items[self.index]
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn same_slot_policy(&self) -> SameSlotPolicy {
        self.same_slot
    }
}
