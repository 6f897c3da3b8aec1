//! Core domain types for Folio.
//!
//! The two interactive engines of the portfolio live here: the looping
//! marquee and the carousel state machine with its derived views. This
//! crate has no IO, no async, and no rendering dependency.

#![allow(clippy::missing_errors_doc)]

mod carousel;
mod item;
mod marquee;
pub mod ui;
mod views;

pub use carousel::{Carousel, CarouselError, JumpOutcome, NavDirection, SameSlotPolicy};
pub use item::{DisplayItem, ItemError, ItemId, ItemLinks, Rgb};
pub use marquee::{
    Marquee, MarqueeContent, MarqueeError, MarqueeState, ScrollDirection, StripLayout,
};
pub use views::{AccentPair, Dot, ListEntry, Prominence, StageView};
