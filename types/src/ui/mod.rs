//! UI state types shared by the engine and the renderer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod region;
mod slide;

pub use animation::{AnimPhase, ease_out_cubic};
pub use region::Region;
pub use slide::{SLIDE_DISTANCE, SlideEffect, SlidePose};

use serde::Deserialize;

/// Top-level page section. Only one is mounted at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Featured-work carousel.
    #[default]
    Work,
    /// Tech-stack marquee bars.
    Stack,
}

impl Section {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Section::Work => Section::Stack,
            Section::Stack => Section::Work,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Section::Work => "WORK",
            Section::Stack => "STACK",
        }
    }
}

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Snap the stage instead of sliding. Marquees keep scrolling.
    pub reduced_motion: bool,
    /// Capture the pointer for hover-to-pause and click-to-select.
    pub mouse: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            mouse: true,
        }
    }
}
