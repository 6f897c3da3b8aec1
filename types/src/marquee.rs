//! Seamlessly looping horizontal scroll.
//!
//! The rendered strip is the content sequence drawn twice back-to-back, so
//! shifting the offset by exactly one copy's width lands on an identical
//! frame. `Marquee::tick` relies on that to keep the offset bounded without
//! a visible reset.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Error, PartialEq)]
pub enum MarqueeError {
    #[error("marquee content must not be empty")]
    EmptyContent,
    #[error("marquee speed must be finite and non-negative (got {0})")]
    InvalidSpeed(f64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

impl ScrollDirection {
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            ScrollDirection::Left => ScrollDirection::Right,
            ScrollDirection::Right => ScrollDirection::Left,
        }
    }
}

/// One renderable unit of a strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeContent {
    label: String,
}

impl MarqueeContent {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display width in terminal cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.label.width()
    }
}

/// Snapshot of the scrolling state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeState {
    pub offset: f64,
    pub paused: bool,
    /// Width of one copy of the content; `None` until the host has measured it.
    pub content_width: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Marquee {
    speed: f64,
    direction: ScrollDirection,
    content: Vec<MarqueeContent>,
    state: MarqueeState,
    hovered: Option<usize>,
}

impl Marquee {
    /// `speed` is in cells per second.
    pub fn configure(
        speed: f64,
        direction: ScrollDirection,
        content: Vec<MarqueeContent>,
    ) -> Result<Self, MarqueeError> {
        validate_speed(speed)?;
        if content.is_empty() {
            return Err(MarqueeError::EmptyContent);
        }
        Ok(Self {
            speed,
            direction,
            content,
            state: MarqueeState {
                offset: 0.0,
                paused: false,
                content_width: None,
            },
            hovered: None,
        })
    }

    /// Advance by one display frame.
    ///
    /// No-op while paused or before the first measurement. Advances of more
    /// than one copy's width are folded in a single step, which yields the
    /// same frame the per-width wrap rule would reach.
    pub fn tick(&mut self, delta_seconds: f64) {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return;
        }
        // Read each field once; pointer handlers may flip them between frames.
        let paused = self.state.paused;
        let direction = self.direction;
        let Some(width) = self.state.content_width else {
            return;
        };
        if paused {
            return;
        }

        let mut offset = self.state.offset + self.speed * delta_seconds * direction.sign();
        match direction {
            ScrollDirection::Left if offset <= -width => {
                offset += width * (-offset / width).floor();
                if offset <= -width {
                    offset += width;
                }
            }
            ScrollDirection::Right if offset >= 0.0 => {
                offset -= width * ((offset / width).floor() + 1.0);
                if offset >= 0.0 {
                    offset -= width;
                }
            }
            _ => {}
        }
        self.state.offset = offset;
    }

    /// Record the measured width of the rendered (duplicated) strip.
    ///
    /// Non-positive or non-finite widths leave the marquee unmeasured.
    pub fn measure(&mut self, strip_width: f64) {
        self.state.content_width =
            (strip_width.is_finite() && strip_width > 0.0).then_some(strip_width / 2.0);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    pub fn set_direction(&mut self, direction: ScrollDirection) {
        self.direction = direction;
    }

    /// Replace the content. The old measurement no longer applies, so the
    /// strip stays frozen until the host measures again.
    pub fn set_content(&mut self, content: Vec<MarqueeContent>) -> Result<(), MarqueeError> {
        if content.is_empty() {
            return Err(MarqueeError::EmptyContent);
        }
        self.content = content;
        self.state.content_width = None;
        self.hovered = None;
        Ok(())
    }

    /// Highlight a unit without affecting scrolling.
    pub fn set_hovered(&mut self, unit: Option<usize>) {
        self.hovered = unit.filter(|&i| i < self.content.len());
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    #[must_use]
    pub fn state(&self) -> MarqueeState {
        self.state
    }

    #[must_use]
    pub fn content(&self) -> &[MarqueeContent] {
        &self.content
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }
}

fn validate_speed(speed: f64) -> Result<(), MarqueeError> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(())
    } else {
        Err(MarqueeError::InvalidSpeed(speed))
    }
}

/// Cell layout of one copy of a strip's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    /// `(start, width)` of each unit, relative to the copy's left edge.
    spans: Vec<(usize, usize)>,
    width: usize,
}

impl StripLayout {
    /// Units are laid out left to right, each followed by `gap` blank cells.
    #[must_use]
    pub fn new(content: &[MarqueeContent], gap: usize) -> Self {
        let mut spans = Vec::with_capacity(content.len());
        let mut cursor = 0;
        for unit in content {
            let width = unit.width();
            spans.push((cursor, width));
            cursor += width + gap;
        }
        Self {
            spans,
            width: cursor,
        }
    }

    /// Width of a single copy.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Width of the rendered duplicated strip.
    #[must_use]
    pub fn strip_width(&self) -> usize {
        self.width * 2
    }

    #[must_use]
    pub fn spans(&self) -> &[(usize, usize)] {
        &self.spans
    }

    /// Unit under a viewport column, given the strip's current offset.
    #[must_use]
    pub fn unit_at(&self, column: usize, offset: f64) -> Option<usize> {
        if self.width == 0 {
            return None;
        }
        let within = (column as f64 - offset.floor()).rem_euclid(self.width as f64) as usize;
        self.spans
            .iter()
            .position(|&(start, width)| within >= start && within < start + width)
    }
}
