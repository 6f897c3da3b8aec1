//! The mounted "tech stack" section: a column of marquee strips.

use std::time::Duration;

use folio_types::ui::Region;
use folio_types::{Marquee, StripLayout};

/// One marquee plus what the renderer reported about it.
#[derive(Debug, Clone)]
pub struct MarqueeStrip {
    marquee: Marquee,
    layout: StripLayout,
    region: Option<Region>,
    hover_paused: bool,
    manual_paused: bool,
}

impl MarqueeStrip {
    pub(crate) fn new(marquee: Marquee, gap: usize) -> Self {
        let layout = StripLayout::new(marquee.content(), gap);
        Self {
            marquee,
            layout,
            region: None,
            hover_paused: false,
            manual_paused: false,
        }
    }

    /// Called by the renderer after drawing the duplicated strip.
    pub fn record_render(&mut self, region: Region, strip_width: usize) {
        if self.marquee.state().content_width.is_none() {
            tracing::debug!(strip_width, "Marquee measured");
        }
        self.region = Some(region);
        self.marquee.measure(strip_width as f64);
    }

    /// Forget the last drawn region; a strip not drawn this frame takes no pointer input.
    pub(crate) fn clear_region(&mut self) {
        self.region = None;
    }

    /// Update hover from a pointer position; returns whether the pointer is over the strip.
    pub(crate) fn pointer_at(&mut self, column: u16, row: u16) -> bool {
        let inside = self
            .region
            .is_some_and(|region| region.contains(column, row));
        let unit = match self.region {
            Some(region) if inside => self
                .layout
                .unit_at(usize::from(column - region.x), self.marquee.offset()),
            _ => None,
        };
        self.marquee.set_hovered(unit);
        self.hover_paused = inside;
        self.sync_pause();
        inside
    }

    pub(crate) fn pointer_left(&mut self) {
        self.marquee.set_hovered(None);
        self.hover_paused = false;
        self.sync_pause();
    }

    pub(crate) fn set_manual_pause(&mut self, paused: bool) {
        self.manual_paused = paused;
        self.sync_pause();
    }

    fn sync_pause(&mut self) {
        self.marquee
            .set_paused(self.hover_paused || self.manual_paused);
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.marquee.tick(delta.as_secs_f64());
    }

    #[must_use]
    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    #[must_use]
    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// Label of the hovered unit; every copy with this label is highlighted.
    #[must_use]
    pub fn hovered_label(&self) -> Option<&str> {
        self.marquee
            .hovered()
            .and_then(|i| self.marquee.content().get(i))
            .map(|unit| unit.label())
    }
}

#[derive(Debug)]
pub struct StackSection {
    strips: Vec<MarqueeStrip>,
    manual_paused: bool,
}

impl StackSection {
    pub(crate) fn new(strips: Vec<MarqueeStrip>) -> Self {
        Self {
            strips,
            manual_paused: false,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        for strip in &mut self.strips {
            strip.advance(delta);
        }
    }

    pub(crate) fn toggle_pause(&mut self) {
        self.manual_paused = !self.manual_paused;
        tracing::debug!(paused = self.manual_paused, "Toggled marquee pause");
        for strip in &mut self.strips {
            strip.set_manual_pause(self.manual_paused);
        }
    }

    pub(crate) fn pointer_at(&mut self, column: u16, row: u16) {
        for strip in &mut self.strips {
            strip.pointer_at(column, row);
        }
    }

    pub(crate) fn pointer_left(&mut self) {
        for strip in &mut self.strips {
            strip.pointer_left();
        }
    }

    pub(crate) fn clear_regions(&mut self) {
        for strip in &mut self.strips {
            strip.clear_region();
        }
    }

    #[must_use]
    pub fn strips(&self) -> &[MarqueeStrip] {
        &self.strips
    }

    pub fn strips_mut(&mut self) -> &mut [MarqueeStrip] {
        &mut self.strips
    }

    #[must_use]
    pub fn is_manually_paused(&self) -> bool {
        self.manual_paused
    }
}
