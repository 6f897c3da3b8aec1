//! Application state for Folio.
//!
//! `App` owns whichever page section is currently mounted. Mounting builds a
//! fresh component from the validated templates and installs its key
//! bindings; unmounting removes the bindings and drops the component, which
//! also ends its per-frame updates.
//!
//! ```text
//! input ─► App::handle_key / pointer_* ─► Carousel ops, pause, hover
//! frame ─► App::tick ─► Marquee::tick, SlideEffect::advance
//! draw  ─► folio_tui::draw(&mut App) ─► record_render / record_hits
//! ```

mod clock;
mod keymap;
mod stack;
mod work;

use std::time::Duration;

use anyhow::{Context, Result};

use folio_config::Settings;
use folio_types::ui::{Section, UiOptions};
use folio_types::{Carousel, Marquee};

pub use clock::FrameClock;
pub use keymap::{Action, BindingOwner, Key, Keymap};
pub use stack::{MarqueeStrip, StackSection};
pub use work::{WorkHitMap, WorkSection, WorkTarget};

const GLOBAL_BINDINGS: &[(Key, Action)] = &[
    (Key::Tab, Action::ToggleSection),
    (Key::Esc, Action::Quit),
    (Key::Char('q'), Action::Quit),
    (Key::CtrlC, Action::Quit),
];

const CAROUSEL_BINDINGS: &[(Key, Action)] =
    &[(Key::Left, Action::Previous), (Key::Right, Action::Next)];

const STACK_BINDINGS: &[(Key, Action)] = &[(Key::Char('p'), Action::TogglePause)];

/// Pristine components cloned on every mount.
#[derive(Debug)]
struct Templates {
    carousel: Carousel,
    strips: Vec<(Marquee, usize)>,
}

#[derive(Debug)]
pub struct App {
    ui_options: UiOptions,
    transition: Duration,
    templates: Templates,
    section: Section,
    work: Option<WorkSection>,
    stack: Option<StackSection>,
    keymap: Keymap,
    clock: FrameClock,
    generation: u64,
    quit: bool,
}

impl App {
    /// Build the app and mount the configured start section.
    ///
    /// Fails only on contract violations the config layer should already
    /// have caught (no items, empty strips).
    pub fn new(settings: Settings) -> Result<Self> {
        let carousel = Carousel::new(settings.items)
            .context("cannot build carousel")?
            .with_same_slot_policy(settings.same_slot);
        let strips = settings
            .strips
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                Marquee::configure(spec.speed, spec.direction, spec.content())
                    .map(|marquee| (marquee, spec.gap))
                    .with_context(|| format!("cannot build marquee #{i}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut keymap = Keymap::new();
        keymap.install(BindingOwner::Global, GLOBAL_BINDINGS);

        let mut app = Self {
            ui_options: settings.ui,
            transition: settings.transition,
            templates: Templates { carousel, strips },
            section: settings.start_section,
            work: None,
            stack: None,
            keymap,
            clock: FrameClock::new(settings.max_frame_delta),
            generation: 0,
            quit: false,
        };
        app.mount(settings.start_section);
        Ok(app)
    }

    fn mount(&mut self, section: Section) {
        self.generation += 1;
        let generation = self.generation;
        match section {
            Section::Work => {
                let carousel = self.templates.carousel.clone();
                self.work = Some(WorkSection::new(
                    carousel,
                    self.transition,
                    self.ui_options.reduced_motion,
                ));
                self.keymap
                    .install(BindingOwner::Carousel(generation), CAROUSEL_BINDINGS);
            }
            Section::Stack => {
                let strips = self
                    .templates
                    .strips
                    .iter()
                    .map(|(marquee, gap)| MarqueeStrip::new(marquee.clone(), *gap))
                    .collect();
                self.stack = Some(StackSection::new(strips));
                self.keymap
                    .install(BindingOwner::Stack(generation), STACK_BINDINGS);
            }
        }
        self.section = section;
        self.clock.reset();
        tracing::info!(?section, generation, "Mounted section");
    }

    fn unmount(&mut self, section: Section) {
        let generation = self.generation;
        let removed = match section {
            Section::Work => {
                self.work = None;
                self.keymap.remove(BindingOwner::Carousel(generation))
            }
            Section::Stack => {
                self.stack = None;
                self.keymap.remove(BindingOwner::Stack(generation))
            }
        };
        tracing::info!(?section, generation, removed, "Unmounted section");
    }

    pub fn switch_section(&mut self) {
        let current = self.section;
        self.unmount(current);
        self.mount(current.toggled());
    }

    pub fn handle_key(&mut self, key: Key) {
        let Some(action) = self.keymap.resolve(key) else {
            return;
        };
        match action {
            Action::Previous => {
                if let Some(work) = self.work.as_mut() {
                    work.previous();
                }
            }
            Action::Next => {
                if let Some(work) = self.work.as_mut() {
                    work.next();
                }
            }
            Action::TogglePause => {
                if let Some(stack) = self.stack.as_mut() {
                    stack.toggle_pause();
                }
            }
            Action::ToggleSection => self.switch_section(),
            Action::Quit => self.quit = true,
        }
    }

    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        if let Some(stack) = self.stack.as_mut() {
            stack.pointer_at(column, row);
        }
        if let Some(work) = self.work.as_mut() {
            let hovered = match work.target_at(column, row) {
                Some(WorkTarget::ListEntry(i)) => {
                    work.carousel().items().get(i).map(|item| item.id.clone())
                }
                _ => None,
            };
            work.set_hovered(hovered.as_ref());
        }
    }

    pub fn pointer_clicked(&mut self, column: u16, row: u16) {
        let Some(work) = self.work.as_mut() else {
            return;
        };
        match work.target_at(column, row) {
            Some(WorkTarget::ListEntry(i) | WorkTarget::Dot(i)) => {
                work.jump_to(i);
            }
            Some(WorkTarget::Previous) => work.previous(),
            Some(WorkTarget::Next) => work.next(),
            None => {}
        }
    }

    /// Pointer left the terminal (focus lost).
    pub fn pointer_left(&mut self) {
        if let Some(stack) = self.stack.as_mut() {
            stack.pointer_left();
        }
        if let Some(work) = self.work.as_mut() {
            work.set_hovered(None);
        }
    }

    /// Drop every pointer region recorded by the previous frame.
    ///
    /// The renderer calls this before drawing, so only what is on screen
    /// now can be hovered or clicked.
    pub fn clear_hit_regions(&mut self) {
        if let Some(stack) = self.stack.as_mut() {
            stack.clear_regions();
        }
        if let Some(work) = self.work.as_mut() {
            work.clear_hits();
        }
    }

    /// Advance by the wall time since the previous frame.
    pub fn tick(&mut self) {
        let delta = self.clock.elapsed();
        self.advance(delta);
    }

    /// Advance mounted components by an explicit frame interval.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(stack) = self.stack.as_mut() {
            stack.advance(delta);
        }
        if let Some(work) = self.work.as_mut() {
            work.advance(delta);
        }
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn work(&self) -> Option<&WorkSection> {
        self.work.as_ref()
    }

    pub fn work_mut(&mut self) -> Option<&mut WorkSection> {
        self.work.as_mut()
    }

    #[must_use]
    pub fn stack(&self) -> Option<&StackSection> {
        self.stack.as_ref()
    }

    pub fn stack_mut(&mut self) -> Option<&mut StackSection> {
        self.stack.as_mut()
    }

    #[must_use]
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
