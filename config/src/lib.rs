//! Configuration for Folio.
//!
//! The user file (`~/.folio/config.toml`, or `$FOLIO_CONFIG`) is layered over
//! a built-in showcase: every top-level section the user provides replaces
//! the built-in one wholesale.
//!
//! ```toml
//! [ui]
//! reduced_motion = true
//!
//! [[marquee]]
//! units = ["Rust", "Tokio", "ratatui"]
//! speed = 30.0
//! direction = "right"
//! ```

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use folio_types::ui::{Section, UiOptions};
use folio_types::{
    Carousel, CarouselError, DisplayItem, MarqueeContent, MarqueeError, SameSlotPolicy,
    ScrollDirection,
};

const SHOWCASE_RAW: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/showcase.toml"));

const DEFAULT_MAX_FRAME_DELTA_MS: u64 = 250;
const DEFAULT_TRANSITION_MS: u64 = 500;
const DEFAULT_REPEAT: usize = 2;
const DEFAULT_GAP: usize = 4;

pub(crate) const fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("built-in showcase is malformed: {0}")]
    Builtin(toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationError),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Builtin(_) | ConfigError::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("`items` must contain at least one entry")]
    NoItems(#[source] CarouselError),
    #[error(transparent)]
    Items(CarouselError),
    #[error("`marquee` must contain at least one strip")]
    NoStrips,
    #[error("marquee #{index}: {source}")]
    Strip { index: usize, source: MarqueeError },
    #[error("marquee #{index}: unit {unit} is blank")]
    BlankUnit { index: usize, unit: usize },
    #[error("marquee #{index}: repeat must be at least 1")]
    ZeroRepeat { index: usize },
    #[error("`ui.max_frame_delta_ms` must be positive")]
    ZeroFrameDelta,
}

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub ui: Option<UiConfig>,
    pub carousel: Option<CarouselConfig>,
    pub stack: Option<StackConfig>,
    pub marquee: Option<Vec<MarqueeConfig>>,
    pub items: Option<Vec<DisplayItem>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Use ASCII-only glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Snap the stage instead of animating slides.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Capture the pointer for hover and click.
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Upper bound on the elapsed time fed into a single frame.
    pub max_frame_delta_ms: Option<u64>,
    pub start_section: Option<Section>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub same_slot: SameSlotPolicy,
    pub transition_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StackConfig {
    /// Flip the direction of every strip.
    #[serde(default)]
    pub reversed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarqueeConfig {
    pub units: Vec<String>,
    /// Cells per second.
    pub speed: f64,
    #[serde(default)]
    pub direction: ScrollDirection,
    /// How many times the unit sequence is laid out before the strip doubles it.
    pub repeat: Option<usize>,
    /// Blank cells after each unit.
    pub gap: Option<usize>,
}

/// A validated marquee strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripSpec {
    pub units: Vec<String>,
    pub speed: f64,
    pub direction: ScrollDirection,
    pub repeat: usize,
    pub gap: usize,
}

impl StripSpec {
    /// Units repeated `repeat` times, in order.
    #[must_use]
    pub fn content(&self) -> Vec<MarqueeContent> {
        (0..self.repeat)
            .flat_map(|_| self.units.iter().map(MarqueeContent::new))
            .collect()
    }
}

/// Fully resolved and validated settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub ui: UiOptions,
    pub max_frame_delta: Duration,
    pub start_section: Section,
    pub same_slot: SameSlotPolicy,
    pub transition: Duration,
    pub strips: Vec<StripSpec>,
    pub items: Vec<DisplayItem>,
}

impl FolioConfig {
    /// Load the user config. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using built-in showcase");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    fn builtin() -> Result<Self, ConfigError> {
        toml::from_str(SHOWCASE_RAW).map_err(ConfigError::Builtin)
    }

    /// Layer `self` over the built-in showcase and validate the result.
    pub fn resolve(self) -> Result<Settings, ConfigError> {
        let builtin = Self::builtin()?;
        let merged = Self {
            ui: self.ui.or(builtin.ui),
            carousel: self.carousel.or(builtin.carousel),
            stack: self.stack.or(builtin.stack),
            marquee: self.marquee.or(builtin.marquee),
            items: self.items.or(builtin.items),
        };
        Ok(merged.validate()?)
    }

    fn validate(self) -> Result<Settings, ValidationError> {
        let ui = self.ui.unwrap_or_default();
        let carousel = self.carousel.unwrap_or_default();
        let reversed = self.stack.is_some_and(|stack| stack.reversed);

        let max_frame_delta_ms = ui.max_frame_delta_ms.unwrap_or(DEFAULT_MAX_FRAME_DELTA_MS);
        if max_frame_delta_ms == 0 {
            return Err(ValidationError::ZeroFrameDelta);
        }

        let items = self.items.unwrap_or_default();
        validate_items(&items)?;

        let strips = self
            .marquee
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, strip)| strip_spec(index, strip, reversed))
            .collect::<Result<Vec<_>, _>>()?;
        if strips.is_empty() {
            return Err(ValidationError::NoStrips);
        }

        Ok(Settings {
            ui: UiOptions {
                ascii_only: ui.ascii_only,
                high_contrast: ui.high_contrast,
                reduced_motion: ui.reduced_motion,
                mouse: ui.mouse,
            },
            max_frame_delta: Duration::from_millis(max_frame_delta_ms),
            start_section: ui.start_section.unwrap_or_default(),
            same_slot: carousel.same_slot,
            transition: Duration::from_millis(
                carousel.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            ),
            strips,
            items,
        })
    }
}

impl Settings {
    /// Settings for when the user has no config file.
    pub fn builtin() -> Result<Self, ConfigError> {
        FolioConfig::default().resolve()
    }
}

/// Item checks are the carousel's own; a config that resolves always mounts.
fn validate_items(items: &[DisplayItem]) -> Result<(), ValidationError> {
    Carousel::new(items.to_vec())
        .map(drop)
        .map_err(|err| match err {
            CarouselError::Empty => ValidationError::NoItems(err),
            CarouselError::DuplicateId(_) => ValidationError::Items(err),
        })
}

fn strip_spec(
    index: usize,
    strip: MarqueeConfig,
    reversed: bool,
) -> Result<StripSpec, ValidationError> {
    if strip.units.is_empty() {
        return Err(ValidationError::Strip {
            index,
            source: MarqueeError::EmptyContent,
        });
    }
    if let Some(unit) = strip.units.iter().position(|u| u.trim().is_empty()) {
        return Err(ValidationError::BlankUnit { index, unit });
    }
    if !(strip.speed.is_finite() && strip.speed >= 0.0) {
        return Err(ValidationError::Strip {
            index,
            source: MarqueeError::InvalidSpeed(strip.speed),
        });
    }
    let repeat = strip.repeat.unwrap_or(DEFAULT_REPEAT);
    if repeat == 0 {
        return Err(ValidationError::ZeroRepeat { index });
    }
    let direction = if reversed {
        strip.direction.reversed()
    } else {
        strip.direction
    };
    Ok(StripSpec {
        units: strip.units,
        speed: strip.speed,
        direction,
        repeat,
        gap: strip.gap.unwrap_or(DEFAULT_GAP),
    })
}

/// `$FOLIO_CONFIG` verbatim, else `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var("FOLIO_CONFIG")
        && !explicit.trim().is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
