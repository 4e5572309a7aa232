//! # Theme palettes
//!
//! A static registry mapping `ThemeMode` to a fixed `Palette` of named color
//! roles. Both palettes are built once and live for the process lifetime;
//! `resolve_palette` is a pure lookup with no failure path.
//!
//! Widgets read the active palette through a composition local rather than
//! taking it as a parameter:
//!
//! ```rust
//! use frames_theme::*;
//!
//! let p = resolve_palette(ThemeMode::Light);
//! with_palette(*p, || {
//!     assert_eq!(palette().text, p.text);
//! });
//! ```
//!
//! Who decides the mode is a separate concern: anything implementing
//! `ThemeProvider` can drive it. `ThemeStore` is the signal-backed provider a
//! real app uses; `ThemeMode` implements the trait too, which makes a fixed
//! mode trivial to inject in tests.

use std::str::FromStr;
use std::sync::LazyLock;

use frames_core::{Color, GradientStops, Signal, SubId, local, signal, with_local};
use serde::{Deserialize, Serialize};

mod error;

pub use error::ConfigurationError;

/// Light/dark display preference. Consumed, not owned: the source of truth
/// is an external [`ThemeProvider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ConfigurationError;

    /// Parse a mode from configuration input, case-insensitively.
    ///
    /// Anything other than `light`/`dark` is rejected up front so a typo in
    /// an environment variable cannot silently render with the wrong colors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ConfigurationError::UnknownThemeMode(s.trim().to_string())),
        }
    }
}

/// Complete named-color-role record for one `ThemeMode`.
///
/// Every role is present by construction; there is no such thing as a
/// partial palette. Consumers must treat instances as read-only —
/// [`resolve_palette`] hands out `&'static` references to enforce that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Accent for interactive elements and highlighted text spans.
    pub primary: Color,
    pub secondary: Color,
    /// App root background.
    pub background: Color,
    /// Cards, sheets, and raised controls.
    pub surface: Color,
    /// Default foreground for titles and body copy.
    pub text: Color,
    /// Lower-emphasis foreground (subtitles, captions).
    pub text_secondary: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,

    /// Screen background gradient, top to bottom.
    pub background_gradient: GradientStops,
    /// Fill for the primary call-to-action; identical in both modes.
    pub cta_gradient: GradientStops,
}

static LIGHT: LazyLock<Palette> = LazyLock::new(|| Palette {
    primary: Color::from_hex("#005fa4ff"),
    secondary: Color::from_hex("#0b0286ff"),
    background: Color::from_hex("#F5F5F5"),
    surface: Color::from_hex("#FFFFFF"),
    text: Color::from_hex("#1A1A1A"),
    text_secondary: Color::from_hex("#666666"),
    border: Color::from_hex("#E0E0E0"),
    error: Color::from_hex("#FF5252"),
    success: Color::from_hex("#0c0e31ff"),
    background_gradient: GradientStops::new(
        Color::from_hex("#F5F5F5"),
        Color::from_hex("#FFFFFF"),
    ),
    cta_gradient: GradientStops::new(
        Color::from_hex("#005fa4ff"),
        Color::from_hex("#0b0286ff"),
    ),
});

static DARK: LazyLock<Palette> = LazyLock::new(|| Palette {
    primary: Color::from_hex("#005fa4ff"),
    secondary: Color::from_hex("#0b0286ff"),
    background: Color::from_hex("#1A1A1A"),
    surface: Color::from_hex("#2A2A2A"),
    text: Color::from_hex("#FFFFFF"),
    text_secondary: Color::from_hex("#B0B0B0"),
    border: Color::from_hex("#3A3A3A"),
    error: Color::from_hex("#FF5252"),
    success: Color::from_hex("#0c0e31ff"),
    background_gradient: GradientStops::new(
        Color::from_hex("#1A1A1A"),
        Color::from_hex("#2A2A2A"),
    ),
    cta_gradient: GradientStops::new(
        Color::from_hex("#005fa4ff"),
        Color::from_hex("#0b0286ff"),
    ),
});

/// The palette for `mode`.
///
/// Total over the enum, pure, and side-effect free: the same mode always
/// yields the same `&'static` record. Safe for unsynchronized concurrent
/// reads.
pub fn resolve_palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

/// Make `palette` the ambient palette for the duration of `f`.
///
/// The app root wraps its screen composition in this after resolving the
/// current mode; widgets below read it via [`palette`].
pub fn with_palette<R>(palette: Palette, f: impl FnOnce() -> R) -> R {
    with_local(palette, f)
}

/// The ambient palette, falling back to the registry's dark palette when
/// composing outside a [`with_palette`] scope.
pub fn palette() -> Palette {
    local::<Palette>().unwrap_or_else(|| *resolve_palette(ThemeMode::Dark))
}

/// Capability for reading the current theme mode.
///
/// Injecting this (instead of reaching for a global store) keeps view
/// composition a pure function of its inputs.
pub trait ThemeProvider {
    fn current_mode(&self) -> ThemeMode;
}

/// A fixed mode is its own provider. Handy for tests and previews.
impl ThemeProvider for ThemeMode {
    fn current_mode(&self) -> ThemeMode {
        *self
    }
}

/// Signal-backed theme source: the external store the app consumes.
///
/// Holds a single `is_dark` flag; the mode is derived from it. Cloning
/// shares the underlying signal.
#[derive(Clone)]
pub struct ThemeStore {
    is_dark: Signal<bool>,
}

impl ThemeStore {
    pub fn new(is_dark: bool) -> Self {
        Self {
            is_dark: signal(is_dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn set_dark(&self, dark: bool) {
        log::debug!("theme store: dark={dark}");
        self.is_dark.set(dark);
    }

    pub fn toggle(&self) {
        self.set_dark(!self.is_dark.get());
    }

    /// Observe flag changes (e.g. to trigger recomposition).
    pub fn subscribe(&self, f: impl Fn(&bool) + 'static) -> SubId {
        self.is_dark.subscribe(f)
    }
}

impl ThemeProvider for ThemeStore {
    fn current_mode(&self) -> ThemeMode {
        if self.is_dark.get() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}
