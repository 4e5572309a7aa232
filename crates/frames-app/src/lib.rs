#![allow(non_snake_case)]
//! The Frames application: a themed landing flow on top of the frames-*
//! crates.
//!
//! The composition entry point is [`render`], a pure function of the theme
//! mode and a navigator. [`app`] is the store-driven variant used by the
//! binary, which asks a [`ThemeProvider`] for the current mode first.

pub mod screens;

use std::rc::Rc;

use frames_core::View;
use frames_navigation::Navigator;
use frames_theme::{ThemeMode, ThemeProvider, resolve_palette, with_palette};

use crate::screens::landing::LandingScreen;

/// Compose the landing view for `mode`.
///
/// Total over both modes: the palette lookup cannot fail and the layout is
/// fixed, so equal inputs compose equal trees.
pub fn render(mode: ThemeMode, nav: Rc<dyn Navigator>) -> View {
    with_palette(*resolve_palette(mode), || LandingScreen(nav))
}

/// Compose the landing view for whatever mode `provider` currently reports.
pub fn app(provider: &dyn ThemeProvider, nav: Rc<dyn Navigator>) -> View {
    render(provider.current_mode(), nav)
}
