//! Decorative avatar badges.

use frames_core::*;

use crate::{Box, Stack, Text, TextStyle, ViewExt};

/// Badge size tier. Determines diameter, glyph size, and stacking order:
/// larger badges sit above smaller ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub fn diameter_dp(self) -> f32 {
        match self {
            SizeClass::Small => 60.0,
            SizeClass::Medium => 80.0,
            SizeClass::Large => 140.0,
        }
    }

    pub fn glyph_dp(self) -> f32 {
        match self {
            SizeClass::Small => 24.0,
            SizeClass::Medium => 32.0,
            SizeClass::Large => 56.0,
        }
    }

    pub fn z_index(self) -> f32 {
        match self {
            SizeClass::Small => 2.0,
            SizeClass::Medium => 3.0,
            SizeClass::Large => 5.0,
        }
    }
}

/// Placement within the cluster, as edge insets in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    TopLeft { top: f32, left: f32 },
    TopRight { top: f32, right: f32 },
    BottomLeft { bottom: f32, left: f32 },
    BottomRight { bottom: f32, right: f32 },
    Center,
}

impl Anchor {
    /// (left, top, right, bottom) insets; axes left `None` are resolved by
    /// the container's centering (all four for `Center`).
    fn insets(self) -> (Option<f32>, Option<f32>, Option<f32>, Option<f32>) {
        match self {
            Anchor::TopLeft { top, left } => (Some(left), Some(top), None, None),
            Anchor::TopRight { top, right } => (None, Some(top), Some(right), None),
            Anchor::BottomLeft { bottom, left } => (Some(left), None, None, Some(bottom)),
            Anchor::BottomRight { bottom, right } => (None, None, Some(right), Some(bottom)),
            Anchor::Center => (None, None, None, None),
        }
    }
}

/// One decorative badge: a circular gradient chip holding a single glyph.
#[derive(Clone, Copy, Debug)]
pub struct AvatarBadge {
    pub size: SizeClass,
    pub anchor: Anchor,
    pub gradient: GradientStops,
    pub glyph: char,
}

impl AvatarBadge {
    /// Stacking order comes from the size tier, never from declaration order.
    pub fn z_index(&self) -> f32 {
        self.size.z_index()
    }
}

/// Overlay of decorative badges, painted in ascending z-index.
pub fn AvatarCluster(modifier: Modifier, badges: &[AvatarBadge]) -> View {
    Stack(modifier).child(badges.iter().map(Badge).collect::<Vec<_>>())
}

fn Badge(b: &AvatarBadge) -> View {
    let d = b.size.diameter_dp();
    let (left, top, right, bottom) = b.anchor.insets();
    Box(Modifier::new()
        .absolute()
        .offset(left, top, right, bottom)
        .size(d, d)
        .clip_rounded(d / 2.0)
        .background_brush(b.gradient.vertical())
        .z_index(b.z_index())
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .child(
        Text(b.glyph.to_string())
            .size(b.size.glyph_dp())
            .color(Color::WHITE),
    )
}
