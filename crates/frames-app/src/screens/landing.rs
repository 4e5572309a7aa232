//! Welcome screen: badge cluster, title block, and the two entry actions.

use std::rc::Rc;
use std::sync::LazyLock;

use frames_core::*;
use frames_navigation::{Navigator, Route};
use frames_theme::palette;
use frames_ui::*;

/// The five decorative badges, in declaration order. Paint order comes from
/// each size tier's z-index, not from this order.
pub static BADGES: LazyLock<[AvatarBadge; 5]> = LazyLock::new(|| {
    [
        AvatarBadge {
            size: SizeClass::Large,
            anchor: Anchor::Center,
            gradient: GradientStops::new(
                Color::from_hex("#0b0286ff"),
                Color::from_hex("#005fa4ff"),
            ),
            glyph: 'F',
        },
        AvatarBadge {
            size: SizeClass::Small,
            anchor: Anchor::TopLeft {
                top: 20.0,
                left: 20.0,
            },
            gradient: GradientStops::new(
                Color::from_hex("#0c0e31ff"),
                Color::from_hex("#000babff"),
            ),
            glyph: 'R',
        },
        AvatarBadge {
            size: SizeClass::Small,
            anchor: Anchor::TopRight {
                top: 30.0,
                right: 30.0,
            },
            gradient: GradientStops::new(
                Color::from_hex("#085400ff"),
                Color::from_hex("#00811eff"),
            ),
            glyph: 'A',
        },
        AvatarBadge {
            size: SizeClass::Medium,
            anchor: Anchor::BottomLeft {
                bottom: 20.0,
                left: 40.0,
            },
            gradient: GradientStops::new(
                Color::from_hex("#4b0202ff"),
                Color::from_hex("#f80909ff"),
            ),
            glyph: 'M',
        },
        AvatarBadge {
            size: SizeClass::Medium,
            anchor: Anchor::BottomRight {
                bottom: 30.0,
                right: 20.0,
            },
            gradient: GradientStops::new(
                Color::from_hex("#310132ff"),
                Color::from_hex("#ff00b3ff"),
            ),
            glyph: 'E',
        },
    ]
});

pub fn LandingScreen(nav: Rc<dyn Navigator>) -> View {
    Surface(
        Modifier::new()
            .fill_max_size()
            .background_brush(palette().background_gradient.vertical()),
        Column(
            Modifier::new()
                .fill_max_size()
                .justify_content(JustifyContent::SpaceBetween)
                .padding_values(PaddingValues {
                    left: 24.0,
                    right: 24.0,
                    top: 80.0,
                    bottom: 60.0,
                }),
        )
        .child((
            AvatarCluster(Modifier::new().fill_max_width().height(300.0), &*BADGES),
            TitleBlock(),
            ActionBlock(nav),
        )),
    )
}

fn TitleBlock() -> View {
    Column(Modifier::new().align_items(AlignItems::Center).gap(16.0)).child((
        // Title color falls through to the palette's text role at paint time.
        Text("Share Your Moments").size(32.0),
        Text("Connect with friends and share your creative frames with the world")
            .size(16.0)
            .color(palette().text_secondary)
            .soft_wrap()
            .modifier(Modifier::new().padding_values(PaddingValues {
                left: 20.0,
                right: 20.0,
                ..Default::default()
            })),
    ))
}

fn ActionBlock(nav: Rc<dyn Navigator>) -> View {
    Column(Modifier::new().gap(16.0)).child((
        Button(
            Modifier::new()
                .fill_max_width()
                .padding(18.0)
                .clip_rounded(16.0)
                .background_brush(palette().cta_gradient.diagonal()),
            {
                let nav = nav.clone();
                move || nav.navigate_to(Route::SignUp)
            },
        )
        .child(Text("Get Started →").size(18.0).color(Color::WHITE)),
        Button(
            Modifier::new()
                .fill_max_width()
                .padding(18.0)
                .clip_rounded(16.0)
                .background(palette().surface),
            {
                let nav = nav.clone();
                move || nav.navigate_to(Route::SignIn)
            },
        )
        .child(Row(Modifier::new()).child((
            Text("Already have an account? ")
                .size(15.0)
                .color(palette().text),
            Text("Sign in").size(15.0).color(palette().primary),
        ))),
    ))
}
