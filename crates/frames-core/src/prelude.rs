pub use crate::color::{Brush, Color, GradientStops, LinearGradient};
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::locals::{Density, Dp, density, dp_to_px, local, with_density, with_local};
pub use crate::modifier::{Modifier, PaddingValues};
pub use crate::runtime::{Frame, HitRegion, Scheduler, SemNode};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Callback, Scene, SceneNode, View, ViewId, ViewKind};
pub use taffy::{AlignItems, AlignSelf, JustifyContent};
