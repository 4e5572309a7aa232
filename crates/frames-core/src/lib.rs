//! # Frames core
//!
//! The building blocks shared by every Frames crate:
//!
//! - `View` / `ViewKind` / `Modifier` — the declarative view tree.
//! - `Scene` / `SceneNode` — the flat paint list a renderer consumes.
//! - `Signal<T>` — observable, reactive value.
//! - composition locals — ambient scoped values (`Density`, and through
//!   `frames-theme`, the active palette).
//! - `Scheduler` / `Frame` — one compose tick: build the tree, lay it out,
//!   collect hit regions and semantics.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use frames_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! External stores (theme, navigation) expose their state as signals so a
//! platform loop can subscribe and recompose when anything changes.

pub mod color;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod semantics;
pub mod signal;
pub mod view;

pub use color::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
