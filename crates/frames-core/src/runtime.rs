use std::rc::Rc;

use crate::{Rect, Scene, Vec2, View, semantics::Role};

/// Frame — output of composition for a tick: scene + input/semantics.
pub struct Frame {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
    pub focus_chain: Vec<u64>,
}

impl Frame {
    /// Topmost hit region under `p`.
    ///
    /// `hit_regions` are sorted ascending by z-index, so the first match when
    /// scanning from the back is the visually topmost one.
    pub fn hit_test(&self, p: Vec2) -> Option<&HitRegion> {
        self.hit_regions.iter().rev().find(|h| h.rect.contains(p))
    }

    /// Dispatch a tap at `p` to the topmost hit region's press handler.
    ///
    /// Returns whether a handler ran. Fire-and-forget: no result from the
    /// handler is awaited or propagated.
    pub fn tap(&self, p: Vec2) -> bool {
        if let Some(hit) = self.hit_test(p) {
            if let Some(on_press) = &hit.on_press {
                log::debug!("tap at ({:.1}, {:.1}) -> view {}", p.x, p.y, hit.id);
                on_press();
                return true;
            }
        }
        false
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: u64,
    pub rect: Rect,
    pub on_press: Option<Rc<dyn Fn()>>,
    pub focusable: bool,
    pub z_index: f32,
}

/// Flattened semantics node produced by `layout_and_paint`.
///
/// This is the source of truth for accessibility backends: it contains the
/// resolved screen rect, role, label, and focus/enabled state.
#[derive(Clone)]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub rect: Rect,
    pub focused: bool,
    pub enabled: bool,
}

pub struct Scheduler {
    pub focused: Option<u64>,
    pub size: (u32, u32),
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            focused: None,
            size: (390, 844),
        }
    }

    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        layout_paint: impl Fn(&View, (u32, u32)) -> (Scene, Vec<HitRegion>, Vec<SemNode>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let root = build_root(self);
        let (scene, hits, sem) = layout_paint(&root, self.size);

        let focus_chain: Vec<u64> = hits.iter().filter(|h| h.focusable).map(|h| h.id).collect();

        Frame {
            scene,
            hit_regions: hits,
            semantics_nodes: sem,
            focus_chain,
        }
    }
}
