#![allow(non_snake_case)]
//! Widgets, layout and painting.

pub mod avatar;
pub mod tests;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

use frames_core::*;
use frames_theme::{Palette, ThemeMode, resolve_palette, with_palette};
use taffy::style::Style;

pub use avatar::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

/// Overlay container: children occupy the same box, centered by default,
/// and paint in ascending z-index order.
pub fn Stack(modifier: Modifier) -> View {
    View::new(0, ViewKind::Stack).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: None, // resolved from the palette at paint time
            font_size: 16.0, // dp (converted to px in layout/paint)
            soft_wrap: false,
        },
    )
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

/// Pressable container. Content goes in via [`ViewExt::child`]; with no
/// explicit background it paints with the palette's primary color.
pub fn Button(modifier: Modifier, on_press: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            on_press: Some(Rc::new(on_press)),
        },
    )
    .modifier(modifier)
    .semantics(Semantics {
        role: Role::Button,
        label: None,
        focused: false,
        enabled: true,
    })
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

fn style_from_modifier(m: &Modifier, kind: &ViewKind, px: &dyn Fn(f32) -> f32) -> Style {
    use taffy::prelude::*;
    let mut s = Style::default();

    s.display = Display::Flex;

    // Flex direction
    if matches!(
        kind,
        ViewKind::Column | ViewKind::Surface | ViewKind::Button { .. }
    ) {
        s.flex_direction = FlexDirection::Column;
    }

    // Defaults: linear containers stretch children on the cross axis;
    // Stack and Button center their content.
    s.align_items = match kind {
        ViewKind::Row | ViewKind::Column | ViewKind::Surface => Some(AlignItems::Stretch),
        ViewKind::Stack | ViewKind::Button { .. } => Some(AlignItems::Center),
        _ => Some(AlignItems::FlexStart),
    };
    s.justify_content = match kind {
        ViewKind::Stack | ViewKind::Button { .. } => Some(JustifyContent::Center),
        _ => Some(JustifyContent::FlexStart),
    };

    // Flex props
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
    }
    if let Some(a) = m.align_self {
        s.align_self = Some(a);
    }

    // Container overrides
    if let Some(j) = m.justify_content {
        s.justify_content = Some(j);
    }
    if let Some(a) = m.align_items_container {
        s.align_items = Some(a);
    }

    // Absolute positioning (convert insets from dp to px)
    if let Some(PositionType::Absolute) = m.position_type {
        s.position = Position::Absolute;
        s.inset = taffy::geometry::Rect {
            left: m.offset_left.map(|v| length(px(v))).unwrap_or_else(auto),
            right: m.offset_right.map(|v| length(px(v))).unwrap_or_else(auto),
            top: m.offset_top.map(|v| length(px(v))).unwrap_or_else(auto),
            bottom: m.offset_bottom.map(|v| length(px(v))).unwrap_or_else(auto),
        };
    }

    // Padding (content box). With axis-aware fill below, padding stays inside
    // the allocated box.
    if let Some(pv_dp) = m.padding_values {
        s.padding = taffy::geometry::Rect {
            left: length(px(pv_dp.left)),
            right: length(px(pv_dp.right)),
            top: length(px(pv_dp.top)),
            bottom: length(px(pv_dp.bottom)),
        };
    } else if let Some(p_dp) = m.padding {
        let v = length(px(p_dp));
        s.padding = taffy::geometry::Rect {
            left: v,
            right: v,
            top: v,
            bottom: v,
        };
    }

    // Gap between children, both axes
    if let Some(g_dp) = m.gap {
        let v = length(px(g_dp));
        s.gap = Size {
            width: v,
            height: v,
        };
    }

    // Explicit size — highest priority
    let mut width_set = false;
    let mut height_set = false;
    if let Some(sz_dp) = m.size {
        if sz_dp.width.is_finite() {
            s.size.width = length(px(sz_dp.width.max(0.0)));
            width_set = true;
        }
        if sz_dp.height.is_finite() {
            s.size.height = length(px(sz_dp.height.max(0.0)));
            height_set = true;
        }
    }
    if let Some(w_dp) = m.width {
        s.size.width = length(px(w_dp.max(0.0)));
        width_set = true;
    }
    if let Some(h_dp) = m.height {
        s.size.height = length(px(h_dp.max(0.0)));
        height_set = true;
    }

    // Axis-aware fill
    let is_column = matches!(
        kind,
        ViewKind::Column | ViewKind::Surface | ViewKind::Button { .. }
    );
    let is_overlay = matches!(kind, ViewKind::Stack);

    let want_fill_w = m.fill_max || m.fill_max_w;
    let want_fill_h = m.fill_max || m.fill_max_h;

    // Overlays fill tight on both axes; otherwise main axis fill -> weight
    // (flex: 1 1 0%), cross axis fill -> tight (min==max==100%)
    if is_overlay {
        if want_fill_w && !width_set {
            s.min_size.width = percent(1.0);
            s.max_size.width = percent(1.0);
        }
        if want_fill_h && !height_set {
            s.min_size.height = percent(1.0);
            s.max_size.height = percent(1.0);
        }
    } else if is_column {
        // main axis = vertical
        if want_fill_h && !height_set {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_shrink = s.flex_shrink.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.height = length(0.0); // allow shrinking, avoid min-content expansion
        }
        if want_fill_w && !width_set {
            s.min_size.width = percent(1.0);
            s.max_size.width = percent(1.0);
        }
    } else {
        // main axis = horizontal (Row, Box)
        if want_fill_w && !width_set {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_shrink = s.flex_shrink.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.width = length(0.0);
        }
        if want_fill_h && !height_set {
            s.min_size.height = percent(1.0);
            s.max_size.height = percent(1.0);
        }
    }

    s
}

/// Greedy word wrap using the per-glyph width estimate from measurement.
/// A word longer than the wrap width gets its own line and overflows it.
fn wrap_text(text: &str, glyph_w_px: f32, max_w_px: f32) -> Vec<String> {
    let max_chars = if max_w_px.is_finite() && glyph_w_px > 0.0 {
        (max_w_px / glyph_w_px).floor().max(1.0) as usize
    } else {
        usize::MAX
    };

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;
    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if line_chars > 0 && line_chars + 1 + word_chars > max_chars {
            lines.push(std::mem::take(&mut line));
            line_chars = 0;
        }
        if line_chars > 0 {
            line.push(' ');
            line_chars += 1;
        }
        line.push_str(word);
        line_chars += word_chars;
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Effective paint color for a text run: the explicit override when set,
/// the palette's default text role otherwise.
pub fn resolve_text_color(explicit: Option<Color>, palette: &Palette) -> Color {
    explicit.unwrap_or(palette.text)
}

/// Concatenated text content of a subtree, used for semantics labels.
fn collect_text(v: &View) -> Option<String> {
    fn push_text(v: &View, out: &mut String) {
        if let ViewKind::Text { text, .. } = &v.kind {
            if !out.is_empty() && !out.ends_with(' ') && !text.starts_with(' ') {
                out.push(' ');
            }
            out.push_str(text);
        }
        for c in &v.children {
            push_text(c, out);
        }
    }
    let mut out = String::new();
    push_text(v, &mut out);
    if out.is_empty() { None } else { Some(out) }
}

/// Layout and paint a composed tree into a flat scene (Taffy 0.9 API).
///
/// Pure with respect to its inputs: the same tree, window size, focus and
/// palette always produce the same scene, hit regions and semantics.
pub fn layout_and_paint(
    root: &View,
    size_px_u32: (u32, u32),
    focused: Option<u64>,
    palette: &Palette,
) -> (Scene, Vec<HitRegion>, Vec<SemNode>) {
    // font dp -> px using current Density
    let font_px = |dp_font: f32| dp_to_px(dp_font);

    // Assign ids
    let mut id = 1u64;
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let root = stamp(root.clone(), &mut id);

    // Build Taffy tree (with per-node contexts for measurement)
    use taffy::prelude::*;
    #[derive(Clone)]
    enum NodeCtx {
        Text {
            text: String,
            font_dp: f32, // logical size (dp)
            soft_wrap: bool,
        },
        Container,
    }

    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    let mut nodes_map = HashMap::new();

    #[derive(Clone)]
    struct TextLayout {
        lines: Vec<String>,
        size_px: f32,
        line_h_px: f32,
    }
    let mut text_cache: HashMap<taffy::NodeId, TextLayout> = HashMap::new();

    fn build_node(
        v: &View,
        t: &mut TaffyTree<NodeCtx>,
        nodes_map: &mut HashMap<ViewId, taffy::NodeId>,
    ) -> taffy::NodeId {
        // Nested fns cannot capture; re-derive the px helper here.
        let px_helper = |dp_val: f32| dp_to_px(dp_val);

        let style = style_from_modifier(&v.modifier, &v.kind, &px_helper);

        let children: Vec<_> = v
            .children
            .iter()
            .map(|c| build_node(c, t, nodes_map))
            .collect();

        let node = match &v.kind {
            ViewKind::Text {
                text,
                font_size: font_dp,
                soft_wrap,
                ..
            } => t
                .new_leaf_with_context(
                    style,
                    NodeCtx::Text {
                        text: text.clone(),
                        font_dp: *font_dp,
                        soft_wrap: *soft_wrap,
                    },
                )
                .unwrap(),
            _ => {
                let n = t.new_with_children(style, &children).unwrap();
                t.set_node_context(n, Some(NodeCtx::Container)).ok();
                n
            }
        };

        nodes_map.insert(v.id, node);
        node
    }

    let root_node = build_node(&root, &mut taffy, &mut nodes_map);

    {
        let mut rs = taffy.style(root_node).unwrap().clone();
        rs.size.width = length(size_px_u32.0 as f32);
        rs.size.height = length(size_px_u32.1 as f32);
        taffy.set_style(root_node, rs).unwrap();
    }

    let available = taffy::geometry::Size {
        width: AvailableSpace::Definite(size_px_u32.0 as f32),
        height: AvailableSpace::Definite(size_px_u32.1 as f32),
    };

    // Measure function for intrinsic content
    taffy
        .compute_layout_with_measure(root_node, available, |known, avail, node, ctx, _style| {
            match ctx {
                Some(NodeCtx::Text {
                    text,
                    font_dp,
                    soft_wrap,
                }) => {
                    let size_px_val = font_px(*font_dp);
                    let line_h_px_val = size_px_val * 1.3;
                    let glyph_w_px = size_px_val * 0.6; // rough estimate (glyph-width-ish)

                    // Wrap width in px if soft wrap enabled
                    let lines_vec: Vec<String> = if *soft_wrap {
                        let wrap_w_px = known.width.unwrap_or(match avail.width {
                            AvailableSpace::Definite(w) => w,
                            _ => f32::INFINITY,
                        });
                        wrap_text(text, glyph_w_px, wrap_w_px)
                    } else {
                        vec![text.clone()]
                    };

                    let n_lines = lines_vec.len().max(1);
                    let longest = lines_vec
                        .iter()
                        .map(|l| l.chars().count())
                        .max()
                        .unwrap_or(0);
                    let measured_w_px = known.width.unwrap_or(longest as f32 * glyph_w_px);

                    text_cache.insert(
                        node,
                        TextLayout {
                            lines: lines_vec,
                            size_px: size_px_val,
                            line_h_px: line_h_px_val,
                        },
                    );

                    taffy::geometry::Size {
                        width: measured_w_px,
                        height: line_h_px_val * n_lines as f32,
                    }
                }
                Some(NodeCtx::Container) | None => taffy::geometry::Size::ZERO,
            }
        })
        .unwrap();

    log::trace!(
        "laid out {} views at {}x{} px",
        nodes_map.len(),
        size_px_u32.0,
        size_px_u32.1
    );

    // taffy's prelude shadows Rect in this scope, hence the qualified paths
    fn layout_of(node: taffy::NodeId, t: &TaffyTree<impl Clone>) -> frames_core::Rect {
        let l = t.layout(node).unwrap();
        frames_core::Rect {
            x: l.location.x,
            y: l.location.y,
            w: l.size.width,
            h: l.size.height,
        }
    }

    fn add_offset(mut r: frames_core::Rect, off: (f32, f32)) -> frames_core::Rect {
        r.x += off.0;
        r.y += off.1;
        r
    }

    let mut scene = Scene {
        clear_color: palette.background,
        nodes: vec![],
    };
    let mut hits: Vec<HitRegion> = vec![];
    let mut sems: Vec<SemNode> = vec![];

    fn walk(
        v: &View,
        t: &TaffyTree<NodeCtx>,
        nodes: &HashMap<ViewId, taffy::NodeId>,
        scene: &mut Scene,
        hits: &mut Vec<HitRegion>,
        sems: &mut Vec<SemNode>,
        focused: Option<u64>,
        palette: &Palette,
        parent_offset_px: (f32, f32),
        text_cache: &HashMap<taffy::NodeId, TextLayout>,
        font_px: &dyn Fn(f32) -> f32,
    ) {
        let local = layout_of(nodes[&v.id], t);
        let rect = add_offset(local, parent_offset_px);

        // Convert padding from dp to px for content rect
        let content_rect = {
            if let Some(pv_dp) = v.modifier.padding_values {
                frames_core::Rect {
                    x: rect.x + dp_to_px(pv_dp.left),
                    y: rect.y + dp_to_px(pv_dp.top),
                    w: (rect.w - dp_to_px(pv_dp.left) - dp_to_px(pv_dp.right)).max(0.0),
                    h: (rect.h - dp_to_px(pv_dp.top) - dp_to_px(pv_dp.bottom)).max(0.0),
                }
            } else if let Some(p_dp) = v.modifier.padding {
                let p_px = dp_to_px(p_dp);
                frames_core::Rect {
                    x: rect.x + p_px,
                    y: rect.y + p_px,
                    w: (rect.w - 2.0 * p_px).max(0.0),
                    h: (rect.h - 2.0 * p_px).max(0.0),
                }
            } else {
                rect
            }
        };

        let base_px = (parent_offset_px.0 + local.x, parent_offset_px.1 + local.y);
        let is_focused = focused == Some(v.id);

        // Background
        if let Some(bg) = v.modifier.background {
            scene.nodes.push(SceneNode::Rect {
                rect,
                brush: bg,
                radius: v.modifier.clip_rounded.map(dp_to_px).unwrap_or(0.0),
            });
        }

        // Border
        if let Some(b) = &v.modifier.border {
            scene.nodes.push(SceneNode::Border {
                rect,
                color: b.color,
                width: dp_to_px(b.width),
                radius: dp_to_px(b.radius.max(v.modifier.clip_rounded.unwrap_or(0.0))),
            });
        }

        match &v.kind {
            ViewKind::Text {
                text,
                color,
                font_size: font_dp,
                ..
            } => {
                let nid = nodes[&v.id];
                let (size_px_val, line_h_px_val, lines): (f32, f32, Vec<String>) =
                    if let Some(tl) = text_cache.get(&nid) {
                        (tl.size_px, tl.line_h_px, tl.lines.clone())
                    } else {
                        // Fallback
                        let sz_px = font_px(*font_dp);
                        (sz_px, sz_px * 1.3, vec![text.clone()])
                    };

                // Work within the content box
                let mut draw_box = content_rect;

                // Vertical centering for single line within content box
                if lines.len() == 1 {
                    let dy_px = (draw_box.h - line_h_px_val) * 0.5;
                    if dy_px.is_finite() {
                        draw_box.y += dy_px.max(0.0);
                        draw_box.h = line_h_px_val;
                    }
                }

                let resolved = resolve_text_color(*color, palette);
                for (i, ln) in lines.iter().enumerate() {
                    scene.nodes.push(SceneNode::Text {
                        rect: frames_core::Rect {
                            x: draw_box.x,
                            y: draw_box.y + i as f32 * line_h_px_val,
                            w: draw_box.w,
                            h: line_h_px_val,
                        },
                        text: ln.clone(),
                        color: resolved,
                        size: size_px_val,
                    });
                }

                sems.push(SemNode {
                    id: v.id,
                    role: Role::Text,
                    label: Some(text.clone()),
                    rect,
                    focused: is_focused,
                    enabled: true,
                });
            }

            ViewKind::Button { on_press } => {
                // Default background if none provided
                if v.modifier.background.is_none() {
                    scene.nodes.push(SceneNode::Rect {
                        rect,
                        brush: Brush::Solid(palette.primary),
                        radius: v
                            .modifier
                            .clip_rounded
                            .map(dp_to_px)
                            .unwrap_or_else(|| dp_to_px(6.0)),
                    });
                }

                if on_press.is_some() {
                    hits.push(HitRegion {
                        id: v.id,
                        rect,
                        on_press: on_press.clone(),
                        focusable: true,
                        z_index: v.modifier.z_index,
                    });
                }
                sems.push(SemNode {
                    id: v.id,
                    role: Role::Button,
                    label: collect_text(v),
                    rect,
                    focused: is_focused,
                    enabled: true,
                });
                // Focus ring
                if is_focused {
                    scene.nodes.push(SceneNode::Border {
                        rect,
                        color: palette.primary,
                        width: dp_to_px(2.0),
                        radius: v
                            .modifier
                            .clip_rounded
                            .map(dp_to_px)
                            .unwrap_or_else(|| dp_to_px(6.0)),
                    });
                }
            }

            _ => {}
        }

        // Rounded containers clip their children
        let clips = v.modifier.clip_rounded.is_some() && !v.children.is_empty();
        if clips {
            scene.nodes.push(SceneNode::PushClip {
                rect,
                radius: v.modifier.clip_rounded.map(dp_to_px).unwrap_or(0.0),
            });
        }

        // Recurse in ascending z-index; ties keep declaration order
        let mut ordered: Vec<&View> = v.children.iter().collect();
        ordered.sort_by(|a, b| {
            a.modifier
                .z_index
                .partial_cmp(&b.modifier.z_index)
                .unwrap_or(Ordering::Equal)
        });
        for c in ordered {
            walk(
                c, t, nodes, scene, hits, sems, focused, palette, base_px, text_cache, font_px,
            );
        }

        if clips {
            scene.nodes.push(SceneNode::PopClip);
        }
    }

    // Start with zero offset
    walk(
        &root,
        &taffy,
        &nodes_map,
        &mut scene,
        &mut hits,
        &mut sems,
        focused,
        palette,
        (0.0, 0.0),
        &text_cache,
        &font_px,
    );

    // Ensure visual order: low z_index first. Topmost is found by iter().rev().
    hits.sort_by(|a, b| a.z_index.partial_cmp(&b.z_index).unwrap_or(Ordering::Equal));

    (scene, hits, sems)
}

/// Compose one frame: build the tree, lay it out at the scheduler's size,
/// and paint it with the palette registered for `mode`.
///
/// The palette is ambient (via `with_palette`) for the whole frame, so both
/// composition and painting read the same one.
pub fn render_frame<F>(sched: &mut Scheduler, mode: ThemeMode, build: F) -> Frame
where
    F: FnMut(&mut Scheduler) -> View,
{
    let focused = sched.focused;
    let palette = *resolve_palette(mode);
    with_palette(palette, || {
        sched.compose(build, move |root, size| {
            layout_and_paint(root, size, focused, &palette)
        })
    })
}

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp_font: f32) -> View;
    fn soft_wrap(self) -> View;
}
impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = Some(c);
        }
        self
    }
    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text {
            font_size: text_size_dp,
            ..
        } = &mut self.kind
        {
            *text_size_dp = dp_font;
        }
        self
    }
    fn soft_wrap(mut self) -> View {
        if let ViewKind::Text { soft_wrap, .. } = &mut self.kind {
            *soft_wrap = true;
        }
        self
    }
}
