#[cfg(test)]
mod tests {
    use crate::*;
    use frames_core::*;
    use frames_theme::{Palette, ThemeMode, resolve_palette};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dark() -> Palette {
        *resolve_palette(ThemeMode::Dark)
    }

    fn badge(size: SizeClass, anchor: Anchor, glyph: char) -> AvatarBadge {
        AvatarBadge {
            size,
            anchor,
            gradient: GradientStops::new(Color::from_hex("#0c0e31"), Color::from_hex("#000bab")),
            glyph,
        }
    }

    fn scene_rects(scene: &Scene) -> Vec<(Rect, Brush, f32)> {
        scene
            .nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Rect {
                    rect,
                    brush,
                    radius,
                } => Some((*rect, *brush, *radius)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_badge_corner_anchoring() {
        let badges = [badge(
            SizeClass::Small,
            Anchor::TopLeft {
                top: 20.0,
                left: 20.0,
            },
            'R',
        )];
        let root = AvatarCluster(Modifier::new(), &badges);
        let palette = dark();
        let (scene, _, _) = layout_and_paint(&root, (300, 300), None, &palette);

        let rects = scene_rects(&scene);
        assert_eq!(rects.len(), 1);
        let (rect, _, radius) = rects[0];
        assert_eq!(
            rect,
            Rect {
                x: 20.0,
                y: 20.0,
                w: 60.0,
                h: 60.0
            }
        );
        assert_eq!(radius, 30.0);

        // Glyph painted white inside the clipped circle
        let glyph = scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Text { text, color, .. } => Some((text.clone(), *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(glyph, ("R".to_string(), Color::WHITE));
    }

    #[test]
    fn test_badge_center_anchoring() {
        let badges = [badge(SizeClass::Large, Anchor::Center, 'F')];
        let root = AvatarCluster(Modifier::new(), &badges);
        let palette = dark();
        let (scene, _, _) = layout_and_paint(&root, (300, 300), None, &palette);

        let rects = scene_rects(&scene);
        assert_eq!(rects.len(), 1);
        assert_eq!(
            rects[0].0,
            Rect {
                x: 80.0,
                y: 80.0,
                w: 140.0,
                h: 140.0
            }
        );
    }

    #[test]
    fn test_badges_paint_in_ascending_size_order() {
        // Declared large-first; paint order must still be small, medium, large.
        let badges = [
            badge(SizeClass::Large, Anchor::Center, 'F'),
            badge(
                SizeClass::Small,
                Anchor::TopLeft {
                    top: 10.0,
                    left: 10.0,
                },
                'R',
            ),
            badge(
                SizeClass::Medium,
                Anchor::BottomRight {
                    bottom: 10.0,
                    right: 10.0,
                },
                'M',
            ),
        ];
        let root = AvatarCluster(Modifier::new(), &badges);
        let palette = dark();
        let (scene, _, _) = layout_and_paint(&root, (300, 300), None, &palette);

        let widths: Vec<f32> = scene_rects(&scene).iter().map(|(r, _, _)| r.w).collect();
        assert_eq!(widths, vec![60.0, 80.0, 140.0]);
    }

    #[test]
    fn test_topmost_button_wins_tap() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let c1 = calls.clone();
        let c2 = calls.clone();

        let under = Modifier::new()
            .absolute()
            .offset(Some(50.0), Some(50.0), None, None)
            .size(100.0, 100.0);
        let tree = Stack(Modifier::new()).child((
            Button(under.clone().z_index(1.0), move || c1.borrow_mut().push(1)),
            Button(under.clone().z_index(2.0), move || c2.borrow_mut().push(2)),
        ));

        let palette = dark();
        let (scene, hits, sems) = layout_and_paint(&tree, (300, 300), None, &palette);
        assert_eq!(hits.len(), 2);
        // sorted ascending by z
        assert_eq!(hits[0].z_index, 1.0);
        assert_eq!(hits[1].z_index, 2.0);

        let frame = Frame {
            scene,
            hit_regions: hits,
            semantics_nodes: sems,
            focus_chain: vec![],
        };
        assert!(frame.tap(Vec2 { x: 100.0, y: 100.0 }));
        assert_eq!(*calls.borrow(), vec![2]);

        assert!(!frame.tap(Vec2 { x: 10.0, y: 10.0 }));
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn test_button_paints_primary_by_default() {
        let palette = dark();
        let tree =
            Column(Modifier::new()).child(Button(Modifier::new().size(120.0, 48.0), || {}));
        let (scene, hits, _) = layout_and_paint(&tree, (300, 300), None, &palette);

        let rects = scene_rects(&scene);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].1, Brush::Solid(palette.primary));
        assert_eq!(hits.len(), 1);
        assert!(hits[0].focusable);
    }

    #[test]
    fn test_explicit_background_suppresses_default() {
        let palette = dark();
        let tree = Column(Modifier::new()).child(Button(
            Modifier::new().size(120.0, 48.0).background(palette.surface),
            || {},
        ));
        let (scene, _, _) = layout_and_paint(&tree, (300, 300), None, &palette);

        let rects = scene_rects(&scene);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].1, Brush::Solid(palette.surface));
    }

    #[test]
    fn test_focused_button_gets_ring() {
        let build =
            || Column(Modifier::new()).child(Button(Modifier::new().size(120.0, 48.0), || {}));
        let palette = dark();

        let (_, hits, _) = layout_and_paint(&build(), (300, 300), None, &palette);
        let id = hits[0].id;

        let (scene, _, sems) = layout_and_paint(&build(), (300, 300), Some(id), &palette);
        let ring = scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Border { color, width, .. } => Some((*color, *width)),
                _ => None,
            })
            .unwrap();
        assert_eq!(ring, (palette.primary, 2.0));
        assert!(sems.iter().any(|s| s.id == id && s.focused));
    }

    #[test]
    fn test_text_defaults_to_palette_text_color() {
        let light = *resolve_palette(ThemeMode::Light);
        let tree = Column(Modifier::new()).child(Text("hello"));
        let (scene, _, _) = layout_and_paint(&tree, (300, 300), None, &light);

        let color = scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Text { color, .. } => Some(*color),
                _ => None,
            })
            .unwrap();
        assert_eq!(color, light.text);
    }

    #[test]
    fn test_explicit_text_color_wins() {
        let light = *resolve_palette(ThemeMode::Light);
        let tree = Column(Modifier::new()).child(Text("hello").color(Color::WHITE));
        let (scene, _, _) = layout_and_paint(&tree, (300, 300), None, &light);

        let color = scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Text { color, .. } => Some(*color),
                _ => None,
            })
            .unwrap();
        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn test_resolve_text_color() {
        let p = dark();
        assert_eq!(resolve_text_color(None, &p), p.text);
        assert_eq!(resolve_text_color(Some(Color::BLACK), &p), Color::BLACK);
    }

    #[test]
    fn test_soft_wrap_produces_multiple_lines() {
        let palette = dark();
        let tree = Column(Modifier::new())
            .child(Text("one two three four five six seven eight").soft_wrap());
        let (scene, _, _) = layout_and_paint(&tree, (120, 300), None, &palette);

        let lines: Vec<String> = scene
            .nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        // Wrapping splits on word boundaries only, so the joined lines give
        // back the input.
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), "one two three four five six seven eight");
    }

    #[test]
    fn test_spacer_fills_remaining_space() {
        let palette = dark();
        let tree = Column(Modifier::new().fill_max_size()).child((
            Box(Modifier::new()
                .width(50.0)
                .height(50.0)
                .background(Color::from_hex("#102030"))),
            Spacer(),
            Box(Modifier::new()
                .width(50.0)
                .height(50.0)
                .align_self(AlignSelf::FlexEnd)
                .background(Color::from_hex("#405060"))),
        ));
        let (scene, _, _) = layout_and_paint(&tree, (200, 300), None, &palette);

        // The spacer paints nothing; it absorbs the leftover column space and
        // pushes the second box to the bottom edge.
        let rects = scene_rects(&scene);
        assert_eq!(rects.len(), 2);
        assert_eq!(
            rects[0].0,
            Rect {
                x: 0.0,
                y: 0.0,
                w: 50.0,
                h: 50.0
            }
        );
        assert_eq!(
            rects[1].0,
            Rect {
                x: 150.0,
                y: 250.0,
                w: 50.0,
                h: 50.0
            }
        );
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(crate::wrap_text("hello world", 10.0, 200.0), vec![
            "hello world"
        ]);
        assert_eq!(crate::wrap_text("hello world again", 10.0, 110.0), vec![
            "hello world",
            "again"
        ]);
        // An overlong word is not broken mid-word
        assert_eq!(crate::wrap_text("superlongword", 10.0, 50.0), vec![
            "superlongword"
        ]);
        assert_eq!(crate::wrap_text("", 10.0, 50.0), vec![""]);
    }

    #[test]
    fn test_clip_pairing() {
        let palette = dark();
        let tree = Box(Modifier::new()
            .clip_rounded(16.0)
            .background(palette.surface))
        .child(Text("x"));
        let (scene, _, _) = layout_and_paint(&tree, (100, 100), None, &palette);

        let kinds: Vec<&'static str> = scene
            .nodes
            .iter()
            .map(|n| match n {
                SceneNode::Rect { .. } => "rect",
                SceneNode::Border { .. } => "border",
                SceneNode::Text { .. } => "text",
                SceneNode::PushClip { .. } => "push",
                SceneNode::PopClip => "pop",
            })
            .collect();
        assert_eq!(kinds, vec!["rect", "push", "text", "pop"]);
    }

    #[test]
    fn test_border_paints() {
        let palette = dark();
        let tree = Box(Modifier::new()
            .size(50.0, 50.0)
            .border(2.0, palette.border, 4.0));
        let (scene, _, _) = layout_and_paint(&tree, (100, 100), None, &palette);

        let border = scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Border {
                    color,
                    width,
                    radius,
                    ..
                } => Some((*color, *width, *radius)),
                _ => None,
            })
            .unwrap();
        assert_eq!(border, (palette.border, 2.0, 4.0));
    }

    #[test]
    fn test_button_semantics_label_concatenates_content() {
        let palette = dark();
        let tree = Column(Modifier::new()).child(
            Button(Modifier::new(), || {}).child(Row(Modifier::new()).child((
                Text("Already have an account? "),
                Text("Sign in"),
            ))),
        );
        let (_, _, sems) = layout_and_paint(&tree, (300, 300), None, &palette);

        let label = sems
            .iter()
            .find(|s| s.role == Role::Button)
            .and_then(|s| s.label.clone());
        assert_eq!(label.as_deref(), Some("Already have an account? Sign in"));
    }

    #[test]
    fn test_render_frame_collects_focus_chain() {
        let mut sched = Scheduler::new();
        let frame = render_frame(&mut sched, ThemeMode::Dark, |_| {
            Column(Modifier::new()).child((
                Button(Modifier::new().size(100.0, 40.0), || {}),
                Button(Modifier::new().size(100.0, 40.0), || {}),
            ))
        });
        assert_eq!(frame.focus_chain.len(), 2);
        assert_eq!(frame.scene.clear_color, dark().background);
    }

    #[test]
    fn test_style_absolute_insets() {
        use taffy::prelude::{auto, length};
        use taffy::style::Position;

        let px = |dp: f32| dp;
        let m = Modifier::new()
            .absolute()
            .offset(Some(20.0), Some(30.0), None, None)
            .size(60.0, 60.0);
        let s = crate::style_from_modifier(&m, &ViewKind::Box, &px);
        assert_eq!(s.position, Position::Absolute);
        assert_eq!(s.inset.left, length(20.0));
        assert_eq!(s.inset.top, length(30.0));
        assert_eq!(s.inset.right, auto());
        assert_eq!(s.inset.bottom, auto());
        assert_eq!(s.size.width, length(60.0));
    }

    #[test]
    fn test_style_container_defaults() {
        use taffy::style::FlexDirection;

        let px = |dp: f32| dp;
        let s = crate::style_from_modifier(&Modifier::new(), &ViewKind::Stack, &px);
        assert_eq!(s.align_items, Some(AlignItems::Center));
        assert_eq!(s.justify_content, Some(JustifyContent::Center));

        let s = crate::style_from_modifier(&Modifier::new(), &ViewKind::Column, &px);
        assert_eq!(s.flex_direction, FlexDirection::Column);
        assert_eq!(s.align_items, Some(AlignItems::Stretch));
    }

    #[test]
    fn test_style_gap_and_padding_scale_with_density() {
        use taffy::prelude::length;

        let px = |dp: f32| dp * 2.0;
        let s = crate::style_from_modifier(
            &Modifier::new().gap(16.0).padding(8.0),
            &ViewKind::Column,
            &px,
        );
        assert_eq!(s.gap.width, length(32.0));
        assert_eq!(s.gap.height, length(32.0));
        assert_eq!(s.padding.left, length(16.0));
    }
}
