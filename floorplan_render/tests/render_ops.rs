// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and ordering checks on the op stream captured by the recording
//! backend.

use floorplan_imaging::{Affine, DrawOp, PathCmd, PathDesc};
use floorplan_imaging_ref::{RefBackend, StateSnapshot};
use floorplan_model::{
    Camera, Dimensions, Door, FloorPlanData, Furniture, FurnitureKind, Point, Wall, Window,
};
use floorplan_render::{RenderStyle, Renderer, camera_sector, parse_color, render};
use peniko::{Brush, Color};

fn plan_1000x750() -> FloorPlanData {
    FloorPlanData::new(Dimensions::new(1000.0, 750.0))
}

fn wall(x0: f64, y0: f64, x1: f64, y1: f64, thickness: f64) -> Wall {
    Wall {
        start: Point::new(x0, y0),
        end: Point::new(x1, y1),
        thickness,
    }
}

fn camera(x: f64, y: f64, direction: f64, is_active: Option<bool>) -> Camera {
    Camera {
        position: Point::new(x, y),
        direction,
        field_of_view: 60.0,
        range: 100.0,
        is_active,
    }
}

fn furniture(kind: &str, rotation: Option<f64>) -> Furniture {
    Furniture {
        kind: FurnitureKind::from(kind),
        position: Point::new(300.0, 300.0),
        width: 120.0,
        height: 60.0,
        rotation,
    }
}

fn color_of(backend: &RefBackend, state: &StateSnapshot) -> Color {
    let paint = state.paint.expect("draw without paint");
    match &backend.paint(paint).expect("live paint").brush {
        Brush::Solid(c) => *c,
        other => panic!("unexpected brush {other:?}"),
    }
}

/// Names the style role a color belongs to.
fn role(style: &RenderStyle, c: Color) -> &'static str {
    let roles = [
        (style.background, "background"),
        (style.border, "border"),
        (style.wall, "wall"),
        (style.window_frame, "window_frame"),
        (style.window_glass, "window_glass"),
        (style.door, "door"),
        (style.door_swing, "door_swing"),
        (style.furniture, "furniture"),
        (style.bed, "bed"),
        (style.pillow, "pillow"),
        (style.table, "table"),
        (style.chair, "chair"),
        (style.sofa, "sofa"),
        (style.sofa_armrest, "sofa_armrest"),
        (style.furniture_outline, "furniture_outline"),
        (style.cone_fill, "cone_fill"),
        (style.cone_outline, "cone_outline"),
        (style.camera_active, "camera_active"),
        (style.camera_inactive, "camera_inactive"),
        (style.camera_lens, "camera_lens"),
        (style.indicator_on, "indicator_on"),
        (style.indicator_off, "indicator_off"),
    ];
    roles
        .iter()
        .find(|(color, _)| *color == c)
        .map(|(_, name)| *name)
        .unwrap_or("unknown")
}

fn roles(backend: &RefBackend) -> Vec<&'static str> {
    let style = RenderStyle::default();
    backend
        .draws()
        .map(|(_, state)| role(&style, color_of(backend, state)))
        .collect()
}

fn path_of<'a>(backend: &'a RefBackend, op: &DrawOp) -> &'a PathDesc {
    match op {
        DrawOp::FillPath(id) | DrawOp::StrokePath(id) => backend.path(*id).expect("live path"),
        other => panic!("expected a path draw, got {other:?}"),
    }
}

/// End points of every command, in order.
fn points(path: &PathDesc) -> Vec<(f32, f32)> {
    path.commands
        .iter()
        .filter_map(|c| match *c {
            PathCmd::MoveTo { x, y }
            | PathCmd::LineTo { x, y }
            | PathCmd::QuadTo { x, y, .. }
            | PathCmd::CurveTo { x, y, .. } => Some((x, y)),
            PathCmd::Close => None,
        })
        .collect()
}

fn assert_near(actual: (f32, f32), expected: (f64, f64)) {
    let (dx, dy) = (
        f64::from(actual.0) - expected.0,
        f64::from(actual.1) - expected.1,
    );
    assert!(
        dx.abs() < 1e-3 && dy.abs() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

fn all_paths_finite(backend: &RefBackend) -> bool {
    backend.draws().all(|(op, _)| match op {
        DrawOp::FillPath(id) | DrawOp::StrokePath(id) => {
            backend.path(*id).is_some_and(PathDesc::is_finite)
        }
        DrawOp::FillRect { x0, y0, x1, y1 } | DrawOp::StrokeRect { x0, y0, x1, y1 } => {
            [x0, y0, x1, y1].iter().all(|v| v.is_finite())
        }
    })
}

#[test]
fn layers_are_drawn_in_fixed_order() {
    let mut plan = plan_1000x750();
    // Declared in reverse of draw order on purpose.
    plan.cameras = Some(vec![camera(500.0, 500.0, 0.0, Some(true))]);
    plan.furniture = Some(vec![furniture("table", None)]);
    plan.doors = Some(vec![Door {
        start: Point::new(100.0, 100.0),
        end: Point::new(100.0, 200.0),
        is_open: true,
        opening_angle: Some(90.0),
    }]);
    plan.windows = Some(vec![Window {
        start: Point::new(200.0, 0.0),
        end: Point::new(400.0, 0.0),
        width: 8.0,
    }]);
    plan.walls = vec![wall(0.0, 0.0, 1000.0, 0.0, 10.0)];

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(
        roles(&backend),
        [
            "background",
            "border",
            "wall",
            "window_frame",
            "window_glass",
            "door",
            "door_swing",
            "table",
            "furniture_outline",
            "cone_fill",
            "cone_outline",
            "camera_active",
            "camera_lens",
            "indicator_on",
        ]
    );
}

#[test]
fn full_width_wall_at_unit_scale() {
    let mut plan = plan_1000x750();
    plan.walls = vec![wall(0.0, 0.0, 1000.0, 0.0, 10.0)];

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    let draws: Vec<_> = backend.draws().collect();
    assert_eq!(draws.len(), 3);
    let (op, state) = draws[2];
    assert!(matches!(op, DrawOp::FillPath(_)));
    assert_eq!(state.transform, Affine::IDENTITY);
    // A 10px band centered on the top edge, spanning the full width.
    assert_eq!(
        points(path_of(&backend, op)),
        [(0.0, 5.0), (1000.0, 5.0), (1000.0, -5.0), (0.0, -5.0)]
    );
}

#[test]
fn unit_scale_keeps_plan_coordinates() {
    let mut plan = plan_1000x750();
    plan.windows = Some(vec![Window {
        start: Point::new(123.25, 456.5),
        end: Point::new(777.0, 456.5),
        width: 6.0,
    }]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    let (op, state) = backend.draws().nth(2).unwrap();
    assert_eq!(
        points(path_of(&backend, op)),
        [(123.25, 456.5), (777.0, 456.5)]
    );
    assert_eq!(state.stroke.as_ref().unwrap().width, 6.0);
}

#[test]
fn axes_scale_independently() {
    let mut plan = FloorPlanData::new(Dimensions::new(100.0, 100.0));
    plan.windows = Some(vec![Window {
        start: Point::new(10.0, 10.0),
        end: Point::new(50.0, 20.0),
        width: 2.0,
    }]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 400, 200);

    let draws: Vec<_> = backend.draws().collect();
    assert_eq!(points(path_of(&backend, draws[2].0)), [(40.0, 20.0), (200.0, 40.0)]);
    // Frame width scales with x; glass never drops below one pixel.
    assert_eq!(draws[2].1.stroke.as_ref().unwrap().width, 8.0);
    assert_eq!(draws[3].1.stroke.as_ref().unwrap().width, 1.0);
}

#[test]
fn open_door_draws_frame_and_quarter_swing() {
    let mut plan = plan_1000x750();
    plan.doors = Some(vec![Door {
        start: Point::new(100.0, 100.0),
        end: Point::new(100.0, 200.0),
        is_open: true,
        opening_angle: Some(90.0),
    }]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    let draws: Vec<_> = backend.draws().skip(2).collect();
    assert_eq!(draws.len(), 2);

    let frame = points(path_of(&backend, draws[0].0));
    assert_eq!(frame, [(100.0, 100.0), (100.0, 200.0)]);

    // Arc of radius 100 around the hinge, from the frame direction (90°)
    // a further 90° to 180°.
    let arc = points(path_of(&backend, draws[1].0));
    assert_near(arc[0], (100.0, 200.0));
    assert_near(*arc.last().unwrap(), (0.0, 100.0));
    for p in &arc {
        let r = (f64::from(p.0) - 100.0).hypot(f64::from(p.1) - 100.0);
        assert!((r - 100.0).abs() < 1e-3, "point {p:?} is off the circle");
    }
}

#[test]
fn closed_door_or_missing_angle_has_no_swing() {
    let door = |is_open, opening_angle| Door {
        start: Point::new(100.0, 100.0),
        end: Point::new(100.0, 200.0),
        is_open,
        opening_angle,
    };
    let mut plan = plan_1000x750();
    plan.doors = Some(vec![door(false, Some(90.0)), door(true, None)]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(roles(&backend)[2..], ["door", "door"]);
}

#[test]
fn door_swing_is_bounded_to_one_turn() {
    let arc_len = |opening_angle: f64| {
        let mut plan = plan_1000x750();
        plan.doors = Some(vec![Door {
            start: Point::new(500.0, 300.0),
            end: Point::new(600.0, 300.0),
            is_open: true,
            opening_angle: Some(opening_angle),
        }]);
        let mut backend = RefBackend::default();
        render(&mut backend, &plan, 1000, 750);
        let (op, _) = backend.draws().nth(3).expect("swing arc");
        path_of(&backend, op).commands.len()
    };

    let full_turn = arc_len(360.0);
    assert_eq!(arc_len(1.0e9), full_turn);
    assert_eq!(arc_len(-1.0e9), arc_len(-360.0));
    assert!(full_turn < 1000, "full-turn arc has {full_turn} commands");
}

#[test]
fn wall_thickness_follows_the_x_scale() {
    let mut plan = FloorPlanData::new(Dimensions::new(100.0, 100.0));
    plan.walls = vec![
        wall(50.0, 10.0, 50.0, 90.0, 10.0),
        wall(10.0, 50.0, 90.0, 50.0, 10.0),
    ];

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 400, 200);

    let draws: Vec<_> = backend.draws().collect();
    assert_eq!(draws.len(), 4);
    // scale_x = 4, scale_y = 2: both walls are 10 * 4 = 40px thick.
    assert_eq!(
        points(path_of(&backend, draws[2].0)),
        [(180.0, 20.0), (180.0, 180.0), (220.0, 180.0), (220.0, 20.0)]
    );
    assert_eq!(
        points(path_of(&backend, draws[3].0)),
        [(40.0, 120.0), (360.0, 120.0), (360.0, 80.0), (40.0, 80.0)]
    );
}

#[test]
fn zero_length_wall_is_skipped_without_artifacts() {
    let mut plan = plan_1000x750();
    plan.walls = vec![
        wall(300.0, 300.0, 300.0, 300.0, 10.0),
        wall(0.0, 0.0, 100.0, 0.0, 10.0),
    ];

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(roles(&backend), ["background", "border", "wall"]);
    assert!(all_paths_finite(&backend));
}

#[test]
fn malformed_entities_do_not_stop_the_pass() {
    let mut plan = plan_1000x750();
    plan.walls = vec![
        wall(f64::NAN, 0.0, 100.0, 0.0, 10.0),
        wall(0.0, 0.0, 100.0, 0.0, f64::INFINITY),
        wall(0.0, 50.0, 100.0, 50.0, 10.0),
    ];
    let mut bad_item = furniture("bed", None);
    bad_item.width = -3.0;
    plan.furniture = Some(vec![bad_item, furniture("chair", Some(f64::NAN))]);
    let mut far = camera(10.0, 10.0, 0.0, Some(true));
    far.range = -5.0;
    plan.cameras = Some(vec![far, camera(20.0, 20.0, 0.0, Some(false))]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(
        roles(&backend),
        [
            "background",
            "border",
            "wall",
            "camera_inactive",
            "camera_lens",
            "indicator_off",
        ]
    );
    assert!(all_paths_finite(&backend));
}

#[test]
fn camera_cone_spans_direction_plus_minus_half_fov() {
    let cone = camera_sector(90.0, 60.0);
    assert_eq!((cone.start_deg, cone.end_deg), (60.0, 120.0));

    let mut plan = plan_1000x750();
    plan.cameras = Some(vec![camera(200.0, 200.0, 90.0, Some(true))]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    let (op, _) = backend.draws().nth(2).unwrap();
    let desc = path_of(&backend, op);
    let pts = points(desc);
    let (s60, c60) = 60_f64.to_radians().sin_cos();
    let (s120, c120) = 120_f64.to_radians().sin_cos();
    assert_near(pts[0], (200.0, 200.0));
    assert_near(pts[1], (200.0 + 100.0 * c60, 200.0 + 100.0 * s60));
    assert_near(*pts.last().unwrap(), (200.0 + 100.0 * c120, 200.0 + 100.0 * s120));
    assert!(matches!(desc.commands.last(), Some(PathCmd::Close)));
}

#[test]
fn inactive_camera_draws_icon_only() {
    let mut plan = plan_1000x750();
    plan.cameras = Some(vec![
        camera(200.0, 200.0, 45.0, Some(false)),
        camera(400.0, 200.0, 45.0, None),
    ]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(
        roles(&backend)[2..],
        [
            "camera_inactive",
            "camera_lens",
            "indicator_off",
            "camera_inactive",
            "camera_lens",
            "indicator_off",
        ]
    );
}

#[test]
fn zero_range_camera_keeps_its_icon() {
    let mut plan = plan_1000x750();
    let mut cam = camera(200.0, 200.0, 0.0, Some(true));
    cam.range = 0.0;
    plan.cameras = Some(vec![cam]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(
        roles(&backend)[2..],
        ["camera_active", "camera_lens", "indicator_on"]
    );
}

#[test]
fn camera_icon_size_does_not_follow_plan_scale() {
    let mut plan = FloorPlanData::new(Dimensions::new(100.0, 100.0));
    plan.cameras = Some(vec![camera(50.0, 50.0, 90.0, Some(false))]);

    for size in [100, 1000] {
        let mut backend = RefBackend::default();
        render(&mut backend, &plan, size, size);

        let (op, state) = backend.draws().nth(2).unwrap();
        assert_eq!(
            *op,
            DrawOp::FillRect {
                x0: -8.0,
                y0: -8.0,
                x1: 8.0,
                y1: 8.0
            }
        );
        let center = f64::from(size) / 2.0;
        let expected = Affine::translate((center, center)) * Affine::rotate(90_f64.to_radians());
        assert_eq!(state.transform, expected);
        assert_eq!(state.transform_depth, 1);
    }
}

#[test]
fn missing_rotation_matches_zero_rotation() {
    let render_with = |rotation| {
        let mut plan = plan_1000x750();
        plan.furniture = Some(vec![furniture("sofa", rotation)]);
        let mut backend = RefBackend::default();
        render(&mut backend, &plan, 1000, 750);
        backend
    };
    let a = render_with(None);
    let b = render_with(Some(0.0));
    assert_eq!(a.ops(), b.ops());
}

#[test]
fn furniture_is_drawn_in_its_rotated_frame() {
    let mut plan = plan_1000x750();
    plan.furniture = Some(vec![furniture("bed", Some(30.0))]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    let expected = Affine::translate((300.0, 300.0)) * Affine::rotate(30_f64.to_radians());
    let draws: Vec<_> = backend.draws().skip(2).collect();
    assert_eq!(draws.len(), 3, "base, pillow, outline");
    for (_, state) in &draws {
        assert_eq!(state.transform, expected);
    }
    assert_eq!(
        *draws[0].0,
        DrawOp::FillRect {
            x0: -60.0,
            y0: -30.0,
            x1: 60.0,
            y1: 30.0
        }
    );
    assert!(matches!(draws[2].0, DrawOp::StrokeRect { .. }));

    // The furniture transform is scoped to the item.
    let Some(floorplan_imaging_ref::Event::State { state, .. }) = backend.events().last() else {
        panic!("expected a trailing pop");
    };
    assert_eq!(state.transform, Affine::IDENTITY);
    assert_eq!(state.transform_depth, 0);
}

#[test]
fn furniture_types_pick_their_decorations() {
    let mut plan = plan_1000x750();
    plan.furniture = Some(vec![
        furniture("bed", None),
        furniture("sofa", None),
        furniture("chair", None),
        furniture("aquarium", None),
    ]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(
        roles(&backend)[2..],
        [
            "bed",
            "pillow",
            "furniture_outline",
            "sofa",
            "sofa_armrest",
            "sofa_armrest",
            "furniture_outline",
            "chair",
            "furniture_outline",
            "furniture",
            "furniture_outline",
        ]
    );
}

#[test]
fn walls_and_dimensions_alone_draw_border_and_walls() {
    let plan: FloorPlanData = serde_json::from_str(
        r#"{
            "walls": [
                { "start": {"x": 0, "y": 0}, "end": {"x": 1000, "y": 0}, "thickness": 10 },
                { "start": {"x": 0, "y": 0}, "end": {"x": 0, "y": 750}, "thickness": 10 }
            ],
            "dimensions": { "width": 1000, "height": 750 }
        }"#,
    )
    .unwrap();

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 1000, 750);

    assert_eq!(roles(&backend), ["background", "border", "wall", "wall"]);
    let (border, _) = backend.draws().nth(1).unwrap();
    assert_eq!(
        *border,
        DrawOp::StrokeRect {
            x0: 0.0,
            y0: 0.0,
            x1: 1000.0,
            y1: 750.0
        }
    );
}

#[test]
fn degenerate_extent_draws_only_the_frame() {
    let mut plan = FloorPlanData::new(Dimensions::new(0.0, 0.0));
    plan.walls = vec![wall(0.0, 0.0, 10.0, 0.0, 1.0)];
    plan.cameras = Some(vec![camera(5.0, 5.0, 0.0, Some(true))]);

    let mut backend = RefBackend::default();
    render(&mut backend, &plan, 200, 100);

    assert_eq!(roles(&backend), ["background", "border"]);
}

#[test]
fn camera_toggle_is_a_data_transform() {
    let mut plan = plan_1000x750();
    plan.cameras = Some(vec![camera(200.0, 200.0, 0.0, Some(true))]);

    let mut shown = RefBackend::default();
    render(&mut shown, &plan, 1000, 750);
    let mut hidden = RefBackend::default();
    render(&mut hidden, &plan.with_cameras_active(false), 1000, 750);

    assert!(roles(&shown).contains(&"cone_fill"));
    assert!(!roles(&hidden).contains(&"cone_fill"));
}

#[test]
fn custom_style_changes_paints_only() {
    let mut plan = plan_1000x750();
    plan.walls = vec![wall(0.0, 0.0, 1000.0, 0.0, 10.0)];
    let style = RenderStyle {
        wall: parse_color("#ff0000").unwrap(),
        ..RenderStyle::default()
    };

    let mut default_backend = RefBackend::default();
    render(&mut default_backend, &plan, 1000, 750);
    let mut styled = RefBackend::default();
    Renderer::with_style(style).render(&mut styled, &plan, 1000, 750);

    let (_, state) = styled.draws().nth(2).unwrap();
    assert_eq!(
        color_of(&styled, state),
        Color::from_rgba8(0xff, 0x00, 0x00, 0xff)
    );
    assert_eq!(default_backend.ops(), styled.ops());
}

#[test]
fn rendering_twice_emits_identical_ops() {
    let plan: FloorPlanData =
        serde_json::from_str(include_str!("../../floorplan_model/tests/data/apartment.json"))
            .unwrap();

    let mut a = RefBackend::default();
    let mut b = RefBackend::default();
    render(&mut a, &plan, 800, 600);
    render(&mut b, &plan, 800, 600);

    assert_eq!(a.ops(), b.ops());
    assert!(all_paths_finite(&a));
    // Every push is matched by a pop.
    let Some(floorplan_imaging_ref::Event::State { state, .. }) = a.events().last() else {
        panic!("expected trailing state event");
    };
    assert_eq!(state.transform_depth, 0);
}
