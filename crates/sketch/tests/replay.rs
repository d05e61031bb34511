use drawing::{Cursor, DrawCall};
use interaction::{EventKind, InteractionState, Responder};
use magic_core::{approx_eq, PixelPoint, UserPoint};
use sketch::{replay, Scene, SceneConfig, SceneError, SceneShape};
use std::cell::Cell;
use std::rc::Rc;

const DRAG_SCENE: &str = r#"{
    "canvas": { "width": 400, "height": 400 },
    "window": { "scale": [20, 20] },
    "shapes": [
        { "kind": "square", "x": -1, "y": 1, "side": 2, "drag": {} }
    ],
    "pointer": [
        { "position": [200, 200] },
        { "position": [200, 200], "pressed": true },
        { "position": [210, 205], "pressed": true },
        { "position": [400, 100], "pressed": true },
        { "position": [400, 100] },
        { "position": [400, 100] }
    ]
}"#;

fn load(json: &str) -> Scene {
    let config: SceneConfig = serde_json::from_str(json).unwrap();
    Scene::from_config(config).unwrap()
}

fn square_anchor(scene: &Scene) -> PixelPoint {
    match scene.shape(0) {
        Some(SceneShape::Rectangle(rect)) => rect.position_in_pixels(),
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn drag_scene_replays_into_polygons() {
    let mut scene = load(DRAG_SCENE);
    let frames = replay(&mut scene, None);
    assert_eq!(frames.len(), 6);

    let polygon_at = |frame: usize| {
        frames[frame]
            .calls
            .iter()
            .find_map(|call| match call {
                DrawCall::Polygon { vertices } => Some(vertices[0]),
                _ => None,
            })
            .unwrap()
    };

    assert_eq!(frames[0].cursor, Cursor::Move);
    assert_eq!(polygon_at(0), PixelPoint::new(180.0, 180.0));
    // grabbed at (210, 205): anchor stays put on the first drag frame
    assert_eq!(polygon_at(2), PixelPoint::new(180.0, 180.0));
    assert_eq!(polygon_at(3), PixelPoint::new(370.0, 75.0));
    // release edge lands one frame late and the square stays where it was
    assert_eq!(polygon_at(5), PixelPoint::new(370.0, 75.0));

    let SceneShape::Rectangle(rect) = scene.shape(0).unwrap() else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.position(), UserPoint::new(8.5, 6.25));
    assert_eq!(scene.entries()[0].drag().unwrap().state(), InteractionState::Hovering);
}

#[test]
fn frames_past_the_trace_hold_the_last_sample() {
    let mut scene = load(DRAG_SCENE);
    let frames = replay(&mut scene, Some(9));
    assert_eq!(frames.len(), 9);
    assert_eq!(frames[8].frame, 8);
    assert_eq!(frames[8].calls, frames[6].calls);
    assert_eq!(square_anchor(&scene), PixelPoint::new(370.0, 75.0));
}

#[test]
fn rotation_and_axes_draw_every_frame() {
    let mut scene = load(
        r#"{
            "canvas": { "width": 400, "height": 400 },
            "window": { "scale": [20, 20], "stroke_weight": 2 },
            "axes": true,
            "ticks": [{ "axis": "horizontal", "value": 1 }],
            "shapes": [
                { "kind": "square", "x": -1, "y": 1, "side": 2,
                  "rotation": { "angle": 1.0, "step": 0.25 } }
            ]
        }"#,
    );
    let frames = replay(&mut scene, Some(6));

    let lines: Vec<_> = frames[0]
        .calls
        .iter()
        .filter(|call| matches!(call, DrawCall::Line { .. }))
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(frames[0].calls[0], DrawCall::StrokeWeight { weight: 2.0 });
    // nobody hovered anything, so the host cursor never changed
    assert!(frames.iter().all(|f| f.cursor == Cursor::Arrow));

    let rotation = scene.entries()[0].rotation().unwrap();
    assert!(rotation.is_complete());
    assert!(approx_eq(rotation.progress(), 1.0));
    assert_eq!(frames[4].calls, frames[5].calls);
    assert_ne!(frames[2].calls, frames[3].calls);
}

#[test]
fn custom_responders_attach_to_loaded_scenes() {
    let mut scene = load(DRAG_SCENE);
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    let responder = Responder::new(move |_, _| seen.set(seen.get() + 1));

    let controller = scene.controller_mut(0).unwrap();
    controller.add_event_responder(EventKind::MouseJustPressed, &responder);
    controller.add_event_responder(EventKind::MouseJustPressed, &responder);
    replay(&mut scene, None);
    assert_eq!(count.get(), 1);

    let controller = scene.controller_mut(0).unwrap();
    assert!(controller.remove_event_responder(EventKind::MouseJustPressed, &responder));
    assert!(controller.responders(EventKind::MouseJustPressed).is_empty());
}

#[test]
fn loading_reports_missing_files_and_bad_json() {
    let err = Scene::load("/nonexistent/scene.json").unwrap_err();
    assert!(matches!(err, SceneError::Io { .. }));

    let path = std::env::temp_dir().join(format!("magic-scene-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "canvas": { "width": 10 } }"#).unwrap();
    let err = Scene::load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, SceneError::Json(_)));
}

#[test]
fn zero_scale_is_rejected() {
    let config: SceneConfig = serde_json::from_str(
        r#"{ "canvas": { "width": 10, "height": 10 }, "window": { "scale": [0, 1] } }"#,
    )
    .unwrap();
    assert!(matches!(Scene::from_config(config), Err(SceneError::Geometry(_))));
}
