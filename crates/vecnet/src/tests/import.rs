use crate::scene::SceneResult;
use crate::*;
use serde_json::json;

/// Forwards to a [`MemoryScene`] and records every mutation by name.
#[derive(Default)]
struct RecordingScene {
    inner: MemoryScene,
    calls: Vec<String>,
}

impl RecordingScene {
    fn record(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }
}

impl SceneMutation for RecordingScene {
    fn create_vector(&mut self) -> SceneResult<String> {
        self.record("create_vector");
        self.inner.create_vector()
    }

    fn set_name(&mut self, node: &str, name: &str) -> SceneResult<()> {
        self.record(format!("set_name {name}"));
        self.inner.set_name(node, name)
    }

    fn set_vector_network(&mut self, node: &str, network: &VectorNetwork) -> SceneResult<()> {
        self.record("set_vector_network");
        self.inner.set_vector_network(node, network)
    }

    fn set_fills(&mut self, node: &str, fills: &[SolidPaint]) -> SceneResult<()> {
        self.record(format!("set_fills {}", fills.len()));
        self.inner.set_fills(node, fills)
    }

    fn set_strokes(&mut self, node: &str, strokes: &[SolidPaint]) -> SceneResult<()> {
        self.record(format!("set_strokes {}", strokes.len()));
        self.inner.set_strokes(node, strokes)
    }

    fn set_stroke_weight(&mut self, node: &str, weight: f64) -> SceneResult<()> {
        self.record(format!("set_stroke_weight {weight}"));
        self.inner.set_stroke_weight(node, weight)
    }

    fn set_stroke_cap(&mut self, node: &str, cap: StrokeCap) -> SceneResult<()> {
        self.record(format!("set_stroke_cap {cap:?}"));
        self.inner.set_stroke_cap(node, cap)
    }

    fn set_stroke_join(&mut self, node: &str, join: StrokeJoin) -> SceneResult<()> {
        self.record(format!("set_stroke_join {join:?}"));
        self.inner.set_stroke_join(node, join)
    }

    fn resize(&mut self, node: &str, width: f64, height: f64) -> SceneResult<()> {
        self.record(format!("resize {width}x{height}"));
        self.inner.resize(node, width, height)
    }

    fn set_position(&mut self, node: &str, x: f64, y: f64) -> SceneResult<()> {
        self.record(format!("set_position {x},{y}"));
        self.inner.set_position(node, x, y)
    }

    fn append_child(&mut self, parent: Option<&str>, node: &str) -> SceneResult<()> {
        self.record(format!("append_child {}", parent.unwrap_or("page")));
        self.inner.append_child(parent, node)
    }

    fn snapshot(&self, node: &str) -> SceneResult<NodeSnapshot> {
        self.inner.snapshot(node)
    }
}

fn imported_node<'a>(
    scene: &'a RecordingScene,
    imported: &ImportedVector,
) -> &'a crate::scene::MemoryNode {
    scene.inner.node(&imported.id).unwrap()
}

#[test]
fn raw_path_is_stroked_black_and_sized_to_default() {
    let mut scene = RecordingScene::default();
    let imported = import_svg(&mut scene, &ImportOptions::new("M0 0 L10 0 L10 10 Z")).unwrap();

    assert_eq!(
        scene.calls,
        vec![
            "create_vector",
            "set_name SVG",
            "set_vector_network",
            "set_strokes 1",
            "set_stroke_weight 1.5",
            "set_stroke_cap Round",
            "set_stroke_join Round",
            "set_fills 0",
            "resize 24x24",
            "set_position 0,0",
            "append_child page",
        ]
    );
    assert_eq!(imported.name, "SVG");
    assert_eq!((imported.width, imported.height), (24.0, 24.0));
    assert_eq!(imported.parent_id.as_deref(), Some(scene.inner.current_page()));

    let node = imported_node(&scene, &imported);
    assert_eq!(node.strokes, vec![SolidPaint::black()]);
    assert!(node.fills.is_empty());
    assert_eq!(node.stroke_cap, StrokeCap::Round);
    assert_eq!(node.stroke_join, StrokeJoin::Round);
    assert_eq!(node.network.as_ref().unwrap().segments.len(), 3);
}

#[test]
fn fill_document_gets_black_fill_and_no_stroke() {
    let svg = r#"<svg viewBox="0 0 16 16"><path d="M0 0 H16 V16 H0 Z"/></svg>"#;
    let mut scene = RecordingScene::default();
    let imported = import_svg(&mut scene, &ImportOptions::new(svg)).unwrap();

    assert_eq!(
        scene.calls,
        vec![
            "create_vector",
            "set_name SVG",
            "set_vector_network",
            "set_fills 1",
            "resize 16x16",
            "set_position 0,0",
            "append_child page",
        ]
    );
    assert_eq!(imported_node(&scene, &imported).fills, vec![SolidPaint::black()]);
}

#[test]
fn explicit_colors_and_weight_win() {
    let svg = r#"<svg viewBox="0 0 24 24" stroke="red" stroke-width="3"><path d="M2 2 L22 22 L2 22 Z"/></svg>"#;
    let options = ImportOptions {
        fill_color: Some(Rgba::rgb(0.0, 0.0, 1.0)),
        stroke_color: Some(Rgba {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: Some(0.5),
        }),
        stroke_weight: Some(4.0),
        ..ImportOptions::new(svg)
    };
    let mut scene = RecordingScene::default();
    let imported = import_svg(&mut scene, &options).unwrap();

    let node = imported_node(&scene, &imported);
    assert_eq!(node.fills, vec![SolidPaint::from(Rgba::rgb(0.0, 0.0, 1.0))]);
    assert_eq!(node.strokes[0].opacity, 0.5);
    assert_eq!(node.stroke_weight, 4.0);
}

#[test]
fn detected_stroke_width_is_used_when_not_overridden() {
    let svg = r#"<svg fill="none" stroke="black" stroke-width="2"><path d="M0 0 L5 5"/></svg>"#;
    let mut scene = RecordingScene::default();
    let imported = import_svg(&mut scene, &ImportOptions::new(svg)).unwrap();
    assert_eq!(imported_node(&scene, &imported).stroke_weight, 2.0);
}

#[test]
fn explicit_stroke_color_strokes_fill_documents() {
    let svg = r#"<svg><path fill="red" d="M0 0 L5 0 L5 5 Z"/></svg>"#;
    let options = ImportOptions {
        stroke_color: Some(Rgba::rgb(0.0, 1.0, 0.0)),
        ..ImportOptions::new(svg)
    };
    let mut scene = RecordingScene::default();
    import_svg(&mut scene, &options).unwrap();

    // No default black fill because a stroke color was given.
    assert!(!scene.calls.iter().any(|c| c.starts_with("set_fills")));
    assert!(scene.calls.contains(&"set_strokes 1".to_string()));
    assert!(scene.calls.contains(&"set_stroke_weight 1.5".to_string()));
}

#[test]
fn explicit_size_and_position() {
    let options = ImportOptions {
        x: 100.0,
        y: -20.0,
        width: Some(48.0),
        height: Some(32.0),
        name: "Icon".to_string(),
        ..ImportOptions::new("M0 0 L10 0 L10 10 Z")
    };
    let mut scene = RecordingScene::default();
    let imported = import_svg(&mut scene, &options).unwrap();
    assert_eq!(
        (imported.x, imported.y, imported.width, imported.height),
        (100.0, -20.0, 48.0, 32.0)
    );
    assert_eq!(imported.name, "Icon");
}

#[test]
fn flat_geometry_is_not_resized() {
    let mut scene = RecordingScene::default();
    let imported = import_svg(&mut scene, &ImportOptions::new("M0 0 H10")).unwrap();
    assert!(!scene.calls.iter().any(|c| c.starts_with("resize")));
    assert_eq!((imported.width, imported.height), (10.0, 0.0));
}

#[test]
fn imports_under_parent() {
    let mut scene = RecordingScene::default();
    let frame = scene.inner.add_frame("Frame");
    let options = ImportOptions {
        parent_id: Some(frame.clone()),
        ..ImportOptions::new("M0 0 L1 1 L0 1 Z")
    };
    let imported = import_svg(&mut scene, &options).unwrap();
    assert_eq!(imported.parent_id, Some(frame.clone()));
    assert_eq!(scene.inner.node(&frame).unwrap().children, vec![imported.id]);
}

#[test]
fn missing_parent_is_a_scene_error() {
    let options = ImportOptions {
        parent_id: Some("7:7".to_string()),
        ..ImportOptions::new("M0 0 L1 1")
    };
    let err = import_svg(&mut MemoryScene::new(), &options).unwrap_err();
    assert!(matches!(
        err,
        Error::Scene(SceneError::NodeNotFound { ref id }) if id == "7:7"
    ));
}

#[test]
fn empty_input_is_rejected() {
    for svg in ["", "   \n"] {
        let err = import_svg(&mut MemoryScene::new(), &ImportOptions::new(svg)).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometryInput { .. }), "{err}");
    }
}

#[test]
fn document_without_paths_is_rejected() {
    let mut scene = MemoryScene::new();
    let err = import_svg(&mut scene, &ImportOptions::new("<svg><rect/></svg>")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid geometry input: no valid path data found in SVG"
    );
    assert_eq!(scene.nodes().len(), 1);
}

#[test]
fn grammar_error_leaves_scene_untouched() {
    let mut scene = RecordingScene::default();
    let err = import_svg(&mut scene, &ImportOptions::new("M0 0 L10")).unwrap_err();
    assert!(matches!(
        err,
        Error::Network(vecnet_network::Error::Grammar(_))
    ));
    assert!(scene.calls.is_empty());
}

#[test]
fn options_decode_from_camel_case_json() {
    let options = ImportOptions::from_json(
        r#"{
            "svg": "M0 0 L1 1",
            "x": 5,
            "parentId": "1:2",
            "fillColor": { "r": 1, "g": 0, "b": 0 },
            "strokeWeight": 2.5,
            "windingRule": "NONZERO"
        }"#,
    )
    .unwrap();
    assert_eq!(options.x, 5.0);
    assert_eq!(options.y, 0.0);
    assert_eq!(options.name, "SVG");
    assert_eq!(options.parent_id.as_deref(), Some("1:2"));
    assert_eq!(options.fill_color, Some(Rgba::rgb(1.0, 0.0, 0.0)));
    assert_eq!(options.stroke_weight, Some(2.5));
    assert_eq!(options.winding_rule, WindingRule::NonZero);
}

#[test]
fn options_reject_malformed_json() {
    let err = ImportOptions::from_json(r#"{"windingRule": "SIDEWAYS"}"#).unwrap_err();
    assert!(matches!(err, Error::Options(_)));
}

#[test]
fn imported_vector_serializes_like_the_command_result() {
    let mut scene = MemoryScene::new();
    let imported = import_svg(&mut scene, &ImportOptions::new("M0 0 L10 0 L10 10 Z")).unwrap();
    let value = serde_json::to_value(&imported).unwrap();
    assert_eq!(
        value,
        json!({
            "id": imported.id,
            "name": "SVG",
            "x": 0.0,
            "y": 0.0,
            "width": 24.0,
            "height": 24.0,
            "parentId": scene.current_page()
        })
    );
}

#[test]
fn multiple_paths_share_one_winding_rule() {
    let svg = r#"<svg><path d="M0 0 L4 0 L4 4 Z"/><path d="M1 1 L3 1 L3 3 Z"/></svg>"#;
    let network = network_from_input(svg, WindingRule::NonZero).unwrap();
    assert_eq!(network.vertices.len(), 6);
    assert_eq!(network.regions.len(), 1);
    assert_eq!(network.regions[0].winding_rule, WindingRule::NonZero);
    assert_eq!(network.regions[0].loops, vec![vec![0, 1, 2], vec![3, 4, 5]]);
}
