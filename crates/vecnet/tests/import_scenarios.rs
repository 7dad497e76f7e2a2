use vecnet::{ImportOptions, MemoryScene, PaintStyle, SolidPaint, SvgSource, import_svg};

const HEART: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
  <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>
</svg>"#;

#[test]
fn icon_document_from_command_params() {
    let params = serde_json::json!({
        "svg": HEART,
        "x": 40,
        "y": 80,
        "width": 48,
        "height": 48,
        "name": "heart"
    });
    let options = ImportOptions::from_json(&params.to_string()).unwrap();

    assert_eq!(SvgSource::from_input(HEART).style, PaintStyle::Stroke);

    let mut scene = MemoryScene::new();
    let imported = import_svg(&mut scene, &options).unwrap();
    assert_eq!(imported.name, "heart");
    assert_eq!(
        (imported.x, imported.y, imported.width, imported.height),
        (40.0, 80.0, 48.0, 48.0)
    );

    let node = scene.node(&imported.id).unwrap();
    assert_eq!(node.strokes, vec![SolidPaint::black()]);
    assert!(node.fills.is_empty());
    assert_eq!(node.stroke_weight, 2.0);

    let network = node.network.as_ref().unwrap();
    network.validate().unwrap();
    assert_eq!(network.loops().count(), 1);
    // The closing `Z` lands back on the first vertex.
    let last = network.segments.last().unwrap();
    assert_eq!(last.end, 0);
}

#[test]
fn compact_arc_flags_in_documents() {
    let svg = r#"<svg viewBox="0 0 20 20"><path d="M2 10a8 8 0 1116 0a8 8 0 01-16 0z"/></svg>"#;
    let mut scene = MemoryScene::new();
    let imported = import_svg(&mut scene, &ImportOptions::new(svg)).unwrap();

    let network = scene.node(&imported.id).unwrap().network.clone().unwrap();
    assert_eq!(network.vertices.len(), 2);
    assert_eq!(network.segments.len(), 2);
    assert!(network.segments.iter().all(|s| !s.is_straight()));
    assert_eq!((imported.width, imported.height), (20.0, 20.0));
}
