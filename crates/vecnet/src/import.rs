use crate::document::SvgSource;
use crate::paint::{PaintStyle, Rgba, SolidPaint, StrokeCap, StrokeJoin};
use crate::scene::{NodeSnapshot, SceneMutation};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use vecnet_network::{VectorNetwork, WindingRule};

pub const DEFAULT_NAME: &str = "SVG";
pub const DEFAULT_STROKE_WEIGHT: f64 = 1.5;

/// Parameters of one SVG import, in the command layer's JSON shape (camelCase keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    /// A path `d` string or a whole SVG document.
    pub svg: String,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub name: String,
    pub parent_id: Option<String>,
    pub fill_color: Option<Rgba>,
    pub stroke_color: Option<Rgba>,
    pub stroke_weight: Option<f64>,
    pub winding_rule: WindingRule,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            svg: String::new(),
            x: 0.0,
            y: 0.0,
            width: None,
            height: None,
            name: DEFAULT_NAME.to_string(),
            parent_id: None,
            fill_color: None,
            stroke_color: None,
            stroke_weight: None,
            winding_rule: WindingRule::default(),
        }
    }
}

impl ImportOptions {
    pub fn new(svg: impl Into<String>) -> Self {
        Self {
            svg: svg.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What the import reports back: the placed node as the host sees it.
pub type ImportedVector = NodeSnapshot;

/// Builds and merges the networks of every path in `svg` (path data or a document).
pub fn network_from_input(svg: &str, winding_rule: WindingRule) -> Result<VectorNetwork> {
    let source = read_source(svg)?;
    merged_network(&source, winding_rule)
}

/// Converts `options.svg` into one vector node in `scene` and places it.
///
/// The network is fully built before the scene is touched, so a grammar error leaves the scene
/// unchanged.
pub fn import_svg<S>(scene: &mut S, options: &ImportOptions) -> Result<ImportedVector>
where
    S: SceneMutation + ?Sized,
{
    let source = read_source(&options.svg)?;
    let network = merged_network(&source, options.winding_rule)?;

    let node = scene.create_vector()?;
    scene.set_name(&node, &options.name)?;
    scene.set_vector_network(&node, &network)?;

    apply_paint(scene, &node, options, &source)?;

    let intrinsic = source.size_or_default();
    let current = scene.snapshot(&node)?;
    if current.width > 0.0 && current.height > 0.0 {
        scene.resize(
            &node,
            options.width.unwrap_or(intrinsic.width),
            options.height.unwrap_or(intrinsic.height),
        )?;
    }

    scene.set_position(&node, options.x, options.y)?;
    scene.append_child(options.parent_id.as_deref(), &node)?;

    let imported = scene.snapshot(&node)?;
    tracing::debug!(
        id = %imported.id,
        vertices = network.vertices.len(),
        segments = network.segments.len(),
        width = imported.width,
        height = imported.height,
        "imported svg"
    );
    Ok(imported)
}

fn read_source(svg: &str) -> Result<SvgSource> {
    if svg.trim().is_empty() {
        return Err(Error::invalid_input("svg input is empty"));
    }
    let source = SvgSource::from_input(svg);
    if source.paths.is_empty() {
        return Err(Error::invalid_input("no valid path data found in SVG"));
    }
    Ok(source)
}

fn merged_network(source: &SvgSource, winding_rule: WindingRule) -> Result<VectorNetwork> {
    let networks = source
        .paths
        .iter()
        .map(|d| vecnet_network::build(d, winding_rule))
        .collect::<vecnet_network::Result<Vec<_>>>()?;
    Ok(VectorNetwork::merge(&networks, winding_rule))
}

fn apply_paint<S>(
    scene: &mut S,
    node: &str,
    options: &ImportOptions,
    source: &SvgSource,
) -> Result<()>
where
    S: SceneMutation + ?Sized,
{
    let style = source.style;

    if style.fills() {
        if let Some(fill) = options.fill_color {
            scene.set_fills(node, &[SolidPaint::from(fill)])?;
        } else if options.stroke_color.is_none() && style == PaintStyle::Fill {
            scene.set_fills(node, &[SolidPaint::black()])?;
        }
    }

    if style.strokes() || options.stroke_color.is_some() {
        if let Some(stroke) = options.stroke_color {
            scene.set_strokes(node, &[SolidPaint::from(stroke)])?;
        } else if style == PaintStyle::Stroke {
            scene.set_strokes(node, &[SolidPaint::black()])?;
        }

        let weight = options
            .stroke_weight
            .or(source.stroke_width)
            .unwrap_or(DEFAULT_STROKE_WEIGHT);
        scene.set_stroke_weight(node, weight)?;
        scene.set_stroke_cap(node, StrokeCap::Round)?;
        scene.set_stroke_join(node, StrokeJoin::Round)?;

        if style == PaintStyle::Stroke && options.fill_color.is_none() {
            scene.set_fills(node, &[])?;
        }
    }
    Ok(())
}
