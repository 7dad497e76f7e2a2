//! The host scene-graph surface the importer writes through.

use crate::paint::{SolidPaint, StrokeCap, StrokeJoin};
use serde::Serialize;
use vecnet_network::VectorNetwork;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("node not found: {id}")]
    NodeNotFound { id: String },
    #[error("node does not support children: {id}")]
    NotAContainer { id: String },
    #[error("scene host error: {message}")]
    Host { message: String },
}

pub type SceneResult<T> = std::result::Result<T, SceneError>;

/// Node state as the host reports it after the import.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Scene mutations needed to place one imported vector.
///
/// Node ids are opaque host strings. A freshly created vector node is detached; it only joins the
/// tree through [`SceneMutation::append_child`].
pub trait SceneMutation {
    fn create_vector(&mut self) -> SceneResult<String>;
    fn set_name(&mut self, node: &str, name: &str) -> SceneResult<()>;
    /// The host recomputes the node's size from the network's geometry.
    fn set_vector_network(&mut self, node: &str, network: &VectorNetwork) -> SceneResult<()>;
    fn set_fills(&mut self, node: &str, fills: &[SolidPaint]) -> SceneResult<()>;
    fn set_strokes(&mut self, node: &str, strokes: &[SolidPaint]) -> SceneResult<()>;
    fn set_stroke_weight(&mut self, node: &str, weight: f64) -> SceneResult<()>;
    fn set_stroke_cap(&mut self, node: &str, cap: StrokeCap) -> SceneResult<()>;
    fn set_stroke_join(&mut self, node: &str, join: StrokeJoin) -> SceneResult<()>;
    fn resize(&mut self, node: &str, width: f64, height: f64) -> SceneResult<()>;
    fn set_position(&mut self, node: &str, x: f64, y: f64) -> SceneResult<()>;
    /// Appends `node` under `parent`, or under the current page when `parent` is `None`.
    fn append_child(&mut self, parent: Option<&str>, node: &str) -> SceneResult<()>;
    fn snapshot(&self, node: &str) -> SceneResult<NodeSnapshot>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Page,
    Frame,
    Vector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub network: Option<VectorNetwork>,
    pub fills: Vec<SolidPaint>,
    pub strokes: Vec<SolidPaint>,
    pub stroke_weight: f64,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
}

impl MemoryNode {
    fn new(id: String, kind: NodeKind, name: &str) -> Self {
        Self {
            id,
            kind,
            name: name.to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            parent: None,
            children: Vec::new(),
            network: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 1.0,
            stroke_cap: StrokeCap::default(),
            stroke_join: StrokeJoin::default(),
        }
    }
}

/// In-memory scene for headless use and tests.
///
/// Starts with one page, which is the current page. Vector nodes take their size from the
/// bounding box of their vertices and Bezier control points, and `resize` only records the new
/// size.
#[derive(Debug, Clone)]
pub struct MemoryScene {
    nodes: Vec<MemoryNode>,
    current_page: String,
    next_id: usize,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryScene {
    pub fn new() -> Self {
        let mut scene = Self {
            nodes: Vec::new(),
            current_page: String::new(),
            next_id: 0,
        };
        scene.current_page = scene.insert(NodeKind::Page, "Page 1");
        scene
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    /// Adds a frame under the current page and returns its id.
    pub fn add_frame(&mut self, name: &str) -> String {
        let id = self.insert(NodeKind::Frame, name);
        let page = self.current_page.clone();
        self.attach(&page, &id);
        id
    }

    pub fn node(&self, id: &str) -> Option<&MemoryNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[MemoryNode] {
        &self.nodes
    }

    fn insert(&mut self, kind: NodeKind, name: &str) -> String {
        let id = format!("{}:{}", if kind == NodeKind::Page { 0 } else { 1 }, self.next_id);
        self.next_id += 1;
        self.nodes.push(MemoryNode::new(id.clone(), kind, name));
        id
    }

    fn node_mut(&mut self, id: &str) -> SceneResult<&mut MemoryNode> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| SceneError::NodeNotFound { id: id.to_string() })
    }

    fn attach(&mut self, parent: &str, child: &str) {
        let previous = self
            .nodes
            .iter_mut()
            .find(|n| n.id == child)
            .and_then(|n| n.parent.replace(parent.to_string()));
        for node in &mut self.nodes {
            if previous.as_deref() == Some(node.id.as_str()) {
                node.children.retain(|c| c != child);
            }
            if node.id == parent {
                node.children.push(child.to_string());
            }
        }
    }
}

impl SceneMutation for MemoryScene {
    fn create_vector(&mut self) -> SceneResult<String> {
        Ok(self.insert(NodeKind::Vector, "Vector"))
    }

    fn set_name(&mut self, node: &str, name: &str) -> SceneResult<()> {
        self.node_mut(node)?.name = name.to_string();
        Ok(())
    }

    fn set_vector_network(&mut self, node: &str, network: &VectorNetwork) -> SceneResult<()> {
        let (width, height) = geometry_extent(network);
        let n = self.node_mut(node)?;
        n.network = Some(network.clone());
        n.width = width;
        n.height = height;
        Ok(())
    }

    fn set_fills(&mut self, node: &str, fills: &[SolidPaint]) -> SceneResult<()> {
        self.node_mut(node)?.fills = fills.to_vec();
        Ok(())
    }

    fn set_strokes(&mut self, node: &str, strokes: &[SolidPaint]) -> SceneResult<()> {
        self.node_mut(node)?.strokes = strokes.to_vec();
        Ok(())
    }

    fn set_stroke_weight(&mut self, node: &str, weight: f64) -> SceneResult<()> {
        self.node_mut(node)?.stroke_weight = weight;
        Ok(())
    }

    fn set_stroke_cap(&mut self, node: &str, cap: StrokeCap) -> SceneResult<()> {
        self.node_mut(node)?.stroke_cap = cap;
        Ok(())
    }

    fn set_stroke_join(&mut self, node: &str, join: StrokeJoin) -> SceneResult<()> {
        self.node_mut(node)?.stroke_join = join;
        Ok(())
    }

    fn resize(&mut self, node: &str, width: f64, height: f64) -> SceneResult<()> {
        let n = self.node_mut(node)?;
        n.width = width;
        n.height = height;
        Ok(())
    }

    fn set_position(&mut self, node: &str, x: f64, y: f64) -> SceneResult<()> {
        let n = self.node_mut(node)?;
        n.x = x;
        n.y = y;
        Ok(())
    }

    fn append_child(&mut self, parent: Option<&str>, node: &str) -> SceneResult<()> {
        let parent = parent.unwrap_or(self.current_page.as_str()).to_string();
        let kind = self
            .node(&parent)
            .map(|n| n.kind)
            .ok_or_else(|| SceneError::NodeNotFound { id: parent.clone() })?;
        if kind == NodeKind::Vector {
            return Err(SceneError::NotAContainer { id: parent });
        }
        if self.node(node).is_none() {
            return Err(SceneError::NodeNotFound {
                id: node.to_string(),
            });
        }
        self.attach(&parent, node);
        Ok(())
    }

    fn snapshot(&self, node: &str) -> SceneResult<NodeSnapshot> {
        let n = self.node(node).ok_or_else(|| SceneError::NodeNotFound {
            id: node.to_string(),
        })?;
        Ok(NodeSnapshot {
            id: n.id.clone(),
            name: n.name.clone(),
            x: n.x,
            y: n.y,
            width: n.width,
            height: n.height,
            parent_id: n.parent.clone(),
        })
    }
}

/// Width and height of the box around all vertices and Bezier control points.
fn geometry_extent(network: &VectorNetwork) -> (f64, f64) {
    let controls = network.segments.iter().flat_map(|s| {
        let start = network.vertices.get(s.start);
        let end = network.vertices.get(s.end);
        let a = s
            .tangent_start
            .zip(start)
            .map(|(t, v)| (v.x + t.x, v.y + t.y));
        let b = s.tangent_end.zip(end).map(|(t, v)| (v.x + t.x, v.y + t.y));
        a.into_iter().chain(b)
    });
    let points = network.vertices.iter().map(|v| (v.x, v.y)).chain(controls);

    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for (x, y) in points {
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }
    bounds.map_or((0.0, 0.0), |(min_x, min_y, max_x, max_y)| {
        (max_x - min_x, max_y - min_y)
    })
}
