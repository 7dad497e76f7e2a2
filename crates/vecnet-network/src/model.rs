use crate::geom::{Point, Vector, point};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn point(self) -> Point {
        point(self.x, self.y)
    }
}

impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Bezier control point expressed relative to the segment endpoint it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tangent {
    pub x: f64,
    pub y: f64,
}

impl From<Vector> for Tangent {
    fn from(v: Vector) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Directed edge between two vertices of the same network.
///
/// No tangents means a straight line; any tangent makes it a cubic Bezier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tangent_start: Option<Tangent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tangent_end: Option<Tangent>,
}

impl Segment {
    pub fn straight(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            tangent_start: None,
            tangent_end: None,
        }
    }

    pub fn cubic(start: usize, end: usize, tangent_start: Vector, tangent_end: Vector) -> Self {
        Self {
            start,
            end,
            tangent_start: Some(tangent_start.into()),
            tangent_end: Some(tangent_end.into()),
        }
    }

    pub fn is_straight(&self) -> bool {
        self.tangent_start.is_none() && self.tangent_end.is_none()
    }

    fn offset(self, vertex_offset: usize) -> Self {
        Self {
            start: self.start + vertex_offset,
            end: self.end + vertex_offset,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindingRule {
    #[serde(rename = "NONZERO")]
    NonZero,
    #[default]
    #[serde(rename = "EVENODD")]
    EvenOdd,
}

impl WindingRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonZero => "NONZERO",
            Self::EvenOdd => "EVENODD",
        }
    }
}

impl fmt::Display for WindingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindingRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONZERO" => Ok(Self::NonZero),
            "EVENODD" => Ok(Self::EvenOdd),
            other => Err(format!("unknown winding rule: {other}")),
        }
    }
}

/// A group of loops (each an ordered list of segment indices) filled with one winding rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub winding_rule: WindingRule,
    pub loops: Vec<Vec<usize>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorNetwork {
    pub vertices: Vec<Vertex>,
    pub segments: Vec<Segment>,
    pub regions: Vec<Region>,
}

impl VectorNetwork {
    /// Wraps `loops` in a single region, or in none when there are no loops.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        segments: Vec<Segment>,
        loops: Vec<Vec<usize>>,
        winding_rule: WindingRule,
    ) -> Self {
        let regions = if loops.is_empty() {
            Vec::new()
        } else {
            vec![Region {
                winding_rule,
                loops,
            }]
        };
        Self {
            vertices,
            segments,
            regions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.segments.is_empty()
    }

    /// Every loop of every region, in region order.
    pub fn loops(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.regions
            .iter()
            .flat_map(|r| r.loops.iter().map(Vec::as_slice))
    }

    /// Checks that every segment endpoint names an existing vertex and every loop entry names an
    /// existing segment.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.start >= vertex_count || seg.end >= vertex_count {
                return Err(Error::InvalidNetwork {
                    message: format!(
                        "segment {i} ({} -> {}) references a vertex outside 0..{vertex_count}",
                        seg.start, seg.end
                    ),
                });
            }
        }

        let segment_count = self.segments.len();
        for (r, region) in self.regions.iter().enumerate() {
            for (l, lp) in region.loops.iter().enumerate() {
                if let Some(bad) = lp.iter().find(|&&s| s >= segment_count) {
                    return Err(Error::InvalidNetwork {
                        message: format!(
                            "region {r} loop {l} references segment {bad} outside 0..{segment_count}"
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Appends `other` after `self` with the same index shifting as [`VectorNetwork::merge`].
    ///
    /// The combined loops keep the winding rule of `self`'s region, or `other`'s when `self` has
    /// none.
    pub fn append(&mut self, other: &VectorNetwork) {
        let winding_rule = self
            .regions
            .first()
            .or(other.regions.first())
            .map(|r| r.winding_rule)
            .unwrap_or_default();

        let vertex_offset = self.vertices.len();
        let segment_offset = self.segments.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.segments
            .extend(other.segments.iter().map(|s| s.offset(vertex_offset)));

        let appended: Vec<Vec<usize>> = other
            .loops()
            .map(|lp| lp.iter().map(|&s| s + segment_offset).collect())
            .collect();
        if appended.is_empty() {
            return;
        }
        match self.regions.first_mut() {
            Some(region) => region.loops.extend(appended),
            None => self.regions.push(Region {
                winding_rule,
                loops: appended,
            }),
        }
    }

    /// Concatenates independently built networks into one.
    ///
    /// Vertices are not deduplicated across inputs. Segment endpoints are shifted by the number of
    /// vertices that precede them and loop entries by the number of segments that precede them.
    /// All loops end up in a single region with `winding_rule`; per-input winding rules are not
    /// kept.
    pub fn merge<'a>(
        networks: impl IntoIterator<Item = &'a VectorNetwork>,
        winding_rule: WindingRule,
    ) -> Self {
        let mut vertices = Vec::new();
        let mut segments = Vec::new();
        let mut loops = Vec::new();
        let mut inputs = 0usize;

        for network in networks {
            let vertex_offset = vertices.len();
            let segment_offset = segments.len();

            vertices.extend_from_slice(&network.vertices);
            segments.extend(network.segments.iter().map(|s| s.offset(vertex_offset)));
            loops.extend(
                network
                    .loops()
                    .map(|lp| lp.iter().map(|&s| s + segment_offset).collect::<Vec<_>>()),
            );
            inputs += 1;
        }

        tracing::debug!(
            inputs,
            vertices = vertices.len(),
            segments = segments.len(),
            loops = loops.len(),
            "merged vector networks"
        );
        Self::from_parts(vertices, segments, loops, winding_rule)
    }
}
