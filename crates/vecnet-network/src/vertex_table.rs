use crate::geom::Point;
use crate::model::Vertex;
use rustc_hash::FxHashMap;

/// Two points closer than this on both axes are the same vertex.
pub const VERTEX_TOLERANCE: f64 = 1e-3;

// Cells are wider than the tolerance so that any two points within tolerance land in the same or
// an adjacent cell even after the division rounds.
const CELL_SIZE: f64 = VERTEX_TOLERANCE * 4.0;

type Cell = (i64, i64);

/// Proximity-deduplicating vertex store.
///
/// Lookups return the lowest-indexed vertex within tolerance, the same answer a linear scan over
/// all previously inserted vertices gives.
#[derive(Debug, Default)]
pub struct VertexTable {
    vertices: Vec<Vertex>,
    cells: FxHashMap<Cell, Vec<usize>>,
}

impl VertexTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn find(&self, p: Point) -> Option<usize> {
        let (cx, cy) = cell_of(p);
        let mut best: Option<usize> = None;
        for dx in -1..=1i64 {
            for dy in -1..=1i64 {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                let Some(bucket) = self.cells.get(&key) else {
                    continue;
                };
                // Buckets are filled in insertion order, so the first hit is the lowest index.
                if let Some(&idx) = bucket
                    .iter()
                    .find(|&&idx| within_tolerance(self.vertices[idx], p))
                {
                    best = Some(best.map_or(idx, |b| b.min(idx)));
                }
            }
        }
        best
    }

    /// Returns the index of an existing vertex within tolerance of `p`, or appends a new one.
    pub fn insert(&mut self, p: Point) -> usize {
        if let Some(idx) = self.find(p) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(p.into());
        self.cells.entry(cell_of(p)).or_default().push(idx);
        idx
    }
}

pub(crate) fn within_tolerance(v: Vertex, p: Point) -> bool {
    (v.x - p.x).abs() < VERTEX_TOLERANCE && (v.y - p.y).abs() < VERTEX_TOLERANCE
}

fn cell_of(p: Point) -> Cell {
    // `as` saturates for out-of-range values and maps NaN to 0; such points never compare within
    // tolerance, so their cell only has to be deterministic.
    (
        (p.x / CELL_SIZE).floor() as i64,
        (p.y / CELL_SIZE).floor() as i64,
    )
}
