use crate::Result;
use crate::geom::Point;
use crate::model::{Segment, VectorNetwork, WindingRule};
use crate::pen::{Pen, Stroke};
use crate::vertex_table::VertexTable;
use vecnet_path::AbsoluteCommand;

/// Parses SVG path data and converts it into a vector network.
///
/// The only failure is a grammar error in `path_data`; degenerate geometry (zero-length segments,
/// self-intersections, open subpaths) is passed through as-is.
pub fn build(path_data: &str, winding_rule: WindingRule) -> Result<VectorNetwork> {
    let commands = vecnet_path::parse_absolute(path_data)?;
    Ok(build_from_commands(&commands, winding_rule))
}

/// Converts already absolutized commands into a vector network.
pub fn build_from_commands(
    commands: &[AbsoluteCommand],
    winding_rule: WindingRule,
) -> VectorNetwork {
    let network = commands
        .iter()
        .fold(Accumulator::default(), Accumulator::apply)
        .finish(winding_rule);

    tracing::trace!(
        commands = commands.len(),
        vertices = network.vertices.len(),
        segments = network.segments.len(),
        loops = network.loops().count(),
        "built vector network"
    );
    network
}

#[derive(Debug, Default)]
struct Accumulator {
    vertices: VertexTable,
    segments: Vec<Segment>,
    loops: Vec<Vec<usize>>,
    current_loop: Vec<usize>,
    subpath_start_vertex: Option<usize>,
    pen: Pen,
}

impl Accumulator {
    fn apply(mut self, cmd: &AbsoluteCommand) -> Self {
        let (pen, stroke) = self.pen.step(cmd);

        match stroke {
            Stroke::Move { at } => {
                self.flush_loop();
                self.subpath_start_vertex = Some(self.vertices.insert(at));
            }
            Stroke::Edge { from, to, tangents } => {
                let start = self.vertices.insert(from);
                let end = self.vertices.insert(to);
                let segment = match tangents {
                    Some((tangent_start, tangent_end)) => {
                        Segment::cubic(start, end, tangent_start, tangent_end)
                    }
                    None => Segment::straight(start, end),
                };
                self.push_segment(segment);
            }
            Stroke::Close { from } => {
                if let Some(from) = from {
                    let start = self.vertices.insert(from);
                    let end = self.start_vertex(self.pen.subpath_start);
                    self.push_segment(Segment::straight(start, end));
                }
                self.flush_loop();
            }
        }

        self.pen = pen;
        self
    }

    fn start_vertex(&mut self, at: Point) -> usize {
        match self.subpath_start_vertex {
            Some(idx) => idx,
            // Only reachable for command lists that draw before any moveto.
            None => {
                let idx = self.vertices.insert(at);
                self.subpath_start_vertex = Some(idx);
                idx
            }
        }
    }

    fn push_segment(&mut self, segment: Segment) {
        self.current_loop.push(self.segments.len());
        self.segments.push(segment);
    }

    fn flush_loop(&mut self) {
        if !self.current_loop.is_empty() {
            self.loops.push(std::mem::take(&mut self.current_loop));
        }
    }

    fn finish(mut self, winding_rule: WindingRule) -> VectorNetwork {
        self.flush_loop();
        VectorNetwork::from_parts(
            self.vertices.into_vertices(),
            self.segments,
            self.loops,
            winding_rule,
        )
    }
}
