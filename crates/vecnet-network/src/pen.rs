// Per-command translation from absolute path commands to network edits.
//
// `Pen::step` is a pure function of the pen state and one command; the builder folds it over the
// command list and applies the resulting strokes to its vertex/segment tables.

use crate::geom::{Point, Vector, point};
use crate::vertex_table::VERTEX_TOLERANCE;
use vecnet_path::{AbsoluteCommand, CommandArgs, CommandKind};

const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Drawing state carried from one command to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub current: Point,
    pub subpath_start: Point,
    /// Last cubic second control point (after `C`/`S`) or quadratic control point (after
    /// `Q`/`T`); only meaningful together with `last_kind`.
    pub last_control: Point,
    pub last_kind: Option<CommandKind>,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            current: Point::origin(),
            subpath_start: Point::origin(),
            last_control: Point::origin(),
            last_kind: None,
        }
    }
}

/// What a single command contributes to the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Start a new subpath whose first vertex is `at`.
    Move { at: Point },
    /// One segment; `tangents` is `None` for a straight line.
    Edge {
        from: Point,
        to: Point,
        tangents: Option<(Vector, Vector)>,
    },
    /// End the subpath. `from` is set when the pen is away from the subpath start and a closing
    /// straight segment back to it is needed.
    Close { from: Option<Point> },
}

impl Pen {
    pub fn step(self, cmd: &AbsoluteCommand) -> (Pen, Stroke) {
        let from = self.current;
        let mut next = Pen {
            last_kind: Some(cmd.kind()),
            ..self
        };

        let stroke = match cmd.args {
            CommandArgs::MoveTo { x, y } => {
                let at = point(x, y);
                next.current = at;
                next.subpath_start = at;
                Stroke::Move { at }
            }
            CommandArgs::LineTo { x, y } => self.line(&mut next, point(x, y)),
            CommandArgs::HorizontalLineTo { x } => self.line(&mut next, point(x, from.y)),
            CommandArgs::VerticalLineTo { y } => self.line(&mut next, point(from.x, y)),
            CommandArgs::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let to = point(x, y);
                let c2 = point(x2, y2);
                next.current = to;
                next.last_control = c2;
                Stroke::Edge {
                    from,
                    to,
                    tangents: Some((point(x1, y1) - from, c2 - to)),
                }
            }
            CommandArgs::SmoothCurveTo { x2, y2, x, y } => {
                let to = point(x, y);
                let c2 = point(x2, y2);
                let c1 = if matches!(
                    self.last_kind,
                    Some(CommandKind::CurveTo | CommandKind::SmoothCurveTo)
                ) {
                    reflect(self.last_control, from)
                } else {
                    from
                };
                next.current = to;
                next.last_control = c2;
                Stroke::Edge {
                    from,
                    to,
                    tangents: Some((c1 - from, c2 - to)),
                }
            }
            CommandArgs::QuadraticCurveTo { x1, y1, x, y } => {
                let to = point(x, y);
                let control = point(x1, y1);
                next.current = to;
                next.last_control = control;
                Stroke::Edge {
                    from,
                    to,
                    tangents: Some(raise_quadratic(from, control, to)),
                }
            }
            CommandArgs::SmoothQuadraticCurveTo { x, y } => {
                let to = point(x, y);
                let control = if matches!(
                    self.last_kind,
                    Some(CommandKind::QuadraticCurveTo | CommandKind::SmoothQuadraticCurveTo)
                ) {
                    reflect(self.last_control, from)
                } else {
                    from
                };
                next.current = to;
                next.last_control = control;
                Stroke::Edge {
                    from,
                    to,
                    tangents: Some(raise_quadratic(from, control, to)),
                }
            }
            CommandArgs::EllipticalArc {
                rx, ry, sweep, x, y, ..
            } => {
                let to = point(x, y);
                next.current = to;
                Stroke::Edge {
                    from,
                    to,
                    tangents: arc_tangents(from, to, rx, ry, sweep),
                }
            }
            CommandArgs::ClosePath => {
                let start = self.subpath_start;
                let away = (from.x - start.x).abs() > VERTEX_TOLERANCE
                    || (from.y - start.y).abs() > VERTEX_TOLERANCE;
                next.current = start;
                Stroke::Close {
                    from: away.then_some(from),
                }
            }
        };

        (next, stroke)
    }

    fn line(self, next: &mut Pen, to: Point) -> Stroke {
        next.current = to;
        Stroke::Edge {
            from: self.current,
            to,
            tangents: None,
        }
    }
}

/// Mirror of `control` through `about`, i.e. `2 * about - control`.
fn reflect(control: Point, about: Point) -> Point {
    point(2.0 * about.x - control.x, 2.0 * about.y - control.y)
}

/// Exact quadratic-to-cubic degree elevation, as tangents relative to each endpoint.
fn raise_quadratic(from: Point, control: Point, to: Point) -> (Vector, Vector) {
    ((control - from) * TWO_THIRDS, (control - to) * TWO_THIRDS)
}

/// One-cubic approximation of an elliptical arc.
///
/// This is not the endpoint-to-center arc conversion: both control points sit at 25% and 75% of
/// the chord, pushed sideways by half the smaller radius, on the side picked by the sweep flag.
/// Rotation and the large-arc flag are ignored. A zero radius or a zero-length chord gives a
/// straight segment.
fn arc_tangents(from: Point, to: Point, rx: f64, ry: f64, sweep: bool) -> Option<(Vector, Vector)> {
    if !(rx > 0.0 && ry > 0.0) {
        return None;
    }

    let chord = to - from;
    let length = chord.length();
    if length == 0.0 {
        tracing::warn!(
            x = to.x,
            y = to.y,
            "arc endpoints coincide; emitting a straight segment"
        );
        return None;
    }

    let perpendicular = Vector::new(-chord.y / length, chord.x / length);
    let bulge = rx.min(ry) * 0.5 * if sweep { 1.0 } else { -1.0 };
    let offset = perpendicular * bulge;

    let c1 = from + chord * 0.25 + offset;
    let c2 = from + chord * 0.75 + offset;
    Some((c1 - from, c2 - to))
}
