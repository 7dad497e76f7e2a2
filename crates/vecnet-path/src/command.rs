/// Semantic command family, independent of absolute/relative spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    ClosePath,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    EllipticalArc,
}

impl CommandKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::MoveTo => "moveto",
            Self::ClosePath => "closepath",
            Self::LineTo => "lineto",
            Self::HorizontalLineTo => "horizontal lineto",
            Self::VerticalLineTo => "vertical lineto",
            Self::CurveTo => "curveto",
            Self::SmoothCurveTo => "smooth curveto",
            Self::QuadraticCurveTo => "quadratic curveto",
            Self::SmoothQuadraticCurveTo => "smooth quadratic curveto",
            Self::EllipticalArc => "elliptical arc",
        }
    }

    /// The absolute (uppercase) command letter.
    pub fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::ClosePath => 'Z',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadraticCurveTo => 'Q',
            Self::SmoothQuadraticCurveTo => 'T',
            Self::EllipticalArc => 'A',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'Z' => Self::ClosePath,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CurveTo,
            'S' => Self::SmoothCurveTo,
            'Q' => Self::QuadraticCurveTo,
            'T' => Self::SmoothQuadraticCurveTo,
            'A' => Self::EllipticalArc,
            _ => return None,
        })
    }
}

/// Numeric fields carried by a command, as written in the path data.
///
/// For relative commands the positional fields are offsets from the current point until
/// [`crate::make_absolute`] rewrites them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandArgs {
    MoveTo {
        x: f64,
        y: f64,
    },
    ClosePath,
    LineTo {
        x: f64,
        y: f64,
    },
    HorizontalLineTo {
        x: f64,
    },
    VerticalLineTo {
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    SmoothCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    SmoothQuadraticCurveTo {
        x: f64,
        y: f64,
    },
    EllipticalArc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
}

impl CommandArgs {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::MoveTo { .. } => CommandKind::MoveTo,
            Self::ClosePath => CommandKind::ClosePath,
            Self::LineTo { .. } => CommandKind::LineTo,
            Self::HorizontalLineTo { .. } => CommandKind::HorizontalLineTo,
            Self::VerticalLineTo { .. } => CommandKind::VerticalLineTo,
            Self::CurveTo { .. } => CommandKind::CurveTo,
            Self::SmoothCurveTo { .. } => CommandKind::SmoothCurveTo,
            Self::QuadraticCurveTo { .. } => CommandKind::QuadraticCurveTo,
            Self::SmoothQuadraticCurveTo { .. } => CommandKind::SmoothQuadraticCurveTo,
            Self::EllipticalArc { .. } => CommandKind::EllipticalArc,
        }
    }

    /// The `x` field, when the command carries one.
    pub fn x(&self) -> Option<f64> {
        match *self {
            Self::MoveTo { x, .. }
            | Self::LineTo { x, .. }
            | Self::HorizontalLineTo { x }
            | Self::CurveTo { x, .. }
            | Self::SmoothCurveTo { x, .. }
            | Self::QuadraticCurveTo { x, .. }
            | Self::SmoothQuadraticCurveTo { x, .. }
            | Self::EllipticalArc { x, .. } => Some(x),
            Self::ClosePath | Self::VerticalLineTo { .. } => None,
        }
    }

    /// The `y` field, when the command carries one.
    pub fn y(&self) -> Option<f64> {
        match *self {
            Self::MoveTo { y, .. }
            | Self::LineTo { y, .. }
            | Self::VerticalLineTo { y }
            | Self::CurveTo { y, .. }
            | Self::SmoothCurveTo { y, .. }
            | Self::QuadraticCurveTo { y, .. }
            | Self::SmoothQuadraticCurveTo { y, .. }
            | Self::EllipticalArc { y, .. } => Some(y),
            Self::ClosePath | Self::HorizontalLineTo { .. } => None,
        }
    }

    /// Shifts every positional field (`x`, `x1`, `x2` by `dx`; `y`, `y1`, `y2` by `dy`).
    /// Radii, rotation and flags are left alone.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::MoveTo {
                x: x + dx,
                y: y + dy,
            },
            Self::ClosePath => Self::ClosePath,
            Self::LineTo { x, y } => Self::LineTo {
                x: x + dx,
                y: y + dy,
            },
            Self::HorizontalLineTo { x } => Self::HorizontalLineTo { x: x + dx },
            Self::VerticalLineTo { y } => Self::VerticalLineTo { y: y + dy },
            Self::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Self::CurveTo {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::SmoothCurveTo { x2, y2, x, y } => Self::SmoothCurveTo {
                x2: x2 + dx,
                y2: y2 + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::QuadraticCurveTo { x1, y1, x, y } => Self::QuadraticCurveTo {
                x1: x1 + dx,
                y1: y1 + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::SmoothQuadraticCurveTo { x, y } => Self::SmoothQuadraticCurveTo {
                x: x + dx,
                y: y + dy,
            },
            Self::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => Self::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x: x + dx,
                y: y + dy,
            },
        }
    }
}

/// One parsed path instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    /// The command letter as written; lowercase means relative.
    pub code: char,
    pub relative: bool,
    pub args: CommandArgs,
}

impl PathCommand {
    pub fn new(code: char, args: CommandArgs) -> Self {
        Self {
            code,
            relative: code.is_ascii_lowercase(),
            args,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.args.kind()
    }

    /// Semantic name, e.g. `"smooth quadratic curveto"`.
    pub fn command(&self) -> &'static str {
        self.kind().name()
    }
}

/// A command after the absolute-coordinate pass.
///
/// `x0`/`y0` is the current point before the command runs and `x`/`y` the point after it, so
/// every command (including `Z`, `H` and `V`) has a concrete start and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsoluteCommand {
    /// Always the uppercase letter.
    pub code: char,
    pub args: CommandArgs,
    pub x0: f64,
    pub y0: f64,
    pub x: f64,
    pub y: f64,
}

impl AbsoluteCommand {
    pub fn kind(&self) -> CommandKind {
        self.args.kind()
    }

    pub fn command(&self) -> &'static str {
        self.kind().name()
    }

    pub fn start(&self) -> (f64, f64) {
        (self.x0, self.y0)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
