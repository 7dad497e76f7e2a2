use serde::{Deserialize, Serialize};

/// Caller-supplied color, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: Some(1.0),
    };

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A single solid fill or stroke paint, `{"type": "SOLID", "color": {...}, "opacity": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SOLID")]
pub struct SolidPaint {
    pub color: Rgb,
    pub opacity: f64,
}

impl SolidPaint {
    pub fn black() -> Self {
        Self::from(Rgba::BLACK)
    }
}

impl From<Rgba> for SolidPaint {
    /// Alpha moves to `opacity`; a missing alpha is fully opaque.
    fn from(c: Rgba) -> Self {
        Self {
            color: Rgb {
                r: c.r,
                g: c.g,
                b: c.b,
            },
            opacity: c.a.unwrap_or(1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeCap {
    #[default]
    None,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

/// How a source draws its shapes, judged from its `stroke`/`fill` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintStyle {
    Fill,
    Stroke,
    Both,
}

impl PaintStyle {
    pub fn fills(self) -> bool {
        matches!(self, Self::Fill | Self::Both)
    }

    pub fn strokes(self) -> bool {
        matches!(self, Self::Stroke | Self::Both)
    }
}
