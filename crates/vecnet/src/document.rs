//! Attribute scanning of SVG input.
//!
//! This is a regex scan over the raw text, not an XML parse: it finds `<path d="...">` values and
//! a handful of root-level attributes wherever they appear.

use crate::paint::PaintStyle;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn path_data_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<path[^>]*\sd=["']([^"']+)["'][^>]*/?>"#).expect("valid regex")
    })
}

fn view_box_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)viewBox=["']([^"']+)["']"#).expect("valid regex"))
}

fn view_box_separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,]+").expect("valid regex"))
}

// `width`/`height` only as whole attribute names, so `stroke-width` never counts.
fn width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)width=["'](\d+(?:\.\d+)?)["']"#).expect("valid regex")
    })
}

fn height_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|\s)height=["'](\d+(?:\.\d+)?)["']"#).expect("valid regex")
    })
}

fn stroke_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)stroke=["']([^"']*)["']"#).expect("valid regex"))
}

fn fill_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)fill=["']([^"']*)["']"#).expect("valid regex"))
}

fn stroke_width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)stroke-width=["']([^"']+)["']"#).expect("valid regex"))
}

fn leading_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntrinsicSize {
    pub width: f64,
    pub height: f64,
}

impl IntrinsicSize {
    pub const DEFAULT: IntrinsicSize = IntrinsicSize {
        width: 24.0,
        height: 24.0,
    };
}

/// Everything the importer needs to know about its `svg` input.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSource {
    /// Path `d` strings in document order.
    pub paths: Vec<String>,
    pub intrinsic_size: Option<IntrinsicSize>,
    pub style: PaintStyle,
    pub stroke_width: Option<f64>,
}

impl SvgSource {
    /// Input whose trimmed text starts with `<` is scanned as a document; anything else is one
    /// path `d` string, drawn as a stroke.
    pub fn from_input(input: &str) -> Self {
        if is_document(input) {
            return Self::scan(input);
        }
        Self {
            paths: vec![input.to_string()],
            intrinsic_size: None,
            style: PaintStyle::Stroke,
            stroke_width: None,
        }
    }

    pub fn scan(document: &str) -> Self {
        let source = Self {
            paths: path_data(document),
            intrinsic_size: intrinsic_size(document),
            style: detect_style(document),
            stroke_width: stroke_width(document),
        };
        tracing::debug!(
            paths = source.paths.len(),
            style = ?source.style,
            size = ?source.intrinsic_size,
            stroke_width = ?source.stroke_width,
            "scanned svg document"
        );
        source
    }

    pub fn size_or_default(&self) -> IntrinsicSize {
        self.intrinsic_size.unwrap_or(IntrinsicSize::DEFAULT)
    }
}

pub fn is_document(input: &str) -> bool {
    input.trim_start().starts_with('<')
}

pub fn path_data(document: &str) -> Vec<String> {
    path_data_regex()
        .captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `viewBox` width/height when it has at least four numeric parts, else a `width` + `height`
/// attribute pair.
pub fn intrinsic_size(document: &str) -> Option<IntrinsicSize> {
    if let Some(caps) = view_box_regex().captures(document) {
        let raw = caps.get(1).map_or("", |m| m.as_str());
        match parse_view_box(raw) {
            Some(size) => return Some(size),
            None => tracing::warn!(view_box = raw, "unparseable viewBox; trying width/height"),
        }
    }

    let width = attribute_number(width_regex(), document)?;
    let height = attribute_number(height_regex(), document)?;
    Some(IntrinsicSize { width, height })
}

fn parse_view_box(raw: &str) -> Option<IntrinsicSize> {
    let parts: Vec<&str> = view_box_separator_regex().split(raw.trim()).collect();
    if parts.len() < 4 {
        return None;
    }
    let width = parse_number(parts[2])?;
    let height = parse_number(parts[3])?;
    Some(IntrinsicSize { width, height })
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn attribute_number(re: &Regex, document: &str) -> Option<f64> {
    re.captures(document)?.get(1)?.as_str().parse().ok()
}

/// `Both` when a non-`none` stroke is present and either a non-`none` fill is present or no
/// `fill="none"` is; `Stroke` for any other stroked document; `Fill` otherwise.
pub fn detect_style(document: &str) -> PaintStyle {
    let painted = |re: &Regex| {
        re.captures_iter(document)
            .filter_map(|caps| caps.get(1))
            .any(|m| !starts_with_none(m.as_str()))
    };
    let has_stroke = painted(stroke_regex());
    let has_fill = painted(fill_regex());
    let has_fill_none = fill_regex()
        .captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .any(|m| m.as_str().eq_ignore_ascii_case("none"));

    if has_stroke && (has_fill || !has_fill_none) {
        PaintStyle::Both
    } else if has_stroke {
        PaintStyle::Stroke
    } else {
        PaintStyle::Fill
    }
}

fn starts_with_none(value: &str) -> bool {
    value
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("none"))
}

/// The first `stroke-width` attribute, read like a CSS length (`"2px"` is `2`).
pub fn stroke_width(document: &str) -> Option<f64> {
    let raw = stroke_width_regex().captures(document)?.get(1)?.as_str();
    leading_number(raw)
}

fn leading_number(raw: &str) -> Option<f64> {
    leading_number_regex()
        .captures(raw)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}
