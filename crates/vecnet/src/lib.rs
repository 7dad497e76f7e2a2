#![forbid(unsafe_code)]

//! Import of SVG path data and SVG documents as vector networks.
//!
//! [`import_svg`] is the entry point for a host scene: it scans the input, builds one network per
//! `<path>`, merges them under a single winding rule, and creates, paints, sizes and places a
//! vector node through a [`SceneMutation`] implementation. [`network_from_input`] stops after the
//! merge.
//!
//! ```
//! use vecnet::{ImportOptions, MemoryScene, import_svg};
//!
//! let mut scene = MemoryScene::new();
//! let options = ImportOptions::new(r#"<svg viewBox="0 0 24 24"><path d="M2 2 L22 2 L22 22 Z"/></svg>"#);
//! let imported = import_svg(&mut scene, &options).unwrap();
//! assert_eq!((imported.width, imported.height), (24.0, 24.0));
//! ```

pub mod document;
mod error;
mod import;
pub mod paint;
pub mod scene;

pub use document::{IntrinsicSize, SvgSource};
pub use error::{Error, Result};
pub use import::{
    DEFAULT_NAME, DEFAULT_STROKE_WEIGHT, ImportOptions, ImportedVector, import_svg,
    network_from_input,
};
pub use paint::{PaintStyle, Rgb, Rgba, SolidPaint, StrokeCap, StrokeJoin};
pub use scene::{MemoryScene, NodeKind, NodeSnapshot, SceneError, SceneMutation};

pub use vecnet_network::{
    Region, Segment, Tangent, VERTEX_TOLERANCE, VectorNetwork, Vertex, WindingRule, build,
};
pub use vecnet_path as path;
