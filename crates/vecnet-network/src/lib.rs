#![forbid(unsafe_code)]

//! Vector networks built from SVG path data.
//!
//! A network is a flat vertex list, a list of directed segments between those vertices (straight
//! or cubic Bezier, with tangents relative to the endpoints), and regions that group segments into
//! loops under a winding rule.
//!
//! ```
//! use vecnet_network::{WindingRule, build};
//!
//! let network = build("M0,0 L10,0 L10,10 L0,10 Z", WindingRule::EvenOdd).unwrap();
//! assert_eq!(network.vertices.len(), 4);
//! assert_eq!(network.loops().collect::<Vec<_>>(), vec![&[0, 1, 2, 3][..]]);
//! ```

mod builder;
pub mod error;
pub mod geom;
mod model;
pub mod pen;
mod vertex_table;

pub use builder::{build, build_from_commands};
pub use error::{Error, Result};
pub use model::{Region, Segment, Tangent, VectorNetwork, Vertex, WindingRule};
pub use vertex_table::{VERTEX_TOLERANCE, VertexTable};
