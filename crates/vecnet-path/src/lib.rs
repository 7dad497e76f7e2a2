#![forbid(unsafe_code)]

//! SVG path data parsing.
//!
//! [`parse`] turns a path `d` string into [`PathCommand`]s exactly as written (relative commands
//! keep their offsets); [`make_absolute`] resolves them against the running current point.
//!
//! ```
//! let commands = vecnet_path::parse_absolute("m10 10 h5 v5 z").unwrap();
//! let ends: Vec<_> = commands.iter().map(|c| c.end()).collect();
//! assert_eq!(ends, [(10.0, 10.0), (15.0, 10.0), (15.0, 15.0), (10.0, 10.0)]);
//! ```

mod absolute;
pub mod command;
pub mod error;
mod parser;

pub use absolute::{make_absolute, parse_absolute};
pub use command::{AbsoluteCommand, CommandArgs, CommandKind, PathCommand};
pub use error::{Expectation, GrammarError, Result};
pub use parser::parse;
