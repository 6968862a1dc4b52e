//! luascope - find the Lua identifiers in scope at a cursor
//!
//! This crate provides functionality to:
//! - Scan Lua source up to a byte offset without building a syntax tree
//! - Report every local, parameter, for-index, upvalue and `self` visible there
//! - Convert between editor positions and byte offsets
//!
//! ```
//! use luascope_core::{Origin, scan};
//!
//! let source = "local a = 1\nfunction f()\n  local b = a\nend";
//! let cursor = source.find("\nend").unwrap();
//! let bindings = scan(source, cursor);
//!
//! assert_eq!(bindings["a"].origin, Origin::Upvalue);
//! assert_eq!(bindings["b"].origin, Origin::Local);
//! ```
pub mod config;
pub mod error;
pub mod parser;
pub mod patterns;
pub mod types;

use std::path::Path;

// Re-export commonly used types and traits
pub use config::ScanConfig;
pub use error::{Error, Result};
pub use parser::{HaltReason, RegionKind, ScanOutcome, Scanner};
pub use patterns::PatternKind;
pub use types::*;

/// Bindings visible at byte offset `cursor` of `source`
pub fn scan(source: &str, cursor: usize) -> Bindings {
    Scanner::new(source).run(cursor)
}

/// Read a Lua file and scan it, honoring any `.luascope.json` above it
pub fn scan_file(path: &Path, cursor: usize) -> Result<Bindings> {
    let source = std::fs::read_to_string(path)?;
    let config = ScanConfig::discover(path)?;
    Ok(Scanner::with_config(&source, &config).run(cursor))
}
