//! Lua scope scanning by racing lexical patterns against the source

pub mod cursor;
pub mod outcome;
pub mod scanner;
pub mod scope_stack;
pub mod skip;

// Re-export commonly used items
pub use outcome::{HaltReason, RegionKind, ScanOutcome, Step};
pub use scanner::Scanner;
pub use scope_stack::ScopeStack;
