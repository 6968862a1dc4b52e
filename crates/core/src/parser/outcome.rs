use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Bindings;

/// Lexical spans the scanner jumps over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    Comment,
    LongComment,
    String,
    LongString,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionKind::Comment => "comment",
            RegionKind::LongComment => "long comment",
            RegionKind::String => "string",
            RegionKind::LongString => "long string",
        };
        f.write_str(name)
    }
}

/// Why a scan stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HaltReason {
    /// No pattern matches in the rest of the text
    Exhausted,
    /// The next match starts at or after the cursor
    ReachedCursor,
    /// A skip region runs to the end of the text
    Unterminated(RegionKind),
    /// The configured `max_steps` was used up
    StepLimit,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaltReason::Exhausted => f.write_str("end of input"),
            HaltReason::ReachedCursor => f.write_str("reached cursor"),
            HaltReason::Unterminated(region) => write!(f, "unterminated {region}"),
            HaltReason::StepLimit => f.write_str("step limit"),
        }
    }
}

/// What a handler tells the scan loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Resume(usize),
    Halt(HaltReason),
}

/// The bindings visible at the cursor plus how the scan ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub bindings: Bindings,
    pub halt: HaltReason,
    /// Number of matches dispatched to a handler
    pub steps: usize,
}
