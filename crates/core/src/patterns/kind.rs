use serde::{Deserialize, Serialize};
use std::fmt;

/// The lexical constructs the scanner races against each other
///
/// Declaration order is the tie-break order: when two patterns match at the
/// same offset the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// `for i = 1, n do`
    ForIncremental,
    /// `for k, v in pairs(t) do`
    ForIterator,
    /// `local function name(args)`
    LocalFunction,
    /// `function name(args)` or an anonymous `function(args)`
    Function,
    /// `function obj:name(args)`
    Method,
    /// `do`, `then`, `repeat`
    BlockStart,
    /// `end`, `until`
    BlockEnd,
    /// `else`, `elseif`; only searched when `branch_scopes` is on
    Branch,
    /// `local a, b`
    Locals,
    /// `--[==[`, must precede `Comment`
    LongComment,
    Comment,
    String,
    /// `[==[`
    LongString,
}

impl PatternKind {
    pub const COUNT: usize = 13;

    pub const ALL: [PatternKind; Self::COUNT] = [
        PatternKind::ForIncremental,
        PatternKind::ForIterator,
        PatternKind::LocalFunction,
        PatternKind::Function,
        PatternKind::Method,
        PatternKind::BlockStart,
        PatternKind::BlockEnd,
        PatternKind::Branch,
        PatternKind::Locals,
        PatternKind::LongComment,
        PatternKind::Comment,
        PatternKind::String,
        PatternKind::LongString,
    ];

    /// Position in the priority order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::ForIncremental => "for-incremental",
            PatternKind::ForIterator => "for-iterator",
            PatternKind::LocalFunction => "local-function",
            PatternKind::Function => "function",
            PatternKind::Method => "method",
            PatternKind::BlockStart => "block-start",
            PatternKind::BlockEnd => "block-end",
            PatternKind::Branch => "branch",
            PatternKind::Locals => "locals",
            PatternKind::LongComment => "long-comment",
            PatternKind::Comment => "comment",
            PatternKind::String => "string",
            PatternKind::LongString => "long-string",
        }
    }

    /// Whether the match opens a region whose interior is never scanned
    pub fn is_skip_region(self) -> bool {
        matches!(
            self,
            PatternKind::LongComment
                | PatternKind::Comment
                | PatternKind::String
                | PatternKind::LongString
        )
    }

    pub(crate) fn source(self) -> &'static str {
        match self {
            PatternKind::ForIncremental => r"(?s)\bfor\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*=.*?\bdo\b",
            PatternKind::ForIterator => {
                r"(?s)\bfor\s+((?:[a-zA-Z_][a-zA-Z0-9_]*|\s*,\s*)+)\s*in\b.*?\bdo\b"
            }
            PatternKind::LocalFunction => {
                r"\blocal\s+function\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(\s*((?:[a-zA-Z_][a-zA-Z0-9_]*|\.\.\.|\s*,\s*)*)\s*\)"
            }
            PatternKind::Function => {
                r"\bfunction(?:\s+[a-zA-Z0-9._]*)?\s*\(\s*((?:[a-zA-Z_][a-zA-Z0-9_]*|\.\.\.|\s*,\s*)*)\s*\)"
            }
            PatternKind::Method => {
                r"\bfunction\s+[a-zA-Z0-9._]+:[a-zA-Z0-9_]+\s*\(\s*((?:[a-zA-Z_][a-zA-Z0-9_]*|\.\.\.|\s*,\s*)*)\s*\)"
            }
            PatternKind::BlockStart => r"\b(?:do|then|repeat)\b",
            PatternKind::BlockEnd => r"\b(?:end|until)\b",
            PatternKind::Branch => r"\b(?:elseif|else)\b",
            PatternKind::Locals => r"\blocal\s+((?:[a-zA-Z_][a-zA-Z0-9_]*|\s*,\s*)+)\b",
            PatternKind::LongComment => r"--\[(=*)\[",
            PatternKind::Comment => r"--",
            PatternKind::String => r#"["']"#,
            PatternKind::LongString => r"\[(=*)\[",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
