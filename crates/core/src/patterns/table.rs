use regex::Regex;
use std::sync::LazyLock;

use super::kind::PatternKind;

/// The compiled pattern set, shared read-only by every scan
#[derive(Debug)]
pub struct PatternTable {
    regexes: Vec<Regex>,
}

static TABLE: LazyLock<PatternTable> = LazyLock::new(PatternTable::compile);

impl PatternTable {
    pub fn global() -> &'static PatternTable {
        &TABLE
    }

    fn compile() -> Self {
        let regexes = PatternKind::ALL
            .iter()
            .map(|kind| Regex::new(kind.source()).expect("built-in pattern must compile"))
            .collect();
        Self { regexes }
    }

    pub fn regex(&self, kind: PatternKind) -> &Regex {
        &self.regexes[kind.index()]
    }

    /// Patterns in priority order
    pub fn iter(&self) -> impl Iterator<Item = (PatternKind, &Regex)> {
        PatternKind::ALL.into_iter().zip(self.regexes.iter())
    }
}
