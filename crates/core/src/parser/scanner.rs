use regex::Captures;
use tracing::{debug, trace};

use super::cursor::MatchCursors;
use super::outcome::{HaltReason, RegionKind, ScanOutcome, Step};
use super::scope_stack::ScopeStack;
use super::skip::{skip_line_comment, skip_long_bracket, skip_quoted};
use crate::{
    config::ScanConfig,
    patterns::{PatternKind, PatternTable, extract_names},
    types::{Bindings, Origin},
};

/// Finds the Lua identifiers in scope at a byte offset
///
/// A scanner only borrows the source; every [`Scanner::run`] starts from a
/// fresh scope stack and match cache, so repeated runs are independent.
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    source: &'s str,
    table: &'static PatternTable,
    max_steps: Option<usize>,
    branch_scopes: bool,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            table: PatternTable::global(),
            max_steps: None,
            branch_scopes: false,
        }
    }

    pub fn with_config(source: &'s str, config: &ScanConfig) -> Self {
        Self {
            max_steps: config.max_steps,
            branch_scopes: config.branch_scopes,
            ..Self::new(source)
        }
    }

    /// Bindings visible at `cursor`
    pub fn run(&self, cursor: usize) -> Bindings {
        self.run_with_outcome(cursor).bindings
    }

    pub fn run_with_outcome(&self, cursor: usize) -> ScanOutcome {
        let mut cursors = MatchCursors::new(self.source, self.table);
        if !self.branch_scopes {
            cursors.disable(PatternKind::Branch);
        }
        let mut stack = ScopeStack::new();
        let mut pos = 0;
        let mut steps = 0;

        let halt = loop {
            if self.max_steps.is_some_and(|max| steps >= max) {
                break HaltReason::StepLimit;
            }

            let Some((kind, caps)) = cursors.advance(pos) else {
                break HaltReason::Exhausted;
            };
            let start = caps.get_match().start();
            if start >= cursor {
                break HaltReason::ReachedCursor;
            }

            debug!("Matched {} at char {}", kind, start);
            steps += 1;

            match self.dispatch(kind, caps, &mut stack) {
                Step::Resume(next) => {
                    debug_assert!(next > start, "{kind} did not advance past {start}");
                    pos = next;
                }
                Step::Halt(reason) => break reason,
            }
        };

        trace!(
            "Scan stopped ({}) after {} matches at depth {}",
            halt,
            steps,
            stack.depth()
        );

        ScanOutcome {
            bindings: stack.into_top().into_bindings(),
            halt,
            steps,
        }
    }

    fn dispatch(&self, kind: PatternKind, caps: &Captures<'s>, stack: &mut ScopeStack) -> Step {
        let end = caps.get_match().end();

        match kind {
            PatternKind::ForIncremental => {
                stack.push_block();
                stack.bind(group(caps, 1), Origin::ForIndex);
            }
            PatternKind::ForIterator => {
                stack.push_block();
                stack.bind_all(extract_names(group(caps, 1)), Origin::ForIndex);
            }
            PatternKind::LocalFunction => {
                stack.bind(group(caps, 1), Origin::Local);
                stack.push_function();
                stack.bind_all(extract_names(group(caps, 2)), Origin::Parameter);
            }
            PatternKind::Function => {
                stack.push_function();
                stack.bind_all(extract_names(group(caps, 1)), Origin::Parameter);
            }
            PatternKind::Method => {
                stack.push_function();
                stack.bind("self", Origin::SelfRef);
                stack.bind_all(extract_names(group(caps, 1)), Origin::Parameter);
            }
            PatternKind::BlockStart => stack.push_block(),
            PatternKind::BlockEnd => {
                stack.pop();
            }
            PatternKind::Branch => {
                // `elseif` leaves reopening to its `then`
                stack.pop();
                if group(caps, 0) == "else" {
                    stack.push_block();
                }
            }
            PatternKind::Locals => {
                stack.bind_all(extract_names(group(caps, 1)), Origin::Local);
            }
            PatternKind::LongComment => {
                return skip_long_bracket(self.source, end, group(caps, 1), RegionKind::LongComment);
            }
            PatternKind::Comment => return skip_line_comment(self.source, end),
            PatternKind::String => {
                let quote = group(caps, 0).chars().next().unwrap_or('"');
                return skip_quoted(self.source, end, quote);
            }
            PatternKind::LongString => {
                return skip_long_bracket(self.source, end, group(caps, 1), RegionKind::LongString);
            }
        }

        Step::Resume(end)
    }
}

fn group<'s>(caps: &Captures<'s>, i: usize) -> &'s str {
    caps.get(i).map_or("", |m| m.as_str())
}
