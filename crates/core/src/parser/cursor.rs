use regex::Captures;

use crate::patterns::{PatternKind, PatternTable};

#[derive(Debug)]
enum Slot<'s> {
    Unsearched,
    Found(Captures<'s>),
    /// Nothing further in the text; never searched again
    Exhausted,
}

/// The latest match of every pattern, re-searched only once the scan passes it
#[derive(Debug)]
pub struct MatchCursors<'s> {
    source: &'s str,
    table: &'static PatternTable,
    slots: Vec<Slot<'s>>,
}

impl<'s> MatchCursors<'s> {
    pub fn new(source: &'s str, table: &'static PatternTable) -> Self {
        let slots = PatternKind::ALL.iter().map(|_| Slot::Unsearched).collect();
        Self {
            source,
            table,
            slots,
        }
    }

    /// Never report `kind` in this run
    pub fn disable(&mut self, kind: PatternKind) {
        self.slots[kind.index()] = Slot::Exhausted;
    }

    /// Earliest match starting at or after `pos`, ties going to the
    /// higher-priority pattern
    pub fn advance(&mut self, pos: usize) -> Option<(PatternKind, &Captures<'s>)> {
        let table = self.table;
        let mut best: Option<(PatternKind, usize)> = None;

        for (kind, regex) in table.iter() {
            let slot = &mut self.slots[kind.index()];

            let stale = match slot {
                Slot::Unsearched => true,
                Slot::Found(caps) => caps.get_match().start() < pos,
                Slot::Exhausted => false,
            };
            if stale {
                *slot = match regex.captures_at(self.source, pos) {
                    Some(caps) => Slot::Found(caps),
                    None => Slot::Exhausted,
                };
            }

            if let Slot::Found(caps) = slot {
                let start = caps.get_match().start();
                if best.is_none_or(|(_, best_start)| start < best_start) {
                    best = Some((kind, start));
                }
            }
        }

        let (kind, _) = best?;
        match &self.slots[kind.index()] {
            Slot::Found(caps) => Some((kind, caps)),
            _ => None,
        }
    }
}
