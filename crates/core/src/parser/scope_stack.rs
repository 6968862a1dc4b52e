use crate::types::{Origin, ScopeFrame};
use tracing::debug;

/// Nested binding tables, innermost block on top
///
/// Never empty: the file-level frame at the bottom cannot be popped.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeFrame::new()],
        }
    }

    pub fn push_block(&mut self) {
        let frame = self.top().child();
        self.frames.push(frame);
    }

    pub fn push_function(&mut self) {
        let frame = self.top().function_child();
        self.frames.push(frame);
    }

    /// Close the innermost block; returns false when only the file frame is left
    pub fn pop(&mut self) -> bool {
        if self.frames.len() == 1 {
            debug!("Scope stack underflow; probably an excess `end`");
            return false;
        }
        self.frames.pop();
        true
    }

    pub fn bind(&mut self, name: &str, origin: Origin) {
        self.top_mut().bind(name, origin);
    }

    pub fn bind_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>, origin: Origin) {
        let top = self.top_mut();
        for name in names {
            top.bind(name, origin);
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn top(&self) -> &ScopeFrame {
        // the bottom frame is never popped
        &self.frames[self.frames.len() - 1]
    }

    fn top_mut(&mut self) -> &mut ScopeFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn into_top(mut self) -> ScopeFrame {
        self.frames.pop().unwrap_or_default()
    }
}
