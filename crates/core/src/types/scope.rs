use std::collections::BTreeMap;
use std::rc::Rc;

use super::binding::Binding;
use super::origin::Origin;

/// Identifiers visible at a cursor, keyed by name
///
/// Ordering by name carries no meaning beyond making output deterministic.
pub type Bindings = BTreeMap<String, Binding>;

/// All identifiers visible at one lexical nesting level
///
/// Names are shared between frames; copying a frame never copies name text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFrame {
    names: BTreeMap<Rc<str>, Origin>,
}

impl ScopeFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` in this frame, shadowing any earlier binding of it
    pub fn bind(&mut self, name: &str, origin: Origin) {
        match self.names.get_mut(name) {
            Some(existing) => *existing = origin,
            None => {
                self.names.insert(Rc::from(name), origin);
            }
        }
    }

    /// A plain nested block: an independent copy of this frame
    pub fn child(&self) -> Self {
        self.clone()
    }

    /// A function body: everything inherited is captured as an upvalue
    pub fn function_child(&self) -> Self {
        let names = self
            .names
            .keys()
            .map(|name| (Rc::clone(name), Origin::Upvalue))
            .collect();
        Self { names }
    }

    pub fn origin(&self, name: &str) -> Option<Origin> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Origin)> {
        self.names.iter().map(|(name, origin)| (&**name, *origin))
    }

    pub fn into_bindings(self) -> Bindings {
        self.names
            .into_iter()
            .map(|(name, origin)| (name.to_string(), Binding::new(&*name, origin)))
            .collect()
    }
}
