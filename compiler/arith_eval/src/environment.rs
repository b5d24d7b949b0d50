//! Variable bindings shared across the lines of a program.

use std::fmt;

use arith_ir::Name;
use rustc_hash::FxHashMap;

/// Map from variable name to its current value.
///
/// A single flat scope: every line sees every binding made before it, and
/// rebinding a name overwrites the earlier value.
#[derive(Clone, PartialEq)]
pub struct Environment<V> {
    bindings: FxHashMap<Name, V>,
}

impl<V> Environment<V> {
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `name` to `value`, returning the value it replaces.
    pub fn bind(&mut self, name: Name, value: V) -> Option<V> {
        self.bindings.insert(name, value)
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&V> {
        self.bindings.get(&name)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &V)> {
        self.bindings.iter().map(|(&name, value)| (name, value))
    }
}

impl<V> Default for Environment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Environment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.bindings.iter()).finish()
    }
}
