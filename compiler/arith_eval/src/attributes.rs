//! Per-line node attributes.

use arith_ir::NodeId;

/// Value computed for each parse tree node of one line.
///
/// Indexed by [`NodeId`]. A node has no entry when it was never visited,
/// when it is a token, or when its subtree was evaluated with recording
/// suppressed (the left side of an assignment). Each entry is written at
/// most once.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeTable<V> {
    values: Vec<Option<V>>,
}

impl<V> AttributeTable<V> {
    /// Table for a tree with `len` nodes.
    pub fn new(len: usize) -> Self {
        AttributeTable {
            values: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    pub(crate) fn record(&mut self, id: NodeId, value: V) {
        let slot = &mut self.values[id.index()];
        debug_assert!(slot.is_none(), "attribute for {id:?} recorded twice");
        *slot = Some(value);
    }

    pub fn get(&self, id: NodeId) -> Option<&V> {
        self.values.get(id.index()).and_then(Option::as_ref)
    }

    pub fn is_recorded(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of nodes with a value.
    pub fn recorded_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}
