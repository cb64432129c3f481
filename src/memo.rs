//! The packrat memo table.
//!
//! Keyed by `(start_position, RuleId)`, memoizing both match and no-match
//! outcomes. Backed by `rustc_hash::FxHashMap` rather than the standard
//! library's default hasher: the table sits on every rule's hot path, and
//! the key is a cheap integer/`TypeId` pair where SipHash's DoS resistance
//! buys nothing.
use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::core::{ParseTree, RuleId};

pub type MemoKey = (usize, RuleId);
type MemoValue<'t> = Option<Rc<ParseTree<'t>>>;

pub struct MemoTable<'t> {
    entries: RefCell<FxHashMap<MemoKey, MemoValue<'t>>>,
}

impl<'t> MemoTable<'t> {
    pub fn new() -> Self {
        MemoTable {
            entries: RefCell::new(FxHashMap::default()),
        }
    }

    /// `None` means "no cached entry"; `Some(None)` means "cached failure".
    pub fn lookup(&self, key: &MemoKey) -> Option<MemoValue<'t>> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: MemoKey, value: MemoValue<'t>) {
        self.entries.borrow_mut().insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<'t> Default for MemoTable<'t> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleId;
    use crate::parsers::Any;

    #[test]
    fn miss_then_hit() {
        let table = MemoTable::new();
        let key = (0, RuleId::of::<Any>());
        assert!(table.lookup(&key).is_none());
        table.insert(key, None);
        assert!(matches!(table.lookup(&key), Some(None)));
    }

    #[test]
    fn distinct_positions_distinct_entries() {
        let table = MemoTable::new();
        let id = RuleId::of::<Any>();
        table.insert((0, id), None);
        assert!(table.lookup(&(1, id)).is_none());
    }
}
