//! A lexically-scoped symbol table: shadowing on `define`, explicit
//! `update` with or without scope-local shadowing, and pop-on-`escape`.
//!
//! Intended for semantic-analysis passes built on top of a parse tree,
//! not used by the matching engine itself, but sharing its discipline of
//! explicit, value-typed scope management.
use std::collections::HashMap;

/// One binding on a name's shadow stack: the scope level it was pushed at,
/// and the bound value.
struct Binding<Value> {
    level: usize,
    value: Value,
}

/// A scope's bookkeeping: which names it introduced via `define`, and
/// which names it shadowed via `update(..., keep: false)`, both popped
/// when the scope is escaped.
#[derive(Default)]
struct Scope {
    defined: Vec<String>,
    updated: Vec<String>,
}

/// A scoped symbol table mapping names to values of type `Value`.
pub struct SymTable<Value> {
    table: HashMap<String, Vec<Binding<Value>>>,
    scopes: Vec<Scope>,
}

impl<Value> Default for SymTable<Value> {
    fn default() -> Self {
        SymTable {
            table: HashMap::new(),
            scopes: vec![Scope::default()],
        }
    }
}

impl<Value> SymTable<Value> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current scope depth; the outermost scope is 0.
    pub fn level(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Push a new, empty scope.
    pub fn enter(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Define `name` in the current scope, shadowing any outer binding.
    ///
    /// Returns `false` (and does nothing) if `name` is already defined in
    /// this same scope; redefinition within a scope is rejected.
    pub fn define(&mut self, name: &str, value: Value) -> bool {
        if self.defined_same_scope(name) {
            return false;
        }
        let level = self.level();
        self.table
            .entry(name.to_string())
            .or_default()
            .push(Binding { level, value });
        self.scopes
            .last_mut()
            .expect("at least one scope always present")
            .defined
            .push(name.to_string());
        true
    }

    /// Mutate `name`'s binding.
    ///
    /// Returns `false` if `name` is undefined. If the existing binding is
    /// in an outer scope and `keep` is `false`, a new shadow entry is
    /// pushed at the current scope, popped again on `escape()`. If `keep`
    /// is `true`, the existing binding is mutated in place regardless of
    /// which scope owns it, and the change survives `escape()`.
    pub fn update(&mut self, name: &str, value: Value, keep: bool) -> bool {
        let current_level = self.level();
        let tracked_in_current_scope = {
            let scope = self
                .scopes
                .last()
                .expect("at least one scope always present");
            scope.defined.iter().any(|n| n == name) || scope.updated.iter().any(|n| n == name)
        };
        let Some(stack) = self.table.get_mut(name) else {
            return false;
        };
        let Some(top) = stack.last_mut() else {
            return false;
        };
        if keep || top.level == current_level {
            top.value = value;
            if !keep && top.level == current_level && !tracked_in_current_scope {
                self.scopes
                    .last_mut()
                    .expect("at least one scope always present")
                    .updated
                    .push(name.to_string());
            }
            true
        } else {
            stack.push(Binding {
                level: current_level,
                value,
            });
            self.scopes
                .last_mut()
                .expect("at least one scope always present")
                .updated
                .push(name.to_string());
            true
        }
    }

    /// The innermost binding for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.table
            .get(name)
            .and_then(|stack| stack.last())
            .map(|binding| &binding.value)
    }

    /// Whether `name`'s innermost binding lives in the current scope.
    pub fn defined_same_scope(&self, name: &str) -> bool {
        self.table
            .get(name)
            .and_then(|stack| stack.last())
            .map(|binding| binding.level == self.level())
            .unwrap_or(false)
    }

    /// Pop the current scope, undoing every `define` and shadowing
    /// `update` performed in it. Mutations made with `update(..., keep:
    /// true)` are not undone.
    pub fn escape(&mut self) {
        debug_assert!(self.scopes.len() > 1, "escape() with no matching enter()");
        let scope = self.scopes.pop().expect("escape() with no matching enter()");
        for name in scope.defined.iter().chain(scope.updated.iter()) {
            if let Some(stack) = self.table.get_mut(name) {
                stack.pop();
                if stack.is_empty() {
                    self.table.remove(name);
                }
            }
        }
    }

    /// Names and values defined in the current scope, in insertion order.
    pub fn local_definitions(&self) -> Vec<(String, &Value)> {
        let scope = self.scopes.last().expect("at least one scope always present");
        scope
            .defined
            .iter()
            .filter_map(|name| self.lookup(name).map(|v| (name.clone(), v)))
            .collect()
    }

    /// Names updated (with a scope-local shadow) in the current scope, in
    /// insertion order.
    pub fn local_updates(&self) -> Vec<(String, &Value)> {
        let scope = self.scopes.last().expect("at least one scope always present");
        scope
            .updated
            .iter()
            .filter_map(|name| self.lookup(name).map(|v| (name.clone(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_enter_escape() {
        let mut table: SymTable<i32> = SymTable::new();
        table.define("x", 1);
        table.enter();
        assert_eq!(table.lookup("x"), Some(&1));
        table.escape();
        assert_eq!(table.lookup("x"), Some(&1));
    }

    #[test]
    fn shadowing_and_unshadowing() {
        let mut table: SymTable<i32> = SymTable::new();
        table.enter();
        table.define("x", 1);
        table.enter();
        assert!(!table.defined_same_scope("x"));
        table.define("x", 2);
        assert!(table.defined_same_scope("x"));
        assert_eq!(table.lookup("x"), Some(&2));
        table.escape();
        assert_eq!(table.lookup("x"), Some(&1));
        table.escape();
        assert_eq!(table.lookup("x"), None);
    }

    #[test]
    fn redefinition_in_same_scope_is_rejected() {
        let mut table: SymTable<i32> = SymTable::new();
        assert!(table.define("x", 1));
        assert!(!table.define("x", 2));
        assert_eq!(table.lookup("x"), Some(&1));
    }

    #[test]
    fn update_without_keep_shadows_and_unwinds() {
        let mut table: SymTable<i32> = SymTable::new();
        table.define("x", 1);
        table.enter();
        assert!(table.update("x", 2, false));
        assert_eq!(table.lookup("x"), Some(&2));
        table.escape();
        assert_eq!(table.lookup("x"), Some(&1));
    }

    #[test]
    fn update_with_keep_persists_past_escape() {
        let mut table: SymTable<i32> = SymTable::new();
        table.define("x", 1);
        table.enter();
        assert!(table.update("x", 2, true));
        table.escape();
        assert_eq!(table.lookup("x"), Some(&2));
    }

    #[test]
    fn update_unknown_name_fails() {
        let mut table: SymTable<i32> = SymTable::new();
        assert!(!table.update("missing", 1, false));
    }

    #[test]
    fn local_definitions_snapshot() {
        let mut table: SymTable<i32> = SymTable::new();
        table.define("x", 1);
        table.define("y", 2);
        let locals = table.local_definitions();
        assert_eq!(
            locals,
            vec![("x".to_string(), &1), ("y".to_string(), &2)]
        );
    }
}
