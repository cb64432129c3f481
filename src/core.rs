//! The parsing engine: rule identity, parse context, parse trees, and the
//! packrat protocol that ties them together.
//!
//! A [`Rule`] describes *how* to match, by implementing [`Rule::build`].
//! Nothing in `build` tags or memoizes its own result; that is the job of
//! [`parse_rule`], the single call site every combinator uses to invoke a
//! child rule. This split is what lets a named rule (declared with
//! `define_rule!`) give a combinator expression its own identity without
//! the expression's `build` needing to know what name it was given.
use std::any::{type_name, TypeId};
use std::rc::Rc;

use crate::memo::MemoTable;

/// A stable, globally unique identity for a rule type.
///
/// Two rule compositions that are the same Rust type (e.g. two occurrences
/// of `Seq<(Char<b'a'>, Char<b'b'>)>` in different places in a grammar)
/// share a `RuleId`; structurally distinct compositions never collide. The
/// `name` field is captured once for the debug renderer; it plays no part
/// in equality or hashing.
#[derive(Clone, Copy)]
pub struct RuleId {
    type_id: TypeId,
    name: &'static str,
}

impl RuleId {
    pub fn of<R: Rule>() -> Self {
        RuleId {
            type_id: TypeId::of::<R>(),
            name: type_name::<R>(),
        }
    }

    /// The rule's raw type name, as captured by `std::any::type_name`.
    ///
    /// Not guaranteed stable across compiler versions; callers that need a
    /// readable label should go through [`crate::display`] rather than
    /// depend on this string's exact form.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for RuleId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}
impl Eq for RuleId {}

impl std::hash::Hash for RuleId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl std::fmt::Debug for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// An immutable node of a parse tree: a source slice tagged with the rule
/// that produced it, plus its ordered children.
///
/// Nodes are reference-counted since a single memoized match may be shared
/// by more than one parent.
pub struct ParseTree<'t> {
    parsed_region: &'t [u8],
    instance: RuleId,
    subtrees: Vec<Rc<ParseTree<'t>>>,
}

impl<'t> ParseTree<'t> {
    /// Build a tree node directly. Used by [`parse_rule`] and by
    /// [`crate::compress::compress`], which constructs fresh nodes for the
    /// rules it keeps.
    pub(crate) fn new(
        parsed_region: &'t [u8],
        instance: RuleId,
        subtrees: Vec<Rc<ParseTree<'t>>>,
    ) -> Self {
        ParseTree {
            parsed_region,
            instance,
            subtrees,
        }
    }

    pub fn parsed_region(&self) -> &'t [u8] {
        self.parsed_region
    }

    pub fn instance(&self) -> RuleId {
        self.instance
    }

    pub fn subtrees(&self) -> &[Rc<ParseTree<'t>>] {
        &self.subtrees
    }
}

/// The position and shared resources a rule matches against.
///
/// `ParseContext` is a small, cheaply cloned value. It carries no hidden
/// mutable state of its own: the running total some descriptions of this
/// algorithm keep as a long-lived mutable `accumulator` field is instead
/// threaded as a local variable inside each combinator's `build`, via
/// repeated calls to [`ParseContext::next`].
#[derive(Clone)]
pub struct ParseContext<'t> {
    table: Rc<MemoTable<'t>>,
    text: &'t [u8],
    start_position: usize,
    accumulator: usize,
}

impl<'t> ParseContext<'t> {
    /// A fresh context at the start of `text`, backed by a new memo table.
    pub fn new(text: &'t [u8]) -> Self {
        ParseContext {
            table: Rc::new(MemoTable::new()),
            text,
            start_position: 0,
            accumulator: 0,
        }
    }

    pub fn text(&self) -> &'t [u8] {
        self.text
    }

    pub fn start_position(&self) -> usize {
        self.start_position
    }

    pub fn accumulator(&self) -> usize {
        self.accumulator
    }

    pub fn table(&self) -> &MemoTable<'t> {
        &self.table
    }

    /// The remaining input starting at this context's position.
    pub fn remaining(&self) -> &'t [u8] {
        &self.text[self.start_position..]
    }

    /// The memo key for `rule` at this context's start position.
    pub fn key(&self, rule: RuleId) -> (usize, RuleId) {
        (self.start_position, rule)
    }

    /// A context positioned just past what this context has already
    /// accumulated, with the accumulator reset to zero.
    ///
    /// Every combinator that advances through a sequence of sub-matches
    /// builds its next step's context by calling `next()` on a context
    /// whose `accumulator` holds the running total consumed so far.
    pub fn next(&self) -> Self {
        debug_assert!(self.start_position + self.accumulator <= self.text.len());
        ParseContext {
            table: Rc::clone(&self.table),
            text: self.text,
            start_position: self.start_position + self.accumulator,
            accumulator: 0,
        }
    }

    /// This context, with `n` more bytes folded into its accumulator.
    pub fn with_accumulated(&self, n: usize) -> Self {
        ParseContext {
            table: Rc::clone(&self.table),
            text: self.text,
            start_position: self.start_position,
            accumulator: self.accumulator + n,
        }
    }
}

/// The raw result of attempting to match a rule: bytes consumed and the
/// already-tagged child trees, or `None` if the rule did not apply.
pub type BuildResult<'t> = Option<(usize, Vec<Rc<ParseTree<'t>>>)>;

/// A composable grammar rule.
///
/// `build` describes the matching logic only; it must not call itself (or
/// any nested rule) directly; nested rules are invoked through
/// [`parse_rule`] so that memoization and identity-tagging stay uniform
/// across the whole algebra. The sole exception is `define_rule!`, whose
/// generated `build` forwards straight to an inner rule's `build` on
/// purpose, so the inner type's identity is never recorded for that call.
pub trait Rule: 'static {
    fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t>;
}

/// Match `R` at `context`, consulting and populating the memo table.
///
/// This is the only place a rule's result is tagged with its `RuleId` and
/// memoized; `R::build` itself never does either. Every combinator calls
/// `parse_rule` for each of its children rather than calling `R::build`
/// directly.
pub fn parse_rule<'t, R: Rule>(context: &ParseContext<'t>) -> Option<Rc<ParseTree<'t>>> {
    let id = RuleId::of::<R>();
    let key = context.key(id);
    if let Some(cached) = context.table().lookup(&key) {
        return cached;
    }
    let result = R::build(context).map(|(length, subtrees)| {
        let start = context.start_position();
        Rc::new(ParseTree::new(
            &context.text()[start..start + length],
            id,
            subtrees,
        ))
    });
    context.table().insert(key, result.clone());
    result
}

/// Match `R` as the next step of a sequence whose accumulator so far is
/// `consumed`, returning the child tree and the new running total.
///
/// Combinators that walk several sub-rules in order (`Seq`, `Plus`,
/// `Asterisk`) build each step's context this way rather than mutating a
/// shared field, keeping `ParseContext` a plain value type throughout.
pub(crate) fn step<'t, R: Rule>(
    base: &ParseContext<'t>,
    consumed: usize,
) -> Option<(Rc<ParseTree<'t>>, usize)> {
    let step_context = base.with_accumulated(consumed).next();
    let tree = parse_rule::<R>(&step_context)?;
    let new_total = consumed + tree.parsed_region().len();
    Some((tree, new_total))
}

/// Parse `text` against top-level rule `R`, starting a fresh memo table.
pub fn parse<R: Rule>(text: &str) -> Option<Rc<ParseTree<'_>>> {
    let context = ParseContext::new(text.as_bytes());
    parse_rule::<R>(&context)
}
