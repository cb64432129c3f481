//! Sequencing, choice, and repetition combinators.
//!
//! `Seq` and `Ord` are generic over a tuple of rules. Rust has no variadic
//! generics, so each arity from 2 through 8 gets its own `Rule` impl,
//! written out by hand rather than generated by a macro, the same texture
//! this crate's tuple-folding sugar already uses for applicative
//! composition.
use std::marker::PhantomData;
use std::rc::Rc;

use crate::core::{parse_rule, step, BuildResult, ParseContext, ParseTree, Rule};

/// Matches `R1` then `R2` then ... in order; fails if any child fails.
pub struct Seq<T>(PhantomData<T>);

/// Matches the first of `R1, R2, ...` that succeeds; later rules are never
/// tried once an earlier one matches. The winning child is wrapped in a
/// node tagged with this `Ord` instantiation's own identity.
pub struct Ord<T>(PhantomData<T>);

macro_rules! impl_seq {
    ($($r:ident),+) => {
        impl<$($r: Rule),+> Rule for Seq<($($r,)+)> {
            fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
                let mut consumed = 0usize;
                let mut children = Vec::new();
                $(
                    let (tree, total) = step::<$r>(context, consumed)?;
                    children.push(tree);
                    consumed = total;
                )+
                Some((consumed, children))
            }
        }
    };
}

macro_rules! impl_ord {
    ($($r:ident),+) => {
        impl<$($r: Rule),+> Rule for Ord<($($r,)+)> {
            fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
                let start = context.next();
                $(
                    if let Some(tree) = parse_rule::<$r>(&start) {
                        let length = tree.parsed_region().len();
                        return Some((length, vec![tree]));
                    }
                )+
                None
            }
        }
    };
}

impl_seq!(R1, R2);
impl_seq!(R1, R2, R3);
impl_seq!(R1, R2, R3, R4);
impl_seq!(R1, R2, R3, R4, R5);
impl_seq!(R1, R2, R3, R4, R5, R6);
impl_seq!(R1, R2, R3, R4, R5, R6, R7);
impl_seq!(R1, R2, R3, R4, R5, R6, R7, R8);

impl_ord!(R1, R2);
impl_ord!(R1, R2, R3);
impl_ord!(R1, R2, R3, R4);
impl_ord!(R1, R2, R3, R4, R5);
impl_ord!(R1, R2, R3, R4, R5, R6);
impl_ord!(R1, R2, R3, R4, R5, R6, R7);
impl_ord!(R1, R2, R3, R4, R5, R6, R7, R8);

/// Matches `R` if possible; otherwise matches nothing. Never fails.
pub struct Optional<R>(PhantomData<R>);

impl<R: Rule> Rule for Optional<R> {
    fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
        let start = context.next();
        match parse_rule::<R>(&start) {
            Some(tree) => {
                let length = tree.parsed_region().len();
                Some((length, vec![tree]))
            }
            None => Some((0, Vec::new())),
        }
    }
}

/// Matches one or more repetitions of `R`. Fails if zero repetitions match.
pub struct Plus<R>(PhantomData<R>);

impl<R: Rule> Rule for Plus<R> {
    fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
        let mut consumed = 0usize;
        let mut children: Vec<Rc<ParseTree<'_>>> = Vec::new();
        loop {
            match step::<R>(context, consumed) {
                Some((tree, total)) => {
                    children.push(tree);
                    consumed = total;
                }
                None => break,
            }
        }
        if children.is_empty() {
            None
        } else {
            Some((consumed, children))
        }
    }
}

/// Matches zero or more repetitions of `R`. Never fails.
pub struct Asterisk<R>(PhantomData<R>);

impl<R: Rule> Rule for Asterisk<R> {
    fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
        let mut consumed = 0usize;
        let mut children: Vec<Rc<ParseTree<'_>>> = Vec::new();
        while let Some((tree, total)) = step::<R>(context, consumed) {
            children.push(tree);
            consumed = total;
        }
        Some((consumed, children))
    }
}

/// Negative lookahead: succeeds, consuming nothing, iff `R` does not match.
pub struct Not<R>(PhantomData<R>);

impl<R: Rule> Rule for Not<R> {
    fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
        let start = context.next();
        match parse_rule::<R>(&start) {
            Some(_) => None,
            None => Some((0, Vec::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;
    use crate::parsers::{Any, Char};

    type Abb = Seq<(Char<b'a'>, Char<b'b'>, Char<b'b'>)>;

    #[test]
    fn seq_matches_in_order() {
        let tree = parse::<Abb>("abb").expect("abb matches");
        assert_eq!(tree.parsed_region(), b"abb");
        assert_eq!(tree.subtrees().len(), 3);
    }

    #[test]
    fn seq_fails_on_mismatch() {
        assert!(parse::<Abb>("abc").is_none());
    }

    #[test]
    fn ord_tries_in_priority_order() {
        type AbThenBOrC = Seq<(Char<b'a'>, Char<b'b'>, Ord<(Char<b'b'>, Char<b'c'>)>)>;
        let tree = parse::<AbThenBOrC>("abc").expect("abc matches");
        assert_eq!(tree.parsed_region(), b"abc");
        let ord_child = &tree.subtrees()[2];
        assert_eq!(ord_child.subtrees().len(), 1);
    }

    #[test]
    fn asterisk_matches_zero_reps() {
        let tree = parse::<Asterisk<Char<b'x'>>>("").expect("empty matches");
        assert_eq!(tree.parsed_region(), b"");
        assert!(tree.subtrees().is_empty());
    }

    #[test]
    fn plus_requires_at_least_one() {
        assert!(parse::<Plus<Char<b'x'>>>("").is_none());
        let tree = parse::<Plus<Char<b'x'>>>("xxx").expect("xxx matches");
        assert_eq!(tree.parsed_region(), b"xxx");
        assert_eq!(tree.subtrees().len(), 3);
    }

    #[test]
    fn not_consumes_nothing() {
        type NotAThenAny = Seq<(Not<Char<b'a'>>, Any)>;
        let tree = parse::<NotAThenAny>("b").expect("b matches");
        assert_eq!(tree.subtrees()[0].parsed_region(), b"");
        assert_eq!(tree.subtrees()[1].parsed_region(), b"b");
        assert!(parse::<NotAThenAny>("a").is_none());
    }
}
