//! Derived conveniences built on top of the core algebra: whitespace
//! skipping, interleaved sequences, keyword literals, and naming a
//! combinator expression as its own rule.
use std::marker::PhantomData;

use crate::combinators::{Asterisk, Ord as OrdRule};
use crate::core::{step, BuildResult, ParseContext, Rule};
use crate::parsers::Char;

/// Zero or more ASCII whitespace bytes (tab, space, LF, CR, vertical tab).
pub type Separator = Asterisk<
    OrdRule<(
        Char<b'\t'>,
        Char<b' '>,
        Char<b'\n'>,
        Char<b'\r'>,
        Char<b'\x0b'>,
    )>,
>;

/// `Interleaved<Sep, (R1, ..., Rn)>` behaves as `Seq<(R1, Sep, R2, Sep, ...,
/// Rn)>`; with a single rule it behaves as that rule directly, since there
/// is nothing to separate.
pub struct Interleaved<Sep, T>(PhantomData<(Sep, T)>);

/// `Interleaved<Separator, Rules>`.
pub type SpaceInterleaved<T> = Interleaved<Separator, T>;

macro_rules! impl_interleaved {
    ($first:ident) => {
        impl<Sep: Rule, $first: Rule> Rule for Interleaved<Sep, ($first,)> {
            fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
                let (tree, total) = step::<$first>(context, 0)?;
                Some((total, vec![tree]))
            }
        }
    };
    ($first:ident $(, $rest:ident)+) => {
        impl<Sep: Rule, $first: Rule, $($rest: Rule),+> Rule for Interleaved<Sep, ($first, $($rest),+,)> {
            fn build<'t>(context: &ParseContext<'t>) -> BuildResult<'t> {
                let mut children = Vec::new();
                let (tree, mut consumed) = step::<$first>(context, 0)?;
                children.push(tree);
                $(
                    let (sep_tree, sep_total) = step::<Sep>(context, consumed)?;
                    children.push(sep_tree);
                    let (tree, total) = step::<$rest>(context, sep_total)?;
                    children.push(tree);
                    consumed = total;
                )+
                Some((consumed, children))
            }
        }
    };
}

impl_interleaved!(R1);
impl_interleaved!(R1, R2);
impl_interleaved!(R1, R2, R3);
impl_interleaved!(R1, R2, R3, R4);
impl_interleaved!(R1, R2, R3, R4, R5);
impl_interleaved!(R1, R2, R3, R4, R5, R6);
impl_interleaved!(R1, R2, R3, R4, R5, R6, R7);
impl_interleaved!(R1, R2, R3, R4, R5, R6, R7, R8);

/// Expands to a rule type matching the given byte literals in sequence.
///
/// `&'static str` isn't a stable const-generic parameter, so an arbitrary-
/// length keyword can't be hand-unrolled the way `Seq`'s tuple arities are;
/// this is the one place in the algebra a declarative macro stands in for
/// that.
#[macro_export]
macro_rules! keyword {
    ($c:literal) => {
        $crate::parsers::Char<$c>
    };
    ($($c:literal),+ $(,)?) => {
        $crate::combinators::Seq<($($crate::parsers::Char<$c>),+ ,)>
    };
}

/// Declares a fresh zero-sized rule type `$name` whose matching logic is
/// `$body`, without giving `$body`'s own composition an identity of its
/// own for this call site.
///
/// `$name`'s `build` forwards straight to `<$body as Rule>::build`,
/// bypassing `$body`'s `parse_rule` wrapper; only `$name`'s `RuleId` is
/// ever tagged and memoized for this invocation. Two structurally
/// identical inline compositions share a `RuleId`; a composition wrapped
/// with `define_rule!` does not share it with either.
#[macro_export]
macro_rules! define_rule {
    ($name:ident, $body:ty) => {
        pub struct $name;

        impl $crate::core::Rule for $name {
            fn build<'t>(
                context: &$crate::core::ParseContext<'t>,
            ) -> $crate::core::BuildResult<'t> {
                <$body as $crate::core::Rule>::build(context)
            }
        }
    };
}
