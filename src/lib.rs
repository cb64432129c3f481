//! # packrat-peg
//!
//! An embedded packrat PEG parser combinator library: grammars are
//! composed directly as Rust types out of a small, closed algebra of
//! primitives and combinators, and parsed with full memoization for a
//! linear-time guarantee.
//!
//! ## Primitives
//!
//! [`parsers::Start`], [`parsers::End`], [`parsers::Nothing`],
//! [`parsers::Any`], [`parsers::Char`], and [`parsers::CharRange`] are the
//! leaves of the algebra.
//!
//! ## Combinators
//!
//! [`combinators::Seq`] and [`combinators::Ord`] compose a tuple of rules
//! in sequence or prioritized choice; [`combinators::Optional`],
//! [`combinators::Plus`], [`combinators::Asterisk`], and
//! [`combinators::Not`] cover repetition and lookahead:
//!
//! ```
//! use packrat_peg::combinators::{Ord, Seq};
//! use packrat_peg::core::parse;
//! use packrat_peg::parsers::Char;
//!
//! type Grammar = Seq<(Char<b'a'>, Char<b'b'>, Ord<(Char<b'b'>, Char<b'c'>)>)>;
//!
//! let tree = parse::<Grammar>("abc").unwrap();
//! assert_eq!(tree.parsed_region(), b"abc");
//! ```
//!
//! ## Naming a rule
//!
//! A combinator expression can be given its own stable identity with
//! [`define_rule`], distinct from a structurally identical inline
//! composition:
//!
//! ```
//! use packrat_peg::combinators::Seq;
//! use packrat_peg::core::RuleId;
//! use packrat_peg::parsers::Char;
//!
//! packrat_peg::define_rule!(Greeting, Seq<(Char<b'h'>, Char<b'i'>)>);
//!
//! type InlineGreeting = Seq<(Char<b'h'>, Char<b'i'>)>;
//! assert_ne!(RuleId::of::<Greeting>(), RuleId::of::<InlineGreeting>());
//! ```
//!
//! ## Tree compression
//!
//! [`compress::compress`] splices out rules the caller doesn't mark
//! active, promoting their children, so downstream passes see only
//! semantically meaningful nodes.
//!
//! ## Symbol table
//!
//! [`symtable::SymTable`] is a standalone, lexically-scoped name table for
//! semantic-analysis passes built on top of a parse tree.

pub mod combinators;
pub mod compress;
pub mod core;
pub mod display;
pub mod memo;
pub mod parsers;
pub mod sugar;
pub mod symtable;


pub use crate::combinators::{Asterisk, Not, Optional, Ord, Plus, Seq};
pub use crate::compress::compress;
pub use crate::core::{parse, parse_rule, ParseContext, ParseTree, Rule, RuleId};
pub use crate::display::Rendered;
pub use crate::parsers::{Any, Char, CharRange, End, Nothing, Start};
pub use crate::sugar::{Interleaved, Separator, SpaceInterleaved};
pub use crate::symtable::SymTable;
