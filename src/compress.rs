//! Post-parse tree compression: splice out rules the caller marks as
//! structural, promoting their children in place.
use std::rc::Rc;

use crate::core::{ParseTree, RuleId};

/// Rewrite `tree` under `is_active`, dropping nodes whose rule identity is
/// not active and promoting their children to the caller.
///
/// Returns zero, one, or more trees: a spliced-out node may have promoted
/// more than one active descendant, and the initial call may itself be
/// spliced out if its own identity isn't active.
pub fn compress<'t>(
    tree: &Rc<ParseTree<'t>>,
    is_active: &impl Fn(RuleId) -> bool,
) -> Vec<Rc<ParseTree<'t>>> {
    let collected: Vec<Rc<ParseTree<'t>>> = tree
        .subtrees()
        .iter()
        .flat_map(|child| compress(child, is_active))
        .collect();

    if is_active(tree.instance()) {
        vec![Rc::new(ParseTree::new(
            tree.parsed_region(),
            tree.instance(),
            collected,
        ))]
    } else {
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::Seq;
    use crate::core::{parse, RuleId};
    use crate::parsers::Char;

    type AthenB = Seq<(Char<b'a'>, Char<b'b'>)>;

    #[test]
    fn splices_out_inactive_nodes() {
        let tree = parse::<AthenB>("ab").expect("ab matches");
        let active = RuleId::of::<Char<b'a'>>();
        let result = compress(&tree, &move |id| id == active);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].instance(), active);
        assert_eq!(result[0].parsed_region(), b"a");
        assert!(result[0].subtrees().is_empty());
    }

    #[test]
    fn keeps_active_root_with_compressed_children() {
        let tree = parse::<AthenB>("ab").expect("ab matches");
        let seq_id = RuleId::of::<AthenB>();
        let a_id = RuleId::of::<Char<b'a'>>();
        let result = compress(&tree, &move |id| id == seq_id || id == a_id);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].instance(), seq_id);
        assert_eq!(result[0].subtrees().len(), 1);
        assert_eq!(result[0].subtrees()[0].instance(), a_id);
    }

    #[test]
    fn leaves_concatenate_to_original_region() {
        let tree = parse::<AthenB>("ab").expect("ab matches");
        let result = compress(&tree, &|_| false);
        // nothing active: every node spliced, but the original Seq had two
        // leaf children with no identity kept, so the promoted list is empty
        assert!(result.is_empty());
    }
}
