//! A recursive, escaped textual rendering of a parse tree, for debugging.
use std::fmt;

use crate::core::ParseTree;

const INDENT_WIDTH: usize = 4;

/// Wraps a `&ParseTree` so it can be rendered with `{}`/`{:?}`.
///
/// ```text
/// - packrat_peg::combinators::Seq<...>, parsed: "ab"
///     - packrat_peg::parsers::Char<...>, parsed: "a"
///     - packrat_peg::parsers::Char<...>, parsed: "b"
/// ```
pub struct Rendered<'a, 't>(pub &'a ParseTree<'t>);

impl<'a, 't> fmt::Display for Rendered<'a, 't> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0)
    }
}

impl<'a, 't> fmt::Debug for Rendered<'a, 't> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &ParseTree<'_>, depth: usize) -> fmt::Result {
    writeln!(
        f,
        "{:indent$}- {}, parsed: \"{}\"",
        "",
        node.instance().name(),
        escape(node.parsed_region()),
        indent = depth * INDENT_WIDTH,
    )?;
    for child in node.subtrees() {
        write_node(f, child, depth + 1)?;
    }
    Ok(())
}

/// Escape a byte slice for display: the usual C-style escapes for quote,
/// backslash, and control characters, and `\xNN` for any other
/// non-printable byte (the alphabet here is raw bytes, not guaranteed
/// printable ASCII).
fn escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\'' => out.push_str("\\'"),
            b'"' => out.push_str("\\\""),
            b'?' => out.push_str("\\?"),
            b'\\' => out.push_str("\\\\"),
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            0x0c => out.push_str("\\f"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x0b => out.push_str("\\v"),
            0x20..=0x7e => out.push(b as char),
            other => out.push_str(&format!("\\x{:02x}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::Seq;
    use crate::core::parse;
    use crate::parsers::Char;

    #[test]
    fn renders_nested_structure_with_indentation() {
        type AthenB = Seq<(Char<b'a'>, Char<b'b'>)>;
        let tree = parse::<AthenB>("ab").expect("ab matches");
        let rendered = format!("{}", Rendered(&tree));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("- "));
        assert!(lines[1].starts_with("    - "));
        assert!(lines[1].contains("parsed: \"a\""));
        assert!(lines[2].contains("parsed: \"b\""));
    }

    #[test]
    fn escapes_control_and_quote_characters() {
        assert_eq!(escape(b"a\"b"), "a\\\"b");
        assert_eq!(escape(b"\n\t"), "\\n\\t");
        assert_eq!(escape(&[0x01]), "\\x01");
    }
}
