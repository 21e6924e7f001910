//! Glyphs for the two kinds of output line.

use std::fmt::{self, Write};

/// Node marker.
pub const NODE: char = '*';
/// Vertical branch segment.
pub const PIPE: char = '|';
/// Opens a new branch to the right.
pub const FORK: char = '\\';

/// Writes the connector that opens branch column `step + 1`:
/// `step + 1` pipes separated by spaces, then a fork.
///
/// ```rust
/// let mut out = String::new();
/// printtree_render::lines::write_connector(&mut out, 1).unwrap();
/// assert_eq!(out, "| |\\\n");
/// ```
pub fn write_connector<W: Write + ?Sized>(out: &mut W, step: usize) -> fmt::Result {
    for column in 0..=step {
        if column > 0 {
            out.write_char(' ')?;
        }
        out.write_char(PIPE)?;
    }
    out.write_char(FORK)?;
    out.write_char('\n')
}

/// Writes a node line: `"| "` once per column left of `branch_index`, then
/// the marker and label.
pub fn write_node<W, L>(out: &mut W, branch_index: usize, label: &L) -> fmt::Result
where
    W: Write + ?Sized,
    L: fmt::Display + ?Sized,
{
    for _ in 0..branch_index {
        out.write_char(PIPE)?;
        out.write_char(' ')?;
    }
    writeln!(out, "{NODE} {label}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn connector(step: usize) -> String {
        let mut out = String::new();
        write_connector(&mut out, step).unwrap();
        out
    }

    fn node(branch_index: usize, label: &str) -> String {
        let mut out = String::new();
        write_node(&mut out, branch_index, label).unwrap();
        out
    }

    #[test]
    fn test_connector_widths() {
        assert_eq!(connector(0), "|\\\n");
        assert_eq!(connector(1), "| |\\\n");
        assert_eq!(connector(3), "| | | |\\\n");
    }

    #[test]
    fn test_node_indentation() {
        assert_eq!(node(0, "a"), "* a\n");
        assert_eq!(node(2, "g"), "| | * g\n");
    }

    #[test]
    fn test_node_label_uses_display() {
        let mut out = String::new();
        write_node(&mut out, 1, &42_u32).unwrap();
        assert_eq!(out, "| * 42\n");
    }
}
