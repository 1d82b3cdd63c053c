use crate::Node;
use std::fmt::Write;

const INDENT_STEP: &str = "  ";
const PREVIEW_CHARS: usize = 40;

/// Indented one-line-per-node dump, capped at `cap` nodes.
///
/// Elements show their `class` and the attributes that identify form controls
/// (`name`, `type`, `aria-label`); text is trimmed and previewed.
pub fn outline_from_dom(root: &Node, cap: usize) -> Vec<String> {
    fn push_preview(out: &mut String, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            if i == PREVIEW_CHARS {
                out.push('…');
                return;
            }
            out.push(if ch == '\n' { ' ' } else { ch });
        }
    }

    fn walk(node: &Node, indent: &mut String, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        match node {
            Node::Document { .. } => {
                out.push(format!("{indent}#document"));
            }
            Node::Element {
                name, attributes, ..
            } => {
                let mut line = format!("{indent}<{name}");
                for key in ["class", "name", "type", "aria-label"] {
                    if let Some((_, Some(v))) = attributes.iter().find(|(k, _)| k == key) {
                        let _ = write!(&mut line, r#" {key}="{v}""#);
                    }
                }
                line.push('>');
                out.push(line);
            }
            Node::Text { text, .. } => {
                let t = text.trim();
                if !t.is_empty() {
                    let mut line = format!("{indent}\"");
                    push_preview(&mut line, t);
                    line.push('"');
                    out.push(line);
                }
            }
            Node::Comment { text, .. } => {
                let mut line = format!("{indent}<!-- ");
                push_preview(&mut line, text);
                line.push_str(" -->");
                out.push(line);
            }
        }

        indent.push_str(INDENT_STEP);
        for c in node.children() {
            walk(c, indent, out, left);
        }
        indent.truncate(indent.len() - INDENT_STEP.len());
    }

    let mut out = Vec::new();
    let mut indent = String::new();
    let mut left = cap;
    walk(root, &mut indent, &mut out, &mut left);
    out
}
