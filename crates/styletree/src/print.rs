//! CSS printing.
//!
//! Output is one declaration per line with four-space indentation. It is
//! meant for writing results back out and for readable test assertions,
//! not for byte-exact reproduction of the host's original formatting.

use std::fmt;

use crate::node::{AtRule, Declaration, Node, Rule, StyleSheet};

const INDENT: &str = "    ";

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.prop, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rule(f, self, 0)
    }
}

impl fmt::Display for AtRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_at_rule(f, self, 0)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write_node(f, node, 0)?;
        }
        Ok(())
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    match node {
        Node::Declaration(decl) => {
            write_indent(f, depth)?;
            writeln!(f, "{decl};")
        }
        Node::Rule(rule) => write_rule(f, rule, depth),
        Node::AtRule(at_rule) => write_at_rule(f, at_rule, depth),
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, nodes: &[Node], depth: usize) -> fmt::Result {
    f.write_str("{\n")?;
    for node in nodes {
        write_node(f, node, depth + 1)?;
    }
    write_indent(f, depth)?;
    f.write_str("}\n")
}

fn write_rule(f: &mut fmt::Formatter<'_>, rule: &Rule, depth: usize) -> fmt::Result {
    write_indent(f, depth)?;
    if let Some(selector) = &rule.selector {
        write!(f, "{selector} ")?;
    }
    write_block(f, &rule.nodes, depth)
}

fn write_at_rule(f: &mut fmt::Formatter<'_>, at_rule: &AtRule, depth: usize) -> fmt::Result {
    write_indent(f, depth)?;
    write!(f, "@{}", at_rule.name)?;
    if !at_rule.params.is_empty() {
        write!(f, " {}", at_rule.params)?;
    }
    // Block-less at-rules such as `@import url(a.css);`
    if at_rule.nodes.is_empty() {
        return f.write_str(";\n");
    }
    f.write_str(" ")?;
    write_block(f, &at_rule.nodes, depth)
}
