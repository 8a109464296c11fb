//! Document-order traversal with in-place mutation.
//!
//! Walking mirrors how transformation passes usually work on a CSS AST:
//! every declaration is visited once, in order, together with enough of its
//! parent to read the selector, inspect siblings, and insert new
//! declarations right after itself.

use crate::node::{AtRule, Declaration, Node, StyleSheet};

/// A declaration being visited, plus access to its parent container.
///
/// Declarations inserted through [`DeclCursor::insert_after`] are placed
/// directly after the current one (in insertion order) and are not visited
/// by the walk that inserted them.
pub struct DeclCursor<'a> {
    selector: Option<&'a str>,
    nodes: &'a mut Vec<Node>,
    index: usize,
    inserted: usize,
}

impl<'a> DeclCursor<'a> {
    pub fn decl(&self) -> &Declaration {
        match &self.nodes[self.index] {
            Node::Declaration(decl) => decl,
            _ => unreachable!("cursor always points at a declaration"),
        }
    }

    pub fn decl_mut(&mut self) -> &mut Declaration {
        match &mut self.nodes[self.index] {
            Node::Declaration(decl) => decl,
            _ => unreachable!("cursor always points at a declaration"),
        }
    }

    /// Selector of the parent rule. `None` for declarations that live
    /// directly in an at-rule, at the root, or in an anonymous rule.
    pub fn selector(&self) -> Option<&str> {
        self.selector
    }

    /// Position of the declaration among its parent's child nodes.
    pub fn index(&self) -> usize {
        self.index
    }

    /// All declarations of the parent, the current one included.
    pub fn siblings(&self) -> impl Iterator<Item = &Declaration> {
        self.nodes.iter().filter_map(Node::as_declaration)
    }

    pub fn insert_after(&mut self, decl: Declaration) {
        let at = self.index + self.inserted + 1;
        self.nodes.insert(at, Node::Declaration(decl));
        self.inserted += 1;
    }
}

impl StyleSheet {
    /// Visits every declaration in document order, descending into rules
    /// and at-rules.
    pub fn walk_decls<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut DeclCursor<'_>),
    {
        walk_decls_in(None, &mut self.nodes, &mut visit);
    }

    /// Visits every at-rule called `name` (without the `@`), outermost first.
    pub fn walk_at_rules<F>(&mut self, name: &str, mut visit: F)
    where
        F: FnMut(&mut AtRule),
    {
        walk_at_rules_in(name, &mut self.nodes, &mut visit);
    }
}

fn walk_decls_in<F>(selector: Option<&str>, nodes: &mut Vec<Node>, visit: &mut F)
where
    F: FnMut(&mut DeclCursor<'_>),
{
    let mut index = 0;
    while index < nodes.len() {
        if let Node::Declaration(_) = nodes[index] {
            let mut cursor = DeclCursor {
                selector,
                nodes: &mut *nodes,
                index,
                inserted: 0,
            };
            visit(&mut cursor);
            index += cursor.inserted;
        } else {
            match &mut nodes[index] {
                Node::Rule(rule) => walk_decls_in(rule.selector.as_deref(), &mut rule.nodes, visit),
                Node::AtRule(at_rule) => walk_decls_in(None, &mut at_rule.nodes, visit),
                Node::Declaration(_) => {}
            }
        }
        index += 1;
    }
}

fn walk_at_rules_in<F>(name: &str, nodes: &mut [Node], visit: &mut F)
where
    F: FnMut(&mut AtRule),
{
    for node in nodes.iter_mut() {
        match node {
            Node::AtRule(at_rule) => {
                if at_rule.name == name {
                    visit(at_rule);
                }
                walk_at_rules_in(name, &mut at_rule.nodes, visit);
            }
            Node::Rule(rule) => walk_at_rules_in(name, &mut rule.nodes, visit),
            Node::Declaration(_) => {}
        }
    }
}
