//! Style sheet node types.

/// Where a node came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Source {
    /// Path of the input file, when the host knows it.
    pub file: Option<String>,
}

impl Source {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }
}

/// A `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
    pub important: bool,
    pub source: Option<Source>,
}

impl Declaration {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            important: false,
            source: None,
        }
    }

    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Copies this declaration, keeping everything but the value.
    pub fn clone_with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }

    /// The originating file path, if any.
    pub fn source_file(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.file.as_deref())
    }
}

/// A qualified rule such as `.card { ... }`.
///
/// The selector is optional so that hosts can model selector-less blocks
/// (for example keyframe stops they choose not to expose).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    pub selector: Option<String>,
    pub nodes: Vec<Node>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            nodes: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Appends a declaration.
    pub fn decl(self, prop: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_decl(Declaration::new(prop, value))
    }

    pub fn with_decl(mut self, decl: Declaration) -> Self {
        self.nodes.push(Node::Declaration(decl));
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.nodes.push(Node::Rule(rule));
        self
    }

    /// Direct child declarations, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.nodes.iter().filter_map(Node::as_declaration)
    }
}

/// An at-rule such as `@media (min-width: 768px) { ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    pub nodes: Vec<Node>,
}

impl AtRule {
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.nodes.push(Node::Rule(rule));
        self
    }

    pub fn with_at_rule(mut self, at_rule: AtRule) -> Self {
        self.nodes.push(Node::AtRule(at_rule));
        self
    }

    pub fn with_decl(mut self, decl: Declaration) -> Self {
        self.nodes.push(Node::Declaration(decl));
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
}

impl Node {
    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            Node::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_at_rule(&self) -> Option<&AtRule> {
        match self {
            Node::AtRule(at_rule) => Some(at_rule),
            _ => None,
        }
    }
}

/// The root of a style sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub nodes: Vec<Node>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.nodes.push(Node::Rule(rule));
        self
    }

    pub fn with_at_rule(mut self, at_rule: AtRule) -> Self {
        self.nodes.push(Node::AtRule(at_rule));
        self
    }

    /// Top-level rules, in order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.nodes.iter().filter_map(Node::as_rule)
    }
}
