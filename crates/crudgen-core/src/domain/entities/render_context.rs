//! Variable context for skeleton rendering.
//!
//! A **Value Object** containing the named variables for one artifact.
//! Immutable after creation - transformations create new instances (see
//! `with_str` / `with_list`). Insertion order is preserved so rendered
//! output is deterministic for identical inputs.
//!
//! ## Variable Naming Convention
//!
//! All variable names are `snake_case` and stable: consumers outside this
//! crate (skeleton authors) bind to these names. The per-artifact sets are
//! assembled in `context.rs`.

use serde::{Deserialize, Serialize};

/// A single variable value: scalar text or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarValue {
    Str(String),
    List(Vec<String>),
}

impl VarValue {
    /// The substitution text for this value. Lists render comma-joined,
    /// preserving order.
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::List(items) => items.join(", "),
        }
    }
}

/// The named variables passed to the renderer for one artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    vars: Vec<(String, VarValue)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar variable (builder style).
    pub fn with_str(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((name.into(), VarValue::Str(value.into())));
        self
    }

    /// Add an ordered list variable (builder style).
    pub fn with_list(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.vars.push((name.into(), VarValue::List(values)));
        self
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.vars.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_inserted_values() {
        let ctx = RenderContext::new()
            .with_str("entity", "Blog/Post")
            .with_list("actions", vec!["index".into(), "show".into()]);

        assert_eq!(
            ctx.get("entity"),
            Some(&VarValue::Str("Blog/Post".into()))
        );
        assert_eq!(
            ctx.get("actions"),
            Some(&VarValue::List(vec!["index".into(), "show".into()]))
        );
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn list_values_render_comma_joined_in_order() {
        let value = VarValue::List(vec!["show".into(), "edit".into(), "delete".into()]);
        assert_eq!(value.render(), "show, edit, delete");
    }

    #[test]
    fn names_preserve_insertion_order() {
        let ctx = RenderContext::new()
            .with_str("b", "2")
            .with_str("a", "1");
        assert_eq!(ctx.names(), vec!["b", "a"]);
    }
}
