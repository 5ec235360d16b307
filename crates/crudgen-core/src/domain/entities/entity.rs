//! Entity identity and metadata.
//!
//! [`EntityName`] is the namespaced type name of the entity being
//! scaffolded; [`EntityMetadata`] is the read-only field/identifier
//! description supplied by the metadata provider. The generator never
//! mutates either.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── EntityName ────────────────────────────────────────────────────────────────

/// A namespaced entity type name, e.g. `Blog/Post`.
///
/// Accepted namespace separators on parse: `/`, `\` and `::`. The canonical
/// display form uses `/`. The final segment is the entity's simple class
/// name; the leading segments are its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityName {
    segments: Vec<String>,
}

impl EntityName {
    /// Parse a namespaced name, normalising separators.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let normalized = name.replace("::", "/").replace('\\', "/");
        let segments: Vec<String> = normalized
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            return Err(DomainError::InvalidEntityName {
                name: name.into(),
                reason: "name is empty".into(),
            });
        }

        for segment in &segments {
            if !is_identifier(segment) {
                return Err(DomainError::InvalidEntityName {
                    name: name.into(),
                    reason: format!("segment '{segment}' is not a valid identifier"),
                });
            }
        }

        Ok(Self { segments })
    }

    /// The simple class name (final segment), e.g. `Post`.
    pub fn class_name(&self) -> &str {
        self.segments.last().expect("segments are non-empty")
    }

    /// Namespace segments, without the class name. Empty for a top-level
    /// entity.
    pub fn namespace_segments(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Namespace in canonical display form (`Blog/Admin`), empty string for
    /// a top-level entity.
    pub fn namespace(&self) -> String {
        self.namespace_segments().join("/")
    }

    /// The full name with namespace separators replaced by path separators.
    /// Used for the views directory: `Resources/views/<this>/`.
    pub fn as_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Namespace segments as a relative path. Empty path for a top-level
    /// entity.
    pub fn namespace_path(&self) -> PathBuf {
        self.namespace_segments().iter().collect()
    }

    /// The route-file base name: separators replaced by `_`, lowercased.
    /// `Blog/Post` → `blog_post`.
    pub fn route_name(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ── EntityMetadata ────────────────────────────────────────────────────────────

/// Read-only entity description supplied by the metadata provider.
///
/// Field order is display order; the generator passes it through verbatim.
/// Identifier-shape invariants (exactly one identifier, named `id`) are
/// enforced by `DomainValidator`, not at construction, because the metadata
/// is owned by an external provider and may legitimately describe entities
/// the generator refuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMetadata {
    field_names: Vec<String>,
    identifier_fields: Vec<String>,
}

impl EntityMetadata {
    pub fn new(field_names: Vec<String>, identifier_fields: Vec<String>) -> Self {
        Self {
            field_names,
            identifier_fields,
        }
    }

    /// Ordered field names (insertion order = display order).
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// The identifier field names, as declared by the provider.
    pub fn identifier_fields(&self) -> &[String] {
        &self.identifier_fields
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slash_separated() {
        let name = EntityName::parse("Blog/Post").unwrap();
        assert_eq!(name.class_name(), "Post");
        assert_eq!(name.namespace(), "Blog");
        assert_eq!(name.to_string(), "Blog/Post");
    }

    #[test]
    fn parse_accepts_backslash_and_double_colon() {
        assert_eq!(
            EntityName::parse("Blog\\Post").unwrap(),
            EntityName::parse("Blog/Post").unwrap()
        );
        assert_eq!(
            EntityName::parse("Blog::Post").unwrap(),
            EntityName::parse("Blog/Post").unwrap()
        );
    }

    #[test]
    fn top_level_entity_has_empty_namespace() {
        let name = EntityName::parse("Post").unwrap();
        assert_eq!(name.class_name(), "Post");
        assert_eq!(name.namespace(), "");
        assert!(name.namespace_segments().is_empty());
        assert_eq!(name.namespace_path(), PathBuf::new());
    }

    #[test]
    fn route_name_is_lowercased_underscore_joined() {
        let name = EntityName::parse("Blog/Post").unwrap();
        assert_eq!(name.route_name(), "blog_post");

        let flat = EntityName::parse("Invoice").unwrap();
        assert_eq!(flat.route_name(), "invoice");
    }

    #[test]
    fn as_path_uses_directory_separators() {
        let name = EntityName::parse("Shop/Admin/Order").unwrap();
        assert_eq!(name.as_path(), PathBuf::from("Shop/Admin/Order"));
        assert_eq!(name.namespace_path(), PathBuf::from("Shop/Admin"));
    }

    #[test]
    fn empty_and_malformed_names_rejected() {
        assert!(EntityName::parse("").is_err());
        assert!(EntityName::parse("//").is_err());
        assert!(EntityName::parse("Blog/9Post").is_err());
        assert!(EntityName::parse("Blog/Po st").is_err());
    }

    #[test]
    fn metadata_preserves_field_order() {
        let meta = EntityMetadata::new(
            vec!["id".into(), "title".into(), "body".into()],
            vec!["id".into()],
        );
        assert_eq!(meta.field_names(), ["id", "title", "body"]);
        assert_eq!(meta.identifier_fields(), ["id"]);
    }
}
