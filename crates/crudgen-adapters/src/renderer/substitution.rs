//! In-place placeholder substitution renderer.
//!
//! Placeholders are written `@@name@@` so that skeleton files can carry
//! literal template syntax of the generated artifacts (Twig's `{{ }}` /
//! `{% %}`) untouched. List variables render comma-joined in order.
//!
//! Contract (from the `TemplateRenderer` port):
//! - a supplied variable no placeholder references is not an error;
//! - a referenced placeholder with no supplied variable is an error;
//! - identical inputs produce identical output.

use std::path::Path;

use crudgen_core::{
    application::{ApplicationError, ports::{Filesystem, TemplateRenderer}},
    domain::RenderContext,
    error::CrudgenResult,
};
use tracing::instrument;

const MARKER: &str = "@@";

/// Renderer that rewrites a file in place via `@@name@@` substitution.
///
/// Operates through the same `Filesystem` port as the generator, so tests
/// can point both at one `MemoryFilesystem`.
pub struct SubstitutionRenderer {
    filesystem: Box<dyn Filesystem>,
}

impl SubstitutionRenderer {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }
}

impl TemplateRenderer for SubstitutionRenderer {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn render_in_place(&self, path: &Path, variables: &RenderContext) -> CrudgenResult<()> {
        let source = self.filesystem.read_to_string(path)?;
        let rendered = substitute(&source, variables)
            .map_err(|reason| ApplicationError::RenderFailed {
                path: path.to_path_buf(),
                reason,
            })?;
        self.filesystem.write_file(path, &rendered)
    }
}

/// Substitute every `@@name@@` occurrence in `source`.
///
/// Returns the failure reason on an unterminated marker or a placeholder
/// with no matching variable.
fn substitute(source: &str, variables: &RenderContext) -> Result<String, String> {
    let mut output = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find(MARKER) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + MARKER.len()..];

        let end = after_open
            .find(MARKER)
            .ok_or_else(|| "unterminated placeholder marker".to_string())?;

        let name = after_open[..end].trim();
        let value = variables
            .get(name)
            .ok_or_else(|| format!("no variable supplied for placeholder `{name}`"))?;
        output.push_str(&value.render());

        rest = &after_open[end + MARKER.len()..];
    }

    output.push_str(rest);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use std::path::PathBuf;

    fn vars() -> RenderContext {
        RenderContext::new()
            .with_str("entity", "Blog/Post")
            .with_list("actions", vec!["index".into(), "show".into()])
    }

    #[test]
    fn substitutes_scalar_and_list_variables() {
        let out = substitute("e=@@entity@@ a=@@actions@@", &vars()).unwrap();
        assert_eq!(out, "e=Blog/Post a=index, show");
    }

    #[test]
    fn whitespace_inside_markers_is_tolerated() {
        let out = substitute("@@ entity @@", &vars()).unwrap();
        assert_eq!(out, "Blog/Post");
    }

    #[test]
    fn unreferenced_supplied_variables_are_fine() {
        assert_eq!(substitute("static text", &vars()).unwrap(), "static text");
    }

    #[test]
    fn referenced_missing_variable_errors() {
        let err = substitute("@@missing@@", &vars()).unwrap_err();
        assert!(err.contains("missing"));
    }

    #[test]
    fn unterminated_marker_errors() {
        assert!(substitute("@@entity", &vars()).is_err());
    }

    #[test]
    fn twig_syntax_passes_through_untouched() {
        let twig = "{% for row in rows %}{{ row.id }}{% endfor %}";
        assert_eq!(substitute(twig, &vars()).unwrap(), twig);
    }

    #[test]
    fn rendering_is_deterministic() {
        let template = "@@entity@@/@@actions@@";
        let first = substitute(template, &vars()).unwrap();
        let second = substitute(template, &vars()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn renders_in_place_through_the_filesystem_port() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/out/file.txt", "hello @@entity@@");

        let renderer = SubstitutionRenderer::new(Box::new(fs.clone()));
        renderer
            .render_in_place(&PathBuf::from("/out/file.txt"), &vars())
            .unwrap();

        assert_eq!(
            fs.read_file(Path::new("/out/file.txt")).as_deref(),
            Some("hello Blog/Post")
        );
    }

    #[test]
    fn render_failure_names_the_placeholder() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/out/file.txt", "@@unknown@@");

        let renderer = SubstitutionRenderer::new(Box::new(fs.clone()));
        let err = renderer
            .render_in_place(&PathBuf::from("/out/file.txt"), &vars())
            .unwrap_err();
        assert!(err.to_string().contains("unknown"));
        // File is left as copied when rendering fails.
        assert_eq!(
            fs.read_file(Path::new("/out/file.txt")).as_deref(),
            Some("@@unknown@@")
        );
    }
}
