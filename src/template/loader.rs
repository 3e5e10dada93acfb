//! Filesystem-backed template loading

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::substitution::substitute_variables;
use super::types::{TemplateError, TemplateResult};

/// File extension appended to template names.
const TEMPLATE_EXTENSION: &str = "html";

/// Loads HTML email templates from a fixed directory.
///
/// Templates are re-read from disk on every call, so edits take effect
/// immediately without restarting the dispatching process.
pub struct TemplateLoader {
    root: PathBuf,
}

impl TemplateLoader {
    /// Create a loader rooted at the given templates directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a template name to its backing file path.
    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, TEMPLATE_EXTENSION))
    }

    /// Load the raw template text.
    pub fn load(&self, name: &str) -> TemplateResult<String> {
        let path = self.resolve(name);

        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound(name.to_string()))
            }
            Err(e) => Err(TemplateError::Io {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    /// Load a template and substitute the given variable bindings.
    pub fn render(
        &self,
        name: &str,
        variables: &BTreeMap<String, String>,
    ) -> TemplateResult<String> {
        let raw = self.load(name)?;
        Ok(substitute_variables(&raw, variables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_with_template(name: &str, contents: &str) -> (tempfile::TempDir, TemplateLoader) {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join(format!("{}.html", name)), contents).unwrap();
        let loader = TemplateLoader::new(dir.path());
        (dir, loader)
    }

    #[test]
    fn test_load_reads_template_text() {
        let (_dir, loader) = loader_with_template("welcome", "<p>Hi {{NAME}}</p>");

        let raw = loader.load("welcome").unwrap();
        assert_eq!(raw, "<p>Hi {{NAME}}</p>");
    }

    #[test]
    fn test_render_substitutes_bindings() {
        let (_dir, loader) = loader_with_template("welcome", "<p>Hi {{NAME}}</p>");

        let mut variables = BTreeMap::new();
        variables.insert("NAME".to_string(), "Ada".to_string());

        let rendered = loader.render("welcome", &variables).unwrap();
        assert_eq!(rendered, "<p>Hi Ada</p>");
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let loader = TemplateLoader::new(dir.path());

        let err = loader.load("missing").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "missing"));
    }

    #[test]
    fn test_reload_picks_up_edits() {
        let (dir, loader) = loader_with_template("welcome", "first");
        assert_eq!(loader.load("welcome").unwrap(), "first");

        fs::write(dir.path().join("welcome.html"), "second").unwrap();
        assert_eq!(loader.load("welcome").unwrap(), "second");
    }
}
