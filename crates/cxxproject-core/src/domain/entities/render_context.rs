/// Context for template rendering.
///
/// A **Value Object** holding the `{{VARIABLE}}` substitutions for one
/// generated file family. Immutable after creation; `with_variable` returns a
/// new instance.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "my-lib" | User input |
/// | `PROJECT_NAMESPACE` | "my_lib" | Computed |
/// | `PROJECT_NAME_UPPER` | "MY_LIB" | Computed |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: std::collections::HashMap<String, String>,
}

impl RenderContext {
    pub fn new(name: &crate::domain::ProjectName) -> Self {
        let mut vars = std::collections::HashMap::new();
        vars.insert("PROJECT_NAME".to_string(), name.as_str().to_string());
        vars.insert("PROJECT_NAMESPACE".to_string(), name.identifier());
        vars.insert("PROJECT_NAME_UPPER".to_string(), name.macro_token());
        Self { variables: vars }
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` remains as literal `{{UNKNOWN}}` (no error)
    /// - `${VAR}` and `$(VAR)` are left alone, so CMake and make syntax pass
    ///   through untouched
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectName;

    #[test]
    fn renders_builtin_variables() {
        let ctx = RenderContext::new(&ProjectName::parse("my-lib").unwrap());
        assert_eq!(
            ctx.render("{{PROJECT_NAME}} {{PROJECT_NAMESPACE}} {{PROJECT_NAME_UPPER}}"),
            "my-lib my_lib MY_LIB"
        );
    }

    #[test]
    fn leaves_build_tool_syntax_alone() {
        let ctx = RenderContext::new(&ProjectName::parse("x").unwrap());
        assert_eq!(
            ctx.render("${CMAKE_BINARY_DIR} $(MAKE) {{UNKNOWN}}"),
            "${CMAKE_BINARY_DIR} $(MAKE) {{UNKNOWN}}"
        );
    }

    #[test]
    fn custom_variables_override() {
        let ctx = RenderContext::new(&ProjectName::parse("x").unwrap())
            .with_variable("PROJECT_NAME", "y")
            .with_variable("EXTRA", "z");
        assert_eq!(ctx.render("{{PROJECT_NAME}}{{EXTRA}}"), "yz");
        assert_eq!(ctx.get("EXTRA"), Some("z"));
    }
}
