//! Static template text for every generated artifact, one module per
//! gameplay class plus the Build.cs descriptor.
//!
//! The C++ payloads are opaque to this tool: their gameplay semantics belong
//! to the engine, and only `{{project_name}}` / `{{module_api}}` vary per run.

pub mod ai_controller;
pub mod build_cs;
pub mod collectible;
pub mod enemy;
pub mod player;
pub mod shader;

use crate::config::ScaffoldConfig;

/// Fill in the two placeholders and normalize whitespace: surrounding blank
/// lines stripped, exactly one trailing newline.
pub(crate) fn render(template: &str, config: &ScaffoldConfig) -> String {
    let body = template
        .replace("{{project_name}}", &config.project_name)
        .replace("{{module_api}}", &config.module_api);
    format!("{}\n", body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_both_placeholders() {
        let config = ScaffoldConfig::default();
        let out = render("class {{module_api}} A{{project_name}};", &config);
        assert_eq!(out, "class CODING_WITH_AI_API ACoding_with_Ai;\n");
    }

    #[test]
    fn test_render_normalizes_trailing_whitespace() {
        let config = ScaffoldConfig::default();
        let out = render("\n\nint x;\n\n\n", &config);
        assert_eq!(out, "int x;\n");
    }
}
