use std::path::{Component, Path};

use serde::Serialize;

use crate::error::ScaffoldError;

/// Project name of the Coding_with_Ai prototype this tool was built for.
pub const DEFAULT_PROJECT_NAME: &str = "Coding_with_Ai";
/// Export macro UnrealBuildTool generates for that module.
pub const DEFAULT_MODULE_API: &str = "CODING_WITH_AI_API";

/// The two values every template is parameterized on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldConfig {
    /// UE5 module name; becomes the Build.cs class name and the Source/ subdirectory.
    pub project_name: String,
    /// Macro stamped onto generated classes for cross-module export.
    pub module_api: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            module_api: DEFAULT_MODULE_API.to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Create a config with an explicit module API token.
    pub fn new(
        project_name: impl Into<String>,
        module_api: impl Into<String>,
    ) -> Result<Self, ScaffoldError> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;
        Ok(Self {
            project_name,
            module_api: module_api.into(),
        })
    }

    /// Create a config deriving the module API token from the project name,
    /// matching how UnrealBuildTool names module export macros.
    pub fn for_project(project_name: impl Into<String>) -> Result<Self, ScaffoldError> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;
        let module_api = derive_module_api(&project_name);
        Ok(Self {
            project_name,
            module_api,
        })
    }
}

/// Uppercase the name, collapse non-alphanumeric runs to `_`, append `_API`.
/// e.g. "Coding_with_Ai" → "CODING_WITH_AI_API", "My Game-01" → "MY_GAME_01_API"
pub fn derive_module_api(project_name: &str) -> String {
    let mut token = String::with_capacity(project_name.len() + 4);
    let mut last_was_sep = false;
    for ch in project_name.chars() {
        if ch.is_ascii_alphanumeric() {
            token.push(ch.to_ascii_uppercase());
            last_was_sep = false;
        } else if !last_was_sep && !token.is_empty() {
            token.push('_');
            last_was_sep = true;
        }
    }
    while token.ends_with('_') {
        token.pop();
    }
    token.push_str("_API");
    token
}

/// The name is used as a directory component, a C# class name, and a macro
/// stem, so it must be a single plain path component starting with a letter.
fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::InvalidProjectName(
            "must not be empty".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ScaffoldError::InvalidProjectName(
            "must not contain path separators".to_string(),
        ));
    }

    let mut components = Path::new(name).components();
    match components.next() {
        Some(Component::Normal(_)) => {}
        _ => {
            return Err(ScaffoldError::InvalidProjectName(
                "must be a normal directory name".to_string(),
            ));
        }
    }
    if components.next().is_some() {
        return Err(ScaffoldError::InvalidProjectName(
            "must be a single path component".to_string(),
        ));
    }

    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(ScaffoldError::InvalidProjectName(
            "must start with an ASCII letter".to_string(),
        ));
    }

    Ok(())
}
