use crate::config::ScaffoldConfig;

use super::render;

/// Module rules listing the engine subsystems the gameplay classes link
/// against (AI perception, gameplay tasks, UMG for the progress HUD).
const BUILD_CS: &str = r##"
using UnrealBuildTool;

public class {{project_name}} : ModuleRules
{
    public {{project_name}}(ReadOnlyTargetRules Target) : base(Target)
    {
        PCHUsage = PCHUsageMode.UseExplicitOrSharedPCHs;

        PublicDependencyModuleNames.AddRange(new string[]
        {
            "Core",
            "CoreUObject",
            "Engine",
            "InputCore",
            "AIModule",
            "GameplayTasks",
            "UMG"
        });

        PrivateDependencyModuleNames.AddRange(new string[] { });
    }
}
"##;

pub fn descriptor(config: &ScaffoldConfig) -> String {
    render(BUILD_CS, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_matches_project_name() {
        let out = descriptor(&ScaffoldConfig::default());
        assert!(out.contains("public class Coding_with_Ai : ModuleRules"));
        assert!(out.contains("\"AIModule\""));
    }
}
