use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use uescaffold_codegen::{Scaffold, ScaffoldConfig};

/// Every path generation produces, relative to the project root.
fn expected_files(root: &Path) -> Vec<PathBuf> {
    let source_root = root.join("Source/Coding_with_Ai");
    [
        "../Coding_with_Ai.Build.cs",
        "Public/Characters/AgentKaiCharacter.h",
        "Private/Characters/AgentKaiCharacter.cpp",
        "Public/Collectibles/CollectibleItem.h",
        "Private/Collectibles/CollectibleItem.cpp",
        "Public/Characters/EnemyAICharacter.h",
        "Private/Characters/EnemyAICharacter.cpp",
        "Public/AI/EnemyAIController.h",
        "Private/AI/EnemyAIController.cpp",
        "Public/Shaders/ProgressShaderManager.h",
        "Private/Shaders/ProgressShaderManager.cpp",
    ]
    .iter()
    .map(|rel| source_root.join(rel))
    .collect()
}

#[test]
fn test_generate_into_empty_root() {
    let tmp = TempDir::new().unwrap();
    let scaffold = Scaffold::new(tmp.path(), ScaffoldConfig::default());

    let report = scaffold.generate().unwrap();

    // Three directories ensured, in order.
    assert_eq!(
        report.dirs,
        vec![
            tmp.path().join("Source/Coding_with_Ai"),
            tmp.path().join("Source/Coding_with_Ai/Public"),
            tmp.path().join("Source/Coding_with_Ai/Private"),
        ]
    );
    for dir in &report.dirs {
        assert!(dir.is_dir(), "{} should be a directory", dir.display());
    }

    // Eleven files written, each non-empty with exactly one trailing newline.
    assert_eq!(report.files.len(), 11);
    for file in &report.files {
        let content = fs::read_to_string(file).unwrap();
        assert!(!content.is_empty(), "{} is empty", file.display());
        assert!(
            content.ends_with('\n') && !content.ends_with("\n\n"),
            "{} should end with exactly one newline",
            file.display()
        );
    }

    for expected in expected_files(tmp.path()) {
        assert!(expected.is_file(), "missing {}", expected.display());
    }

    // The build descriptor sits one level above the source root.
    assert!(tmp.path().join("Source/Coding_with_Ai.Build.cs").is_file());
}

#[test]
fn test_second_run_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let scaffold = Scaffold::new(tmp.path(), ScaffoldConfig::default());

    let first_report = scaffold.generate().unwrap();
    let first: Vec<String> = first_report
        .files
        .iter()
        .map(|f| fs::read_to_string(f).unwrap())
        .collect();

    let second_report = scaffold.generate().unwrap();
    assert_eq!(first_report.files, second_report.files);

    let second: Vec<String> = second_report
        .files
        .iter()
        .map(|f| fs::read_to_string(f).unwrap())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_constants_stamped_into_artifacts() {
    let tmp = TempDir::new().unwrap();
    let scaffold = Scaffold::new(tmp.path(), ScaffoldConfig::default());
    scaffold.generate().unwrap();

    let build_cs = fs::read_to_string(tmp.path().join("Source/Coding_with_Ai.Build.cs")).unwrap();
    assert!(build_cs.contains("public class Coding_with_Ai : ModuleRules"));

    let header = fs::read_to_string(
        tmp.path()
            .join("Source/Coding_with_Ai/Public/Characters/AgentKaiCharacter.h"),
    )
    .unwrap();
    assert!(header.contains("CODING_WITH_AI_API"));
    assert!(header.contains("class CODING_WITH_AI_API AAgentKaiCharacter : public ACharacter"));
}

#[test]
fn test_overwrites_existing_files_unconditionally() {
    let tmp = TempDir::new().unwrap();
    let scaffold = Scaffold::new(tmp.path(), ScaffoldConfig::default());

    // Pre-seed one artifact with hand-edited content and add a stray file.
    let header_path = tmp
        .path()
        .join("Source/Coding_with_Ai/Public/Characters/AgentKaiCharacter.h");
    fs::create_dir_all(header_path.parent().unwrap()).unwrap();
    fs::write(&header_path, "// hand edits\n").unwrap();
    let stray = tmp.path().join("Source/Coding_with_Ai/Notes.txt");
    fs::write(&stray, "keep me\n").unwrap();

    let report = scaffold.generate().unwrap();

    let header = fs::read_to_string(&header_path).unwrap();
    assert!(!header.contains("hand edits"));
    assert!(header.contains("AAgentKaiCharacter"));

    // The write set is fixed: stray files are neither listed nor touched.
    assert_eq!(report.files.len(), 11);
    assert!(!report.files.contains(&stray));
    assert_eq!(fs::read_to_string(&stray).unwrap(), "keep me\n");
}

#[test]
fn test_custom_project_name_renames_module() {
    let tmp = TempDir::new().unwrap();
    let config = ScaffoldConfig::for_project("Skyline").unwrap();
    let scaffold = Scaffold::new(tmp.path(), config);

    scaffold.generate().unwrap();

    let build_cs = fs::read_to_string(tmp.path().join("Source/Skyline.Build.cs")).unwrap();
    assert!(build_cs.contains("public class Skyline : ModuleRules"));

    let header = fs::read_to_string(
        tmp.path()
            .join("Source/Skyline/Public/Characters/AgentKaiCharacter.h"),
    )
    .unwrap();
    assert!(header.contains("class SKYLINE_API AAgentKaiCharacter"));
}

#[test]
fn test_unusable_root_fails_before_any_write() {
    let tmp = TempDir::new().unwrap();
    // A root that is a regular file makes directory creation fail up front.
    let root = tmp.path().join("proj");
    fs::write(&root, "not a directory").unwrap();

    let scaffold = Scaffold::new(&root, ScaffoldConfig::default());
    let err = scaffold.generate().unwrap_err();
    assert!(err.to_string().contains("Source"));
    assert_eq!(fs::read_to_string(&root).unwrap(), "not a directory");
}
