use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::layout::SourceLayout;
use crate::templates;

/// A rendered scaffold, keyed by path relative to the source root.
///
/// The Build.cs descriptor sits one level above the source root, so its key
/// is `../<ProjectName>.Build.cs`. Insertion order is the write order and
/// matches the progress output, which is why this is an IndexMap and not a
/// sorted map.
#[derive(Debug, Clone, Default)]
pub struct GeneratedScaffold {
    files: IndexMap<String, String>,
}

impl GeneratedScaffold {
    fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// All rendered artifacts, in write order.
    pub fn files(&self) -> &IndexMap<String, String> {
        &self.files
    }

    /// Number of artifacts.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Content of a single artifact by its relative path.
    pub fn get(&self, relative_path: &str) -> Option<&str> {
        self.files.get(relative_path).map(String::as_str)
    }

    /// The fixed relative path set, in write order.
    pub fn relative_paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

/// What a run touched, for per-step progress reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Directories ensured, in creation order.
    pub dirs: Vec<PathBuf>,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

/// The scaffold generator: renders the fixed artifact set for a project root
/// and writes it out, overwriting unconditionally on every run.
#[derive(Debug, Clone)]
pub struct Scaffold {
    config: ScaffoldConfig,
    layout: SourceLayout,
}

impl Scaffold {
    pub fn new(project_root: impl Into<PathBuf>, config: ScaffoldConfig) -> Self {
        let layout = SourceLayout::new(project_root, &config.project_name);
        Self { config, layout }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    pub fn layout(&self) -> &SourceLayout {
        &self.layout
    }

    /// Render every artifact without touching the filesystem.
    ///
    /// One Build.cs plus five header/source pairs, header before source,
    /// in the order the original tool wrote them.
    pub fn render(&self) -> GeneratedScaffold {
        let cfg = &self.config;
        let mut out = GeneratedScaffold::default();

        out.add_file(
            format!("../{}.Build.cs", cfg.project_name),
            templates::build_cs::descriptor(cfg),
        );

        out.add_file(
            "Public/Characters/AgentKaiCharacter.h",
            templates::player::header(cfg),
        );
        out.add_file(
            "Private/Characters/AgentKaiCharacter.cpp",
            templates::player::source(cfg),
        );

        out.add_file(
            "Public/Collectibles/CollectibleItem.h",
            templates::collectible::header(cfg),
        );
        out.add_file(
            "Private/Collectibles/CollectibleItem.cpp",
            templates::collectible::source(cfg),
        );

        out.add_file(
            "Public/Characters/EnemyAICharacter.h",
            templates::enemy::header(cfg),
        );
        out.add_file(
            "Private/Characters/EnemyAICharacter.cpp",
            templates::enemy::source(cfg),
        );

        out.add_file(
            "Public/AI/EnemyAIController.h",
            templates::ai_controller::header(cfg),
        );
        out.add_file(
            "Private/AI/EnemyAIController.cpp",
            templates::ai_controller::source(cfg),
        );

        out.add_file(
            "Public/Shaders/ProgressShaderManager.h",
            templates::shader::header(cfg),
        );
        out.add_file(
            "Private/Shaders/ProgressShaderManager.cpp",
            templates::shader::source(cfg),
        );

        out
    }

    /// Ensure the source tree, then write every artifact in order.
    ///
    /// Each file is fully overwritten. A failure partway through propagates
    /// immediately; earlier writes stay in place and later ones never happen.
    pub fn generate(&self) -> Result<ScaffoldReport, ScaffoldError> {
        let dirs = self.layout.ensure()?;
        let rendered = self.render();

        let mut files = Vec::with_capacity(rendered.file_count());
        for (relative_path, content) in rendered.files() {
            let full_path = self.layout.source_root().join(relative_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| ScaffoldError::io(parent.to_path_buf(), e))?;
            }
            fs::write(&full_path, content).map_err(|e| ScaffoldError::io(full_path.clone(), e))?;
            files.push(full_path);
        }

        Ok(ScaffoldReport { dirs, files })
    }
}

/// Display form of a written path: relative to the project root when possible.
pub fn display_path(path: &Path, project_root: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}
