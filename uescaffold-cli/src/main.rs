use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use uescaffold_codegen::generator::display_path;
use uescaffold_codegen::{Scaffold, ScaffoldConfig};

#[derive(Parser)]
#[command(name = "uescaffold", about = "uescaffold – UE5 C++ gameplay scaffold generator")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Running with no subcommand generates into the current directory.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the full scaffold into a project root, overwriting existing files
    Generate {
        /// Project root (defaults to current directory)
        #[arg(default_value = ".")]
        root: PathBuf,
        #[command(flatten)]
        naming: NamingArgs,
    },
    /// Show the artifact plan without writing anything
    List {
        /// Project root (defaults to current directory)
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        naming: NamingArgs,
    },
    /// Print the rendered content of one artifact by its relative path
    Preview {
        /// Relative artifact path, e.g. Public/Characters/AgentKaiCharacter.h
        path: String,
        #[command(flatten)]
        naming: NamingArgs,
    },
}

#[derive(Args, Default)]
struct NamingArgs {
    /// Project name override (default: Coding_with_Ai)
    #[arg(short, long)]
    name: Option<String>,
    /// Module API macro override (default: derived from the project name)
    #[arg(short, long)]
    module_api: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_generate(Path::new("."), &NamingArgs::default()),
        Some(Command::Generate { root, naming }) => cmd_generate(&root, &naming),
        Some(Command::List { root, json, naming }) => cmd_list(&root, json, &naming),
        Some(Command::Preview { path, naming }) => cmd_preview(&path, &naming),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

impl NamingArgs {
    fn resolve(&self) -> Result<ScaffoldConfig> {
        let config = match (&self.name, &self.module_api) {
            (None, None) => ScaffoldConfig::default(),
            (Some(name), None) => ScaffoldConfig::for_project(name.clone())?,
            (Some(name), Some(api)) => ScaffoldConfig::new(name.clone(), api.clone())?,
            (None, Some(api)) => {
                ScaffoldConfig::new(uescaffold_codegen::config::DEFAULT_PROJECT_NAME, api.clone())?
            }
        };
        Ok(config)
    }
}

fn cmd_generate(root: &Path, naming: &NamingArgs) -> Result<()> {
    let config = naming.resolve()?;
    let project_name = config.project_name.clone();
    let scaffold = Scaffold::new(root, config);

    let report = scaffold
        .generate()
        .with_context(|| format!("Failed to scaffold '{}'", root.display()))?;

    for dir in &report.dirs {
        println!("  {} Ensured {}", "→".dimmed(), display_path(dir, root));
    }
    for file in &report.files {
        println!("  {} Wrote {}", "→".dimmed(), display_path(file, root));
    }

    println!(
        "{} {} C++ scaffolding generated. Review and build from the UE5 Editor.",
        "✓".green().bold(),
        project_name.bold(),
    );

    Ok(())
}

fn cmd_list(root: &Path, json: bool, naming: &NamingArgs) -> Result<()> {
    let config = naming.resolve()?;
    let scaffold = Scaffold::new(root, config);
    let rendered = scaffold.render();

    if json {
        let plan = serde_json::json!({
            "config": scaffold.config(),
            "source_root": scaffold.layout().source_root(),
            "files": rendered.relative_paths().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Source root".bold(),
        scaffold.layout().source_root().display()
    );
    for path in rendered.relative_paths() {
        println!("  {} {}", "→".dimmed(), path);
    }
    println!(
        "{} {} artifact(s), nothing written",
        "✓".green().bold(),
        rendered.file_count()
    );

    Ok(())
}

fn cmd_preview(path: &str, naming: &NamingArgs) -> Result<()> {
    let config = naming.resolve()?;
    let scaffold = Scaffold::new(".", config);
    let rendered = scaffold.render();

    let content = rendered.get(path).with_context(|| {
        let known: Vec<&str> = rendered.relative_paths().collect();
        format!(
            "No artifact at '{}'. Known paths:\n  {}",
            path,
            known.join("\n  ")
        )
    })?;

    print!("{content}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generate_writes_scaffold() {
        let tmp = TempDir::new().unwrap();
        cmd_generate(tmp.path(), &NamingArgs::default()).unwrap();

        assert!(tmp.path().join("Source/Coding_with_Ai.Build.cs").exists());
        assert!(tmp
            .path()
            .join("Source/Coding_with_Ai/Public/Characters/AgentKaiCharacter.h")
            .exists());
    }

    #[test]
    fn generate_rejects_bad_name() {
        let tmp = TempDir::new().unwrap();
        let naming = NamingArgs {
            name: Some("../escape".to_string()),
            module_api: None,
        };
        assert!(cmd_generate(tmp.path(), &naming).is_err());
        assert!(!tmp.path().join("Source").exists());
    }

    #[test]
    fn list_is_read_only() {
        let tmp = TempDir::new().unwrap();
        cmd_list(tmp.path(), false, &NamingArgs::default()).unwrap();
        assert!(!tmp.path().join("Source").exists());
    }

    #[test]
    fn preview_unknown_path_errors() {
        let result = cmd_preview("Public/Nope.h", &NamingArgs::default());
        assert!(result.is_err());
    }

    #[test]
    fn preview_known_path_ok() {
        cmd_preview("Public/AI/EnemyAIController.h", &NamingArgs::default()).unwrap();
    }
}
