pub mod config;
pub mod error;
pub mod generator;
pub mod layout;

// Static artifact templates
pub mod templates;

// Re-exports
pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use generator::{GeneratedScaffold, Scaffold, ScaffoldReport};
pub use layout::SourceLayout;
