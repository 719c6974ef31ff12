//! # brokkr-scaffold
//!
//! Scaffolding library for the Brokkr CLI providing:
//! - Answer collection types and input validators
//! - Project directory layout (`.vscode`, `spec`, `src`)
//! - yarn bootstrap (manifest init, dev dependency install)
//! - Template file rendering and manifest patching
//! - Import path alias registration across tool configs
//!
//! # Examples
//!
//! ## Scaffold project files
//!
//! ```no_run
//! use brokkr_scaffold::answers::ProjectAnswers;
//! use brokkr_scaffold::{layout, templates};
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let answers = ProjectAnswers::new("demo", "Ada Lovelace", "ada@example.com", "MIT")?;
//! let root = Utf8Path::new("/tmp/demo");
//! layout::ensure_layout(root)?;
//! let written = templates::write_project_files(root, &answers)?;
//! println!("created {} files", written.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Register an import path alias
//!
//! ```no_run
//! use brokkr_scaffold::alias::register_alias;
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let updated = register_alias(Utf8Path::new("."), "components", "src/components")?;
//! for file in updated {
//!     println!("rewrote {file}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod answers;
pub mod bootstrap;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod process;
pub mod templates;
mod utils;

pub use error::{Error, Result};

// Re-export the pieces command code touches most
pub use answers::{ProjectAnswers, LICENSES};
pub use process::{CommandRunner, RunStatus, SystemRunner};
