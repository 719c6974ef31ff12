//! `brokkr resolve` command handler

use anyhow::{anyhow, Result};
use brokkr_scaffold::alias::register_alias;
use camino::Utf8PathBuf;

use crate::cli::ResolveArgs;
use crate::output;

/// Register an import path alias in the project at the working directory
pub fn run(args: ResolveArgs) -> Result<()> {
    let cwd = Utf8PathBuf::from_path_buf(std::env::current_dir()?)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;

    let written = register_alias(&cwd, &args.alias, &args.path)?;

    output::success(&format!(
        "Alias '{}' now points at '{}'",
        args.alias.trim(),
        args.path.trim()
    ));
    for file in &written {
        let rel = file.strip_prefix(&cwd).unwrap_or(file.as_path());
        output::kv("updated", rel.as_str());
    }

    Ok(())
}
