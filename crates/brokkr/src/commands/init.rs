//! `brokkr init` command handler

use anyhow::{anyhow, Context, Result};
use brokkr_scaffold::answers::{self, ProjectAnswers, LICENSES};
use brokkr_scaffold::process::RunStatus;
use brokkr_scaffold::{bootstrap, layout, manifest, templates, SystemRunner};
use camino::Utf8PathBuf;
use dialoguer::{Confirm, Input};

use crate::cli::InitArgs;
use crate::output;

/// Scaffold a new project in the current working directory
pub async fn run(args: InitArgs) -> Result<()> {
    output::header("Create New Project");

    let answers = collect_answers(&args)?;

    let cwd = Utf8PathBuf::from_path_buf(std::env::current_dir()?)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;
    let root = layout::project_root(&cwd, &answers.name);

    output::kv("Project", &answers.name);
    output::kv("Author", &format!("{} <{}>", answers.author, answers.email));
    output::kv("License", &answers.license);
    output::kv("Location", root.as_str());
    println!();

    // Fail before any directory work when yarn is missing
    bootstrap::check_package_manager()?;

    if root.exists() {
        let recreate = args.force
            || Confirm::new()
                .with_prompt(format!(
                    "Directory {} already exists. Delete and recreate it?",
                    root
                ))
                .default(false)
                .interact()?;

        if recreate {
            output::info("Recreating project directory...");
            layout::reset_layout(&root)?;
        } else {
            output::info("Keeping existing directory contents");
            layout::ensure_layout(&root)?;
        }
    } else {
        output::info("Creating project directory...");
        layout::ensure_layout(&root)?;
    }

    let runner = SystemRunner;

    output::info("Initializing package manifest...");
    let status = bootstrap::initialize_manifest(&runner, &root).await?;
    if !status.success() {
        output::warning(&format!("yarn init exited with {}", status_label(status)));
        tracing::warn!("yarn init did not complete cleanly in {}", root);
    }

    output::info("Installing development dependencies...");
    let status = bootstrap::install_dev_dependencies(&runner, &root).await?;
    if !status.success() {
        output::warning(&format!("yarn add exited with {}", status_label(status)));
        tracing::warn!("dependency installation did not complete cleanly in {}", root);
    }

    output::info("Writing project files...");
    let written = templates::write_project_files(&root, &answers)?;
    for file in &written {
        let rel = file.strip_prefix(&root).unwrap_or(file.as_path());
        output::kv("created", rel.as_str());
    }

    output::info("Patching package manifest...");
    manifest::patch_manifest(&root, &answers).context("Failed to patch the generated manifest")?;

    println!();
    output::success(&format!("Project '{}' created successfully", answers.name));
    println!();
    output::info("Next steps:");
    println!("   1. cd {}", answers.name);
    println!("   2. yarn start");
    println!("   3. Register an alias with: brokkr resolve <alias> <path>");

    Ok(())
}

/// Resolve each answer from its flag, or prompt for it
///
/// Prompted values re-prompt until the validator passes; flag values go
/// through the same validators and fail the command before the first
/// prompt when invalid.
fn collect_answers(args: &InitArgs) -> Result<ProjectAnswers> {
    if let Some(name) = &args.name {
        answers::validate_project_name(name)?;
    }
    if let Some(author) = &args.author {
        answers::validate_author(author)?;
    }
    if let Some(email) = &args.email {
        answers::validate_email(email)?;
    }
    if let Some(license) = &args.license {
        answers::validate_license(license)?;
    }

    let name = match &args.name {
        Some(name) => name.clone(),
        None => Input::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| answers::validate_project_name(input))
            .interact_text()?,
    };

    let author = match &args.author {
        Some(author) => author.clone(),
        None => Input::new()
            .with_prompt("Author")
            .validate_with(|input: &String| answers::validate_author(input))
            .interact_text()?,
    };

    let email = match &args.email {
        Some(email) => email.clone(),
        None => Input::new()
            .with_prompt("Author email")
            .validate_with(|input: &String| answers::validate_email(input))
            .interact_text()?,
    };

    let license = match &args.license {
        Some(license) => license.clone(),
        None => Input::new()
            .with_prompt(format!("License ({})", LICENSES.join(", ")))
            .validate_with(|input: &String| answers::validate_license(input))
            .interact_text()?,
    };

    Ok(ProjectAnswers::new(name, author, email, license)?)
}

/// Describe how a child process ended
fn status_label(status: RunStatus) -> String {
    match status.code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four valid flags, so collect_answers never reaches a prompt
    fn all_flags() -> InitArgs {
        InitArgs {
            name: Some("demo".to_string()),
            author: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            license: Some("MIT".to_string()),
            force: false,
        }
    }

    #[test]
    fn test_collect_answers_from_flags_skips_prompts() {
        let answers = collect_answers(&all_flags()).unwrap();
        assert_eq!(answers.name, "demo");
        assert_eq!(answers.author, "Ada Lovelace");
        assert_eq!(answers.email, "ada@example.com");
        assert_eq!(answers.license, "MIT");
    }

    #[test]
    fn test_invalid_email_flag_fails_the_command() {
        let mut args = all_flags();
        args.email = Some("nope".to_string());

        let err = collect_answers(&args).unwrap_err();
        assert!(err.to_string().contains("Invalid email address"));
    }

    #[test]
    fn test_unknown_license_flag_fails_the_command() {
        let mut args = all_flags();
        args.license = Some("Beerware".to_string());

        let err = collect_answers(&args).unwrap_err();
        assert!(err.to_string().contains("Unknown license"));
    }
}
