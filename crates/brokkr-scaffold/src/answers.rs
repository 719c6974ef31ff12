//! Collected project answers and their validators
//!
//! Prompting lives in the CLI crate; this module owns the answer struct and
//! the pure validation rules so they can be unit tested and shared between
//! interactive prompts and command-line flags.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pre-compiled regex for basic email syntax (local@domain.tld)
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Licenses accepted for the generated package.json
pub const LICENSES: [&str; 9] = [
    "MIT",
    "ISC",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "GPL-3.0",
    "LGPL-3.0",
    "MPL-2.0",
    "UNLICENSED",
];

/// Everything the scaffolder needs to know about the project being created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAnswers {
    /// Project (and root directory) name
    pub name: String,
    /// Author name written to package.json
    pub author: String,
    /// Author email written to package.json
    pub email: String,
    /// SPDX license identifier
    pub license: String,
}

impl ProjectAnswers {
    /// Build answers from raw values, running every validator
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        license: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let author = author.into();
        let email = email.into();
        let license = license.into();

        validate_project_name(&name)?;
        validate_author(&author)?;
        validate_email(&email)?;
        validate_license(&license)?;

        Ok(Self {
            name: name.trim().to_string(),
            author: author.trim().to_string(),
            email: email.trim().to_string(),
            license: license.trim().to_string(),
        })
    }
}

/// Validate a project name: anything non-empty after trimming
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_project_name(name));
    }
    Ok(())
}

/// Validate an author name: anything non-empty after trimming
pub fn validate_author(author: &str) -> Result<()> {
    if author.trim().is_empty() {
        return Err(Error::invalid_author_name(author));
    }
    Ok(())
}

/// Validate email syntax against the local@domain.tld pattern
pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(Error::invalid_email(email));
    }
    Ok(())
}

/// Validate a license against the allowed list (case-sensitive)
pub fn validate_license(license: &str) -> Result<()> {
    if !LICENSES.contains(&license.trim()) {
        return Err(Error::unknown_license(license, LICENSES.join(", ")));
    }
    Ok(())
}
