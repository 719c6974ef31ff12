//! Error types for brokkr-scaffold

use thiserror::Error;

/// Result type alias using brokkr-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid project name
    #[error("Invalid project name: {name}. Must not be empty")]
    InvalidProjectName { name: String },

    /// Invalid author name
    #[error("Invalid author name: {name}. Must not be empty")]
    InvalidAuthorName { name: String },

    /// Invalid email address
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    /// License not in the allowed list
    #[error("Unknown license: {license}. Allowed licenses: {allowed}")]
    UnknownLicense { license: String, allowed: String },

    /// Alias name is empty
    #[error("Alias name must not be empty")]
    EmptyAlias,

    /// Alias target path does not exist
    #[error("Alias target path not found: {path}")]
    AliasTargetMissing { path: String },

    /// Alias already registered in a config file
    #[error("Alias '{alias}' is already defined in {file}")]
    AliasExists { alias: String, file: String },

    /// No module-resolver plugin entry in .babelrc
    #[error("No module-resolver plugin entry found in {file}")]
    ModuleResolverNotFound { file: String },

    /// Required config file missing
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Config file is not valid JSON
    #[error("Malformed config file {file}: {message}")]
    MalformedConfig { file: String, message: String },

    /// Project manifest missing
    #[error("Manifest not found: {path}. Run the package manager init first")]
    ManifestNotFound { path: String },

    /// Manifest has an unexpected shape
    #[error("Malformed manifest {path}: {message}")]
    MalformedManifest { path: String, message: String },

    /// yarn command not found
    #[error("yarn not found. Please install yarn: https://yarnpkg.com/getting-started/install")]
    YarnNotFound,

    /// Process execution error
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create an invalid author name error
    pub fn invalid_author_name(name: impl Into<String>) -> Self {
        Self::InvalidAuthorName { name: name.into() }
    }

    /// Create an invalid email error
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    /// Create an unknown license error
    pub fn unknown_license(license: impl Into<String>, allowed: impl Into<String>) -> Self {
        Self::UnknownLicense {
            license: license.into(),
            allowed: allowed.into(),
        }
    }

    /// Create an alias target missing error
    pub fn alias_target_missing(path: impl Into<String>) -> Self {
        Self::AliasTargetMissing { path: path.into() }
    }

    /// Create an alias exists error
    pub fn alias_exists(alias: impl Into<String>, file: impl Into<String>) -> Self {
        Self::AliasExists {
            alias: alias.into(),
            file: file.into(),
        }
    }

    /// Create a module-resolver not found error
    pub fn module_resolver_not_found(file: impl Into<String>) -> Self {
        Self::ModuleResolverNotFound { file: file.into() }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a malformed config error
    pub fn malformed_config(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedConfig {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a manifest not found error
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create a malformed manifest error
    pub fn malformed_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }
}
