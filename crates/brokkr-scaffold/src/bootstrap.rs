//! Package-manager bootstrap
//!
//! yarn owns manifest generation and dependency installation; the scaffolder
//! shells out to it and streams its output. Commands run one at a time, each
//! awaited to completion before the next step.

use camino::Utf8Path;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::process::{command_exists, CommandRunner, RunStatus};

/// Package manager used for manifest generation and installs
pub const PACKAGE_MANAGER: &str = "yarn";

/// Development toolchain installed into every scaffold: babel for
/// transpiling, mocha/chai/sinon for tests, nyc + istanbul for coverage,
/// esdoc for documentation, eslint for linting, nodemon for watch mode,
/// and the module-resolver plugin backing path aliases.
pub const DEV_DEPENDENCIES: [&str; 15] = [
    "babel-cli",
    "babel-plugin-istanbul",
    "babel-plugin-module-resolver",
    "babel-preset-es2015",
    "babel-preset-stage-2",
    "babel-register",
    "chai",
    "esdoc",
    "esdoc-standard-plugin",
    "eslint",
    "eslint-config-google",
    "mocha",
    "nodemon",
    "nyc",
    "sinon",
];

/// Check that the package manager is available in PATH
pub fn check_package_manager() -> Result<()> {
    if !command_exists(PACKAGE_MANAGER) {
        return Err(Error::YarnNotFound);
    }
    Ok(())
}

/// Run `yarn init --yes` in the project root to generate package.json
pub async fn initialize_manifest(
    runner: &dyn CommandRunner,
    root: &Utf8Path,
) -> Result<RunStatus> {
    info!("Initializing package manifest in {}", root);
    runner.run(PACKAGE_MANAGER, &["init", "--yes"], root).await
}

/// Run `yarn add --dev` with the fixed development toolchain
pub async fn install_dev_dependencies(
    runner: &dyn CommandRunner,
    root: &Utf8Path,
) -> Result<RunStatus> {
    info!(
        "Installing {} development dependencies in {}",
        DEV_DEPENDENCIES.len(),
        root
    );

    let mut args = vec!["add", "--dev"];
    args.extend(DEV_DEPENDENCIES);
    debug!("{} {}", PACKAGE_MANAGER, args.join(" "));

    runner.run(PACKAGE_MANAGER, &args, root).await
}
