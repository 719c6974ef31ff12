//! package.json patching
//!
//! `yarn init` generates the manifest; this module overwrites the computed
//! fields (entry point, license, scripts, author) and leaves everything
//! else as the package manager wrote it.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{json, Value};
use tracing::debug;

use crate::answers::ProjectAnswers;
use crate::error::{Error, Result};
use crate::utils::write_json_atomic;

/// Manifest file name generated by the package manager
pub const MANIFEST_FILE: &str = "package.json";

/// Entry point recorded in the manifest
const ENTRY_POINT: &str = "./src/index.js";

/// Patch the generated manifest with the computed fields
///
/// Returns the manifest path on success. Fails when the manifest is
/// missing (the package manager never ran) or is not a JSON object.
pub fn patch_manifest(root: &Utf8Path, answers: &ProjectAnswers) -> Result<Utf8PathBuf> {
    let path = root.join(MANIFEST_FILE);
    if !path.exists() {
        return Err(Error::manifest_not_found(path.as_str()));
    }

    debug!("Patching manifest: {}", path);

    let content = fs::read_to_string(&path)?;
    let mut manifest: Value = serde_json::from_str(&content)
        .map_err(|e| Error::malformed_manifest(path.as_str(), e.to_string()))?;

    let doc = manifest
        .as_object_mut()
        .ok_or_else(|| Error::malformed_manifest(path.as_str(), "top level is not an object"))?;

    doc.insert("main".to_string(), json!(ENTRY_POINT));
    doc.insert("license".to_string(), json!(answers.license));
    doc.insert(
        "scripts".to_string(),
        json!({
            "start": "babel-node ./src/index.js",
            "test": "NODE_ENV=test babel-node ./node_modules/.bin/nyc ./node_modules/.bin/mocha -R tap --recursive ./spec/",
            "build": "babel ./src -d ./dist",
            "docs": "esdoc",
        }),
    );
    doc.insert(
        "author".to_string(),
        json!({
            "name": answers.author,
            "email": answers.email,
        }),
    );

    write_json_atomic(&path, &manifest)?;
    Ok(path)
}
