//! Import path alias registration
//!
//! An alias maps a short name to a directory so imports can skip relative
//! path chains. Three tools each read their own config, so a registration
//! must land in all of them: `jsconfig.json` (editor language service),
//! `.babelrc` (module-resolver plugin), and `.vscode/settings.json`
//! (path-intellisense completion).
//!
//! Every check runs before the first write. When a registration fails, no
//! file has been touched; when it succeeds, each file is rewritten
//! atomically.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::write_json_atomic;

const JSCONFIG_FILE: &str = "jsconfig.json";
const BABELRC_FILE: &str = ".babelrc";
const VSCODE_SETTINGS_FILE: &str = ".vscode/settings.json";

const MODULE_RESOLVER_PLUGIN: &str = "module-resolver";

/// Register an alias for a target path in all three config files
///
/// `root` is the project directory the config files live under; `target`
/// must be a relative path that exists under it. Returns the rewritten
/// file paths.
pub fn register_alias(root: &Utf8Path, alias: &str, target: &str) -> Result<Vec<Utf8PathBuf>> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(Error::EmptyAlias);
    }

    // `join` replaces the base when handed an absolute path, so absolute
    // targets are rejected rather than resolved.
    let target = target.trim().trim_end_matches('/');
    if target.is_empty() || Utf8Path::new(target).is_absolute() || !root.join(target).exists() {
        return Err(Error::alias_target_missing(target));
    }

    debug!("Registering alias '{}' -> '{}' in {}", alias, target, root);

    let jsconfig_path = root.join(JSCONFIG_FILE);
    let babelrc_path = root.join(BABELRC_FILE);
    let settings_path = root.join(VSCODE_SETTINGS_FILE);

    let mut jsconfig = read_config(&jsconfig_path, JSCONFIG_FILE)?;
    let mut babelrc = read_config(&babelrc_path, BABELRC_FILE)?;
    let mut settings = read_config(&settings_path, VSCODE_SETTINGS_FILE)?;

    // The babel entry is the anchor: without the module-resolver plugin
    // configured, an alias would silently do nothing at build time.
    let resolver_index = find_module_resolver(&babelrc)
        .ok_or_else(|| Error::module_resolver_not_found(BABELRC_FILE))?;

    check_not_registered(&jsconfig, &babelrc, resolver_index, &settings, alias)?;

    insert_jsconfig_alias(&mut jsconfig, alias, target)?;
    insert_babel_alias(&mut babelrc, resolver_index, alias, target)?;
    insert_settings_alias(&mut settings, alias, target)?;

    write_json_atomic(&jsconfig_path, &jsconfig)?;
    write_json_atomic(&babelrc_path, &babelrc)?;
    write_json_atomic(&settings_path, &settings)?;

    Ok(vec![jsconfig_path, babelrc_path, settings_path])
}

/// Read and parse one config file, with errors naming the file
fn read_config(path: &Utf8Path, file: &str) -> Result<Value> {
    if !path.exists() {
        return Err(Error::config_not_found(path.as_str()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::malformed_config(file, e.to_string()))
}

/// Locate the module-resolver entry in the babel plugins array
///
/// The expected shape is a two-element array: the plugin name followed by
/// its options object. Bare-string plugin entries are skipped.
fn find_module_resolver(babelrc: &Value) -> Option<usize> {
    babelrc
        .get("plugins")
        .and_then(Value::as_array)?
        .iter()
        .position(|entry| {
            entry
                .as_array()
                .map(|parts| {
                    parts.len() == 2
                        && parts[0].as_str() == Some(MODULE_RESOLVER_PLUGIN)
                        && parts[1].is_object()
                })
                .unwrap_or(false)
        })
}

/// Fail if the alias is already defined in any of the three documents
fn check_not_registered(
    jsconfig: &Value,
    babelrc: &Value,
    resolver_index: usize,
    settings: &Value,
    alias: &str,
) -> Result<()> {
    let wildcard = format!("{alias}/*");
    if let Some(paths) = jsconfig
        .get("compilerOptions")
        .and_then(|c| c.get("paths"))
        .and_then(Value::as_object)
    {
        if paths.contains_key(alias) || paths.contains_key(&wildcard) {
            return Err(Error::alias_exists(alias, JSCONFIG_FILE));
        }
    }

    if let Some(aliases) = babelrc["plugins"][resolver_index][1]
        .get("alias")
        .and_then(Value::as_object)
    {
        if aliases.contains_key(alias) {
            return Err(Error::alias_exists(alias, BABELRC_FILE));
        }
    }

    if let Some(mappings) = settings
        .get("path-intellisense.mappings")
        .and_then(Value::as_object)
    {
        if mappings.contains_key(alias) {
            return Err(Error::alias_exists(alias, VSCODE_SETTINGS_FILE));
        }
    }

    Ok(())
}

/// Insert `"<alias>/*": ["<target>/*"]` under compilerOptions.paths
fn insert_jsconfig_alias(jsconfig: &mut Value, alias: &str, target: &str) -> Result<()> {
    let doc = jsconfig.as_object_mut().ok_or_else(|| {
        Error::malformed_config(JSCONFIG_FILE, "top level is not an object")
    })?;

    let compiler = doc
        .entry("compilerOptions")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| {
            Error::malformed_config(JSCONFIG_FILE, "compilerOptions is not an object")
        })?;

    let paths = compiler
        .entry("paths")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| {
            Error::malformed_config(JSCONFIG_FILE, "compilerOptions.paths is not an object")
        })?;

    paths.insert(format!("{alias}/*"), json!([format!("{target}/*")]));
    Ok(())
}

/// Insert `"<alias>": "./<target>"` into the module-resolver options
fn insert_babel_alias(
    babelrc: &mut Value,
    resolver_index: usize,
    alias: &str,
    target: &str,
) -> Result<()> {
    let options = babelrc["plugins"][resolver_index][1]
        .as_object_mut()
        .ok_or_else(|| {
            Error::malformed_config(BABELRC_FILE, "module-resolver options are not an object")
        })?;

    let aliases = options
        .entry("alias")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| {
            Error::malformed_config(BABELRC_FILE, "module-resolver alias is not an object")
        })?;

    aliases.insert(alias.to_string(), json!(format!("./{target}")));
    Ok(())
}

/// Insert `"<alias>": "${workspaceRoot}/<target>"` into the editor mappings
fn insert_settings_alias(settings: &mut Value, alias: &str, target: &str) -> Result<()> {
    let doc = settings.as_object_mut().ok_or_else(|| {
        Error::malformed_config(VSCODE_SETTINGS_FILE, "top level is not an object")
    })?;

    let mappings = doc
        .entry("path-intellisense.mappings")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| {
            Error::malformed_config(
                VSCODE_SETTINGS_FILE,
                "path-intellisense.mappings is not an object",
            )
        })?;

    mappings.insert(alias.to_string(), json!(format!("${{workspaceRoot}}/{target}")));
    Ok(())
}
