//! Fixed configuration templates written into every scaffold
//!
//! Templates are static documents with a handful of `{var}` interpolation
//! points. Substitution is plain string replacement; nothing here needs a
//! template engine.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::answers::ProjectAnswers;
use crate::error::Result;

/// Editor settings: node-tdd test feedback, eslint autofix, and the
/// path-intellisense mapping table the alias registrar extends.
const VSCODE_SETTINGS: &str = r#"{
    "nodeTdd.activateOnStartup": true,
    "nodeTdd.coverageThreshold": 85,
    "nodeTdd.reporter": "tap",
    "nodeTdd.showCoverage": true,
    "eslint.autoFixOnSave": true,
    "path-intellisense.mappings": {}
}
"#;

/// Debug configurations for the entry point and the mocha suite
const VSCODE_LAUNCH: &str = r#"{
    "version": "0.2.0",
    "configurations": [
        {
            "type": "node",
            "request": "launch",
            "name": "Launch Program",
            "program": "${workspaceFolder}/src/index.js",
            "runtimeExecutable": "${workspaceFolder}/node_modules/.bin/babel-node"
        },
        {
            "type": "node",
            "request": "launch",
            "name": "Run Tests",
            "program": "${workspaceFolder}/node_modules/.bin/_mocha",
            "args": [
                "-R",
                "tap",
                "--recursive",
                "./spec/"
            ],
            "env": {
                "NODE_ENV": "test"
            }
        }
    ]
}
"#;

const ESDOC_SETTINGS: &str = r#"{
    "source": "./src",
    "destination": "./docs",
    "plugins": [
        {"name": "esdoc-standard-plugin"}
    ]
}
"#;

const ESLINT_SETTINGS: &str = r#"{
    "globals": {
        "Promise": true
    },
    "env": {
        "es6": true,
        "mocha": true,
        "node": true
    },
    "extends": "google",
    "parserOptions": {
        "ecmaVersion": 8,
        "sourceType": "module"
    },
    "rules": {
        "linebreak-style": "off"
    }
}
"#;

const GITIGNORE: &str = r#".nyc_output/**
coverage/**
node_modules/**
"#;

const NPMIGNORE: &str = r#".nyc_output/**
.vscode/**
coverage/**
node_modules/**
spec/**
src/**
.babelrc
.esdoc.json
.gitignore
.npmignore
.nycrc
jsconfig.json
"#;

const NYC_SETTINGS: &str = r#"{
    "report-dir": "./coverage",
    "reporter": [
        "html",
        "lcov"
    ],
    "clean": true,
    "include": [
        "src/**/*.js"
    ],
    "exclude": [
        "spec/**/*.spec.js"
    ],
    "require": [
        "babel-register"
    ],
    "sourceMap": false,
    "instrument": true,
    "all": true
}
"#;

/// Transpiler config: the module-resolver entry is the anchor the alias
/// registrar locates by shape, so fresh scaffolds start with an empty
/// alias table.
const BABEL_SETTINGS: &str = r#"{
    "presets": [
        "es2015",
        "stage-2"
    ],
    "plugins": [
        ["module-resolver", {
            "root": ["./src"],
            "alias": {}
        }]
    ],
    "env": {
        "test": {
            "plugins": ["istanbul"]
        }
    }
}
"#;

const JSCONFIG: &str = r#"{
    "compilerOptions": {
        "baseUrl": ".",
        "paths": {}
    },
    "exclude": [
        "node_modules",
        "coverage",
        "docs",
        "dist"
    ]
}
"#;

const README: &str = r#"# {project_name}

Created by {author} <{email}>.

Licensed under {license}.
"#;

/// Template files written relative to the project root
const TEMPLATE_FILES: [(&str, &str); 11] = [
    (".vscode/settings.json", VSCODE_SETTINGS),
    (".vscode/launch.json", VSCODE_LAUNCH),
    (".esdoc.json", ESDOC_SETTINGS),
    (".eslintrc", ESLINT_SETTINGS),
    (".gitignore", GITIGNORE),
    (".npmignore", NPMIGNORE),
    (".nycrc", NYC_SETTINGS),
    (".babelrc", BABEL_SETTINGS),
    ("jsconfig.json", JSCONFIG),
    ("README.md", README),
    ("src/index.js", ""),
];

/// Render a template by substituting `{var}` placeholders with the
/// collected answers
pub fn render_string(template: &str, answers: &ProjectAnswers) -> String {
    template
        .replace("{project_name}", &answers.name)
        .replace("{author}", &answers.author)
        .replace("{email}", &answers.email)
        .replace("{license}", &answers.license)
}

/// Write every template file under the project root
///
/// Parent directories are created as needed. Returns the paths written, in
/// write order.
pub fn write_project_files(
    root: &Utf8Path,
    answers: &ProjectAnswers,
) -> Result<Vec<Utf8PathBuf>> {
    let mut written = Vec::with_capacity(TEMPLATE_FILES.len());

    for (rel_path, template) in TEMPLATE_FILES {
        let full_path = root.join(rel_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, render_string(template, answers))?;
        debug!("Wrote {}", full_path);
        written.push(full_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    fn answers() -> ProjectAnswers {
        ProjectAnswers::new("demo", "Ada Lovelace", "ada@example.com", "MIT").unwrap()
    }

    // ---- rendering ----

    #[test]
    fn test_render_string_substitutes_all_placeholders() {
        let rendered = render_string(
            "{project_name} by {author} <{email}> under {license}",
            &answers(),
        );
        assert_eq!(rendered, "demo by Ada Lovelace <ada@example.com> under MIT");
    }

    #[test]
    fn test_render_string_leaves_foreign_braces_alone() {
        // Editor variables like ${workspaceFolder} must survive rendering.
        let rendered = render_string("${workspaceFolder}/src", &answers());
        assert_eq!(rendered, "${workspaceFolder}/src");
    }

    // ---- file writing ----

    #[test]
    fn test_write_project_files_creates_every_template() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();

        let written = write_project_files(root, &answers()).unwrap();

        assert_eq!(written.len(), TEMPLATE_FILES.len());
        for (rel_path, _) in TEMPLATE_FILES {
            assert!(root.join(rel_path).exists(), "{rel_path} should exist");
        }
    }

    #[test]
    fn test_json_templates_are_well_formed() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        write_project_files(root, &answers()).unwrap();

        for rel_path in [
            ".vscode/settings.json",
            ".vscode/launch.json",
            ".esdoc.json",
            ".eslintrc",
            ".nycrc",
            ".babelrc",
            "jsconfig.json",
        ] {
            let content = fs::read_to_string(root.join(rel_path)).unwrap();
            let parsed: std::result::Result<Value, _> = serde_json::from_str(&content);
            assert!(parsed.is_ok(), "{rel_path} should parse as JSON");
        }
    }

    #[test]
    fn test_entry_point_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        write_project_files(root, &answers()).unwrap();

        assert_eq!(fs::read_to_string(root.join("src/index.js")).unwrap(), "");
    }

    #[test]
    fn test_readme_is_interpolated() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        write_project_files(root, &answers()).unwrap();

        let readme = fs::read_to_string(root.join("README.md")).unwrap();
        assert!(readme.starts_with("# demo"));
        assert!(readme.contains("Ada Lovelace"));
        assert!(readme.contains("MIT"));
    }

    #[test]
    fn test_scaffold_satisfies_alias_preconditions() {
        // The alias registrar expects a module-resolver entry in .babelrc,
        // a paths table in jsconfig.json, and a mapping table in the
        // editor settings.
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        write_project_files(root, &answers()).unwrap();

        let babelrc: Value =
            serde_json::from_str(&fs::read_to_string(root.join(".babelrc")).unwrap()).unwrap();
        let plugins = babelrc["plugins"].as_array().unwrap();
        assert!(plugins.iter().any(|p| {
            p.as_array()
                .map(|entry| entry.first() == Some(&Value::String("module-resolver".into())))
                .unwrap_or(false)
        }));

        let jsconfig: Value =
            serde_json::from_str(&fs::read_to_string(root.join("jsconfig.json")).unwrap())
                .unwrap();
        assert!(jsconfig["compilerOptions"]["paths"].is_object());

        let settings: Value = serde_json::from_str(
            &fs::read_to_string(root.join(".vscode/settings.json")).unwrap(),
        )
        .unwrap();
        assert!(settings["path-intellisense.mappings"].is_object());
    }
}
