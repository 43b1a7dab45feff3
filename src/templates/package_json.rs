//! `package.json` generation.

use anyhow::Result;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::config::{Language, Tool};
use crate::project::ProjectSpec;

const DESCRIPTION: &str = "Project created with create-quick-start CLI";
const NO_TESTS: &str = "echo \"No tests specified\"";
const NO_BUILD: &str = "echo \"No build step\"";

/// Dependency name to version range, serialized as a JSON object that keeps
/// insertion order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Dependencies(Vec<(&'static str, &'static str)>);

impl Dependencies {
    fn insert(&mut self, name: &'static str, version: &'static str) {
        if !self.contains(name) {
            self.0.push((name, version));
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| *n == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Dependencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, version) in &self.0 {
            map.serialize_entry(name, version)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct Scripts {
    pub test: &'static str,
    pub start: &'static str,
    pub build: &'static str,
}

/// The package manifest, with fields in the order they are written.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest<'a> {
    pub name: &'a str,
    pub version: &'static str,
    pub description: &'static str,
    pub main: &'static str,
    #[serde(rename = "type")]
    pub module_type: &'static str,
    pub scripts: Scripts,
    pub dependencies: Dependencies,
    pub dev_dependencies: Dependencies,
    pub license: &'static str,
}

impl<'a> PackageManifest<'a> {
    /// Build the manifest for `spec`.
    #[must_use]
    pub fn from_spec(spec: &'a ProjectSpec) -> Self {
        let typescript = spec.language() == Language::TypeScript;

        let mut dev_dependencies = Dependencies::default();
        if typescript {
            dev_dependencies.insert("typescript", "^5.0.0");
            dev_dependencies.insert("@types/node", "^20.0.0");
        }
        for (name, version) in spec.tools().iter().filter_map(|tool| tool.dev_dependency()) {
            dev_dependencies.insert(name, version);
        }

        Self {
            name: spec.project_name(),
            version: "1.0.0",
            description: DESCRIPTION,
            main: "index.js",
            module_type: spec.language().module_type(),
            scripts: Scripts {
                test: if spec.has_tool(Tool::Jest) { "jest" } else { NO_TESTS },
                start: "node index.js",
                build: if typescript { "tsc" } else { NO_BUILD },
            },
            dependencies: Dependencies::default(),
            dev_dependencies,
            license: "MIT",
        }
    }
}

/// Render `package.json` as pretty-printed JSON with a 2-space indent.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn package_json(spec: &ProjectSpec) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PackageManifest::from_spec(spec))?)
}
