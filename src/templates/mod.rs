//! Content generators for the scaffolded files.
//!
//! Every generator is a pure function of a [`ProjectSpec`]: no I/O, no side
//! effects. Optional files are returned as `None` when their triggering
//! condition does not hold.
//!
//! ## Main Parts
//!
//! - [`readme`] - `README.md`
//! - [`package_json`] - `package.json`
//! - [`tsconfig`] - `tsconfig.json`, TypeScript only
//! - [`prettierrc`] - `.prettierrc`, when Prettier is selected
//! - [`entry_source`] - `src/index.{js,ts}`

pub mod package_json;
pub mod prettier;
pub mod readme;
pub mod tsconfig;

use anyhow::Result;

use crate::project::ProjectSpec;

pub use package_json::package_json;
pub use prettier::prettierrc;
pub use readme::readme;
pub use tsconfig::tsconfig;

/// The single statement written to the entry source file.
#[must_use]
pub fn entry_source(spec: &ProjectSpec) -> String {
    format!("console.log('Hello from {}!');", spec.project_name())
}

/// All generated contents for one project, ready to be written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFiles {
    pub readme: String,
    pub package_json: String,
    pub entry_source: String,
    pub tsconfig: Option<String>,
    pub prettierrc: Option<String>,
}

impl ProjectFiles {
    /// Run every generator against `spec`.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the JSON documents fails to serialize.
    pub fn render(spec: &ProjectSpec) -> Result<Self> {
        Ok(Self {
            readme: readme(spec),
            package_json: package_json(spec)?,
            entry_source: entry_source(spec),
            tsconfig: tsconfig(spec)?,
            prettierrc: prettierrc(spec)?,
        })
    }
}
