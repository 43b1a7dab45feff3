//! # create-quick-start
//!
//! An interactive CLI that scaffolds a minimal JavaScript or TypeScript
//! project: a README, a `package.json`, a `src/` entry file and optional
//! TypeScript and Prettier configuration.
//!
//! The flow is linear: [`prompt::collect_answers`] builds a
//! [`project::ProjectSpec`], [`templates::ProjectFiles::render`] turns it
//! into file contents and [`materializer::Materializer`] writes them to disk.

use std::path::Path;

use anyhow::Result;

pub mod cli;
pub mod config;
pub mod materializer;
pub mod project;
pub mod prompt;
pub mod templates;

use materializer::{CreatedProject, Materializer};
use project::ProjectSpec;
use prompt::Prompter;
use templates::ProjectFiles;

/// Ask the setup questions, then generate and write the project under `base_dir`.
///
/// # Errors
///
/// Returns the first error from prompting, rendering or writing. Files
/// already written at that point are left in place.
pub fn create_project<P: Prompter>(
    prompter: &mut P,
    base_dir: &Path,
) -> Result<(ProjectSpec, CreatedProject)> {
    let spec = prompt::collect_answers(prompter)?;
    let files = ProjectFiles::render(&spec)?;
    let created = Materializer::new(base_dir).materialize(&spec, &files)?;

    Ok((spec, created))
}
