//! Writing the generated project to disk.
//!
//! The materializer creates the project directory and writes every generated
//! file in a fixed order. It never retries and never cleans up: if a step
//! fails, whatever was written before it stays on disk and the error is
//! returned to the caller.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::project::ProjectSpec;
use crate::templates::ProjectFiles;

/// Outcome of a successful materialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedProject {
    /// The newly created project directory
    pub root: PathBuf,

    /// Every file written, relative to `root`, in write order
    pub files: Vec<PathBuf>,
}

/// Creates projects under a fixed base directory.
///
/// The base directory is passed in explicitly so the library never depends
/// on the process working directory.
pub struct Materializer {
    base_dir: PathBuf,
}

impl Materializer {
    /// Create a materializer writing projects into `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create the project described by `spec` from the rendered `files`.
    ///
    /// Steps, in order:
    /// 1. Create `<base>/<project name>` (must not exist yet)
    /// 2. Write `README.md`
    /// 3. Write `package.json`
    /// 4. Create `src/`
    /// 5. Write `src/index.js` or `src/index.ts`
    /// 6. Write `tsconfig.json`, if rendered
    /// 7. Write `.prettierrc`, if rendered
    ///
    /// # Errors
    ///
    /// Fails if the project directory already exists or if any directory or
    /// file cannot be created. The underlying [`std::io::Error`] can be
    /// recovered with `downcast_ref`.
    pub fn materialize(&self, spec: &ProjectSpec, files: &ProjectFiles) -> Result<CreatedProject> {
        let root = self.project_root(spec.project_name());

        fs::create_dir(&root)
            .with_context(|| format!("Failed to create project directory {}", root.display()))?;

        let mut writer = ProjectWriter {
            root: &root,
            written: Vec::new(),
        };

        writer.write_file("README.md", &files.readme)?;
        writer.write_file("package.json", &files.package_json)?;
        writer.create_dir("src")?;

        let entry = format!("src/index.{}", spec.language().source_extension());
        writer.write_file(&entry, &files.entry_source)?;

        if let Some(tsconfig) = &files.tsconfig {
            writer.write_file("tsconfig.json", tsconfig)?;
        }

        if let Some(prettierrc) = &files.prettierrc {
            writer.write_file(".prettierrc", prettierrc)?;
        }

        let files = writer.written;

        Ok(CreatedProject { root, files })
    }

    /// Resolve the project directory for `name`, always nested in the base
    /// directory. Root and drive prefixes of an absolute name are dropped.
    fn project_root(&self, name: &str) -> PathBuf {
        let relative: PathBuf = Path::new(name)
            .components()
            .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
            .collect();

        self.base_dir.join(relative)
    }
}

/// Writes paths relative to the project root and records them.
struct ProjectWriter<'a> {
    root: &'a Path,
    written: Vec<PathBuf>,
}

impl ProjectWriter<'_> {
    fn create_dir(&self, relative: &str) -> Result<()> {
        let path = self.root.join(relative);

        fs::create_dir(&path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    fn write_file(&mut self, relative: &str, contents: &str) -> Result<()> {
        let path = self.root.join(relative);

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.written.push(PathBuf::from(relative));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use tempfile::TempDir;

    use super::*;
    use crate::config::{Language, PackageManager, ToolPreset};

    fn render(name: &str, language: Language, preset: ToolPreset) -> (ProjectSpec, ProjectFiles) {
        let spec = ProjectSpec::new(name, language, preset, Some(vec![]), PackageManager::Npm);
        let files = ProjectFiles::render(&spec).unwrap();
        (spec, files)
    }

    #[test]
    fn test_write_order_for_typescript_with_prettier() {
        let temp_dir = TempDir::new().unwrap();
        let (spec, files) = render("svc", Language::TypeScript, ToolPreset::Full);

        let created = Materializer::new(temp_dir.path())
            .materialize(&spec, &files)
            .unwrap();

        assert_eq!(created.root, temp_dir.path().join("svc"));
        assert_eq!(
            created.files,
            [
                "README.md",
                "package.json",
                "src/index.ts",
                "tsconfig.json",
                ".prettierrc"
            ]
            .map(PathBuf::from)
        );
    }

    #[test]
    fn test_contents_match_rendered_files() {
        let temp_dir = TempDir::new().unwrap();
        let (spec, files) = render("my-app", Language::JavaScript, ToolPreset::Basic);

        let created = Materializer::new(temp_dir.path())
            .materialize(&spec, &files)
            .unwrap();

        let root = &created.root;
        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), files.readme);
        assert_eq!(
            fs::read_to_string(root.join("package.json")).unwrap(),
            files.package_json
        );
        assert_eq!(
            fs::read_to_string(root.join("src/index.js")).unwrap(),
            "console.log('Hello from my-app!');"
        );
        assert!(!root.join("src/index.ts").exists());
    }

    #[test]
    fn test_existing_directory_fails_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("taken");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("README.md"), "keep me").unwrap();

        let (spec, files) = render("taken", Language::JavaScript, ToolPreset::Basic);
        let err = Materializer::new(temp_dir.path())
            .materialize(&spec, &files)
            .unwrap_err();

        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(
            fs::read_to_string(existing.join("README.md")).unwrap(),
            "keep me"
        );
        assert!(!existing.join("package.json").exists());
    }

    #[test]
    fn test_absolute_name_stays_under_base_dir() {
        let base_dir = TempDir::new().unwrap();
        let name = format!("{}escaped", std::path::MAIN_SEPARATOR);
        let (spec, files) = render(&name, Language::JavaScript, ToolPreset::Basic);

        let created = Materializer::new(base_dir.path())
            .materialize(&spec, &files)
            .unwrap();

        assert_eq!(created.root, base_dir.path().join("escaped"));
        assert!(created.root.join("package.json").is_file());
    }

    #[test]
    fn test_absolute_nested_name_is_mirrored_under_base_dir() {
        let base_dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let name = elsewhere.path().join("escaped");

        // The root directory is created non-recursively, so its parents must exist.
        let mirrored_parent: PathBuf = elsewhere
            .path()
            .components()
            .filter(|component| matches!(component, Component::Normal(_)))
            .collect();
        fs::create_dir_all(base_dir.path().join(&mirrored_parent)).unwrap();

        let (spec, files) = render(name.to_str().unwrap(), Language::JavaScript, ToolPreset::Basic);
        let created = Materializer::new(base_dir.path())
            .materialize(&spec, &files)
            .unwrap();

        assert!(created.root.starts_with(base_dir.path()));
        assert_eq!(created.root, base_dir.path().join(mirrored_parent).join("escaped"));
        assert!(!name.exists());
    }

    #[test]
    fn test_missing_base_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let (spec, files) = render("app", Language::JavaScript, ToolPreset::Basic);

        let result = Materializer::new(temp_dir.path().join("missing")).materialize(&spec, &files);

        assert!(result.is_err());
    }
}
