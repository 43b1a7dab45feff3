//! `tsconfig.json` generation.

use anyhow::Result;
use serde::Serialize;

use crate::config::Language;
use crate::project::ProjectSpec;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct CompilerOptions {
    pub target: &'static str,
    pub module: &'static str,
    pub strict: bool,
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
    pub force_consistent_casing_in_file_names: bool,
    pub out_dir: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub compiler_options: CompilerOptions,
    pub include: [&'static str; 1],
    pub exclude: [&'static str; 1],
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                target: "es2020",
                module: "commonjs",
                strict: true,
                es_module_interop: true,
                skip_lib_check: true,
                force_consistent_casing_in_file_names: true,
                out_dir: "./dist",
            },
            include: ["src/**/*"],
            exclude: ["node_modules"],
        }
    }
}

/// Render `tsconfig.json`, or `None` for JavaScript projects.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn tsconfig(spec: &ProjectSpec) -> Result<Option<String>> {
    if spec.language() != Language::TypeScript {
        return Ok(None);
    }

    Ok(Some(serde_json::to_string_pretty(&TsConfig::default())?))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::config::{PackageManager, ToolPreset};

    #[test]
    fn test_no_tsconfig_for_javascript() {
        let spec = ProjectSpec::new(
            "app",
            Language::JavaScript,
            ToolPreset::Full,
            None,
            PackageManager::Npm,
        );

        assert!(tsconfig(&spec).unwrap().is_none());
    }

    #[test]
    fn test_tsconfig_contents() {
        let spec = ProjectSpec::new(
            "app",
            Language::TypeScript,
            ToolPreset::Basic,
            None,
            PackageManager::Npm,
        );
        let rendered = tsconfig(&spec).unwrap().unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            parsed,
            json!({
                "compilerOptions": {
                    "target": "es2020",
                    "module": "commonjs",
                    "strict": true,
                    "esModuleInterop": true,
                    "skipLibCheck": true,
                    "forceConsistentCasingInFileNames": true,
                    "outDir": "./dist"
                },
                "include": ["src/**/*"],
                "exclude": ["node_modules"]
            })
        );
        assert!(rendered.starts_with("{\n  \"compilerOptions\": {\n    \"target\": \"es2020\","));
    }
}
