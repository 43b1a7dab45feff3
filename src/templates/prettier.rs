//! `.prettierrc` generation.

use anyhow::Result;
use serde::Serialize;

use crate::config::Tool;
use crate::project::ProjectSpec;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub semi: bool,
    pub single_quote: bool,
    pub trailing_comma: &'static str,
    pub print_width: u16,
    pub tab_width: u8,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            semi: true,
            single_quote: true,
            trailing_comma: "es5",
            print_width: 80,
            tab_width: 2,
        }
    }
}

/// Render `.prettierrc`, or `None` when Prettier is not among the tools.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn prettierrc(spec: &ProjectSpec) -> Result<Option<String>> {
    if !spec.has_tool(Tool::Prettier) {
        return Ok(None);
    }

    Ok(Some(serde_json::to_string_pretty(&PrettierConfig::default())?))
}
