//! Development tools and the presets that bundle them.
//!
//! A [`ToolPreset`] names a fixed bundle of [`Tool`]s, except for
//! [`ToolPreset::Custom`] where the user picks the tools one by one.

use std::fmt::{Display, Formatter, Result};

/// A development tool that can be included in the generated project.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tool {
    Prettier,
    Eslint,
    Jest,
    Husky,
    Commitlint,
}

impl Tool {
    /// All tools, in the order they are offered in the custom selection.
    pub const ALL: [Self; 5] = [
        Self::Prettier,
        Self::Eslint,
        Self::Jest,
        Self::Husky,
        Self::Commitlint,
    ];

    /// The npm package and version range added to `devDependencies` for this tool.
    ///
    /// Husky and Commitlint are listed in the README only and have no pinned
    /// dependency.
    #[must_use]
    pub const fn dev_dependency(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Prettier => Some(("prettier", "^3.0.0")),
            Self::Eslint => Some(("eslint", "^8.0.0")),
            Self::Jest => Some(("jest", "^29.0.0")),
            Self::Husky | Self::Commitlint => None,
        }
    }
}

impl Display for Tool {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::Prettier => "Prettier",
            Self::Eslint => "ESLint",
            Self::Jest => "Jest",
            Self::Husky => "Husky",
            Self::Commitlint => "Commitlint",
        };

        f.write_str(name)
    }
}

/// A named bundle of tools.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToolPreset {
    /// Prettier + ESLint
    #[default]
    Basic,

    /// Prettier + ESLint + Jest
    Testing,

    /// Prettier + ESLint + Jest + Husky + Commitlint
    Full,

    /// Tools chosen individually by the user
    Custom,
}

impl ToolPreset {
    /// All presets, in the order they are offered to the user.
    pub const ALL: [Self; 4] = [Self::Basic, Self::Testing, Self::Full, Self::Custom];

    /// The tools bundled by this preset, in definition order.
    ///
    /// Returns `None` for [`ToolPreset::Custom`], whose tools come from the
    /// user's own selection.
    #[must_use]
    pub const fn preset_tools(self) -> Option<&'static [Tool]> {
        match self {
            Self::Basic => Some(&[Tool::Prettier, Tool::Eslint]),
            Self::Testing => Some(&[Tool::Prettier, Tool::Eslint, Tool::Jest]),
            Self::Full => Some(&Tool::ALL),
            Self::Custom => None,
        }
    }
}

impl Display for ToolPreset {
    /// Renders the menu label shown in the preset selection.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let label = match self {
            Self::Basic => "Basic (Prettier + ESLint)",
            Self::Testing => "Testing (Prettier + ESLint + Jest)",
            Self::Full => "Full (Prettier + ESLint + Jest + Husky + Commitlint)",
            Self::Custom => "Custom (Choose your own tools)",
        };

        f.write_str(label)
    }
}
