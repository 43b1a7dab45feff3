//! The answer record and the derivation of its tool list.

use crate::config::{Language, PackageManager, Tool, ToolPreset};

/// Every choice made by the user, plus the tool list derived from them.
///
/// A `ProjectSpec` is built once through [`ProjectSpec::new`] and never
/// mutated afterwards. The `tools` list is fully determined by the preset
/// (and the custom selection when the preset is [`ToolPreset::Custom`]) and
/// never contains duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectSpec {
    project_name: String,
    language: Language,
    tool_preset: ToolPreset,
    custom_tools: Option<Vec<Tool>>,
    package_manager: PackageManager,
    tools: Vec<Tool>,
}

impl ProjectSpec {
    /// Build a spec from the raw answers and derive its tool list.
    ///
    /// `custom_tools` is only kept when `tool_preset` is
    /// [`ToolPreset::Custom`]; for every other preset it is ignored. A custom
    /// selection that names a tool twice keeps its first occurrence.
    ///
    /// The project name is taken as given. No validation happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// # use create_quick_start::config::{Language, PackageManager, Tool, ToolPreset};
    /// # use create_quick_start::project::ProjectSpec;
    /// let spec = ProjectSpec::new(
    ///     "my-app",
    ///     Language::JavaScript,
    ///     ToolPreset::Basic,
    ///     None,
    ///     PackageManager::Npm,
    /// );
    ///
    /// assert_eq!(spec.tools(), &[Tool::Prettier, Tool::Eslint]);
    /// ```
    #[must_use]
    pub fn new(
        project_name: impl Into<String>,
        language: Language,
        tool_preset: ToolPreset,
        custom_tools: Option<Vec<Tool>>,
        package_manager: PackageManager,
    ) -> Self {
        let custom_tools = match tool_preset {
            ToolPreset::Custom => Some(dedup_in_order(custom_tools.unwrap_or_default())),
            _ => None,
        };

        let tools = match tool_preset.preset_tools() {
            Some(tools) => tools.to_vec(),
            None => custom_tools.clone().unwrap_or_default(),
        };

        Self {
            project_name: project_name.into(),
            language,
            tool_preset,
            custom_tools,
            package_manager,
            tools,
        }
    }

    /// The project name as entered, also used as the directory name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The language the project is written in.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The preset picked by the user.
    #[must_use]
    pub const fn tool_preset(&self) -> ToolPreset {
        self.tool_preset
    }

    /// The user's own selection, present only for the custom preset.
    #[must_use]
    pub fn custom_tools(&self) -> Option<&[Tool]> {
        self.custom_tools.as_deref()
    }

    /// The package manager used in the README and next steps.
    #[must_use]
    pub const fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// The derived tool list, in preset definition or selection order.
    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Whether `tool` is part of the derived tool list.
    #[must_use]
    pub fn has_tool(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }
}

fn dedup_in_order(tools: Vec<Tool>) -> Vec<Tool> {
    let mut unique = Vec::with_capacity(tools.len());

    for tool in tools {
        if !unique.contains(&tool) {
            unique.push(tool);
        }
    }

    unique
}
