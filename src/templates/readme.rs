//! README generation.

use crate::project::ProjectSpec;

/// Render the project README.
///
/// The tool section has one bullet per tool, in the derived tool order, and
/// is simply empty when no tools were selected.
#[must_use]
pub fn readme(spec: &ProjectSpec) -> String {
    let name = spec.project_name();
    let pm = spec.package_manager().command();

    let tools: String = spec
        .tools()
        .iter()
        .map(|tool| format!("- {tool}\n"))
        .collect();

    format!(
        "# {name}

## Description
Project created with create-quick-start CLI

## Technologies Used
- Language: {language}
{tools}
## Getting Started
1. Clone this repository
2. Install dependencies: `{pm} install`
3. Start development

## Scripts
- `{pm} start`: Start the development server
- `{pm} test`: Run tests
- `{pm} build`: Build for production

## License
MIT
",
        language = spec.language(),
    )
}
