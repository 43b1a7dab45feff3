//! Language selection for the generated project.

use std::fmt::{Display, Formatter, Result};

/// Language the generated project is written in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    /// Plain JavaScript, `src/index.js`
    #[default]
    JavaScript,

    /// TypeScript, `src/index.ts` plus a `tsconfig.json`
    TypeScript,
}

impl Language {
    /// All languages, in the order they are offered to the user.
    pub const ALL: [Self; 2] = [Self::JavaScript, Self::TypeScript];

    /// File extension used for the entry source file.
    #[must_use]
    pub const fn source_extension(self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }

    /// Value of the manifest `type` field.
    #[must_use]
    pub const fn module_type(self) -> &'static str {
        match self {
            Self::JavaScript => "commonjs",
            Self::TypeScript => "module",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
        };

        f.write_str(name)
    }
}
