//! Package manager selection.

use std::fmt::{Display, Formatter, Result};

/// Package manager whose commands appear in the README and next steps.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// All package managers, in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    /// Executable name used when rendering commands such as `<pm> install`.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.command())
    }
}
