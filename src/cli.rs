use clap::Parser;

/// Command-line surface. Only the framework's `--help` and `--version` exist.
#[derive(Parser, Debug)]
#[command(name = "create-quick-start")]
#[command(version = "1.0.0")]
#[command(about = "CLI to create new projects with custom configurations")]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, error::ErrorKind};

    use super::*;

    #[test]
    fn test_no_arguments() {
        assert!(Cli::try_parse_from(["create-quick-start"]).is_ok());
    }

    #[test]
    fn test_rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["create-quick-start", "my-app"]).is_err());
        assert!(Cli::try_parse_from(["create-quick-start", "--force"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["create-quick-start", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert_eq!(Cli::command().get_version(), Some("1.0.0"));
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["create-quick-start", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_command_is_valid() {
        Cli::command().debug_assert();
    }
}
