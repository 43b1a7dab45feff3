//! # create-quick-start
//!
//! Interactively scaffolds a new JavaScript or TypeScript project in the
//! current directory.
//!
//! ## Usage
//!
//! ```bash
//! create-quick-start
//! ```
//!
//! The tool then asks for the project name, the language, a tooling preset
//! (or an individual tool selection) and the package manager, and creates
//! `<project name>/` with a README, `package.json`, `src/index.{js,ts}` and,
//! where relevant, `tsconfig.json` and `.prettierrc`.

use std::{env, process::exit};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use create_quick_start::{cli::Cli, create_project, prompt::InquirePrompter};

/// Entry point for the create-quick-start application.
///
/// Any error from [`inner_main`] is printed to stderr and the process exits
/// with status 1.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err:#}", "Error creating project:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// This function can return errors from:
/// - Resolving the current working directory
/// - Interactive prompting, including a cancelled session
/// - Creating the project directory or writing any of its files
fn inner_main() -> Result<()> {
    Cli::parse();

    let cwd = env::current_dir().context("Failed to resolve the current directory")?;
    let (spec, created) = create_project(&mut InquirePrompter, &cwd)?;

    println!();
    for file in &created.files {
        println!("  {}", format!("✔ {}", file.display()).bright_black());
    }

    println!("\n{}", "Project created successfully! 🎉".green());
    println!(
        "{}",
        format!(
            "\nNext steps:\n1. cd {}\n2. {} install\n3. Start coding!",
            spec.project_name(),
            spec.package_manager().command()
        )
        .blue()
    );

    Ok(())
}
