//! Interactive collection of the project answers.
//!
//! The questions are asked through the [`Prompter`] trait so the collector
//! can be driven by a terminal ([`InquirePrompter`]) or by scripted answers
//! in tests.

use std::fmt::Display;

use anyhow::Result;
use inquire::{MultiSelect, Select, Text};

use crate::config::{Language, PackageManager, Tool, ToolPreset};
use crate::project::ProjectSpec;

/// Default project name offered by the first question.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Source of answers for the setup questions.
///
/// Each method blocks until the answer is available. Implementations report
/// a cancelled or interrupted session as an error.
pub trait Prompter {
    /// Ask for free text, falling back to `default` when nothing is entered.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the user aborts.
    fn text(&mut self, message: &str, default: &str) -> Result<String>;

    /// Ask the user to pick exactly one of `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the user aborts.
    fn select<T: Display>(&mut self, message: &str, options: Vec<T>) -> Result<T>;

    /// Ask the user to pick any number of `options`, in the order shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the user aborts.
    fn multi_select<T: Display>(&mut self, message: &str, options: Vec<T>) -> Result<Vec<T>>;
}

/// Terminal prompter backed by `inquire`.
#[derive(Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str, default: &str) -> Result<String> {
        Ok(Text::new(message).with_default(default).prompt()?)
    }

    fn select<T: Display>(&mut self, message: &str, options: Vec<T>) -> Result<T> {
        Ok(Select::new(message, options).prompt()?)
    }

    fn multi_select<T: Display>(&mut self, message: &str, options: Vec<T>) -> Result<Vec<T>> {
        Ok(MultiSelect::new(message, options).prompt()?)
    }
}

/// Run the fixed question sequence and build the resulting [`ProjectSpec`].
///
/// The questions are asked in this order:
/// 1. Project name (defaults to `my-app`)
/// 2. Language
/// 3. Tool preset
/// 4. Individual tools, only when the preset is custom
/// 5. Package manager
///
/// # Errors
///
/// Propagates any error from the prompter, including a user abort. Nothing
/// is retried.
pub fn collect_answers<P: Prompter>(prompter: &mut P) -> Result<ProjectSpec> {
    let project_name = prompter.text("What is your project name?", DEFAULT_PROJECT_NAME)?;

    let language = prompter.select(
        "Which language would you like to use?",
        Language::ALL.to_vec(),
    )?;

    let tool_preset = prompter.select(
        "Choose your development tools setup:",
        ToolPreset::ALL.to_vec(),
    )?;

    let custom_tools = if tool_preset == ToolPreset::Custom {
        Some(prompter.multi_select("Select the tools you want to include:", Tool::ALL.to_vec())?)
    } else {
        None
    };

    let package_manager = prompter.select(
        "Which package manager do you prefer?",
        PackageManager::ALL.to_vec(),
    )?;

    Ok(ProjectSpec::new(
        project_name,
        language,
        tool_preset,
        custom_tools,
        package_manager,
    ))
}
