//! Interactive input seam
//!
//! Every prompt the sweeper shows goes through [`Prompter`], so menu and
//! delete flows can be driven by a script in tests.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};

use crate::error::Result;

/// Source of user input
pub trait Prompter {
    /// Free-text line (may be empty)
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Non-echoing line
    fn secret(&mut self, prompt: &str) -> Result<String>;

    /// Yes/no question with a default answer
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// [`Prompter`] backed by the terminal
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line.trim().to_string())
    }

    fn secret(&mut self, prompt: &str) -> Result<String> {
        let secret = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(secret.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
