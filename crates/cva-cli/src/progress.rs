//! Spinner stage reporting and interactive prompts.

use std::sync::Mutex;
use std::time::Duration;

use colored::Colorize;
use cva_core::materialize::{Prompter, Reporter};
use cva_core::{CvaError, CvaResult};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

/// [`Reporter`] that shows one indicatif spinner per pipeline stage.
pub struct SpinnerReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn clear_current(&self) {
        if let Some(spinner) = self.current.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SpinnerReporter {
    fn start_stage(&self, name: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(name.to_string());
        *self.current.lock().unwrap() = Some(spinner);
    }

    fn succeed(&self, name: &str) {
        self.clear_current();
        println!("{} {}", "✓".green().bold(), name);
    }

    fn fail(&self, name: &str) {
        self.clear_current();
        eprintln!("{} {}", "✗".red().bold(), name);
    }
}

/// [`Prompter`] backed by an interactive terminal.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn confirm(&self, message: &str) -> CvaResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|err| CvaError::Io(std::io::Error::other(err)))
    }
}
