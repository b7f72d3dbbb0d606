//! Terminal output formatting.

use colored::Colorize;
use cva_core::resolve::ResolvedTarget;
use cva_core::validate::ValidationResult;

/// Print the success summary and the follow-up commands the generated
/// project supports.
pub fn print_success(target: &ResolvedTarget) {
    println!();
    println!(
        "{} Project created: {}",
        "✓".green().bold(),
        target.project_name.cyan()
    );
    println!("  Directory: {}", target.path.display());
    println!();
    println!("{}", "Next steps:".bold());
    if !target.use_current_dir {
        println!("  cd {}", target.project_name);
    }
    println!("  npm run dev        # Start the dev server");
    println!("  npm run build      # Build for production");
    println!("  npm run preview    # Preview the production build");
}

/// Print an itemized name-validation failure.
pub fn print_validation_failure(name: &str, validation: &ValidationResult) {
    eprintln!(
        "{} invalid project name: {}",
        "Error:".red().bold(),
        name.cyan()
    );
    for error in &validation.errors {
        eprintln!("  {} {}", "✗".red(), error);
    }
    for warning in &validation.warnings {
        eprintln!("  {} {}", "⚠".yellow(), warning);
    }
}

/// Print the user-cancellation notice.
pub fn print_cancelled() {
    println!("{}", "Cancelled. No changes were made.".yellow());
}
