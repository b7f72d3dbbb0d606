//! CLI argument definitions.

use clap::Parser;
use cva_core::materialize::ProjectRequest;
use cva_core::templates::TemplateId;

/// Create Vite App - scaffold a Vite + React project with Tailwind CSS
#[derive(Parser)]
#[command(name = "cva")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target directory name, or `.` for the current directory
    pub directory: Option<String>,

    /// Generate a TypeScript project
    #[arg(long, visible_alias = "ts")]
    pub typescript: bool,

    /// Skip Tailwind CSS setup and the application template
    #[arg(long = "no-tailwind", action = clap::ArgAction::SetFalse)]
    pub tailwind: bool,

    /// Application template to apply
    #[arg(short, long, default_value = "basic", value_parser = parse_template)]
    pub template: TemplateId,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_request(self) -> ProjectRequest {
        ProjectRequest {
            directory: self.directory,
            typescript: self.typescript,
            tailwind: self.tailwind,
            template: self.template,
        }
    }
}

fn parse_template(value: &str) -> Result<TemplateId, String> {
    TemplateId::from_name(value).ok_or_else(|| {
        format!(
            "unknown template `{value}` (expected one of: {})",
            TemplateId::NAMES.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cva", "my-app"]).unwrap();
        assert_eq!(cli.directory.as_deref(), Some("my-app"));
        assert!(!cli.typescript);
        assert!(cli.tailwind);
        assert_eq!(cli.template, TemplateId::Basic);
    }

    #[test]
    fn test_directory_is_optional() {
        let cli = Cli::try_parse_from(["cva"]).unwrap();
        assert!(cli.directory.is_none());
    }

    #[test]
    fn test_typescript_alias() {
        let cli = Cli::try_parse_from(["cva", "my-app", "--ts"]).unwrap();
        assert!(cli.typescript);
    }

    #[test]
    fn test_no_tailwind_flag() {
        let cli = Cli::try_parse_from(["cva", "my-app", "--no-tailwind"]).unwrap();
        assert!(!cli.tailwind);
    }

    #[test]
    fn test_template_selection() {
        let cli = Cli::try_parse_from(["cva", "my-app", "-t", "dashboard"]).unwrap();
        assert_eq!(cli.template, TemplateId::Dashboard);
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        assert!(Cli::try_parse_from(["cva", "my-app", "--template", "fancy"]).is_err());
    }
}
