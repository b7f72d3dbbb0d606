//! End-to-end project materialization.
//!
//! Strictly sequential pipeline: validate, resolve the target, run the
//! external generator, optionally wire in Tailwind, install dependencies.
//! Each stage is awaited to completion; any failure aborts the remaining
//! stages and propagates to the caller. Partially generated output is
//! left on disk as-is.

use std::future::Future;
use std::path::Path;

use tracing::debug;

use crate::error::CvaResult;
use crate::process::CommandRunner;
use crate::resolve::{self, ResolvedTarget, CURRENT_DIR_SENTINEL};
use crate::tailwind;
use crate::templates::TemplateId;

/// Package manager executable.
const NPM: &str = "npm";

const STAGE_SCAFFOLD: &str = "Scaffolding project with create-vite";
const STAGE_TAILWIND: &str = "Wiring up Tailwind CSS";
const STAGE_INSTALL: &str = "Installing dependencies";

/// Everything one invocation asks for. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    /// Positional directory argument as given, if any.
    pub directory: Option<String>,
    /// Generate the statically-typed variant (`react-ts`).
    pub typescript: bool,
    /// Wire Tailwind CSS into the generated project.
    pub tailwind: bool,
    /// Application template to apply.
    pub template: TemplateId,
}

/// Asks the user a yes/no question.
pub trait Prompter: Send + Sync {
    fn confirm(&self, message: &str) -> CvaResult<bool>;
}

/// Receives stage lifecycle events for presentation.
///
/// The materialization flow itself stays presentation-agnostic; the CLI
/// plugs in a spinner, tests plug in a recorder.
pub trait Reporter: Send + Sync {
    fn start_stage(&self, name: &str);
    fn succeed(&self, name: &str);
    fn fail(&self, name: &str);
}

/// How a materialization run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The project was fully materialized at the contained target.
    Created(ResolvedTarget),
    /// The user declined the non-empty-directory confirmation. Not an
    /// error; nothing was written.
    Cancelled,
}

/// Orchestrates the full scaffold-patch-install flow.
pub struct Materializer<'a> {
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
}

impl<'a> Materializer<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            runner,
            prompter,
            reporter,
        }
    }

    /// Run the pipeline for `request` from `cwd`.
    pub async fn run(&self, request: &ProjectRequest, cwd: &Path) -> CvaResult<Outcome> {
        let target = resolve::resolve_target(request.directory.as_deref(), cwd)?;

        if target.use_current_dir && resolve::has_visible_entries(&target.path)? {
            let proceed = self
                .prompter
                .confirm("Current directory is not empty. Continue anyway?")?;
            if !proceed {
                debug!("user declined non-empty directory, cancelling");
                return Ok(Outcome::Cancelled);
            }
        }

        self.stage(STAGE_SCAFFOLD, self.invoke_generator(request, &target, cwd))
            .await?;

        if request.tailwind {
            self.stage(STAGE_TAILWIND, self.patch_tailwind(request, &target))
                .await?;
        }

        self.stage(
            STAGE_INSTALL,
            self.runner.run(NPM, &["install"], &target.path),
        )
        .await?;

        Ok(Outcome::Created(target))
    }

    /// Bracket a pipeline step with reporter lifecycle events.
    async fn stage<T>(&self, name: &str, step: impl Future<Output = CvaResult<T>>) -> CvaResult<T> {
        self.reporter.start_stage(name);
        match step.await {
            Ok(value) => {
                self.reporter.succeed(name);
                Ok(value)
            }
            Err(err) => {
                self.reporter.fail(name);
                Err(err)
            }
        }
    }

    /// Run the external generator.
    ///
    /// For a named target the generator runs in its parent so it creates
    /// the directory itself; in current-directory mode it runs in place
    /// with the `.` sentinel.
    async fn invoke_generator(
        &self,
        request: &ProjectRequest,
        target: &ResolvedTarget,
        cwd: &Path,
    ) -> CvaResult<()> {
        let selector = if request.typescript { "react-ts" } else { "react" };
        let (working_dir, target_arg) = if target.use_current_dir {
            (target.path.as_path(), CURRENT_DIR_SENTINEL)
        } else {
            (cwd, target.project_name.as_str())
        };

        self.runner
            .run(
                NPM,
                &[
                    "create",
                    "vite@latest",
                    target_arg,
                    "--yes",
                    "--",
                    "--template",
                    selector,
                ],
                working_dir,
            )
            .await
    }

    /// Add the Tailwind packages and patch the generated files.
    async fn patch_tailwind(
        &self,
        request: &ProjectRequest,
        target: &ResolvedTarget,
    ) -> CvaResult<()> {
        let mut install = vec!["install"];
        install.extend_from_slice(tailwind::TAILWIND_PACKAGES);
        self.runner.run(NPM, &install, &target.path).await?;

        tailwind::patch_vite_config(&target.path, request.typescript)?;
        tailwind::write_entry_stylesheet(&target.path)?;
        tailwind::apply_app_template(&target.path, request.typescript, request.template)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CvaError;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// vite.config content as the real generator emits it.
    const DEFAULT_VITE_CONFIG: &str = "import { defineConfig } from 'vite'\nimport react from '@vitejs/plugin-react'\n\n// https://vite.dev/config/\nexport default defineConfig({\n  plugins: [react()],\n})\n";

    /// Records every invocation; optionally simulates the generator by
    /// writing create-vite's default layout, or fails on a chosen
    /// subcommand.
    #[derive(Default)]
    struct RecordingRunner {
        calls: Mutex<Vec<(String, Vec<String>, PathBuf)>>,
        scaffold_typescript: Option<bool>,
        fail_on_create: bool,
    }

    impl RecordingRunner {
        fn scaffolding(typescript: bool) -> Self {
            Self {
                scaffold_typescript: Some(typescript),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(String, Vec<String>, PathBuf)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CvaResult<()> {
            self.calls.lock().unwrap().push((
                program.to_string(),
                args.iter().map(|s| s.to_string()).collect(),
                cwd.to_path_buf(),
            ));

            if args.first() == Some(&"create") {
                if self.fail_on_create {
                    return Err(CvaError::CommandFailed {
                        command: "npm create vite@latest".to_string(),
                        code: Some(1),
                    });
                }
                if let Some(typescript) = self.scaffold_typescript {
                    let target = cwd.join(args[2]);
                    let (config, app) = if typescript {
                        ("vite.config.ts", "src/App.tsx")
                    } else {
                        ("vite.config.js", "src/App.jsx")
                    };
                    std::fs::create_dir_all(target.join("src")).unwrap();
                    std::fs::write(target.join(config), DEFAULT_VITE_CONFIG).unwrap();
                    std::fs::write(target.join("src/index.css"), ":root {}\n").unwrap();
                    std::fs::write(target.join(app), "export default () => null\n").unwrap();
                    std::fs::write(target.join("src/App.css"), "#root {}\n").unwrap();
                }
            }
            Ok(())
        }
    }

    struct StaticPrompter {
        answer: bool,
    }

    impl Prompter for StaticPrompter {
        fn confirm(&self, _message: &str) -> CvaResult<bool> {
            Ok(self.answer)
        }
    }

    /// Fails the test if the pipeline asks for confirmation.
    struct PanicPrompter;

    impl Prompter for PanicPrompter {
        fn confirm(&self, message: &str) -> CvaResult<bool> {
            panic!("unexpected confirmation prompt: {message}");
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Mutex<Vec<String>>,
    }

    impl RecordingReporter {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Reporter for RecordingReporter {
        fn start_stage(&self, name: &str) {
            self.events.lock().unwrap().push(format!("start: {name}"));
        }

        fn succeed(&self, name: &str) {
            self.events.lock().unwrap().push(format!("ok: {name}"));
        }

        fn fail(&self, name: &str) {
            self.events.lock().unwrap().push(format!("fail: {name}"));
        }
    }

    fn request(directory: Option<&str>) -> ProjectRequest {
        ProjectRequest {
            directory: directory.map(String::from),
            typescript: false,
            tailwind: true,
            template: TemplateId::Basic,
        }
    }

    #[tokio::test]
    async fn test_declined_confirmation_cancels_without_side_effects() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join("notes.txt"), "not empty\n").unwrap();

        let runner = RecordingRunner::default();
        let reporter = RecordingReporter::default();
        let materializer = Materializer::new(&runner, &StaticPrompter { answer: false }, &reporter);

        let outcome = materializer
            .run(&request(Some(".")), cwd.path())
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Cancelled));
        assert!(runner.calls().is_empty());
        assert!(reporter.events().is_empty());
        // The only entry is still the one we seeded.
        assert_eq!(std::fs::read_dir(cwd.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_hidden_entries_do_not_trigger_the_prompt() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::create_dir(cwd.path().join(".git")).unwrap();

        let runner = RecordingRunner::scaffolding(true);
        let reporter = RecordingReporter::default();
        let materializer = Materializer::new(&runner, &PanicPrompter, &reporter);

        let req = ProjectRequest {
            directory: Some(".".to_string()),
            typescript: true,
            tailwind: false,
            template: TemplateId::Basic,
        };
        let outcome = materializer.run(&req, cwd.path()).await.unwrap();

        assert!(matches!(outcome, Outcome::Created(_)));
        let calls = runner.calls();
        assert_eq!(calls.len(), 2, "generator and bulk install only: {calls:?}");

        let (_, create_args, create_dir) = &calls[0];
        assert_eq!(
            create_args,
            &["create", "vite@latest", ".", "--yes", "--", "--template", "react-ts"]
        );
        assert_eq!(create_dir, cwd.path());

        let (_, install_args, _) = &calls[1];
        assert_eq!(install_args, &["install"]);
    }

    #[tokio::test]
    async fn test_full_run_patches_generated_project() {
        let cwd = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::scaffolding(false);
        let reporter = RecordingReporter::default();
        let materializer = Materializer::new(&runner, &PanicPrompter, &reporter);

        let req = ProjectRequest {
            directory: Some("my-app".to_string()),
            typescript: false,
            tailwind: true,
            template: TemplateId::Dashboard,
        };
        let outcome = materializer.run(&req, cwd.path()).await.unwrap();

        let target = match outcome {
            Outcome::Created(target) => target,
            other => panic!("expected Created, got {other:?}"),
        };
        assert_eq!(target.path, cwd.path().join("my-app"));
        assert_eq!(target.project_name, "my-app");

        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[0].1,
            &["create", "vite@latest", "my-app", "--yes", "--", "--template", "react"]
        );
        assert_eq!(calls[0].2, cwd.path());
        assert_eq!(calls[1].1, &["install", "tailwindcss", "@tailwindcss/vite"]);
        assert_eq!(calls[1].2, target.path);
        assert_eq!(calls[2].1, &["install"]);
        assert_eq!(calls[2].2, target.path);

        let config = std::fs::read_to_string(target.path.join("vite.config.js")).unwrap();
        assert!(config.contains("import tailwindcss from '@tailwindcss/vite'"));
        assert!(config.contains("plugins: [react(), tailwindcss()]"));

        let css = std::fs::read_to_string(target.path.join("src/index.css")).unwrap();
        assert_eq!(css, "@import \"tailwindcss\";\n");

        let app = std::fs::read_to_string(target.path.join("src/App.jsx")).unwrap();
        assert_eq!(app, TemplateId::Dashboard.app_source());
        assert!(!target.path.join("src/App.css").exists());

        assert_eq!(
            reporter.events(),
            vec![
                format!("start: {STAGE_SCAFFOLD}"),
                format!("ok: {STAGE_SCAFFOLD}"),
                format!("start: {STAGE_TAILWIND}"),
                format!("ok: {STAGE_TAILWIND}"),
                format!("start: {STAGE_INSTALL}"),
                format!("ok: {STAGE_INSTALL}"),
            ]
        );
    }

    #[tokio::test]
    async fn test_disabled_tailwind_leaves_generator_output_untouched() {
        let cwd = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::scaffolding(false);
        let reporter = RecordingReporter::default();
        let materializer = Materializer::new(&runner, &PanicPrompter, &reporter);

        let req = ProjectRequest {
            tailwind: false,
            ..request(Some("my-app"))
        };
        materializer.run(&req, cwd.path()).await.unwrap();

        let target = cwd.path().join("my-app");
        let config = std::fs::read_to_string(target.join("vite.config.js")).unwrap();
        assert_eq!(config, DEFAULT_VITE_CONFIG);
        let css = std::fs::read_to_string(target.join("src/index.css")).unwrap();
        assert_eq!(css, ":root {}\n");
        assert!(target.join("src/App.css").exists());
    }

    #[tokio::test]
    async fn test_generator_failure_aborts_remaining_stages() {
        let cwd = tempfile::tempdir().unwrap();
        let runner = RecordingRunner {
            fail_on_create: true,
            ..RecordingRunner::default()
        };
        let reporter = RecordingReporter::default();
        let materializer = Materializer::new(&runner, &PanicPrompter, &reporter);

        let err = materializer
            .run(&request(Some("my-app")), cwd.path())
            .await
            .unwrap_err();

        assert!(matches!(err, CvaError::CommandFailed { code: Some(1), .. }));
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(
            reporter.events(),
            vec![
                format!("start: {STAGE_SCAFFOLD}"),
                format!("fail: {STAGE_SCAFFOLD}"),
            ]
        );
    }
}
