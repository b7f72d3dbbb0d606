//! Target directory resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CvaError, CvaResult};
use crate::validate::validate_project_name;

/// Positional argument that selects the current directory as the target.
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// Fallback project name when the current directory has no base name.
const FALLBACK_PROJECT_NAME: &str = "app";

/// The directory a project will be materialized into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Absolute path of the target directory.
    pub path: PathBuf,
    /// Name the generated `package.json` will carry.
    pub project_name: String,
    /// True when scaffolding into the current directory rather than a
    /// newly created one.
    pub use_current_dir: bool,
}

/// Resolve the effective target from the positional argument and the
/// current working directory.
///
/// With no argument (or the `.` sentinel) the current directory itself is
/// the target and its base name becomes the project name. A named argument
/// is validated against package-naming rules and resolved against `cwd`;
/// a pre-existing entry at that path is refused — this tool never
/// overwrites or merges into an existing named directory.
pub fn resolve_target(raw: Option<&str>, cwd: &Path) -> CvaResult<ResolvedTarget> {
    match raw {
        None | Some(CURRENT_DIR_SENTINEL) => {
            let project_name = cwd
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(FALLBACK_PROJECT_NAME)
                .to_string();
            debug!(path = %cwd.display(), name = %project_name, "targeting current directory");
            Ok(ResolvedTarget {
                path: cwd.to_path_buf(),
                project_name,
                use_current_dir: true,
            })
        }
        Some(name) => {
            let validation = validate_project_name(name);
            if !validation.is_valid() {
                return Err(CvaError::invalid_name(name, validation));
            }

            let path = cwd.join(name);
            if path.exists() {
                return Err(CvaError::TargetExists(path));
            }

            debug!(path = %path.display(), "targeting new directory");
            Ok(ResolvedTarget {
                path,
                project_name: name.to_string(),
                use_current_dir: false,
            })
        }
    }
}

/// Whether `dir` contains any entry that is not hidden.
///
/// Hidden entries (names starting with `.`, e.g. `.git`) do not count —
/// scaffolding into a freshly initialized repository needs no confirmation.
pub fn has_visible_entries(dir: &Path) -> CvaResult<bool> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_name().to_string_lossy().starts_with('.') {
            return Ok(true);
        }
    }
    Ok(false)
}
