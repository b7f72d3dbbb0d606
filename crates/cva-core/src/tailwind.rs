//! Tailwind CSS wiring for a freshly generated Vite project.
//!
//! These edits assume create-vite's `react`/`react-ts` output layout.
//! The config rewrite is anchored on exact substrings of the generator's
//! default template; a missing anchor means the template has drifted and
//! is reported as an error rather than silently skipped.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CvaError, CvaResult};
use crate::templates::TemplateId;

/// Import line present in the generator's default build config.
const REACT_IMPORT_ANCHOR: &str = "import react from '@vitejs/plugin-react'";

/// Import line added for the Tailwind build plugin.
const TAILWIND_IMPORT: &str = "import tailwindcss from '@tailwindcss/vite'";

/// Plugin array literal as the generator emits it.
const PLUGINS_ANCHOR: &str = "plugins: [react()]";

/// Plugin array literal with the Tailwind plugin appended.
const PLUGINS_PATCHED: &str = "plugins: [react(), tailwindcss()]";

/// Replacement content for the entry stylesheet.
const ENTRY_STYLESHEET: &str = "@import \"tailwindcss\";\n";

/// Packages added to the generated project.
pub const TAILWIND_PACKAGES: &[&str] = &["tailwindcss", "@tailwindcss/vite"];

/// Build-config filename for the chosen language variant.
pub fn config_file_name(typescript: bool) -> &'static str {
    if typescript {
        "vite.config.ts"
    } else {
        "vite.config.js"
    }
}

/// Application entry component filename for the chosen language variant.
pub fn app_file_name(typescript: bool) -> &'static str {
    if typescript {
        "src/App.tsx"
    } else {
        "src/App.jsx"
    }
}

/// Register the Tailwind plugin in the generated build config.
///
/// Inserts the plugin import directly after the React plugin import and
/// widens the plugin array literal, then writes the file back in full.
pub fn patch_vite_config(target: &Path, typescript: bool) -> CvaResult<()> {
    let path = target.join(config_file_name(typescript));
    let content = std::fs::read_to_string(&path)?;

    let content = insert_after(&content, REACT_IMPORT_ANCHOR, &format!("\n{TAILWIND_IMPORT}"))
        .ok_or_else(|| missing_anchor(&path, REACT_IMPORT_ANCHOR))?;
    let content = replace_once(&content, PLUGINS_ANCHOR, PLUGINS_PATCHED)
        .ok_or_else(|| missing_anchor(&path, PLUGINS_ANCHOR))?;

    debug!(path = %path.display(), "registered tailwind plugin");
    std::fs::write(&path, content)?;
    Ok(())
}

/// Replace the generated entry stylesheet with the Tailwind import.
pub fn write_entry_stylesheet(target: &Path) -> CvaResult<()> {
    std::fs::write(target.join("src/index.css"), ENTRY_STYLESHEET)?;
    Ok(())
}

/// Overwrite the application entry component with a catalog template and
/// drop the generator's component-local stylesheet.
pub fn apply_app_template(target: &Path, typescript: bool, template: TemplateId) -> CvaResult<()> {
    let app_path = target.join(app_file_name(typescript));
    std::fs::write(&app_path, template.app_source())?;
    debug!(path = %app_path.display(), template = %template, "applied template");

    let default_styles = target.join("src/App.css");
    if default_styles.exists() {
        std::fs::remove_file(&default_styles)?;
    }
    Ok(())
}

/// Insert `insertion` immediately after the first occurrence of `anchor`.
fn insert_after(content: &str, anchor: &str, insertion: &str) -> Option<String> {
    let end = content.find(anchor)? + anchor.len();
    let mut patched = String::with_capacity(content.len() + insertion.len());
    patched.push_str(&content[..end]);
    patched.push_str(insertion);
    patched.push_str(&content[end..]);
    Some(patched)
}

/// Replace the first occurrence of `from`, or `None` when absent.
fn replace_once(content: &str, from: &str, to: &str) -> Option<String> {
    let start = content.find(from)?;
    let mut patched = String::with_capacity(content.len() - from.len() + to.len());
    patched.push_str(&content[..start]);
    patched.push_str(to);
    patched.push_str(&content[start + from.len()..]);
    Some(patched)
}

fn missing_anchor(file: &Path, anchor: &str) -> CvaError {
    CvaError::MissingAnchor {
        file: PathBuf::from(file),
        anchor: anchor.to_string(),
    }
}
