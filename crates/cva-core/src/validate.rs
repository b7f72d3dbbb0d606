//! Project name validation.
//!
//! Applies the npm package-name rules, since the generated project's
//! `package.json` takes its `name` field from the directory name. Hard
//! violations are errors; rules that only legacy registry packages may
//! break (capital letters, `~'!()*`) are warnings. A name is acceptable
//! for a new project only when both lists are empty.

/// Maximum package name length accepted by the npm registry.
const MAX_NAME_LENGTH: usize = 214;

/// Names npm refuses outright.
const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node core module names; shadowing one is allowed but discouraged.
const CORE_MODULE_NAMES: &[&str] = &[
    "assert", "buffer", "child_process", "cluster", "crypto", "dgram", "dns", "events", "fs",
    "http", "https", "net", "os", "path", "punycode", "querystring", "readline", "stream",
    "string_decoder", "tls", "url", "util", "vm", "zlib",
];

/// Outcome of validating a candidate project name.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Rule violations that make the name unusable.
    pub errors: Vec<String>,
    /// Rules only legacy packages are exempt from.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Whether the name is acceptable for a newly created project.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate a candidate project name against npm package-naming rules.
pub fn validate_project_name(name: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    if name.is_empty() {
        result.errors.push("name cannot be empty".to_string());
        return result;
    }

    if name.trim() != name {
        result
            .errors
            .push("name cannot contain leading or trailing spaces".to_string());
    }

    if name.starts_with('.') {
        result
            .errors
            .push("name cannot start with a period".to_string());
    }

    if name.starts_with('_') {
        result
            .errors
            .push("name cannot start with an underscore".to_string());
    }

    if name.len() > MAX_NAME_LENGTH {
        result.errors.push(format!(
            "name cannot contain more than {MAX_NAME_LENGTH} characters"
        ));
    }

    if BLACKLISTED_NAMES
        .iter()
        .any(|blacklisted| blacklisted.eq_ignore_ascii_case(name))
    {
        result.errors.push(format!("{name} is a blacklisted name"));
    }

    if name.chars().any(|c| !is_url_friendly(c)) {
        result
            .errors
            .push("name can only contain URL-friendly characters".to_string());
    }

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        result
            .warnings
            .push("name can no longer contain capital letters".to_string());
    }

    if name.chars().any(|c| matches!(c, '~' | '\'' | '!' | '(' | ')' | '*')) {
        result.warnings.push(
            "name can no longer contain special characters (\"~'!()*\")".to_string(),
        );
    }

    if CORE_MODULE_NAMES.contains(&name) {
        result
            .warnings
            .push(format!("{name} is a core module name"));
    }

    result
}

/// Characters `encodeURIComponent` leaves untouched.
fn is_url_friendly(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '!' | '\'' | '(' | ')' | '*')
}
