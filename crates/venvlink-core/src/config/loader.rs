//! Environment variable loading.
//!
//! Fallback chains live here so callers never repeat `or_else` ladders.

use std::env;
use std::path::Path;

/// Load `.env` from the current directory into the process environment.
///
/// Existing variables are never overridden. Runs at most once per process.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        load_dotenv_from_dir(&dir);
    });
}

/// Load `<dir>/.env` without overriding existing variables. Missing file is a no-op.
pub fn load_dotenv_from_dir(dir: &Path) {
    let path = dir.join(".env");
    let Ok(content) = std::fs::read_to_string(&path) else {
        return;
    };
    let mut loaded = 0usize;
    for (key, value) in parse_dotenv(&content) {
        if env::var(&key).is_err() {
            env::set_var(&key, &value);
            loaded += 1;
        }
    }
    tracing::debug!(path = %path.display(), loaded, "loaded .env");
}

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped, an
/// unquoted trailing `# comment` is stripped, and one layer of matching quotes
/// is removed from the value.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some(eq_pos) = line.find('=') else {
            continue;
        };
        let key = line[..eq_pos].trim();
        let mut value = line[eq_pos + 1..].trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

/// Read the primary variable, then each alias; empty values fall through to `default`.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env_optional(primary, aliases).unwrap_or_else(default)
}

/// Like [`env_or`] but returns `None` when nothing non-empty is set.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// Boolean variable. Unset (primary and every alias) returns `default`.
/// Once set, only `0`/`false`/`no`/`off` (trimmed, any case) are false;
/// every other value, including empty and unrecognised strings, is true.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    let v = env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()));
    match v.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}
