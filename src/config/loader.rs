//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::{AsyncPolicy, ConfigWarning, OutputFormat};
use crate::error::{SiteHealthError, SiteHealthResult};

use super::types::Config;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "site-health.toml";

/// User config path relative to the platform config directory.
pub const USER_CONFIG_FILE: &str = "site-health/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SiteHealthResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SiteHealthError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, with env overrides.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> SiteHealthResult<(Config, Vec<ConfigWarning>)> {
    let user_dir = dirs::config_dir();
    let (config, warnings) = load_from(project_root, user_dir.as_deref())?;
    Ok((with_env_overrides(config), warnings))
}

/// First existing config file of: project, user. Defaults otherwise.
pub fn load_from(
    project_root: Option<&Path>,
    user_config_dir: Option<&Path>,
) -> SiteHealthResult<(Config, Vec<ConfigWarning>)> {
    let candidates: Vec<PathBuf> = [
        project_root.map(|root| root.join(PROJECT_CONFIG_FILE)),
        user_config_dir.map(|dir| dir.join(USER_CONFIG_FILE)),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in candidates {
        if path.exists() {
            debug!(path = %path.display(), "loading configuration");
            return load_with_warnings(&path);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (SITE_HEALTH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // SITE_HEALTH_SNAPSHOT
    if let Some(path) = get_env("SITE_HEALTH_SNAPSHOT").filter(|p| !p.is_empty()) {
        config.host.snapshot = Some(PathBuf::from(path));
    }

    // SITE_HEALTH_FORMAT
    if let Some(format) = get_env("SITE_HEALTH_FORMAT") {
        if let Ok(format) = format.parse::<OutputFormat>() {
            config.output.format = format;
        }
    }

    // SITE_HEALTH_ASYNC_POLICY
    if let Some(policy) = get_env("SITE_HEALTH_ASYNC_POLICY").and_then(|p| AsyncPolicy::parse(&p)) {
        config.checks.async_policy = policy;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "host",
        "snapshot",
        "command",
        "checks",
        "async_policy",
        "output",
        "format",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
