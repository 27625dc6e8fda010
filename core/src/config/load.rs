use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::AppConfig;

/// Get the default logcli data directory: ~/.logcli
pub fn get_logcli_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".logcli"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the configuration.
///
/// Priority: explicit path, then `~/.logcli/config.toml`, then `./logcli.toml`,
/// then built-in defaults. Environment variables are applied last.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut cfg = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let home_config = get_logcli_data_dir().ok().map(|d| d.join("config.toml"));
            let local_config = Path::new("logcli.toml");

            match home_config {
                Some(p) if p.exists() => load_from_path(&p)?,
                _ if local_config.exists() => load_from_path(local_config)?,
                _ => AppConfig::default(),
            }
        }
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    validate(&cfg)?;

    tracing::debug!(
        mode = %cfg.style.mode,
        line_channel_capacity = cfg.runner.line_channel_capacity,
        "config loaded"
    );
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("LOGCLI_MODE") {
        if !v.trim().is_empty() {
            cfg.style.mode = v.trim().to_string();
        }
    }
    if let Some(v) = lookup("LOGCLI_LINE_CHANNEL_CAPACITY") {
        match v.trim().parse::<usize>() {
            Ok(n) => cfg.runner.line_channel_capacity = n,
            Err(_) => tracing::warn!(value = %v, "ignoring invalid LOGCLI_LINE_CHANNEL_CAPACITY"),
        }
    }
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.runner.line_channel_capacity == 0 {
        anyhow::bail!("runner.line_channel_capacity must be greater than zero");
    }
    Ok(())
}
