use std::path::Path;

use anyhow::Context;
use loan_config::LoanlineConfig;

use crate::cli::GlobalFlags;

/// Load `.env` files, then the layered config with `--api-url` on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LoanlineConfig> {
    load_dotenv()?;

    let config = LoanlineConfig::load_with_api_url(flags.api_url.as_deref())
        .context("failed to load loanline configuration")?;
    warn_unconfigured(&config);

    tracing::debug!(
        base_url = config.api.endpoint(),
        timeout_secs = config.api.timeout_secs,
        "configuration loaded"
    );
    Ok(config)
}

/// Project `.loanline/.env` wins over a plain `.env` in the working
/// directory. Variables already set in the process are never overwritten.
fn load_dotenv() -> anyhow::Result<()> {
    let project_env = Path::new(".loanline").join(".env");
    if project_env.exists() {
        dotenvy::from_path(&project_env).with_context(|| {
            format!("failed to load dotenv file at {}", project_env.display())
        })?;
    }

    dotenvy::dotenv().ok();
    Ok(())
}

/// Emit warnings for likely mistyped env var keys that silently fell back to
/// defaults.
fn warn_unconfigured(config: &LoanlineConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LoanlineConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.is_default() && has_single_underscore_key(&env_keys, "LOANLINE_API") {
        warnings.push(
            "API base URL is still the default while LOANLINE_API_* env vars exist. Use double underscores (example: LOANLINE_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.ui.width.is_none() && has_single_underscore_key(&env_keys, "LOANLINE_UI") {
        warnings.push(
            "UI config appears default while LOANLINE_UI_* env vars exist. Use double underscores (example: LOANLINE_UI__COLOR)."
                .to_string(),
        );
    }

    warnings
}

/// Whether some key is `{section}_X` but not `{section}__X`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use loan_config::{ApiConfig, LoanlineConfig};

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_on_single_underscore_api_key() {
        let config = LoanlineConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("LOANLINE_API_BASE_URL", "http://timeline:8001")]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("LOANLINE_API__BASE_URL"));
    }

    #[test]
    fn silent_when_api_configured() {
        let config = LoanlineConfig {
            api: ApiConfig {
                base_url: "http://timeline:8001".into(),
                ..ApiConfig::default()
            },
            ..LoanlineConfig::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("LOANLINE_API__BASE_URL", "http://timeline:8001")]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn silent_for_correctly_spelled_api_keys() {
        let config = LoanlineConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("LOANLINE_API__TIMEOUT_SECS", "5")]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_on_single_underscore_ui_key() {
        let config = LoanlineConfig::default();
        let warnings =
            collect_unconfigured_warnings(&config, env(&[("LOANLINE_UI_WIDTH", "120")]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("LOANLINE_UI__COLOR"));
    }

    #[test]
    fn unrelated_env_is_ignored() {
        let config = LoanlineConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("LOANLINE_LOG", "debug"), ("PATH", "/usr/bin")]),
        );
        assert!(warnings.is_empty());
    }
}
