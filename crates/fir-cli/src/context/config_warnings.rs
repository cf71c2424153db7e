use fir_config::{DEFAULT_BASE_URL, FirConfig, PollConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &FirConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FirConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.base_url == DEFAULT_BASE_URL && has_single_underscore_key(&env_keys, "FIR_API")
    {
        warnings.push(
            "API config appears default while FIR_API* env vars exist. Use double underscores (example: FIR_API__BASE_URL)."
                .to_string(),
        );
    }

    let poll_defaults = PollConfig::default();
    if config.poll.interval_secs == poll_defaults.interval_secs
        && config.poll.timeout_secs == poll_defaults.timeout_secs
        && has_single_underscore_key(&env_keys, "FIR_POLL")
    {
        warnings.push(
            "Poll config appears default while FIR_POLL* env vars exist. Use double underscores (example: FIR_POLL__TIMEOUT_SECS)."
                .to_string(),
        );
    }

    warnings
}

/// `FIR_API_BASE_URL` style keys: the section prefix without the `__` separator.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}
