use anyhow::Context;
use fir_client::{ApiClient, JobPoller};
use fir_config::FirConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub client: ApiClient,
    pub poller: JobPoller,
    pub config: FirConfig,
}

impl AppContext {
    /// Build the API client. `base_url` (from `--base-url`) replaces the
    /// configured server.
    pub fn init(mut config: FirConfig, base_url: Option<&str>) -> anyhow::Result<Self> {
        if let Some(base_url) = base_url {
            config.api.base_url = base_url.to_string();
        }

        let client = ApiClient::new(&config.api)
            .with_context(|| format!("cannot use API server '{}'", config.api.base_url))?;
        let poller = JobPoller::from_config(&config.poll);
        tracing::debug!(base_url = client.base_url(), "api client ready");

        Ok(Self {
            client,
            poller,
            config,
        })
    }

    /// Default page size when neither the command nor `--limit` sets one.
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

#[cfg(test)]
mod tests {
    use fir_config::FirConfig;

    use super::AppContext;

    #[test]
    fn base_url_flag_overrides_config() {
        let ctx = AppContext::init(FirConfig::default(), Some("https://fir.example.org/"))
            .expect("context should build");
        assert_eq!(ctx.client.base_url(), "https://fir.example.org");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = AppContext::init(FirConfig::default(), Some("fir.example.org"));
        assert!(result.is_err());
    }
}
