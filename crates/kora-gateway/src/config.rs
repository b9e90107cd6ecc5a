use std::env;
use url::Url;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_RATE_LIMIT_RPM: u32 = 120;
const DEFAULT_JSON_LIMIT: usize = 65_536;

#[derive(Clone)]
pub struct GatewayConfig {
    /// Server port
    pub port: u16,
    /// Checkout frontend base URL, used to build `payment_url` (no trailing slash)
    pub frontend_url: String,
    /// CORS allowed origins (`*` allows any)
    pub allowed_origins: Vec<String>,
    /// Rate limit requests per minute per IP
    pub rate_limit_rpm: u32,
    /// Maximum JSON request body in bytes
    pub json_limit: usize,
    /// Bearer token required for /metrics (None = public)
    pub metrics_token: Option<String>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("port", &self.port)
            .field("frontend_url", &self.frontend_url)
            .field("allowed_origins", &self.allowed_origins)
            .field("rate_limit_rpm", &self.rate_limit_rpm)
            .field("json_limit", &self.json_limit)
            .field(
                "metrics_token",
                &self.metrics_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for GatewayConfig {
    /// Local development settings: port 3001, frontend on localhost:3000, any origin.
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            allowed_origins: vec!["*".to_string()],
            rate_limit_rpm: DEFAULT_RATE_LIMIT_RPM,
            json_limit: DEFAULT_JSON_LIMIT,
            metrics_token: None,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let port = match var("PORT") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("PORT", s))?,
            None => DEFAULT_PORT,
        };

        let frontend_url = var("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        Url::parse(&frontend_url).map_err(|_| ConfigError::InvalidUrl(frontend_url.clone()))?;
        let frontend_url = frontend_url.trim_end_matches('/').to_string();

        let allowed_origins: Vec<String> = var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let rate_limit_rpm = match var("RATE_LIMIT_RPM") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("RATE_LIMIT_RPM", s))?,
            None => DEFAULT_RATE_LIMIT_RPM,
        };
        if rate_limit_rpm == 0 {
            return Err(ConfigError::InvalidNumber(
                "RATE_LIMIT_RPM",
                "0".to_string(),
            ));
        }

        let metrics_token = var("METRICS_TOKEN");
        if metrics_token.is_none() {
            tracing::warn!("METRICS_TOKEN not set - /metrics endpoint is publicly accessible");
        }

        Ok(Self {
            port,
            frontend_url,
            allowed_origins,
            rate_limit_rpm,
            json_limit: DEFAULT_JSON_LIMIT,
            metrics_token,
        })
    }

    /// Checkout link handed back to the merchant for a new session.
    pub fn payment_url(&self, session_id: &str) -> String {
        format!("{}/payment/{}", self.frontend_url, session_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid value for {0}: {1}")]
    InvalidNumber(&'static str, String),
}
