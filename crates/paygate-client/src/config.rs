use std::env;

use url::Url;

/// Merchant identity attached as headers on every outbound call.
#[derive(Clone)]
pub struct GatewayCredentials {
    pub channel_id: String,
    pub channel_secret: String,
}

impl std::fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("channel_id", &self.channel_id)
            .field("channel_secret", &"[REDACTED]")
            .finish()
    }
}

/// Base URLs per operation. Detail and capture URLs are templated with a
/// transaction id and a sub-action suffix at call time.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub reservation_url: String,
    pub detail_url: String,
    pub capture_url: String,
}

/// Gateway connection settings, resolved once at construction and immutable
/// for the client's lifetime.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoints: Endpoints,
    pub credentials: GatewayCredentials,
}

impl GatewayConfig {
    pub fn new(endpoints: Endpoints, credentials: GatewayCredentials) -> Self {
        Self {
            endpoints,
            credentials,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// All five variables are required; endpoint values must parse as URLs.
    pub fn from_env() -> Result<Self, ConfigError> {
        let reservation_url = required_url("PAYGATE_RESERVATION_URL")?;
        let detail_url = required_url("PAYGATE_DETAIL_URL")?;
        let capture_url = required_url("PAYGATE_CAPTURE_URL")?;

        let channel_id = required("PAYGATE_CHANNEL_ID")?;
        let channel_secret = required("PAYGATE_CHANNEL_SECRET")?;

        Ok(Self {
            endpoints: Endpoints {
                reservation_url,
                detail_url,
                capture_url,
            },
            credentials: GatewayCredentials {
                channel_id,
                channel_secret,
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingRequired(name))
}

fn required_url(name: &'static str) -> Result<String, ConfigError> {
    let value = required(name)?;
    Url::parse(&value).map_err(|_| ConfigError::InvalidUrl(value.clone()))?;
    Ok(value)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingRequired(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GatewayConfig {
        GatewayConfig::new(
            Endpoints {
                reservation_url: "https://gw.example.com/v2/payments/request".to_string(),
                detail_url: "https://gw.example.com/v2/payments".to_string(),
                capture_url: "https://gw.example.com/v2/payments/authorizations".to_string(),
            },
            GatewayCredentials {
                channel_id: "channel-1".to_string(),
                channel_secret: "super-secret".to_string(),
            },
        )
    }

    #[test]
    fn debug_redacts_channel_secret() {
        let rendered = format!("{:?}", sample_config());
        assert!(rendered.contains("channel-1"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn from_env_reads_all_variables() {
        // Single test touching the process environment; env vars are
        // process-global, so all from_env cases live here.
        let vars = [
            ("PAYGATE_RESERVATION_URL", "https://gw.example.com/request"),
            ("PAYGATE_DETAIL_URL", "https://gw.example.com/payments"),
            ("PAYGATE_CAPTURE_URL", "https://gw.example.com/authorizations"),
            ("PAYGATE_CHANNEL_ID", "channel-1"),
            ("PAYGATE_CHANNEL_SECRET", "s3cret"),
        ];
        for (name, value) in vars {
            env::set_var(name, value);
        }

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(
            config.endpoints.reservation_url,
            "https://gw.example.com/request"
        );
        assert_eq!(config.credentials.channel_id, "channel-1");

        env::set_var("PAYGATE_RESERVATION_URL", "not a url");
        assert!(matches!(
            GatewayConfig::from_env(),
            Err(ConfigError::InvalidUrl(_))
        ));
        env::set_var("PAYGATE_RESERVATION_URL", "https://gw.example.com/request");

        env::remove_var("PAYGATE_CHANNEL_SECRET");
        assert!(matches!(
            GatewayConfig::from_env(),
            Err(ConfigError::MissingRequired("PAYGATE_CHANNEL_SECRET"))
        ));

        for (name, _) in vars {
            env::remove_var(name);
        }
    }
}
