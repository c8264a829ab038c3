//! Environment-derived service configuration.
//!
//! Variables are read once, when [`ServiceConfig::from_env`] is called, and
//! never consulted again. Each service uses its own prefix: the service name
//! upper-cased with `-` mapped to `_` (`dns_records` -> `DNS_RECORDS_URL`).

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{
    AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_IAM, AUTHTYPE_NOAUTH, Authenticator,
    BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator, NoAuthAuthenticator,
};
use crate::error::{Result, SdkError};

/// Settings for one service, as found in the environment.
#[derive(Clone, Default)]
pub struct ServiceConfig {
    /// `<SERVICE>_URL`
    pub url: Option<String>,
    /// `<SERVICE>_AUTH_TYPE`
    pub auth_type: Option<String>,
    /// `<SERVICE>_APIKEY`
    pub apikey: Option<String>,
    /// `<SERVICE>_USERNAME`
    pub username: Option<String>,
    /// `<SERVICE>_PASSWORD`
    pub password: Option<String>,
    /// `<SERVICE>_BEARER_TOKEN`
    pub bearer_token: Option<String>,
    /// `<SERVICE>_AUTH_URL`
    pub auth_url: Option<String>,
    /// `<SERVICE>_CLIENT_ID`
    pub client_id: Option<String>,
    /// `<SERVICE>_CLIENT_SECRET`
    pub client_secret: Option<String>,
    /// `<SERVICE>_SCOPE`
    pub scope: Option<String>,
    /// `<SERVICE>_DISABLE_SSL`
    pub disable_ssl: bool,
    /// `<SERVICE>_ENABLE_RETRIES`
    pub enable_retries: bool,
    /// `<SERVICE>_MAX_RETRIES`
    pub max_retries: Option<u32>,
    /// `<SERVICE>_RETRY_INTERVAL`, in seconds
    pub retry_interval: Option<Duration>,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ServiceConfig")
            .field("url", &self.url)
            .field("auth_type", &self.auth_type)
            .field("apikey", &redact(&self.apikey))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("bearer_token", &redact(&self.bearer_token))
            .field("auth_url", &self.auth_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("scope", &self.scope)
            .field("disable_ssl", &self.disable_ssl)
            .field("enable_retries", &self.enable_retries)
            .field("max_retries", &self.max_retries)
            .field("retry_interval", &self.retry_interval)
            .finish()
    }
}

/// Environment variable prefix for a service name.
pub fn env_prefix(service_name: &str) -> String {
    service_name.to_uppercase().replace('-', "_")
}

impl ServiceConfig {
    /// Read the configuration for `service_name` from the process environment.
    pub fn from_env(service_name: &str) -> Self {
        Self::from_vars(service_name, std::env::vars())
    }

    /// Build the configuration from explicit `(name, value)` pairs.
    ///
    /// Unrelated variables are ignored; empty values count as unset.
    pub fn from_vars<I, K, V>(service_name: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefix = format!("{}_", env_prefix(service_name));
        let mut config = Self::default();

        for (name, value) in vars {
            let Some(key) = name.as_ref().strip_prefix(&prefix) else {
                continue;
            };
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            match key {
                "URL" => config.url = Some(value),
                "AUTH_TYPE" | "AUTHTYPE" => config.auth_type = Some(value),
                "APIKEY" => config.apikey = Some(value),
                "USERNAME" => config.username = Some(value),
                "PASSWORD" => config.password = Some(value),
                "BEARER_TOKEN" => config.bearer_token = Some(value),
                "AUTH_URL" => config.auth_url = Some(value),
                "CLIENT_ID" => config.client_id = Some(value),
                "CLIENT_SECRET" => config.client_secret = Some(value),
                "SCOPE" => config.scope = Some(value),
                "DISABLE_SSL" => config.disable_ssl = parse_bool(&value),
                "ENABLE_RETRIES" => config.enable_retries = parse_bool(&value),
                "MAX_RETRIES" => match value.parse() {
                    Ok(n) => config.max_retries = Some(n),
                    Err(e) => log::warn!("Ignoring {prefix}MAX_RETRIES={value}: {e}"),
                },
                "RETRY_INTERVAL" => match value.parse() {
                    Ok(secs) => config.retry_interval = Some(Duration::from_secs(secs)),
                    Err(e) => log::warn!("Ignoring {prefix}RETRY_INTERVAL={value}: {e}"),
                },
                _ => {}
            }
        }

        config
    }

    /// Resolved authentication type, lower-cased.
    ///
    /// Falls back to IAM when no type is given but an API key is.
    pub fn resolved_auth_type(&self) -> Option<String> {
        self.auth_type
            .as_deref()
            .map(str::to_lowercase)
            .or_else(|| self.apikey.as_ref().map(|_| AUTHTYPE_IAM.to_string()))
    }

    /// Construct the authenticator these settings describe.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>> {
        let Some(auth_type) = self.resolved_auth_type() else {
            return Err(SdkError::Configuration(
                "authentication type not specified".to_string(),
            ));
        };

        let required = |field: &Option<String>, name: &str| -> Result<String> {
            field.clone().ok_or_else(|| {
                SdkError::Configuration(format!("{name} is required for {auth_type} authentication"))
            })
        };

        let authenticator: Arc<dyn Authenticator> = match auth_type.as_str() {
            AUTHTYPE_NOAUTH => Arc::new(NoAuthAuthenticator::new()),
            AUTHTYPE_BASIC => Arc::new(BasicAuthenticator::new(
                self.username.clone().unwrap_or_default(),
                self.password.clone().unwrap_or_default(),
            )?),
            AUTHTYPE_BEARER_TOKEN => Arc::new(BearerTokenAuthenticator::new(required(
                &self.bearer_token,
                "BEARER_TOKEN",
            )?)?),
            AUTHTYPE_IAM => {
                let mut builder = IamAuthenticator::builder(required(&self.apikey, "APIKEY")?)
                    .disable_ssl(self.disable_ssl);
                if let Some(url) = &self.auth_url {
                    builder = builder.url(url.clone());
                }
                if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
                    builder = builder.client_credentials(id.clone(), secret.clone());
                }
                if let Some(scope) = &self.scope {
                    builder = builder.scope(scope.clone());
                }
                Arc::new(builder.build()?)
            }
            other => {
                return Err(SdkError::Configuration(format!(
                    "unrecognized authentication type: {other}"
                )));
            }
        };

        log::debug!("Using {auth_type} authentication");
        Ok(authenticator)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn prefix_from_service_name() {
        assert_eq!(env_prefix("dns_records"), "DNS_RECORDS");
        assert_eq!(env_prefix("user-agent-blocking-rules"), "USER_AGENT_BLOCKING_RULES");
    }

    #[test]
    fn reads_only_matching_prefix() {
        let config = ServiceConfig::from_vars(
            "zones",
            vars(&[
                ("ZONES_URL", "https://zones.example.com"),
                ("ZONES_AUTH_TYPE", "noauth"),
                ("ZONES_DISABLE_SSL", "true"),
                ("ZONES_ENABLE_RETRIES", "TRUE"),
                ("ZONES_MAX_RETRIES", "3"),
                ("ZONES_RETRY_INTERVAL", "20"),
                ("WEBHOOKS_URL", "https://other.example.com"),
            ]),
        );
        assert_eq!(config.url.as_deref(), Some("https://zones.example.com"));
        assert_eq!(config.auth_type.as_deref(), Some("noauth"));
        assert!(config.disable_ssl);
        assert!(config.enable_retries);
        assert_eq!(config.max_retries, Some(3));
        assert_eq!(config.retry_interval, Some(Duration::from_secs(20)));
    }

    #[test]
    fn bad_numbers_are_ignored() {
        let config = ServiceConfig::from_vars("zones", vars(&[("ZONES_MAX_RETRIES", "many")]));
        assert_eq!(config.max_retries, None);
    }

    #[test]
    fn apikey_implies_iam() {
        let config = ServiceConfig::from_vars("zones", vars(&[("ZONES_APIKEY", "abc")]));
        assert_eq!(config.resolved_auth_type().as_deref(), Some("iam"));
        let auth = config.authenticator();
        assert!(matches!(auth, Ok(ref a) if a.authentication_type() == AUTHTYPE_IAM));
    }

    #[test]
    fn auth_type_is_case_insensitive() {
        let config = ServiceConfig::from_vars(
            "zones",
            vars(&[("ZONES_AUTH_TYPE", "bearerToken"), ("ZONES_BEARER_TOKEN", "tok")]),
        );
        let auth = config.authenticator();
        assert!(matches!(auth, Ok(ref a) if a.authentication_type() == AUTHTYPE_BEARER_TOKEN));
    }

    #[test]
    fn unsupported_auth_type_fails() {
        let config = ServiceConfig::from_vars("zones", vars(&[("ZONES_AUTH_TYPE", "kerberos")]));
        assert!(matches!(
            config.authenticator(),
            Err(SdkError::Configuration(ref m)) if m.contains("kerberos")
        ));
    }

    #[test]
    fn basic_with_empty_credentials_fails() {
        let config = ServiceConfig::from_vars(
            "zones",
            vars(&[("ZONES_AUTH_TYPE", "basic"), ("ZONES_USERNAME", "user")]),
        );
        assert!(matches!(config.authenticator(), Err(SdkError::Configuration(_))));
    }

    #[test]
    fn missing_auth_type_fails() {
        let config = ServiceConfig::from_vars("zones", Vec::<(String, String)>::new());
        assert!(config.authenticator().is_err());
    }

    #[test]
    fn debug_hides_secrets() {
        let config = ServiceConfig::from_vars(
            "zones",
            vars(&[("ZONES_APIKEY", "super-secret"), ("ZONES_PASSWORD", "hunter2")]),
        );
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(!printed.contains("hunter2"));
    }
}
