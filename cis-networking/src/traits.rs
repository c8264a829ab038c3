use std::time::Duration;

use cis_networking_core::{BaseService, HeaderMap, Result};

/// Settings every resource client exposes.
///
/// Implementors only hand out their [`BaseService`]; the setters are shared.
pub trait ServiceClient {
    fn base_service(&self) -> &BaseService;

    fn base_service_mut(&mut self) -> &mut BaseService;

    /// Point the client at another endpoint. The empty string is accepted;
    /// operations then fail with "service URL missing".
    fn set_service_url(&mut self, url: &str) -> Result<()> {
        self.base_service_mut().set_service_url(url)
    }

    fn service_url(&self) -> &str {
        self.base_service().service_url()
    }

    /// Headers added to every request. Per-call headers take precedence.
    fn set_default_headers(&mut self, headers: HeaderMap) {
        self.base_service_mut().set_default_headers(headers);
    }

    /// Skip TLS certificate verification.
    fn set_disable_ssl(&mut self, disable_ssl: bool) -> Result<()> {
        self.base_service_mut().set_disable_ssl(disable_ssl)
    }

    /// Retry transient failures. Zero values select the defaults
    /// (4 retries, 30 s interval cap).
    fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.base_service_mut()
            .enable_retries(max_retries, max_interval);
    }

    fn disable_retries(&mut self) {
        self.base_service_mut().disable_retries();
    }
}
