//! # cis-networking
//!
//! Typed clients for the IBM Cloud Internet Services networking APIs.
//!
//! ## Resource Families
//!
//! | Feature | Client | Resource |
//! |---------|--------|----------|
//! | `dns-records` | [`DnsRecordsV1`] | DNS records of one zone |
//! | `global-load-balancer-monitor` | [`GlobalLoadBalancerMonitorV1`] | load balancer health monitors |
//! | `permitted-networks-for-dns-zones` | [`PermittedNetworksForDnsZonesV1`] | VPCs allowed to resolve a private zone |
//! | `user-agent-blocking-rules` | [`UserAgentBlockingRulesV1`] | user-agent firewall rules of one zone |
//! | `webhooks` | [`WebhooksV1`] | alert webhook destinations |
//! | `firewall-access-rules` | [`FirewallAccessRulesV1`] | account-level IP/ASN/country rules |
//! | `zones` | [`ZonesV1`] | zones of a CIS instance |
//!
//! `all-services` (default) enables every family. TLS is selected with
//! `native-tls` (default) or `rustls`.
//!
//! Every operation comes in two forms: `op(&options)` and
//! `op_with_context(&ctx, &options)`, where a [`RequestContext`] carries a
//! deadline and a cancellation token.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cis_networking::{
//!     IamAuthenticator, ListZonesOptions, ServiceClient, ZonesV1, ZonesV1Options,
//! };
//!
//! # async fn example() -> cis_networking::Result<()> {
//! let mut zones = ZonesV1::new(ZonesV1Options {
//!     authenticator: Some(Arc::new(IamAuthenticator::new("my-api-key")?)),
//!     crn: Some("crn:v1:bluemix:public:internet-svcs:global:a/123::".to_string()),
//!     ..Default::default()
//! })?;
//! zones.enable_retries(3, std::time::Duration::from_secs(10));
//!
//! let response = zones
//!     .list_zones(&ListZonesOptions::new().with_per_page(50))
//!     .await?;
//! for zone in response.result.and_then(|env| env.result).unwrap_or_default() {
//!     println!("{:?} {:?}", zone.name, zone.status);
//! }
//! # Ok(())
//! # }
//! ```

mod common;
mod envelope;
mod traits;

#[cfg(feature = "dns-records")]
pub mod dns_records;
#[cfg(feature = "firewall-access-rules")]
pub mod firewall_access_rules;
#[cfg(feature = "global-load-balancer-monitor")]
pub mod global_load_balancer_monitor;
#[cfg(feature = "permitted-networks-for-dns-zones")]
pub mod permitted_networks_for_dns_zones;
#[cfg(feature = "user-agent-blocking-rules")]
pub mod user_agent_blocking_rules;
#[cfg(feature = "webhooks")]
pub mod webhooks;
#[cfg(feature = "zones")]
pub mod zones;

pub use common::{
    CIS_DEFAULT_SERVICE_URL, CIS_REGION_URLS, MatchMode, SDK_VERSION, SortDirection, user_agent,
};
pub use envelope::{Envelope, IdResult, ResultInfo};
pub use traits::ServiceClient;

// Core types, so callers need a single dependency.
pub use cis_networking_core::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, CancellationToken,
    DetailedResponse, ERRORMSG_SERVICE_URL_MISSING, HeaderMap, IamAuthenticator,
    NoAuthAuthenticator, RawResponse, RequestContext, Result, SdkError, ServiceConfig,
};

#[cfg(feature = "dns-records")]
pub use dns_records::{DnsRecordsV1, DnsRecordsV1Options};
#[cfg(feature = "firewall-access-rules")]
pub use firewall_access_rules::{FirewallAccessRulesV1, FirewallAccessRulesV1Options};
#[cfg(feature = "global-load-balancer-monitor")]
pub use global_load_balancer_monitor::{
    GlobalLoadBalancerMonitorV1, GlobalLoadBalancerMonitorV1Options,
};
#[cfg(feature = "permitted-networks-for-dns-zones")]
pub use permitted_networks_for_dns_zones::{
    PermittedNetworksForDnsZonesV1, PermittedNetworksForDnsZonesV1Options,
};
#[cfg(feature = "user-agent-blocking-rules")]
pub use user_agent_blocking_rules::{UserAgentBlockingRulesV1, UserAgentBlockingRulesV1Options};
#[cfg(feature = "webhooks")]
pub use webhooks::{WebhooksV1, WebhooksV1Options};
#[cfg(feature = "zones")]
pub use zones::{ListZonesOptions, ZonesV1, ZonesV1Options};
