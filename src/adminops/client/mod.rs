// RGW Admin Ops Rust Library
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Admin ops client to inspect buckets of an RGW cluster.
//!
//! # HTTP Version Support
//!
//! The default transport negotiates HTTP/2 via ALPN when connecting over TLS
//! and the `http2` feature is enabled, otherwise it uses HTTP/1.1.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::adminops::creds::Provider;
use crate::adminops::error::{AdminOpsError, Error, ValidationErr};
use crate::adminops::http::BaseUrl;
use crate::adminops::transport::{RawResponse, ReqwestTransport, Transport};
use crate::adminops::types::{AdminOpsRequest, OperationParams, sign_admin_request};
use crate::adminops::utils::UtcTime;

mod get_bucket_info;
mod list_buckets;

/// Default path prefix of the admin API (RGW `rgw_admin_entry`).
pub const DEFAULT_ADMIN_PREFIX: &str = "admin";

/// Default region used in the signature scope.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for the HTTP connection of the default transport.
///
/// # Example
///
/// ```
/// use rgw_admin::adminops::client::ConnectionConfig;
/// use std::time::Duration;
///
/// let config = ConnectionConfig::default()
///     .timeout(Duration::from_secs(10))
///     .max_idle_per_host(4);
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Total time allowed for one request, including reading the body.
    ///
    /// Default: none
    pub timeout: Option<Duration>,

    /// Time allowed to establish the connection. Default: none
    pub connect_timeout: Option<Duration>,

    /// Maximum number of idle connections per host. Default: 8
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: Duration,

    /// Enable TCP_NODELAY. Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            max_idle_per_host: 8,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionConfig {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Builds an [`AdminOpsClient`] for a base URL.
#[derive(Debug)]
pub struct AdminOpsClientBuilder {
    base_url: BaseUrl,
    /// Credentials used to sign every request; required.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// Path prefix of the admin API, `admin` unless RGW is configured otherwise.
    admin_prefix: String,
    /// Region used in the signature scope.
    region: String,
    /// Set file for loading CAs certs to trust, in addition to the system trust store.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// (app_name, app_version) appended to the user agent.
    app_info: Option<(String, String)>,
    connection_config: ConnectionConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl AdminOpsClientBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            admin_prefix: DEFAULT_ADMIN_PREFIX.to_string(),
            region: DEFAULT_REGION.to_string(),
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            connection_config: ConnectionConfig::default(),
            transport: None,
        }
    }

    /// Set the credential provider. Admin requests are always signed, so
    /// building without one fails.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    pub fn admin_prefix(mut self, admin_prefix: impl Into<String>) -> Self {
        self.admin_prefix = admin_prefix.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. The file must contain PEM
    /// encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    pub fn connection_config(mut self, config: ConnectionConfig) -> Self {
        self.connection_config = config;
        self
    }

    /// Use a custom transport instead of the reqwest based default. TLS and
    /// connection settings are ignored in that case.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails with a [`ValidationErr`] when no credentials were provided, a key
    /// is empty, the certificate file is unreadable or the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<AdminOpsClient, Error> {
        let provider = self.provider.ok_or(ValidationErr::MissingCredentials)?;
        provider.fetch().validate()?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(build_http_client(
                &self.connection_config,
                self.app_info,
                self.ssl_cert_file,
                self.ignore_cert_check,
            )?)),
        };

        Ok(AdminOpsClient {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                admin_prefix: self.admin_prefix,
                region: self.region,
                transport,
            }),
        })
    }
}

#[allow(unused_variables, unused_mut)]
fn build_http_client(
    config: &ConnectionConfig,
    app_info: Option<(String, String)>,
    ssl_cert_file: Option<PathBuf>,
    ignore_cert_check: Option<bool>,
) -> Result<reqwest::Client, ValidationErr> {
    let mut builder = reqwest::Client::builder()
        .no_gzip()
        .redirect(reqwest::redirect::Policy::none())
        .tcp_nodelay(config.tcp_nodelay)
        .tcp_keepalive(config.tcp_keepalive)
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(config.idle_timeout);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }

    #[cfg(feature = "http2")]
    {
        builder = builder.http2_adaptive_window(true);
    }

    let mut user_agent = String::from("RGW-Admin (")
        + std::env::consts::OS
        + "; "
        + std::env::consts::ARCH
        + ") rgw-admin/"
        + env!("CARGO_PKG_VERSION");

    if let Some((app_name, app_version)) = app_info {
        user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
    }
    builder = builder.user_agent(user_agent);

    #[cfg(any(
        feature = "default-tls",
        feature = "native-tls",
        feature = "rustls-tls"
    ))]
    if let Some(v) = ignore_cert_check {
        builder = builder.danger_accept_invalid_certs(v);
    }

    #[cfg(any(
        feature = "default-tls",
        feature = "native-tls",
        feature = "rustls-tls"
    ))]
    if let Some(path) = ssl_cert_file {
        let buf = std::fs::read(&path)
            .map_err(|source| ValidationErr::CertificateFile { path, source })?;
        for cert in reqwest::Certificate::from_pem_bundle(&buf)? {
            builder = builder.add_root_certificate(cert);
        }
    }

    Ok(builder.build()?)
}

/// Client for the RGW admin ops API.
///
/// Cheap to clone; clones share configuration and connection pool. Every
/// request is signed with AWS Signature Version 4.
#[derive(Clone, Debug)]
pub struct AdminOpsClient {
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Arc<dyn Provider + Send + Sync + 'static>,
    admin_prefix: String,
    region: String,
    transport: Arc<dyn Transport>,
}

impl AdminOpsClient {
    /// Returns a client with given base URL and credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin::adminops::client::AdminOpsClient;
    /// use rgw_admin::adminops::creds::StaticProvider;
    /// use rgw_admin::adminops::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://foo.bar:123".parse().unwrap();
    /// let client = AdminOpsClient::new(base_url, StaticProvider::new("asd", "qwe")).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: P,
    ) -> Result<Self, Error> {
        AdminOpsClientBuilder::new(base_url)
            .provider(Some(provider))
            .build()
    }

    pub fn builder(base_url: BaseUrl) -> AdminOpsClientBuilder {
        AdminOpsClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn admin_prefix(&self) -> &str {
        &self.shared.admin_prefix
    }

    pub fn region(&self) -> &str {
        &self.shared.region
    }

    /// Addresses and signs an operation at `date`.
    pub(crate) fn sign_request(
        &self,
        operation: &OperationParams,
        uid: Option<&str>,
        date: UtcTime,
    ) -> Result<AdminOpsRequest, ValidationErr> {
        let creds = self.shared.provider.fetch();
        creds.validate()?;
        sign_admin_request(
            &self.shared.base_url,
            &self.shared.admin_prefix,
            &self.shared.region,
            &creds,
            uid,
            operation,
            date,
        )
    }

    /// Sends a signed request once and maps failures to [`AdminOpsError`].
    ///
    /// Only 2xx responses are returned as `Ok`.
    pub(crate) async fn execute(&self, request: &AdminOpsRequest) -> Result<RawResponse, Error> {
        log::debug!(
            "admin ops {}: {} {}",
            request.operation(),
            request.method(),
            request.url()
        );

        let response = match self.shared.transport.execute(request).await {
            Ok(resp) => resp,
            Err(e) => {
                let err = AdminOpsError::from_transport(request, e);
                log::warn!("{err}");
                return Err(err.into());
            }
        };

        log::debug!(
            "admin ops {}: received {} ({} bytes)",
            request.operation(),
            response.status,
            response.body.len()
        );

        if response.status.is_success() {
            Ok(response)
        } else {
            let err = AdminOpsError::from_response(request, response);
            log::warn!("{err}");
            Err(err.into())
        }
    }
}
