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

use crate::adminops::client::{AdminOpsClient, DEFAULT_ADMIN_PREFIX, DEFAULT_REGION};
use crate::adminops::creds::Credentials;
use crate::adminops::error::ValidationErr;
use crate::adminops::header_constants::{FORMAT, HOST, UID, X_AMZ_CONTENT_SHA256, X_AMZ_DATE};
use crate::adminops::http::BaseUrl;
use crate::adminops::multimap_ext::{Multimap, MultimapExt};
use crate::adminops::signer::sign_v4_s3;
use crate::adminops::utils::{
    EMPTY_SHA256, UtcTime, check_reserved_query_params, to_amz_date, utc_now,
};
use http::Method;
use std::collections::BTreeMap;
use typed_builder::TypedBuilder;

/// Describes one admin ops operation independently of endpoint and credentials.
///
/// # Example
///
/// ```
/// use rgw_admin::adminops::types::OperationParams;
///
/// let params = OperationParams::builder()
///     .name("list_buckets")
///     .resource("bucket")
///     .build();
/// assert_eq!(params.method, http::Method::GET);
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct OperationParams {
    /// Operation name used in logs and errors
    #[builder(!default, setter(into))]
    pub name: String,
    #[builder(default = Method::GET)]
    pub method: Method,
    /// Admin resource, e.g. `bucket` for `/admin/bucket`
    #[builder(!default, setter(into))]
    pub resource: String,
    /// Operation parameters, added after `format=json`
    #[builder(default)]
    pub query_params: Multimap,
    #[builder(default)]
    pub headers: Multimap,
}

/// A fully addressed and signed admin ops request.
///
/// Immutable once built. The URL carries no secret material; the signature
/// travels in the `Authorization` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminOpsRequest {
    operation: String,
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    headers: BTreeMap<String, String>,
}

impl AdminOpsRequest {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL including the encoded query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query parameters in canonical order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the first value of a query parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_query_param(&self, key: &str) -> bool {
        self.query_param(key).is_some()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Looks a header up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Builds and signs a request without a client.
///
/// Uses the default admin prefix (`admin`) and signing region (`us-east-1`).
/// Identical inputs and `date` always yield an identical request.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rgw_admin::adminops::types::{OperationParams, build_request};
///
/// let params = OperationParams::builder()
///     .name("list_buckets")
///     .resource("bucket")
///     .build();
/// let date = Utc.with_ymd_and_hms(2023, 4, 12, 7, 23, 8).unwrap();
/// let req = build_request("http://foo.bar:123", "asd", "qwe", Some("asdasd"), &params, date).unwrap();
/// assert_eq!(req.url(), "http://foo.bar:123/admin/bucket?format=json&uid=asdasd");
/// ```
pub fn build_request(
    url: &str,
    access_key: &str,
    secret_key: &str,
    uid: Option<&str>,
    params: &OperationParams,
    date: UtcTime,
) -> Result<AdminOpsRequest, ValidationErr> {
    let base_url: BaseUrl = url.parse()?;
    let creds = Credentials::new(access_key, secret_key);
    creds.validate()?;
    sign_admin_request(
        &base_url,
        DEFAULT_ADMIN_PREFIX,
        DEFAULT_REGION,
        &creds,
        uid,
        params,
        date,
    )
}

pub(crate) fn sign_admin_request(
    base_url: &BaseUrl,
    admin_prefix: &str,
    region: &str,
    creds: &Credentials,
    uid: Option<&str>,
    params: &OperationParams,
    date: UtcTime,
) -> Result<AdminOpsRequest, ValidationErr> {
    let resource = params.resource.trim_matches('/');
    if resource.is_empty() || resource.contains(['?', '#', '&']) {
        return Err(ValidationErr::InvalidResource(params.resource.clone()));
    }

    let prefix = admin_prefix.trim_matches('/');
    let path = if prefix.is_empty() {
        format!("/{resource}")
    } else {
        format!("/{prefix}/{resource}")
    };

    check_reserved_query_params(&params.query_params, &[FORMAT, UID])?;

    let mut query = Multimap::new();
    query.add(FORMAT, "json");
    query.add_multimap(params.query_params.clone());
    if let Some(uid) = uid {
        if uid.is_empty() {
            return Err(ValidationErr::EmptyUserId);
        }
        query.add(UID, uid);
    }

    let url = base_url.build_url(&path, &query);

    let mut headers = params.headers.clone();
    headers.add(HOST, url.host_header_value());
    headers.add(X_AMZ_CONTENT_SHA256, EMPTY_SHA256);
    headers.add(X_AMZ_DATE, to_amz_date(date));

    sign_v4_s3(
        &params.method,
        &path,
        region,
        &mut headers,
        &query,
        &creds.access_key,
        &creds.secret_key,
        EMPTY_SHA256,
        date,
    );

    Ok(AdminOpsRequest {
        operation: params.name.clone(),
        method: params.method.clone(),
        url: url.to_string(),
        query: query.to_sorted_pairs(),
        headers: headers
            .iter_all()
            .map(|(k, vs)| (k.clone(), vs.join(",")))
            .collect(),
    })
}

/// Request produced by an operation builder, bound to a client.
#[derive(Clone, Debug)]
pub struct AdminRequest {
    pub client: AdminOpsClient,
    pub operation: OperationParams,
    pub uid: Option<String>,
}

impl AdminRequest {
    /// Signs the request with the client's credentials at the current time.
    pub(crate) fn sign(&self) -> Result<AdminOpsRequest, ValidationErr> {
        self.client
            .sign_request(&self.operation, self.uid.as_deref(), utc_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adminops::header_constants::AUTHORIZATION;
    use chrono::{TimeZone, Utc};

    fn date() -> UtcTime {
        Utc.with_ymd_and_hms(2023, 4, 12, 7, 23, 8).unwrap()
    }

    fn list_params() -> OperationParams {
        let mut query_params = Multimap::new();
        query_params.add("stats", "true");
        OperationParams::builder()
            .name("list_buckets")
            .resource("bucket")
            .query_params(query_params)
            .build()
    }

    #[test]
    fn test_build_request_without_uid() {
        let req =
            build_request("http://foo.bar:123", "asd", "qwe", None, &list_params(), date()).unwrap();

        assert_eq!(req.operation(), "list_buckets");
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(
            req.url(),
            "http://foo.bar:123/admin/bucket?format=json&stats=true"
        );
        assert_eq!(req.query_param("format"), Some("json"));
        assert!(!req.has_query_param("uid"));
        assert!(!req.url().contains("uid"));
    }

    #[test]
    fn test_build_request_with_uid() {
        let req = build_request(
            "http://foo.bar:123",
            "asd",
            "qwe",
            Some("asdasd"),
            &list_params(),
            date(),
        )
        .unwrap();

        assert_eq!(req.query_param("uid"), Some("asdasd"));
        assert!(req.url().contains("uid=asdasd"));
    }

    #[test]
    fn test_build_request_headers() {
        let req =
            build_request("http://foo.bar:123", "asd", "qwe", None, &list_params(), date()).unwrap();

        assert_eq!(req.header("host"), Some("foo.bar:123"));
        assert_eq!(req.header(X_AMZ_DATE), Some("20230412T072308Z"));
        assert_eq!(req.header(X_AMZ_CONTENT_SHA256), Some(EMPTY_SHA256));

        let auth = req.header(AUTHORIZATION).unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=asd/20230412/us-east-1/s3/aws4_request"));
        assert!(!auth.contains("qwe"));
        assert!(!req.url().contains("qwe"));
    }

    #[test]
    fn test_build_request_is_deterministic() {
        let a = build_request(
            "http://foo.bar:123",
            "asd",
            "qwe",
            Some("asdasd"),
            &list_params(),
            date(),
        )
        .unwrap();
        let b = build_request(
            "http://foo.bar:123",
            "asd",
            "qwe",
            Some("asdasd"),
            &list_params(),
            date(),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_request_validation() {
        assert!(matches!(
            build_request("ftp://foo.bar", "asd", "qwe", None, &list_params(), date()),
            Err(ValidationErr::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            build_request("http://foo.bar:123", "", "qwe", None, &list_params(), date()),
            Err(ValidationErr::EmptyAccessKey)
        ));
        assert!(matches!(
            build_request("http://foo.bar:123", "asd", "", None, &list_params(), date()),
            Err(ValidationErr::EmptySecretKey)
        ));
        assert!(matches!(
            build_request("http://foo.bar:123", "asd", "qwe", Some(""), &list_params(), date()),
            Err(ValidationErr::EmptyUserId)
        ));

        let params = OperationParams::builder()
            .name("broken")
            .resource("/")
            .build();
        assert!(matches!(
            build_request("http://foo.bar:123", "asd", "qwe", None, &params, date()),
            Err(ValidationErr::InvalidResource(_))
        ));
    }

    #[test]
    fn test_build_request_rejects_duplicate_format_and_uid() {
        let mut query_params = Multimap::new();
        query_params.add(FORMAT, "xml");
        let params = OperationParams::builder()
            .name("list_buckets")
            .resource("bucket")
            .query_params(query_params)
            .build();
        assert!(matches!(
            build_request("http://foo.bar:123", "asd", "qwe", None, &params, date()),
            Err(ValidationErr::ReservedQueryParam(key)) if key == "format"
        ));

        let mut query_params = Multimap::new();
        query_params.add(UID, "other");
        let params = OperationParams::builder()
            .name("list_buckets")
            .resource("bucket")
            .query_params(query_params)
            .build();
        assert!(matches!(
            build_request("http://foo.bar:123", "asd", "qwe", Some("asdasd"), &params, date()),
            Err(ValidationErr::ReservedQueryParam(key)) if key == "uid"
        ));
    }

    #[test]
    fn test_sign_admin_request_custom_prefix_and_region() {
        let base_url: BaseUrl = "https://rgw.local".parse().unwrap();
        let req = sign_admin_request(
            &base_url,
            "/rgw-admin/",
            "zg-east",
            &Credentials::new("asd", "qwe"),
            None,
            &list_params(),
            date(),
        )
        .unwrap();

        assert_eq!(
            req.url(),
            "https://rgw.local/rgw-admin/bucket?format=json&stats=true"
        );
        assert!(req.header(AUTHORIZATION).unwrap().contains("/zg-east/s3/"));
        assert_eq!(req.header("host"), Some("rgw.local"));
    }
}
