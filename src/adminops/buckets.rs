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

//! One-shot operations taking the endpoint and credentials per call.

use crate::adminops::client::AdminOpsClient;
use crate::adminops::creds::StaticProvider;
use crate::adminops::error::Error;
use crate::adminops::http::BaseUrl;
use crate::adminops::types::{AdminApi, Bucket};

fn client_for(url: &str, access_key: &str, secret_key: &str) -> Result<AdminOpsClient, Error> {
    let base_url: BaseUrl = url.parse()?;
    AdminOpsClient::new(base_url, StaticProvider::new(access_key, secret_key))
}

/// Lists buckets, restricted to those owned by `uid` when given.
///
/// Sends `GET <url>/admin/bucket?format=json&stats=true[&uid=<uid>]` once.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), rgw_admin::adminops::error::Error> {
/// let buckets = rgw_admin::adminops::buckets::list_buckets(
///     "http://foo.bar:123", "asd", "qwe", Some("asdasd"),
/// ).await?;
/// for bucket in &buckets {
///     println!("{}", bucket.bucket);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn list_buckets(
    url: &str,
    access_key: &str,
    secret_key: &str,
    uid: Option<&str>,
) -> Result<Vec<Bucket>, Error> {
    let resp = client_for(url, access_key, secret_key)?
        .list_buckets()
        .uid(uid.map(String::from))
        .build()
        .send()
        .await?;
    Ok(resp.into_buckets())
}

/// Fetches one bucket record.
pub async fn get_bucket_info(
    url: &str,
    access_key: &str,
    secret_key: &str,
    bucket: &str,
    uid: Option<&str>,
) -> Result<Bucket, Error> {
    let resp = client_for(url, access_key, secret_key)?
        .get_bucket_info(bucket)
        .uid(uid.map(String::from))
        .build()
        .send()
        .await?;
    Ok(resp.into_bucket())
}
