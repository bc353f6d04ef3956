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

use super::AdminOpsClient;
use crate::adminops::builders::{ListBuckets, ListBucketsBldr};

impl AdminOpsClient {
    /// Creates a [`ListBuckets`] request builder to list buckets, optionally
    /// restricted to those owned by one user.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::adminops::types::AdminApi::send),
    /// which returns a [`Result`] containing a [`ListBucketsResponse`](crate::adminops::response::ListBucketsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_admin::adminops::client::AdminOpsClient;
    /// use rgw_admin::adminops::creds::StaticProvider;
    /// use rgw_admin::adminops::response::ListBucketsResponse;
    /// use rgw_admin::adminops::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "http://localhost:7480".parse().unwrap();
    ///     let client = AdminOpsClient::new(base_url, StaticProvider::new("asd", "qwe")).unwrap();
    ///     let resp: ListBucketsResponse = client
    ///         .list_buckets()
    ///         .uid(Some("testid".to_string()))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for bucket in resp.buckets() {
    ///         println!("{} owned by {}", bucket.bucket, bucket.owner);
    ///     }
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }
}
